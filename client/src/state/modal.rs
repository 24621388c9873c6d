#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Image overlay for result thumbnails. Shown while `image_url` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageModalState {
    pub image_url: Option<String>,
}

impl ImageModalState {
    /// Show `url`. Blank URLs are ignored.
    pub fn open(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        self.image_url = Some(url.to_owned());
        true
    }

    pub fn close(&mut self) {
        self.image_url = None;
    }

    pub fn is_open(&self) -> bool {
        self.image_url.is_some()
    }
}
