//! Shape, color and manufacturer filter form state.
//!
//! The basic form sends a single `color_class1`; the advanced form sends
//! repeated `color`. They are separate filters on purpose and are not merged.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::util::catalog;
use crate::util::query::QueryParams;

/// Shape/color quick-search form on the home page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicFilters {
    pub item_name: String,
    pub drug_shape: Option<String>,
    pub color_class1: Option<String>,
}

impl BasicFilters {
    /// Make `shape` the single active shape.
    pub fn select_shape(&mut self, shape: &str) {
        self.drug_shape = Some(shape.to_owned());
    }

    /// Make `color` the single active color.
    pub fn select_color(&mut self, color: &str) {
        self.color_class1 = Some(color.to_owned());
    }

    pub fn is_shape_active(&self, shape: &str) -> bool {
        self.drug_shape.as_deref() == Some(shape)
    }

    pub fn is_color_active(&self, color: &str) -> bool {
        self.color_class1.as_deref() == Some(color)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Form entries in field order, blank ones included.
    pub fn form_entries(&self) -> QueryParams {
        [
            ("item_name", self.item_name.as_str()),
            ("drug_shape", self.drug_shape.as_deref().unwrap_or_default()),
            ("color_class1", self.color_class1.as_deref().unwrap_or_default()),
        ]
        .into_iter()
        .collect()
    }
}

/// Advanced search form.
///
/// A shape click only picks `pending_shape`; `confirm_shape` commits it to
/// `drug_shape` and the preview image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvancedFilters {
    pub item_name: String,
    pub entp_name: String,
    /// Dropdown selection; empty means the placeholder option.
    pub entp_choice: String,
    pub drug_shape: Option<String>,
    pub pending_shape: Option<String>,
    pub colors: Vec<String>,
    pub print_front: String,
    pub print_back: String,
}

impl AdvancedFilters {
    /// Prefill the form from the current result URL.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let params = QueryParams::parse(query);
        let text = |key: &str| params.get(key).unwrap_or_default().to_owned();

        let drug_shape = params
            .get("drug_shape")
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        let entp_name = text("entp_name");
        let entp_choice = if catalog::is_known_manufacturer(&entp_name) {
            entp_name.clone()
        } else {
            String::new()
        };
        let mut colors: Vec<String> = Vec::new();
        for color in params.get_all("color") {
            if catalog::is_known_color(color) && !colors.iter().any(|c| c == color) {
                colors.push(color.to_owned());
            }
        }

        Self {
            item_name: text("item_name"),
            entp_name,
            entp_choice,
            pending_shape: drug_shape.clone(),
            drug_shape,
            colors,
            print_front: text("print_front"),
            print_back: text("print_back"),
        }
    }

    pub fn pick_shape(&mut self, shape: &str) {
        self.pending_shape = Some(shape.to_owned());
    }

    /// Commit the pending shape. No-op when nothing has been picked.
    pub fn confirm_shape(&mut self) -> bool {
        match &self.pending_shape {
            Some(shape) if self.drug_shape.as_ref() != Some(shape) => {
                self.drug_shape = Some(shape.clone());
                true
            }
            _ => false,
        }
    }

    pub fn is_shape_pending(&self, shape: &str) -> bool {
        self.pending_shape.as_deref() == Some(shape)
    }

    pub fn preview_image(&self) -> &'static str {
        catalog::shape_image(self.drug_shape.as_deref())
    }

    /// Check or uncheck one color box.
    pub fn toggle_color(&mut self, color: &str, checked: bool) {
        let present = self.colors.iter().any(|c| c == color);
        if checked && !present {
            self.colors.push(color.to_owned());
        } else if !checked && present {
            self.colors.retain(|c| c != color);
        }
    }

    pub fn is_color_checked(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Dropdown change: a real option is copied into the free-text field,
    /// the placeholder leaves the field alone.
    pub fn choose_manufacturer(&mut self, value: &str) {
        value.clone_into(&mut self.entp_choice);
        if !value.is_empty() {
            value.clone_into(&mut self.entp_name);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Form entries in field order, blank ones included.
    pub fn form_entries(&self) -> QueryParams {
        let mut entries: QueryParams = [
            ("item_name", self.item_name.as_str()),
            ("entp_name", self.entp_name.as_str()),
            ("drug_shape", self.drug_shape.as_deref().unwrap_or_default()),
        ]
        .into_iter()
        .collect();
        entries.extend(self.colors.iter().map(|c| ("color", c.as_str())));
        entries.extend([
            ("print_front", self.print_front.as_str()),
            ("print_back", self.print_back.as_str()),
        ]);
        entries
    }
}
