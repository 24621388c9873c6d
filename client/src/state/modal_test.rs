use super::*;

#[test]
fn image_modal_default_is_closed() {
    assert!(!ImageModalState::default().is_open());
}

#[test]
fn open_shows_image_and_close_hides_it() {
    let mut modal = ImageModalState::default();
    assert!(modal.open("https://img.example/pill.jpg"));
    assert!(modal.is_open());
    assert_eq!(modal.image_url.as_deref(), Some("https://img.example/pill.jpg"));
    modal.close();
    assert!(!modal.is_open());
}

#[test]
fn open_replaces_previous_image() {
    let mut modal = ImageModalState::default();
    modal.open("/a.png");
    modal.open("/b.png");
    assert_eq!(modal.image_url.as_deref(), Some("/b.png"));
}

#[test]
fn open_blank_url_is_ignored() {
    let mut modal = ImageModalState::default();
    assert!(!modal.open("  "));
    assert!(!modal.is_open());
}
