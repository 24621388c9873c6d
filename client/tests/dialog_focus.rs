//! Dialog focus: keyboard-driven dialogs must take focus when they open.
//!
//! Enter/Escape handlers sit on elements inside the dialog, so a dialog that
//! opens without focusing one of them ignores the keyboard until clicked.

use std::fs;

/// Components with keyboard handlers that are mounted on demand.
const KEYBOARD_DIALOGS: &[&str] = &["src/components/term_entry_modal.rs", "src/components/image_modal.rs"];

fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

#[test]
fn keyboard_dialogs_autofocus_an_element() {
    for path in KEYBOARD_DIALOGS {
        let source = read(path);
        assert!(source.contains("on:keydown"), "{path} no longer handles keys; update this list");
        assert!(source.contains("autofocus=true"), "{path} opens without focusing an element");
    }
}

#[test]
fn term_input_is_the_focused_element() {
    let source = read("src/components/term_entry_modal.rs");
    let input = source
        .find("<input")
        .and_then(|start| source[start..].find("/>").map(|end| &source[start..start + end]))
        .unwrap_or_else(|| panic!("term entry input not found"));
    assert!(input.contains("on:keydown=on_keydown"));
    assert!(input.contains("autofocus=true"));
}
