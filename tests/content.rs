use prompt_overlay::content::{PromptContent, PLACEHOLDER_TEXT};

#[test]
fn empty_saved_text_shows_the_placeholder() {
    let content = PromptContent::from_saved("");
    assert!(content.placeholder_active());
    assert_eq!(content.content(), "");
    assert!(!content.has_real_content());
}

#[test]
fn saved_text_restores_without_the_placeholder() {
    let content = PromptContent::from_saved("remember the port numbers");
    assert!(!content.placeholder_active());
    assert_eq!(content.content(), "remember the port numbers");
    assert!(content.has_real_content());
}

#[test]
fn the_placeholder_is_never_reported_as_content() {
    let content = PromptContent::from_saved("");
    assert!(content.placeholder_active());
    assert_ne!(content.content(), PLACEHOLDER_TEXT);
}

#[test]
fn focus_gained_hides_the_placeholder() {
    let mut content = PromptContent::from_saved("");
    content.focus_gained();
    assert!(!content.placeholder_active());
}

#[test]
fn focus_lost_with_only_whitespace_reverts_to_the_placeholder() {
    let mut content = PromptContent::from_saved("");
    content.focus_gained();
    content.buffer_mut().push_str("   \n\t");
    content.sync_after_edit();
    content.focus_lost();

    assert!(content.placeholder_active());
    assert_eq!(content.content(), "");
    assert!(content.buffer_mut().is_empty());
}

#[test]
fn focus_lost_keeps_real_text() {
    let mut content = PromptContent::from_saved("");
    content.focus_gained();
    content.buffer_mut().push_str("draft");
    content.sync_after_edit();
    content.focus_lost();

    assert!(!content.placeholder_active());
    assert_eq!(content.content(), "draft");
}

#[test]
fn clear_always_restores_the_placeholder() {
    let mut content = PromptContent::from_saved("something");
    content.clear();
    assert!(content.placeholder_active());
    assert_eq!(content.content(), "");
}

#[test]
fn replace_swaps_the_whole_buffer() {
    let mut content = PromptContent::from_saved("old");
    content.replace("new text".to_string());
    assert_eq!(content.content(), "new text");

    content.replace(String::new());
    assert!(content.placeholder_active());
    assert_eq!(content.content(), "");
}
