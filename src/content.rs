/// Shown in the content area whenever no real text is stored. Never persisted
/// and never returned from [`PromptContent::content`].
pub const PLACEHOLDER_TEXT: &str = "Enter your prompt here...";

/// The stored text plus the placeholder flag. The buffer only ever holds real
/// user text; the placeholder is purely a display treatment.
#[derive(Debug, Default)]
pub struct PromptContent {
    text: String,
    placeholder_active: bool,
}

impl PromptContent {
    pub fn from_saved(saved: &str) -> Self {
        Self {
            text: saved.to_string(),
            placeholder_active: saved.is_empty(),
        }
    }

    /// The real content. Empty while the placeholder shows; this is the only
    /// accessor used for copy and persistence.
    pub fn content(&self) -> &str {
        if self.placeholder_active {
            ""
        } else {
            &self.text
        }
    }

    pub fn has_real_content(&self) -> bool {
        !self.placeholder_active && !self.text.is_empty()
    }

    pub fn placeholder_active(&self) -> bool {
        self.placeholder_active
    }

    /// Mutable binding for the text widget.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Call after the widget reported an edit so typing immediately drops the
    /// placeholder treatment.
    pub fn sync_after_edit(&mut self) {
        if !self.text.is_empty() {
            self.placeholder_active = false;
        }
    }

    /// Focus entered the content area: hide the placeholder and restore the
    /// regular text color.
    pub fn focus_gained(&mut self) {
        self.placeholder_active = false;
    }

    /// Focus left the content area: if nothing real remains, drop it and show
    /// the placeholder again.
    pub fn focus_lost(&mut self) {
        if self.text.trim().is_empty() {
            self.text.clear();
            self.placeholder_active = true;
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.placeholder_active = true;
    }

    /// Paste-and-replace the whole buffer.
    pub fn replace(&mut self, text: String) {
        self.placeholder_active = text.is_empty();
        self.text = text;
    }
}
