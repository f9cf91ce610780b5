//! # UI State Module
//!
//! General UI state that is not specific to any one view.
//!
//! ## Responsibilities:
//! - User feedback messages (success and error)

/// Feedback banner state
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,

    /// Confirmation of the last successful mutation
    pub success_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.success_message = None;
        self.error_message = Some(message);
    }

    pub fn set_success(&mut self, message: String) {
        self.error_message = None;
        self.success_message = Some(message);
    }
}
