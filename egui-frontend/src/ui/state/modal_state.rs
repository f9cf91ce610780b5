//! # Modal State Module
//!
//! State of the two dialogs the shell can show: the shared entity editor and
//! the delete confirmation.
//!
//! ## Responsibilities:
//! - Which entity kind the editor is open for, and whether it edits or creates
//! - The in-progress form values and the last submission error
//! - The delete awaiting confirmation
//!
//! Only one editor exists; opening it for another entity replaces its state.

use backend::io::forms::{EntityKind, FormData};

/// Open entity editor
#[derive(Debug, Clone)]
pub struct EditorState {
    pub kind: EntityKind,
    /// Id of the entity being edited; None when creating
    pub editing_id: Option<String>,
    pub form: FormData,
    /// Set when the last submission was rejected; the dialog stays open
    pub error: Option<String>,
}

impl EditorState {
    pub fn new(kind: EntityKind, editing_id: Option<String>, form: FormData) -> Self {
        Self {
            kind,
            editing_id,
            form,
            error: None,
        }
    }

    pub fn title(&self) -> String {
        self.kind.dialog_title(self.editing_id.is_some())
    }
}

/// Delete awaiting the user's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub kind: EntityKind,
    pub id: String,
}

impl PendingConfirmation {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    /// Prompt shown in the confirmation dialog
    pub fn prompt(&self) -> &'static str {
        match self.kind {
            EntityKind::Customer => "Are you sure you want to delete this customer?",
            EntityKind::Plan => "Are you sure you want to delete this plan?",
            EntityKind::Driver => "Delete this driver?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_are_kind_specific() {
        assert_eq!(
            PendingConfirmation::new(EntityKind::Customer, "C1001").prompt(),
            "Are you sure you want to delete this customer?"
        );
        assert_eq!(
            PendingConfirmation::new(EntityKind::Plan, "P001").prompt(),
            "Are you sure you want to delete this plan?"
        );
        assert_eq!(PendingConfirmation::new(EntityKind::Driver, "D001").prompt(), "Delete this driver?");
    }

    #[test]
    fn test_editor_title_follows_mode() {
        let creating = EditorState::new(EntityKind::Plan, None, FormData::new());
        let editing = EditorState::new(EntityKind::Plan, Some("P001".to_string()), FormData::new());
        assert_eq!(creating.title(), "Add New plan");
        assert_eq!(editing.title(), "Edit plan");
    }
}
