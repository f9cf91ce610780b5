//! # Forms
//!
//! String-keyed form data to typed domain commands, one module per entity kind.
//! Each kind module exposes `parse`, `prefill` and `blank` plus its field names.

pub mod customer_form;
pub mod driver_form;
pub mod entity_editor;
pub mod form_data;
pub mod plan_form;

pub use entity_editor::{save_entity, EntityKind, SavedEntity};
pub use form_data::{FormData, FormError, DATE_FORMAT};
