//! # IO Module
//!
//! Boundary between the user interface and the domain services.
//!
//! The editor dialog hands over submitted fields as a name to string mapping.
//! `forms` parses that mapping into the typed commands the domain expects and
//! produces the prefilled mapping when an existing entity is edited.
//!
//! ## Key Responsibilities
//!
//! - **Parsing**: required text, integers, ISO dates and enum labels
//! - **Error Translation**: every parse failure becomes a `FormError` naming the field
//! - **Dispatch**: one entry point saves any entity kind through its service

pub mod forms;

pub use forms::{EntityKind, FormData, FormError, SavedEntity};
