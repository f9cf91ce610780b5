//! # UI Module
//!
//! egui shell of the admin dashboard.
//!
//! ## Module Organization:
//! - `app_state` - The state aggregate and sidebar destinations
//! - `actions` - Named actions and their dispatch to the backend
//! - `app_coordinator` - The eframe update loop
//! - `components` - One file per view or dialog, plus theme and styling
//! - `state` - UI-only state grouped by concern

pub mod actions;
pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::*;
