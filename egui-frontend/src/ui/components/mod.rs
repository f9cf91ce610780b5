//! # UI Components Module
//!
//! One module per view or dialog. Each adds `render_*` methods to
//! `AdminDashboardApp`; none of them mutates the backend, they queue actions.
//!
//! ## Module Organization:
//! - `theme` / `styling` - Palette, global style and shared widgets
//! - `sidebar` / `header` - Navigation and the top bar
//! - `*_view` - The seven main views
//! - `entity_modal` / `confirm_dialog` - The shared editor and delete prompt

pub mod confirm_dialog;
pub mod customers_view;
pub mod dashboard_view;
pub mod drivers_view;
pub mod entity_modal;
pub mod finances_view;
pub mod header;
pub mod orders_view;
pub mod plans_view;
pub mod settings_view;
pub mod sidebar;
pub mod styling;
pub mod theme;

pub use styling::{card_frame, setup_admin_style, status_badge};
pub use theme::*;
