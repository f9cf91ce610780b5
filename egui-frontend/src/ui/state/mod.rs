//! # State Module
//!
//! UI-only state of the dashboard, grouped by concern. Collection data is never
//! cached here: views read it from the backend on every frame.

pub mod drivers_state;
pub mod modal_state;
pub mod orders_state;
pub mod settings_state;
pub mod ui_state;

pub use drivers_state::{DriversState, DriversTab};
pub use modal_state::{EditorState, PendingConfirmation};
pub use orders_state::OrdersState;
pub use settings_state::SettingsDraft;
pub use ui_state::UIState;
