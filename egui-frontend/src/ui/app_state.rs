//! # App State Module
//!
//! Central state of the admin dashboard.
//!
//! ## Key Types:
//! - `MainView` - Sidebar destinations
//! - `AdminDashboardApp` - The single state aggregate owned by the eframe runner
//!
//! ## Purpose:
//! Collections live in the backend and are read fresh on every frame; this
//! struct only holds UI state (active view, the shared editor dialog, the
//! pending delete, filters and drafts) plus the queue of actions raised by
//! the views during the current frame. Views never mutate the backend
//! directly: they queue an `AppAction` and the coordinator dispatches it
//! after rendering.

use log::info;

use backend::Backend;

use crate::ui::actions::AppAction;
use crate::ui::state::{DriversState, EditorState, OrdersState, PendingConfirmation, SettingsDraft, UIState};

/// Destinations in the sidebar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    Overview,
    Customers,
    Plans,
    Orders,
    Drivers,
    Finances,
    Settings,
}

impl MainView {
    pub const ALL: [MainView; 7] = [
        MainView::Overview,
        MainView::Customers,
        MainView::Plans,
        MainView::Orders,
        MainView::Drivers,
        MainView::Finances,
        MainView::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainView::Overview => "Overview",
            MainView::Customers => "Customers",
            MainView::Plans => "Subscription Plans",
            MainView::Orders => "Orders & Delivery",
            MainView::Drivers => "Drivers & Salary",
            MainView::Finances => "Finances",
            MainView::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MainView::Overview => "📊",
            MainView::Customers => "👥",
            MainView::Plans => "🍱",
            MainView::Orders => "🚚",
            MainView::Drivers => "🛵",
            MainView::Finances => "💰",
            MainView::Settings => "⚙",
        }
    }
}

/// Main application struct for the admin dashboard
pub struct AdminDashboardApp {
    pub backend: Backend,
    pub current_view: MainView,

    pub ui: UIState,

    // Dialogs
    pub editor: Option<EditorState>,
    pub pending_confirmation: Option<PendingConfirmation>,

    // Per-view state
    pub orders: OrdersState,
    pub drivers: DriversState,
    pub settings_draft: SettingsDraft,

    /// Actions raised while rendering the current frame
    pub pending_actions: Vec<AppAction>,
}

impl AdminDashboardApp {
    /// Create the app over a freshly seeded backend
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("🚀 Initializing AdminDashboardApp");
        Self::with_backend(Backend::new())
    }

    /// Create the app over an existing backend
    pub fn with_backend(backend: Backend) -> Self {
        let today = backend.today();
        let settings_draft = SettingsDraft::from_settings(&backend.settings);

        Self {
            backend,
            current_view: MainView::Overview,
            ui: UIState::new(),
            editor: None,
            pending_confirmation: None,
            orders: OrdersState::new(),
            drivers: DriversState::new(today),
            settings_draft,
            pending_actions: Vec::new(),
        }
    }

    /// Queue an action for dispatch at the end of the frame
    pub fn queue(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    pub fn clear_messages(&mut self) {
        self.ui.clear_messages();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_labels_in_order() {
        let labels: Vec<_> = MainView::ALL.iter().map(MainView::label).collect();
        assert_eq!(
            labels,
            vec![
                "Overview",
                "Customers",
                "Subscription Plans",
                "Orders & Delivery",
                "Drivers & Salary",
                "Finances",
                "Settings"
            ]
        );
    }
}
