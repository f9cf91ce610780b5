//! # Drivers State Module
//!
//! Selected tab and roster date of the drivers view.

use chrono::NaiveDate;

/// Tabs of the drivers view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriversTab {
    #[default]
    List,
    Attendance,
    Salaries,
}

impl DriversTab {
    pub const ALL: [DriversTab; 3] = [DriversTab::List, DriversTab::Attendance, DriversTab::Salaries];

    pub fn label(&self) -> &'static str {
        match self {
            DriversTab::List => "Drivers List",
            DriversTab::Attendance => "Daily Attendance",
            DriversTab::Salaries => "Salary & Payouts",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DriversState {
    pub tab: DriversTab,
    /// Date the attendance roster shows and records against
    pub attendance_date: NaiveDate,
}

impl DriversState {
    /// Start on the list tab with the roster at `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            tab: DriversTab::default(),
            attendance_date: today,
        }
    }
}
