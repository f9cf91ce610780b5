//! # Settings State Module
//!
//! View-local draft of the system settings. Saving acknowledges the draft but
//! writes nothing back to the backend.

use backend::domain::settings::{SystemSettings, WorkingDays};

#[derive(Debug, Clone)]
pub struct SettingsDraft {
    pub default_gst_text: String,
    pub working_days: WorkingDays,
}

impl SettingsDraft {
    pub fn from_settings(settings: &SystemSettings) -> Self {
        Self {
            default_gst_text: settings.default_gst_percent.to_string(),
            working_days: settings.working_days,
        }
    }
}
