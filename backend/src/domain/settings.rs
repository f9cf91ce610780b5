//! System settings shown on the Settings view. Read-only: the view edits a local draft.

use serde::{Deserialize, Serialize};
use shared::Zone;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkingDays {
    MonToSat,
    MonToSun,
    MonToFri,
}

impl WorkingDays {
    pub const ALL: [WorkingDays; 3] = [WorkingDays::MonToSat, WorkingDays::MonToSun, WorkingDays::MonToFri];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkingDays::MonToSat => "Mon - Sat",
            WorkingDays::MonToSun => "Mon - Sun",
            WorkingDays::MonToFri => "Mon - Fri",
        }
    }
}

impl fmt::Display for WorkingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub delivery_zones: Vec<Zone>,
    pub default_gst_percent: u32,
    pub working_days: WorkingDays,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            delivery_zones: Zone::ALL.to_vec(),
            default_gst_percent: 5,
            working_days: WorkingDays::MonToSat,
        }
    }
}

impl SystemSettings {
    /// Zones rendered as chips on the settings page
    pub fn featured_zones(&self) -> &[Zone] {
        let shown = self.delivery_zones.len().min(4);
        &self.delivery_zones[..shown]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SystemSettings::default();
        assert_eq!(settings.default_gst_percent, 5);
        assert_eq!(settings.working_days, WorkingDays::MonToSat);
        assert_eq!(settings.delivery_zones.len(), 7);
    }

    #[test]
    fn test_featured_zones_are_first_four() {
        let settings = SystemSettings::default();
        assert_eq!(
            settings.featured_zones(),
            &[Zone::Gachibowli, Zone::Madhapur, Zone::Kukatpally, Zone::JubileeHills]
        );
    }
}
