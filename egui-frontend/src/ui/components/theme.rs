//! # Theme Configuration
//!
//! Centralized colors for the dashboard: a saffron accent over warm stone
//! neutrals. All visual styling should read from `CURRENT_THEME`.

use eframe::egui::Color32;
use shared::{AttendanceStatus, DeliveryStatus, PaymentStatus, SalaryStatus, SubscriptionStatus};

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    pub interactive: InteractiveColors,
    pub layout: LayoutColors,
    pub typography: TypographyColors,
    pub status: StatusColors,
}

/// Colors for buttons, selection and navigation
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Primary accent, used for the active nav item and primary buttons
    pub accent: Color32,
    /// Soft accent fill behind selected items
    pub accent_soft: Color32,
    pub danger: Color32,
    pub inactive_background: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub sidebar_background: Color32,
    pub page_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
}

/// Text colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    /// Text on the dark sidebar
    pub on_dark: Color32,
}

/// Badge colors by meaning
#[derive(Debug, Clone)]
pub struct StatusColors {
    pub positive: Color32,
    pub warning: Color32,
    pub negative: Color32,
    pub info: Color32,
    pub neutral: Color32,
}

pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(234, 88, 12),
        accent_soft: Color32::from_rgb(255, 237, 213),
        danger: Color32::from_rgb(220, 38, 38),
        inactive_background: Color32::from_rgb(250, 250, 249),
    },
    layout: LayoutColors {
        sidebar_background: Color32::from_rgb(28, 25, 23),
        page_background: Color32::from_rgb(245, 245, 244),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(231, 229, 228),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(41, 37, 36),
        secondary: Color32::from_rgb(120, 113, 108),
        heading: Color32::from_rgb(28, 25, 23),
        on_dark: Color32::from_rgb(214, 211, 209),
    },
    status: StatusColors {
        positive: Color32::from_rgb(22, 163, 74),
        warning: Color32::from_rgb(202, 138, 4),
        negative: Color32::from_rgb(220, 38, 38),
        info: Color32::from_rgb(37, 99, 235),
        neutral: Color32::from_rgb(120, 113, 108),
    },
};

impl Theme {
    pub fn subscription_color(&self, status: SubscriptionStatus) -> Color32 {
        match status {
            SubscriptionStatus::Active => self.status.positive,
            SubscriptionStatus::Paused => self.status.warning,
            SubscriptionStatus::Stopped => self.status.negative,
        }
    }

    pub fn delivery_color(&self, status: DeliveryStatus) -> Color32 {
        match status {
            DeliveryStatus::Delivered => self.status.positive,
            DeliveryStatus::OutForDelivery => self.status.info,
            DeliveryStatus::Pending => self.status.warning,
            DeliveryStatus::Skipped => self.status.neutral,
            DeliveryStatus::Failed => self.status.negative,
        }
    }

    pub fn payment_color(&self, status: PaymentStatus) -> Color32 {
        match status {
            PaymentStatus::Paid => self.status.positive,
            PaymentStatus::Pending => self.status.warning,
            PaymentStatus::Overdue => self.status.negative,
        }
    }

    pub fn salary_color(&self, status: SalaryStatus) -> Color32 {
        match status {
            SalaryStatus::Paid => self.status.positive,
            SalaryStatus::Pending => self.status.warning,
        }
    }

    pub fn attendance_color(&self, status: AttendanceStatus) -> Color32 {
        match status {
            AttendanceStatus::Present => self.status.positive,
            AttendanceStatus::Absent => self.status.negative,
        }
    }
}
