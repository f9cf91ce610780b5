use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a display label does not match any enum variant
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownLabelError {
    pub kind: &'static str,
    pub label: String,
}

impl fmt::Display for UnknownLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.label)
    }
}

impl std::error::Error for UnknownLabelError {}

fn parse_label<T: Copy>(
    kind: &'static str,
    variants: &[T],
    label_of: fn(&T) -> &'static str,
    input: &str,
) -> Result<T, UnknownLabelError> {
    variants
        .iter()
        .copied()
        .find(|variant| label_of(variant) == input)
        .ok_or_else(|| UnknownLabelError {
            kind,
            label: input.to_string(),
        })
}

/// Named delivery locality. Every area selector and filter uses this fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Gachibowli,
    Madhapur,
    Kukatpally,
    #[serde(rename = "Jubilee Hills")]
    JubileeHills,
    #[serde(rename = "Banjara Hills")]
    BanjaraHills,
    Kondapur,
    Manikonda,
}

impl Zone {
    /// All zones in selector order
    pub const ALL: [Zone; 7] = [
        Zone::Gachibowli,
        Zone::Madhapur,
        Zone::Kukatpally,
        Zone::JubileeHills,
        Zone::BanjaraHills,
        Zone::Kondapur,
        Zone::Manikonda,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Gachibowli => "Gachibowli",
            Zone::Madhapur => "Madhapur",
            Zone::Kukatpally => "Kukatpally",
            Zone::JubileeHills => "Jubilee Hills",
            Zone::BanjaraHills => "Banjara Hills",
            Zone::Kondapur => "Kondapur",
            Zone::Manikonda => "Manikonda",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = UnknownLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("zone", &Zone::ALL, Zone::as_str, s)
    }
}

/// Billing cadence of a subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingType {
    Monthly,
    Weekly,
    Custom,
}

impl BillingType {
    pub const ALL: [BillingType; 3] = [BillingType::Monthly, BillingType::Weekly, BillingType::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingType::Monthly => "Monthly",
            BillingType::Weekly => "Weekly",
            BillingType::Custom => "Custom",
        }
    }
}

impl fmt::Display for BillingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingType {
    type Err = UnknownLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("billing type", &BillingType::ALL, BillingType::as_str, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Stopped,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 3] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Paused,
        SubscriptionStatus::Stopped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Paused => "Paused",
            SubscriptionStatus::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = UnknownLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("subscription status", &SubscriptionStatus::ALL, SubscriptionStatus::as_str, s)
    }
}

/// Delivery status of a single order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Skipped,
    Failed,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Pending,
        DeliveryStatus::OutForDelivery,
        DeliveryStatus::Delivered,
        DeliveryStatus::Skipped,
        DeliveryStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::OutForDelivery => "Out for Delivery",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Skipped => "Skipped",
            DeliveryStatus::Failed => "Failed",
        }
    }

    /// Delivered is the only status that hides the transition buttons
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = UnknownLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("delivery status", &DeliveryStatus::ALL, DeliveryStatus::as_str, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "UPI")]
    Upi,
    Cash,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Upi => "UPI",
            PaymentMode::Cash => "Cash",
            PaymentMode::BankTransfer => "Bank Transfer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryStatus {
    Paid,
    Pending,
}

impl SalaryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryStatus::Paid => "Paid",
            SalaryStatus::Pending => "Pending",
        }
    }
}

/// A subscription offering.
/// Prices are whole currency units; there is no fractional handling anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// "P" followed by digits, immutable once assigned
    pub id: String,
    pub name: String,
    pub billing_type: BillingType,
    pub price: i64,
    pub meals_per_week: i64,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// "C" followed by digits, immutable once assigned
    pub id: String,
    pub name: String,
    pub phone: String,
    pub area: Zone,
    pub address: String,
    /// Loose reference into the plan collection; may dangle after a plan is deleted
    pub plan_id: String,
    pub status: SubscriptionStatus,
    pub next_billing_date: Option<NaiveDate>,
    pub due_amount: i64,
    pub notes: Option<String>,
}

/// One day of a driver's attendance log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Monthly attendance summary. Both counts are derived, never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days present in the current month
    pub present: u32,
    /// Working days passed
    pub total_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub vehicle_no: String,
    pub assigned_area: Zone,
    pub is_active: bool,
    pub attendance: AttendanceSummary,
    /// Insertion-ordered, at most one record per date
    pub attendance_log: Vec<AttendanceRecord>,
}

impl Driver {
    /// Recorded status for a date, if any
    pub fn attendance_on(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.attendance_log
            .iter()
            .find(|record| record.date == date)
            .map(|record| record.status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    /// Denormalized at seed time
    pub customer_name: String,
    pub area: Zone,
    pub address: String,
    pub driver_id: Option<String>,
    pub plan_name: String,
    pub status: DeliveryStatus,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// Read-only payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub mode: PaymentMode,
    pub status: PaymentStatus,
}

/// Read-only monthly payout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSalary {
    pub driver_id: String,
    pub driver_name: String,
    pub month: String,
    pub days_worked: u32,
    pub total_deliveries: u32,
    pub base_salary: i64,
    pub incentives: i64,
    pub deductions: i64,
    pub net_payable: i64,
    pub status: SalaryStatus,
    pub payout_date: Option<NaiveDate>,
}

/// Customer listing row with its cross-collection lookups already resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub plan_name: String,
    pub area: Zone,
    pub status: SubscriptionStatus,
    /// "Paid" or the formatted outstanding amount
    pub due_label: String,
    pub has_due: bool,
}

/// Order listing row with the driver reference resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: String,
    pub customer_name: String,
    pub plan_name: String,
    pub note: Option<String>,
    pub address: String,
    pub area: Zone,
    pub driver_id: Option<String>,
    pub driver_label: String,
    pub driver_initial: char,
    pub status: DeliveryStatus,
    pub can_change_status: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverCard {
    pub id: String,
    pub name: String,
    pub initial: char,
    pub vehicle_no: String,
    pub phone: String,
    pub assigned_area: Zone,
    pub is_active: bool,
    /// e.g. "22/24 Days"
    pub attendance_label: String,
    /// 0.0..=1.0, zero when no working days have passed
    pub attendance_fraction: f32,
}

/// One line of the daily attendance roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub driver_id: String,
    pub name: String,
    pub phone: String,
    pub assigned_area: Zone,
    pub status: Option<AttendanceStatus>,
}

/// Where a dashboard figure comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FigureSource {
    /// Computed from current collections
    Live,
    /// Placeholder copied from fixtures, not recomputed
    Fixture,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatFigure {
    pub title: String,
    pub value: String,
    pub subtext: String,
    pub alert: bool,
    pub source: FigureSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub active_customers: usize,
    pub total_customers: usize,
    pub todays_deliveries: usize,
    pub pending_deliveries: usize,
    /// Cards in display order
    pub cards: Vec<StatFigure>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanShare {
    pub name: String,
    pub value: u32,
}

/// Presentation constants shared by every view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub business_name: String,
    pub currency_symbol: String,
    pub unknown_plan_label: String,
    pub unknown_driver_label: String,
    pub unassigned_label: String,
    pub paid_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            business_name: "Bramhana Vantillu".to_string(),
            currency_symbol: "₹".to_string(),
            unknown_plan_label: "Unknown Plan".to_string(),
            unknown_driver_label: "Unknown Driver".to_string(),
            unassigned_label: "Unassigned".to_string(),
            paid_label: "Paid".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Whole-unit amount with the currency glyph prefix, e.g. "₹3500"
    pub fn format_currency(&self, amount: i64) -> String {
        if amount < 0 {
            format!("-{}{}", self.currency_symbol, amount.unsigned_abs())
        } else {
            format!("{}{}", self.currency_symbol, amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_labels_round_trip_through_from_str() {
        for zone in Zone::ALL {
            assert_eq!(zone.as_str().parse::<Zone>().unwrap(), zone);
        }
        assert_eq!("Jubilee Hills".parse::<Zone>().unwrap(), Zone::JubileeHills);
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        let err = "Secunderabad".parse::<Zone>().unwrap_err();
        assert_eq!(err.kind, "zone");
        assert_eq!(err.to_string(), "Unknown zone: 'Secunderabad'");
    }

    #[test]
    fn test_zone_list_has_seven_entries_in_order() {
        assert_eq!(Zone::ALL.len(), 7);
        assert_eq!(Zone::ALL[0], Zone::Gachibowli);
        assert_eq!(Zone::ALL[6], Zone::Manikonda);
    }

    #[test]
    fn test_serialized_labels_match_display_labels() {
        assert_eq!(serde_json::to_string(&DeliveryStatus::OutForDelivery).unwrap(), "\"Out for Delivery\"");
        assert_eq!(serde_json::to_string(&Zone::BanjaraHills).unwrap(), "\"Banjara Hills\"");
        assert_eq!(serde_json::to_string(&PaymentMode::BankTransfer).unwrap(), "\"Bank Transfer\"");
    }

    #[test]
    fn test_only_delivered_is_terminal() {
        let terminal: Vec<_> = DeliveryStatus::ALL.iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![&DeliveryStatus::Delivered]);
    }

    #[test]
    fn test_format_currency() {
        let config = DisplayConfig::default();
        assert_eq!(config.format_currency(3500), "₹3500");
        assert_eq!(config.format_currency(0), "₹0");
        assert_eq!(config.format_currency(-200), "-₹200");
    }

    #[test]
    fn test_attendance_on_finds_record_for_date() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        let driver = Driver {
            id: "D001".to_string(),
            name: "Ramesh Kumar".to_string(),
            phone: "7778889991".to_string(),
            vehicle_no: "TS07 HK 1234".to_string(),
            assigned_area: Zone::Kukatpally,
            is_active: true,
            attendance: AttendanceSummary::default(),
            attendance_log: vec![AttendanceRecord { date, status: AttendanceStatus::Absent }],
        };

        assert_eq!(driver.attendance_on(date), Some(AttendanceStatus::Absent));
        assert_eq!(driver.attendance_on(date.succ_opt().unwrap()), None);
    }
}
