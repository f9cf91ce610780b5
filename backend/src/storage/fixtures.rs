//! Static seed data the in-memory store starts from.

use chrono::NaiveDate;
use shared::{
    AttendanceSummary, BillingType, Customer, DeliveryStatus, Driver, DriverSalary, Order,
    PaymentMode, PaymentStatus, Plan, PlanShare, RevenuePoint, SalaryStatus, SubscriptionStatus,
    Transaction, Zone,
};

/// Label of the payout period the salary fixtures belong to
pub const SALARY_PERIOD_LABEL: &str = "September 2023";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "P001".to_string(),
            name: "Standard Brahmin Thali".to_string(),
            billing_type: BillingType::Monthly,
            price: 3500,
            meals_per_week: 6,
            description: "Rice, Dal, Fry, Sambhar, Curd (Pure Veg)".to_string(),
            is_active: true,
        },
        Plan {
            id: "P002".to_string(),
            name: "Premium Vantillu Special".to_string(),
            billing_type: BillingType::Monthly,
            price: 4500,
            meals_per_week: 6,
            description: "Standard + Sweet + Roti + Special Curry".to_string(),
            is_active: true,
        },
        Plan {
            id: "P003".to_string(),
            name: "Millet Health Box".to_string(),
            billing_type: BillingType::Weekly,
            price: 1200,
            meals_per_week: 5,
            description: "Millet Rice, Leafy Curry, Buttermilk".to_string(),
            is_active: true,
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "C1001".to_string(),
            name: "Srinivas Rao".to_string(),
            phone: "9876543210".to_string(),
            area: Zone::Kukatpally,
            address: "Flat 302, Sai Residency, KPHB Phase 1".to_string(),
            plan_id: "P001".to_string(),
            status: SubscriptionStatus::Active,
            next_billing_date: Some(date(2023, 11, 1)),
            due_amount: 0,
            notes: Some("No Garlic on Saturdays".to_string()),
        },
        Customer {
            id: "C1002".to_string(),
            name: "Lakshmi Priya".to_string(),
            phone: "9898989898".to_string(),
            area: Zone::Gachibowli,
            address: "Villa 45, My Home Avatar".to_string(),
            plan_id: "P002".to_string(),
            status: SubscriptionStatus::Active,
            next_billing_date: Some(date(2023, 11, 5)),
            due_amount: 4500,
            notes: Some("Deliver before 12:30 PM".to_string()),
        },
        Customer {
            id: "C1003".to_string(),
            name: "Venkatesh Iyer".to_string(),
            phone: "9123456789".to_string(),
            area: Zone::Madhapur,
            address: "H.No 1-98, Ayyappa Society".to_string(),
            plan_id: "P001".to_string(),
            status: SubscriptionStatus::Paused,
            next_billing_date: Some(date(2023, 11, 10)),
            due_amount: 0,
            notes: Some("Out of station till 30th".to_string()),
        },
        Customer {
            id: "C1004".to_string(),
            name: "Ananya Reddy".to_string(),
            phone: "8887776665".to_string(),
            area: Zone::JubileeHills,
            address: "Plot 55, Road No 10".to_string(),
            plan_id: "P003".to_string(),
            status: SubscriptionStatus::Active,
            next_billing_date: Some(date(2023, 10, 28)),
            due_amount: 1200,
            notes: None,
        },
    ]
}

pub fn drivers() -> Vec<Driver> {
    let driver = |id: &str, name: &str, phone: &str, vehicle_no: &str, area: Zone, present: u32| Driver {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        vehicle_no: vehicle_no.to_string(),
        assigned_area: area,
        is_active: true,
        attendance: AttendanceSummary { present, total_days: 24 },
        attendance_log: Vec::new(),
    };

    vec![
        driver("D001", "Ramesh Kumar", "7778889991", "TS07 HK 1234", Zone::Kukatpally, 22),
        driver("D002", "Mallesh Yadav", "6665554443", "TS08 GH 5678", Zone::Gachibowli, 24),
        driver("D003", "Krishna Murthy", "9990001112", "TS09 JJ 9090", Zone::Madhapur, 20),
    ]
}

/// Today's delivery orders, all dated `today`
pub fn orders(today: NaiveDate) -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".to_string(),
            customer_id: "C1001".to_string(),
            customer_name: "Srinivas Rao".to_string(),
            area: Zone::Kukatpally,
            address: "Flat 302, Sai Residency, KPHB Phase 1".to_string(),
            driver_id: Some("D001".to_string()),
            plan_name: "Standard Brahmin Thali".to_string(),
            status: DeliveryStatus::Delivered,
            date: today,
            note: None,
        },
        Order {
            id: "ORD-002".to_string(),
            customer_id: "C1002".to_string(),
            customer_name: "Lakshmi Priya".to_string(),
            area: Zone::Gachibowli,
            address: "Villa 45, My Home Avatar".to_string(),
            driver_id: Some("D002".to_string()),
            plan_name: "Premium Vantillu Special".to_string(),
            status: DeliveryStatus::OutForDelivery,
            date: today,
            note: Some("Leave at security".to_string()),
        },
        Order {
            id: "ORD-003".to_string(),
            customer_id: "C1004".to_string(),
            customer_name: "Ananya Reddy".to_string(),
            area: Zone::JubileeHills,
            address: "Plot 55, Road No 10".to_string(),
            driver_id: None,
            plan_name: "Millet Health Box".to_string(),
            status: DeliveryStatus::Pending,
            date: today,
            note: None,
        },
    ]
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TXN001".to_string(),
            customer_id: "C1001".to_string(),
            customer_name: "Srinivas Rao".to_string(),
            amount: 3500,
            date: date(2023, 10, 1),
            mode: PaymentMode::Upi,
            status: PaymentStatus::Paid,
        },
        Transaction {
            id: "TXN002".to_string(),
            customer_id: "C1002".to_string(),
            customer_name: "Lakshmi Priya".to_string(),
            amount: 4500,
            date: date(2023, 10, 5),
            mode: PaymentMode::BankTransfer,
            status: PaymentStatus::Paid,
        },
        Transaction {
            id: "TXN003".to_string(),
            customer_id: "C1004".to_string(),
            customer_name: "Ananya Reddy".to_string(),
            amount: 1200,
            date: date(2023, 10, 21),
            mode: PaymentMode::Upi,
            status: PaymentStatus::Pending,
        },
    ]
}

pub fn salaries() -> Vec<DriverSalary> {
    vec![
        DriverSalary {
            driver_id: "D001".to_string(),
            driver_name: "Ramesh Kumar".to_string(),
            month: "September".to_string(),
            days_worked: 25,
            total_deliveries: 450,
            base_salary: 12000,
            incentives: 2000,
            deductions: 0,
            net_payable: 14000,
            status: SalaryStatus::Paid,
            payout_date: Some(date(2023, 10, 5)),
        },
        DriverSalary {
            driver_id: "D002".to_string(),
            driver_name: "Mallesh Yadav".to_string(),
            month: "September".to_string(),
            days_worked: 26,
            total_deliveries: 500,
            base_salary: 12000,
            incentives: 2500,
            deductions: 500,
            net_payable: 14000,
            status: SalaryStatus::Pending,
            payout_date: None,
        },
    ]
}

/// Revenue series fed to the dashboard chart. Static, not derived from transactions.
pub fn revenue_series() -> Vec<RevenuePoint> {
    [("Jan", 40000), ("Feb", 45000), ("Mar", 42000), ("Apr", 48000), ("May", 55000), ("Jun", 60000)]
        .into_iter()
        .map(|(month, revenue)| RevenuePoint {
            month: month.to_string(),
            revenue,
        })
        .collect()
}

/// Plan share series fed to the dashboard chart. Static, not derived from customers.
pub fn plan_distribution() -> Vec<PlanShare> {
    [("Standard Thali", 45), ("Premium Special", 30), ("Millet Box", 25)]
        .into_iter()
        .map(|(name, value)| PlanShare {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Dashboard placeholder figures: (value, subtext)
pub const MONTHLY_REVENUE_FIGURE: (&str, &str) = ("₹1,45,000", "Target: ₹1.5L");
pub const PENDING_PAYMENTS_FIGURE: (&str, &str) = ("₹24,500", "5 Customers Overdue");
