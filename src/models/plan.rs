use chrono::NaiveDate;
use serde::Serialize;

/// Subscription plan a user is on, with its billing details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDetails {
    /// Plan tier (e.g., "Basic", "Standard", "Premium")
    pub plan: String,
    /// Total paid to date, in dollars
    pub amount_paid: f64,
    pub perks: String,
    pub next_payment_date: NaiveDate,
    pub device_type: String,
}
