//! Age helpers.
//!
//! Thresholds (activity factor, risk) use fractional years: whole days since
//! birth divided by 365.25. The display label uses coarser day/month/year
//! bucketing and is never fed back into a threshold.

use chrono::NaiveDate;
use serde::Serialize;

/// Mean Gregorian year length used for the threshold figure.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Whole days from `birthdate` to `today`; a future birthdate counts as 0.
pub fn days_since(birthdate: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(birthdate).num_days().max(0)
}

/// Fractional age in years, used by MER and risk thresholds.
pub fn age_in_years(birthdate: NaiveDate, today: NaiveDate) -> f64 {
    days_since(birthdate, today) as f64 / DAYS_PER_YEAR
}

/// Human-readable age: "1 day", "12 days", "3 months", "2y 4m", "5 years".
pub fn describe_age(birthdate: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(birthdate).num_days().abs();

    if days <= 1 {
        return "1 day".to_string();
    }
    if days < 30 {
        return format!("{days} days");
    }
    if days < 365 {
        let months = days / 30;
        return format!("{} {}", months, plural(months, "month"));
    }

    let years = days / 365;
    let months = (days % 365) / 30;
    if months > 0 {
        format!("{years}y {months}m")
    } else {
        format!("{} {}", years, plural(years, "year"))
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{unit}s")
    } else {
        unit.to_string()
    }
}

/// Both age figures for one pet, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSummary {
    pub years: f64,
    pub label: String,
}

impl AgeSummary {
    pub fn new(birthdate: NaiveDate, today: NaiveDate) -> Self {
        Self {
            years: age_in_years(birthdate, today),
            label: describe_age(birthdate, today),
        }
    }
}
