//! Health report request payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body posted to the reports endpoint when a health report is requested.
///
/// `bmi_status` carries the raw, unrounded BMI, or 0 when the pet's
/// measurements do not allow one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub pet_id: i64,
    pub bmi_status: f64,
    pub date: NaiveDate,
}

impl ReportDraft {
    pub fn new(pet_id: i64, bmi: Option<f64>, date: NaiveDate) -> Self {
        Self {
            pet_id,
            bmi_status: bmi.unwrap_or(0.0),
            date,
        }
    }
}
