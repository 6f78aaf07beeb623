//! JSON test vector loader shared by the metric vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use chrono::NaiveDate;
use serde::Deserialize;

use petvitals_core::PetRecord;

#[derive(Debug, Deserialize)]
pub struct MetricVector {
    pub description: String,
    pub as_of: NaiveDate,
    pub pet: PetRecord,
    #[serde(default)]
    pub fallback_bmi: Option<f64>,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

pub fn load(name: &str) -> MetricVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap_or_else(|e| panic!("bad vector {name}: {e}"))
}
