//! Metabolizable Energy Requirement (daily kcal).
//!
//! ```text
//! RER = 70 * kg^0.75      (kg < 2)
//! RER = 30 * kg + 70      (otherwise)
//! MER = round(RER * activity_factor)
//! ```

use chrono::NaiveDate;

use crate::age::age_in_years;
use crate::pet::Pet;

use super::{Level, MetricResult, MetricValue};

/// Below this weight the allometric RER formula is used.
pub const SMALL_PET_KG: f64 = 2.0;

/// Moderate activity; also used when the birthdate is unknown.
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.6;
/// Under one year.
pub const GROWING_ACTIVITY_FACTOR: f64 = 2.0;
/// Over seven years.
pub const SENIOR_ACTIVITY_FACTOR: f64 = 1.4;

/// Resting Energy Requirement in kcal/day.
pub fn resting_energy(weight_kg: f64) -> f64 {
    if weight_kg < SMALL_PET_KG {
        70.0 * weight_kg.powf(0.75)
    } else {
        30.0 * weight_kg + 70.0
    }
}

/// Activity factor for an age in years; `None` (unknown age) is moderate.
pub fn activity_factor(age_years: Option<f64>) -> f64 {
    match age_years {
        Some(age) if age < 1.0 => GROWING_ACTIVITY_FACTOR,
        Some(age) if age > 7.0 => SENIOR_ACTIVITY_FACTOR,
        _ => DEFAULT_ACTIVITY_FACTOR,
    }
}

/// Always returns a result; a missing (or non-finite, negative) weight
/// yields an error-level `NaN`.
pub fn compute(pet: &Pet, today: NaiveDate) -> MetricResult {
    let Some(weight) = pet.weight.filter(|w| w.is_finite() && *w >= 0.0) else {
        return MetricResult::new(MetricValue::Number(f64::NAN), "Error", Level::Error);
    };

    let rer = resting_energy(weight);
    let factor = activity_factor(pet.birthdate.map(|b| age_in_years(b, today)));
    let mer = (rer * factor).round();
    tracing::trace!(weight, rer, factor, mer, "mer computed");

    MetricResult::new(MetricValue::Number(mer), "Daily requirement", Level::Info)
}
