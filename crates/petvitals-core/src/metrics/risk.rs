//! Composite disease-risk assessment.
//!
//! Points are summed from age, BMI, and the number of known conditions,
//! then bucketed into Low / Medium / High.

use chrono::NaiveDate;

use crate::age::age_in_years;
use crate::pet::{Pet, Species};

use super::bmi::body_mass_index;
use super::{Level, RiskAssessment, RiskLevel};

pub const LOW_STATUS: &str = "Low risk profile, vaccinations up to date";
pub const MEDIUM_STATUS: &str = "Monitor weight and conditions";
pub const HIGH_STATUS: &str = "Multiple medical conditions detected";
pub const UNKNOWN_STATUS: &str = "Cannot assess risk";

fn age_points(age_years: f64) -> u32 {
    if age_years > 7.0 {
        2
    } else if age_years > 3.0 {
        1
    } else {
        0
    }
}

fn bmi_points(species: Species, bmi: f64) -> u32 {
    // (obese threshold, overweight threshold), both exclusive
    let (high, elevated) = match species {
        Species::Dog => (30.0, 25.0),
        Species::Cat => (27.0, 22.0),
    };
    if bmi > high {
        3
    } else if bmi > elevated {
        1
    } else {
        0
    }
}

/// Total risk points for a pet.
///
/// BMI comes from the pet's own measurements when computable, otherwise
/// from `fallback_bmi` (a value the caller computed earlier), otherwise 0.
pub fn score(pet: &Pet, fallback_bmi: Option<f64>, today: NaiveDate) -> u32 {
    let age = pet.birthdate.map(|b| age_in_years(b, today)).unwrap_or(0.0);
    let bmi = body_mass_index(pet).or(fallback_bmi).unwrap_or(0.0);
    let conditions = u32::try_from(pet.conditions.len()).unwrap_or(u32::MAX);

    age_points(age)
        .saturating_add(bmi_points(pet.species, bmi))
        .saturating_add(conditions)
}

pub fn classify(score: u32) -> RiskAssessment {
    let (level, severity, status) = match score {
        0 | 1 => (RiskLevel::Low, Level::Normal, LOW_STATUS),
        2 | 3 => (RiskLevel::Medium, Level::Warning, MEDIUM_STATUS),
        _ => (RiskLevel::High, Level::Danger, HIGH_STATUS),
    };
    RiskAssessment {
        level,
        severity,
        status,
        score,
    }
}

pub fn assess(pet: Option<&Pet>, fallback_bmi: Option<f64>, today: NaiveDate) -> RiskAssessment {
    let Some(pet) = pet else {
        return RiskAssessment {
            level: RiskLevel::Unknown,
            severity: Level::Info,
            status: UNKNOWN_STATUS,
            score: 0,
        };
    };
    let points = score(pet, fallback_bmi, today);
    tracing::trace!(species = %pet.species, points, "risk scored");
    classify(points)
}
