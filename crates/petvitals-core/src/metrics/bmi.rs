//! Body Mass Index.
//!
//! `bmi = weight_kg / (height_cm / 100)^2`, classified against a
//! per-species band table. Each band is closed at its lower bound, so a dog
//! at exactly 18.5 is "Healthy Weight".

use crate::pet::{Pet, Species};

use super::{Level, MetricResult, MetricValue};

/// Upper (exclusive) bounds of the underweight, healthy and overweight bands.
#[derive(Debug, Clone, Copy)]
pub struct BmiBands {
    pub underweight_below: f64,
    pub healthy_below: f64,
    pub overweight_below: f64,
}

pub const DOG_BANDS: BmiBands = BmiBands {
    underweight_below: 18.5,
    healthy_below: 25.0,
    overweight_below: 30.0,
};

pub const CAT_BANDS: BmiBands = BmiBands {
    underweight_below: 16.0,
    healthy_below: 22.0,
    overweight_below: 27.0,
};

pub fn bands(species: Species) -> BmiBands {
    match species {
        Species::Dog => DOG_BANDS,
        Species::Cat => CAT_BANDS,
    }
}

/// Raw BMI, or `None` when weight or height is missing or height is zero.
///
/// Non-finite or negative measurements are treated as missing; `Pet` fields
/// are public, so values built outside `PetRecord` conversion land here unchecked.
pub fn body_mass_index(pet: &Pet) -> Option<f64> {
    let weight = pet.weight.filter(|w| w.is_finite() && *w >= 0.0)?;
    let height = pet.height.filter(|h| h.is_finite() && *h > 0.0)?;
    let height_m = height / 100.0;
    Some(weight / (height_m * height_m))
}

/// Status label and severity for a BMI value.
pub fn classify(species: Species, bmi: f64) -> (&'static str, Level) {
    let b = bands(species);
    if bmi < b.underweight_below {
        ("Underweight", Level::Warning)
    } else if bmi < b.healthy_below {
        ("Healthy Weight", Level::Normal)
    } else if bmi < b.overweight_below {
        ("Overweight", Level::Warning)
    } else {
        ("Obese", Level::Danger)
    }
}

/// One decimal place with ties rounded away from zero (18.25 -> "18.3").
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

pub fn compute(pet: &Pet) -> Option<MetricResult> {
    let bmi = body_mass_index(pet)?;
    let (status, level) = classify(pet.species, bmi);
    tracing::trace!(species = %pet.species, bmi, status, "bmi classified");
    Some(MetricResult::new(
        MetricValue::Text(one_decimal(bmi)),
        status,
        level,
    ))
}
