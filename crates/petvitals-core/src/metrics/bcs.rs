//! Body Condition Score (1-9, 5 ideal), estimated from BMI.

use crate::pet::{Pet, Species};

use super::bmi::body_mass_index;
use super::{Level, MetricResult, MetricValue};

/// `(inclusive BMI ceiling, score)` pairs, checked in order.
const DOG_BREAKPOINTS: [(f64, u8); 3] = [(15.0, 3), (22.0, 5), (35.0, 7)];
const DOG_CEILING_SCORE: u8 = 8;

const CAT_BREAKPOINTS: [(f64, u8); 3] = [(20.0, 4), (25.0, 5), (35.0, 6)];
const CAT_CEILING_SCORE: u8 = 7;

/// Map a BMI value onto the 1-9 scale.
pub fn score(species: Species, bmi: f64) -> u8 {
    let (breakpoints, ceiling) = match species {
        Species::Dog => (&DOG_BREAKPOINTS, DOG_CEILING_SCORE),
        Species::Cat => (&CAT_BREAKPOINTS, CAT_CEILING_SCORE),
    };
    breakpoints
        .iter()
        .find(|(max_bmi, _)| bmi <= *max_bmi)
        .map(|(_, s)| *s)
        .unwrap_or(ceiling)
}

pub fn classify(score: u8) -> (&'static str, Level) {
    match score {
        0..=3 => ("Underweight", Level::Warning),
        4 | 5 => ("Ideal", Level::Normal),
        6 => ("Overweight", Level::Warning),
        _ => ("Obese", Level::Danger),
    }
}

pub fn compute(pet: &Pet) -> Option<MetricResult> {
    let bmi = body_mass_index(pet)?;
    let s = score(pet.species, bmi);
    let (status, level) = classify(s);
    Some(MetricResult::new(
        MetricValue::Text(format!("{s}/9")),
        status,
        level,
    ))
}
