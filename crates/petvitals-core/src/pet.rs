//! Pet records.
//!
//! `PetRecord` is the wire shape returned by the pet REST endpoint and is
//! consumed as-is (extra fields such as breed are ignored).
//! `Pet` is the typed form the engine computes over; converting a record is
//! the only place species and measurements are checked.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VitalsError};

/// Supported species. Each one carries its own threshold tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Lowercase name, as used on the wire and in metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            _ => Err(VitalsError::UnsupportedSpecies(s.to_string())),
        }
    }
}

/// Pet as delivered by the REST endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PetRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub species: String,
    /// Kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Centimeters.
    #[serde(default)]
    pub height: Option<f64>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub conditions: Option<Vec<String>>,
    #[serde(default)]
    pub vaccines: Option<Vec<String>>,
}

/// Typed pet the engine computes over. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub species: Species,
    /// Kilograms.
    pub weight: Option<f64>,
    /// Centimeters.
    pub height: Option<f64>,
    pub birthdate: Option<NaiveDate>,
    /// Medical-condition identifiers, e.g. `kidney_disease`.
    pub conditions: Vec<String>,
    /// Vaccine identifiers, e.g. `feline_leukemia`. Display only; no metric reads them.
    pub vaccines: Vec<String>,
}

impl Pet {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            weight: None,
            height: None,
            birthdate: None,
            conditions: Vec::new(),
            vaccines: Vec::new(),
        }
    }

    pub fn with_weight(mut self, kg: f64) -> Self {
        self.weight = Some(kg);
        self
    }

    pub fn with_height(mut self, cm: f64) -> Self {
        self.height = Some(cm);
        self
    }

    pub fn with_birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn with_vaccine(mut self, vaccine: impl Into<String>) -> Self {
        self.vaccines.push(vaccine.into());
        self
    }

    /// Display labels for the medical history panel: `kidney_disease` -> `KIDNEY DISEASE`.
    pub fn condition_labels(&self) -> Vec<String> {
        display_labels(&self.conditions)
    }

    /// Display labels for the vaccination panel, same transform as conditions.
    pub fn vaccine_labels(&self) -> Vec<String> {
        display_labels(&self.vaccines)
    }
}

fn display_labels(ids: &[String]) -> Vec<String> {
    ids.iter().map(|id| id.replace('_', " ").to_uppercase()).collect()
}

impl TryFrom<&PetRecord> for Pet {
    type Error = VitalsError;

    fn try_from(rec: &PetRecord) -> Result<Self> {
        let species = rec.species.parse::<Species>()?;
        Ok(Self {
            species,
            weight: check_measurement("weight", rec.weight)?,
            height: check_measurement("height", rec.height)?,
            birthdate: rec.birthdate,
            conditions: rec.conditions.clone().unwrap_or_default(),
            vaccines: rec.vaccines.clone().unwrap_or_default(),
        })
    }
}

impl TryFrom<PetRecord> for Pet {
    type Error = VitalsError;

    fn try_from(rec: PetRecord) -> Result<Self> {
        Pet::try_from(&rec)
    }
}

// Zero passes: a zero height is "not computable", not malformed.
fn check_measurement(field: &'static str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => {
            tracing::debug!(field, value = v, "rejecting pet measurement");
            Err(VitalsError::InvalidMeasurement { field, value: v })
        }
        other => Ok(other),
    }
}
