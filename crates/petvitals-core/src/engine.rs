//! Metrics engine: the entry point tying the metric modules to a reference date.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::age::AgeSummary;
use crate::error::Result;
use crate::metrics::{bcs, bmi, mer, risk, MetricResult, RiskAssessment};
use crate::pet::{Pet, PetRecord};
use crate::report::ReportDraft;

/// Every metric for one pet, as consumed by a single dashboard refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSnapshot {
    pub bmi: Option<MetricResult>,
    pub bcs: Option<MetricResult>,
    pub mer: MetricResult,
    pub risk: RiskAssessment,
    pub age: Option<AgeSummary>,
}

/// Stateless metrics engine pinned to a reference date.
///
/// The reference date is the only input besides the pet, so the same engine
/// returns the same result for the same pet no matter how often, or from how
/// many threads, it is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsEngine {
    today: NaiveDate,
}

impl MetricsEngine {
    /// Engine dated from the local clock.
    pub fn today() -> Self {
        Self::as_of(Local::now().date_naive())
    }

    /// Engine with a fixed reference date.
    pub fn as_of(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.today
    }

    /// `None` when weight/height are missing or height is zero.
    pub fn compute_bmi(&self, pet: &Pet) -> Option<MetricResult> {
        bmi::compute(pet)
    }

    /// `None` under the same conditions as [`Self::compute_bmi`].
    pub fn compute_bcs(&self, pet: &Pet) -> Option<MetricResult> {
        bcs::compute(pet)
    }

    pub fn compute_mer(&self, pet: &Pet) -> MetricResult {
        mer::compute(pet, self.today)
    }

    /// `fallback_bmi` is used only when the pet's own BMI is not computable.
    pub fn assess_disease_risk(&self, pet: Option<&Pet>, fallback_bmi: Option<f64>) -> RiskAssessment {
        risk::assess(pet, fallback_bmi, self.today)
    }

    pub fn evaluate(&self, pet: &Pet, fallback_bmi: Option<f64>) -> HealthSnapshot {
        let snapshot = HealthSnapshot {
            bmi: self.compute_bmi(pet),
            bcs: self.compute_bcs(pet),
            mer: self.compute_mer(pet),
            risk: self.assess_disease_risk(Some(pet), fallback_bmi),
            age: pet.birthdate.map(|b| AgeSummary::new(b, self.today)),
        };
        tracing::debug!(
            species = %pet.species,
            bmi = snapshot.bmi.as_ref().map(|m| m.status),
            risk = snapshot.risk.level.as_str(),
            "pet evaluated"
        );
        snapshot
    }

    /// Convert a wire record, then evaluate it.
    pub fn evaluate_record(&self, rec: &PetRecord, fallback_bmi: Option<f64>) -> Result<HealthSnapshot> {
        let pet = Pet::try_from(rec)?;
        Ok(self.evaluate(&pet, fallback_bmi))
    }

    /// Report request payload dated with the engine's reference date.
    pub fn report_draft(&self, pet_id: i64, pet: &Pet) -> ReportDraft {
        ReportDraft::new(pet_id, bmi::body_mass_index(pet), self.today)
    }
}
