//! petvitals core: pet records, the health-metrics engine, and error types.
//!
//! This crate turns a pet record (species, weight, height, birthdate,
//! conditions) into BMI, body-condition score, energy requirement, and a
//! disease-risk assessment. It performs no I/O and owns no state across
//! calls, so the gateway and any other consumer can share one engine value.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Bad records surface as `VitalsError`; missing measurements surface as
//! "not computable" values, never as errors.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod age;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod pet;
pub mod report;

pub use engine::{HealthSnapshot, MetricsEngine};
/// Shared result type.
pub use error::{Result, VitalsError};
pub use metrics::{Level, MetricResult, MetricValue, RiskAssessment, RiskLevel};
pub use pet::{Pet, PetRecord, Species};
pub use report::ReportDraft;
