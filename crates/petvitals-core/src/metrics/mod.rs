//! Health metrics (BMI, BCS, MER, disease risk).
//!
//! Every computation is a pure function of a `Pet` (plus a reference date
//! where age matters). Results are plain value objects for the rendering
//! layer: a display value, a status label, and a severity tag.
//!
//! Not-computable input is reported in-band: `None` for BMI/BCS, an
//! error-level `MetricResult` for MER.

pub mod bcs;
pub mod bmi;
pub mod mer;
pub mod risk;

use std::fmt;

use serde::Serialize;

/// Severity tag consumed as a CSS-like class by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Normal,
    Info,
    Warning,
    Danger,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Normal => "normal",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Danger => "danger",
            Level::Error => "error",
        }
    }
}

/// Display value of a metric: preformatted text ("24.7", "5/9") or a number (kcal).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Text(String),
    /// Non-finite values serialize as JSON `null`.
    Number(f64),
}

impl MetricValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetricValue::Text(s) => Some(s),
            MetricValue::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Text(_) => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            MetricValue::Number(n) if n.fract() == 0.0 => write!(f, "{n:.0}"),
            MetricValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One computed metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub value: MetricValue,
    pub status: &'static str,
    pub level: Level,
}

impl MetricResult {
    pub fn new(value: MetricValue, status: &'static str, level: Level) -> Self {
        Self {
            value,
            status,
            level,
        }
    }
}

/// Text tier of a risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

/// Disease-risk classification.
///
/// `level` is the text tier shown to the user and `severity` the styling tag;
/// they are separate fields so reading one never affects the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub severity: Level,
    pub status: &'static str,
    /// Summed risk points; 0 when the pet is unknown.
    pub score: u32,
}
