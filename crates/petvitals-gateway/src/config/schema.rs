use std::net::SocketAddr;

use chrono::NaiveDate;
use serde::Deserialize;
use petvitals_core::error::{Result, VitalsError};
use petvitals_core::MetricsEngine;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub engine: EngineSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VitalsError::UnsupportedVersion);
        }

        self.gateway.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(256..=1_048_576).contains(&self.max_body_bytes) {
            return Err(VitalsError::BadRequest(
                "gateway.max_body_bytes must be between 256 and 1048576".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            VitalsError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_body_bytes() -> usize {
    16 * 1024
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EngineSection {
    /// Pins the engine's reference date; unset means "today" per request.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl EngineSection {
    pub fn engine(&self) -> MetricsEngine {
        match self.as_of {
            Some(d) => MetricsEngine::as_of(d),
            None => MetricsEngine::today(),
        }
    }
}
