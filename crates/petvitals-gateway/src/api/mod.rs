//! Engine endpoints.
//!
//! - `POST /v1/metrics`       : pet record -> health snapshot
//! - `POST /v1/reports/draft` : pet record -> report request payload

use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use petvitals_core::{HealthSnapshot, Pet, PetRecord, ReportDraft, VitalsError};

use crate::app_state::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetricsRequest {
    pub pet: PetRecord,
    /// BMI computed earlier by the caller; used only for risk when the
    /// pet's own measurements do not allow one.
    #[serde(default)]
    pub fallback_bmi: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReportDraftRequest {
    pub pet_id: i64,
    pub pet: PetRecord,
}

pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<Json<HealthSnapshot>, ApiError> {
    const ROUTE: &str = "metrics";
    let started = Instant::now();

    let res = parse(payload).and_then(|req| {
        let pet = Pet::try_from(&req.pet)?;
        Ok((state.engine().evaluate(&pet, req.fallback_bmi), pet))
    });
    state
        .metrics()
        .evaluation_duration
        .observe(&[("route", ROUTE)], started.elapsed());

    match res {
        Ok((snapshot, pet)) => {
            let m = state.metrics();
            m.evaluations.inc(&[("route", ROUTE), ("species", pet.species.as_str())]);
            if let Some(bmi) = &snapshot.bmi {
                m.bmi_classifications
                    .inc(&[("species", pet.species.as_str()), ("status", bmi.status)]);
            }
            Ok(Json(snapshot))
        }
        Err(e) => Err(reject(&state, ROUTE, e)),
    }
}

pub async fn report_draft(
    State(state): State<AppState>,
    payload: Result<Json<ReportDraftRequest>, JsonRejection>,
) -> Result<Json<ReportDraft>, ApiError> {
    const ROUTE: &str = "report_draft";

    let res = parse(payload).and_then(|req| {
        let pet = Pet::try_from(&req.pet)?;
        Ok((state.engine().report_draft(req.pet_id, &pet), pet))
    });

    match res {
        Ok((draft, pet)) => {
            state
                .metrics()
                .evaluations
                .inc(&[("route", ROUTE), ("species", pet.species.as_str())]);
            Ok(Json(draft))
        }
        Err(e) => Err(reject(&state, ROUTE, e)),
    }
}

fn parse<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, VitalsError> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| VitalsError::BadRequest(e.body_text()))
}

fn reject(state: &AppState, route: &'static str, e: VitalsError) -> ApiError {
    tracing::warn!(route, code = e.code().as_str(), error = %e, "pet record rejected");
    state
        .metrics()
        .rejected_records
        .inc(&[("route", route), ("code", e.code().as_str())]);
    ApiError(e)
}
