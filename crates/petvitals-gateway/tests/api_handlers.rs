#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::extract::{FromRequest, State};
use axum::http::{header, Request, StatusCode};
use axum::{response::IntoResponse, Json};
use serde_json::json;

use petvitals_core::{Level, RiskLevel};
use petvitals_gateway::api::{self, MetricsRequest, ReportDraftRequest};
use petvitals_gateway::{app_state::AppState, config, ops};

fn state() -> AppState {
    let cfg = config::load_from_str(
        r#"
version: 1
engine:
  as_of: "2024-01-15"
"#,
    )
    .unwrap();
    AppState::new(cfg)
}

fn metrics_request(pet: serde_json::Value) -> MetricsRequest {
    serde_json::from_value(json!({ "pet": pet })).unwrap()
}

#[tokio::test]
async fn evaluates_pet_record() {
    let st = state();
    let req = metrics_request(json!({
        "id": 1, "species": "dog", "weight": 25, "height": 50, "birthdate": "2020-01-01"
    }));

    let Json(snap) = api::evaluate(State(st.clone()), Ok(Json(req))).await.unwrap();
    assert_eq!(snap.bmi.as_ref().unwrap().status, "Obese");
    assert_eq!(snap.mer.value.as_f64(), Some(1312.0));
    assert_eq!(snap.risk.level, RiskLevel::High);
    assert_eq!(snap.risk.severity, Level::Danger);

    let m = st.metrics();
    assert_eq!(m.evaluations.get(&[("route", "metrics"), ("species", "dog")]), 1);
    assert_eq!(m.bmi_classifications.get(&[("status", "Obese"), ("species", "dog")]), 1);
}

#[tokio::test]
async fn fallback_bmi_reaches_risk() {
    let req: MetricsRequest = serde_json::from_value(json!({
        "pet": { "species": "cat", "weight": 4 },
        "fallbackBmi": 30.0
    }))
    .unwrap();

    let Json(snap) = api::evaluate(State(state()), Ok(Json(req))).await.unwrap();
    assert!(snap.bmi.is_none());
    assert_eq!(snap.risk.score, 3);
}

#[tokio::test]
async fn unsupported_species_is_400() {
    let st = state();
    let req = metrics_request(json!({ "species": "parrot", "weight": 0.4 }));

    let err = api::evaluate(State(st.clone()), Ok(Json(req))).await.unwrap_err();
    assert_eq!(err.0.code().as_str(), "UNSUPPORTED_SPECIES");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        st.metrics()
            .rejected_records
            .get(&[("route", "metrics"), ("code", "UNSUPPORTED_SPECIES")]),
        1
    );
}

#[tokio::test]
async fn malformed_json_is_400() {
    let st = state();
    let req = Request::builder()
        .method("POST")
        .uri("/v1/metrics")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let payload = Json::<MetricsRequest>::from_request(req, &()).await;
    assert!(payload.is_err());

    let err = api::evaluate(State(st.clone()), payload).await.unwrap_err();
    assert_eq!(err.0.code().as_str(), "BAD_REQUEST");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        st.metrics()
            .rejected_records
            .get(&[("route", "metrics"), ("code", "BAD_REQUEST")]),
        1
    );
}

#[tokio::test]
async fn negative_weight_is_400() {
    let st = state();
    let req = metrics_request(json!({ "species": "dog", "weight": -3.0, "height": 50 }));

    let err = api::evaluate(State(st.clone()), Ok(Json(req))).await.unwrap_err();
    assert_eq!(err.0.code().as_str(), "INVALID_MEASUREMENT");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    let m = st.metrics();
    assert_eq!(
        m.rejected_records
            .get(&[("route", "metrics"), ("code", "INVALID_MEASUREMENT")]),
        1
    );
    assert_eq!(m.evaluations.get(&[("route", "metrics"), ("species", "dog")]), 0);
}

#[tokio::test]
async fn report_draft_uses_engine_date() {
    let req: ReportDraftRequest = serde_json::from_value(json!({
        "petId": 9,
        "pet": { "species": "dog", "weight": 25, "height": 50 }
    }))
    .unwrap();

    let Json(draft) = api::report_draft(State(state()), Ok(Json(req))).await.unwrap();
    let v = serde_json::to_value(&draft).unwrap();
    assert_eq!(v, json!({ "petId": 9, "bmiStatus": 100.0, "date": "2024-01-15" }));
}

#[tokio::test]
async fn metrics_and_readiness() {
    let st = state();
    let req = metrics_request(json!({ "species": "cat", "weight": 5, "height": 25 }));
    api::evaluate(State(st.clone()), Ok(Json(req))).await.unwrap();

    let body = st.metrics().render();
    assert!(body.contains("petvitals_evaluations_total{route=\"metrics\",species=\"cat\"} 1"));
    assert!(body.contains("petvitals_draining 0"));

    assert_eq!(ops::readyz(State(st.clone())).await.into_response().status(), StatusCode::OK);
    st.set_draining();
    assert_eq!(
        ops::readyz(State(st)).await.into_response().status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}
