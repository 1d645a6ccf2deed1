//! HTTP request handlers for the Tip Pool API.
//!
//! This module contains the handler functions for all API endpoints.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Local;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::history::{TimeWindow, XLSX_CONTENT_TYPE};

use super::request::{CalculationRequest, HistoryQuery, MultiplierRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, ExportsResponse, HistoryResponse,
    MultipliersResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route(
            "/multipliers",
            get(list_multipliers_handler).put(set_all_multipliers_handler),
        )
        .route("/multipliers/:staff", put(set_multiplier_handler))
        .route("/history", get(history_handler))
        .route("/exports", get(list_exports_handler))
        .route("/exports/:window", get(export_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn engine_error_response(err: crate::error::EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /calculate.
///
/// Runs a tip calculation, persists it and returns the distribution.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };
    let (inputs, overrides) = request.into_parts();

    let service = state.service().lock().await;
    let outcome = match service.calculate(&inputs, &overrides) {
        Ok(outcome) => outcome,
        Err(err) => return engine_error_response(err, correlation_id),
    };
    let exports = service.available_exports(Local::now().naive_local());

    info!(
        correlation_id = %correlation_id,
        staff_paid = outcome.record.tips_distribution.len(),
        net_tips = %outcome.record.total_tips_distributed,
        "Calculation completed successfully"
    );

    let body = CalculationResponse {
        calculation_id: correlation_id,
        tip_rate: outcome.distribution.tip_rate,
        day_tips_pool: outcome.distribution.day.pool,
        night_tips_pool: outcome.distribution.night.pool,
        record: outcome.record,
        exports,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for GET /multipliers.
async fn list_multipliers_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    debug!(correlation_id = %correlation_id, "Listing multipliers");

    let service = state.service().lock().await;
    let body = MultipliersResponse {
        multipliers: service.roster_multipliers(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for PUT /multipliers: sets every staff member to one rate.
async fn set_all_multipliers_handler(
    State(state): State<AppState>,
    payload: Result<Json<MultiplierRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let service = state.service().lock().await;
    if let Err(err) = service.set_all_multipliers(request.rate) {
        return engine_error_response(err, correlation_id);
    }
    let body = MultipliersResponse {
        multipliers: service.roster_multipliers(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for PUT /multipliers/:staff.
async fn set_multiplier_handler(
    State(state): State<AppState>,
    Path(staff): Path<String>,
    payload: Result<Json<MultiplierRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let service = state.service().lock().await;
    match service.set_multiplier(&staff, request.rate) {
        Ok(rate) => (
            StatusCode::OK,
            Json(crate::models::StaffMultiplier { staff, rate }),
        )
            .into_response(),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /history?window=...
async fn history_handler(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let window = match query.window.as_deref().map(TimeWindow::from_str) {
        None => TimeWindow::Current,
        Some(Ok(window)) => window,
        Some(Err(err)) => return engine_error_response(err, correlation_id),
    };

    debug!(correlation_id = %correlation_id, window = %window, "Querying history");

    let service = state.service().lock().await;
    let body = HistoryResponse {
        window,
        records: service.history(window, Local::now().naive_local()),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for GET /exports.
async fn list_exports_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    debug!(correlation_id = %correlation_id, "Listing exports");

    let service = state.service().lock().await;
    let body = ExportsResponse {
        exports: service.available_exports(Local::now().naive_local()),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for GET /exports/:window: downloads the window's spreadsheet.
async fn export_handler(State(state): State<AppState>, Path(window): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let window = match TimeWindow::from_str(&window) {
        Ok(window) => window,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let service = state.service().lock().await;
    match service.export(window, Local::now().naive_local()) {
        Ok(export) => {
            info!(
                correlation_id = %correlation_id,
                window = %window,
                records = export.record_count,
                bytes = export.bytes.len(),
                "Export served"
            );
            let disposition = format!("attachment; filename=\"{}\"", export.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.bytes,
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::CalculationRequest;
    use crate::models::Multipliers;
    use crate::service::TipService;
    use crate::store::JsonFileStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use serde_json::Value;
    use std::str::FromStr;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(
            temp_dir.path().join("staff_tip_rates.json"),
            temp_dir.path().join("tip_history.json"),
        );
        let roster = ["Alice", "Bob", "Charlie"]
            .into_iter()
            .map(String::from)
            .collect();
        (AppState::new(TipService::new(store, roster)), temp_dir)
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            merchant_take_rate: dec("0.2"),
            total_sales: dec("1000"),
            day_sales: dec("600"),
            night_sales: dec("400"),
            total_tips: dec("100"),
            day_staff: vec!["Alice".to_string(), "Bob".to_string()],
            night_staff: vec!["Bob".to_string()],
            multipliers: Multipliers::new(),
        }
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let (state, _temp) = create_test_state();
        let router = create_router(state);
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, body) = send(router, json_request("POST", "/calculate", body)).await;

        assert_eq!(status, StatusCode::OK);
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.record.tips_distribution["Alice"], dec("24"));
        assert_eq!(result.record.tips_distribution["Bob"], dec("56"));
        assert_eq!(result.tip_rate, dec("0.08"));
        assert_eq!(result.day_tips_pool, dec("48"));
        assert_eq!(result.night_tips_pool, dec("32"));
        assert!(!result.exports.is_empty());
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (state, _temp) = create_test_state();
        let router = create_router(state);

        let (status, body) = send(
            router,
            json_request("POST", "/calculate", "{invalid json".to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_validation_error() {
        let (state, _temp) = create_test_state();
        let router = create_router(state);
        let body = r#"{"merchant_take_rate": 0.2, "total_sales": 100}"#.to_string();

        let (status, body) = send(router, json_request("POST", "/calculate", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_api_004_missing_content_type_returns_400() {
        let (state, _temp) = create_test_state();
        let router = create_router(state);
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .body(Body::from(serde_json::to_string(&create_valid_request()).unwrap()))
            .unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_set_single_multiplier_clamps() {
        let (state, _temp) = create_test_state();
        let router = create_router(state);

        let (status, body) = send(
            router,
            json_request("PUT", "/multipliers/Alice", r#"{"rate": 5}"#.to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["staff"], "Alice");
        assert_eq!(json["rate"], 2.0);
    }

    #[tokio::test]
    async fn test_set_all_then_list_multipliers() {
        let (state, _temp) = create_test_state();

        let (status, _) = send(
            create_router(state.clone()),
            json_request("PUT", "/multipliers", r#"{"rate": 1.25}"#.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            create_router(state),
            Request::builder()
                .uri("/multipliers")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let result: MultipliersResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.multipliers.len(), 3);
        assert!(result.multipliers.iter().all(|m| m.rate == dec("1.25")));
    }

    #[tokio::test]
    async fn test_export_without_history_returns_404() {
        let (state, _temp) = create_test_state();
        let router = create_router(state);

        let (status, body) = send(
            router,
            Request::builder()
                .uri("/exports/current")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NO_RECORDS");
    }

    #[tokio::test]
    async fn test_unknown_history_window_returns_400() {
        let (state, _temp) = create_test_state();
        let router = create_router(state);

        let (status, body) = send(
            router,
            Request::builder()
                .uri("/history?window=fortnight")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNKNOWN_TIME_WINDOW");
    }
}
