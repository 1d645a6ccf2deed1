//! Response types for the Tip Pool API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::history::{ExportSummary, TimeWindow};
use crate::models::{CalculationRecord, StaffMultiplier};

/// Response body for a completed calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Identifier for correlating this calculation in logs.
    pub calculation_id: Uuid,
    /// The record appended to the history.
    pub record: CalculationRecord,
    /// Net tips per unit of sales.
    pub tip_rate: Decimal,
    /// Tips attributable to the day shift.
    pub day_tips_pool: Decimal,
    /// Tips attributable to the night shift.
    pub night_tips_pool: Decimal,
    /// Windows now available for export.
    pub exports: Vec<ExportSummary>,
}

/// Response body listing staff multipliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipliersResponse {
    /// Each roster member's effective multiplier.
    pub multipliers: Vec<StaffMultiplier>,
}

/// Response body for a history query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// The window queried.
    pub window: TimeWindow,
    /// Matching records, oldest first.
    pub records: Vec<CalculationRecord>,
}

/// Response body listing available exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportsResponse {
    /// Windows with at least one record.
    pub exports: Vec<ExportSummary>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::StorageWrite { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Failed to save tip data",
                    format!("{}: {}", path, message),
                ),
            },
            EngineError::ExportFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Failed to render export", message),
            },
            EngineError::NoRecordsForWindow { window } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NO_RECORDS",
                    "Nothing to export",
                    format!("No calculations recorded for window '{}'", window),
                ),
            },
            EngineError::UnknownTimeWindow { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_TIME_WINDOW",
                    format!("Unknown time window: {}", value),
                    "Expected one of: current, 1_day, 1_week, 1_month, 1_year",
                ),
            },
        }
    }
}
