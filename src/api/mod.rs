//! HTTP API module for the Tip Pool Engine.
//!
//! This module provides the REST endpoints a front end uses to run tip
//! calculations, adjust staff multipliers, browse history and download
//! spreadsheet exports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, HistoryQuery, MultiplierRequest};
pub use response::{
    ApiError, CalculationResponse, ExportsResponse, HistoryResponse, MultipliersResponse,
};
pub use state::AppState;
