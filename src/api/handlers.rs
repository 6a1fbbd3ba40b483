//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::RecordForm;
use crate::store::{EXPORT_FILE_NAME, XLSX_CONTENT_TYPE};

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/records", get(list_handler).post(save_handler))
        .route("/records/:code", get(lookup_handler))
        .route("/records/:code/slip", get(slip_handler))
        .route("/export", get(export_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn attachment(content_type: &str, file_name: &str, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, error: PayrollError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Handler for GET /records.
async fn list_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing payroll records");

    let service = state.service().lock().await;
    match service.list_records() {
        Ok(table) => json_response(table),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /records/:code.
///
/// Returns the record as a prefilled form for editing.
async fn lookup_handler(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_code = %code, "Looking up record");

    let service = state.service().lock().await;
    match service.lookup(&code) {
        Ok(Some(form)) => json_response(form),
        Ok(None) => error_response(
            correlation_id,
            PayrollError::RecordNotFound {
                code: code.trim().to_string(),
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /records.
///
/// Accepts a record form, computes the net salary and inserts or updates
/// the row with the same employee code.
async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing save request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
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
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    let service = state.service().lock().await;
    match service.save_record(form) {
        Ok(saved) => {
            info!(
                correlation_id = %correlation_id,
                employee_code = %saved.record.employee_code,
                outcome = ?saved.outcome,
                duration_us = start_time.elapsed().as_micros(),
                "Save completed successfully"
            );
            json_response(saved)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /records/:code/slip.
async fn slip_handler(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_code = %code, "Generating salary slip");

    let service = state.service().lock().await;
    match service.generate_slip(&code, Local::now().naive_local()) {
        Ok(slip) => attachment(slip.content_type, &slip.file_name, slip.bytes),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /export.
async fn export_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Exporting payroll workbook");

    let service = state.service().lock().await;
    match service.export_workbook() {
        Ok(bytes) => attachment(XLSX_CONTENT_TYPE, EXPORT_FILE_NAME, bytes),
        Err(err) => error_response(correlation_id, err),
    }
}
