use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::services::calendar;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/status
#[derive(Serialize)]
pub struct StatusResponse {
    bookings_count: usize,
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatusResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let bookings_count = state.bookings.lock().unwrap().len();

    Ok(Json(StatusResponse { bookings_count }))
}

// GET /api/admin/bookings
#[derive(Serialize)]
pub struct BookingResponse {
    id: String,
    name: String,
    phone: String,
    email: String,
    address: String,
    date: String,
    time: String,
    frequency: String,
    notes: String,
    received_at: String,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let bookings = state.bookings.lock().unwrap();

    let response: Vec<BookingResponse> = bookings
        .iter()
        .map(|b| BookingResponse {
            id: b.id.clone(),
            name: b.request.name.clone(),
            phone: b.request.phone.clone(),
            email: b.request.email.clone(),
            address: b.request.address.clone(),
            date: b.request.date.clone(),
            time: b.request.time.clone(),
            frequency: b.request.frequency.as_str().to_string(),
            notes: b.request.notes.clone(),
            received_at: b.received_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    Ok(Json(response))
}

// GET /api/admin/bookings/:id/ics
pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let booking = {
        let bookings = state.bookings.lock().unwrap();
        bookings.iter().find(|b| b.id == id).cloned()
    };
    let booking = booking.ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    let ics = calendar::generate_ics(&booking, &state.config.business_name)
        .ok_or_else(|| AppError::Validation("booking has no usable date".to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"booking-{id}.ics\""),
            ),
        ],
        ics,
    )
        .into_response())
}
