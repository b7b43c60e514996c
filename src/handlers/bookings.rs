use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{BookingRequest, ReceivedBooking};
use crate::services::form::{BookingForm, SubmitError};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub id: String,
    pub message: String,
}

// POST /api/bookings
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    tracing::info!(
        name = %request.name,
        date = %request.date,
        frequency = request.frequency.as_str(),
        "incoming booking request"
    );

    let mut form = BookingForm::with_request(request.clone());
    let confirmation = form
        .submit(state.intake.as_ref())
        .await
        .map_err(|e| match e {
            SubmitError::Validation(v) => AppError::Validation(v.to_string()),
            SubmitError::Intake(err) => AppError::Intake(err.to_string()),
        })?;

    let received = ReceivedBooking {
        id: Uuid::new_v4().to_string(),
        request,
        received_at: Utc::now().naive_utc(),
    };

    {
        let mut bookings = state.bookings.lock().unwrap();
        bookings.push(received.clone());
    }

    tracing::info!(id = %received.id, "booking request recorded");

    Ok(Json(SubmitResponse {
        id: received.id,
        message: confirmation.message,
    }))
}
