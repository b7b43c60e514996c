pub mod http;
pub mod simulated;

use async_trait::async_trait;

use crate::models::BookingRequest;

pub const CONFIRMATION_MESSAGE: &str =
    "Booking request received. We'll contact you to confirm.";

#[derive(Debug, Clone)]
pub struct Confirmation {
    pub message: String,
}

/// Transport seam for handing a booking request to the intake side. Providers
/// only carry the request; field validation stays with the form.
#[async_trait]
pub trait BookingIntake: Send + Sync {
    async fn submit_booking(&self, request: &BookingRequest) -> anyhow::Result<Confirmation>;
}
