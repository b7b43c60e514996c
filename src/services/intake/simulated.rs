use std::time::Duration;

use async_trait::async_trait;

use super::{BookingIntake, Confirmation, CONFIRMATION_MESSAGE};
use crate::models::BookingRequest;

/// Demo transport: waits a fixed amount and confirms. No real I/O happens.
pub struct SimulatedIntake {
    delay: Duration,
}

impl SimulatedIntake {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl BookingIntake for SimulatedIntake {
    async fn submit_booking(&self, _request: &BookingRequest) -> anyhow::Result<Confirmation> {
        tokio::time::sleep(self.delay).await;

        Ok(Confirmation {
            message: CONFIRMATION_MESSAGE.to_string(),
        })
    }
}
