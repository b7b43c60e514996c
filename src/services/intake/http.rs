use anyhow::Context;
use async_trait::async_trait;

use super::{BookingIntake, Confirmation, CONFIRMATION_MESSAGE};
use crate::models::BookingRequest;

/// Posts the booking request as JSON to a configured endpoint. Any 2xx reply
/// counts as accepted; the remote side owns everything past that.
pub struct HttpIntake {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpIntake {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookingIntake for HttpIntake {
    async fn submit_booking(&self, request: &BookingRequest) -> anyhow::Result<Confirmation> {
        self.client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .context("failed to reach booking intake endpoint")?
            .error_for_status()
            .context("booking intake endpoint returned error")?;

        Ok(Confirmation {
            message: CONFIRMATION_MESSAGE.to_string(),
        })
    }
}
