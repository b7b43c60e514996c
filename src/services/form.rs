use crate::models::{BookingRequest, Frequency, SubmissionState};
use crate::services::intake::{BookingIntake, Confirmation};

#[derive(Debug)]
pub struct ValidationError;

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Please fill in name, phone and preferred date.")
    }
}

#[derive(Debug)]
pub enum SubmitError {
    Validation(ValidationError),
    Intake(anyhow::Error),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(e) => write!(f, "{e}"),
            SubmitError::Intake(e) => write!(f, "{e}"),
        }
    }
}

/// Name, phone and date must be non-blank; whitespace-only counts as blank.
pub fn validate(request: &BookingRequest) -> Result<(), ValidationError> {
    let blank = |s: &str| s.trim().is_empty();

    if blank(&request.name) || blank(&request.phone) || blank(&request.date) {
        return Err(ValidationError);
    }
    Ok(())
}

/// One booking request being filled in, plus the status of its submission.
pub struct BookingForm {
    request: BookingRequest,
    state: SubmissionState,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            request: BookingRequest::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn with_request(request: BookingRequest) -> Self {
        Self {
            request,
            state: SubmissionState::Idle,
        }
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Sets a single field by name. Never fails: unknown names are ignored
    /// and no validation runs here. Editing after a finished submission puts
    /// the form back to idle.
    pub fn update_field(&mut self, field: &str, value: &str) {
        if self.state.is_terminal() {
            self.state = SubmissionState::Idle;
        }

        match field {
            "name" => self.request.name = value.to_string(),
            "phone" => self.request.phone = value.to_string(),
            "email" => self.request.email = value.to_string(),
            "address" => self.request.address = value.to_string(),
            "date" => self.request.date = value.to_string(),
            "time" => self.request.time = value.to_string(),
            "frequency" => self.request.frequency = Frequency::from_str(value),
            "notes" => self.request.notes = value.to_string(),
            _ => {}
        }
    }

    /// Runs one submission. On success the form resets to empty defaults; on
    /// any failure the fields stay as the customer typed them.
    pub async fn submit(
        &mut self,
        intake: &dyn BookingIntake,
    ) -> Result<Confirmation, SubmitError> {
        self.state = SubmissionState::Submitting;

        let outcome = Self::run(intake, &self.request).await;

        // Single exit from Submitting, whatever the outcome.
        match &outcome {
            Ok(confirmation) => {
                self.request = BookingRequest::default();
                self.state = SubmissionState::Succeeded(confirmation.message.clone());
            }
            Err(err) => {
                self.state = SubmissionState::Failed(err.to_string());
            }
        }

        outcome
    }

    async fn run(
        intake: &dyn BookingIntake,
        request: &BookingRequest,
    ) -> Result<Confirmation, SubmitError> {
        // Transport round trip first, field checks on the way back.
        let confirmation = intake
            .submit_booking(request)
            .await
            .map_err(SubmitError::Intake)?;

        validate(request).map_err(SubmitError::Validation)?;

        Ok(confirmation)
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}
