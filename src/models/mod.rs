pub mod booking;
pub mod submission;

pub use booking::{BookingRequest, Frequency, ReceivedBooking};
pub use submission::SubmissionState;
