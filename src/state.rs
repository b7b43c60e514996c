use std::sync::Mutex;

use crate::config::AppConfig;
use crate::models::ReceivedBooking;
use crate::services::intake::BookingIntake;

pub struct AppState {
    pub config: AppConfig,
    pub intake: Box<dyn BookingIntake>,
    pub bookings: Mutex<Vec<ReceivedBooking>>,
}
