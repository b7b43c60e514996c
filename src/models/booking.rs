use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub date: String,
    pub time: String,
    pub frequency: Frequency,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    #[serde(rename = "one-time")]
    OneTime,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "weekly" => Frequency::Weekly,
            "biweekly" => Frequency::Biweekly,
            "monthly" => Frequency::Monthly,
            _ => Frequency::OneTime,
        }
    }
}

// A request that made it through submission. In-memory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedBooking {
    pub id: String,
    pub request: BookingRequest,
    pub received_at: NaiveDateTime,
}
