use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::ReceivedBooking;

const SLOT_MINUTES: i64 = 60;

/// Start of the requested slot, if the request carries a usable date.
/// Time defaults to 09:00 when the customer left it out.
pub fn slot_start(booking: &ReceivedBooking) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(booking.request.date.trim(), "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(booking.request.time.trim(), "%H:%M")
        .ok()
        .or_else(|| NaiveTime::from_hms_opt(9, 0, 0))?;
    Some(date.and_time(time))
}

pub fn generate_ics(booking: &ReceivedBooking, business_name: &str) -> Option<String> {
    let start = slot_start(booking)?;
    let dtstart = start.format("%Y%m%dT%H%M%S").to_string();
    let dtend = (start + Duration::minutes(SLOT_MINUTES))
        .format("%Y%m%dT%H%M%S")
        .to_string();
    let dtstamp = booking.received_at.format("%Y%m%dT%H%M%S").to_string();
    let uid = format!("{}@evergreen", booking.id);

    let summary = format!("Bin cleaning with {business_name}");
    let notes = booking.request.notes.trim();
    let description = if notes.is_empty() {
        "No additional notes"
    } else {
        notes
    };
    let location = booking.request.address.trim();

    Some(format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Evergreen Cleaners//Booking//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstamp}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         LOCATION:{location}\r\n\
         DESCRIPTION:{description}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    ))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::models::{BookingRequest, Frequency, ReceivedBooking};

    fn received(date: &str, time: &str) -> ReceivedBooking {
        ReceivedBooking {
            id: "test-123".to_string(),
            request: BookingRequest {
                name: "Jamie".to_string(),
                phone: "4255551212".to_string(),
                email: String::new(),
                address: "123 Pine St, Everett, WA".to_string(),
                date: date.to_string(),
                time: time.to_string(),
                frequency: Frequency::OneTime,
                notes: "Two bins by the garage".to_string(),
            },
            received_at: NaiveDateTime::parse_from_str("2025-05-20 10:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
        }
    }

    #[test]
    fn test_generate_ics() {
        let booking = received("2025-06-01", "14:00");

        let ics = generate_ics(&booking, "Evergreen Cleaners").unwrap();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("DTSTART:20250601T140000"));
        assert!(ics.contains("DTEND:20250601T150000"));
        assert!(ics.contains("DTSTAMP:20250520T100000"));
        assert!(ics.contains("SUMMARY:Bin cleaning with Evergreen Cleaners"));
        assert!(ics.contains("LOCATION:123 Pine St, Everett, WA"));
        assert!(ics.contains("DESCRIPTION:Two bins by the garage"));
        assert!(ics.contains("UID:test-123@evergreen"));
        assert!(ics.contains("END:VCALENDAR"));
    }

    #[test]
    fn test_missing_time_defaults_to_morning() {
        let booking = received("2025-06-01", "");

        let ics = generate_ics(&booking, "Evergreen Cleaners").unwrap();
        assert!(ics.contains("DTSTART:20250601T090000"));
        assert!(ics.contains("DTEND:20250601T100000"));
    }

    #[test]
    fn test_unusable_date_yields_nothing() {
        assert!(generate_ics(&received("next tuesday", ""), "Evergreen Cleaners").is_none());
        assert!(generate_ics(&received("", "14:00"), "Evergreen Cleaners").is_none());
    }

    #[test]
    fn test_empty_notes_get_placeholder() {
        let mut booking = received("2025-06-01", "14:00");
        booking.request.notes = String::new();

        let ics = generate_ics(&booking, "Evergreen Cleaners").unwrap();
        assert!(ics.contains("DESCRIPTION:No additional notes"));
    }
}
