// Derived content for the booking confirmation view
use crate::booking::BookingRecord;
use crate::pricing::format_money;
use chrono::{Datelike, Weekday};
use serde::Serialize;

pub const CHECK_IN_TIME: &str = "After 3:00 PM";
pub const PAID_PARKING_PER_DAY: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckInInstructions {
    pub time: String,
    pub process: Vec<String>,
    pub parking: String,
}

pub fn check_in_instructions(booking: &BookingRecord) -> CheckInInstructions {
    let weekend = matches!(booking.dates.check_in.weekday(), Weekday::Sat | Weekday::Sun);
    let wait_hint = if weekend {
        "Weekend check-in may experience higher wait times"
    } else {
        "Weekday check-in usually takes 5-10 minutes"
    };

    let parking = if booking.hotel.has_amenity("Free Parking") {
        "Free parking available on-site".to_string()
    } else {
        format!("Paid parking available at ${} per day", PAID_PARKING_PER_DAY)
    };

    CheckInInstructions {
        time: CHECK_IN_TIME.to_string(),
        process: vec![
            "Present this confirmation at the reception desk".to_string(),
            "Have a valid ID for all adult guests".to_string(),
            "Credit card for incidentals will be required".to_string(),
            wait_hint.to_string(),
        ],
        parking,
    }
}

impl BookingRecord {
    fn stay_range(&self) -> (String, String) {
        (
            self.dates.check_in.format("%b %d, %Y").to_string(),
            self.dates.check_out.format("%b %d, %Y").to_string(),
        )
    }

    // Plain-text block for copying a booking
    pub fn summary_text(&self) -> String {
        let (check_in, check_out) = self.stay_range();
        [
            format!("Booking ID: {}", self.id),
            format!("Hotel: {}", self.hotel.name),
            format!("Room Type: {}", self.room_type),
            format!("Check-in: {}", check_in),
            format!("Check-out: {}", check_out),
            format!("Guests: {}", self.guests),
            format!("Total Price: {}", format_money(self.total_price)),
        ]
        .join("\n")
    }

    pub fn share_title(&self) -> String {
        format!("Booking at {}", self.hotel.name)
    }

    /// One-line message for a native share sheet.
    pub fn share_text(&self) -> String {
        let (check_in, check_out) = self.stay_range();
        format!(
            "I've booked a stay at {} from {} to {}. Booking reference: {}",
            self.hotel.name, check_in, check_out, self.id
        )
    }

    pub fn email_subject(&self) -> String {
        format!("My Booking at {}", self.hotel.name)
    }

    /// Body of the "send by email" message, signed with the guest's name.
    /// Carries no price.
    pub fn email_body(&self) -> String {
        let (check_in, check_out) = self.stay_range();
        format!(
            "Hi,\n\n\
            I wanted to share my booking details with you:\n\n\
            Booking ID: {}\n\
            Hotel: {}\n\
            Room Type: {}\n\
            Check-in: {}\n\
            Check-out: {}\n\
            Guests: {}\n\n\
            Best regards,\n\
            {}",
            self.id,
            self.hotel.name,
            self.room_type,
            check_in,
            check_out,
            self.guests,
            self.guest.name
        )
    }
}
