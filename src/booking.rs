// Booking builder: validates guest input and assembles an immutable booking record
use crate::catalog::HotelRecord;
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::error::{BookingError, ConfigError, ValidationError};
use crate::ids::{BookingIdGenerator, RandomIdGenerator};
use crate::pricing::{compute_nights, price_breakdown, PriceBreakdown};
use crate::search::SearchCriteria;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl GuestInfo {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            special_requests: None,
        }
    }

    pub fn with_special_requests(mut self, requests: impl Into<String>) -> Self {
        self.special_requests = Some(requests.into());
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingRequiredField(field.to_string()));
            }
        }
        Ok(())
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            special_requests: self
                .special_requests
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub hotel: HotelRecord,
    pub room_type: String,
    pub room_price: f64,
    pub dates: StayDates,
    pub guests: u32,
    pub price: PriceBreakdown,
    pub total_price: f64,
    pub guest: GuestInfo,
    pub created_at: DateTime<Utc>,
}

/// Validate a booking request and assemble the record.
///
/// Checks run in order and stop at the first failure: guest contact fields,
/// then the room selection, then the date range. The total is always derived
/// from the room's nightly price, the nights in the stay and `config.tax_rate`.
/// An id is only drawn once every check has passed.
pub fn build_booking(
    hotel: &HotelRecord,
    room_type: &str,
    criteria: &SearchCriteria,
    guest: &GuestInfo,
    config: &EngineConfig,
    ids: &dyn BookingIdGenerator,
    clock: &dyn Clock,
) -> Result<BookingRecord, BookingError> {
    guest.validate()?;

    let room = hotel
        .room(room_type)
        .ok_or_else(|| ValidationError::InvalidRoomSelection(room_type.to_string()))?;

    if !criteria.has_valid_dates() {
        return Err(ValidationError::InvalidDateRange {
            check_in: criteria.check_in,
            check_out: criteria.check_out,
        }
        .into());
    }

    let nights = compute_nights(criteria.check_in, criteria.check_out);
    let price = price_breakdown(room.price, nights, config.tax_rate);

    Ok(BookingRecord {
        id: ids.next_id()?,
        hotel: hotel.clone(),
        room_type: room.room_type.clone(),
        room_price: room.price,
        dates: StayDates {
            check_in: criteria.check_in,
            check_out: criteria.check_out,
            nights,
        },
        guests: criteria.guests,
        price,
        total_price: price.total,
        guest: guest.trimmed(),
        created_at: clock.now(),
    })
}

// Owns the collaborators a booking needs so callers only pass request data
pub struct BookingBuilder {
    config: EngineConfig,
    ids: Arc<dyn BookingIdGenerator>,
    clock: Arc<dyn Clock>,
}

impl BookingBuilder {
    pub fn new(
        config: EngineConfig,
        ids: Arc<dyn BookingIdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, ids, clock })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn build(
        &self,
        hotel: &HotelRecord,
        room_type: &str,
        criteria: &SearchCriteria,
        guest: &GuestInfo,
    ) -> Result<BookingRecord, BookingError> {
        match build_booking(
            hotel,
            room_type,
            criteria,
            guest,
            &self.config,
            self.ids.as_ref(),
            self.clock.as_ref(),
        ) {
            Ok(booking) => {
                info!(
                    "Created booking {} at {} ({}, {} nights, total {:.2})",
                    booking.id,
                    booking.hotel.name,
                    booking.room_type,
                    booking.dates.nights,
                    booking.total_price
                );
                Ok(booking)
            }
            Err(e) => {
                warn!("Booking rejected for hotel {}: {}", hotel.id, e);
                Err(e)
            }
        }
    }
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            ids: Arc::new(RandomIdGenerator::default()),
            clock: Arc::new(SystemClock),
        }
    }
}
