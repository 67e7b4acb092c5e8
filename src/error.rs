// Error types for the search, pricing and booking engine
use chrono::NaiveDate;
use thiserror::Error;

// Guest-facing validation failures raised while building a booking.
// All of them are recoverable and meant to be rendered as a form message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid room selection: {0}")]
    InvalidRoomSelection(String),

    #[error("Invalid date range: check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdGenerationError {
    #[error("Booking id space exhausted: no unused id after {attempts} draws")]
    Exhausted { attempts: u32 },
}

// Everything that can stop a booking from being built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    IdGeneration(#[from] IdGenerationError),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Duplicate hotel id: {0}")]
    DuplicateHotelId(u32),

    #[error("Invalid hotel record {hotel_id}: {reason}")]
    InvalidRecord { hotel_id: u32, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
