// Hotel search, pricing and booking engine for the travel booking demo

pub mod booking;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod favorites;
pub mod ids;
pub mod pricing;
pub mod search;

// Re-export key types for convenience
pub use booking::{build_booking, BookingBuilder, BookingRecord, GuestInfo, StayDates};
pub use catalog::{
    available_amenities, seed_catalog, CatalogSource, HotelRecord, RoomOffering, StaticCatalog,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use confirmation::{check_in_instructions, CheckInInstructions};
pub use error::{BookingError, CatalogError, ConfigError, IdGenerationError, ValidationError};
pub use favorites::Favorites;
pub use ids::{BookingIdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use pricing::{
    compute_nights, format_money, price_breakdown, round_cents, DiscountInfo, PriceBreakdown,
    DEFAULT_TAX_RATE,
};
pub use search::{filter_and_sort, matches, recommended_score, SearchCriteria, SortMode};
