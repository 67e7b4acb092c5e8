// Search: criteria, inclusion predicate and ordering over the hotel catalog
use crate::catalog::HotelRecord;
use crate::config::EngineConfig;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Recommended,
    PriceAscending,
    PriceDescending,
    RatingDescending,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Recommended => "recommended",
            SortMode::PriceAscending => "price-ascending",
            SortMode::PriceDescending => "price-descending",
            SortMode::RatingDescending => "rating-descending",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown sort mode: {0}")]
pub struct UnknownSortMode(pub String);

// Accepts the listing's select values ("price-low", "price-high", "rating") too
impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "recommended" => Ok(SortMode::Recommended),
            "price-ascending" | "price-low" => Ok(SortMode::PriceAscending),
            "price-descending" | "price-high" => Ok(SortMode::PriceDescending),
            "rating-descending" | "rating" => Ok(SortMode::RatingDescending),
            other => Err(UnknownSortMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub min_price: f64,
    pub max_price: f64,
    pub amenities: BTreeSet<String>,
    pub sort_mode: SortMode,
}

impl SearchCriteria {
    // Fresh search form: one night from today, default guests and price range
    pub fn defaults(today: NaiveDate, config: &EngineConfig) -> Self {
        Self {
            destination: String::new(),
            check_in: today,
            check_out: next_day(today),
            guests: config.default_guests.clamp(MIN_GUESTS, MAX_GUESTS),
            min_price: config.default_min_price,
            max_price: config.default_max_price,
            amenities: BTreeSet::new(),
            sort_mode: SortMode::Recommended,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_price_range(mut self, min_price: f64, max_price: f64) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = guests.clamp(MIN_GUESTS, MAX_GUESTS);
        self
    }

    // Moving check-in onto or past check-out pushes check-out to the following day
    pub fn with_check_in(mut self, check_in: NaiveDate) -> Self {
        self.check_in = check_in;
        if check_in >= self.check_out {
            self.check_out = next_day(check_in);
        }
        self
    }

    pub fn with_check_out(mut self, check_out: NaiveDate) -> Self {
        self.check_out = check_out;
        self
    }

    pub fn has_valid_dates(&self) -> bool {
        self.check_out > self.check_in
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

pub fn recommended_score(hotel: &HotelRecord) -> f64 {
    hotel.rating * 10.0 + hotel.reviews as f64 / 100.0
}

pub fn matches(hotel: &HotelRecord, criteria: &SearchCriteria) -> bool {
    let destination = criteria.destination.to_lowercase();
    if !destination.is_empty()
        && !hotel.name.to_lowercase().contains(&destination)
        && !hotel.location.to_lowercase().contains(&destination)
    {
        return false;
    }

    // Written so that a NaN on either side fails the range check
    if !(criteria.min_price <= hotel.price && hotel.price <= criteria.max_price) {
        return false;
    }

    criteria.amenities.is_subset(&hotel.amenities)
}

fn compare(a: &HotelRecord, b: &HotelRecord, sort_mode: SortMode) -> Ordering {
    match sort_mode {
        SortMode::PriceAscending => a.price.total_cmp(&b.price),
        SortMode::PriceDescending => b.price.total_cmp(&a.price),
        SortMode::RatingDescending => b.rating.total_cmp(&a.rating),
        SortMode::Recommended => recommended_score(b).total_cmp(&recommended_score(a)),
    }
}

/// Hotels matching `criteria`, ordered by its sort mode.
///
/// The sort is stable, so hotels that compare equal keep their catalog order
/// and running the result through again with the same criteria returns the
/// same sequence. An empty vector means "no results", never an error.
pub fn filter_and_sort(catalog: &[HotelRecord], criteria: &SearchCriteria) -> Vec<HotelRecord> {
    let mut results: Vec<HotelRecord> = catalog
        .iter()
        .filter(|hotel| matches(hotel, criteria))
        .cloned()
        .collect();

    results.sort_by(|a, b| compare(a, b, criteria.sort_mode));

    debug!(
        "Search '{}' ({}) matched {} of {} hotels",
        criteria.destination,
        criteria.sort_mode,
        results.len(),
        catalog.len()
    );

    results
}
