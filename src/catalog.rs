// Hotel catalog: records, seed inventory and the source abstraction used by search
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomOffering {
    pub room_type: String,
    pub price: f64,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub images: Vec<String>,
    pub amenities: BTreeSet<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub discount: Option<String>,
    pub rating: f64,
    pub reviews: u32,
    pub rooms: Vec<RoomOffering>,
}

impl HotelRecord {
    pub fn room(&self, room_type: &str) -> Option<&RoomOffering> {
        self.rooms.iter().find(|room| room.room_type == room_type)
    }

    // First listed room, preselected when a hotel is opened
    pub fn default_room(&self) -> Option<&RoomOffering> {
        self.rooms.first()
    }

    pub fn rooms_for_guests(&self, guests: u32) -> Vec<&RoomOffering> {
        self.rooms
            .iter()
            .filter(|room| room.capacity >= guests)
            .collect()
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.contains(amenity)
    }

    fn check(&self) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidRecord {
            hotel_id: self.id,
            reason,
        };

        if self.rooms.is_empty() {
            return Err(invalid("hotel has no rooms".to_string()));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(invalid(format!("rating {} outside 0-5", self.rating)));
        }
        if !valid_price(self.price) {
            return Err(invalid(format!("invalid price {}", self.price)));
        }
        for room in &self.rooms {
            if room.capacity == 0 {
                return Err(invalid(format!("room {} has zero capacity", room.room_type)));
            }
            if !valid_price(room.price) {
                return Err(invalid(format!(
                    "room {} has invalid price {}",
                    room.room_type, room.price
                )));
            }
        }
        Ok(())
    }
}

// Rejects NaN and infinities as well as negative amounts
fn valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

// Where hotel records come from. The seed list implements it today;
// a remote inventory can replace it without touching search or pricing.
pub trait CatalogSource: Send + Sync {
    fn hotels(&self) -> &[HotelRecord];

    fn find(&self, hotel_id: u32) -> Option<&HotelRecord> {
        self.hotels().iter().find(|hotel| hotel.id == hotel_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    hotels: Vec<HotelRecord>,
}

impl StaticCatalog {
    pub fn new(hotels: Vec<HotelRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for hotel in &hotels {
            if !seen.insert(hotel.id) {
                warn!("Rejecting catalog: duplicate hotel id {}", hotel.id);
                return Err(CatalogError::DuplicateHotelId(hotel.id));
            }
            if let Err(e) = hotel.check() {
                warn!("Rejecting catalog: {}", e);
                return Err(e);
            }
        }

        debug!("Loaded catalog with {} hotels", hotels.len());
        Ok(Self { hotels })
    }

    pub fn seeded() -> Self {
        Self {
            hotels: seed_catalog(),
        }
    }

    pub fn from_json(json_str: &str) -> Result<Self, CatalogError> {
        let hotels: Vec<HotelRecord> = serde_json::from_str(json_str)
            .map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(hotels)
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

impl CatalogSource for StaticCatalog {
    fn hotels(&self) -> &[HotelRecord] {
        &self.hotels
    }
}

// Amenity tags offered as search filters
pub const AVAILABLE_AMENITIES: [&str; 15] = [
    "Pool",
    "Spa",
    "Gym",
    "Restaurant",
    "Free WiFi",
    "Bar",
    "Beach",
    "Water Sports",
    "Business Center",
    "24/7 Room Service",
    "Infinity Pool",
    "Desert Safari",
    "Rooftop Bar",
    "Concierge",
    "Private Beach",
];

pub fn available_amenities() -> Vec<String> {
    AVAILABLE_AMENITIES.iter().map(|a| a.to_string()).collect()
}

fn room(room_type: &str, price: f64, capacity: u32) -> RoomOffering {
    RoomOffering {
        room_type: room_type.to_string(),
        price,
        capacity,
    }
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn images(keys: &[&str]) -> Vec<String> {
    keys.iter()
        .map(|key| format!("/api/placeholder/800/500?{}", key))
        .collect()
}

pub fn seed_catalog() -> Vec<HotelRecord> {
    vec![
        HotelRecord {
            id: 1,
            name: "Mountain View Resort".to_string(),
            location: "Swiss Alps".to_string(),
            description: "Luxurious resort with breathtaking mountain views. Perfect for \
                relaxation and adventure seekers alike, with a full-service spa, heated pools \
                and gourmet dining featuring local cuisine."
                .to_string(),
            images: images(&["mountain", "resort", "alps"]),
            amenities: tags(&["Spa", "Pool", "Restaurant", "Free WiFi", "Gym"]),
            price: 250.0,
            original_price: Some(295.0),
            discount: Some("15% OFF".to_string()),
            rating: 4.8,
            reviews: 128,
            rooms: vec![
                room("Deluxe Room", 250.0, 2),
                room("Suite", 400.0, 4),
                room("Presidential Suite", 650.0, 4),
            ],
        },
        HotelRecord {
            id: 2,
            name: "Coastal Paradise Hotel".to_string(),
            location: "Maldives".to_string(),
            description: "Beachfront property with crystal clear waters and white sandy \
                beaches. Overwater villas and beach bungalows with direct access to the \
                Indian Ocean."
                .to_string(),
            images: images(&["beach", "ocean", "maldives"]),
            amenities: tags(&["Private Beach", "Bar", "Gym", "Spa", "Water Sports"]),
            price: 180.0,
            original_price: Some(225.0),
            discount: Some("20% OFF".to_string()),
            rating: 4.6,
            reviews: 96,
            rooms: vec![
                room("Beach Bungalow", 180.0, 2),
                room("Overwater Villa", 350.0, 2),
                room("Family Suite", 480.0, 4),
            ],
        },
        HotelRecord {
            id: 3,
            name: "Urban Luxury Hotel".to_string(),
            location: "New York".to_string(),
            description: "Modern luxury in the heart of Manhattan with stunning skyline \
                views, a rooftop lounge and a 24/7 business center."
                .to_string(),
            images: images(&["nyc", "skyline", "penthouse"]),
            amenities: tags(&[
                "Rooftop Bar",
                "Concierge",
                "Business Center",
                "Spa",
                "24/7 Room Service",
            ]),
            price: 320.0,
            original_price: Some(350.0),
            discount: Some("10% OFF".to_string()),
            rating: 4.7,
            reviews: 215,
            rooms: vec![
                room("Standard Room", 320.0, 2),
                room("Executive Suite", 500.0, 2),
                room("Penthouse", 1200.0, 4),
            ],
        },
        HotelRecord {
            id: 4,
            name: "Desert Oasis Resort".to_string(),
            location: "Dubai".to_string(),
            description: "A luxurious desert retreat combining Arabian hospitality with \
                modern luxury, desert adventures and an infinity pool overlooking the dunes."
                .to_string(),
            images: images(&["desert", "pool", "luxuryresort"]),
            amenities: tags(&[
                "Infinity Pool",
                "Desert Safari",
                "Restaurant",
                "Spa",
                "Free WiFi",
            ]),
            price: 420.0,
            original_price: Some(480.0),
            discount: Some("12% OFF".to_string()),
            rating: 4.9,
            reviews: 143,
            rooms: vec![
                room("Luxury Room", 420.0, 2),
                room("Royal Suite", 680.0, 2),
                room("Desert Villa", 950.0, 4),
            ],
        },
    ]
}
