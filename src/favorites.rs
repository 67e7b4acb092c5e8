// Hotels the guest has marked as favorites in the listing
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Set of favorite hotel ids. Serializes as a plain JSON list so it can be
/// kept in local storage between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    hotel_ids: BTreeSet<u32>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favorite state of `hotel_id`. Returns true when the hotel
    /// is a favorite afterwards.
    pub fn toggle(&mut self, hotel_id: u32) -> bool {
        let added = self.hotel_ids.insert(hotel_id);
        if !added {
            self.hotel_ids.remove(&hotel_id);
        }
        debug!(
            "Hotel {} {} favorites",
            hotel_id,
            if added { "added to" } else { "removed from" }
        );
        added
    }

    pub fn contains(&self, hotel_id: u32) -> bool {
        self.hotel_ids.contains(&hotel_id)
    }

    pub fn len(&self) -> usize {
        self.hotel_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotel_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.hotel_ids.iter().copied()
    }
}
