use crate::{distance::PlaceWithDistance, entities::*};

/// Case-insensitive substring search on the name or the city.
///
/// A blank query matches every place.
pub fn matches_query(place: &DreamPlace, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    place.name.to_lowercase().contains(&query) || place.city.to_lowercase().contains(&query)
}

/// Keeps the order of the input.
pub fn filter_places(places: Vec<PlaceWithDistance>, query: &str) -> Vec<PlaceWithDistance> {
    places
        .into_iter()
        .filter(|p| matches_query(&p.place, query))
        .collect()
}

pub trait InBbox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBbox for DreamPlace {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        self.valid_pos()
            .map(|pos| bbox.contains_point(pos))
            .unwrap_or(false)
    }
}
