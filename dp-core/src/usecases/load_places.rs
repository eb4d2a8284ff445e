use super::prelude::*;
use crate::{
    distance::{sort_by_distance, PlaceWithDistance},
    filter::{filter_places, InBbox},
};

/// All places, nearest first.
///
/// Without a current position the stored order is kept and
/// none of the places has a distance.
pub fn load_places_ordered_by_distance<R: PlaceRepo>(
    repo: &R,
    current: Option<MapPoint>,
) -> Result<Vec<PlaceWithDistance>> {
    let mut places: Vec<_> = repo
        .all_places()?
        .into_iter()
        .map(|place| PlaceWithDistance::new(place, current))
        .collect();
    sort_by_distance(&mut places);
    Ok(places)
}

pub fn search_places<R: PlaceRepo>(
    repo: &R,
    current: Option<MapPoint>,
    query: &str,
) -> Result<Vec<PlaceWithDistance>> {
    let places = load_places_ordered_by_distance(repo, current)?;
    Ok(filter_places(places, query))
}

/// Places that can be shown as markers on a map.
pub fn map_markers<R: PlaceRepo>(repo: &R, bbox: Option<&MapBbox>) -> Result<Vec<DreamPlace>> {
    let bbox = bbox.copied().unwrap_or_else(MapBbox::whole_world);
    if !bbox.is_valid() {
        return Err(Error::InvalidPosition);
    }
    Ok(repo
        .all_places()?
        .into_iter()
        .filter(|place| place.in_bbox(&bbox))
        .collect())
}
