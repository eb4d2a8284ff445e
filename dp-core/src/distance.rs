use crate::entities::*;
use std::{cmp::Ordering, fmt};

/// Distances below this threshold are labeled in meters.
const METERS_LABEL_THRESHOLD: f64 = 1_000.0;

const KM_SUFFIX: &str = " km away";
const M_SUFFIX: &str = " m away";

/// Great-circle distance from the current position to a place.
///
/// `None` if the current position is unknown or if no
/// location has been picked for the place.
pub fn distance_between(current: Option<MapPoint>, place: &DreamPlace) -> Option<Distance> {
    let current = current.filter(|pos| pos.is_valid())?;
    MapPoint::distance(current, place.valid_pos()?)
}

/// Human readable distance, e.g. "850 m away" or "12.5 km away".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceLabel(String);

impl DistanceLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the distance in meters from a label.
    pub fn parse_meters(label: &str) -> Option<f64> {
        let label = label.trim();
        let meters = if let Some(km) = label.strip_suffix(KM_SUFFIX) {
            km.trim().parse::<f64>().ok()? * 1_000.0
        } else if let Some(m) = label.strip_suffix(M_SUFFIX) {
            m.trim().parse::<f64>().ok()?
        } else {
            return None;
        };
        (meters.is_finite() && meters >= 0.0).then_some(meters)
    }
}

impl From<Distance> for DistanceLabel {
    fn from(distance: Distance) -> Self {
        debug_assert!(distance.is_valid());
        let meters = distance.to_meters();
        let label = if meters < METERS_LABEL_THRESHOLD {
            format!("{meters:.0}{M_SUFFIX}")
        } else {
            format!("{:.1}{KM_SUFFIX}", distance.to_kilometers())
        };
        Self(label)
    }
}

impl fmt::Display for DistanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceWithDistance {
    pub place: DreamPlace,
    pub distance: Option<Distance>,
}

impl PlaceWithDistance {
    pub fn new(place: DreamPlace, current: Option<MapPoint>) -> Self {
        let distance = distance_between(current, &place);
        Self { place, distance }
    }

    pub fn label(&self) -> Option<DistanceLabel> {
        self.distance.map(Into::into)
    }
}

fn cmp_unknown_last(lhs: Option<f64>, rhs: Option<f64>) -> Ordering {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs.total_cmp(&rhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Nearest places first. Places without a known distance
/// keep their relative order and are moved to the end.
pub fn sort_by_distance(places: &mut [PlaceWithDistance]) {
    places.sort_by(|lhs, rhs| {
        cmp_unknown_last(
            lhs.distance.map(Distance::to_meters),
            rhs.distance.map(Distance::to_meters),
        )
    });
}

/// Order by precomputed labels, e.g. when only the labels
/// have been kept. Unparsable labels are moved to the end.
pub fn sort_by_label<T>(items: &mut [T], label: impl Fn(&T) -> Option<&str>) {
    items.sort_by(|lhs, rhs| {
        cmp_unknown_last(
            label(lhs).and_then(DistanceLabel::parse_meters),
            label(rhs).and_then(DistanceLabel::parse_meters),
        )
    });
}
