use crate::entities::*;
use url::Url;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// A link that opens the position in a map application.
pub fn maps_link(pos: MapPoint) -> Result<Url, url::ParseError> {
    let (lat, lng) = pos.to_lat_lng_deg();
    Url::parse_with_params(
        MAPS_SEARCH_URL,
        &[("api", "1"), ("query", &format!("{lat:.6},{lng:.6}"))],
    )
}

/// Plain text for sharing a place with other apps.
pub fn share_text(place: &DreamPlace) -> String {
    let mut lines = vec![
        format!("Dream place: {}", place.name),
        format!("City: {}", place.city),
    ];
    if !place.notes.trim().is_empty() {
        lines.push(format!("Notes: {}", place.notes.trim()));
    }
    if place.visited {
        lines.push(format!("Visited, rated {}", place.rating));
    }
    if let Some(url) = place.valid_pos().and_then(|pos| maps_link(pos).ok()) {
        lines.push(url.to_string());
    }
    lines.join("\n")
}
