use ::geocoding::{Forward, Opencage, Point, Reverse};
use dp_core::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingGateway, GeocodedPlace},
};

pub struct OpenCageGeocoder {
    api_key: String,
}

impl OpenCageGeocoder {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

fn forward_query(query: &str) -> Option<String> {
    let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
    (!query.is_empty()).then_some(query)
}

impl GeoCodingGateway for OpenCageGeocoder {
    fn resolve_place(&self, query: &str) -> Option<GeocodedPlace> {
        let query = forward_query(query)?;
        let oc_req = Opencage::new(self.api_key.clone());
        let points: Vec<Point<f64>> = oc_req
            .forward(&query)
            .map_err(|err| log::warn!("Failed to resolve place '{query}': {err}"))
            .ok()?;
        let point = points.first()?;
        log::debug!("Resolved place '{query}': {point:?}");
        let pos = MapPoint::try_from_lat_lng_deg(point.y(), point.x())?;
        Some(GeocodedPlace {
            pos,
            address: None,
        })
    }

    fn describe_position(&self, pos: MapPoint) -> Option<String> {
        if !pos.is_valid() {
            return None;
        }
        let (lat, lng) = pos.to_lat_lng_deg();
        let oc_req = Opencage::new(self.api_key.clone());
        oc_req
            .reverse(&Point::new(lng, lat))
            .map_err(|err| log::warn!("Failed to describe position {pos}: {err}"))
            .ok()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_forward_query() {
        assert_eq!(
            Some("Nine Arches Bridge, Ella".to_string()),
            forward_query("  Nine  Arches Bridge,\tElla ")
        );
        assert_eq!(None, forward_query("   "));
    }

    #[test]
    fn invalid_positions_are_not_described() {
        let gw = OpenCageGeocoder::new("no-key".into());
        assert_eq!(None, gw.describe_position(MapPoint::default()));
        assert_eq!(None, gw.resolve_place(" "));
    }
}
