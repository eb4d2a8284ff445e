use dp_entities::geo::MapPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub pos: MapPoint,
    /// Human readable description of the position, if available.
    pub address: Option<String>,
}

pub trait GeoCodingGateway {
    /// Find the position of a place by its name, e.g. "Sigiriya".
    fn resolve_place(&self, query: &str) -> Option<GeocodedPlace>;
    /// Describe a position picked on the map.
    fn describe_position(&self, pos: MapPoint) -> Option<String>;
}
