pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::place_builder::*;

pub mod place_builder {

    use super::*;
    use crate::{geo::*, id::*, photo::*, place::*, rating::*};

    #[derive(Debug)]
    pub struct DreamPlaceBuild {
        place: DreamPlace,
    }

    impl DreamPlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.place.city = city.into();
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.place.notes = notes.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = Some(pos);
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn photos(mut self, photos: Vec<&str>) -> Self {
            self.place.photos = photos.into_iter().map(|p| p.parse().unwrap()).collect();
            self
        }
        pub fn visited(mut self, rating: f32) -> Self {
            self.place.visited = true;
            self.place.rating = StarRating::new(rating);
            self
        }
        pub fn finish(self) -> DreamPlace {
            self.place
        }
    }

    impl Builder for DreamPlace {
        type Build = DreamPlaceBuild;
        fn build() -> DreamPlaceBuild {
            DreamPlaceBuild {
                place: DreamPlace {
                    id: Id::new(),
                    name: "".into(),
                    city: "".into(),
                    notes: "".into(),
                    photos: Vec::<PhotoRef>::new(),
                    visited: false,
                    rating: StarRating::default(),
                    pos: None,
                    created_at: None,
                },
            }
        }
    }
}
