use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct UpdatePlace {
    pub id      : Id,
    pub name    : String,
    pub city    : String,
    pub notes   : String,
    pub visited : bool,
    /// Ignored unless the place has been visited.
    pub rating  : f32,
    /// Keeps the current position if `None`.
    pub pos     : Option<MapPoint>,
    /// Keeps the current photos if `None`.
    pub photos  : Option<Vec<PhotoRef>>,
}

impl UpdatePlace {
    /// Start an update with the current values of the place.
    pub fn from_place(place: &DreamPlace) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            city: place.city.clone(),
            notes: place.notes.clone(),
            visited: place.visited,
            rating: place.rating.stars(),
            pos: None,
            photos: None,
        }
    }
}

pub fn update_place<R: PlaceRepo>(repo: &R, update: UpdatePlace) -> Result<DreamPlace> {
    let UpdatePlace {
        id,
        name,
        city,
        notes,
        visited,
        rating,
        pos,
        photos,
    } = update;
    let old_place = repo.get_place(id.as_str())?;
    let rating = if visited {
        StarRating::try_new(rating).ok_or(Error::RatingValue)?
    } else {
        StarRating::default()
    };
    let place = DreamPlace {
        name,
        city,
        notes,
        visited,
        rating,
        pos: pos.or(old_place.pos),
        photos: photos.unwrap_or_else(|| old_place.photos.clone()),
        ..old_place
    }
    .auto_correct();
    place.validate()?;
    repo.update_place(&place)?;
    log::debug!("Updated place {}", place.id);
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use dp_entities::builders::*;

    fn db_with_place() -> (MockDb, DreamPlace) {
        let db = MockDb::default();
        let place = DreamPlace::build()
            .name("Ella Rock")
            .city("Ella")
            .lat_lng(6.8667, 81.0466)
            .photos(vec!["file:///a.jpg", "file:///b.jpg"])
            .finish();
        let id = db.create_place(&place).unwrap();
        (db, DreamPlace { id, ..place })
    }

    #[test]
    fn mark_as_visited_and_rate() {
        let (db, place) = db_with_place();
        let update = UpdatePlace {
            visited: true,
            rating: 4.5,
            notes: "worth it ".into(),
            ..UpdatePlace::from_place(&place)
        };
        let updated = update_place(&db, update).unwrap();
        assert!(updated.visited);
        assert_eq!(StarRating::new(4.5), updated.rating);
        assert_eq!("worth it", updated.notes);
        assert_eq!(place.pos, updated.pos);
        assert_eq!(place.photos, updated.photos);
        assert_eq!(updated, db.get_place(place.id.as_str()).unwrap());
    }

    #[test]
    fn rating_is_dropped_for_unvisited_places() {
        let (db, place) = db_with_place();
        let update = UpdatePlace {
            visited: false,
            rating: 3.0,
            ..UpdatePlace::from_place(&place)
        };
        assert!(update_place(&db, update).unwrap().rating.is_unrated());
    }

    #[test]
    fn reject_out_of_range_ratings() {
        let (db, place) = db_with_place();
        let update = UpdatePlace {
            visited: true,
            rating: 6.0,
            ..UpdatePlace::from_place(&place)
        };
        assert!(matches!(update_place(&db, update), Err(Error::RatingValue)));
    }

    #[test]
    fn reject_empty_name() {
        let (db, place) = db_with_place();
        let update = UpdatePlace {
            name: "".into(),
            ..UpdatePlace::from_place(&place)
        };
        assert!(matches!(update_place(&db, update), Err(Error::Name)));
        assert_eq!("Ella Rock", db.get_place(place.id.as_str()).unwrap().name);
    }

    #[test]
    fn replace_photos_and_position() {
        let (db, place) = db_with_place();
        let pos = MapPoint::from_lat_lng_deg(6.87, 81.05);
        let update = UpdatePlace {
            pos: Some(pos),
            photos: Some(vec![]),
            ..UpdatePlace::from_place(&place)
        };
        let updated = update_place(&db, update).unwrap();
        assert_eq!(Some(pos), updated.pos);
        assert!(updated.photos.is_empty());
    }

    #[test]
    fn update_missing_place() {
        let db = MockDb::default();
        let place = DreamPlace::build().id("7").name("x").city("y").finish();
        let err = update_place(&db, UpdatePlace::from_place(&place)).unwrap_err();
        assert!(matches!(err, Error::Repo(crate::RepoError::NotFound)));
    }
}
