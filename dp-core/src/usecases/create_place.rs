use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub name   : String,
    pub city   : String,
    pub notes  : String,
    pub pos    : Option<MapPoint>,
    pub photos : Vec<PhotoRef>,
}

/// Validate a new place without storing it.
///
/// New places are neither visited nor rated. The id is only
/// preliminary, the repository decides which one is used.
pub fn prepare_new_place(new_place: NewPlace) -> Result<DreamPlace> {
    let NewPlace {
        name,
        city,
        notes,
        pos,
        photos,
    } = new_place;
    let place = DreamPlace {
        id: Id::new(),
        name,
        city,
        notes,
        photos,
        visited: false,
        rating: StarRating::default(),
        pos,
        created_at: Some(Timestamp::now()),
    }
    .auto_correct();
    place.validate()?;
    Ok(place)
}

pub fn create_place<R: PlaceRepo>(repo: &R, new_place: NewPlace) -> Result<DreamPlace> {
    let mut place = prepare_new_place(new_place)?;
    place.id = repo.create_place(&place)?;
    log::debug!("Created place {} ({})", place.id, place.name);
    Ok(place)
}
