use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoDeletion {
    pub place: DreamPlace,
    pub removed: bool,
}

impl PhotoDeletion {
    pub fn remaining(&self) -> usize {
        self.place.photos.len()
    }

    pub fn all_photos_deleted(&self) -> bool {
        self.removed && self.place.photos.is_empty()
    }
}

/// A photo reference as entered by the user.
pub fn parse_photo(photo: &str) -> Result<PhotoRef> {
    Ok(photo.parse::<PhotoRef>()?)
}

/// Remove a single photo from a place.
///
/// Unknown photos are not an error. The place is only written
/// back if something has been removed.
pub fn delete_photo_from_place<R: PlaceRepo>(
    repo: &R,
    id: &str,
    photo: &PhotoRef,
) -> Result<PhotoDeletion> {
    let mut place = repo.get_place(id)?;
    let removed = place.remove_photo(photo);
    if removed {
        repo.update_place(&place)?;
        log::debug!("Deleted photo {photo} of place {id}");
    } else {
        log::debug!("Photo {photo} not found in place {id}");
    }
    Ok(PhotoDeletion { place, removed })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use dp_entities::builders::*;

    #[test]
    fn delete_photos_one_by_one() {
        let db = MockDb::default();
        let id = db
            .create_place(
                &DreamPlace::build()
                    .name("Yala")
                    .city("Tissamaharama")
                    .photos(vec!["file:///leopard.jpg", "file:///elephant.jpg"])
                    .finish(),
            )
            .unwrap();

        let leopard: PhotoRef = "file:///leopard.jpg".parse().unwrap();
        let deletion = delete_photo_from_place(&db, id.as_str(), &leopard).unwrap();
        assert!(deletion.removed);
        assert_eq!(1, deletion.remaining());
        assert!(!deletion.all_photos_deleted());
        assert!(!db.get_place(id.as_str()).unwrap().has_photo(&leopard));

        let deletion = delete_photo_from_place(&db, id.as_str(), &leopard).unwrap();
        assert!(!deletion.removed);

        let elephant: PhotoRef = "file:///elephant.jpg".parse().unwrap();
        let deletion = delete_photo_from_place(&db, id.as_str(), &elephant).unwrap();
        assert!(deletion.all_photos_deleted());
        assert!(db.get_place(id.as_str()).unwrap().photos.is_empty());
    }

    #[test]
    fn reject_malformed_photo_references() {
        assert!(matches!(parse_photo(" "), Err(Error::Photo)));
        assert!(matches!(
            parse_photo("file:///a.jpg,file:///b.jpg"),
            Err(Error::Photo)
        ));
        assert_eq!(
            "file:///leopard.jpg",
            parse_photo(" file:///leopard.jpg ").unwrap().as_str()
        );
    }
}
