use crate::repositories::Error;
use dp_entities::{id::Id, photo::PhotoRef, time::Timestamp};
use std::path::Path;

/// Object storage for photo files.
pub trait PhotoStorage {
    /// Copy the file at `source` into the storage under the given
    /// key and return a reference to the stored copy.
    fn store(&self, key: &str, source: &Path) -> Result<PhotoRef, Error>;

    /// Remove a stored photo. Photos that are not managed by this
    /// storage are ignored.
    fn remove(&self, photo: &PhotoRef) -> Result<(), Error>;
}

/// Key of the `n`-th photo imported in guest mode.
pub fn guest_photo_key(now: Timestamp, n: usize) -> String {
    format!("img_{}_{n}.jpg", now.as_millis())
}

/// Key of the `n`-th photo uploaded for a place of a user.
pub fn user_photo_key(uid: &Id, place_id: &Id, now: Timestamp, n: usize) -> String {
    format!(
        "users/{uid}/places/{place_id}/photo_{}_{n}.jpg",
        now.as_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_keys() {
        let now = Timestamp::from_millis(1_700_000_000_123);
        assert_eq!("img_1700000000123_0.jpg", guest_photo_key(now, 0));
        assert_eq!(
            "users/u1/places/p7/photo_1700000000123_2.jpg",
            user_photo_key(&Id::from("u1"), &Id::from("p7"), now, 2)
        );
    }
}
