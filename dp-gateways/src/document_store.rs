//! Documents of logged-in users stored as JSON files.
//!
//! ```text
//! <root>/users/<uid>.json
//! <root>/users/<uid>/dream_places/<doc-id>.json
//! ```

use dp_core::{
    entities::*,
    repositories::{self as repo, PlaceRepo, UserRepo},
};
use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

type Result<T> = std::result::Result<T, repo::Error>;

const USERS_DIR: &str = "users";
const PLACES_DIR: &str = "dream_places";

fn from_io_err(err: io::Error) -> repo::Error {
    match err.kind() {
        io::ErrorKind::NotFound => repo::Error::NotFound,
        _ => repo::Error::Io(err),
    }
}

/// Ids are file names, they must never address a file
/// outside of their own collection.
fn checked_id(id: &str) -> Result<&str> {
    let escapes = id.trim().is_empty() || id.contains(['/', '\\']) || id.contains("..");
    if escapes {
        log::warn!("Rejected document id '{id}'");
        return Err(repo::Error::NotFound);
    }
    Ok(id)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserDoc {
    first_name: String,
    #[serde(default)]
    last_name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    password_hash: String,
}

impl From<&Account> for UserDoc {
    fn from(from: &Account) -> Self {
        let Account { profile, password } = from;
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.to_string(),
            avatar_url: profile.avatar_url.clone(),
            password_hash: password.as_ref().to_owned(),
        }
    }
}

impl UserDoc {
    fn into_account(self, uid: Id) -> Account {
        let Self {
            first_name,
            last_name,
            email,
            avatar_url,
            password_hash,
        } = self;
        Account {
            profile: UserProfile {
                uid,
                first_name,
                last_name,
                email: EmailAddress::new_unchecked(email),
                avatar_url,
            },
            password: Password::from_hash(password_hash),
        }
    }
}

/// A dream place as a document.
///
/// All fields are optional when reading, incomplete documents
/// written by other clients must not break the listing.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceDoc {
    name      : Option<String>,
    city      : Option<String>,
    #[serde(default)]
    notes     : String,
    latitude  : Option<f64>,
    longitude : Option<f64>,
    #[serde(default)]
    visited   : bool,
    #[serde(default)]
    rating    : f32,
    #[serde(default)]
    photos    : Vec<String>,
    timestamp : Option<i64>,
}

impl From<&DreamPlace> for PlaceDoc {
    fn from(from: &DreamPlace) -> Self {
        let pos = from.valid_pos().map(MapPoint::to_lat_lng_deg);
        Self {
            name: Some(from.name.clone()),
            city: Some(from.city.clone()),
            notes: from.notes.clone(),
            latitude: pos.map(|(lat, _)| lat),
            longitude: pos.map(|(_, lng)| lng),
            visited: from.visited,
            rating: from.rating.stars(),
            photos: from.photos.iter().map(ToString::to_string).collect(),
            timestamp: from.created_at.map(Timestamp::as_millis),
        }
    }
}

impl PlaceDoc {
    fn into_place(self, id: Id) -> Option<DreamPlace> {
        let Self {
            name,
            city,
            notes,
            latitude,
            longitude,
            visited,
            rating,
            photos,
            timestamp,
        } = self;
        let (Some(name), Some(city)) = (name, city) else {
            log::warn!("Skipping incomplete place document {id}");
            return None;
        };
        let pos = latitude
            .zip(longitude)
            .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng));
        let photos = photos
            .iter()
            .filter_map(|photo| {
                photo
                    .parse()
                    .map_err(|err| log::warn!("Invalid photo in place {id}: {err}"))
                    .ok()
            })
            .collect();
        Some(DreamPlace {
            id,
            name,
            city,
            notes,
            photos,
            visited,
            rating: StarRating::try_new(rating).unwrap_or_default(),
            pos,
            created_at: timestamp.map(Timestamp::from_millis),
        })
    }
}

/// Profiles of all users and the root of their place collections.
#[derive(Clone)]
pub struct JsonDocumentStore {
    root: PathBuf,
    users: Store,
}

impl JsonDocumentStore {
    pub fn try_new<P: AsRef<Path>>(root: P) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let users = Store::new(root.join(USERS_DIR))?;
        Ok(Self { root, users })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    fn user_dir(&self, uid: &str) -> PathBuf {
        self.root.join(USERS_DIR).join(uid)
    }

    /// The places of a single user.
    pub fn places_of(&self, uid: &Id) -> Result<UserPlaces> {
        let uid = checked_id(uid.as_str())?;
        let places = Store::new(self.user_dir(uid).join(PLACES_DIR))?;
        Ok(UserPlaces { places })
    }
}

impl UserRepo for JsonDocumentStore {
    fn create_account(&self, account: &Account) -> Result<()> {
        let uid = checked_id(account.profile.uid.as_str())?;
        if self.users.get::<UserDoc>(uid).is_ok() {
            return Err(repo::Error::AlreadyExists);
        }
        self.users.save_with_id(&UserDoc::from(account), uid)?;
        Ok(())
    }

    fn update_account(&self, account: &Account) -> Result<()> {
        let uid = checked_id(account.profile.uid.as_str())?;
        self.users.get::<UserDoc>(uid).map_err(from_io_err)?;
        self.users.save_with_id(&UserDoc::from(account), uid)?;
        Ok(())
    }

    fn delete_account(&self, uid: &str) -> Result<()> {
        let uid = checked_id(uid)?;
        self.users.delete(uid).map_err(from_io_err)?;
        let dir = self.user_dir(uid);
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        Ok(())
    }

    fn get_account(&self, uid: &str) -> Result<Account> {
        let uid = checked_id(uid)?;
        let doc = self.users.get::<UserDoc>(uid).map_err(from_io_err)?;
        Ok(doc.into_account(uid.into()))
    }

    fn try_get_account_by_email(&self, email: &EmailAddress) -> Result<Option<Account>> {
        Ok(self
            .users
            .all::<UserDoc>()?
            .into_iter()
            .find(|(_, doc)| doc.email == email.as_str())
            .map(|(uid, doc)| doc.into_account(uid.into())))
    }
}

/// The place collection of one user.
pub struct UserPlaces {
    places: Store,
}

impl UserPlaces {
    fn all_docs(&self) -> Result<Vec<(String, PlaceDoc)>> {
        let mut docs: Vec<_> = self.places.all::<PlaceDoc>()?.into_iter().collect();
        // Oldest first like the rows of the local database
        docs.sort_by_key(|(_, doc)| doc.timestamp);
        Ok(docs)
    }
}

impl PlaceRepo for UserPlaces {
    fn create_place(&self, place: &DreamPlace) -> Result<Id> {
        // The id may already be part of the photo keys
        let id = if place.id.is_valid() {
            place.id.clone()
        } else {
            Id::new()
        };
        checked_id(id.as_str())?;
        if self.places.get::<PlaceDoc>(id.as_str()).is_ok() {
            return Err(repo::Error::AlreadyExists);
        }
        self.places.save_with_id(&PlaceDoc::from(place), id.as_str())?;
        log::debug!("Saved place document {id}");
        Ok(id)
    }

    fn get_place(&self, id: &str) -> Result<DreamPlace> {
        let id = checked_id(id)?;
        let doc = self.places.get::<PlaceDoc>(id).map_err(from_io_err)?;
        doc.into_place(id.into()).ok_or(repo::Error::NotFound)
    }

    fn all_places(&self) -> Result<Vec<DreamPlace>> {
        Ok(self
            .all_docs()?
            .into_iter()
            .filter_map(|(id, doc)| doc.into_place(id.into()))
            .collect())
    }

    fn count_places(&self) -> Result<usize> {
        self.all_places().map(|places| places.len())
    }

    fn update_place(&self, place: &DreamPlace) -> Result<()> {
        let id = checked_id(place.id.as_str())?;
        self.places.get::<PlaceDoc>(id).map_err(from_io_err)?;
        self.places.save_with_id(&PlaceDoc::from(place), id)?;
        Ok(())
    }

    fn delete_place(&self, id: &str) -> Result<()> {
        let id = checked_id(id)?;
        self.places.delete(id).map_err(from_io_err)
    }

    fn delete_places_by_name(&self, name: &str) -> Result<usize> {
        let mut count = 0;
        for (id, doc) in self.all_docs()? {
            if doc.name.as_deref() == Some(name) {
                self.places.delete(&id)?;
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_entities::builders::*;

    fn account(uid: &str, email: &str) -> Account {
        Account {
            profile: UserProfile {
                uid: uid.into(),
                first_name: "Kamal".into(),
                last_name: "Perera".into(),
                email: email.parse().unwrap(),
                avatar_url: None,
            },
            password: Password::from_hash("$2y$hash".into()),
        }
    }

    #[test]
    fn accounts() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDocumentStore::try_new(dir.path()).unwrap();
        let kamal = account("u1", "kamal@example.lk");
        store.create_account(&kamal).unwrap();
        assert!(dir.path().join("users").join("u1.json").is_file());
        assert!(matches!(
            store.create_account(&kamal),
            Err(repo::Error::AlreadyExists)
        ));
        assert_eq!(kamal, store.get_account("u1").unwrap());
        let found = store
            .try_get_account_by_email(&"kamal@example.lk".parse().unwrap())
            .unwrap();
        assert_eq!(Some(kamal.clone()), found);

        let mut renamed = kamal;
        renamed.profile.first_name = "Kamala".into();
        store.update_account(&renamed).unwrap();
        assert_eq!("Kamala", store.get_profile("u1").unwrap().first_name);
        assert!(matches!(
            store.update_account(&account("u2", "x@example.lk")),
            Err(repo::Error::NotFound)
        ));
    }

    #[test]
    fn places_of_a_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDocumentStore::try_new(dir.path()).unwrap();
        let uid = Id::from("u1");
        store
            .create_account(&account(uid.as_str(), "kamal@example.lk"))
            .unwrap();
        let places = store.places_of(&uid).unwrap();
        let place = DreamPlace::build()
            .id("doc1")
            .name("Sigiriya")
            .city("Dambulla")
            .lat_lng(7.957, 80.7603)
            .photos(vec!["file:///p/a.jpg"])
            .finish();
        assert_eq!("doc1", places.create_place(&place).unwrap().as_str());
        assert!(dir
            .path()
            .join("users/u1/dream_places/doc1.json")
            .is_file());
        let loaded = places.get_place("doc1").unwrap();
        assert_eq!(place.photos, loaded.photos);
        assert!(loaded.pos.is_some());

        let mut visited = loaded;
        visited.visited = true;
        visited.rating = StarRating::new(5.0);
        places.update_place(&visited).unwrap();
        assert!(places.get_place("doc1").unwrap().visited);

        let other = store.places_of(&"u2".into()).unwrap();
        assert_eq!(0, other.count_places().unwrap());
        assert_eq!(1, places.count_places().unwrap());

        store.delete_account(uid.as_str()).unwrap();
        assert!(!dir.path().join("users/u1").exists());
        assert!(matches!(
            store.get_account(uid.as_str()),
            Err(repo::Error::NotFound)
        ));
    }

    #[test]
    fn skip_incomplete_documents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDocumentStore::try_new(dir.path()).unwrap();
        let places = store.places_of(&"u1".into()).unwrap();
        places
            .places
            .save_with_id(
                &PlaceDoc {
                    name: Some("No city".into()),
                    ..Default::default()
                },
                "broken",
            )
            .unwrap();
        places
            .create_place(&DreamPlace::build().name("Ella").city("Ella").finish())
            .unwrap();
        let all = places.all_places().unwrap();
        assert_eq!(1, all.len());
        assert_eq!("Ella", all[0].name);
        assert!(matches!(
            places.get_place("broken"),
            Err(repo::Error::NotFound)
        ));
        assert_eq!(1, places.delete_places_by_name("No city").unwrap());
    }

    #[test]
    fn ids_never_reach_other_users() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDocumentStore::try_new(dir.path()).unwrap();
        store.create_account(&account("u1", "kamal@example.lk")).unwrap();
        store.create_account(&account("u2", "nimal@example.lk")).unwrap();
        let secret = DreamPlace::build()
            .id("doc2")
            .name("Secret")
            .city("Jaffna")
            .finish();
        let nimals_places = store.places_of(&"u2".into()).unwrap();
        nimals_places.create_place(&secret).unwrap();

        let kamals_places = store.places_of(&"u1".into()).unwrap();
        let crafted = "../../u2/dream_places/doc2";
        assert!(matches!(
            kamals_places.get_place(crafted),
            Err(repo::Error::NotFound)
        ));
        assert!(matches!(
            kamals_places.delete_place(crafted),
            Err(repo::Error::NotFound)
        ));
        let mut hijacked = secret.clone();
        hijacked.id = crafted.into();
        assert!(matches!(
            kamals_places.update_place(&hijacked),
            Err(repo::Error::NotFound)
        ));
        assert!(kamals_places.create_place(&hijacked).is_err());
        assert!(kamals_places.get_place("..\\u2").is_err());
        assert!(kamals_places.get_place(" ").is_err());
        assert_eq!(1, nimals_places.count_places().unwrap());

        assert!(store.places_of(&"../u2".into()).is_err());
        assert!(store.get_account("../users/u2").is_err());
        assert!(matches!(
            store.delete_account("u2/.."),
            Err(repo::Error::NotFound)
        ));
        assert!(dir.path().join("users/u2.json").is_file());
    }
}
