use super::*;
use crate::error::AppError;
use dp_core::gateways::photo_storage::PhotoStorage;
use dp_gateways::{
    document_store::{JsonDocumentStore, UserPlaces},
    photo_storage::FsPhotoStorage,
    session::SessionStore,
};
use std::{fs, io, path::Path};

const DOCUMENTS_DIR: &str = "documents";
const PHOTOS_DIR: &str = "photos";
const SESSION_FILE: &str = "session";

/// Everything a flow needs to reach the data of the current user.
pub struct Backend {
    pub db_connections: sqlite::Connections,
    pub documents: JsonDocumentStore,
    pub photos: Box<dyn PhotoStorage>,
    pub sessions: SessionStore,
}

impl Backend {
    /// Open the file based stores below `data_dir`.
    pub fn init(db_connections: sqlite::Connections, data_dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(data_dir)?;
        let documents = JsonDocumentStore::try_new(data_dir.join(DOCUMENTS_DIR))?;
        let photos = Box::new(FsPhotoStorage::try_new(data_dir.join(PHOTOS_DIR))?);
        let sessions = SessionStore::try_new(data_dir.join(SESSION_FILE))?;
        debug!("Opened data directory {}", data_dir.display());
        Ok(Self {
            db_connections,
            documents,
            photos,
            sessions,
        })
    }

    pub fn session(&self) -> Session {
        self.sessions.load()
    }

    pub(crate) fn logged_in_uid(&self) -> Result<Id> {
        self.session().uid().cloned().ok_or(AppError::NotLoggedIn)
    }

    pub(crate) fn user_places(&self, uid: &Id) -> Result<UserPlaces> {
        Ok(self.documents.places_of(uid)?)
    }

    /// Remove photos that are no longer referenced.
    ///
    /// Failures are only logged, the place itself is already gone.
    pub(crate) fn discard_photos<'a>(&self, photos: impl IntoIterator<Item = &'a PhotoRef>) {
        for photo in photos {
            if let Err(err) = self.photos.remove(photo) {
                warn!("Failed to remove photo {photo}: {err}");
            }
        }
    }
}
