use super::*;
use crate::backend::Backend;
use dp_core::{
    distance::PlaceWithDistance,
    gateways::photo_storage::{guest_photo_key, user_photo_key},
};
use std::path::PathBuf;

impl Backend {
    /// Copy photo files into the storage.
    ///
    /// Either all photos are stored or none of them.
    fn store_photos(
        &self,
        files: &[PathBuf],
        offset: usize,
        key: impl Fn(Timestamp, usize) -> String,
    ) -> Result<Vec<PhotoRef>> {
        let now = Timestamp::now();
        let mut stored = Vec::with_capacity(files.len());
        for (n, file) in files.iter().enumerate() {
            match self.photos.store(&key(now, offset + n), file) {
                Ok(photo) => stored.push(photo),
                Err(err) => {
                    warn!("Failed to store photo {}: {err}", file.display());
                    self.discard_photos(&stored);
                    return Err(err.into());
                }
            }
        }
        Ok(stored)
    }

    pub fn add_place(
        &self,
        new_place: usecases::NewPlace,
        photo_files: &[PathBuf],
    ) -> Result<DreamPlace> {
        match self.session() {
            Session::Guest => {
                // Validate before copying any files
                usecases::prepare_new_place(new_place.clone())?;
                let photos = self.store_photos(photo_files, new_place.photos.len(), guest_photo_key)?;
                let mut new_place = new_place;
                new_place.photos.extend(photos.iter().cloned());
                let created = self
                    .db_connections
                    .exclusive()?
                    .transaction(|conn| usecases::create_place(conn, new_place));
                if created.is_err() {
                    self.discard_photos(&photos);
                }
                Ok(created?)
            }
            Session::LoggedIn { uid, .. } => {
                // The document id is needed for the photo keys
                let mut place = usecases::prepare_new_place(new_place)?;
                let place_id = place.id.clone();
                let photos = self.store_photos(photo_files, place.photos.len(), |now, n| {
                    user_photo_key(&uid, &place_id, now, n)
                })?;
                place.photos.extend(photos.iter().cloned());
                match self
                    .user_places(&uid)
                    .and_then(|repo| Ok(repo.create_place(&place)?))
                {
                    Ok(id) => {
                        place.id = id;
                        info!("Added place {} of user {uid}", place.id);
                        Ok(place)
                    }
                    Err(err) => {
                        self.discard_photos(&photos);
                        Err(err)
                    }
                }
            }
        }
    }

    pub fn get_place(&self, id: &str) -> Result<DreamPlace> {
        let place = match self.session() {
            Session::Guest => self.db_connections.shared()?.get_place(id)?,
            Session::LoggedIn { uid, .. } => self.user_places(&uid)?.get_place(id)?,
        };
        Ok(place)
    }

    pub fn list_places(&self, current: Option<MapPoint>) -> Result<Vec<PlaceWithDistance>> {
        let places = match self.session() {
            Session::Guest => {
                usecases::load_places_ordered_by_distance(&self.db_connections.shared()?, current)?
            }
            Session::LoggedIn { uid, .. } => {
                usecases::load_places_ordered_by_distance(&self.user_places(&uid)?, current)?
            }
        };
        Ok(places)
    }

    pub fn search_places(
        &self,
        current: Option<MapPoint>,
        query: &str,
    ) -> Result<Vec<PlaceWithDistance>> {
        let places = match self.session() {
            Session::Guest => {
                usecases::search_places(&self.db_connections.shared()?, current, query)?
            }
            Session::LoggedIn { uid, .. } => {
                usecases::search_places(&self.user_places(&uid)?, current, query)?
            }
        };
        Ok(places)
    }

    pub fn map_markers(&self, bbox: Option<&MapBbox>) -> Result<Vec<DreamPlace>> {
        let places = match self.session() {
            Session::Guest => usecases::map_markers(&self.db_connections.shared()?, bbox)?,
            Session::LoggedIn { uid, .. } => usecases::map_markers(&self.user_places(&uid)?, bbox)?,
        };
        Ok(places)
    }

    fn update_with_photos<R: PlaceRepo>(
        &self,
        repo: &R,
        mut update: usecases::UpdatePlace,
        photo_files: &[PathBuf],
        key: impl Fn(Timestamp, usize) -> String,
    ) -> Result<DreamPlace> {
        if photo_files.is_empty() {
            return Ok(usecases::update_place(repo, update)?);
        }
        let mut photos = match update.photos.take() {
            Some(photos) => photos,
            None => repo.get_place(update.id.as_str())?.photos,
        };
        let added = self.store_photos(photo_files, photos.len(), key)?;
        photos.extend(added.iter().cloned());
        update.photos = Some(photos);
        usecases::update_place(repo, update).map_err(|err| {
            self.discard_photos(&added);
            err.into()
        })
    }

    pub fn update_place(
        &self,
        update: usecases::UpdatePlace,
        photo_files: &[PathBuf],
    ) -> Result<DreamPlace> {
        match self.session() {
            Session::Guest => {
                let conn = self.db_connections.exclusive()?;
                self.update_with_photos(&conn, update, photo_files, guest_photo_key)
            }
            Session::LoggedIn { uid, .. } => {
                let place_id = update.id.clone();
                self.update_with_photos(&self.user_places(&uid)?, update, photo_files, |now, n| {
                    user_photo_key(&uid, &place_id, now, n)
                })
            }
        }
    }

    /// Delete a place and return how many places have been deleted.
    ///
    /// In guest mode places that are not known by a row id are
    /// deleted by their name instead.
    pub fn delete_place(&self, id: &str) -> Result<usize> {
        match self.session() {
            Session::Guest => {
                let conn = self.db_connections.exclusive()?;
                if Id::from(id).to_rowid().is_some() {
                    usecases::delete_place(&conn, id)?;
                    Ok(1)
                } else {
                    debug!("Deleting places by name '{id}'");
                    Ok(usecases::delete_place_by_name(&conn, id)?)
                }
            }
            Session::LoggedIn { uid, .. } => {
                let repo = self.user_places(&uid)?;
                let place = repo.get_place(id)?;
                usecases::delete_place(&repo, id)?;
                self.discard_photos(&place.photos);
                Ok(1)
            }
        }
    }

    pub fn delete_photo(&self, id: &str, photo: &PhotoRef) -> Result<usecases::PhotoDeletion> {
        match self.session() {
            Session::Guest => {
                let conn = self.db_connections.exclusive()?;
                Ok(usecases::delete_photo_from_place(&conn, id, photo)?)
            }
            Session::LoggedIn { uid, .. } => {
                let deletion =
                    usecases::delete_photo_from_place(&self.user_places(&uid)?, id, photo)?;
                if deletion.removed {
                    self.discard_photos([photo]);
                }
                Ok(deletion)
            }
        }
    }
}
