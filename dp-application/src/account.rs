use super::*;
use crate::backend::Backend;

impl Backend {
    fn remember(&self, profile: &UserProfile) -> Result<Session> {
        let session = Session::LoggedIn {
            uid: profile.uid.clone(),
            email: profile.email.clone(),
        };
        self.sessions.save(&session)?;
        Ok(session)
    }

    /// Register a new user who is logged in afterwards.
    pub fn sign_up(&self, sign_up: usecases::SignUp) -> Result<UserProfile> {
        let profile = usecases::sign_up(&self.documents, sign_up)?;
        self.remember(&profile)?;
        info!("Signed up new user {}", profile.uid);
        Ok(profile)
    }

    pub fn log_in(&self, email: &str, password: &str) -> Result<Session> {
        let credentials = usecases::Credentials { email, password };
        let session = usecases::login(&self.documents, &credentials)?;
        self.sessions.save(&session)?;
        Ok(session)
    }

    /// Back to guest mode.
    pub fn log_out(&self) -> Result<()> {
        self.sessions.clear()?;
        Ok(())
    }

    /// The profile of the logged-in user, if any.
    pub fn current_profile(&self) -> Result<Option<UserProfile>> {
        let Some(uid) = self.session().uid().cloned() else {
            return Ok(None);
        };
        match self.documents.get_profile(uid.as_str()) {
            Ok(profile) => Ok(Some(profile)),
            Err(dp_core::RepoError::NotFound) => {
                warn!("The account of user {uid} does not exist anymore");
                self.log_out()?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn update_profile(&self, update: usecases::ProfileUpdate) -> Result<UserProfile> {
        let uid = self.logged_in_uid()?;
        let profile = usecases::update_profile(&self.documents, uid.as_str(), update)?;
        self.remember(&profile)?;
        Ok(profile)
    }

    /// Delete the logged-in user with all places and photos.
    pub fn delete_account(&self) -> Result<usize> {
        let uid = self.logged_in_uid()?;
        let places = self.user_places(&uid)?;
        let deleted = usecases::delete_account(&self.documents, &places, uid.as_str())?;
        self.discard_photos(deleted.iter().flat_map(|place| &place.photos));
        self.log_out()?;
        Ok(deleted.len())
    }

    pub fn greeting(&self, hour: u8) -> Result<String> {
        let profile = self.current_profile()?;
        Ok(usecases::greeting(
            hour,
            profile.as_ref().map(|p| p.first_name.as_str()),
        ))
    }
}
