use super::prelude::*;
use crate::util::validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct SignUp {
    pub first_name : String,
    pub last_name  : String,
    pub email      : String,
    pub password   : String,
}

pub fn sign_up<R: UserRepo>(repo: &R, sign_up: SignUp) -> Result<UserProfile> {
    let SignUp {
        first_name,
        last_name,
        email,
        password,
    } = sign_up;
    let first_name = first_name.trim().to_owned();
    if first_name.is_empty() {
        return Err(Error::FirstName);
    }
    if !validate::is_valid_email(email.trim()) {
        return Err(Error::Email);
    }
    let email = email.parse::<EmailAddress>()?;
    let password = password.parse::<Password>()?;
    if repo.try_get_account_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let profile = UserProfile {
        uid: Id::new(),
        first_name,
        last_name: last_name.trim().to_owned(),
        email,
        avatar_url: None,
    };
    log::debug!("Creating new account: email = {}", profile.email);
    repo.create_account(&Account {
        profile: profile.clone(),
        password,
    })?;
    Ok(profile)
}
