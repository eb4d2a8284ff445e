use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub fn login<R: UserRepo>(repo: &R, login: &Credentials) -> Result<Session> {
    let email = login
        .email
        .parse::<EmailAddress>()
        .map_err(|_| Error::Credentials)?;
    match repo.try_get_account_by_email(&email)? {
        Some(account) if account.password.verify(login.password) => {
            log::debug!("User {} logged in", account.profile.uid);
            Ok(Session::LoggedIn {
                uid: account.profile.uid,
                email: account.profile.email,
            })
        }
        _ => Err(Error::Credentials),
    }
}
