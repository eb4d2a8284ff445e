use super::prelude::*;
use crate::util::validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name   : String,
    pub last_name    : String,
    pub email        : String,
    pub new_password : Option<String>,
    pub avatar_url   : Option<String>,
}

impl ProfileUpdate {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.to_string(),
            new_password: None,
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

pub fn update_profile<R: UserRepo>(
    repo: &R,
    uid: &str,
    update: ProfileUpdate,
) -> Result<UserProfile> {
    let mut account = repo.get_account(uid)?;
    let ProfileUpdate {
        first_name,
        last_name,
        email,
        new_password,
        avatar_url,
    } = update;
    let first_name = first_name.trim().to_owned();
    if first_name.is_empty() {
        return Err(Error::FirstName);
    }
    if !validate::is_valid_email(email.trim()) {
        return Err(Error::Email);
    }
    let email = email.parse::<EmailAddress>()?;
    if email != account.profile.email {
        if let Some(other) = repo.try_get_account_by_email(&email)? {
            if other.profile.uid != account.profile.uid {
                return Err(Error::UserExists);
            }
        }
    }
    if let Some(password) = new_password.filter(|pw| !pw.is_empty()) {
        account.password = password.parse()?;
    }
    let profile = &mut account.profile;
    profile.first_name = first_name;
    profile.last_name = last_name.trim().to_owned();
    profile.email = email;
    profile.avatar_url = avatar_url
        .map(|url| url.trim().to_owned())
        .filter(|url| !url.is_empty());
    repo.update_account(&account)?;
    log::debug!("Updated profile of user {uid}");
    Ok(account.profile)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn register(db: &MockDb, first_name: &str, email: &str) -> UserProfile {
        sign_up(
            db,
            SignUp {
                first_name: first_name.into(),
                email: email.into(),
                password: "secret1".into(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn change_names_avatar_and_password() {
        let db = MockDb::default();
        let profile = register(&db, "Kamal", "kamal@example.lk");
        let update = ProfileUpdate {
            last_name: " Silva ".into(),
            new_password: Some("secret2".into()),
            avatar_url: Some("file:///avatar.jpg".into()),
            ..ProfileUpdate::from_profile(&profile)
        };
        let updated = update_profile(&db, profile.uid.as_str(), update).unwrap();
        assert_eq!("Kamal Silva", updated.full_name());
        assert_eq!(Some("file:///avatar.jpg"), updated.avatar_url.as_deref());

        let credentials = Credentials {
            email: "kamal@example.lk",
            password: "secret2",
        };
        assert!(login(&db, &credentials).is_ok());
    }

    #[test]
    fn email_of_another_user_is_rejected() {
        let db = MockDb::default();
        let kamal = register(&db, "Kamal", "kamal@example.lk");
        register(&db, "Nimali", "nimali@example.lk");
        let update = ProfileUpdate {
            email: "nimali@example.lk".into(),
            ..ProfileUpdate::from_profile(&kamal)
        };
        let err = update_profile(&db, kamal.uid.as_str(), update).unwrap_err();
        assert!(matches!(err, Error::UserExists));
    }

    #[test]
    fn unknown_user() {
        let db = MockDb::default();
        let err = update_profile(&db, "missing", ProfileUpdate::default()).unwrap_err();
        assert!(matches!(err, Error::Repo(crate::RepoError::NotFound)));
    }
}
