use crate::{email::*, id::*, password::*};

/// Public part of a registered user.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub uid        : Id,
    pub first_name : String,
    pub last_name  : String,
    pub email      : EmailAddress,
    pub avatar_url : Option<String>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

/// A profile together with its credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub profile: UserProfile,
    pub password: Password,
}
