use std::{fmt, str::FromStr};
use thiserror::Error;

/// A bcrypt hashed password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("The password must have at least {} characters", Password::min_len())]
    TooShort,
    #[error("The password must contain at least one digit")]
    MissingDigit,
    #[error("Failed to hash the password")]
    Hash,
}

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    /// Checks the rules for new plain text passwords.
    pub fn check_plain(plain: &str) -> Result<(), ParseError> {
        if plain.chars().count() < Self::min_len() {
            return Err(ParseError::TooShort);
        }
        if !plain.chars().any(|c| c.is_ascii_digit()) {
            return Err(ParseError::MissingDigit);
        }
        Ok(())
    }

    pub fn verify(&self, password: &str) -> bool {
        pwhash::bcrypt::verify(password, &self.0)
    }

    /// Wraps an already hashed password, e.g. when loading from storage.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        Self::check_plain(password)?;
        let res = Self(pwhash::bcrypt::hash(password).map_err(|_| ParseError::Hash)?);
        debug_assert!(res.verify(password));
        Ok(res)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("********")
    }
}
