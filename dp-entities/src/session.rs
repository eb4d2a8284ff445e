use crate::{email::*, id::*};

/// Who is using the app and therefore where the data lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Places are kept in the local database.
    #[default]
    Guest,
    /// Places are kept in the document store of the user.
    LoggedIn { uid: Id, email: EmailAddress },
}

impl Session {
    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }

    pub fn uid(&self) -> Option<&Id> {
        match self {
            Self::Guest => None,
            Self::LoggedIn { uid, .. } => Some(uid),
        }
    }
}
