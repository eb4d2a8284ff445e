use dp_core::entities::{EmailAddress, Session};
use jfs::{Config, Store};
use serde::{Deserialize, Serialize};
use std::{io, path::Path};

const CURRENT: &str = "current";

#[derive(Debug, Deserialize, Serialize)]
struct SessionDoc {
    uid: String,
    email: String,
}

/// Remembers who is logged in between two invocations.
#[derive(Clone)]
pub struct SessionStore {
    store: Store,
}

impl SessionStore {
    /// Opens `<path>.json`, a single file for all sessions.
    pub fn try_new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let cfg = Config {
            single: true,
            pretty: true,
            ..Default::default()
        };
        let store = Store::new_with_cfg(path, cfg)?;
        Ok(Self { store })
    }

    /// The stored session or a guest session.
    pub fn load(&self) -> Session {
        match self.store.get::<SessionDoc>(CURRENT) {
            Ok(SessionDoc { uid, email }) => Session::LoggedIn {
                uid: uid.into(),
                email: EmailAddress::new_unchecked(email),
            },
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    log::warn!("Failed to load session, continuing as guest: {err}");
                }
                Session::Guest
            }
        }
    }

    pub fn save(&self, session: &Session) -> io::Result<()> {
        match session {
            Session::Guest => self.clear(),
            Session::LoggedIn { uid, email } => {
                let doc = SessionDoc {
                    uid: uid.to_string(),
                    email: email.to_string(),
                };
                self.store.save_with_id(&doc, CURRENT).map(|_| ())
            }
        }
    }

    pub fn clear(&self) -> io::Result<()> {
        match self.store.delete(CURRENT) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_until_logged_in() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::try_new(dir.path().join("session")).unwrap();
        assert_eq!(Session::Guest, store.load());

        let session = Session::LoggedIn {
            uid: "u1".into(),
            email: "kamal@example.lk".parse().unwrap(),
        };
        store.save(&session).unwrap();
        assert_eq!(session, store.load());
        assert_eq!(
            session,
            SessionStore::try_new(dir.path().join("session"))
                .unwrap()
                .load()
        );

        store.save(&Session::Guest).unwrap();
        assert_eq!(Session::Guest, store.load());
        store.clear().unwrap();
    }
}
