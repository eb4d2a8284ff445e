
pub mod prelude {
    use std::{
        fs,
        path::{Path, PathBuf},
    };
    use tempfile::TempDir;

    pub use dp_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{backend::Backend, error::AppError};

    pub struct BackendFixture {
        pub backend: Backend,
        pub data_dir: TempDir,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            dp_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            let data_dir = tempfile::tempdir().unwrap();
            let backend = Backend::init(db_connections, data_dir.path()).unwrap();
            Self { backend, data_dir }
        }

        /// A fake camera picture.
        pub fn photo_file(&self, name: &str) -> PathBuf {
            let path = self.data_dir.path().join(name);
            fs::write(&path, name.as_bytes()).unwrap();
            path
        }

        pub fn add_place(&self, name: &str, city: &str, pos: Option<(f64, f64)>) -> DreamPlace {
            self.backend
                .add_place(
                    usecases::NewPlace {
                        name: name.into(),
                        city: city.into(),
                        pos: pos.map(|(lat, lng)| MapPoint::from_lat_lng_deg(lat, lng)),
                        ..Default::default()
                    },
                    &[],
                )
                .unwrap()
        }

        pub fn sign_up(&self, first_name: &str, email: &str) -> UserProfile {
            self.backend
                .sign_up(usecases::SignUp {
                    first_name: first_name.into(),
                    last_name: String::new(),
                    email: email.into(),
                    password: "secret1".into(),
                })
                .unwrap()
        }

        pub fn stored_file(photo: &PhotoRef) -> &Path {
            Path::new(photo.local_path().unwrap())
        }
    }
}
