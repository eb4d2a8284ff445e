use dp_core::{entities::PhotoRef, gateways::photo_storage::PhotoStorage, repositories as repo};
use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

type Result<T> = std::result::Result<T, repo::Error>;

/// Stores photos as files below a root directory.
#[derive(Debug, Clone)]
pub struct FsPhotoStorage {
    root: PathBuf,
}

impl FsPhotoStorage {
    pub fn try_new<P: AsRef<Path>>(root: P) -> io::Result<Self> {
        fs::create_dir_all(root.as_ref())?;
        // Absolute paths are needed for file:// URLs
        let root = root.as_ref().canonicalize()?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    fn managed_path(&self, photo: &PhotoRef) -> Option<PathBuf> {
        let path = Path::new(photo.local_path()?);
        path.starts_with(&self.root).then(|| path.to_path_buf())
    }
}

impl PhotoStorage for FsPhotoStorage {
    fn store(&self, key: &str, source: &Path) -> Result<PhotoRef> {
        let key = key.trim_start_matches('/');
        let escapes_root = Path::new(key)
            .components()
            .any(|c| c == Component::ParentDir);
        if key.is_empty() || escapes_root {
            return Err(anyhow::anyhow!("Invalid photo key: '{key}'").into());
        }
        let target = self.root.join(key);
        let photo: PhotoRef = format!("file://{}", target.display())
            .parse()
            .map_err(|err| anyhow::anyhow!("No valid photo reference for key '{key}': {err}"))?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &target).inspect_err(|err| {
            log::warn!("Failed to store photo {}: {err}", source.display());
        })?;
        log::debug!("Stored photo {} as {key}", source.display());
        Ok(photo)
    }

    fn remove(&self, photo: &PhotoRef) -> Result<()> {
        let Some(path) = self.managed_path(photo) else {
            log::debug!("Photo {photo} is not managed by this storage");
            return Ok(());
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("Removed photo {}", path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("Photo {} has already been removed", path.display());
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
