use std::{fmt, str::FromStr};
use thiserror::Error;

/// Location of a photo.
///
/// Either a `file://` URI of a copy in local storage or the
/// download URL of an uploaded object. Lists of photos are
/// joined with commas in the local database, so a reference
/// must never contain one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoRef(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoRefParseError {
    #[error("Empty photo reference")]
    Empty,
    #[error("Photo reference must not contain a separator: {0}")]
    Separator(String),
}

impl PhotoRef {
    pub const SEPARATOR: char = ',';

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The local file system path if the photo is stored locally.
    pub fn local_path(&self) -> Option<&str> {
        self.0.strip_prefix("file://")
    }
}

impl FromStr for PhotoRef {
    type Err = PhotoRefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhotoRefParseError::Empty);
        }
        if trimmed.contains(Self::SEPARATOR) {
            return Err(PhotoRefParseError::Separator(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PhotoRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_photo_refs() {
        assert_eq!(Err(PhotoRefParseError::Empty), " ".parse::<PhotoRef>());
        assert!(matches!(
            "a,b".parse::<PhotoRef>(),
            Err(PhotoRefParseError::Separator(_))
        ));
        let photo: PhotoRef = " file:///data/img_1.jpg ".parse().unwrap();
        assert_eq!("file:///data/img_1.jpg", photo.as_str());
        assert_eq!(Some("/data/img_1.jpg"), photo.local_path());
        let remote: PhotoRef = "https://storage.example/photo_1.jpg".parse().unwrap();
        assert_eq!(None, remote.local_path());
    }
}
