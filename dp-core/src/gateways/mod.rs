pub mod geocode;
pub mod photo_storage;
