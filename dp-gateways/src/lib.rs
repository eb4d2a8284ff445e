pub mod document_store;
pub mod geocoding;
pub mod photo_storage;
pub mod session;

