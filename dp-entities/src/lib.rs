//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # dp-entities
//!
//! Reusable, agnostic domain entities for Dream Places.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic, i.e. nothing here knows whether a
//! place lives in the local database or in the document store.

pub mod email;
pub mod geo;
pub mod id;
pub mod password;
pub mod photo;
pub mod place;
pub mod rating;
pub mod session;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
