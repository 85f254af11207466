//! Service layer for the mail store.
//! - `storage` holds the generic JSON file persistence.
//! - `mail` defines entries, the file-backed store and the repository trait
//!   consumed by the HTTP layer.

pub mod errors;
pub mod storage;
pub mod mail;
