//! Mail entries and their file-backed store.

pub mod entry;
pub mod repository;
pub mod store;

pub use entry::MailEntry;
pub use repository::MailRepository;
pub use store::MailStore;
