pub mod error;
pub mod format;
pub mod manager;

pub use error::StoreError;
pub use format::RosterFile;
pub use manager::{JsonFileStore, RosterStore};
