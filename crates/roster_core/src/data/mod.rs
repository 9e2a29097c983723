pub mod reference;

pub use reference::{default_reference, ClubReference, DEFAULT_REFERENCE_YAML};
