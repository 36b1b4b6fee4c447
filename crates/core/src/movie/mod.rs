//! Movie records and the typed attribute model used by catalog search.

mod types;

pub use types::*;
