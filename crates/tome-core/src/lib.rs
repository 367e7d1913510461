//! Tome core domain types and errors.

mod error;
mod types;

pub use error::TomeError;
pub use types::{FrequentTerm, Mode, ScoredTerm, Sentiment, SourceSpec};

/// Result alias used across the Tome crates.
pub type Result<T> = std::result::Result<T, TomeError>;
