//! Text normalization and stop-word filtering.

mod normalize;
mod stopwords;

pub use normalize::{Normalizer, PUNCTUATION};
pub use stopwords::{StopFilter, StopWords};
