//! Library side of the `tome` binary: configuration, logging, and the batch
//! pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;

pub use config::{Catalog, Overrides, RunConfig};
pub use pipeline::Pipeline;
