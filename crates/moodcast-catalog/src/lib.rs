//! `moodcast-catalog` — the weighted mood-state table and its sampler.
//!
//! A [`StateCatalog`] is built once at startup from the configured entries
//! and never mutated. Sampling draws a uniform integer in
//! `[0, total_weight)` and walks the entries accumulating weight, so each
//! entry is selected with probability `weight / total_weight`.

pub mod catalog;
pub mod error;

pub use catalog::StateCatalog;
pub use error::{CatalogError, Result};
