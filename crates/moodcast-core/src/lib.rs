//! `moodcast-core` — shared configuration, data types, and errors for the
//! moodcast workspace.
//!
//! Everything here is transport-agnostic: the catalog and gateway crates
//! build on these types, never the other way around.

pub mod config;
pub mod error;
pub mod types;

pub use config::MoodcastConfig;
pub use error::{CoreError, Result};
pub use types::StateEntry;
