use serde::{Deserialize, Serialize};

/// One broadcastable mood state.
///
/// Entries come from configuration (or the built-in default table) and never
/// change at runtime. `weight` sets the relative selection probability: an
/// entry with weight 10 is drawn twice as often as one with weight 5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    /// Short identifier sent to clients on the wire (e.g. `"epic"`).
    pub key: String,
    /// Relative selection weight. Must be positive; checked when the catalog
    /// is built.
    pub weight: u32,
    /// Human-readable label used in logs.
    pub label: String,
}

impl StateEntry {
    pub fn new(key: impl Into<String>, weight: u32, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            weight,
            label: label.into(),
        }
    }
}
