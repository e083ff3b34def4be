use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::types::StateEntry;

/// Default WebSocket listen port.
pub const DEFAULT_PORT: u16 = 9002;
/// Default bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Default lower bound for the randomized broadcast delay (inclusive).
pub const DEFAULT_MIN_DELAY_MS: u64 = 5_000;
/// Default upper bound for the randomized broadcast delay (inclusive).
pub const DEFAULT_MAX_DELAY_MS: u64 = 15_000;
/// Per-connection outbound buffer, in payloads. At the multi-second broadcast
/// cadence a full buffer means the client has been wedged for minutes.
pub const OUTBOUND_BUFFER: usize = 32;

/// Top-level configuration (moodcast.toml + `MOODCAST_*` env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodcastConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
    /// The broadcastable state table. Defaults to the built-in set when the
    /// config file defines no `[[states]]` entries.
    #[serde(default = "default_states")]
    pub states: Vec<StateEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Bounds for the randomized pause between broadcasts. Both ends inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for MoodcastConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            simulator: SimulatorConfig::default(),
            states: default_states(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl MoodcastConfig {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Checks in order:
    /// 1. Explicit path argument
    /// 2. `MOODCAST_CONFIG` env var (resolved by the caller)
    /// 3. `~/.moodcast/moodcast.toml`
    ///
    /// Env vars use the `MOODCAST_` prefix with `__` as the section
    /// separator, e.g. `MOODCAST_SERVER__PORT=9100`.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("MOODCAST_").split("__"))
            .extract()
            .map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Reject configurations the simulator cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.simulator.min_delay_ms > self.simulator.max_delay_ms {
            return Err(CoreError::Config(format!(
                "simulator.min_delay_ms ({}) must not exceed simulator.max_delay_ms ({})",
                self.simulator.min_delay_ms, self.simulator.max_delay_ms
            )));
        }
        Ok(())
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{home}/.moodcast/moodcast.toml")
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_min_delay_ms() -> u64 {
    DEFAULT_MIN_DELAY_MS
}

fn default_max_delay_ms() -> u64 {
    DEFAULT_MAX_DELAY_MS
}

/// Built-in state table used when the config file defines none.
pub fn default_states() -> Vec<StateEntry> {
    vec![
        StateEntry::new("reset", 25, "Normal Exploration (Reset)"),
        StateEntry::new("epic", 10, "Epic Battle"),
        StateEntry::new("lofi", 8, "Lo-Fi / Flashback"),
        StateEntry::new("claustro", 7, "Claustrophobic"),
        StateEntry::new("anxiety", 8, "Anxiety"),
        StateEntry::new("heroic", 7, "Heroic Moment"),
        StateEntry::new("warmth", 7, "Warmth"),
        StateEntry::new("intimacy", 6, "Intimacy"),
        StateEntry::new("cold", 6, "Cold / Digital"),
        StateEntry::new("panic", 5, "Panic"),
        StateEntry::new("suspense", 5, "Suspense"),
        StateEntry::new("horror", 4, "Horror"),
        StateEntry::new("empty", 5, "Empty / Distant"),
        StateEntry::new("underwater", 4, "Underwater"),
        StateEntry::new("dreamy", 5, "Dreamy"),
        StateEntry::new("ethereal", 5, "Ethereal"),
        StateEntry::new("retro", 6, "Retro 80s"),
        StateEntry::new("dirty", 4, "Dirty / Industrial"),
        StateEntry::new("robotic", 4, "Robotic"),
        StateEntry::new("glitch", 3, "Glitch"),
        StateEntry::new("psychedelic", 4, "Psychedelic"),
        StateEntry::new("memory", 4, "Inner Monologue"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = MoodcastConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 9002);
        assert_eq!(config.simulator.min_delay_ms, 5_000);
        assert_eq!(config.simulator.max_delay_ms, 15_000);
        assert_eq!(config.states.len(), 22);

        let total: u64 = config.states.iter().map(|s| u64::from(s.weight)).sum();
        assert_eq!(total, 142);
    }

    #[test]
    fn default_config_passes_validation() {
        MoodcastConfig::default().validate().unwrap();
    }

    #[test]
    fn toml_overrides_defaults() {
        let config: MoodcastConfig = Figment::new()
            .merge(Toml::string(
                r#"
                [server]
                port = 9100

                [simulator]
                min_delay_ms = 100
                max_delay_ms = 200

                [[states]]
                key = "calm"
                weight = 1
                label = "Calm"
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert_eq!(config.simulator.min_delay_ms, 100);
        assert_eq!(config.simulator.max_delay_ms, 200);
        assert_eq!(config.states.len(), 1);
        assert_eq!(config.states[0].key, "calm");
    }

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: MoodcastConfig = Figment::new()
            .merge(Toml::string(""))
            .extract()
            .unwrap();

        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.states.len(), 22);
    }

    #[test]
    fn validate_rejects_inverted_delay_bounds() {
        let mut config = MoodcastConfig::default();
        config.simulator.min_delay_ms = 20_000;
        config.simulator.max_delay_ms = 10_000;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_delay_ms"));
    }
}
