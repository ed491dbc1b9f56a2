use common::config::{ConfigStore, Validate, YamlConfigSerializer};
use common::games::tictactoe::{Difficulty, GameMode};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

pub type ClientConfigStore = ConfigStore<ClientConfig, YamlConfigSerializer>;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Pause before the computer answers a human move.
    pub computer_delay_ms: u64,
    pub log_prefix: Option<String>,
    pub debug_log: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::UserVsUser,
            difficulty: Difficulty::Normal,
            computer_delay_ms: 500,
            log_prefix: None,
            debug_log: false,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must be at most {}, got {}",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        if self.log_prefix.as_deref().is_some_and(str::is_empty) {
            return Err("log_prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}
