use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::generator::deck::Deck;
use crate::store::file_store::default_data_dir;

const MIN_SESSION_GOAL: u32 = 1;
const MAX_SESSION_GOAL: u32 = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_session_goal")]
    pub session_goal: u32,
    #[serde(default = "default_deck")]
    pub deck: String,
    #[serde(default = "default_data_dir_string")]
    pub data_dir: String,
}

fn default_session_goal() -> u32 {
    10
}
fn default_deck() -> String {
    Deck::IrregularVerbs.key().to_string()
}
fn default_data_dir_string() -> String {
    default_data_dir().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_goal: default_session_goal(),
            deck: default_deck(),
            data_dir: default_data_dir_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("verbdrill")
            .join("config.toml")
    }

    /// Clamp the goal into range and reset an unknown deck to the default.
    /// Call after deserialization or after applying CLI overrides.
    pub fn validate(&mut self) {
        self.session_goal = self.session_goal.clamp(MIN_SESSION_GOAL, MAX_SESSION_GOAL);
        if Deck::from_key(&self.deck).is_none() {
            tracing::warn!("unknown deck {:?}, using {}", self.deck, default_deck());
            self.deck = default_deck();
        }
        if self.data_dir.is_empty() {
            self.data_dir = default_data_dir_string();
        }
    }

    pub fn deck(&self) -> Deck {
        Deck::from_key(&self.deck).unwrap_or(Deck::IrregularVerbs)
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}
