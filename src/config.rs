//! Game setup that can be changed without recompiling: the demo pirate, where they start, and how the process exits.
//!
//! Everything has a default, so a missing config file is fine and a partial one only overrides what it names.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    player::{Gender, ShipType, WeaponType},
    world::LocationId,
};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "PIRATE_QUEST_CONFIG";

/// Everything about the starting pirate except their name, which is always asked for.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerDefaults {
    pub age: u32,
    pub gender: Gender,
    pub personality: bool,
    pub coin: u64,
    pub ship: ShipType,
    pub ship_name: String,
    pub weapon: WeaponType,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            age: 50,
            gender: Gender::Male,
            personality: true,
            coin: 1_000_000,
            ship: ShipType::BritishManOWar,
            ship_name: "Queen Anne's Revenge".into(),
            weapon: WeaponType::Dynamite,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub player: PlayerDefaults,
    /// Must be an island in the universe; checked when the session starts.
    pub start_location: LocationId,
    /// Process exit code for both ways of quitting normally: declining the splash screen, and choosing Exit.
    pub exit_code: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerDefaults::default(),
            start_location: LocationId(1),
            exit_code: 0,
        }
    }
}

impl GameConfig {
    /// Load the file named by [`CONFIG_ENV`], or the defaults if it isn't set.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_path(path),
            _ => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw).map_err(|source| Error::Config {
            path: path.into(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
