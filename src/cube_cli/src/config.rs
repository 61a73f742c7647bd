use std::{collections::BTreeMap, fs, io, path::Path};

use cube_core::{Direction, Face, Move, Placement};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which key triggers which quarter turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings(BTreeMap<char, Move>);

impl KeyBindings {
    pub fn new(bindings: impl IntoIterator<Item = (char, Move)>) -> KeyBindings {
        KeyBindings(bindings.into_iter().collect())
    }

    #[must_use]
    pub fn get(&self, key: char) -> Option<Move> {
        self.0.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Move)> + '_ {
        self.0.iter().map(|(&key, &move_)| (key, move_))
    }

    /// Translate every key of `keys`, skipping whitespace.
    ///
    /// # Errors
    ///
    /// On the first key without a binding; nothing is returned for the keys
    /// before it
    pub fn translate(&self, keys: &str) -> Result<Vec<Move>, UnboundKey> {
        keys.chars()
            .filter(|key| !key.is_whitespace())
            .map(|key| self.get(key).ok_or(UnboundKey(key)))
            .collect()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Direction::{Clockwise as Cw, CounterClockwise as Ccw};

        KeyBindings::new([
            ('q', Move::new(Face::Front, Ccw)),
            ('e', Move::new(Face::Front, Cw)),
            ('w', Move::new(Face::Left, Ccw)),
            ('s', Move::new(Face::Left, Cw)),
            ('a', Move::new(Face::Down, Ccw)),
            ('d', Move::new(Face::Down, Cw)),
            ('i', Move::new(Face::Right, Cw)),
            ('k', Move::new(Face::Right, Ccw)),
            ('j', Move::new(Face::Up, Cw)),
            ('l', Move::new(Face::Up, Ccw)),
            ('u', Move::new(Face::Back, Cw)),
            ('o', Move::new(Face::Back, Ccw)),
        ])
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The key `{0}` is not bound to a move")]
pub struct UnboundKey(pub char);

/// Driver configuration, usually read from `cube.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides the default layout of the printed net
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// Replaces the default key bindings entirely when present
    #[serde(default)]
    pub keys: KeyBindings,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read the configuration file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("Failed to parse the configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// # Errors
    ///
    /// If `text` is not valid TOML or describes an invalid placement or key
    /// binding
    pub fn parse(text: &str) -> Result<Config, ConfigError> {
        let config = toml::from_str::<Config>(text)?;

        debug!(
            "Parsed configuration with {} key bindings and {} placement",
            config.keys.0.len(),
            if config.placement.is_some() {
                "a custom"
            } else {
                "the standard"
            }
        );

        Ok(config)
    }

    /// # Errors
    ///
    /// If the file cannot be read or does not parse
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        info!("Loading configuration from {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Config::parse(&text)
    }

    /// The placement to draw with, falling back to the standard net
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement.clone().unwrap_or_default()
    }
}
