//! Leaderboard configuration
//!
//! Values are layered: defaults, then an optional JSON file, then
//! environment variables, then whatever the caller sets explicitly.
//!
//! | Env var               | Field              |
//! |-----------------------|--------------------|
//! | `LEADERBOARD_RANK_BY` | `rank_by`          |
//! | `LEADERBOARD_USER`    | `current_username` |
//! | `LEADERBOARD_QUERY`   | `query`            |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{LeaderboardError, Result};

pub const ENV_RANK_BY: &str = "LEADERBOARD_RANK_BY";
pub const ENV_USER: &str = "LEADERBOARD_USER";
pub const ENV_QUERY: &str = "LEADERBOARD_QUERY";

fn default_rank_by() -> String {
    "score".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for one leaderboard view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeaderboardConfig {
    /// Name of the numeric field rows are ranked by
    #[serde(default = "default_rank_by")]
    pub rank_by: String,

    /// Viewer whose row is pinned (empty = nobody)
    #[serde(default)]
    pub current_username: String,

    /// Username search query (empty = search inactive)
    #[serde(default)]
    pub query: String,

    /// Show medal glyphs for the podium
    #[serde(default = "default_true")]
    pub show_medals: bool,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            rank_by: default_rank_by(),
            current_username: String::new(),
            query: String::new(),
            show_medals: true,
        }
    }
}

impl LeaderboardConfig {
    /// Parse a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loading leaderboard config from {}", path.display());
        Self::from_json(&json)
    }

    /// Defaults or file, then process environment on top
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        let env: HashMap<String, String> = std::env::vars().collect();
        base.with_overrides(&env)
    }

    /// Apply `LEADERBOARD_*` overrides from a variable map
    pub fn with_overrides(mut self, vars: &HashMap<String, String>) -> Result<Self> {
        if let Some(rank_by) = vars.get(ENV_RANK_BY) {
            self.rank_by = rank_by.clone();
        }
        if let Some(user) = vars.get(ENV_USER) {
            self.current_username = user.clone();
        }
        if let Some(query) = vars.get(ENV_QUERY) {
            self.query = query.clone();
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.rank_by.trim().is_empty() {
            return Err(LeaderboardError::Config("rank_by must name a field".to_string()));
        }
        Ok(())
    }
}

impl std::fmt::Display for LeaderboardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rank_by={}, user='{}', query='{}', medals={}",
            self.rank_by, self.current_username, self.query, self.show_medals
        )
    }
}
