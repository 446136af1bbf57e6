//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Example
//!
//! ```toml
//! [repository]
//! default_branch = "main"
//! author = "User"
//! seed_file = "README.md"
//! palette = ["#10B981", "#3B82F6"]
//!
//! [session]
//! history_limit = 10
//! deterministic_ids = false
//! ```
//!
//! # Validation
//!
//! Values are checked after parsing: the default branch must be a valid
//! branch name, the seed file a valid file name, and palette entries
//! `#RRGGBB` colors.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::{BranchName, Color, FileName};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// How new repositories are shaped
    pub repository: Option<RepositorySection>,

    /// Session behavior
    pub session: Option<SessionSection>,
}

impl ConfigFile {
    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(repository) = &self.repository {
            repository.validate()?;
        }
        if let Some(session) = &self.session {
            session.validate()?;
        }
        Ok(())
    }
}

/// `[repository]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepositorySection {
    /// Branch created by `git init`
    pub default_branch: Option<String>,

    /// Author recorded on every commit
    pub author: Option<String>,

    /// Untracked file placed in a fresh working directory
    pub seed_file: Option<String>,

    /// Branch colors, assigned in creation order
    pub palette: Option<Vec<String>>,
}

impl RepositorySection {
    /// Validate the repository section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(branch) = &self.default_branch {
            BranchName::new(branch).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid default_branch: {}", e))
            })?;
        }

        if let Some(author) = &self.author {
            if author.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "author cannot be empty".to_string(),
                ));
            }
        }

        if let Some(seed) = &self.seed_file {
            FileName::new(seed)
                .map_err(|e| ConfigError::InvalidValue(format!("invalid seed_file: {}", e)))?;
        }

        if let Some(palette) = &self.palette {
            if palette.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "palette must list at least one color".to_string(),
                ));
            }
            for color in palette {
                Color::new(color)
                    .map_err(|e| ConfigError::InvalidValue(format!("invalid palette: {}", e)))?;
            }
        }

        Ok(())
    }
}

/// `[session]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionSection {
    /// How many commits and log entries the recent views return
    pub history_limit: Option<usize>,

    /// Use sequential commit ids instead of random ones
    pub deterministic_ids: Option<bool>,
}

impl SessionSection {
    /// Validate the session section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == Some(0) {
            return Err(ConfigError::InvalidValue(
                "history_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
