//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! The first existing file wins:
//! 1. An explicit path (the `--config` flag)
//! 2. `$GITSIM_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/gitsim/config.toml`
//! 4. `~/.gitsim/config.toml`
//!
//! Missing files are not an error; built-in defaults apply. An explicit
//! path that does not exist is reported as a warning.
//!
//! # Example
//!
//! ```no_run
//! use gitsim::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//! println!("default branch: {}", config.default_branch());
//! println!("history limit: {}", config.history_limit());
//! ```

pub mod schema;

pub use schema::{ConfigFile, RepositorySection, SessionSection};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::{BranchName, Color, FileName};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "GITSIM_CONFIG";

/// Branch colors used when the config does not supply a palette.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#10B981", // green
    "#3B82F6", // blue
    "#F59E0B", // amber
    "#EF4444", // red
    "#8B5CF6", // violet
    "#06B6D4", // cyan
    "#F97316", // orange
    "#EC4899", // pink
];

const DEFAULT_BRANCH: &str = "main";
const DEFAULT_AUTHOR: &str = "User";
const DEFAULT_SEED_FILE: &str = "README.md";
/// Recent-entry count for panels when the config sets none.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Settings the store needs to shape new repositories and commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSettings {
    pub default_branch: BranchName,
    pub author: String,
    pub seed_file: FileName,
    pub palette: Vec<Color>,
}

impl RepoSettings {
    /// Color for the `index`th branch, cycling through the palette.
    ///
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn color_for(&self, index: usize) -> Color {
        match self.palette.len() {
            0 => {
                let hex = DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
                Color::new(hex).expect("built-in palette colors are valid")
            }
            len => self.palette[index % len].clone(),
        }
    }
}

impl Default for RepoSettings {
    fn default() -> Self {
        Config::default().repo_settings()
    }
}

/// Loaded configuration with accessors that apply defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The parsed file (empty when no file was found)
    pub file: ConfigFile,
    /// Where the file was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the first existing location.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let candidates = Self::candidate_paths(
            explicit,
            |key| std::env::var(key).ok(),
            dirs::home_dir(),
        );
        Self::load_first(explicit, &candidates)
    }

    /// Load from an ordered candidate list.
    fn load_first(
        explicit: Option<&Path>,
        candidates: &[PathBuf],
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        if let Some(path) = explicit {
            if !path.exists() {
                warnings.push(ConfigWarning {
                    message: "config file not found, using defaults".to_string(),
                    path: path.to_path_buf(),
                });
            }
        }

        for path in candidates {
            if path.exists() {
                let config = Self::load_from(path)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(ConfigLoadResult { config, warnings });
            }
        }

        Ok(ConfigLoadResult {
            config: Config::default(),
            warnings,
        })
    }

    /// Read, parse, and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Config {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Ordered search locations.
    pub fn candidate_paths(
        explicit: Option<&Path>,
        var: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = explicit {
            paths.push(path.to_path_buf());
        }
        if let Some(path) = var(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }
        if let Some(xdg) = var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("gitsim/config.toml"));
        }
        if let Some(home) = home {
            paths.push(home.join(".gitsim/config.toml"));
        }
        paths
    }

    /// Path the configuration was loaded from, if any.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn repository(&self) -> Option<&RepositorySection> {
        self.file.repository.as_ref()
    }

    fn session(&self) -> Option<&SessionSection> {
        self.file.session.as_ref()
    }

    /// Branch created by `git init` (default: `main`).
    pub fn default_branch(&self) -> &str {
        self.repository()
            .and_then(|r| r.default_branch.as_deref())
            .unwrap_or(DEFAULT_BRANCH)
    }

    /// Commit author (default: `User`).
    pub fn author(&self) -> &str {
        self.repository()
            .and_then(|r| r.author.as_deref())
            .unwrap_or(DEFAULT_AUTHOR)
    }

    /// File seeded into a fresh working directory (default: `README.md`).
    pub fn seed_file(&self) -> &str {
        self.repository()
            .and_then(|r| r.seed_file.as_deref())
            .unwrap_or(DEFAULT_SEED_FILE)
    }

    /// Branch palette.
    pub fn palette(&self) -> Vec<&str> {
        match self.repository().and_then(|r| r.palette.as_ref()) {
            Some(colors) => colors.iter().map(String::as_str).collect(),
            None => DEFAULT_PALETTE.to_vec(),
        }
    }

    /// Size of the recent-commits and recent-history views (default: 10).
    pub fn history_limit(&self) -> usize {
        self.session()
            .and_then(|s| s.history_limit)
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    /// Whether commit ids are sequential (default: false).
    pub fn deterministic_ids(&self) -> bool {
        self.session()
            .and_then(|s| s.deterministic_ids)
            .unwrap_or(false)
    }

    /// Resolve the store settings.
    ///
    /// Values were validated on load; anything that still fails to parse
    /// falls back to the built-in default.
    pub fn repo_settings(&self) -> RepoSettings {
        let default_branch = BranchName::new(self.default_branch()).unwrap_or_else(|_| {
            BranchName::new(DEFAULT_BRANCH).expect("built-in default branch is valid")
        });
        let seed_file = FileName::new(self.seed_file()).unwrap_or_else(|_| {
            FileName::new(DEFAULT_SEED_FILE).expect("built-in seed file is valid")
        });
        let mut palette: Vec<Color> = self
            .palette()
            .into_iter()
            .filter_map(|c| Color::new(c).ok())
            .collect();
        if palette.is_empty() {
            palette = DEFAULT_PALETTE
                .iter()
                .filter_map(|c| Color::new(*c).ok())
                .collect();
        }

        RepoSettings {
            default_branch,
            author: self.author().to_string(),
            seed_file,
            palette,
        }
    }

    /// Render the effective configuration (defaults filled in) as TOML.
    pub fn to_effective_toml(&self) -> Result<String, ConfigError> {
        let effective = ConfigFile {
            repository: Some(RepositorySection {
                default_branch: Some(self.default_branch().to_string()),
                author: Some(self.author().to_string()),
                seed_file: Some(self.seed_file().to_string()),
                palette: Some(self.palette().into_iter().map(String::from).collect()),
            }),
            session: Some(SessionSection {
                history_limit: Some(self.history_limit()),
                deterministic_ids: Some(self.deterministic_ids()),
            }),
        };
        toml::to_string_pretty(&effective).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_files() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let result = Config::load_first(None, &[missing]).unwrap();
        let config = result.config;

        assert_eq!(config.default_branch(), "main");
        assert_eq!(config.author(), "User");
        assert_eq!(config.seed_file(), "README.md");
        assert_eq!(config.palette().len(), 8);
        assert_eq!(config.history_limit(), 10);
        assert!(!config.deterministic_ids());
        assert!(config.loaded_from().is_none());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn first_existing_candidate_wins() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first.toml");
        let second = temp.path().join("second.toml");
        fs::write(&second, "[repository]\ndefault_branch = \"trunk\"\n").unwrap();
        fs::write(&first, "[session]\nhistory_limit = 3\n").unwrap();

        let result = Config::load_first(None, &[first.clone(), second]).unwrap();
        assert_eq!(result.config.history_limit(), 3);
        assert_eq!(result.config.default_branch(), "main");
        assert_eq!(result.config.loaded_from(), Some(first.as_path()));
    }

    #[test]
    fn missing_explicit_path_warns() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        let result = Config::load_first(Some(&missing), &[missing.clone()]).unwrap();
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, missing);
    }

    #[test]
    fn parse_error_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        match Config::load_from(&path) {
            Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_values_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[repository]\npalette = [\"red\"]\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn candidate_order() {
        let paths = Config::candidate_paths(
            Some(Path::new("/explicit.toml")),
            |key| match key {
                CONFIG_ENV => Some("/env.toml".to_string()),
                "XDG_CONFIG_HOME" => Some("/xdg".to_string()),
                _ => None,
            },
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/explicit.toml"),
                PathBuf::from("/env.toml"),
                PathBuf::from("/xdg/gitsim/config.toml"),
                PathBuf::from("/home/u/.gitsim/config.toml"),
            ]
        );
    }

    #[test]
    fn repo_settings_use_configured_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r##"
            [repository]
            default_branch = "trunk"
            author = "Ada"
            seed_file = "NOTES.md"
            palette = ["#000000", "#ffffff"]
            "##,
        )
        .unwrap();

        let settings = Config::load_from(&path).unwrap().repo_settings();
        assert_eq!(settings.default_branch.as_str(), "trunk");
        assert_eq!(settings.author, "Ada");
        assert_eq!(settings.seed_file.as_str(), "NOTES.md");
        assert_eq!(settings.color_for(0).as_str(), "#000000");
        assert_eq!(settings.color_for(3).as_str(), "#FFFFFF");
    }

    #[test]
    fn effective_toml_includes_defaults() {
        let rendered = Config::default().to_effective_toml().unwrap();
        assert!(rendered.contains("default_branch = \"main\""));
        assert!(rendered.contains("history_limit = 10"));
    }
}
