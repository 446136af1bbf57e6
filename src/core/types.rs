//! core::types
//!
//! Strong types for the simulated repository.
//!
//! # Types
//!
//! - [`CommitId`] - Short hexadecimal commit identifier
//! - [`BranchName`] - Validated branch name
//! - [`FileName`] - Validated working-tree file name
//! - [`FileStatus`] - Change status of a file entry
//! - [`Color`] - `#RRGGBB` display color assigned to a branch
//! - [`UtcTimestamp`] - Creation time of commits and log entries
//!
//! # Validation
//!
//! Identifiers and names are checked when constructed, so the store never
//! holds a branch named `a..b` or a commit id containing `z`.
//!
//! # Examples
//!
//! ```
//! use gitsim::core::types::{BranchName, CommitId};
//!
//! let branch = BranchName::new("feature/login").unwrap();
//! let id = CommitId::new("3fa9c01").unwrap();
//! assert!(id.matches_prefix("3fa"));
//!
//! assert!(BranchName::new("bad..name").is_err());
//! assert!(CommitId::new("not-hex").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// A simulated commit identifier.
///
/// Identifiers are lowercase hexadecimal tokens between 4 and 64
/// characters long. The simulator generates 7-character ids, the same
/// length Git shows in abbreviated output.
///
/// # Example
///
/// ```
/// use gitsim::core::types::CommitId;
///
/// let id = CommitId::new("A1B2C3D").unwrap();
/// assert_eq!(id.as_str(), "a1b2c3d");
/// assert_eq!(id.short(4), "a1b2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId(String);

impl CommitId {
    /// Length of generated and abbreviated identifiers.
    pub const SHORT_LEN: usize = 7;

    /// Create a new validated commit id, normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCommitId` if the token is not 4-64 hex characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into().to_ascii_lowercase();
        if !(4..=64).contains(&id.len()) {
            return Err(TypeError::InvalidCommitId(format!(
                "expected 4 to 64 hex characters, got {}",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidCommitId(
                "commit id must be hexadecimal".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Wrap a token produced by an id generator.
    ///
    /// Generators only emit lowercase hex, so no validation is repeated.
    pub(crate) fn from_generated(hex: String) -> Self {
        debug_assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        Self(hex)
    }

    /// Get the first `len` characters (or the whole id if shorter).
    pub fn short(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }

    /// Abbreviated form used in terminal output.
    pub fn abbrev(&self) -> &str {
        self.short(Self::SHORT_LEN)
    }

    /// Check whether this id starts with the given (case-insensitive) prefix.
    ///
    /// An empty prefix never matches.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.0.starts_with(&prefix.to_ascii_lowercase())
    }

    /// Get the commit id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommitId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CommitId> for String {
    fn from(id: CommitId) -> Self {
        id.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated branch name.
///
/// Follows the parts of `git check-ref-format` that matter for names a
/// learner can type on one line:
/// - Cannot be empty or exactly `@`
/// - Cannot start with `.` or `-`, or end with `/` or `.lock`
/// - Cannot contain `..`, `@{`, `//`, control characters, or any of ``~^:\?*[``
/// - No `/`-separated component may start with `.` or end with `.lock`
///
/// # Example
///
/// ```
/// use gitsim::core::types::BranchName;
///
/// assert!(BranchName::new("main").is_ok());
/// assert!(BranchName::new("feature/x").is_ok());
/// assert!(BranchName::new("-b").is_err());
/// assert!(BranchName::new("HEAD~1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` describing the first broken rule.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if let Some(reason) = Self::violation(&name) {
            return Err(TypeError::InvalidBranchName(reason));
        }
        Ok(Self(name))
    }

    fn violation(name: &str) -> Option<String> {
        const FORBIDDEN_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];
        const FORBIDDEN_SEQUENCES: [&str; 3] = ["..", "@{", "//"];

        if name.is_empty() {
            return Some("branch name cannot be empty".into());
        }
        if name == "@" {
            return Some("branch name cannot be '@' (reserved)".into());
        }
        if let Some(first) = name.chars().next().filter(|c| *c == '.' || *c == '-') {
            return Some(format!("branch name cannot start with '{first}'"));
        }
        if name.ends_with('/') {
            return Some("branch name cannot end with '/'".into());
        }
        if let Some(seq) = FORBIDDEN_SEQUENCES.iter().find(|s| name.contains(**s)) {
            return Some(format!("branch name cannot contain '{seq}'"));
        }
        if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Some(format!("branch name cannot contain '{c}'"));
        }
        if name.chars().any(|c| c.is_ascii_control()) {
            return Some("branch name cannot contain control characters".into());
        }
        name.split('/')
            .filter(|component| !component.is_empty())
            .find_map(|component| {
                if component.starts_with('.') {
                    Some("path component cannot start with '.'".to_string())
                } else if component.ends_with(".lock") {
                    Some("path component cannot end with '.lock'".to_string())
                } else {
                    None
                }
            })
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file name in the simulated working tree.
///
/// Any single token a user can type is accepted except `.`/`..` and
/// names containing whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    /// Create a new validated file name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFileName` for empty, `.`/`..`, or
    /// whitespace-bearing names.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidFileName("file name cannot be empty".into()));
        }
        if name == "." || name == ".." {
            return Err(TypeError::InvalidFileName(format!(
                "'{name}' is a directory, not a file"
            )));
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidFileName(
                "file name cannot contain whitespace or control characters".into(),
            ));
        }
        Ok(Self(name))
    }

    /// Get the file name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FileName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> Self {
        name.0
    }
}

impl PartialEq<str> for FileName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Change status of a file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Untracked,
    Added,
    Modified,
    Deleted,
}

impl FileStatus {
    /// Status a file takes on when it is staged.
    ///
    /// Untracked files become `added`; tracked changes keep their status.
    pub fn staged(self) -> Self {
        match self {
            FileStatus::Untracked => FileStatus::Added,
            other => other,
        }
    }

    /// Lowercase label used in status output.
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Untracked => "untracked",
            FileStatus::Added => "added",
            FileStatus::Modified => "modified",
            FileStatus::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A `#RRGGBB` display color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Create a validated color, normalized to uppercase hex digits.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidColor` unless the value is `#` followed by
    /// six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, TypeError> {
        let value = value.into();
        let digits = value
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| TypeError::InvalidColor(format!("'{value}' is not #RRGGBB")))?;
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// Get the color as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A UTC timestamp, serialized as RFC3339.
///
/// # Example
///
/// ```
/// use gitsim::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// assert!(now.to_string().contains('T'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }

    /// Format the way `git log` prints author dates.
    ///
    /// ```
    /// use chrono::TimeZone;
    /// use gitsim::core::types::UtcTimestamp;
    ///
    /// let ts = UtcTimestamp::from_datetime(chrono::Utc.with_ymd_and_hms(2024, 3, 5, 9, 4, 1).unwrap());
    /// assert_eq!(ts.git_date(), "Tue Mar 5 09:04:01 2024 +0000");
    /// ```
    pub fn git_date(&self) -> String {
        self.0.format("%a %b %-d %H:%M:%S %Y +0000").to_string()
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
