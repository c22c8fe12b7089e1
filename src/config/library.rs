//! Library configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::ContentError;

/// Main library configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Display name used by the CLI
    pub title: String,

    /// Directory holding the lesson files, relative to the base directory
    pub content_dir: String,

    /// File extensions picked up as lessons, without the dot
    pub extensions: Vec<String>,

    /// Glob patterns (relative to `content_dir`) to skip
    pub exclude: Vec<String>,

    /// Walk `.` and `_` prefixed files and directories too
    pub include_hidden: bool,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            title: "Lessons".to_string(),
            content_dir: "content".to_string(),
            extensions: vec!["md".to_string()],
            exclude: Vec::new(),
            include_hidden: false,
            extra: HashMap::new(),
        }
    }
}

impl LibraryConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration text; an empty document yields the defaults
    pub fn parse(content: &str) -> Result<Self, ContentError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
