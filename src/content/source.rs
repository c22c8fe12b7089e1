//! Where lesson text comes from
//!
//! A [`ContentSource`] lists logical paths (`grammar/gender-of-nouns.md`)
//! and hands back raw file text for each. The loader never touches the file
//! system directly, so tests and embedders can feed it an in-memory map.

use glob::Pattern;
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::ContentError;
use crate::config::LibraryConfig;

/// Capability to enumerate and read lesson files
pub trait ContentSource {
    /// All logical paths, `/` separated, relative to the source root
    fn paths(&self) -> Result<Vec<String>, ContentError>;

    /// Raw text of one path returned by [`ContentSource::paths`]
    fn read(&self, path: &str) -> Result<String, ContentError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn paths(&self) -> Result<Vec<String>, ContentError> {
        (**self).paths()
    }

    fn read(&self, path: &str) -> Result<String, ContentError> {
        (**self).read(path)
    }
}

/// In-memory path to text map, in insertion order
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    files: IndexMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StaticSource::insert`]
    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<P: Into<String>, T: Into<String>> FromIterator<(P, T)> for StaticSource {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut source = StaticSource::new();
        for (path, text) in iter {
            source.insert(path, text);
        }
        source
    }
}

impl ContentSource for StaticSource {
    fn paths(&self) -> Result<Vec<String>, ContentError> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, path: &str) -> Result<String, ContentError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ContentError::MissingSource(path.to_string()))
    }
}

/// Markdown files under a directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
    extensions: Vec<String>,
    exclude: Vec<Pattern>,
    include_hidden: bool,
}

impl DirSource {
    /// Source over `root` picking up `.md` files
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: vec!["md".to_string()],
            exclude: Vec::new(),
            include_hidden: false,
        }
    }

    /// Source configured from the library settings
    pub fn from_config<P: AsRef<Path>>(root: P, config: &LibraryConfig) -> Result<Self, ContentError> {
        let mut source = Self::new(root).with_extensions(config.extensions.clone());
        source.include_hidden = config.include_hidden;
        for pattern in &config.exclude {
            source = source.exclude(pattern)?;
        }
        Ok(source)
    }

    /// Replace the accepted file extensions (without the dot)
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Skip paths matching a glob, relative to the root
    pub fn exclude(mut self, pattern: &str) -> Result<Self, ContentError> {
        self.exclude.push(Pattern::new(pattern)?);
        Ok(self)
    }

    /// Also walk `.` and `_` prefixed files and directories
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|ext| ext == e))
            .unwrap_or(false)
    }

    fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.iter().any(|p| p.matches(relative))
    }
}

impl ContentSource for DirSource {
    fn paths(&self) -> Result<Vec<String>, ContentError> {
        if !self.root.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.root);
            return Ok(Vec::new());
        }

        let include_hidden = self.include_hidden;
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.has_extension(path) {
                continue;
            }

            let relative = logical_path(&self.root, path);
            if self.is_excluded(&relative) {
                tracing::debug!("Excluded {}", relative);
                continue;
            }
            paths.push(relative);
        }

        paths.sort();
        Ok(paths)
    }

    fn read(&self, path: &str) -> Result<String, ContentError> {
        let full = self.root.join(path);
        let bytes = fs::read(&full).map_err(|source| ContentError::Io { path: full, source })?;

        // Invalid UTF-8 (e.g. Latin-1 umlauts) is malformed content, not a read failure
        Ok(String::from_utf8(bytes).unwrap_or_else(|e| {
            tracing::warn!("{} is not valid UTF-8, decoding lossily", path);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }))
    }
}

/// `.git`, `_drafts` and the like
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || name.starts_with('_'))
        .unwrap_or(false)
}

fn logical_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
