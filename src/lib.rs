//! lesson-content: loads Bulgarian/German lesson markdown
//!
//! Lesson files carry a small `---` front-matter block. This crate parses
//! that block leniently, fills in a title and date where they are missing,
//! and exposes the result as a sorted [`content::PostCollection`] with
//! lookups by type, slug, level and tag.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, DirSource, PostCollection};

/// A lesson library rooted at a directory
#[derive(Debug, Clone)]
pub struct Library {
    /// Library configuration
    pub config: config::LibraryConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
}

impl Library {
    /// Open a library, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::LibraryConfig::load(&config_path)?
        } else {
            config::LibraryConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Directory source honouring the configured extensions and excludes
    pub fn source(&self) -> Result<DirSource> {
        Ok(DirSource::from_config(&self.content_dir, &self.config)?)
    }

    /// Loader over the content directory
    pub fn loader(&self) -> Result<ContentLoader<DirSource>> {
        Ok(ContentLoader::new(self.source()?))
    }

    /// Read and parse every lesson
    pub fn load(&self) -> Result<PostCollection> {
        Ok(self.loader()?.load()?)
    }

    /// Scaffold a new library in the base directory
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_library_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let library = Library::new(dir.path()).unwrap();
        assert_eq!(library.content_dir, dir.path().join("content"));
        assert!(library.load().unwrap().is_empty());
    }

    #[test]
    fn test_library_loads_configured_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: lessons\nexclude:\n  - \"drafts/*\"\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("lessons/grammar")).unwrap();
        fs::create_dir_all(dir.path().join("lessons/drafts")).unwrap();
        fs::write(
            dir.path().join("lessons/grammar/gender-of-nouns.md"),
            "---\ntitle: \"Gender of Nouns\"\ntype: grammar\nweight: 10\n---\nBody\n",
        )
        .unwrap();
        fs::write(dir.path().join("lessons/drafts/wip.md"), "wip").unwrap();

        let library = Library::new(dir.path()).unwrap();
        let posts = library.load().unwrap();
        assert_eq!(posts.len(), 1);

        let post = posts.by_slug("grammar/gender-of-nouns").unwrap();
        assert_eq!(post.title, "Gender of Nouns");
        assert_eq!(post.weight(), Some(10.0));
        assert_eq!(post.content, "\nBody\n");
    }

    #[test]
    fn test_library_init_scaffolds_base_dir() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("lessons");

        let library = Library::new(&target).unwrap();
        library.init().unwrap();
        assert!(target.join("_config.yml").exists());

        let reopened = Library::new(&target).unwrap();
        assert_eq!(reopened.load().unwrap().len(), 3);
        assert!(reopened.init().is_err());
    }

    #[test]
    fn test_library_rejects_bad_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "exclude: [\"[bad\"]\n").unwrap();
        let library = Library::new(dir.path()).unwrap();
        assert!(library.load().is_err());
    }
}
