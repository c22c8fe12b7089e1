//! Content loader - turns every file of a source into a lesson record

use super::{
    sort_posts, ContentError, ContentSource, FrontMatter, ParseWarning, Post, PostCollection,
};
use crate::helpers::today;

/// Loads lessons from a [`ContentSource`]
///
/// Nothing is cached: every call re-reads and re-parses the whole source, and
/// lessons without a `date` are stamped with the day of that call.
pub struct ContentLoader<S> {
    source: S,
}

/// Front-matter problems found in one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: String,
    pub warnings: Vec<ParseWarning>,
}

impl<S: ContentSource> ContentLoader<S> {
    /// Create a new content loader
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load all lessons, weighted ones by weight, the rest newest first
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        let mut posts = self.read_posts()?;
        sort_posts(&mut posts);
        Ok(posts)
    }

    /// Load all lessons into a queryable collection
    pub fn load(&self) -> Result<PostCollection, ContentError> {
        Ok(PostCollection::new(self.read_posts()?))
    }

    /// Parse every file and report the ones whose front-matter had problems
    pub fn check(&self) -> Result<Vec<FileReport>, ContentError> {
        let mut reports = Vec::new();
        for path in self.source.paths()? {
            let text = match self.source.read(&path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Failed to read lesson {}: {}", path, e);
                    continue;
                }
            };
            let (fm, _) = FrontMatter::parse(&text);
            if !fm.is_clean() {
                reports.push(FileReport {
                    path,
                    warnings: fm.warnings,
                });
            }
        }
        Ok(reports)
    }

    fn read_posts(&self) -> Result<Vec<Post>, ContentError> {
        let today = today();
        let paths = self.source.paths()?;
        let mut posts = Vec::with_capacity(paths.len());

        for path in paths {
            match self.source.read(&path) {
                Ok(text) => posts.push(parse_post(&path, &text, &today)),
                Err(e) => {
                    tracing::warn!("Failed to read lesson {}: {}", path, e);
                }
            }
        }

        tracing::info!("Loaded {} lessons", posts.len());
        Ok(posts)
    }
}

/// Build one lesson record from raw file text. Never fails.
pub fn parse_post(path: &str, text: &str, today: &str) -> Post {
    let (fm, body) = FrontMatter::parse(text);

    for warning in &fm.warnings {
        match warning {
            ParseWarning::Unterminated => tracing::warn!("{}: {}", path, warning),
            _ => tracing::debug!("{}: {}", path, warning),
        }
    }
    tracing::debug!("Parsed {} ({} fields)", path, fm.fields.len());

    Post::new(path, fm.fields, body.to_string(), today)
}
