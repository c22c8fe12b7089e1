//! Lesson record model

use serde::{Deserialize, Serialize};

use super::value::{MetaValue, Metadata};
use crate::helpers::title_case;

/// Content types the lesson corpus uses
pub const GRAMMAR: &str = "grammar";
pub const VOCABULARY: &str = "vocabulary";
pub const PRACTICE: &str = "practice";

/// A parsed lesson file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Path-derived identifier, e.g. `grammar/gender-of-nouns`
    pub slug: String,

    /// Front-matter title or one derived from the file name
    pub title: String,

    /// Front-matter date, or the load day as `YYYY-MM-DD`
    pub date: String,

    /// Raw markdown with the front-matter block removed
    pub content: String,

    /// Every front-matter field, title and date included
    pub metadata: Metadata,

    /// Logical source path
    pub source: String,
}

impl Post {
    /// Build a record from a parsed file, filling title and date when the
    /// front-matter leaves them out or empty
    pub fn new(source: &str, metadata: Metadata, content: String, today: &str) -> Self {
        let title = truthy(&metadata, "title")
            .map(|v| v.to_string())
            .unwrap_or_else(|| derive_title(source));
        let date = truthy(&metadata, "date")
            .map(|v| v.to_string())
            .unwrap_or_else(|| today.to_string());

        Self {
            slug: derive_slug(source),
            title,
            date,
            content,
            metadata,
            source: source.to_string(),
        }
    }

    /// The `type` field, when it is text
    pub fn content_type(&self) -> Option<&str> {
        self.text("type")
    }

    /// Manual ordering weight; only numeric values count
    pub fn weight(&self) -> Option<f64> {
        self.metadata.get("weight").and_then(MetaValue::as_f64)
    }

    /// CEFR level such as `A1`
    pub fn level(&self) -> Option<&str> {
        self.text("level")
    }

    pub fn description(&self) -> Option<&str> {
        self.text("description")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    /// Tags from a `[a, b]` list, or a single text value as one tag
    pub fn tags(&self) -> Vec<&str> {
        match self.metadata.get("tags") {
            Some(MetaValue::List(items)) => items.iter().map(String::as_str).collect(),
            Some(MetaValue::Text(tag)) if !tag.is_empty() => vec![tag.as_str()],
            _ => Vec::new(),
        }
    }

    /// Text value of any front-matter field
    pub fn text(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(MetaValue::as_str)
    }
}

fn truthy<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a MetaValue> {
    metadata.get(key).filter(|v| v.is_truthy())
}

/// `grammar/gender-of-nouns.md` -> `grammar/gender-of-nouns`,
/// `vocabulary/index.md` -> `vocabulary`
pub fn derive_slug(path: &str) -> String {
    let path = path.replace('\\', "/");
    let path = path.trim_start_matches("./").trim_start_matches('/');
    let path = path
        .strip_suffix(".md")
        .or_else(|| path.strip_suffix(".markdown"))
        .unwrap_or(path);
    path.strip_suffix("/index").unwrap_or(path).to_string()
}

/// Title from the last path segment without its extension
pub fn derive_title(path: &str) -> String {
    let file_name = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
    let stem = match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    };

    let title = title_case(stem);
    if title.is_empty() {
        "Untitled".to_string()
    } else {
        title
    }
}
