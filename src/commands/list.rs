//! List lessons

use anyhow::Result;

use crate::content::Post;
use crate::Library;

/// List lessons, optionally narrowed to one type and/or level
pub fn run(library: &Library, content_type: Option<&str>, level: Option<&str>) -> Result<()> {
    let posts = library.load()?;
    let selected = select(posts.iter(), content_type, level);

    println!("Lessons ({}):", selected.len());
    for post in selected {
        println!("{}", format_line(post));
    }

    Ok(())
}

/// Keep the lessons matching both filters, preserving order
pub fn select<'a>(
    posts: impl Iterator<Item = &'a Post>,
    content_type: Option<&str>,
    level: Option<&str>,
) -> Vec<&'a Post> {
    posts
        .filter(|p| content_type.map_or(true, |t| p.content_type() == Some(t)))
        .filter(|p| level.map_or(true, |l| p.level() == Some(l)))
        .collect()
}

/// `  2025-10-24  grammar/gender-of-nouns  Gender of Nouns [A1]`
pub fn format_line(post: &Post) -> String {
    match post.level() {
        Some(level) => format!("  {}  {}  {} [{}]", post.date, post.slug, post.title, level),
        None => format!("  {}  {}  {}", post.date, post.slug, post.title),
    }
}
