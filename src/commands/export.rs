//! Export lessons as JSON

use anyhow::Result;

use crate::content::Post;
use crate::Library;

/// Print every lesson (or one type) as a JSON array
pub fn run(library: &Library, content_type: Option<&str>, pretty: bool) -> Result<()> {
    let posts = library.load()?;
    let selected: Vec<&Post> = match content_type {
        Some(t) => posts.by_type(t),
        None => posts.iter().collect(),
    };

    println!("{}", to_json(&selected, pretty)?);
    Ok(())
}

pub fn to_json(posts: &[&Post], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(posts)?
    } else {
        serde_json::to_string(posts)?
    };
    Ok(json)
}
