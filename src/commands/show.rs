//! Show a single lesson

use anyhow::Result;

use crate::content::Post;
use crate::Library;

/// Print one lesson's metadata and raw markdown, or its JSON form
pub fn run(library: &Library, slug: &str, json: bool) -> Result<()> {
    let posts = library.load()?;
    let Some(post) = posts.by_slug(slug) else {
        anyhow::bail!("No lesson with slug: {}", slug);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(post)?);
        return Ok(());
    }

    print!("{}", render(post));

    let (prev, next) = posts.neighbors(slug);
    if let Some(prev) = prev {
        println!("\n< {}", prev.slug);
    }
    if let Some(next) = next {
        println!("> {}", next.slug);
    }

    Ok(())
}

/// Header block of metadata followed by the body
pub fn render(post: &Post) -> String {
    let mut out = format!("{}\n{}\n", post.title, "=".repeat(post.title.chars().count()));
    out.push_str(&format!("slug: {}\ndate: {}\n", post.slug, post.date));
    for (key, value) in &post.metadata {
        if key == "title" || key == "date" {
            continue;
        }
        out.push_str(&format!("{}: {}\n", key, value));
    }
    out.push_str(&post.content);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
