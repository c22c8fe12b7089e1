//! Summarize lesson types

use anyhow::Result;

use crate::Library;

/// Print each lesson type with its count
pub fn run(library: &Library) -> Result<()> {
    let posts = library.load()?;

    let types = posts.types();
    println!("Types ({}):", types.len());
    for t in types {
        println!("  {} ({})", t, posts.by_type(t).len());
    }

    let untyped = posts.untyped().len();
    if untyped > 0 {
        println!("  (untyped) ({})", untyped);
    }

    Ok(())
}
