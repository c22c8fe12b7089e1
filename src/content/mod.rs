//! Content module - lesson files, their front-matter and the sorted collection

mod collection;
mod error;
mod frontmatter;
pub mod loader;
mod post;
mod source;
mod value;

pub use collection::{compare_posts, sort_posts, PostCollection};
pub use error::ContentError;
pub use frontmatter::{parse_value, FrontMatter, ParseWarning};
pub use loader::{parse_post, ContentLoader, FileReport};
pub use post::{derive_slug, derive_title, Post, GRAMMAR, PRACTICE, VOCABULARY};
pub use source::{ContentSource, DirSource, StaticSource};
pub use value::{MetaValue, Metadata};
