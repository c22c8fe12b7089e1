//! Title and path text helpers

/// Turn a file stem like `gender-of-nouns` into `Gender Of Nouns`.
///
/// `-` and `_` act as word breaks; runs of separators collapse to one space.
pub fn title_case(stem: &str) -> String {
    stem.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
