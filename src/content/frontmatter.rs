//! Front-matter parsing
//!
//! Lessons open with a `---` delimited block of `key: value` lines. The
//! parser is line oriented and lenient: anything it does not understand is
//! skipped and recorded as a [`ParseWarning`], never returned as an error.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::value::{MetaValue, Metadata};

lazy_static! {
    /// Leading block, first closing delimiter wins
    static ref BLOCK: Regex = Regex::new(r"^---\s*\n([\s\S]*?)\n---").unwrap();
    static ref FIELD: Regex = Regex::new(r"^([A-Za-z0-9_]+):\s*(.*)$").unwrap();
    static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
    static ref BLOCK_SCALAR: Regex = Regex::new(r"^[|>][+-]?[0-9]?$").unwrap();
}

/// Something the parser skipped or could only partially understand
#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// A non-blank line inside the block that is not `key: value`
    UnrecognizedLine { line: usize, text: String },
    /// `key: |` style value; continuation lines are not joined
    BlockScalar { key: String },
    /// The key appeared more than once; the last value is kept
    DuplicateKey { key: String },
    /// Input starts with `---` but the block is never closed
    Unterminated,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::UnrecognizedLine { line, text } => {
                write!(f, "line {}: ignored `{}`", line, text)
            }
            ParseWarning::BlockScalar { key } => {
                write!(f, "`{}` uses a multi-line block scalar; only the indicator is kept", key)
            }
            ParseWarning::DuplicateKey { key } => {
                write!(f, "`{}` is defined more than once; last value wins", key)
            }
            ParseWarning::Unterminated => f.write_str("front-matter block has no closing `---`"),
        }
    }
}

/// Front-matter data from a lesson file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Coerced fields, in block order
    pub fields: Metadata,
    /// Lines and values the parser skipped
    pub warnings: Vec<ParseWarning>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// The remaining content is the input with the matched block (delimiters
    /// included) cut off the front and nothing else touched.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(caps) = BLOCK.captures(content) else {
            let mut fm = FrontMatter::default();
            if content.starts_with("---") {
                fm.warnings.push(ParseWarning::Unterminated);
            }
            return (fm, content);
        };

        let whole = caps.get(0).map(|m| m.end()).unwrap_or(0);
        let Some(block) = caps.get(1) else {
            return (FrontMatter::default(), content);
        };

        // Line 1 is the opening delimiter; blank lines swallowed by `\s*` shift the block down
        let first_line = content[..block.start()].matches('\n').count() + 1;
        let fm = Self::parse_block(block.as_str(), first_line);

        (fm, &content[whole..])
    }

    fn parse_block(block: &str, first_line: usize) -> Self {
        let mut fm = FrontMatter::default();

        for (offset, raw_line) in block.split('\n').enumerate() {
            let line = raw_line.trim_end_matches('\r');
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some(caps) = FIELD.captures(line) else {
                fm.warnings.push(ParseWarning::UnrecognizedLine {
                    line: first_line + offset,
                    text: line.to_string(),
                });
                continue;
            };

            let key = caps[1].to_string();
            let raw_value = caps[2].trim_end();

            if BLOCK_SCALAR.is_match(raw_value) {
                fm.warnings.push(ParseWarning::BlockScalar { key: key.clone() });
            }
            if fm.fields.contains_key(&key) {
                fm.warnings.push(ParseWarning::DuplicateKey { key: key.clone() });
            }

            fm.fields.insert(key, parse_value(raw_value));
        }

        fm
    }

    /// True when every line of the block was understood
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Get a field by key
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields.get(key)
    }
}

/// Coerce a raw value: unquote, then list, then number, else text
pub fn parse_value(raw: &str) -> MetaValue {
    let value = strip_quotes(raw);

    if value.len() >= 2 && value.starts_with('[') && value.ends_with(']') {
        let inner = &value[1..value.len() - 1];
        // Naive split: commas inside quoted elements are not protected, and
        // `[]` is one empty element
        let items = inner
            .split(',')
            .map(|item| strip_element_quotes(item.trim()).to_string())
            .collect();
        return MetaValue::List(items);
    }

    if NUMBER.is_match(value) {
        if let Ok(n) = value.parse::<f64>() {
            return MetaValue::Number(n);
        }
    }

    MetaValue::Text(value.to_string())
}

/// Remove one layer of matching surrounding quotes
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Remove a leading and a trailing quote character independently
fn strip_element_quotes(item: &str) -> &str {
    let item = item.strip_prefix(['"', '\'']).unwrap_or(item);
    item.strip_suffix(['"', '\'']).unwrap_or(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lesson_frontmatter() {
        let content = r#"---
title: "Gender of Nouns"
level: "A1"
weight: 10
---

# Gender of Nouns
"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.get("title"), Some(&MetaValue::from("Gender of Nouns")));
        assert_eq!(fm.get("level"), Some(&MetaValue::from("A1")));
        assert_eq!(fm.get("weight"), Some(&MetaValue::Number(10.0)));
        assert_eq!(remaining, "\n\n# Gender of Nouns\n");
        assert!(fm.is_clean());
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just a heading\n\nBody text.";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.fields.is_empty());
        assert!(fm.is_clean());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_frontmatter_must_lead() {
        let content = "intro\n---\ntitle: Late\n---\nbody";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.fields.is_empty());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unterminated_block() {
        let content = "---\ntitle: Open\nno closing delimiter";
        let (fm, remaining) = FrontMatter::parse(content);
        assert!(fm.fields.is_empty());
        assert_eq!(fm.warnings, vec![ParseWarning::Unterminated]);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_first_closing_delimiter_wins() {
        let content = "---\na: 1\n---\nbody\n---\nb: 2\n---\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.fields.len(), 1);
        assert_eq!(remaining, "\nbody\n---\nb: 2\n---\n");
    }

    #[test]
    fn test_array_values() {
        let content = "---\ntags: [A1, \"grammar\", 'nouns']\nempty: []\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(
            fm.get("tags"),
            Some(&MetaValue::List(vec![
                "A1".to_string(),
                "grammar".to_string(),
                "nouns".to_string()
            ]))
        );
        assert_eq!(fm.get("empty"), Some(&MetaValue::List(vec![String::new()])));
    }

    #[test]
    fn test_empty_array_elements_are_kept() {
        assert_eq!(parse_value("[]"), MetaValue::List(vec![String::new()]));
        assert_eq!(parse_value("[ ]"), MetaValue::List(vec![String::new()]));
        assert_eq!(
            parse_value("[ , ]"),
            MetaValue::List(vec![String::new(), String::new()])
        );
        assert_eq!(
            parse_value("[a,,b]"),
            MetaValue::List(vec!["a".to_string(), String::new(), "b".to_string()])
        );
    }

    #[test]
    fn test_array_split_is_naive() {
        let value = parse_value(r#"["a, b", c]"#);
        assert_eq!(
            value,
            MetaValue::List(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(parse_value("10"), MetaValue::Number(10.0));
        assert_eq!(parse_value("-2.5"), MetaValue::Number(-2.5));
        assert_eq!(parse_value("\"20\""), MetaValue::Number(20.0));
        assert_eq!(parse_value("1.2.3"), MetaValue::from("1.2.3"));
        assert_eq!(parse_value("2025-10-24"), MetaValue::from("2025-10-24"));
        assert_eq!(parse_value(".5"), MetaValue::from(".5"));
    }

    #[test]
    fn test_quote_stripping_single_layer() {
        assert_eq!(parse_value(r#""'nested'""#), MetaValue::from("'nested'"));
        assert_eq!(parse_value(r#""unbalanced'"#), MetaValue::from(r#""unbalanced'"#));
        assert_eq!(parse_value("\"\""), MetaValue::from(""));
    }

    #[test]
    fn test_block_scalar_is_not_joined() {
        let content = r#"---
title: "Definite Article"
notes_de_to_bg: |
  Im Bulgarischen steht der Artikel am Ende.
  Beispiel: книга -> книгата
type: "grammar"
---
Body"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.get("notes_de_to_bg"), Some(&MetaValue::from("|")));
        assert_eq!(fm.get("type"), Some(&MetaValue::from("grammar")));
        assert_eq!(remaining, "\nBody");
        assert_eq!(
            fm.warnings,
            vec![
                ParseWarning::BlockScalar {
                    key: "notes_de_to_bg".to_string()
                },
                ParseWarning::UnrecognizedLine {
                    line: 4,
                    text: "  Im Bulgarischen steht der Artikel am Ende.".to_string()
                },
                ParseWarning::UnrecognizedLine {
                    line: 5,
                    text: "  Beispiel: книга -> книгата".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unindented_continuation_becomes_key() {
        let content = "---\nnotes: |\nExample: a colon line\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.get("Example"), Some(&MetaValue::from("a colon line")));
    }

    #[test]
    fn test_yaml_list_items_are_skipped() {
        let content = "---\ntags:\n  - \"A1\"\n  - \"grammar\"\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.get("tags"), Some(&MetaValue::from("")));
        assert_eq!(fm.warnings.len(), 2);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let content = "---\nlevel: A1\nlevel: A2\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.get("level"), Some(&MetaValue::from("A2")));
        assert_eq!(
            fm.warnings,
            vec![ParseWarning::DuplicateKey {
                key: "level".to_string()
            }]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\nweight: 3\r\n---\r\nbody";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.get("title"), Some(&MetaValue::from("Windows")));
        assert_eq!(fm.get("weight"), Some(&MetaValue::Number(3.0)));
        assert_eq!(remaining, "\r\nbody");
    }

    #[test]
    fn test_value_with_colon() {
        let content = "---\ndescription: Ratio: 1:2\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.get("description"), Some(&MetaValue::from("Ratio: 1:2")));
    }
}
