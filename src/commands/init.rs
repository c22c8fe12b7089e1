//! Initialize a new lesson library

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Library;

const CONFIG: &str = r#"# Lesson library configuration

title: Lessons

# Directory holding the lesson markdown
content_dir: content

# File extensions treated as lessons
extensions:
  - md

# Glob patterns relative to content_dir that are skipped
exclude: []

# Also read files and directories starting with `.` or `_`
include_hidden: false
"#;

/// Initialize a new library in the given directory
pub fn init_library(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Library already initialized: {:?}", config_path);
    }

    let content_dir = target_dir.join("content");
    for kind in ["grammar", "vocabulary", "practice"] {
        fs::create_dir_all(content_dir.join(kind))?;
    }

    fs::write(&config_path, CONFIG)?;

    let today = crate::helpers::today();

    let grammar = format!(
        r#"---
title: "Gender of Nouns"
description: "Masculine, feminine and neuter nouns"
level: "A1"
type: "grammar"
weight: 10
category: "grammar"
date: "{}"
tags: [A1, grammar]
---

# Gender of Nouns

Bulgarian nouns are masculine, feminine or neuter. The ending usually tells
you which: consonant for masculine (град), -а/-я for feminine (жена),
-о/-е for neuter (село).
"#,
        today
    );

    let vocabulary = format!(
        r#"---
title: "Food and Drink"
level: "A1"
type: "vocabulary"
weight: 10
date: "{}"
tags: [A1, food]
---

# Food and Drink

| Български | Deutsch |
|-----------|---------|
| хляб      | Brot    |
| вода      | Wasser  |
| сирене    | Käse    |
"#,
        today
    );

    let practice = format!(
        r#"---
title: "Noun Gender Drill"
level: "A1"
type: "practice"
date: "{}"
---

# Noun Gender Drill

Mark each noun as masculine, feminine or neuter: стол, книга, море.
"#,
        today
    );

    fs::write(content_dir.join("grammar/gender-of-nouns.md"), grammar)?;
    fs::write(content_dir.join("vocabulary/food-and-drink.md"), vocabulary)?;
    fs::write(content_dir.join("practice/noun-gender-drill.md"), practice)?;

    Ok(())
}

/// Run the init command with an existing library
pub fn run(library: &Library) -> Result<()> {
    init_library(&library.base_dir)
}
