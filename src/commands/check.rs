//! Report front-matter the parser could not fully understand

use anyhow::Result;

use crate::Library;

/// Print every file with front-matter warnings
pub fn run(library: &Library) -> Result<()> {
    let reports = library.loader()?.check()?;

    if reports.is_empty() {
        println!("All front-matter parsed cleanly.");
        return Ok(());
    }

    println!("Files with warnings ({}):", reports.len());
    for report in reports {
        println!("  {}", report.path);
        for warning in &report.warnings {
            println!("    {}", warning);
        }
    }

    Ok(())
}
