//! CLI entry point for lesson-content

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lesson-content")]
#[command(version)]
#[command(about = "Inspect Bulgarian/German lesson markdown and its front-matter", long_about = None)]
struct Cli {
    /// Set the library directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new lesson library
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List lessons in load order
    #[command(alias = "ls")]
    List {
        /// Only lessons of this type (grammar, vocabulary, practice, ...)
        #[arg(short, long)]
        r#type: Option<String>,

        /// Only lessons of this level (A1, A2, ...)
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Show lesson types and how many lessons each has
    Types,

    /// Show one lesson by slug
    Show {
        /// Slug such as grammar/gender-of-nouns
        slug: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export lessons as a JSON array
    Export {
        /// Only lessons of this type
        #[arg(short, long)]
        r#type: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Report front-matter lines the parser skipped
    Check,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "lesson_content=debug,info"
    } else {
        "lesson_content=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing lesson library in {:?}", target_dir);
            let library = lesson_content::Library::new(&target_dir)?;
            library.init()?;
            println!("Initialized lesson library in {:?}", target_dir);
        }

        Commands::List { r#type, level } => {
            let library = lesson_content::Library::new(&base_dir)?;
            lesson_content::commands::list::run(&library, r#type.as_deref(), level.as_deref())?;
        }

        Commands::Types => {
            let library = lesson_content::Library::new(&base_dir)?;
            lesson_content::commands::types::run(&library)?;
        }

        Commands::Show { slug, json } => {
            let library = lesson_content::Library::new(&base_dir)?;
            lesson_content::commands::show::run(&library, &slug, json)?;
        }

        Commands::Export { r#type, pretty } => {
            let library = lesson_content::Library::new(&base_dir)?;
            lesson_content::commands::export::run(&library, r#type.as_deref(), pretty)?;
        }

        Commands::Check => {
            let library = lesson_content::Library::new(&base_dir)?;
            lesson_content::commands::check::run(&library)?;
        }

        Commands::Version => {
            println!("lesson-content version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
