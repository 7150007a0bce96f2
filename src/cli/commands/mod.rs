use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
pub mod info;
pub mod term;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a dump between the TXT and JSON encodings
    Convert {
        /// Source dump file (.txt or .json)
        #[arg(short, long)]
        source: PathBuf,

        /// Destination dump file (.txt or .json)
        #[arg(short, long)]
        destination: PathBuf,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show summary information about a dump
    Info {
        /// Dump file to inspect
        path: PathBuf,
    },

    /// List the languages in a dump with translation coverage
    Languages {
        /// Dump file to inspect
        path: PathBuf,
    },

    /// List terms in a dump
    Terms {
        /// Dump file to inspect
        path: PathBuf,

        /// Only list terms whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,

        /// Maximum terms to display
        #[arg(short, long, default_value = "50")]
        limit: usize,

        /// Print term names only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a term's translations
    Get {
        /// Dump file to read
        path: PathBuf,

        /// Term name (e.g. "UI/StartButton")
        term: String,

        /// Only print the translation for this language code
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Set a term's translation and save the dump
    Set {
        /// Dump file to edit
        path: PathBuf,

        /// Term name
        term: String,

        /// Language code (e.g. "en")
        language: String,

        /// New translation text
        text: String,

        /// Write to this file instead of saving in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                destination,
                quiet,
            } => convert::execute(source, destination, *quiet),
            Commands::Info { path } => info::info(path),
            Commands::Languages { path } => info::languages(path),
            Commands::Terms {
                path,
                filter,
                limit,
                quiet,
            } => term::list(path, filter.as_deref(), *limit, *quiet),
            Commands::Get {
                path,
                term,
                language,
            } => term::get(path, term, language.as_deref()),
            Commands::Set {
                path,
                term,
                language,
                text,
                output,
            } => term::set(path, term, language, text, output.as_deref()),
        }
    }
}
