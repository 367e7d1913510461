use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tome_core::Mode;

mod commands;

/// Tome: corpus-relative term importance for plain-text books.
#[derive(Parser, Debug)]
#[command(name = "tome", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Most frequent words per document, with sentiment
    Frequency {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Highest TF-IDF words per document against the whole catalog
    Tfidf {
        #[command(flatten)]
        run: RunArgs,

        /// Scored words to report per document
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// TOML catalog of documents (defaults to the built-in list)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Directory for cached raw documents
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Directory for word-cloud files
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Skip word-cloud output
    #[arg(long)]
    no_cloud: bool,

    /// Word-cloud file type
    #[arg(long, value_enum, default_value_t = CloudFormat::Png)]
    cloud_format: CloudFormat,

    /// Most frequent words kept per document
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Additional stop words, comma separated
    #[arg(long, value_delimiter = ',')]
    extra_stop_words: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Human)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Human,
    Jsonl,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudFormat {
    /// Rendered image
    Png,
    /// Word weights for an external renderer
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tome_cli::logging::init(cli.verbose, cli.quiet);

    match &cli.command {
        Command::Frequency { run } => commands::run::run(&cli, Mode::Frequency, run, None),
        Command::Tfidf { run, top_n } => commands::run::run(&cli, Mode::Tfidf, run, *top_n),
    }
}
