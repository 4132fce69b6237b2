use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Query to match against file and application names.
    pub query: String,

    /// Root directories to search, highest priority first. Defaults to the
    /// standard launcher list (cwd, documents, downloads, desktop, home).
    #[clap(long, value_parser)]
    pub root: Vec<PathBuf>,

    /// Search application directories instead of file roots.
    #[clap(long, value_parser, default_value_t = false)]
    pub apps: bool,

    /// Path of the persisted usage-count file.
    #[clap(long, value_parser)]
    pub usage_file: Option<PathBuf>,

    #[clap(long, value_parser, default_value_t = false)]
    pub verbose: bool,
}
