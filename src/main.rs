mod cli;

use clap::Parser;
use cli::Cli;
use colored::*;
use crossbeam_channel::bounded;
use env_logger::{Builder, Env};
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

use quickfind::{
    JsonUsageStore, NoUsage, QuickfindConfig, Result, SearchCoordinator, SearchKind, UsageStore,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli);

    let start_time = Instant::now();

    let mut config = QuickfindConfig::load().unwrap_or_else(|e| {
        warn!("falling back to default configuration: {e}");
        QuickfindConfig::default()
    });
    if !cli.root.is_empty() {
        config.roots = cli.root.clone();
    }

    let usage: Arc<dyn UsageStore> = match usage_file(&cli) {
        Some(path) => match JsonUsageStore::open(&path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!("usage counts disabled: {e}");
                Arc::new(NoUsage)
            }
        },
        None => Arc::new(NoUsage),
    };

    let kind = if cli.apps {
        SearchKind::Applications
    } else {
        SearchKind::Files
    };
    info!("searching for {:?} ({kind:?})", cli.query);

    let coordinator = SearchCoordinator::new(config, usage);
    let (tx, rx) = bounded(1);
    coordinator.search(&cli.query, kind, move |results| {
        let _ = tx.send(results);
    });
    let results = rx.recv().unwrap_or_default();

    if results.is_empty() {
        println!("{}", "No matches found".yellow());
    } else {
        for (i, candidate) in results.iter().enumerate() {
            println!(
                "{:>3}. {}  {}",
                i + 1,
                candidate.display_name.green().bold(),
                candidate.path.display().to_string().dimmed()
            );
        }
    }
    info!("search finished in {:?}", start_time.elapsed());

    Ok(())
}

fn usage_file(cli: &Cli) -> Option<std::path::PathBuf> {
    cli.usage_file
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join("quickfind/usage.json")))
}

fn setup_logging(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    builder.init();
}
