//! Article importer CLI.
//!
//! Builds one import request from the command line, walks the category
//! cascade with the given `--category` values and submits once.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use article_importer::config::{load_config, load_default_config};
use article_importer::logging::init_logging;
use article_importer::{
    CategoryTree, FormEvent, HttpTransport, ImportSession, ImporterConfig, Result,
    SubmissionOutcome,
};

/// Submit an article import request
#[derive(Parser)]
#[command(name = "article-import")]
#[command(about = "Select a category path and submit an article import request")]
struct Cli {
    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Category value per depth, shallowest first (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Keyword text search
    #[arg(long)]
    text: Option<String>,

    /// Tag to filter articles by
    #[arg(long)]
    tag: Option<String>,

    /// Number of articles to import
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Print the options available below the given category path and exit
    #[arg(long, default_value = "false")]
    list_categories: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    log_level: Option<String>,
}

fn load_tree(config: &ImporterConfig) -> Result<CategoryTree> {
    let tree = match &config.categories.path {
        Some(path) => CategoryTree::load(path)?,
        None => CategoryTree::builtin()?,
    };
    Ok(tree)
}

async fn run(cli: Cli) -> Result<i32> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_default_config()?,
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    init_logging(&config.logging)?;

    let tree = Arc::new(load_tree(&config)?);
    let transport = Arc::new(HttpTransport::new(&config.api)?);
    let mut session = ImportSession::from_config(&config, tree, transport);

    for (level, value) in cli.categories.into_iter().enumerate() {
        session.handle(FormEvent::SelectCategory { level, value });
    }

    if cli.list_categories {
        let depth = session.cascade().selection_path().len();
        if let Some(options) = session.cascade().options_at(depth) {
            for option in options {
                println!("{}", option.label);
            }
        }
        return Ok(0);
    }

    if let Some(text) = cli.text {
        session.handle(FormEvent::SetText(text));
    }
    if let Some(tag) = cli.tag {
        session.handle(FormEvent::SetTag(tag));
    }
    if let Some(size) = cli.size {
        session.handle(FormEvent::SetSize(size));
    }

    session.handle(FormEvent::Submit);
    if !session.workflow().is_in_flight() {
        for (_, message) in session.workflow().errors().iter() {
            eprintln!("Error: {}", message);
        }
        return Ok(2);
    }

    info!("Waiting for import to finish");
    let outcome = session.settle().await.unwrap_or(session.outcome());
    let view = session.view();
    match outcome {
        SubmissionOutcome::Succeeded(_) => {
            if let Some(banner) = view.success_banner {
                println!("{}", banner.message);
            }
            Ok(0)
        }
        _ => {
            if let Some(banner) = view.error_banner {
                eprintln!("{}", banner.message);
            }
            Ok(1)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
