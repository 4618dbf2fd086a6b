//! Ahorcado - CLI
//!
//! Hangman with a TUI (default) and a line-based console mode.

use ahorcado::{
    catalog::{WordCatalog, loader},
    commands::{ConsoleView, SessionController},
    core::{Category, CategoryConfig, CategoryOracle, Difficulty},
    interactive::{App, run_tui},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ahorcado",
    about = "Hangman word game with difficulty levels and hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty for the TUI: easy, medium (default) or hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Restrict the TUI to one category (e.g. ANIMALES)
    #[arg(short, long, global = true)]
    category: Option<String>,

    /// JSON word catalog to use instead of the built-in list
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// TOML category configuration
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    /// Seed for word selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based console mode with menus
    Console,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_categories(path: Option<&Path>) -> Result<CategoryConfig> {
    match path {
        Some(path) => CategoryConfig::load_from_file(path)
            .with_context(|| format!("loading categories from {}", path.display())),
        None => Ok(CategoryConfig::default()),
    }
}

fn load_catalog(path: Option<&Path>, categories: &CategoryConfig) -> Result<WordCatalog> {
    match path {
        Some(path) => {
            let records = loader::load_from_file(path)
                .with_context(|| format!("loading words from {}", path.display()))?;
            WordCatalog::new(records, categories)
                .with_context(|| format!("building catalog from {}", path.display()))
        }
        None => WordCatalog::embedded(categories).context("building built-in catalog"),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Resolve the `--category` flag against the configured allow-list
fn resolve_category(name: Option<&str>, categories: &CategoryConfig) -> Option<Category> {
    let category = Category::new(name?);
    if categories.is_valid(&category) {
        Some(category)
    } else {
        warn!(%category, "unknown category, playing with any category");
        None
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let categories = load_categories(cli.categories.as_deref())?;
    let catalog = load_catalog(cli.words.as_deref(), &categories)?;
    let rng = make_rng(cli.seed);
    debug!(words = catalog.len(), seed = ?cli.seed, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let difficulty = Difficulty::from_name(&cli.difficulty);
            let category = resolve_category(cli.category.as_deref(), &categories);
            run_tui(App::new(&catalog, &categories, difficulty, category, rng))
        }
        Commands::Console => run_console(&catalog, &categories, rng),
    }
}

fn run_console(catalog: &WordCatalog, categories: &CategoryConfig, rng: StdRng) -> Result<()> {
    let stdin = io::stdin();
    let view = ConsoleView::new(stdin.lock(), io::stdout());
    SessionController::new(catalog, categories, view, rng).run()
}
