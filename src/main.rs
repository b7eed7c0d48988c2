//! Swatchlist CLI - host shell around the entry store

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use swatchlist::config::{self, Settings, SwatchlistConfig};
use swatchlist::storage::{db_path, SQLITE_DIR};
use swatchlist::ui::{self, Icons};
use swatchlist::{project, EntryStore, RenderDescriptor, StoreApp, ENTRIES_TABLE};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "swatchlist")]
#[command(version)]
#[command(about = "Persistent store of colored text entries")]
#[command(long_about = r#"
Swatchlist keeps a small SQLite table of colored text entries:
  • Seeds the table up to a minimum population on first use
  • Lists entries as render-ready text + RGBA channels
  • Clears the table on shutdown

Example usage:
  swatchlist init
  swatchlist list --format json
  swatchlist run
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base data directory (the store lives in <DATA_DIR>/sqlite)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Store file name
    #[arg(long, global = true)]
    db_name: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision the store and top it up with seed entries
    Init,

    /// List entries as render descriptors
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete every row of a table
    Clear {
        /// Table to clear
        #[arg(short, long, default_value = ENTRIES_TABLE)]
        table: String,
    },

    /// Start, render the list, then stop (clearing the store)
    Run,

    /// Write a default config file
    ConfigInit {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print the resolved store path
    Path,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = config::load_config(cli.config.as_deref())?.unwrap_or_default();
    let settings = Settings::from_config(&file_config)
        .with_data_dir(cli.data_dir.clone())
        .with_db_name(cli.db_name.clone());

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Init => {
            let app = StoreApp::start(&settings)?;
            ui::info("Store", &app.store().path().display().to_string());
            if !app.is_initialized() {
                ui::error("Initialization failed (see log)");
                std::process::exit(1);
            }

            if let Some(report) = app.init_report() {
                ui::section("Entries");
                ui::summary_row("Existing:", &report.existing.to_string());
                ui::summary_row("Inserted:", &report.inserted.to_string());
                ui::success(&format!("{} entries ready", report.total()));
            }
        }

        Commands::List { format } => {
            let store = EntryStore::new(resolved_db_path(&settings));
            let descriptors: Vec<RenderDescriptor> =
                store.list_entries().iter().map(project).collect();

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&descriptors)?);
                }
                OutputFormat::Text => render(&descriptors),
            }
        }

        Commands::Clear { table } => {
            let store = EntryStore::new(resolved_db_path(&settings));
            match store.try_clear_all(&table) {
                Ok(deleted) => {
                    ui::success(&format!("{} Deleted {} rows from {}", Icons::DEL, deleted, table))
                }
                Err(e) => {
                    ui::error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }

        Commands::Run => {
            let outcome = StoreApp::run(&settings, render)?;
            if !outcome.cleared {
                ui::warn("Failed to clear the store on shutdown");
            }
            if !outcome.succeeded() {
                ui::error("Store initialization failed (see log)");
                std::process::exit(1);
            }
        }

        Commands::ConfigInit { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            let defaults = Settings::default();
            let contents = SwatchlistConfig {
                data_dir: Some(defaults.data_dir),
                db_name: Some(defaults.db_name),
                min_entries: Some(defaults.min_entries),
                log_level: Some(defaults.log_level),
            };
            config::write_config(&path, &contents, force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }

        Commands::Path => {
            println!("{}", resolved_db_path(&settings).display());
        }
    }

    Ok(())
}

fn resolved_db_path(settings: &Settings) -> PathBuf {
    db_path(&settings.data_dir.join(SQLITE_DIR), &settings.db_name)
}

fn render(descriptors: &[RenderDescriptor]) {
    ui::header(&format!("{} entries", descriptors.len()));
    if descriptors.is_empty() {
        println!("  {}", ui::dim("(nothing to show)"));
        return;
    }
    println!("{}", ui::swatch_table(descriptors, ui::theme()));
}
