use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use nextwatch_core::{GroupOption, SortOption, StatusFilter};
use nextwatch_models::{Priority, WatchStatus};

mod commands;
mod logging;
mod output;
mod store;

#[derive(Parser)]
#[command(name = "nextwatch")]
#[command(about = "nextwatch - track what to watch next, from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to the watchlist snapshot (overrides configuration)
    #[arg(long, global = true, value_name = "FILE")]
    library: Option<PathBuf>,

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List watchlist items
    #[command(long_about = "List watchlist items as filtered, sorted, grouped tables. Flags override the defaults from config.toml for this invocation only.")]
    List {
        /// Status filter: all, want-to-watch, watching, watched
        #[arg(long, value_name = "STATUS")]
        filter: Option<StatusFilter>,

        /// Sort order: date-added, title, release-date, rating, priority
        #[arg(long, value_name = "ORDER")]
        sort: Option<SortOption>,

        /// Grouping: none, status, priority, genre, year
        #[arg(long, value_name = "KEY")]
        group: Option<GroupOption>,
    },

    /// Show watchlist statistics
    #[command(long_about = "Show summary statistics over the full collection: totals by status and priority, plus upcoming releases. Statistics ignore any configured filter.")]
    Stats,

    /// Add a title to the watchlist
    Add(commands::add::AddArgs),

    /// Set the viewing status of one item
    SetStatus {
        id: String,
        /// want-to-watch, watching, watched
        status: WatchStatus,
    },

    /// Set the priority of one item
    SetPriority {
        id: String,
        /// high, medium, low
        priority: Priority,
    },

    /// Set viewing progress percent; 100 marks the item watched
    Progress {
        id: String,
        /// Percent complete, 0-100
        percent: u8,
    },

    /// Remove one item from the watchlist
    Remove { id: String },

    /// Select items interactively and apply one change to all of them
    #[command(long_about = "Interactively select a subset of visible items and apply one operation to every selected item in a single step. Exactly one of --set-status, --set-priority, or --remove is required.")]
    Batch {
        /// Set this status on every selected item
        #[arg(long, value_name = "STATUS")]
        set_status: Option<WatchStatus>,

        /// Set this priority on every selected item
        #[arg(long, value_name = "PRIORITY")]
        set_priority: Option<Priority>,

        /// Remove every selected item
        #[arg(long, action = ArgAction::SetTrue)]
        remove: bool,

        /// Restrict the selectable items to this status
        #[arg(long, value_name = "STATUS")]
        filter: Option<StatusFilter>,
    },

    /// Show configuration and paths
    Config,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let workspace = commands::Workspace::open(cli.library.clone())?;

    match cli.command {
        Commands::List {
            filter,
            sort,
            group,
        } => commands::list::run_list(filter, sort, group, &workspace, &output),
        Commands::Stats => commands::stats::run_stats(&workspace, &output),
        Commands::Add(args) => commands::add::run_add(args, &workspace, &output),
        Commands::SetStatus { id, status } => {
            commands::update::run_set_status(&id, status, &workspace, &output)
        }
        Commands::SetPriority { id, priority } => {
            commands::update::run_set_priority(&id, priority, &workspace, &output)
        }
        Commands::Progress { id, percent } => {
            commands::update::run_progress(&id, percent, &workspace, &output)
        }
        Commands::Remove { id } => commands::update::run_remove(&id, &workspace, &output),
        Commands::Batch {
            set_status,
            set_priority,
            remove,
            filter,
        } => commands::batch::run_batch(set_status, set_priority, remove, filter, &workspace, &output),
        Commands::Config => commands::config::run_config(&workspace, &output),
    }
}
