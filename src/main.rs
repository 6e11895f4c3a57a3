use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gastos::cli::{handle_tracker_command, run_session, TrackerCommand};
use gastos::clock::clock_from_env;
use gastos::config::{GastosPaths, Settings};
use gastos::display::format_summary;
use gastos::services::Tracker;
use gastos::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "gastos keeps a ledger of everyday expenses paid from a checking \
                  account, tracks a savings balance against a goal, and applies a \
                  monthly roll-over that credits income to checking and moves a \
                  fixed contribution into savings."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Tracker(TrackerCommand),

    /// Keep the tracker open and read commands from stdin
    #[command(alias = "shell")]
    Session,

    /// Create the data directory and write the default configuration
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    gastos::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GastosPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("gastos is already initialized at: {}", paths.base_dir().display());
                println!("Settings left unchanged in {}", paths.settings_file().display());
                return Ok(());
            }
            println!("Initializing gastos at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Edit {} to change income, contribution and goal.", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("gastos Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Monthly income:       {}", settings.format_money(settings.monthly_income));
            println!("  Monthly contribution: {}", settings.format_money(settings.monthly_contribution));
            println!("  Savings goal:         {}", settings.format_money(settings.savings_goal));
            println!("  Roll-over policy:     {}", settings.rollover_policy);
            println!("  Persist balances:     {}", settings.persist_balances);
        }
        Some(Commands::Session) => {
            let clock = clock_from_env()?;
            let mut tracker = Tracker::open(&storage, &settings, clock.as_ref())?;
            let stdin = io::stdin();
            run_session(&mut tracker, stdin.lock(), &mut io::stdout())?;
        }
        Some(Commands::Tracker(cmd)) => {
            let clock = clock_from_env()?;
            let mut tracker = Tracker::open(&storage, &settings, clock.as_ref())?;
            handle_tracker_command(&mut tracker, cmd, &mut io::stdout())?;
        }
        None => {
            let clock = clock_from_env()?;
            let tracker = Tracker::open(&storage, &settings, clock.as_ref())?;
            print!("{}", format_summary(&tracker.summary(), &settings));
            println!();
            println!("Run 'gastos --help' for usage information.");
        }
    }

    Ok(())
}
