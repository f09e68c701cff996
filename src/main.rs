use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use subtrack::cli::{
    handle_analyze_command, handle_cost_command, handle_dashboard_command, handle_export_command,
    CostCommands, ExportArgs,
};
use subtrack::config::{paths::SubtrackPaths, settings::Settings};
use subtrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "subtrack",
    version,
    about = "Track recurring subscription costs and find cheaper alternatives",
    long_about = "subtrack records your recurring subscription costs, shows a summary \
                  dashboard with monthly and annual totals and upcoming renewals, and \
                  can ask an AI service to suggest cheaper alternatives for any cost."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary dashboard
    #[command(alias = "dash")]
    Dashboard,

    /// Cost management commands
    #[command(subcommand)]
    Cost(CostCommands),

    /// Suggest cheaper alternatives for a cost
    Analyze {
        /// Cost name or ID
        cost: String,
    },

    /// Export all costs
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("subtrack=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SubtrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage)?;
        }
        Some(Commands::Cost(cmd)) => {
            handle_cost_command(&storage, cmd)?;
        }
        Some(Commands::Analyze { cost }) => {
            handle_analyze_command(&storage, &settings, &cost)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("subtrack Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Costs file:       {}", paths.costs_file().display());
            println!();
            println!("Settings:");
            println!("  Suggestion model:   {}", settings.suggestion.model);
            println!("  API key variable:   {}", settings.suggestion.api_key_env);
        }
        None => {
            println!("subtrack - Track recurring subscription costs");
            println!();
            println!("Run 'subtrack --help' for usage information.");
            println!("Run 'subtrack dashboard' to see your cost summary.");
        }
    }

    Ok(())
}
