use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "masterymap", version, about = "Knowledge mastery heatmaps")]
struct Cli {
    /// Config file to use instead of ~/.config/masterymap/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the curriculum catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Merge assessment events and report per-event outcomes
    Submit(commands::submit::SubmitArgs),
    /// Show a mastery heatmap for one grade
    Query(commands::query::QueryArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// `RUST_LOG` wins over the config file; logs go to stderr so JSON output stays clean.
fn init_tracing(ctx: &Context) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = ctx
            .load_config()
            .map(|config| config.logging.level)
            .unwrap_or_else(|_| "warn".to_string());
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let ctx = Context::new(cli.config);
    init_tracing(&ctx);

    let result = match cli.command {
        Commands::Catalog { action } => commands::catalog::run(&ctx, action),
        Commands::Submit(args) => commands::submit::run(&ctx, args),
        Commands::Query(args) => commands::query::run(&ctx, args),
        Commands::Config { action } => commands::config::run(&ctx, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
