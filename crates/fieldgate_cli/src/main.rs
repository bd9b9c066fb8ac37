mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fieldgate")]
#[command(version, about = "Validated-field recipe builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a burger recipe from ingredient values
    Build {
        /// Number of buns (2-3)
        #[arg(long)]
        buns: i64,

        /// Slices of cheese (0-2)
        #[arg(long)]
        cheese: i64,

        /// Tomato slices (0-3)
        #[arg(long)]
        tomatoes: i64,

        /// Number of cutlets (1-3)
        #[arg(long)]
        cutlets: i64,

        /// Number of eggs (0-2)
        #[arg(long)]
        eggs: i64,

        /// Sauce: ketchup, mayo, or burger
        #[arg(long)]
        sauce: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the declared fields and their constraints
    Fields {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Build {
            buns,
            cheese,
            tomatoes,
            cutlets,
            eggs,
            sauce,
            format,
        } => commands::build::execute(buns, cheese, tomatoes, cutlets, eggs, &sauce, &format),

        Commands::Fields { format } => commands::fields::execute(&format),
    }
}
