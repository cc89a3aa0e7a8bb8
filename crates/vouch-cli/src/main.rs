// CLI for inspecting state certificates and checking verification configs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "vouch")]
#[command(about = "Vouch - State certificate inspection tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a certificate and print its tree, root digest and delegation
    Inspect {
        /// Certificate file
        file: PathBuf,

        /// The file holds hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
    },

    /// Print the root digest of a certificate's tree
    Digest {
        /// Certificate file
        file: PathBuf,

        /// The file holds hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
    },

    /// Load and validate a verification config
    CheckConfig {
        /// Config file path
        #[arg(default_value = "vouch.toml")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect { file, hex } => {
            print!("{}", commands::inspect::run(&file, hex)?);
        }
        Commands::Digest { file, hex } => {
            println!("{}", commands::digest::run(&file, hex)?);
        }
        Commands::CheckConfig { config } => {
            print!("{}", commands::config::run(&config)?);
        }
    }

    Ok(())
}
