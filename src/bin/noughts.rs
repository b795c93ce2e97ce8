//! noughts CLI - play, analyze and benchmark the perfect-play tic-tac-toe agent
//!
//! Subcommands:
//! - `play`: human against the agent on the terminal
//! - `analyze`: evaluate a position with minimax search
//! - `selfplay`: run the agent against an opponent for many games

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with a perfect-play agent", long_about = None)]
struct Cli {
    /// Emit debug logs (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the agent
    Play(noughts::cli::commands::play::PlayArgs),

    /// Evaluate a board position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Run the agent against an opponent repeatedly
    Selfplay(noughts::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => noughts::cli::commands::selfplay::execute(args),
    }
}
