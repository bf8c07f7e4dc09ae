//! Tic-Tac-Total CLI
//!
//! This CLI provides a unified interface for:
//! - Choosing the best placement for a board position
//! - Playing full games between agents
//! - Exploring the game tree and exporting statistics

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "t3")]
#[command(version, about = "Tic-Tac-Total decision engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the best placement for a board position
    Choose(tictactotal::cli::commands::choose::ChooseArgs),

    /// Play a full game between two agents
    Play(tictactotal::cli::commands::play::PlayArgs),

    /// Explore the game tree and report statistics
    Analyze(tictactotal::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Choose(args) => tictactotal::cli::commands::choose::execute(args),
        Commands::Play(args) => tictactotal::cli::commands::play::execute(args),
        Commands::Analyze(args) => tictactotal::cli::commands::analyze::execute(args),
    }
}
