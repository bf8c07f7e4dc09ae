//! Analyze command - explore the game tree and report statistics

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    export,
    t3::{BoardState, DEFAULT_SIZE, DEFAULT_TARGET, explore},
};

#[derive(Parser, Debug)]
#[command(about = "Explore the game tree and report statistics")]
pub struct AnalyzeArgs {
    /// Root board to explore (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,

    /// Maximum number of plies to descend; deeper levels grow quickly
    #[arg(long, short = 'd', default_value_t = 4)]
    pub depth: usize,

    /// Line total required to win
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: u32,

    /// Write the per-depth breakdown as CSV
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let root = match &args.board {
        Some(board) => BoardState::from_string_with_target(board, args.target)?,
        None => BoardState::with_rules(DEFAULT_SIZE, args.target)?,
    };

    let pb = output::create_spinner("Exploring game tree");
    let stats = explore(&root, args.depth, |states| {
        pb.set_message(format!(
            "Exploring game tree: {} states",
            output::format_number(states)
        ));
    });
    pb.finish_and_clear();

    output::print_section("Game tree");
    output::print_kv("root", &root.encode());
    output::print_kv("depth limit", &args.depth.to_string());
    output::print_kv("states", &output::format_number(stats.states));
    output::print_kv("terminals", &output::format_number(stats.terminals));
    output::print_kv("odds wins", &output::format_number(stats.wins_odds));
    output::print_kv("evens wins", &output::format_number(stats.wins_evens));
    output::print_kv("draws", &output::format_number(stats.draws));
    output::print_kv("truncated", if stats.truncated { "yes" } else { "no" });

    println!();
    println!(
        "  {:>5} {:>12} {:>10} {:>10} {:>10}",
        "depth", "states", "odds wins", "evens wins", "draws"
    );
    for slice in &stats.by_depth {
        println!(
            "  {:>5} {:>12} {:>10} {:>10} {:>10}",
            slice.depth,
            output::format_number(slice.states),
            output::format_number(slice.wins_odds),
            output::format_number(slice.wins_evens),
            output::format_number(slice.draws)
        );
    }

    if let Some(path) = &args.export {
        export::write_depth_breakdown(path, &stats)?;
        output::print_kv("exported", &path.display().to_string());
    }
    Ok(())
}
