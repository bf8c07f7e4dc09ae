//! Choose command - select the best placement for a board position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    engine,
    t3::{BoardState, DEFAULT_TARGET},
};

#[derive(Parser, Debug)]
#[command(about = "Select the best placement for a board position")]
pub struct ChooseArgs {
    /// Board string, row-major, '.' for open cells (e.g. "53..4...2_O")
    pub board: String,

    /// Line total required to win
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: u32,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ChooseArgs) -> Result<()> {
    let board = BoardState::from_string_with_target(&args.board, args.target)?;
    let action = engine::choose(&board);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&action)?);
        return Ok(());
    }

    output::print_section("Best placement");
    println!("{board}");
    output::print_kv("action", &action.to_string());
    output::print_kv("utility", &action.utility.to_string());
    if action.is_fallback() {
        output::print_kv("note", "no placement strictly improved on zero");
    }
    Ok(())
}
