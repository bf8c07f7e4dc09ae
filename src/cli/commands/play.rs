//! Play command - run a full game between two agents

use anyhow::Result;
use clap::Parser;

use crate::{
    agents,
    cli::output,
    t3::{BoardState, DEFAULT_SIZE, DEFAULT_TARGET, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a full game between two agents")]
pub struct PlayArgs {
    /// Agent placing the odd digits (`engine` or `random`)
    #[arg(long, default_value = "engine")]
    pub odds: String,

    /// Agent placing the even digits (`engine` or `random`)
    #[arg(long, default_value = "random")]
    pub evens: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line total required to win
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: u32,

    /// Emit the finished game as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut odds = agents::from_token(&args.odds, args.seed)?;
    let mut evens = agents::from_token(&args.evens, args.seed.map(|s| s + 1))?;

    let mut game = Game::from_state(BoardState::with_rules(DEFAULT_SIZE, args.target)?);

    while game.outcome().is_none() {
        let agent = match game.state().to_move() {
            Player::Odds => &mut odds,
            Player::Evens => &mut evens,
        };
        let action = agent.select(game.state())?;
        game.play(action)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    output::print_section("Game");
    output::print_kv("odds", odds.name());
    output::print_kv("evens", evens.name());
    for (ply, record) in game.moves().iter().enumerate() {
        println!("  {:2}. {} plays {}", ply + 1, record.player, record.action);
    }
    println!("\n{}", game.state());
    match game.outcome() {
        Some(GameOutcome::Win(player)) => output::print_kv("outcome", &format!("{player} wins")),
        Some(GameOutcome::Draw) => output::print_kv("outcome", "draw"),
        None => unreachable!("loop runs until an outcome is reached"),
    }
    Ok(())
}
