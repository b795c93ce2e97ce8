//! Selfplay command - Run the agent against an opponent for many games

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::warn;

use crate::{
    agent::{AiAgent, RandomAgent},
    cli::{
        config::{CommonArgs, parse_player_token},
        output::{print_kv, print_section},
    },
    config::AgentConfig,
    observers::{ProgressObserver, Tally},
    ports::{GameObserver, MoveSource},
    tictactoe::{Player, play_game},
};

/// Opponent faced by the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum OpponentKind {
    /// Another perfect-play agent
    Ai,
    /// Uniformly random moves
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Play the agent against an opponent repeatedly")]
pub struct SelfplayArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Opponent type
    #[arg(long, short = 'o', value_enum, default_value = "random")]
    pub opponent: OpponentKind,

    /// Mark the agent plays (`x` or `o`); X always moves first
    #[arg(long, default_value = "o")]
    pub agent_player: String,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

fn agent_config(player: Player, seed: Option<u64>) -> AgentConfig {
    let config = AgentConfig::new(player);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn opponent(kind: OpponentKind, player: Player, seed: Option<u64>) -> Box<dyn MoveSource> {
    match kind {
        OpponentKind::Ai => Box::new(AiAgent::from_config(agent_config(player, seed))),
        OpponentKind::Random => match seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
    }
}

/// Play `games` games of the agent (as `agent_player`) against `kind`
pub fn run_series(
    games: usize,
    kind: OpponentKind,
    agent_player: Player,
    common: &CommonArgs,
    observer: &mut dyn GameObserver,
) -> crate::Result<()> {
    for game_num in 0..games as u64 {
        let mut agent = AiAgent::from_config(agent_config(
            agent_player,
            common.derived_seed(2 * game_num),
        ));
        let mut other = opponent(
            kind,
            agent_player.opponent(),
            common.derived_seed(2 * game_num + 1),
        );

        match agent_player {
            Player::X => play_game(&mut agent, other.as_mut(), Player::X, observer)?,
            Player::O => play_game(other.as_mut(), &mut agent, Player::X, observer)?,
        };
    }
    Ok(())
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let agent_player = parse_player_token(&args.agent_player, "--agent-player")?;
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut progress = if args.quiet {
        ProgressObserver::hidden()
    } else {
        ProgressObserver::new(args.games)?
    };
    run_series(
        args.games,
        args.opponent,
        agent_player,
        &args.common,
        &mut progress,
    )?;
    progress.finish();

    let tally = progress.tally();
    report(&tally, agent_player, args.opponent);
    Ok(())
}

fn report(tally: &Tally, agent_player: Player, opponent: OpponentKind) {
    print_section("Selfplay summary");
    print_kv("Agent plays", &agent_player.to_string());
    print_kv("Opponent", &format!("{opponent:?}"));
    print_kv("Games", &tally.games.to_string());
    print_kv("Agent wins", &tally.wins(agent_player).to_string());
    print_kv("Draws", &tally.draws.to_string());
    print_kv("Agent losses", &tally.wins(agent_player.opponent()).to_string());
    print_kv("Draw rate", &format!("{:.1}%", tally.draw_rate() * 100.0));
    print_kv("Avg game length", &format!("{:.2}", tally.avg_game_length()));

    if tally.wins(agent_player.opponent()) > 0 {
        warn!(
            losses = tally.wins(agent_player.opponent()),
            "agent lost games it should never lose"
        );
    }
}
