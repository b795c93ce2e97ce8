//! Play command - Human against the perfect-play agent over stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    agent::AiAgent,
    cli::{
        config::{CommonArgs, parse_player_token},
        output::render_board,
    },
    config::AgentConfig,
    ports::{GameObserver, MoveSource},
    tictactoe::{BoardState, GameOutcome, Move, Player, play_game, position_guide},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the agent")]
pub struct PlayArgs {
    /// Which mark the human plays (`x` or `o`); X always moves first
    #[arg(long, default_value = "x")]
    pub human: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Reads moves from a person, re-prompting until the index is playable
pub struct HumanInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> HumanInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> crate::Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read move".to_string(),
            source,
        })?;
        if read == 0 {
            return Err(Error::Io {
                operation: "read move".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanInput<R, W> {
    fn select_move(&mut self, state: &mut BoardState, player: Player) -> crate::Result<usize> {
        let available = state.available_moves();
        if available.is_empty() {
            return Err(Error::NoValidMoves);
        }

        loop {
            write!(self.writer, "\nPlayer {player}'s turn (0-8): ")?;
            self.writer.flush()?;

            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(position) if available.contains(&position) => return Ok(position),
                _ => writeln!(self.writer, "Invalid move. Try again.")?,
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Prints the board after every move and announces the result
pub struct BoardPrinter<W> {
    writer: W,
    human: Player,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(writer: W, human: Player) -> Self {
        Self { writer, human }
    }
}

impl<W: Write> GameObserver for BoardPrinter<W> {
    fn on_game_start(&mut self, _board: &BoardState) -> crate::Result<()> {
        writeln!(self.writer, "Number positions:")?;
        writeln!(self.writer, "{}", position_guide())?;
        Ok(())
    }

    fn on_move(&mut self, board: &BoardState, mv: Move) -> crate::Result<()> {
        let who = if mv.player == self.human { "You" } else { "AI" };
        writeln!(self.writer, "\n{who} ({}) played {}", mv.player, mv.position)?;
        writeln!(self.writer, "{}", render_board(board))?;
        Ok(())
    }

    fn on_game_end(&mut self, _board: &BoardState, outcome: GameOutcome) -> crate::Result<()> {
        match outcome {
            GameOutcome::Win(player) if player == self.human => {
                writeln!(self.writer, "\nYou ({player}) win!")?
            }
            GameOutcome::Win(player) => writeln!(self.writer, "\nAI ({player}) wins!")?,
            GameOutcome::Draw => writeln!(self.writer, "\nIt's a tie! No winner.")?,
        }
        Ok(())
    }
}

/// Play one game between `human` input and an agent
pub fn run_game<R: BufRead, W: Write>(
    human: Player,
    config: AgentConfig,
    input: HumanInput<R, W>,
    printer: &mut BoardPrinter<impl Write>,
) -> crate::Result<GameOutcome> {
    let mut human_source = input;
    let mut agent = AiAgent::from_config(config);

    let game = match human {
        Player::X => play_game(&mut human_source, &mut agent, Player::X, printer)?,
        Player::O => play_game(&mut agent, &mut human_source, Player::X, printer)?,
    };
    game.outcome.ok_or(Error::NoValidMoves)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = parse_player_token(&args.human, "--human")?;
    let mut config = AgentConfig::new(human.opponent());
    if let Some(seed) = args.common.seed {
        config = config.with_seed(seed);
    }

    let stdin = io::stdin();
    let input = HumanInput::new(stdin.lock(), io::stdout());
    let mut printer = BoardPrinter::new(io::stdout(), human);

    run_game(human, config, input, &mut printer).context("game aborted")?;
    Ok(())
}
