//! Game observers used by the front ends
//!
//! Observers allow composable data collection during play without coupling
//! the turn sequencer to specific output formats.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{BoardState, GameOutcome, Player},
};

/// Running totals over a series of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome, moves: usize) {
        self.games += 1;
        self.total_moves += moves;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Wins for `player`
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.draws as f64 / self.games as f64
        }
    }

    /// Get average game length
    pub fn avg_game_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

/// Tally observer - counts outcomes across games
#[derive(Debug, Default)]
pub struct TallyObserver {
    tally: Tally,
}

impl TallyObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}

impl GameObserver for TallyObserver {
    fn on_game_end(&mut self, board: &BoardState, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome, board.occupied_count());
        Ok(())
    }
}

/// Progress bar observer - shows series progress with a running score
pub struct ProgressObserver {
    progress_bar: ProgressBar,
    tally: Tally,
}

impl ProgressObserver {
    /// Create a progress bar for `total_games` games
    ///
    /// # Errors
    ///
    /// Returns error if the progress bar template fails to parse.
    pub fn new(total_games: usize) -> Result<Self> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        Ok(Self {
            progress_bar: pb,
            tally: Tally::default(),
        })
    }

    /// Hidden progress bar, for tests and non-interactive runs
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
            tally: Tally::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "X:{} D:{} O:{}",
            self.tally.x_wins, self.tally.draws, self.tally.o_wins
        )
    }

    pub fn finish(&self) {
        self.progress_bar.finish_with_message(self.message());
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}

impl GameObserver for ProgressObserver {
    fn on_game_end(&mut self, board: &BoardState, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome, board.occupied_count());
        self.progress_bar.inc(1);
        self.progress_bar.set_message(self.message());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_records_outcomes() {
        let mut tally = Tally::default();
        tally.record(GameOutcome::Draw, 9);
        tally.record(GameOutcome::Win(Player::O), 6);
        tally.record(GameOutcome::Draw, 9);

        assert_eq!(tally.games, 3);
        assert_eq!(tally.wins(Player::O), 1);
        assert_eq!(tally.wins(Player::X), 0);
        assert!((tally.draw_rate() - 2.0 / 3.0).abs() < 1e-9);
        assert!((tally.avg_game_length() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_observer_counts_games() {
        let mut observer = ProgressObserver::hidden();
        let board = BoardState::from_string("XOX XOO OXX").unwrap();

        observer.on_game_end(&board, GameOutcome::Draw).unwrap();
        observer.finish();

        assert_eq!(observer.tally().draws, 1);
        assert_eq!(observer.tally().total_moves, 9);
    }
}
