//! Board state representation and the apply/revert primitives shared by play and search

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::WinDetector;
use crate::error::{Error, InvalidMoveReason, Result};

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(Error::InvalidPlayerString {
                player: s.to_string(),
            }),
        }
    }
}

/// The 3x3 grid plus the winner recorded by the most recent winning move.
///
/// A single instance is shared by real play and by speculative search, which
/// mutates it with [`apply_move`](Self::apply_move) and restores it with
/// [`revert_move`](Self::revert_move). Not `Copy`: search operates on the
/// one instance it was handed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    cells: [Cell; BOARD_CELLS],
    winner: Option<Player>,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; BOARD_CELLS],
            winner: None,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters once whitespace and `|`
    /// separators are removed (`X`, `O`, and `.`/`_`/`-` for empty). The
    /// winner is derived from the marks present.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer or more than 9 cell characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    /// - Both players have a completed line
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if chars.len() != BOARD_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        if x_count.abs_diff(o_count) > 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        let x_wins = WinDetector::has_won(&cells, Player::X);
        let o_wins = WinDetector::has_won(&cells, Player::O);
        let winner = match (x_wins, o_wins) {
            (true, true) => {
                return Err(Error::UnreachablePosition {
                    context: s.to_string(),
                    reason: "both players have three in a row".to_string(),
                });
            }
            (true, false) => Some(Player::X),
            (false, true) => Some(Player::O),
            (false, false) => None,
        };

        Ok(BoardState { cells, winner })
    }

    /// Get cell at position (0-8)
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not in `0..9`.
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// All nine cells in row-major order
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells.get(pos) == Some(&Cell::Empty)
    }

    /// Winner recorded by the latest unreverted winning move
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Empty positions in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        BOARD_CELLS - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Place `player`'s mark at `position`.
    ///
    /// On success the lines through `position` are checked and, if one is
    /// complete, `player` is recorded as the winner. On failure the board is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if `position` is outside `0..9` or the
    /// cell is already occupied.
    pub fn apply_move(&mut self, position: usize, player: Player) -> Result<()> {
        let Some(cell) = self.cells.get_mut(position) else {
            return Err(Error::InvalidMove {
                position,
                reason: InvalidMoveReason::OutOfRange,
            });
        };
        if *cell != Cell::Empty {
            return Err(Error::InvalidMove {
                position,
                reason: InvalidMoveReason::Occupied,
            });
        }

        *cell = player.to_cell();
        if WinDetector::wins_through(&self.cells, position, player) {
            self.winner = Some(player);
        }
        Ok(())
    }

    /// Undo the most recent unreverted move at `position`.
    ///
    /// The cell is emptied and the winner cleared unconditionally. Reverts must
    /// mirror applies in reverse order for the board to return to its prior
    /// state; search relies on this even when the reverted move was a win.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `0..9`.
    pub fn revert_move(&mut self, position: usize) {
        self.cells[position] = Cell::Empty;
        self.winner = None;
    }

    /// True once someone has won or no empty cell remains
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    /// True if the board is full with no winner
    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.is_full()
    }

    /// Player to move assuming the players alternated from an empty board.
    ///
    /// Equal counts mean X moves (X opened); one extra mark hands the turn to
    /// the other player.
    pub fn inferred_to_move(&self) -> Player {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();
        if x_count > o_count {
            Player::O
        } else {
            Player::X
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The 0-8 index layout shown to human players before a game
pub fn position_guide() -> String {
    (0..3)
        .map(|row| {
            (0..3)
                .map(|col| (row * 3 + col).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
