//! Winning line detection for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Detects three-in-a-row after a move
pub struct WinDetector;

impl WinDetector {
    /// Check whether `player`, having just moved at `index`, completed a line.
    ///
    /// Only the lines passing through `index` are inspected: its row, its
    /// column and, when `index` is even, both diagonals. In the row-major
    /// layout the even indices are exactly the four corners and the centre,
    /// which are the only cells lying on a diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn wins_through(cells: &[Cell; 9], index: usize, player: Player) -> bool {
        let target = player.to_cell();
        let complete = |line: &[usize; 3]| line.iter().all(|&idx| cells[idx] == target);

        let row = (index / 3) * 3;
        if complete(&[row, row + 1, row + 2]) {
            return true;
        }

        let col = index % 3;
        if complete(&[col, col + 3, col + 6]) {
            return true;
        }

        index.is_multiple_of(2) && DIAGONALS.iter().any(complete)
    }

    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_with(marks: &[(usize, Cell)]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &(idx, cell) in marks {
            cells[idx] = cell;
        }
        cells
    }

    #[test]
    fn test_top_row_detected_at_last_index() {
        let cells = cells_with(&[(0, Cell::X), (1, Cell::X), (2, Cell::X)]);

        assert!(WinDetector::wins_through(&cells, 2, Player::X));
        assert!(!WinDetector::wins_through(&cells, 1, Player::O));
    }

    #[test]
    fn test_column_detected() {
        let cells = cells_with(&[(1, Cell::O), (4, Cell::O), (7, Cell::O)]);

        assert!(WinDetector::wins_through(&cells, 7, Player::O));
        assert!(WinDetector::wins_through(&cells, 1, Player::O));
        assert!(!WinDetector::wins_through(&cells, 4, Player::X));
    }

    #[test]
    fn test_diagonals_checked_from_corners_and_centre() {
        let main = cells_with(&[(0, Cell::X), (4, Cell::X), (8, Cell::X)]);
        for idx in [0, 4, 8] {
            assert!(WinDetector::wins_through(&main, idx, Player::X));
        }

        let anti = cells_with(&[(2, Cell::O), (4, Cell::O), (6, Cell::O)]);
        for idx in [2, 4, 6] {
            assert!(WinDetector::wins_through(&anti, idx, Player::O));
        }
    }

    #[test]
    fn test_odd_index_skips_diagonals() {
        // X on the main diagonal, but checked from an edge cell that is not on it
        let cells = cells_with(&[(0, Cell::X), (4, Cell::X), (8, Cell::X), (5, Cell::X)]);

        assert!(!WinDetector::wins_through(&cells, 5, Player::X));
        assert!(WinDetector::has_won(&cells, Player::X));
    }

    #[test]
    fn test_unrelated_line_is_not_reported() {
        // Bottom row complete, checked from a top-row cell
        let cells = cells_with(&[(6, Cell::X), (7, Cell::X), (8, Cell::X), (1, Cell::X)]);

        assert!(!WinDetector::wins_through(&cells, 1, Player::X));
    }

    #[test]
    fn test_has_won_matches_every_line() {
        for line in WINNING_LINES {
            let cells = cells_with(&line.map(|idx| (idx, Cell::O)));
            assert!(WinDetector::has_won(&cells, Player::O));
            assert!(!WinDetector::has_won(&cells, Player::X));
            for idx in line {
                assert!(WinDetector::wins_through(&cells, idx, Player::O));
            }
        }
    }
}
