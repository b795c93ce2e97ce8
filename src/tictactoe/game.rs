//! Turn sequencing and game history

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{BoardState, Player};
use crate::{
    Error, Result,
    ports::{GameObserver, MoveSource},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still open
    pub fn of(board: &BoardState) -> Option<Self> {
        match board.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// A game in progress or finished, with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub first_player: Player,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game where `first_player` opens
    pub fn new(first_player: Player) -> Self {
        Game {
            first_player,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        if self.moves.len().is_multiple_of(2) {
            self.first_player
        } else {
            self.first_player.opponent()
        }
    }

    /// Play a move for the side to move on `board`.
    ///
    /// Returns the outcome if this move ended the game.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once an outcome is recorded, or
    /// [`Error::InvalidMove`] if the board rejects the position. The history
    /// is unchanged on error.
    pub fn play(&mut self, board: &mut BoardState, position: usize) -> Result<Option<GameOutcome>> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let player = self.to_move();
        board.apply_move(position, player)?;
        self.moves.push(Move { position, player });
        self.outcome = GameOutcome::of(board);
        Ok(self.outcome)
    }

    /// Rebuild the board from the recorded history
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board at
    /// that point. This indicates corrupted game data.
    pub fn replay(&self) -> Result<BoardState> {
        let mut board = BoardState::new();
        for m in &self.moves {
            board.apply_move(m.position, m.player)?;
        }
        Ok(board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// Play a full game between two move sources on one shared board.
///
/// Sources alternate starting with `first`. Each returned position is applied
/// to the board; the game stops at the first win or when the board fills.
///
/// # Errors
///
/// Any error from a source or from applying its move (including
/// [`Error::InvalidMove`]) aborts the game and is returned unchanged. Input
/// front ends are responsible for retrying bad human input before returning.
pub fn play_game(
    x_source: &mut dyn MoveSource,
    o_source: &mut dyn MoveSource,
    first: Player,
    observer: &mut dyn GameObserver,
) -> Result<Game> {
    let mut board = BoardState::new();
    let mut game = Game::new(first);
    observer.on_game_start(&board)?;

    loop {
        let player = game.to_move();
        let source: &mut dyn MoveSource = match player {
            Player::X => &mut *x_source,
            Player::O => &mut *o_source,
        };

        let position = source.select_move(&mut board, player)?;
        debug!(source = source.name(), %player, position, "move selected");

        let outcome = game.play(&mut board, position)?;
        observer.on_move(&board, Move { position, player })?;

        if let Some(outcome) = outcome {
            info!(?outcome, moves = game.moves.len(), "game finished");
            observer.on_game_end(&board, outcome)?;
            return Ok(game);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::observer::NullObserver;

    /// Plays a fixed script of positions, ignoring the board
    struct Scripted {
        moves: std::vec::IntoIter<usize>,
    }

    impl Scripted {
        fn new(moves: &[usize]) -> Self {
            Self {
                moves: moves.to_vec().into_iter(),
            }
        }
    }

    impl MoveSource for Scripted {
        fn select_move(&mut self, _state: &mut BoardState, _player: Player) -> Result<usize> {
            self.moves.next().ok_or(Error::NoValidMoves)
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_play_alternates_players() {
        let mut board = BoardState::new();
        let mut game = Game::new(Player::X);

        game.play(&mut board, 4).unwrap();
        game.play(&mut board, 0).unwrap();

        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.replay().unwrap(), board);
    }

    #[test]
    fn test_play_rejects_moves_after_outcome() {
        let mut board = BoardState::new();
        let mut game = Game::new(Player::X);
        for pos in [0, 3, 1, 4] {
            assert_eq!(game.play(&mut board, pos).unwrap(), None);
        }
        assert_eq!(
            game.play(&mut board, 2).unwrap(),
            Some(GameOutcome::Win(Player::X))
        );
        assert!(matches!(game.play(&mut board, 8), Err(Error::GameOver)));
    }

    #[test]
    fn test_play_game_stops_on_win() {
        let mut x = Scripted::new(&[0, 1, 2, 8]);
        let mut o = Scripted::new(&[3, 4, 5]);

        let game = play_game(&mut x, &mut o, Player::X, &mut NullObserver).unwrap();

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.moves.len(), 5);
    }

    #[test]
    fn test_play_game_o_first() {
        let mut x = Scripted::new(&[3, 4]);
        let mut o = Scripted::new(&[0, 1, 2]);

        let game = play_game(&mut x, &mut o, Player::O, &mut NullObserver).unwrap();

        assert_eq!(game.moves[0], Move { position: 0, player: Player::O });
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::O)));
    }

    #[test]
    fn test_play_game_draw() {
        // X O X
        // X O O
        // O X X
        let mut x = Scripted::new(&[0, 2, 3, 7, 8]);
        let mut o = Scripted::new(&[1, 4, 5, 6]);

        let game = play_game(&mut x, &mut o, Player::X, &mut NullObserver).unwrap();

        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert_eq!(game.moves.len(), 9);
    }

    #[test]
    fn test_play_game_propagates_invalid_move() {
        let mut x = Scripted::new(&[4, 0]);
        let mut o = Scripted::new(&[4]);

        let err = play_game(&mut x, &mut o, Player::X, &mut NullObserver).unwrap_err();

        assert!(err.is_invalid_move());
    }
}
