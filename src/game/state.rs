use super::{Board, Seat, COLS};
use crate::error::GameError;

/// Result of evaluating a game right after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Unfinished,
    Draw,
    Win(Seat),
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Unfinished)
    }
}

/// A two-player game: the seated player identities plus the board.
///
/// Whose turn it is is never stored. It is recomputed from the number of
/// pieces on the board every time it is asked for, so a decoded game cannot
/// carry a turn that disagrees with its pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    player_ids: [i64; 2],
    board: Board,
}

impl Game {
    /// Fresh game with an empty board. `first` moves first.
    pub fn create(first: i64, second: i64) -> Self {
        Game {
            player_ids: [first, second],
            board: Board::new(),
        }
    }

    /// Reassemble a game from its parts, e.g. after decoding
    pub fn from_parts(player_ids: [i64; 2], board: Board) -> Self {
        Game { player_ids, board }
    }

    pub fn player_ids(&self) -> [i64; 2] {
        self.player_ids
    }

    pub fn player_id(&self, seat: Seat) -> i64 {
        self.player_ids[seat.index()]
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seat that moves next
    pub fn turn(&self) -> Seat {
        Seat::from_parity(self.board.filled_count())
    }

    /// Seat that placed the most recent piece, none on an empty board
    pub fn mover(&self) -> Option<Seat> {
        match self.board.filled_count() {
            0 => None,
            filled => Some(Seat::from_parity(filled - 1)),
        }
    }

    /// Identity allowed to act on this state
    pub fn player_to_move(&self) -> i64 {
        self.player_id(self.turn())
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the new game (immutable).
    ///
    /// The caller must already have checked that the requester is
    /// [`Game::player_to_move`]; the game itself has no notion of who asks.
    pub fn apply_move(&self, column: usize) -> Result<Game, GameError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably. On error the board is left untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), GameError> {
        let seat = self.turn();
        let row = self.board.drop_piece(column, seat.to_cell())?;
        tracing::debug!(seat = seat.name(), row, column, "piece placed");
        Ok(())
    }

    /// Evaluate the position for the seat that just moved.
    ///
    /// Only the mover's lines are looked for, across the whole board.
    pub fn evaluate(&self) -> GameOutcome {
        if let Some(mover) = self.mover() {
            if self.board.find_four(mover).is_some() {
                return GameOutcome::Win(mover);
            }
        }

        if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::Unfinished
        }
    }
}
