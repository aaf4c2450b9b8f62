use rand::Rng;

use super::{Board, Cell, Player};
use crate::error::{GameError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Answer to "who won?", with the in-progress and drawn cases spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// The game is not over yet.
    Pending,
    Winner(&'a str),
    /// Full board, nobody aligned four.
    Draw,
}

/// An accepted drop. Coordinates are 1-based, row 1 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Rules engine for a single game: board, turn order and win detection.
///
/// All coordinates in the public API are 1-based. The engine does no
/// internal locking; share it across threads only behind a `Mutex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    red_name: String,
    yellow_name: String,
    current_player: Player,
    last_move: Option<Placement>,
    move_count: usize,
}

impl GameEngine {
    /// Start a game, drawing the first player from the thread-local RNG.
    pub fn new(
        rows: usize,
        columns: usize,
        red_name: impl Into<String>,
        yellow_name: impl Into<String>,
    ) -> Result<Self, GameError> {
        Self::with_rng(rows, columns, red_name, yellow_name, &mut rand::rng())
    }

    /// Start a game, drawing the first player from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        red_name: impl Into<String>,
        yellow_name: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let first = if rng.random_bool(0.5) {
            Player::Red
        } else {
            Player::Yellow
        };
        Self::with_first_player(rows, columns, red_name, yellow_name, first)
    }

    /// Start a game with a fixed first player.
    pub fn with_first_player(
        rows: usize,
        columns: usize,
        red_name: impl Into<String>,
        yellow_name: impl Into<String>,
        first: Player,
    ) -> Result<Self, GameError> {
        let board = Board::new(rows, columns)?;
        log::debug!(
            "new {}x{} game, {} moves first",
            rows,
            columns,
            first.color_name()
        );
        Ok(GameEngine {
            board,
            red_name: red_name.into(),
            yellow_name: yellow_name.into(),
            current_player: first,
            last_move: None,
            move_count: 0,
        })
    }

    pub fn row_count(&self) -> usize {
        self.board.rows()
    }

    pub fn column_count(&self) -> usize {
        self.board.cols()
    }

    /// Cell at a 1-based position.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        row.checked_sub(1)
            .zip(column.checked_sub(1))
            .and_then(|(r, c)| self.board.get(r, c))
            .ok_or(GameError::OutOfRange {
                row,
                column,
                rows: self.row_count(),
                columns: self.column_count(),
            })
    }

    /// The color that acts on the next accepted drop.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.red_name,
            Player::Yellow => &self.yellow_name,
        }
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    /// Number of accepted drops so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Whether a drop into the 1-based `column` has nowhere to land.
    /// Columns outside the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column
            .checked_sub(1)
            .is_none_or(|col| self.board.is_column_full(col))
    }

    /// Drop a piece for the current player. Ignored when the column is full,
    /// does not exist, or the game is over; see [`GameEngine::try_drop`].
    pub fn drop(&mut self, column: usize) {
        if let Err(err) = self.try_drop(column) {
            log::debug!("drop into column {} ignored: {}", column, err);
        }
    }

    /// Drop a piece for the current player into the 1-based `column`.
    pub fn try_drop(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if column == 0 || column > self.column_count() {
            return Err(MoveError::InvalidColumn(column));
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column - 1, player.to_cell())
            .ok_or(MoveError::ColumnFull(column))?;

        let placement = Placement {
            row: row + 1,
            column,
            player,
        };
        self.last_move = Some(placement);
        self.move_count += 1;
        self.current_player = player.other();

        log::debug!(
            "{} dropped into column {} (row {})",
            player.color_name(),
            column,
            placement.row
        );
        match self.outcome() {
            Some(GameOutcome::Winner(winner)) => {
                log::info!("{} wins after {} moves", self.player_name(winner), self.move_count)
            }
            Some(GameOutcome::Draw) => log::info!("draw after {} moves", self.move_count),
            None => {}
        }

        Ok(placement)
    }

    /// True once the board is full or the last move aligned four.
    pub fn is_over(&self) -> bool {
        self.board.is_full() || self.has_winner()
    }

    /// Whether the most recent piece completed four in a row.
    pub fn has_winner(&self) -> bool {
        self.last_move
            .is_some_and(|m| self.board.connects_four(m.row - 1, m.column - 1))
    }

    /// Result of the game, `None` while it is still running.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.has_winner() {
            self.last_move.map(|m| GameOutcome::Winner(m.player))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Name of the winner, or why there is none.
    pub fn winner_name(&self) -> Verdict<'_> {
        match self.outcome() {
            None => Verdict::Pending,
            Some(GameOutcome::Winner(player)) => Verdict::Winner(self.player_name(player)),
            Some(GameOutcome::Draw) => Verdict::Draw,
        }
    }
}
