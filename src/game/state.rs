use log::debug;

use super::{Axis, Board, Player, COLS};
use crate::config::{AfterWinPolicy, FullColumnPolicy, RulesConfig};
use crate::error::MoveError;
use crate::store::{Store, SubscriberId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Result of a successful call to [`Game::drop_piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Piece placed, turn passed to the other player
    Placed {
        row: usize,
        column: usize,
        player: Player,
    },
    /// Piece placed and completed a winning line
    Won {
        row: usize,
        column: usize,
        player: Player,
        axis: Axis,
    },
    /// Column was full; nothing changed
    Ignored { column: usize },
}

/// Game state engine. Owns the board, the player to move and the winner,
/// each held in an observable [`Store`].
#[derive(Debug)]
pub struct Game {
    board: Store<Board>,
    current_player: Store<Player>,
    winner: Store<Option<Player>>,
    rules: RulesConfig,
}

impl Game {
    /// New game with the default (lenient) rules
    pub fn new() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    pub fn with_rules(rules: RulesConfig) -> Self {
        Game {
            board: Store::new(Board::new()),
            current_player: Store::new(Player::FIRST),
            winner: Store::new(None),
            rules,
        }
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        self.board.get()
    }

    /// Player whose turn is next
    pub fn current_player(&self) -> Player {
        *self.current_player.get()
    }

    pub fn winner(&self) -> Option<Player> {
        *self.winner.get()
    }

    /// Winner if one is set, draw if the board filled up without one
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Winner(player)),
            None if self.board().is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Get list of columns that still have room
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| !self.board().is_column_full(col))
            .collect()
    }

    pub fn subscribe_board(&mut self, callback: impl FnMut(&Board) + 'static) -> SubscriberId {
        self.board.subscribe(callback)
    }

    pub fn subscribe_current_player(
        &mut self,
        callback: impl FnMut(&Player) + 'static,
    ) -> SubscriberId {
        self.current_player.subscribe(callback)
    }

    pub fn subscribe_winner(
        &mut self,
        callback: impl FnMut(&Option<Player>) + 'static,
    ) -> SubscriberId {
        self.winner.subscribe(callback)
    }

    pub fn unsubscribe_board(&mut self, id: SubscriberId) -> bool {
        self.board.unsubscribe(id)
    }

    pub fn unsubscribe_current_player(&mut self, id: SubscriberId) -> bool {
        self.current_player.unsubscribe(id)
    }

    pub fn unsubscribe_winner(&mut self, id: SubscriberId) -> bool {
        self.winner.unsubscribe(id)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// The piece lands in the lowest empty row. A piece that completes a line
    /// sets the winner and keeps the turn; any other piece passes the turn.
    /// Once a winner is set it never changes until [`Game::reset_game`]: a line
    /// completed afterwards by the winner keeps the turn, one completed by the
    /// opponent counts as an ordinary placement.
    ///
    /// Full columns and drops after a win are handled according to
    /// [`RulesConfig`]; an out-of-range column is always an error.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn { column });
        }

        let decided = self.winner();
        if decided.is_some() && self.rules.after_win == AfterWinPolicy::Reject {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player();
        let row = match self.board.get().landing_row(column) {
            Some(row) => row,
            None => {
                return match self.rules.full_column {
                    FullColumnPolicy::Ignore => {
                        debug!("column {column} is full, drop ignored");
                        Ok(DropOutcome::Ignored { column })
                    }
                    FullColumnPolicy::Reject => Err(MoveError::ColumnFull { column }),
                };
            }
        };

        let axis = self.board.update(|board| {
            board.drop_piece(column, player.to_cell())?;
            Ok::<_, MoveError>(board.winning_axis(row, column))
        })?;
        debug!("{} dropped into column {column}, landed on row {row}", player.name());

        match axis {
            Some(axis) if decided.is_none() || decided == Some(player) => {
                debug!("{} wins ({})", player.name(), axis.name());
                self.winner.set(Some(player));
                Ok(DropOutcome::Won {
                    row,
                    column,
                    player,
                    axis,
                })
            }
            _ => {
                self.current_player.set(player.other());
                Ok(DropOutcome::Placed {
                    row,
                    column,
                    player,
                })
            }
        }
    }

    /// Restore the empty board with Red to move and no winner.
    pub fn reset_game(&mut self) {
        self.board.set(Board::new());
        self.current_player.set(Player::FIRST);
        self.winner.set(None);
        debug!("game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
