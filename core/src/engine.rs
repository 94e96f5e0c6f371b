use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    Won(Mark),
    Draw,
}

impl EngineState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        !self.is_active()
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// Player-facing summary of a position. `Display` renders the status line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Turn(Mark),
    Won(Mark),
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Turn(mark) => write!(f, "Turn: {mark}"),
            Self::Won(Mark::X) => f.write_str("X wins! Great game."),
            Self::Won(Mark::O) => f.write_str("O wins! Well played."),
            Self::Draw => f.write_str("It's a draw. Try again!"),
        }
    }
}

/// Board plus the mark to move. Winner, fullness and status are always
/// derived from these two fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    to_move: Mark,
}

impl PlayEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, index: CellIndex) -> Option<Cell> {
        self.board.get(index)
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn winner(&self) -> Option<WinResult> {
        self.board.winner()
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn state(&self) -> EngineState {
        match self.winner() {
            Some(WinResult { mark, .. }) => EngineState::Won(mark),
            None if self.is_full() => EngineState::Draw,
            None => EngineState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn has_moves(&self) -> bool {
        self.board.has_marks()
    }

    pub fn status(&self) -> Status {
        match self.state() {
            EngineState::Active => Status::Turn(self.to_move),
            EngineState::Won(mark) => Status::Won(mark),
            EngineState::Draw => Status::Draw,
        }
    }

    pub fn evaluate(&self) -> Evaluation {
        let winner = self.winner();
        let is_full = self.is_full();
        Evaluation {
            winner,
            is_full,
            status: self.status(),
            is_active: winner.is_none() && !is_full,
        }
    }

    /// Reports why a move at `index` would be refused, if it would be.
    pub fn check_move(&self, index: CellIndex) -> Result<CellIndex> {
        let index = Board::validate_index(index)?;
        self.check_active()?;
        if self.board[index].is_empty() {
            Ok(index)
        } else {
            Err(GameError::CellOccupied)
        }
    }

    pub fn can_play_at(&self, index: CellIndex) -> bool {
        self.check_move(index).is_ok()
    }

    /// Places the current mark at `index`.
    ///
    /// Occupied cells and finished games are ignored with
    /// [`MoveOutcome::NoChange`]; an index off the board is an error.
    pub fn apply_move(&mut self, index: CellIndex) -> Result<MoveOutcome> {
        let index = match self.check_move(index) {
            Ok(index) => index,
            Err(GameError::InvalidCell) => return Err(GameError::InvalidCell),
            Err(err) => {
                log::trace!("ignored move at {}: {}", index, err);
                return Ok(MoveOutcome::NoChange);
            }
        };

        let mark = self.to_move;
        self.board.place(index, mark);
        self.to_move = mark.opponent();
        log::debug!("{} played {}", mark, index);

        Ok(match self.state() {
            EngineState::Active => MoveOutcome::Placed,
            EngineState::Won(winner) => {
                log::debug!("{} wins", winner);
                MoveOutcome::Won(winner)
            }
            EngineState::Draw => {
                log::debug!("draw");
                MoveOutcome::Drawn
            }
        })
    }

    pub fn reset(&mut self) {
        log::debug!("reset");
        *self = Self::new();
    }

    fn check_active(&self) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn top_row_win_on_wasm() {
        let mut engine = PlayEngine::new();
        for index in [0, 4, 1, 5] {
            assert_eq!(engine.apply_move(index), Ok(MoveOutcome::Placed));
        }

        assert_eq!(engine.apply_move(2), Ok(MoveOutcome::Won(Mark::X)));
        assert_eq!(engine.winner().map(|win| win.line), Some([0, 1, 2]));
        assert_eq!(engine.apply_move(9), Err(GameError::InvalidCell));
    }
}
