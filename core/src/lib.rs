#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod types;

/// A completed line: the mark that owns it and the three cells it covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    pub mark: Mark,
    pub line: Line,
}

impl WinResult {
    pub fn contains(&self, index: CellIndex) -> bool {
        self.line.contains(&index)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won(Mark),
    Drawn,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Everything a view needs to know about a position, derived in one go.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub winner: Option<WinResult>,
    pub is_full: bool,
    pub status: Status,
    pub is_active: bool,
}

impl Evaluation {
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

/// Returns a copy of `engine` with the move at `index` applied.
///
/// Ignored moves yield an unchanged copy; only an index off the board is an
/// error.
pub fn apply_move(engine: &PlayEngine, index: CellIndex) -> Result<PlayEngine> {
    let mut next = engine.clone();
    next.apply_move(index)?;
    Ok(next)
}

pub fn reset() -> PlayEngine {
    PlayEngine::new()
}

pub fn evaluate(engine: &PlayEngine) -> Evaluation {
    engine.evaluate()
}
