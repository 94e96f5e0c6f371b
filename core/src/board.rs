use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// The nine cells of a game, row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS as usize],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS as usize],
        }
    }

    /// Builds a board from raw cells, without checking that the marks could
    /// come from an actual game.
    pub const fn from_cells(cells: [Cell; BOARD_CELLS as usize]) -> Self {
        Self { cells }
    }

    pub fn validate_index(index: CellIndex) -> Result<CellIndex> {
        if index < BOARD_CELLS {
            Ok(index)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(index.to_array_index()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        (0..BOARD_CELLS).zip(self.cells.iter().copied())
    }

    pub fn winner(&self) -> Option<WinResult> {
        find_winner(self)
    }

    pub fn is_full(&self) -> bool {
        is_board_full(self)
    }

    pub fn has_marks(&self) -> bool {
        self.cells.iter().any(|cell| !cell.is_empty())
    }

    /// Writes `mark` into a cell the caller has already checked is empty.
    pub(crate) fn place(&mut self, index: CellIndex, mark: Mark) {
        debug_assert!(self[index].is_empty());
        self.cells[index.to_array_index()] = mark.into();
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index.to_array_index()]
    }
}

/// Returns the first complete line in [`LINES`] order, if any.
pub fn find_winner(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board[a] {
            Cell::Marked(mark) if board[b] == board[a] && board[c] == board[a] => {
                Some(WinResult { mark, line })
            }
            _ => None,
        }
    })
}

pub fn is_board_full(board: &Board) -> bool {
    board.cells.iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);

    #[test]
    fn empty_board_has_no_winner_and_is_not_full() {
        let board = Board::new();

        assert_eq!(find_winner(&board), None);
        assert!(!is_board_full(&board));
        assert!(!board.has_marks());
    }

    #[test]
    fn every_line_is_detected_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let mut cells = [E; BOARD_CELLS as usize];
                for index in line {
                    cells[index as usize] = Cell::Marked(mark);
                }

                let result = find_winner(&Board::from_cells(cells));

                assert_eq!(result, Some(WinResult { mark, line }));
            }
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = Board::from_cells([X, X, O, E, E, E, E, E, E]);

        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);

        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn first_line_in_check_order_wins_ties() {
        // top row and left column are both complete
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);

        let result = find_winner(&board).unwrap();

        assert_eq!(result.line, [0, 1, 2]);
        assert_eq!(result.mark, Mark::X);
    }

    #[test]
    fn columns_are_checked_before_diagonals() {
        let board = Board::from_cells([X, O, X, O, X, X, O, O, X]);

        assert_eq!(find_winner(&board).unwrap().line, [2, 5, 8]);
    }

    #[test]
    fn full_board_is_detected() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);

        assert!(is_board_full(&board));
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn one_empty_cell_is_not_full() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, E]);

        assert!(!is_board_full(&board));
    }

    #[test]
    fn place_writes_the_mark() {
        let mut board = Board::new();

        board.place(4, Mark::O);

        assert_eq!(board[4], O);
        assert_eq!(board[4].mark(), Some(Mark::O));
        assert_eq!(board.iter().filter(|(_, cell)| !cell.is_empty()).count(), 1);
    }

    #[test]
    fn detectors_agree_with_brute_force_on_every_board() {
        for code in 0..3u32.pow(BOARD_CELLS as u32) {
            let mut cells = [E; BOARD_CELLS as usize];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = [E, X, O][(rest % 3) as usize];
                rest /= 3;
            }
            let board = Board::from_cells(cells);

            let first_line = LINES.iter().copied().find(|&[a, b, c]| {
                let [a, b, c] = [a, b, c].map(|index| cells[index as usize]);
                !a.is_empty() && a == b && b == c
            });
            let expected = first_line.map(|line| WinResult {
                mark: cells[line[0] as usize].mark().unwrap(),
                line,
            });

            assert_eq!(find_winner(&board), expected);
            assert_eq!(is_board_full(&board), !cells.contains(&E));
        }
    }

    #[test]
    fn validate_index_rejects_out_of_range() {
        assert_eq!(Board::validate_index(8), Ok(8));
        assert_eq!(Board::validate_index(9), Err(GameError::InvalidCell));
        assert_eq!(Board::new().get(9), None);
    }
}
