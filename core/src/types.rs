/// Row-major index of a board cell, `0..BOARD_CELLS`.
pub type CellIndex = u8;

/// Cells on a side of the board.
pub const BOARD_SIDE: CellIndex = 3;

/// Total number of cells on the board.
pub const BOARD_CELLS: CellIndex = BOARD_SIDE * BOARD_SIDE;

/// Three cell indices that win when they hold the same mark.
pub type Line = [CellIndex; 3];

/// Every winning line, in the order they are checked: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub trait ToArrayIndex {
    fn to_array_index(self) -> usize;
}

impl ToArrayIndex for CellIndex {
    fn to_array_index(self) -> usize {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_cover_every_cell() {
        for index in 0..BOARD_CELLS {
            assert!(LINES.iter().any(|line| line.contains(&index)));
        }
    }

    #[test]
    fn center_is_on_four_lines() {
        assert_eq!(LINES.iter().filter(|line| line.contains(&4)).count(), 4);
    }
}
