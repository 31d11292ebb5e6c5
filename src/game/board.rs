use smallvec::SmallVec;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

/// Playable columns, ascending. Small enough to live on the stack, which
/// matters because the search recomputes this at every node.
pub type LegalActions = SmallVec<[usize; COLS]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a disc into a column, filling the lowest empty cell. Returns the
    /// row it landed in, or `None` if the column is full or out of range:
    /// a silent no-op, never a panic. Mutates in place; the search hot path
    /// depends on there being no board copies here.
    pub fn place(&mut self, col: usize, cell: Cell) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }

        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Some(row);
            }
        }

        unreachable!("column cannot be full here: is_column_full returned false");
    }

    /// Remove the topmost disc from a column. No-op if the column is empty
    /// or out of range. `undo` after a matching `place` restores the board
    /// bit-identically.
    pub fn undo(&mut self, col: usize) {
        if col >= COLS {
            return;
        }
        for row in 0..ROWS {
            if self.cells[row][col] != Cell::Empty {
                self.cells[row][col] = Cell::Empty;
                return;
            }
        }
    }

    /// Playable columns in ascending order
    pub fn valid_moves(&self) -> LegalActions {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// True iff an exactly-4 run of `cell` starts at (row, col) stepping by
    /// (drow, dcol). Walking off the board ends the run.
    pub fn line_of_four(&self, row: usize, col: usize, drow: i32, dcol: i32, cell: Cell) -> bool {
        let mut count = 0;
        for i in 0..4 {
            let r = row as i32 + i * drow;
            let c = col as i32 + i * dcol;
            if r < 0 || r >= ROWS as i32 || c < 0 || c >= COLS as i32 {
                break;
            }
            if self.cells[r as usize][c as usize] != cell {
                break;
            }
            count += 1;
        }
        count == 4
    }

    /// Count all lines of four for `cell`, checking every cell as a starting
    /// point in each of the four scan directions. Overlapping runs seen from
    /// different starting cells count separately; the evaluator's scoring
    /// convention depends on that.
    pub fn count_lines_of_four(&self, cell: Cell) -> usize {
        let mut count = 0;
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != cell {
                    continue;
                }
                for (drow, dcol) in DIRECTIONS {
                    if self.line_of_four(row, col, drow, dcol, cell) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// True iff the 4-cell window starting at (row, col) along (drow, dcol)
    /// holds exactly 3 `cell` discs and exactly 1 empty cell. An opponent
    /// disc in the window disqualifies it since the counts can no longer
    /// reach 3 + 1. Walking off the board truncates the window.
    pub fn has_open_three(&self, row: usize, col: usize, drow: i32, dcol: i32, cell: Cell) -> bool {
        let mut count = 0;
        let mut empty = 0;
        for i in 0..4 {
            let r = row as i32 + i * drow;
            let c = col as i32 + i * dcol;
            if r < 0 || r >= ROWS as i32 || c < 0 || c >= COLS as i32 {
                break;
            }
            match self.cells[r as usize][c as usize] {
                c2 if c2 == cell => count += 1,
                Cell::Empty => empty += 1,
                _ => {}
            }
        }
        count == 3 && empty == 1
    }
}

/// Scan directions: horizontal, vertical, diagonal down-right, diagonal
/// down-left (rows grow downward).
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
