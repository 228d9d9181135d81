use crate::types::Position;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

const ROW_STEPS: [(isize, isize); 2] = [(0, 1), (0, -1)];
const COL_STEPS: [(isize, isize); 2] = [(1, 0), (-1, 0)];
const DIAGONAL_STEPS: [(isize, isize); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

/// Acting player. Legality and flipping are always parameterized by the
/// side making the move; the board itself holds no turn state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn cell(self) -> Cell {
        match self {
            Self::Dark => Cell::Dark,
            Self::Light => Cell::Light,
        }
    }

    /// Wire encoding shared with [`Board::to_array`]: 1=dark, 2=light.
    pub const fn code(self) -> u8 {
        match self {
            Self::Dark => 1,
            Self::Light => 2,
        }
    }
}

/// Reversi board: an 8x8 row-major grid of cells. Counts and emptiness are
/// always recomputed from the grid, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=light, (3,4)=dark, (4,3)=dark, (4,4)=light.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Cell::Light;
        cells[4][4] = Cell::Light;
        cells[3][4] = Cell::Dark;
        cells[4][3] = Cell::Dark;
        Self { cells }
    }

    pub const fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Pure legality predicate for placing `side` at an empty (row, col):
    /// some line must sandwich at least one opposing disc. Callers filter
    /// for emptiness; the three line families are checked independently.
    pub fn is_legal(&self, row: usize, col: usize, side: Side) -> bool {
        self.legal_on_row(row, col, side)
            || self.legal_on_col(row, col, side)
            || self.legal_on_diagonals(row, col, side)
    }

    fn legal_on_row(&self, row: usize, col: usize, side: Side) -> bool {
        ROW_STEPS
            .iter()
            .any(|&(dr, dc)| self.capture_end(row, col, dr, dc, side).is_some())
    }

    fn legal_on_col(&self, row: usize, col: usize, side: Side) -> bool {
        COL_STEPS
            .iter()
            .any(|&(dr, dc)| self.capture_end(row, col, dr, dc, side).is_some())
    }

    fn legal_on_diagonals(&self, row: usize, col: usize, side: Side) -> bool {
        DIAGONAL_STEPS
            .iter()
            .any(|&(dr, dc)| self.capture_end(row, col, dr, dc, side).is_some())
    }

    /// Walks one ray from (row, col). Returns the coordinates of the first
    /// own-color disc iff at least one opposing disc lies strictly between
    /// it and the origin. Empty squares and the board edge end the ray.
    fn capture_end(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        side: Side,
    ) -> Option<(usize, usize)> {
        let own = side.cell();
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let mut distance = 1usize;

        while in_bounds(r, c) {
            let cell = self.cells[r as usize][c as usize];
            if cell == own {
                return (distance > 1).then_some((r as usize, c as usize));
            }
            if cell == Cell::Empty {
                return None;
            }
            r += dr;
            c += dc;
            distance += 1;
        }

        None
    }

    /// Places a disc for `side` and flips every captured run. The caller
    /// must have confirmed legality via [`Board::is_legal`] first; the
    /// executor places unconditionally.
    pub fn apply_move(&mut self, row: usize, col: usize, side: Side) {
        self.cells[row][col] = side.cell();
        self.flip_on_row(row, col, side);
        self.flip_on_col(row, col, side);
        self.flip_on_diagonals(row, col, side);
    }

    fn flip_on_row(&mut self, row: usize, col: usize, side: Side) {
        for (dr, dc) in ROW_STEPS {
            self.flip_toward(row, col, dr, dc, side);
        }
    }

    fn flip_on_col(&mut self, row: usize, col: usize, side: Side) {
        for (dr, dc) in COL_STEPS {
            self.flip_toward(row, col, dr, dc, side);
        }
    }

    fn flip_on_diagonals(&mut self, row: usize, col: usize, side: Side) {
        for (dr, dc) in DIAGONAL_STEPS {
            self.flip_toward(row, col, dr, dc, side);
        }
    }

    /// Rewrites the cells strictly between the origin and the terminating
    /// own-color disc on one ray, when such a run exists.
    fn flip_toward(&mut self, row: usize, col: usize, dr: isize, dc: isize, side: Side) {
        let Some((end_row, end_col)) = self.capture_end(row, col, dr, dc, side) else {
            return;
        };

        let own = side.cell();
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while (r as usize, c as usize) != (end_row, end_col) {
            self.cells[r as usize][c as usize] = own;
            r += dr;
            c += dc;
        }
    }

    /// The discs a move at (row, col) would flip, without mutating the
    /// board. Used for reporting flips to the shell.
    pub fn captures(&self, row: usize, col: usize, side: Side) -> Vec<Position> {
        let mut flipped = Vec::new();
        for &(dr, dc) in ROW_STEPS
            .iter()
            .chain(COL_STEPS.iter())
            .chain(DIAGONAL_STEPS.iter())
        {
            if let Some((end_row, end_col)) = self.capture_end(row, col, dr, dc, side) {
                let mut r = row as isize + dr;
                let mut c = col as isize + dc;
                while (r as usize, c as usize) != (end_row, end_col) {
                    flipped.push(Position::new(r as u8, c as u8));
                    r += dr;
                    c += dc;
                }
            }
        }
        flipped
    }

    /// Every legal placement for `side`, in row-major scan order.
    pub fn legal_moves(&self, side: Side) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col] == Cell::Empty && self.is_legal(row, col, side) {
                    moves.push(Position::new(row as u8, col as u8));
                }
            }
        }
        moves
    }

    /// Count-only variant of [`Board::legal_moves`] for the mobility term.
    pub fn mobility(&self, side: Side) -> usize {
        let mut count = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col] == Cell::Empty && self.is_legal(row, col, side) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Returns `(dark_count, light_count)`.
    pub fn count(&self) -> (u8, u8) {
        let mut dark = 0;
        let mut light = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Dark => dark += 1,
                    Cell::Light => light += 1,
                    Cell::Empty => {}
                }
            }
        }
        (dark, light)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (dark, light) = self.count();
        NUM_SQUARES as u8 - dark - light
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// The game ends when the board is full or either side has no discs.
    pub fn is_terminal(&self) -> bool {
        let (dark, light) = self.count();
        dark == 0 || light == 0 || dark + light == NUM_SQUARES as u8
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=dark, 2=light.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                board[row * BOARD_SIZE + col] = match self.cells[row][col] {
                    Cell::Empty => 0,
                    Cell::Dark => Side::Dark.code(),
                    Cell::Light => Side::Light.code(),
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn in_bounds(row: isize, col: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
}
