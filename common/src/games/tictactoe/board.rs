use std::fmt;

use super::types::{Mark, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Square grid of marks plus the side to move.
///
/// `apply_move` is the only path that advances the turn; `set` is meant for
/// lookahead on clones and never touches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
    current_turn: Mark,
}

pub fn new_board(size: usize) -> Board {
    Board::new(size)
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
            current_turn: Mark::X,
        }
    }

    /// Builds a board from one string per row, using `X`, `O` and `_`/`.`/space
    /// for empty cells. The side to move is derived from the mark counts.
    pub fn from_rows(rows: &[&str]) -> Result<Self, String> {
        let size = rows.len();
        let mut board = Board::new(size);
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != size {
                return Err(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    chars.len(),
                    size
                ));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let mark = match ch {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    '_' | '.' | ' ' => Mark::Empty,
                    other => return Err(format!("Unknown cell symbol '{}'", other)),
                };
                board.set(row, col, mark);
            }
        }

        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        board.current_turn = if x_count > o_count { Mark::O } else { Mark::X };
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    /// Places `mark` on an in-bounds empty cell and hands the turn to the
    /// other side. Returns `false` without touching the board otherwise.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        match self.index(row, col) {
            Some(idx) if self.cells[idx] == Mark::Empty => {
                self.cells[idx] = mark;
                self.current_turn = mark.opposite();
                true
            }
            _ => false,
        }
    }

    /// Turn-tracking variant of `apply_move` for the side to move.
    pub fn play(&mut self, row: usize, col: usize) -> bool {
        self.apply_move(row, col, self.current_turn)
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.index(row, col)
            .map_or(Mark::Empty, |idx| self.cells[idx])
    }

    pub fn get_at(&self, pos: Position) -> Mark {
        self.get(pos.row, pos.col)
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = mark;
        }
    }

    pub fn check_winner(&self) -> Mark {
        check_win(self)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// A board with a completed line or no empty cell left.
    pub fn is_decided(&self) -> bool {
        self.check_winner() != Mark::Empty || self.is_full()
    }

    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
        self.current_turn = Mark::X;
    }

    pub fn move_count(&self) -> usize {
        self.cells.len() - self.count(Mark::Empty)
    }

    fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(idx, _)| Position::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Clone of the board with `mark` written at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        let mut next = self.clone();
        next.set(pos.row, pos.col, mark);
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f, "{}", vec!["---"; self.size].join("+"))?;
            }
            let cells: Vec<String> = (0..self.size)
                .map(|col| format!(" {} ", self.get(row, col)))
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
