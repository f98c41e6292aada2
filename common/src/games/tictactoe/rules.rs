//! One-ply board patterns shared by the heuristic and rule-based bots.
//!
//! Every probe runs on a clone from [`Board::with_mark`], so callers never
//! have to restore a cell they tried.

use super::board::Board;
use super::types::{Mark, Position};

/// Empty cells that complete a line for `mark` when taken, in row-major order.
pub fn winning_moves(board: &Board, mark: Mark) -> Vec<Position> {
    if mark == Mark::Empty {
        return Vec::new();
    }
    board
        .empty_cells()
        .into_iter()
        .filter(|&pos| board.with_mark(pos, mark).check_winner() == mark)
        .collect()
}

pub fn find_winning_move(board: &Board, mark: Mark) -> Option<Position> {
    winning_moves(board, mark).into_iter().next()
}

/// True when taking `pos` leaves `mark` with two or more distinct winning
/// replies.
pub fn creates_fork(board: &Board, pos: Position, mark: Mark) -> bool {
    if board.get_at(pos) != Mark::Empty {
        return false;
    }
    winning_moves(&board.with_mark(pos, mark), mark).len() >= 2
}

pub fn fork_moves(board: &Board, mark: Mark) -> Vec<Position> {
    if mark == Mark::Empty {
        return Vec::new();
    }
    board
        .empty_cells()
        .into_iter()
        .filter(|&pos| creates_fork(board, pos, mark))
        .collect()
}

pub fn find_fork_move(board: &Board, mark: Mark) -> Option<Position> {
    fork_moves(board, mark).into_iter().next()
}

/// The middle cell when it exists (odd sizes) and is empty.
pub fn free_center(board: &Board) -> Option<Position> {
    let size = board.size();
    if size % 2 == 0 {
        return None;
    }
    let center = Position::new(size / 2, size / 2);
    (board.get_at(center) == Mark::Empty).then_some(center)
}

pub fn corners(size: usize) -> Vec<Position> {
    if size == 0 {
        return Vec::new();
    }
    let last = size - 1;
    vec![
        Position::new(0, 0),
        Position::new(0, last),
        Position::new(last, 0),
        Position::new(last, last),
    ]
}

fn opposite_corner(size: usize, corner: Position) -> Position {
    Position::new(size - 1 - corner.row, size - 1 - corner.col)
}

/// First empty corner diagonally across from a corner held by `opponent`.
pub fn find_opposite_corner(board: &Board, opponent: Mark) -> Option<Position> {
    let size = board.size();
    corners(size)
        .into_iter()
        .filter(|&corner| board.get_at(corner) == opponent)
        .map(|corner| opposite_corner(size, corner))
        .find(|&target| board.get_at(target) == Mark::Empty)
}

pub fn empty_corners(board: &Board) -> Vec<Position> {
    corners(board.size())
        .into_iter()
        .filter(|&corner| board.get_at(corner) == Mark::Empty)
        .collect()
}

/// Empty border cells that are not corners.
pub fn empty_sides(board: &Board) -> Vec<Position> {
    let last = board.size().saturating_sub(1);
    board
        .empty_cells()
        .into_iter()
        .filter(|pos| {
            let on_border = pos.row == 0 || pos.col == 0 || pos.row == last || pos.col == last;
            let is_corner = (pos.row == 0 || pos.row == last) && (pos.col == 0 || pos.col == last);
            on_border && !is_corner
        })
        .collect()
}
