use super::board::Board;
use super::types::{Mark, Position, WinningLine};

/// Every row, column and both diagonals of a `size`x`size` board, in that order.
pub fn board_lines(size: usize) -> Vec<Vec<Position>> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        lines.push((0..size).map(|col| Position::new(row, col)).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| Position::new(row, col)).collect());
    }
    lines.push((0..size).map(|i| Position::new(i, i)).collect());
    lines.push((0..size).map(|i| Position::new(i, size - 1 - i)).collect());
    lines
}

fn line_owner(board: &Board, line: &[Position]) -> Mark {
    let Some(&first) = line.first() else {
        return Mark::Empty;
    };
    let mark = board.get_at(first);
    if mark != Mark::Empty && line.iter().all(|&pos| board.get_at(pos) == mark) {
        mark
    } else {
        Mark::Empty
    }
}

pub fn check_win(board: &Board) -> Mark {
    check_win_with_line(board).map_or(Mark::Empty, |line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    board_lines(board.size()).into_iter().find_map(|line| {
        let mark = line_owner(board, &line);
        if mark == Mark::Empty {
            return None;
        }
        let start = *line.first()?;
        let end = *line.last()?;
        Some(WinningLine::new(mark, start, end))
    })
}
