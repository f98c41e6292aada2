use crate::debug_log;
use crate::games::SessionRng;
use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::board_lines;

/// Base of a loss score; a loss `depth` plies away scores `-(LOSS_BASE - depth)`.
pub const LOSS_BASE: i32 = 100;
/// Base of a win score; a win `depth` plies away scores `WIN_BASE - depth`.
///
/// Every win outweighs every loss in magnitude, so picking the most decisive
/// root move can never prefer walking into a loss over a forced win.
pub const WIN_BASE: i32 = 2 * LOSS_BASE;

/// Largest board searched to the end of the game when no depth is given.
pub const MAX_EXHAUSTIVE_BOARD_SIZE: usize = 3;
/// Ply limit used on larger boards when the caller sets none.
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Bound on the static evaluation used at the depth horizon. Kept below the
/// smallest terminal magnitude so a real result always outranks a guess.
const EVAL_LIMIT: i32 = LOSS_BASE / 2 - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

/// Scores every empty cell for `bot_mark`. `max_depth` caps the search in
/// plies from the current position; `None` searches to the end of the game.
pub fn score_moves(board: &Board, bot_mark: Mark, max_depth: Option<usize>) -> Vec<ScoredMove> {
    let max_depth = max_depth.unwrap_or(usize::MAX);
    board
        .empty_cells()
        .into_iter()
        .map(|position| {
            let child = board.with_mark(position, bot_mark);
            let score = minimax(&child, bot_mark, 1, max_depth, false, i32::MIN, i32::MAX);
            ScoredMove { position, score }
        })
        .collect()
}

/// True for scores that only a reachable win can produce. Horizon
/// evaluations never get this high.
fn is_forced_win(score: i32) -> bool {
    score > LOSS_BASE
}

/// Root selection: when no candidate can force a win take the highest score,
/// otherwise take the largest magnitude. Exact ties are broken uniformly.
///
/// In a full-depth search "no forced win" is the same as "every score <= 0".
pub fn select_root_move(scored: &[ScoredMove], rng: &mut SessionRng) -> Option<Position> {
    let can_force_win = scored.iter().any(|m| is_forced_win(m.score));
    let rank = |m: &ScoredMove| {
        if can_force_win {
            (m.score.abs(), m.score)
        } else {
            (m.score, m.score)
        }
    };

    let best = scored.iter().map(rank).max()?;
    let ties: Vec<Position> = scored
        .iter()
        .filter(|m| rank(m) == best)
        .map(|m| m.position)
        .collect();
    rng.choose(&ties).copied()
}

/// Depth actually searched: `requested`, or a default cap on boards too
/// large for an exhaustive search.
pub fn effective_depth(board_size: usize, requested: Option<usize>) -> Option<usize> {
    requested.or_else(|| (board_size > MAX_EXHAUSTIVE_BOARD_SIZE).then_some(DEFAULT_SEARCH_DEPTH))
}

pub fn find_best_move(
    board: &Board,
    bot_mark: Mark,
    max_depth: Option<usize>,
    rng: &mut SessionRng,
) -> Option<Position> {
    let max_depth = effective_depth(board.size(), max_depth);
    let scored = score_moves(board, bot_mark, max_depth);
    debug_log!(
        "Minimax scores for {}: {}",
        bot_mark,
        scored
            .iter()
            .map(|m| format!("{}={}", m.position, m.score))
            .collect::<Vec<_>>()
            .join(" ")
    );
    select_root_move(&scored, rng)
}

fn terminal_score(board: &Board, bot_mark: Mark, depth: usize) -> Option<i32> {
    let depth = depth as i32;
    match board.check_winner() {
        Mark::Empty if board.is_full() => Some(0),
        Mark::Empty => None,
        winner if winner == bot_mark => Some(WIN_BASE - depth),
        _ => Some(-(LOSS_BASE - depth)),
    }
}

fn minimax(
    board: &Board,
    bot_mark: Mark,
    depth: usize,
    max_depth: usize,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, bot_mark, depth) {
        return score;
    }

    if depth >= max_depth {
        return evaluate_board(board, bot_mark);
    }

    let moves = board.empty_cells();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            let child = board.with_mark(pos, bot_mark);
            let eval = minimax(&child, bot_mark, depth + 1, max_depth, false, alpha, beta);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let opponent_mark = bot_mark.opposite();
        let mut min_eval = i32::MAX;
        for pos in moves {
            let child = board.with_mark(pos, opponent_mark);
            let eval = minimax(&child, bot_mark, depth + 1, max_depth, true, alpha, beta);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Static score of an undecided position: each line still open to one side
/// counts the square of that side's marks on it.
pub fn evaluate_board(board: &Board, bot_mark: Mark) -> i32 {
    let opponent_mark = bot_mark.opposite();
    let score: i32 = board_lines(board.size())
        .iter()
        .map(|line| {
            let mut bot_count = 0i32;
            let mut opp_count = 0i32;
            for &pos in line {
                match board.get_at(pos) {
                    Mark::Empty => {}
                    m if m == bot_mark => bot_count += 1,
                    m if m == opponent_mark => opp_count += 1,
                    _ => {}
                }
            }
            if opp_count == 0 {
                bot_count * bot_count
            } else if bot_count == 0 {
                -(opp_count * opp_count)
            } else {
                0
            }
        })
        .sum();
    score.clamp(-EVAL_LIMIT, EVAL_LIMIT)
}
