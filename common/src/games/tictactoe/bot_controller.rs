use crate::debug_log;
use crate::games::SessionRng;
use super::board::Board;
use super::minimax::find_best_move;
use super::rules::{
    empty_corners, empty_sides, find_fork_move, find_opposite_corner, find_winning_move,
    free_center,
};
use super::strategy::Strategy;
use super::types::{Mark, Position};

/// Everything a bot needs to pick a cell. The board is only ever read; all
/// lookahead runs on clones.
pub struct BotInput<'a> {
    pub board: &'a Board,
    pub bot_mark: Mark,
    /// Ply limit for the minimax strategy; `None` searches exhaustively.
    pub search_depth: Option<usize>,
}

impl<'a> BotInput<'a> {
    pub fn new(board: &'a Board, bot_mark: Mark) -> Self {
        Self {
            board,
            bot_mark,
            search_depth: None,
        }
    }

    pub fn with_search_depth(mut self, search_depth: Option<usize>) -> Self {
        self.search_depth = search_depth;
        self
    }
}

/// Picks a cell for `bot_mark` with the given strategy. Returns `None` when
/// the game is already decided or `bot_mark` is `Empty`.
pub fn choose_move(
    board: &Board,
    strategy: Strategy,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    calculate_move(strategy, &BotInput::new(board, bot_mark), rng)
}

pub fn calculate_move(
    strategy: Strategy,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    if input.bot_mark == Mark::Empty || input.board.is_decided() {
        return None;
    }

    let chosen = match strategy {
        Strategy::Random => calculate_random_move(input, rng),
        Strategy::Heuristic => calculate_heuristic_move(input, rng),
        Strategy::Minimax => {
            find_best_move(input.board, input.bot_mark, input.search_depth, rng)
        }
        Strategy::RuleBased => calculate_rule_based_move(input, rng),
    };

    if let Some(pos) = chosen {
        debug_log!("{} bot ({}) chose {}", strategy, input.bot_mark, pos);
    }
    chosen
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.empty_cells();
    rng.choose(&available_moves).copied()
}

fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let bot_mark = input.bot_mark;
    find_winning_move(input.board, bot_mark)
        .or_else(|| find_winning_move(input.board, bot_mark.opposite()))
        .or_else(|| calculate_random_move(input, rng))
}

fn calculate_rule_based_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let board = input.board;
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opposite();

    if let Some(pos) = find_winning_move(board, bot_mark) {
        return Some(pos);
    }
    if let Some(pos) = find_winning_move(board, opponent_mark) {
        return Some(pos);
    }
    if let Some(pos) = find_fork_move(board, bot_mark) {
        return Some(pos);
    }
    if let Some(pos) = find_fork_move(board, opponent_mark) {
        return Some(pos);
    }
    if let Some(pos) = free_center(board) {
        return Some(pos);
    }
    if let Some(pos) = find_opposite_corner(board, opponent_mark) {
        return Some(pos);
    }
    if let Some(&pos) = rng.choose(&empty_corners(board)) {
        return Some(pos);
    }
    if let Some(&pos) = rng.choose(&empty_sides(board)) {
        return Some(pos);
    }

    // Interior cells of boards larger than 3x3 match none of the rules above.
    calculate_random_move(input, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_no_move_on_full_board() {
        let b = board(&["XOX", "XOO", "OXX"]);
        let mut rng = SessionRng::new(1);
        for strategy in Strategy::ALL {
            assert_eq!(choose_move(&b, strategy, Mark::O, &mut rng), None);
        }
    }

    #[test]
    fn test_no_move_on_decided_board() {
        let b = board(&["XXX", "OO_", "___"]);
        let mut rng = SessionRng::new(1);
        for strategy in Strategy::ALL {
            assert_eq!(choose_move(&b, strategy, Mark::O, &mut rng), None);
        }
    }

    #[test]
    fn test_no_move_for_empty_bot_mark() {
        let mut rng = SessionRng::new(1);
        for strategy in Strategy::ALL {
            assert_eq!(choose_move(&Board::default(), strategy, Mark::Empty, &mut rng), None);
        }
    }

    #[test]
    fn test_every_strategy_picks_an_empty_cell() {
        let b = board(&["X_O", "_X_", "O__"]);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            for strategy in Strategy::ALL {
                let pos = choose_move(&b, strategy, Mark::X, &mut rng).unwrap();
                assert_eq!(b.get_at(pos), Mark::Empty);
            }
        }
    }

    #[test]
    fn test_choosing_never_mutates_the_board() {
        let b = board(&["X__", "_O_", "__X"]);
        let before = b.clone();
        let mut rng = SessionRng::new(2);
        for strategy in Strategy::ALL {
            let _ = choose_move(&b, strategy, Mark::O, &mut rng);
        }
        assert_eq!(b, before);
        assert_eq!(b.current_turn(), Mark::O);
    }

    #[test]
    fn test_random_is_reproducible_under_seed() {
        let b = Board::default();
        let picks = |seed| {
            let mut rng = SessionRng::new(seed);
            (0..5)
                .map(|_| choose_move(&b, Strategy::Random, Mark::O, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(77), picks(77));
    }

    #[test]
    fn test_random_covers_every_empty_cell() {
        let b = board(&["XO_", "_X_", "O__"]);
        let mut rng = SessionRng::new(4);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(choose_move(&b, Strategy::Random, Mark::X, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), b.empty_cells().len());
    }

    #[test]
    fn test_heuristic_takes_win_before_block() {
        let b = board(&["XX_", "OO_", "___"]);
        for seed in 0..10 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(
                choose_move(&b, Strategy::Heuristic, Mark::O, &mut rng),
                Some(Position::new(1, 2))
            );
        }
    }

    #[test]
    fn test_heuristic_blocks_opponent() {
        let b = board(&["XX_", "O__", "___"]);
        for seed in 0..10 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(
                choose_move(&b, Strategy::Heuristic, Mark::O, &mut rng),
                Some(Position::new(0, 2))
            );
        }
    }

    #[test]
    fn test_heuristic_falls_back_to_random() {
        let b = board(&["X__", "___", "___"]);
        let mut seen = std::collections::HashSet::new();
        for seed in 0..60 {
            let mut rng = SessionRng::new(seed);
            seen.insert(choose_move(&b, Strategy::Heuristic, Mark::O, &mut rng).unwrap());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_minimax_completes_winning_row() {
        let b = board(&["XX_", "OO_", "___"]);
        for seed in 0..5 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(
                choose_move(&b, Strategy::Minimax, Mark::O, &mut rng),
                Some(Position::new(1, 2))
            );
        }
    }

    #[test]
    fn test_minimax_respects_search_depth() {
        let b = board(&["XXX_", "OOO_", "____", "____"]);
        let input = BotInput::new(&b, Mark::O).with_search_depth(Some(2));
        let mut rng = SessionRng::new(9);
        assert_eq!(
            calculate_move(Strategy::Minimax, &input, &mut rng),
            Some(Position::new(1, 3))
        );
    }

    #[test]
    fn test_rule_based_takes_win() {
        let b = board(&["XX_", "OO_", "X__"]);
        let mut rng = SessionRng::new(0);
        assert_eq!(
            choose_move(&b, Strategy::RuleBased, Mark::O, &mut rng),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_rule_based_blocks_win() {
        let b = board(&["XX_", "_O_", "___"]);
        let mut rng = SessionRng::new(0);
        assert_eq!(
            choose_move(&b, Strategy::RuleBased, Mark::O, &mut rng),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_rule_based_creates_own_fork() {
        // (0, 2) opens both the top row and the right column for X.
        let b = board(&["X__", "OOX", "___"]);
        let mut rng = SessionRng::new(0);
        assert_eq!(
            choose_move(&b, Strategy::RuleBased, Mark::X, &mut rng),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_rule_based_blocks_opponent_fork() {
        let b = board(&["X__", "_O_", "__X"]);
        let forking_cells = [Position::new(0, 2), Position::new(2, 0)];
        for seed in 0..10 {
            let mut rng = SessionRng::new(seed);
            let pos = choose_move(&b, Strategy::RuleBased, Mark::O, &mut rng).unwrap();
            assert!(forking_cells.contains(&pos), "unexpected {}", pos);
        }
    }

    #[test]
    fn test_rule_based_takes_center_first() {
        let b = board(&["X__", "___", "___"]);
        let mut rng = SessionRng::new(0);
        assert_eq!(
            choose_move(&b, Strategy::RuleBased, Mark::O, &mut rng),
            Some(Position::new(1, 1))
        );
    }

    #[test]
    fn test_rule_based_takes_opposite_corner() {
        let b = board(&["O__", "_X_", "___"]);
        let mut rng = SessionRng::new(0);
        assert_eq!(
            choose_move(&b, Strategy::RuleBased, Mark::X, &mut rng),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn test_rule_based_takes_random_corner_when_center_is_gone() {
        let b = board(&["___", "_X_", "___"]);
        let corners = [
            Position::new(0, 0),
            Position::new(0, 2),
            Position::new(2, 0),
            Position::new(2, 2),
        ];
        let mut seen = std::collections::HashSet::new();
        for seed in 0..60 {
            let mut rng = SessionRng::new(seed);
            let pos = choose_move(&b, Strategy::RuleBased, Mark::O, &mut rng).unwrap();
            assert!(corners.contains(&pos));
            seen.insert(pos);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_rule_based_falls_back_to_sides() {
        let b = board(&["XOX", "_X_", "OXO"]);
        let sides = [Position::new(1, 0), Position::new(1, 2)];
        let mut rng = SessionRng::new(3);
        let pos = choose_move(&b, Strategy::RuleBased, Mark::O, &mut rng).unwrap();
        assert!(sides.contains(&pos));
    }

    #[test]
    fn test_rule_based_on_larger_board_still_moves() {
        let b = board(&["X___", "_O__", "____", "____"]);
        let mut rng = SessionRng::new(12);
        let pos = choose_move(&b, Strategy::RuleBased, Mark::X, &mut rng).unwrap();
        assert_eq!(b.get_at(pos), Mark::Empty);
    }

    #[test]
    fn test_minimax_without_depth_returns_on_large_boards() {
        let b = board(&["X____", "_____", "_____", "_____", "_____"]);
        let mut rng = SessionRng::new(3);
        let pos = choose_move(&b, Strategy::Minimax, Mark::O, &mut rng).unwrap();
        assert_eq!(b.get_at(pos), Mark::Empty);
    }
}
