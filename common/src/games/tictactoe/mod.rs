mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod rules;
mod scores;
mod strategy;
mod types;
mod win_detector;

pub use board::{Board, DEFAULT_BOARD_SIZE, new_board};
pub use bot_controller::{BotInput, calculate_move, choose_move};
pub use game_state::TicTacToeGameState;
pub use minimax::{
    DEFAULT_SEARCH_DEPTH, LOSS_BASE, MAX_EXHAUSTIVE_BOARD_SIZE, ScoredMove, WIN_BASE,
    effective_depth, evaluate_board, find_best_move, score_moves, select_root_move,
};
pub use rules::{
    creates_fork, empty_corners, empty_sides, find_fork_move, find_opposite_corner,
    find_winning_move, fork_moves, free_center, winning_moves,
};
pub use scores::Scores;
pub use strategy::Strategy;
pub use types::{GameStatus, Mark, Position, WinningLine};
pub use win_detector::{board_lines, check_win, check_win_with_line};
