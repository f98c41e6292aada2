pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::tictactoe::{
    Board, GameStatus, Mark, Position, Scores, Strategy, TicTacToeGameState, choose_move,
    new_board,
};
