use super::tictactoe::{Board, GameStatus, WinningLine};

/// Render hook invoked by the game session after every board mutation.
pub trait BoardObserver {
    fn on_board_changed(&mut self, board: &Board);

    fn on_game_over(&mut self, status: GameStatus, winning_line: Option<WinningLine>);
}

pub struct NoopObserver;

impl BoardObserver for NoopObserver {
    fn on_board_changed(&mut self, _board: &Board) {}

    fn on_game_over(&mut self, _status: GameStatus, _winning_line: Option<WinningLine>) {}
}
