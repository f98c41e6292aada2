use crate::config::EngineConfig;
use crate::games::{BoardObserver, SessionRng};
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::scores::Scores;
use super::strategy::Strategy;
use super::types::{GameStatus, Mark, Position};

/// One human-vs-bot table: the authoritative board, who plays which mark,
/// the bot's strategy and the running score.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Mark,
    bot_mark: Mark,
    strategy: Strategy,
    search_depth: Option<usize>,
    status: GameStatus,
    last_move: Option<Position>,
    scores: Scores,
}

impl TicTacToeGameState {
    pub fn new(board_size: usize, bot_mark: Mark, strategy: Strategy) -> Self {
        let bot_mark = if bot_mark == Mark::Empty { Mark::O } else { bot_mark };
        Self {
            board: Board::new(board_size),
            human_mark: bot_mark.opposite(),
            bot_mark,
            strategy,
            search_depth: None,
            status: GameStatus::InProgress,
            last_move: None,
            scores: Scores::default(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let mut state = Self::new(config.board_size, config.bot_mark, config.strategy);
        state.search_depth = config.search_depth;
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Adopts the strategy named `name`. An unknown name is rejected and the
    /// current strategy stays in place.
    pub fn set_strategy(&mut self, name: &str) -> Result<Strategy, String> {
        let strategy: Strategy = name.parse()?;
        self.strategy = strategy;
        log!("Bot strategy set to {} ({})", strategy, strategy.difficulty());
        Ok(strategy)
    }

    pub fn set_search_depth(&mut self, search_depth: Option<usize>) -> Result<(), String> {
        if search_depth == Some(0) {
            return Err("Search depth must be at least 1".to_string());
        }
        self.search_depth = search_depth;
        Ok(())
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.board.current_turn() == self.bot_mark
    }

    /// Applies a human click on `(row, col)`.
    pub fn place_mark(
        &mut self,
        row: usize,
        col: usize,
        observer: &mut dyn BoardObserver,
    ) -> Result<GameStatus, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.board.current_turn() != self.human_mark {
            return Err("Not your turn".to_string());
        }

        self.apply(Position::new(row, col), self.human_mark, observer)
    }

    /// Lets the bot pick and play its cell. Returns the cell played, or `None`
    /// when it is not the bot's turn or no move is left.
    pub fn play_bot_turn(
        &mut self,
        rng: &mut SessionRng,
        observer: &mut dyn BoardObserver,
    ) -> Option<Position> {
        if !self.is_bot_turn() {
            return None;
        }

        let input = BotInput::new(&self.board, self.bot_mark).with_search_depth(self.search_depth);
        let pos = calculate_move(self.strategy, &input, rng)?;
        match self.apply(pos, self.bot_mark, observer) {
            Ok(_) => Some(pos),
            Err(e) => {
                log!("Bot move {} rejected: {}", pos, e);
                None
            }
        }
    }

    /// Clears the board for a new round. Scores are kept.
    pub fn reset(&mut self, observer: &mut dyn BoardObserver) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        self.last_move = None;
        observer.on_board_changed(&self.board);
    }

    fn apply(
        &mut self,
        pos: Position,
        mark: Mark,
        observer: &mut dyn BoardObserver,
    ) -> Result<GameStatus, String> {
        if pos.row >= self.board.size() || pos.col >= self.board.size() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.apply_move(pos.row, pos.col, mark) {
            return Err("Cell is already marked".to_string());
        }

        self.last_move = Some(pos);
        observer.on_board_changed(&self.board);

        self.check_game_over();
        if self.status.is_over() {
            self.scores.record(self.status);
            log!("Round finished: {:?}", self.status);
            observer.on_game_over(self.status, self.board.winning_line());
        }

        Ok(self.status)
    }

    fn check_game_over(&mut self) {
        self.status = match self.board.check_winner() {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty if self.board.is_full() => GameStatus::Draw,
            Mark::Empty => GameStatus::InProgress,
        };
    }
}
