use std::io::{self, BufRead, Write};

use common::games::BoardObserver;
use common::games::tictactoe::WinningLine;
use common::{Board, GameStatus, Scores, SessionRng, TicTacToeGameState, log};

/// Prints the board after every change and announces results.
pub struct ConsoleRenderer;

impl BoardObserver for ConsoleRenderer {
    fn on_board_changed(&mut self, board: &Board) {
        println!();
        print!("{}", board);
    }

    fn on_game_over(&mut self, status: GameStatus, winning_line: Option<WinningLine>) {
        match (status, winning_line) {
            (GameStatus::Draw, _) => println!("It's a draw."),
            (_, Some(line)) => println!(
                "{} wins! Line from {} to {}",
                line.mark, line.start, line.end
            ),
            (status, None) => println!("{} wins!", status.winner()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Place { row: usize, col: usize },
    Strategy(String),
    NewRound,
    Scores,
    Help,
    Quit,
}

/// Parses one line of input. Cells are given 1-based as `row col` or `row,col`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    match words.next().map(str::to_ascii_lowercase).as_deref() {
        None => Err("Empty input".to_string()),
        Some("q") | Some("quit") | Some("exit") => Ok(Command::Quit),
        Some("n") | Some("new") => Ok(Command::NewRound),
        Some("scores") => Ok(Command::Scores),
        Some("h") | Some("help") | Some("?") => Ok(Command::Help),
        Some("strategy") | Some("difficulty") => words
            .next()
            .map(|name| Command::Strategy(name.to_string()))
            .ok_or_else(|| "Usage: strategy <name>".to_string()),
        Some(_) => parse_cell(line),
    }
}

fn parse_cell(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(format!("Expected 'row col', got '{}'", line));
    }

    let parse = |s: &str| -> Result<usize, String> {
        match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!("Invalid coordinate '{}'", s)),
        }
    };
    Ok(Command::Place {
        row: parse(parts[0])?,
        col: parse(parts[1])?,
    })
}

fn print_help() {
    println!("Commands:");
    println!("  <row> <col>        place your mark (1-based)");
    println!("  strategy <name>    Random, Heuristic, Minimax, RuleBased or Easy..Challenging");
    println!("  new                start a new round");
    println!("  scores             show the score");
    println!("  quit               leave");
}

pub fn print_scores(scores: &Scores) {
    println!(
        "Score  X: {}  O: {}  Draws: {}",
        scores.x_wins, scores.o_wins, scores.draws
    );
}

fn let_bot_move(state: &mut TicTacToeGameState, rng: &mut SessionRng, renderer: &mut ConsoleRenderer) {
    if let Some(pos) = state.play_bot_turn(rng, renderer) {
        println!("Bot ({}) played row {}, col {}", state.bot_mark(), pos.row + 1, pos.col + 1);
    }
}

fn prompt(state: &TicTacToeGameState) {
    if state.status().is_over() {
        print!("Round over. 'new' to play again, 'quit' to leave > ");
    } else {
        print!("You are {}. Your move > ", state.human_mark());
    }
    let _ = io::stdout().flush();
}

/// Human-vs-bot loop over stdin until `quit` or end of input.
pub fn run_interactive(mut state: TicTacToeGameState, mut rng: SessionRng) -> Result<(), String> {
    let mut renderer = ConsoleRenderer;

    println!(
        "Tic-tac-toe {0}x{0} against {1} ({2}). Type 'help' for commands.",
        state.board().size(),
        state.strategy(),
        state.strategy().difficulty()
    );
    renderer.on_board_changed(state.board());
    let_bot_move(&mut state, &mut rng, &mut renderer);

    let stdin = io::stdin();
    prompt(&state);
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;

        let was_over = state.status().is_over();
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::Scores) => print_scores(&state.scores()),
            Ok(Command::NewRound) => {
                state.reset(&mut renderer);
                let_bot_move(&mut state, &mut rng, &mut renderer);
            }
            Ok(Command::Strategy(name)) => match state.set_strategy(&name) {
                Ok(strategy) => println!("Now playing {} ({})", strategy, strategy.difficulty()),
                Err(e) => println!("{}", e),
            },
            Ok(Command::Place { row, col }) => match state.place_mark(row, col, &mut renderer) {
                Ok(GameStatus::InProgress) => let_bot_move(&mut state, &mut rng, &mut renderer),
                Ok(_) => {}
                Err(e) => println!("{}", e),
            },
            Err(e) => println!("{}", e),
        }

        if !was_over && state.status().is_over() {
            print_scores(&state.scores());
        }
        prompt(&state);
    }

    println!();
    print_scores(&state.scores());
    log!("Session finished after {} rounds", state.scores().games_played());
    Ok(())
}
