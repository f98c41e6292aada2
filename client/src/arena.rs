use common::games::NoopObserver;
use common::{GameStatus, Scores, SessionRng, Strategy, TicTacToeGameState, choose_move, log};

/// Plays `rounds` bot-vs-bot games. The session's own bot plays its mark and
/// `opponent` drives the other side. Returns the final tally.
pub fn run_arena(
    state: &mut TicTacToeGameState,
    opponent: Strategy,
    rounds: u32,
    rng: &mut SessionRng,
) -> Result<Scores, String> {
    let mut observer = NoopObserver;

    for round in 1..=rounds {
        state.reset(&mut observer);

        while !state.status().is_over() {
            if state.is_bot_turn() {
                if state.play_bot_turn(rng, &mut observer).is_none() {
                    return Err(format!("{} bot found no move in round {}", state.strategy(), round));
                }
            } else {
                let pos = choose_move(state.board(), opponent, state.human_mark(), rng)
                    .ok_or_else(|| format!("{} opponent found no move in round {}", opponent, round))?;
                state.place_mark(pos.row, pos.col, &mut observer)?;
            }
        }

        if state.status() != GameStatus::Draw {
            log!("Round {}: {} won", round, state.status().winner());
        }
    }

    Ok(state.scores())
}
