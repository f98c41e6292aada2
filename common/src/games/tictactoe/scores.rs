use super::types::GameStatus;

/// Running tally of finished rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scores {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
