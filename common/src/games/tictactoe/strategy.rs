use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Random,
    Heuristic,
    Minimax,
    RuleBased,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Random,
        Strategy::Heuristic,
        Strategy::Minimax,
        Strategy::RuleBased,
    ];

    /// Difficulty label shown to players.
    pub fn difficulty(self) -> &'static str {
        match self {
            Strategy::Random => "Easy",
            Strategy::Heuristic => "Medium",
            Strategy::Minimax => "Hard",
            Strategy::RuleBased => "Challenging",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Random => "Random",
            Strategy::Heuristic => "Heuristic",
            Strategy::Minimax => "Minimax",
            Strategy::RuleBased => "RuleBased",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = String;

    /// Accepts strategy names and difficulty labels, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" => Ok(Strategy::Random),
            "heuristic" | "medium" => Ok(Strategy::Heuristic),
            "minimax" | "hard" => Ok(Strategy::Minimax),
            "rulebased" | "rule-based" | "rule_based" | "challenging" => Ok(Strategy::RuleBased),
            _ => Err(format!(
                "Unknown strategy '{}', expected one of: Random, Heuristic, Minimax, RuleBased",
                s
            )),
        }
    }
}
