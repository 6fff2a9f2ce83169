//! Seat identifiers and the status/outcome vocabularies attached to them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed table positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Player,
    Croupier,
    Ai1,
    Ai2,
}

impl Seat {
    /// Table iteration order: croupier first, human seat last.
    pub const ALL: [Seat; 4] = [Seat::Croupier, Seat::Ai1, Seat::Ai2, Seat::Player];

    /// Series ordering used by every statistics report.
    pub const REPORT_ORDER: [Seat; 4] = [Seat::Croupier, Seat::Ai1, Seat::Ai2, Seat::Player];

    /// Display name shown in each seat's info block.
    pub fn default_name(self) -> &'static str {
        match self {
            Seat::Player => "You",
            Seat::Croupier => "Croupier",
            Seat::Ai1 => "Ai 1",
            Seat::Ai2 => "Ai 2",
        }
    }

    /// Series label used in report charts.
    pub fn report_label(self) -> &'static str {
        match self {
            Seat::Player => "Human",
            Seat::Croupier => "Croupier",
            Seat::Ai1 => "Ai1",
            Seat::Ai2 => "Ai2",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Seat::Player => "player",
            Seat::Croupier => "croupier",
            Seat::Ai1 => "ai1",
            Seat::Ai2 => "ai2",
        };
        write!(f, "{}", name)
    }
}

/// In-round status as reported by the authority. `Standby` is the pre-deal
/// state (fewer than two cards). Status strings this client does not know
/// decode to `Unknown` and render as an empty label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    #[default]
    Standby,
    Playing,
    Busted,
    Standing,
    Blackjack,
    #[serde(other)]
    Unknown,
}

/// End-of-round outcome, displayed only after game end and never at the
/// same time as a [`RoundStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
    Busted,
    #[serde(other)]
    Unknown,
}
