//! Shared protocol and domain types for the blackjack table.
//!
//! Everything here is plain data: the client and the (external) game
//! server agree on these shapes and nothing in this crate does I/O.

pub mod cards;
pub mod messages;
pub mod reports;
pub mod seats;

pub use cards::{Card, CardColor, CARD_BACK_FILE, CARD_NATURAL_SIZE};
pub use messages::{ClientMsg, MoveAction, SeatSnapshot, ServerMsg};
pub use reports::{DecisionsReport, ReportData, ReportKind, RequestId, StandReport, WinsReport};
pub use seats::{Outcome, RoundStatus, Seat};
