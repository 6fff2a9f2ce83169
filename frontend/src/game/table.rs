//! Per-seat display state and the registry that owns it.

use blackjack_shared::{Card, Outcome, RoundStatus, Seat, SeatSnapshot};

use crate::error::ClientError;

/// Display mirror of one seat. The authority owns the truth; every inbound
/// snapshot replaces the mirrored fields wholesale.
#[derive(Clone, Debug)]
pub struct SeatView {
    pub seat: Seat,
    pub name: String,
    pub hand: Vec<Card>,
    pub hand_value: u32,
    pub busted: bool,
    pub standing: bool,
    pub status: RoundStatus,
    pub outcome: Option<Outcome>,
    pub hide_hand: bool,
    pub hit_safe_probability: Option<f64>,
}

impl SeatView {
    pub fn new(seat: Seat) -> Self {
        SeatView {
            seat,
            name: seat.default_name().to_string(),
            hand: Vec::new(),
            hand_value: 0,
            busted: false,
            standing: false,
            status: RoundStatus::Standby,
            outcome: None,
            hide_hand: false,
            hit_safe_probability: None,
        }
    }

    /// Last-write-wins: no field survives from the previous snapshot, and a
    /// fresh snapshot clears any end-of-round outcome overlay.
    pub fn apply_snapshot(&mut self, snapshot: &SeatSnapshot) {
        self.hand = snapshot.hand.clone();
        self.hand_value = snapshot.hand_value;
        self.busted = snapshot.busted;
        self.standing = snapshot.standing;
        self.status = snapshot.state;
        self.hide_hand = snapshot.hide_hand;
        self.hit_safe_probability = snapshot.hit_safe_probability;
        self.outcome = None;
    }

    /// Overlay the end-of-round outcome; the hand stays visible.
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }
}

/// Owns exactly one [`SeatView`] per seat for the life of the app.
///
/// Constructed once and passed down from the application root; there is no
/// removal path and no way to register a seat twice.
#[derive(Clone, Debug)]
pub struct SeatRegistry {
    seats: Vec<SeatView>,
}

impl SeatRegistry {
    pub fn new() -> Self {
        SeatRegistry {
            seats: Seat::ALL.iter().map(|&seat| SeatView::new(seat)).collect(),
        }
    }

    pub fn get(&self, seat: Seat) -> Result<&SeatView, ClientError> {
        self.seats
            .iter()
            .find(|view| view.seat == seat)
            .ok_or(ClientError::SeatNotFound(seat))
    }

    pub fn get_mut(&mut self, seat: Seat) -> Result<&mut SeatView, ClientError> {
        self.seats
            .iter_mut()
            .find(|view| view.seat == seat)
            .ok_or(ClientError::SeatNotFound(seat))
    }

    /// Seats in table order.
    pub fn iter(&self) -> impl Iterator<Item = &SeatView> {
        self.seats.iter()
    }
}

impl Default for SeatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_shared::CardColor;

    fn snapshot(position: Seat) -> SeatSnapshot {
        SeatSnapshot {
            position,
            hand: vec![Card::new(11, "ace_of_clubs.png", CardColor::Black)],
            hand_value: 11,
            busted: false,
            standing: false,
            state: RoundStatus::Playing,
            hide_hand: false,
            hit_safe_probability: Some(0.8),
        }
    }

    #[test]
    fn registry_holds_one_view_per_seat() {
        let registry = SeatRegistry::new();
        assert_eq!(registry.iter().count(), Seat::ALL.len());
        for seat in Seat::ALL {
            assert_eq!(registry.get(seat).unwrap().seat, seat);
        }
    }

    #[test]
    fn lookup_of_an_unregistered_seat_fails() {
        let registry = SeatRegistry {
            seats: vec![SeatView::new(Seat::Player)],
        };
        assert!(registry.get(Seat::Player).is_ok());
        let err = registry.get(Seat::Croupier).unwrap_err();
        assert_eq!(err, ClientError::SeatNotFound(Seat::Croupier));
    }

    #[test]
    fn apply_snapshot_replaces_state_wholesale() {
        let mut view = SeatView::new(Seat::Player);
        view.apply_snapshot(&snapshot(Seat::Player));
        assert_eq!(view.hand.len(), 1);
        assert_eq!(view.hand_value, 11);
        assert_eq!(view.status, RoundStatus::Playing);
        assert_eq!(view.hit_safe_probability, Some(0.8));

        // A later sparse snapshot does not merge with the previous one.
        view.apply_snapshot(&SeatSnapshot::empty(Seat::Player));
        assert!(view.hand.is_empty());
        assert_eq!(view.hand_value, 0);
        assert_eq!(view.status, RoundStatus::Standby);
        assert_eq!(view.hit_safe_probability, None);
    }

    #[test]
    fn apply_snapshot_clears_a_previous_outcome() {
        let mut view = SeatView::new(Seat::Ai1);
        view.set_outcome(Outcome::Win);
        assert_eq!(view.outcome, Some(Outcome::Win));
        view.apply_snapshot(&snapshot(Seat::Ai1));
        assert_eq!(view.outcome, None);
    }

    #[test]
    fn outcome_overlay_leaves_the_hand_visible() {
        let mut view = SeatView::new(Seat::Croupier);
        view.apply_snapshot(&snapshot(Seat::Croupier));
        view.set_outcome(Outcome::Lose);
        assert_eq!(view.hand.len(), 1);
        assert_eq!(view.outcome, Some(Outcome::Lose));
    }
}
