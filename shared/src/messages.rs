//! Client-server messaging protocol for the blackjack table.
//!
//! Every frame is one JSON object tagged with the wire event name; payload
//! validation happens here, at the schema boundary, not in per-event
//! string handling.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cards::Card;
use crate::reports::{ReportKind, RequestId, StandReport};
use crate::seats::{Outcome, RoundStatus, Seat};

/// Full replacement description of one seat's displayable state.
///
/// Fields the wire payload omits fall back to their defaults so a sparse
/// snapshot degrades the display instead of aborting the render pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatSnapshot {
    pub position: Seat,
    #[serde(default)]
    pub hand: Vec<Card>,
    #[serde(default)]
    pub hand_value: u32,
    #[serde(default)]
    pub busted: bool,
    #[serde(default)]
    pub standing: bool,
    #[serde(default)]
    pub state: RoundStatus,
    #[serde(default)]
    pub hide_hand: bool,
    #[serde(default)]
    pub hit_safe_probability: Option<f64>,
}

impl SeatSnapshot {
    /// An empty snapshot for a seat, as sent before any card is dealt.
    pub fn empty(position: Seat) -> Self {
        SeatSnapshot {
            position,
            hand: Vec::new(),
            hand_value: 0,
            busted: false,
            standing: false,
            state: RoundStatus::Standby,
            hide_hand: false,
            hit_safe_probability: None,
        }
    }
}

/// Moves the human player can submit on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveAction {
    Hit,
    Stand,
}

/// Messages that the client can send to the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMsg {
    /// Request the start of a simulated round.
    #[serde(rename = "start-test")]
    StartTest { message: Option<String> },
    /// Submit the human player's move; seat state only changes via the
    /// next snapshot from the authority.
    #[serde(rename = "player-move")]
    PlayerMove {
        #[serde(rename = "move")]
        action: MoveAction,
    },
    #[serde(rename = "generate-wins-report")]
    GenerateWinsReport { request_id: RequestId },
    #[serde(rename = "generate-decisions-report")]
    GenerateDecisionsReport { request_id: RequestId },
    #[serde(rename = "generate-stand-report")]
    GenerateStandReport { request_id: RequestId },
}

impl ClientMsg {
    /// The request message for a given report kind.
    pub fn generate_report(kind: ReportKind, request_id: RequestId) -> Self {
        match kind {
            ReportKind::Wins => ClientMsg::GenerateWinsReport { request_id },
            ReportKind::Decisions => ClientMsg::GenerateDecisionsReport { request_id },
            ReportKind::Stands => ClientMsg::GenerateStandReport { request_id },
        }
    }
}

/// Messages that the server can send to clients
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMsg {
    /// Seat snapshot; orthogonal to the turn events and valid in any
    /// control state.
    #[serde(rename = "update-and-render")]
    SeatUpdate(SeatSnapshot),
    #[serde(rename = "start-player-turn")]
    StartPlayerTurn,
    #[serde(rename = "end-player-turn")]
    EndPlayerTurn,
    /// One outcome per seat at the end of a round.
    #[serde(rename = "game-over")]
    GameOver(HashMap<Seat, Outcome>),
    #[serde(rename = "receive-wins-report")]
    WinsReport {
        request_id: RequestId,
        win_percentages: [f64; 4],
    },
    #[serde(rename = "receive-decisions-report")]
    DecisionsReport {
        request_id: RequestId,
        success_percentages: [f64; 4],
    },
    #[serde(rename = "receive-stand-report")]
    StandReport {
        request_id: RequestId,
        #[serde(flatten)]
        series: StandReport,
    },
    #[serde(rename = "error")]
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardColor;
    use serde_json::json;

    #[test]
    fn seat_update_decodes_the_full_wire_payload() {
        let frame = json!({
            "type": "update-and-render",
            "data": {
                "position": "croupier",
                "hideHand": true,
                "hand": [
                    {"value": 10, "fileName": "king_of_spades.png", "color": "black"},
                    {"value": 7, "fileName": "7_of_hearts.png", "color": "red"}
                ],
                "standing": false,
                "busted": false,
                "state": "playing",
                "handValue": 17,
                "hitSafeProbability": 0.42
            }
        });
        let msg: ServerMsg = serde_json::from_value(frame).unwrap();
        let snap = match msg {
            ServerMsg::SeatUpdate(snap) => snap,
            other => panic!("unexpected message: {:?}", other),
        };
        assert_eq!(snap.position, Seat::Croupier);
        assert!(snap.hide_hand);
        assert_eq!(snap.hand.len(), 2);
        assert_eq!(snap.hand[1].color, CardColor::Red);
        assert_eq!(snap.hand_value, 17);
        assert_eq!(snap.state, RoundStatus::Playing);
        assert_eq!(snap.hit_safe_probability, Some(0.42));
    }

    #[test]
    fn sparse_seat_update_decodes_with_defaults() {
        let frame = json!({
            "type": "update-and-render",
            "data": {"position": "player"}
        });
        let msg: ServerMsg = serde_json::from_value(frame).unwrap();
        let snap = match msg {
            ServerMsg::SeatUpdate(snap) => snap,
            other => panic!("unexpected message: {:?}", other),
        };
        assert_eq!(snap.position, Seat::Player);
        assert!(snap.hand.is_empty());
        assert_eq!(snap.hand_value, 0);
        assert_eq!(snap.state, RoundStatus::Standby);
        assert!(!snap.hide_hand);
        assert_eq!(snap.hit_safe_probability, None);
    }

    #[test]
    fn unknown_state_string_survives_decoding() {
        let frame = json!({
            "type": "update-and-render",
            "data": {"position": "ai1", "state": "split"}
        });
        let msg: ServerMsg = serde_json::from_value(frame).unwrap();
        match msg {
            ServerMsg::SeatUpdate(snap) => assert_eq!(snap.state, RoundStatus::Unknown),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn turn_events_are_bare_tags() {
        let start: ServerMsg = serde_json::from_value(json!({"type": "start-player-turn"})).unwrap();
        assert!(matches!(start, ServerMsg::StartPlayerTurn));
        let end: ServerMsg = serde_json::from_value(json!({"type": "end-player-turn"})).unwrap();
        assert!(matches!(end, ServerMsg::EndPlayerTurn));
    }

    #[test]
    fn game_over_decodes_one_outcome_per_seat() {
        let frame = json!({
            "type": "game-over",
            "data": {"player": "win", "croupier": "lose", "ai1": "draw", "ai2": "busted"}
        });
        let msg: ServerMsg = serde_json::from_value(frame).unwrap();
        let outcomes = match msg {
            ServerMsg::GameOver(outcomes) => outcomes,
            other => panic!("unexpected message: {:?}", other),
        };
        assert_eq!(outcomes[&Seat::Player], Outcome::Win);
        assert_eq!(outcomes[&Seat::Croupier], Outcome::Lose);
        assert_eq!(outcomes[&Seat::Ai1], Outcome::Draw);
        assert_eq!(outcomes[&Seat::Ai2], Outcome::Busted);
    }

    #[test]
    fn player_move_serializes_the_move_key() {
        let msg = ClientMsg::PlayerMove {
            action: MoveAction::Hit,
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"type": "player-move", "data": {"move": "hit"}})
        );
    }

    #[test]
    fn start_test_carries_an_optional_message() {
        let msg = ClientMsg::StartTest {
            message: Some("Starting test".into()),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"type": "start-test", "data": {"message": "Starting test"}})
        );
    }

    #[test]
    fn report_requests_carry_their_correlation_id() {
        for kind in ReportKind::ALL {
            let msg = ClientMsg::generate_report(kind, RequestId(3));
            let json = serde_json::to_value(&msg).unwrap();
            assert_eq!(json["data"]["request_id"], json!(3));
        }
        let msg = ClientMsg::generate_report(ReportKind::Wins, RequestId(3));
        assert_eq!(
            serde_json::to_value(&msg).unwrap()["type"],
            json!("generate-wins-report")
        );
    }

    #[test]
    fn wins_report_response_round_trips() {
        let frame = json!({
            "type": "receive-wins-report",
            "data": {"request_id": 1, "win_percentages": [10.0, 20.0, 30.0, 40.0]}
        });
        let msg: ServerMsg = serde_json::from_value(frame).unwrap();
        match msg {
            ServerMsg::WinsReport {
                request_id,
                win_percentages,
            } => {
                assert_eq!(request_id, RequestId(1));
                assert_eq!(win_percentages, [10.0, 20.0, 30.0, 40.0]);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn stand_report_series_are_flattened_on_the_wire() {
        let frame = json!({
            "type": "receive-stand-report",
            "data": {
                "request_id": 2,
                "croupier": [17.0, 18.0],
                "ai1": [20.0, 19.0],
                "ai2": [12.0, 21.0],
                "human": [19.0, 20.0]
            }
        });
        let msg: ServerMsg = serde_json::from_value(frame).unwrap();
        match msg {
            ServerMsg::StandReport { request_id, series } => {
                assert_eq!(request_id, RequestId(2));
                assert_eq!(series.human, vec![19.0, 20.0]);
                assert_eq!(series.croupier.len(), series.ai2.len());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
