use std::collections::VecDeque;

use blackjack_shared::{DecisionsReport, ReportData, ServerMsg, WinsReport};

use crate::game::table::SeatRegistry;
use crate::requests::ReportHub;

#[derive(Clone, Debug)]
pub struct ClientSettings {
    pub name: String,
    pub server_address: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        ClientSettings {
            name: "Player".to_string(),
            server_address: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Which table affordances are live. Seat snapshots never touch this; the
/// turn and game-over events move it, plus the local start click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlState {
    #[default]
    AwaitingStart,
    PlayerTurn,
    AwaitingResult,
}

/// Lifecycle of one report fetch, from button click to chart.
#[derive(Clone, Debug, Default)]
pub enum ReportFetch {
    #[default]
    NotStarted,
    Loading,
    Loaded(ReportData),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct TableState {
    pub registry: SeatRegistry,
    pub control: ControlState,
}

#[derive(Clone, Debug, Default)]
pub struct ConnectionState {
    pub connection_status: ConnectionStatus,
    pub pending_messages: VecDeque<ServerMsg>,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub last_error: Option<String>,
    pub last_info: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ClientState {
    pub session: TableState,
    pub connection: ConnectionState,
    pub ui: UiState,
    pub settings: ClientSettings,
    pub reports: ReportHub,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message from a WebSocket callback; applied on the UI thread.
    pub fn queue_server_msg(&mut self, msg: ServerMsg) {
        self.connection.pending_messages.push_back(msg);
    }

    /// Drain queued messages in arrival order.
    pub fn dispatch_pending_messages(&mut self) {
        while let Some(msg) = self.connection.pending_messages.pop_front() {
            self.apply_server_msg(msg);
        }
    }

    pub fn apply_server_msg(&mut self, msg: ServerMsg) {
        match msg {
            ServerMsg::SeatUpdate(snapshot) => {
                match self.session.registry.get_mut(snapshot.position) {
                    Ok(view) => view.apply_snapshot(&snapshot),
                    Err(e) => {
                        tracing::warn!(position = %snapshot.position, "dropping seat update: {e}");
                        self.ui.last_error = Some(e.to_string());
                    }
                }
            }
            ServerMsg::StartPlayerTurn => {
                self.session.control = ControlState::PlayerTurn;
            }
            ServerMsg::EndPlayerTurn => {
                self.session.control = ControlState::AwaitingResult;
            }
            ServerMsg::GameOver(outcomes) => {
                for (seat, outcome) in outcomes {
                    match self.session.registry.get_mut(seat) {
                        Ok(view) => view.set_outcome(outcome),
                        Err(e) => {
                            tracing::warn!(position = %seat, "dropping outcome: {e}");
                            self.ui.last_error = Some(e.to_string());
                        }
                    }
                }
                self.session.control = ControlState::AwaitingStart;
            }
            ServerMsg::WinsReport {
                request_id,
                win_percentages,
            } => {
                self.reports
                    .fulfill(request_id, ReportData::Wins(WinsReport { win_percentages }));
            }
            ServerMsg::DecisionsReport {
                request_id,
                success_percentages,
            } => {
                self.reports.fulfill(
                    request_id,
                    ReportData::Decisions(DecisionsReport {
                        success_percentages,
                    }),
                );
            }
            ServerMsg::StandReport { request_id, series } => {
                self.reports
                    .fulfill(request_id, ReportData::Stands(series));
            }
            ServerMsg::Error(e) => {
                self.ui.last_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_shared::{Card, CardColor, Outcome, RoundStatus, Seat, SeatSnapshot};
    use std::collections::HashMap;

    fn seat_update(position: Seat) -> ServerMsg {
        ServerMsg::SeatUpdate(SeatSnapshot {
            hand: vec![Card::new(10, "queen_of_hearts.png", CardColor::Red)],
            hand_value: 10,
            state: RoundStatus::Playing,
            ..SeatSnapshot::empty(position)
        })
    }

    #[test]
    fn turn_events_drive_the_control_state() {
        let mut state = ClientState::new();
        assert_eq!(state.session.control, ControlState::AwaitingStart);
        state.apply_server_msg(ServerMsg::StartPlayerTurn);
        assert_eq!(state.session.control, ControlState::PlayerTurn);
        state.apply_server_msg(ServerMsg::EndPlayerTurn);
        assert_eq!(state.session.control, ControlState::AwaitingResult);
    }

    #[test]
    fn seat_updates_never_change_the_control_state() {
        let mut state = ClientState::new();
        state.apply_server_msg(ServerMsg::StartPlayerTurn);
        state.apply_server_msg(seat_update(Seat::Ai1));
        assert_eq!(state.session.control, ControlState::PlayerTurn);
        state.apply_server_msg(ServerMsg::EndPlayerTurn);
        state.apply_server_msg(seat_update(Seat::Croupier));
        assert_eq!(state.session.control, ControlState::AwaitingResult);
    }

    #[test]
    fn seat_update_mutates_the_target_seat_only() {
        let mut state = ClientState::new();
        state.apply_server_msg(seat_update(Seat::Ai1));
        assert_eq!(
            state.session.registry.get(Seat::Ai1).unwrap().hand_value,
            10
        );
        assert_eq!(
            state.session.registry.get(Seat::Ai2).unwrap().hand_value,
            0
        );
    }

    #[test]
    fn game_over_sets_outcomes_and_reenables_start() {
        let mut state = ClientState::new();
        state.apply_server_msg(ServerMsg::StartPlayerTurn);
        for seat in Seat::ALL {
            state.apply_server_msg(seat_update(seat));
        }

        let outcomes: HashMap<Seat, Outcome> = [
            (Seat::Player, Outcome::Win),
            (Seat::Croupier, Outcome::Lose),
            (Seat::Ai1, Outcome::Draw),
            (Seat::Ai2, Outcome::Busted),
        ]
        .into_iter()
        .collect();
        state.apply_server_msg(ServerMsg::GameOver(outcomes));

        assert_eq!(state.session.control, ControlState::AwaitingStart);
        let registry = &state.session.registry;
        assert_eq!(
            registry.get(Seat::Player).unwrap().outcome,
            Some(Outcome::Win)
        );
        assert_eq!(
            registry.get(Seat::Ai2).unwrap().outcome,
            Some(Outcome::Busted)
        );
        // The last-known hand stays visible under the outcome overlay.
        assert_eq!(registry.get(Seat::Player).unwrap().hand.len(), 1);
    }

    #[test]
    fn queued_messages_apply_in_arrival_order() {
        let mut state = ClientState::new();
        state.queue_server_msg(seat_update(Seat::Player));
        state.queue_server_msg(ServerMsg::SeatUpdate(SeatSnapshot::empty(Seat::Player)));
        state.dispatch_pending_messages();
        // Wholesale overwrite means the later (empty) snapshot wins.
        assert!(state.session.registry.get(Seat::Player).unwrap().hand.is_empty());
        assert!(state.connection.pending_messages.is_empty());
    }

    #[test]
    fn report_responses_fulfill_the_matching_request() {
        let mut state = ClientState::new();
        let id = state.reports.begin();
        state.apply_server_msg(ServerMsg::WinsReport {
            request_id: id,
            win_percentages: [10.0, 20.0, 30.0, 40.0],
        });
        match state.reports.try_take(id) {
            Some(ReportData::Wins(report)) => {
                assert_eq!(report.win_percentages, [10.0, 20.0, 30.0, 40.0]);
            }
            other => panic!("unexpected slot contents: {:?}", other),
        }
    }

    #[test]
    fn server_error_surfaces_in_the_ui() {
        let mut state = ClientState::new();
        state.apply_server_msg(ServerMsg::Error("deck exhausted".into()));
        assert_eq!(state.ui.last_error.as_deref(), Some("deck exhausted"));
    }
}
