use eframe::Frame;
use egui::{Color32, Context, RichText, Ui};

use blackjack_shared::{ClientMsg, MoveAction};

use crate::game::screens::{AppInterface, ScreenDef, ScreenMetadata, ScreenWidget};
use crate::game::theme::MARGIN_SM;
use crate::game::AppEvent;
use crate::store::{ClientState, ConnectionStatus, ControlState};

use super::table_rendering;

#[derive(Default)]
pub struct BlackjackTableScreen;

impl BlackjackTableScreen {
    pub fn new() -> Self {
        Self
    }

    fn draw_error_popup(&mut self, app_state: &mut ClientState, ctx: &Context) {
        if app_state.ui.last_error.is_none() {
            return;
        }

        let mut open = true;
        let mut close_popup = false;
        egui::Window::new("Table error")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                if let Some(err) = &app_state.ui.last_error {
                    ui.label(err);
                }
                ui.add_space(MARGIN_SM);
                if ui.button("Close").clicked() {
                    close_popup = true;
                }
            });

        if !open || close_popup {
            app_state.ui.last_error = None;
        }
    }

    fn render_header(
        &mut self,
        app_state: &mut ClientState,
        ui: &mut Ui,
        connect_clicked: &mut bool,
        disconnect_clicked: &mut bool,
    ) {
        ui.horizontal(|ui| {
            ui.heading("Blackjack Table");
            ui.add_space(16.0);
            ui.label(connection_badge(app_state.connection.connection_status));
        });

        let default_open =
            app_state.connection.connection_status != ConnectionStatus::Connected;
        egui::CollapsingHeader::new("Connection & session")
            .default_open(default_open)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut app_state.settings.name)
                        .on_hover_text("Name announced to the table");
                    ui.add_space(MARGIN_SM);
                    ui.label("Server:");
                    ui.text_edit_singleline(&mut app_state.settings.server_address)
                        .on_hover_text("Server address (IP:PORT)");
                    ui.add_space(12.0);
                    if ui.button("Connect").clicked() {
                        *connect_clicked = true;
                    }
                    if ui.button("Disconnect").clicked() {
                        *disconnect_clicked = true;
                    }
                });
            });

        if let Some(info) = &app_state.ui.last_info {
            ui.label(RichText::new(info));
        }
        ui.separator();
    }
}

fn connection_badge(status: ConnectionStatus) -> RichText {
    match status {
        ConnectionStatus::Disconnected => {
            RichText::new("Disconnected").color(Color32::from_rgb(220, 80, 80))
        }
        ConnectionStatus::Connecting => {
            RichText::new("Connecting...").color(Color32::from_rgb(230, 180, 80))
        }
        ConnectionStatus::Connected => {
            RichText::new("Connected").color(Color32::from_rgb(100, 200, 120))
        }
    }
    .strong()
}

impl ScreenWidget for BlackjackTableScreen {
    fn ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui, _frame: &mut Frame) {
        let ctx = ui.ctx().clone();

        self.draw_error_popup(app_interface.app_state, &ctx);

        let mut connect_clicked = false;
        let mut disconnect_clicked = false;
        self.render_header(
            app_interface.app_state,
            ui,
            &mut connect_clicked,
            &mut disconnect_clicked,
        );

        let connected =
            app_interface.app_state.connection.connection_status == ConnectionStatus::Connected;
        let mut start_clicked = false;
        let mut hit_clicked = false;
        let mut stand_clicked = false;
        table_rendering::render_controls(
            ui,
            app_interface.app_state.session.control,
            connected,
            &mut start_clicked,
            &mut hit_clicked,
            &mut stand_clicked,
        );
        ui.add_space(MARGIN_SM);

        table_rendering::render_table(ui, &app_interface.app_state.session.registry);

        if connect_clicked {
            app_interface.queue_event(AppEvent::Connect);
        }
        if disconnect_clicked {
            app_interface.queue_event(AppEvent::Disconnect);
        }
        if start_clicked {
            app_interface.conn.send_msg(&ClientMsg::StartTest {
                message: Some(app_interface.app_state.settings.name.clone()),
            });
            // The server decides when the player's turn begins.
            app_interface.app_state.session.control = ControlState::AwaitingResult;
        }
        if hit_clicked {
            app_interface.conn.send_msg(&ClientMsg::PlayerMove {
                action: MoveAction::Hit,
            });
        }
        if stand_clicked {
            app_interface.conn.send_msg(&ClientMsg::PlayerMove {
                action: MoveAction::Stand,
            });
        }
    }
}

impl ScreenDef for BlackjackTableScreen {
    fn metadata() -> ScreenMetadata
    where
        Self: Sized,
    {
        ScreenMetadata {
            path: "/table",
            display_name: "Blackjack Table",
            icon: "🃏",
            description: "Play a round against the croupier and two bots",
            show_in_menu: true,
        }
    }

    fn create() -> Box<dyn ScreenWidget>
    where
        Self: Sized,
    {
        Box::new(Self::new())
    }
}
