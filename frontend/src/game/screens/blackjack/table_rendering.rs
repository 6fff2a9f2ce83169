use egui::{RichText, Ui};

use blackjack_shared::Seat;

use crate::game::table::{SeatRegistry, SeatView};
use crate::game::theme::{BUTTON_MIN_HEIGHT, BUTTON_MIN_WIDTH, MARGIN_SM};
use crate::store::ControlState;

use super::ui_components;

pub fn render_seat(ui: &mut Ui, view: &SeatView) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&view.name).strong());
            if let Some((caption, color)) = ui_components::seat_caption(view) {
                ui.add_space(MARGIN_SM);
                ui.colored_label(color, caption);
            }
        });
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if view.hand.is_empty() {
                ui.label("—");
            }
            for (index, card) in view.hand.iter().enumerate() {
                let masked = ui_components::hand_card_masked(index, view.hide_hand);
                ui.add(ui_components::card_image(card, masked));
            }
        });
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Score:");
            if view.hide_hand {
                ui.monospace("?");
            } else {
                ui.colored_label(
                    ui_components::score_color(view.busted),
                    RichText::new(format!("{}", view.hand_value)).monospace(),
                );
            }
            if let Some(p) = view.hit_safe_probability {
                ui.add_space(MARGIN_SM);
                ui.label(ui_components::probability_text(p));
            }
        });
    });
}

/// Croupier across the top, the three players side by side below.
pub fn render_table(ui: &mut Ui, registry: &SeatRegistry) {
    if let Ok(croupier) = registry.get(Seat::Croupier) {
        render_seat(ui, croupier);
    }
    ui.add_space(MARGIN_SM);

    let narrow = ui.available_width() < 900.0;
    let bottom_row = [Seat::Ai1, Seat::Player, Seat::Ai2];
    if narrow {
        for seat in bottom_row {
            if let Ok(view) = registry.get(seat) {
                render_seat(ui, view);
                ui.add_space(MARGIN_SM);
            }
        }
    } else {
        ui.columns(bottom_row.len(), |cols| {
            for (col, seat) in cols.iter_mut().zip(bottom_row) {
                if let Ok(view) = registry.get(seat) {
                    render_seat(col, view);
                }
            }
        });
    }
}

/// Start/Hit/Stand row. Buttons stay visible but disabled outside the
/// control state that owns them.
pub fn render_controls(
    ui: &mut Ui,
    control: ControlState,
    connected: bool,
    start_clicked: &mut bool,
    hit_clicked: &mut bool,
    stand_clicked: &mut bool,
) {
    let start_enabled = connected && control == ControlState::AwaitingStart;
    let move_enabled = connected && control == ControlState::PlayerTurn;
    let min_size = egui::vec2(BUTTON_MIN_WIDTH, BUTTON_MIN_HEIGHT);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(start_enabled, egui::Button::new("▶ Start").min_size(min_size))
            .clicked()
        {
            *start_clicked = true;
        }
        if ui
            .add_enabled(move_enabled, egui::Button::new("➕ Hit").min_size(min_size))
            .clicked()
        {
            *hit_clicked = true;
        }
        if ui
            .add_enabled(move_enabled, egui::Button::new("✋ Stand").min_size(min_size))
            .clicked()
        {
            *stand_clicked = true;
        }
    });
}
