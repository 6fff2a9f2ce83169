use egui::{Color32, Image};

use blackjack_shared::{Card, Outcome, RoundStatus, CARD_BACK_FILE, CARD_NATURAL_SIZE};

use crate::game::table::SeatView;
use crate::game::theme::CARD_DISPLAY_HEIGHT;

/// Caption shown while the round is running. Quiet states render nothing.
pub fn status_label(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::Standby => "",
        RoundStatus::Playing => "",
        RoundStatus::Busted => "Busted!",
        RoundStatus::Standing => "Standing",
        RoundStatus::Blackjack => "Blackjack!",
        RoundStatus::Unknown => "",
    }
}

pub fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Winner!",
        Outcome::Lose => "Loser!",
        Outcome::Draw => "Draw!",
        Outcome::Busted => "Busted!",
        Outcome::Unknown => "",
    }
}

/// The caption for a seat. An end-of-round outcome wins over the live
/// round status.
pub fn seat_caption(view: &SeatView) -> Option<(&'static str, Color32)> {
    if let Some(outcome) = view.outcome {
        let text = outcome_label(outcome);
        if text.is_empty() {
            return None;
        }
        let color = match outcome {
            Outcome::Win => Color32::LIGHT_GREEN,
            Outcome::Draw => Color32::LIGHT_BLUE,
            _ => Color32::LIGHT_RED,
        };
        return Some((text, color));
    }
    let text = status_label(view.status);
    if text.is_empty() {
        None
    } else {
        let color = match view.status {
            RoundStatus::Blackjack => Color32::LIGHT_GREEN,
            RoundStatus::Busted => Color32::LIGHT_RED,
            _ => Color32::GRAY,
        };
        Some((text, color))
    }
}

/// A masked hand shows its first card face up and the rest face down.
pub fn hand_card_masked(index: usize, hide_hand: bool) -> bool {
    hide_hand && index >= 1
}

pub fn card_file(card: &Card, masked: bool) -> &str {
    if masked {
        CARD_BACK_FILE
    } else {
        &card.file_name
    }
}

pub fn card_uri(origin: &str, file_name: &str) -> String {
    format!("{origin}/media/cards/{file_name}")
}

fn get_origin() -> String {
    let window = web_sys::window().expect("should have a window in this context");
    let location = window.location();
    location
        .origin()
        .expect("should have an origin in this context")
}

pub fn card_image(card: &Card, masked: bool) -> Image<'static> {
    let uri = card_uri(&get_origin(), card_file(card, masked));
    let scale = CARD_DISPLAY_HEIGHT / CARD_NATURAL_SIZE.y;
    Image::new(uri)
        .show_loading_spinner(true)
        .maintain_aspect_ratio(true)
        .fit_to_exact_size(CARD_NATURAL_SIZE * scale)
}

pub fn score_color(busted: bool) -> Color32 {
    if busted {
        Color32::from_rgb(220, 50, 50)
    } else {
        Color32::WHITE
    }
}

pub fn probability_text(hit_safe_probability: f64) -> String {
    format!("Safe hit: {:.0}%", hit_safe_probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_shared::{CardColor, Seat};

    #[test]
    fn quiet_statuses_have_no_caption() {
        assert_eq!(status_label(RoundStatus::Standby), "");
        assert_eq!(status_label(RoundStatus::Playing), "");
        assert_eq!(status_label(RoundStatus::Unknown), "");
    }

    #[test]
    fn loud_statuses_are_labelled() {
        assert_eq!(status_label(RoundStatus::Busted), "Busted!");
        assert_eq!(status_label(RoundStatus::Standing), "Standing");
        assert_eq!(status_label(RoundStatus::Blackjack), "Blackjack!");
    }

    #[test]
    fn outcome_caption_beats_status_caption() {
        let mut view = SeatView::new(Seat::Player);
        view.status = RoundStatus::Standing;
        assert_eq!(seat_caption(&view).unwrap().0, "Standing");
        view.set_outcome(Outcome::Win);
        assert_eq!(seat_caption(&view).unwrap().0, "Winner!");
    }

    #[test]
    fn unknown_outcome_caption_falls_back_to_nothing() {
        let mut view = SeatView::new(Seat::Player);
        view.status = RoundStatus::Standing;
        view.set_outcome(Outcome::Unknown);
        assert!(seat_caption(&view).is_none());
    }

    #[test]
    fn only_the_first_card_of_a_hidden_hand_shows() {
        assert!(!hand_card_masked(0, true));
        assert!(hand_card_masked(1, true));
        assert!(hand_card_masked(5, true));
        assert!(!hand_card_masked(0, false));
        assert!(!hand_card_masked(1, false));
    }

    #[test]
    fn masked_cards_render_the_back_file() {
        let card = Card::new(10, "queen_of_hearts.png", CardColor::Red);
        assert_eq!(card_file(&card, false), "queen_of_hearts.png");
        assert_eq!(card_file(&card, true), CARD_BACK_FILE);
    }

    #[test]
    fn card_uri_points_into_the_media_directory() {
        assert_eq!(
            card_uri("http://localhost:3000", "ace_of_clubs.png"),
            "http://localhost:3000/media/cards/ace_of_clubs.png"
        );
    }
}
