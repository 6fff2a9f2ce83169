//! Card value types and display constants for the blackjack table.

use egui::Vec2;
use serde::{Deserialize, Serialize};

/// Natural size for card display in the UI
pub const CARD_NATURAL_SIZE: Vec2 = Vec2::new(140.0, 190.0);

/// Face image shown in place of any masked card.
pub const CARD_BACK_FILE: &str = "back_of_card.png";

/// Ink color of a card face (diamonds/hearts vs clubs/spades)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    #[default]
    Black,
}

/// A dealt card as the authority describes it: blackjack rank value,
/// face image file and ink color. Immutable value object; ordering within
/// a hand is deal order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub value: u32,
    pub file_name: String,
    pub color: CardColor,
}

impl Card {
    pub fn new(value: u32, file_name: impl Into<String>, color: CardColor) -> Self {
        Card {
            value,
            file_name: file_name.into(),
            color,
        }
    }

    /// Check if this card is printed in red (hearts or diamonds)
    pub fn is_red(&self) -> bool {
        self.color == CardColor::Red
    }

    /// Check if this card is printed in black (clubs or spades)
    pub fn is_black(&self) -> bool {
        self.color == CardColor::Black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_uses_camel_case_wire_names() {
        let card = Card::new(11, "ace_of_clubs.png", CardColor::Black);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": 11,
                "fileName": "ace_of_clubs.png",
                "color": "black"
            })
        );
    }

    #[test]
    fn card_without_color_decodes_with_default() {
        let card: Card =
            serde_json::from_value(serde_json::json!({"value": 10, "fileName": "king_of_hearts.png"}))
                .unwrap();
        assert_eq!(card.value, 10);
        assert_eq!(card.color, CardColor::Black);
    }
}
