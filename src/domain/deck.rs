use serde::Deserialize;

use super::card::Card;

/// Cards in one standard pack, which bounds the draw loop.
pub const DECK_SIZE: usize = 52;

/// Deck descriptor returned when a new shuffled deck is created.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewDeck {
    pub deck_id: String,
    #[serde(default)]
    pub shuffled: bool,
    #[serde(default)]
    pub remaining: Option<u32>,
}

/// Result of a draw. `remaining` is the count left after this draw.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub cards: Vec<Card>,
    pub remaining: u32,
}

impl Draw {
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{Rank, Suit};

    #[test]
    fn decodes_new_deck() {
        let deck: NewDeck = serde_json::from_str(
            r#"{"success":true,"deck_id":"3p40paa87x90","shuffled":true,"remaining":52}"#,
        )
        .unwrap();
        assert_eq!(deck.deck_id, "3p40paa87x90");
        assert!(deck.shuffled);
        assert_eq!(deck.remaining, Some(52));
    }

    #[test]
    fn new_deck_only_needs_an_id() {
        let deck: NewDeck = serde_json::from_str(r#"{"deck_id":"abc"}"#).unwrap();
        assert_eq!(deck.deck_id, "abc");
        assert_eq!(deck.remaining, None);
    }

    #[test]
    fn new_deck_without_id_fails() {
        assert!(serde_json::from_str::<NewDeck>(r#"{"success":false}"#).is_err());
    }

    #[test]
    fn decodes_draw() {
        let draw: Draw = serde_json::from_str(
            r#"{"success":true,"deck_id":"abc","cards":[{"code":"0C","value":"10","suit":"CLUBS"}],"remaining":51}"#,
        )
        .unwrap();
        assert_eq!(draw.first(), Some(&Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!(draw.remaining, 51);
        assert!(!draw.is_exhausted());
    }

    #[test]
    fn empty_draw_has_no_first_card() {
        let draw: Draw = serde_json::from_str(r#"{"cards":[],"remaining":0}"#).unwrap();
        assert!(draw.first().is_none());
        assert!(draw.is_exhausted());
    }
}
