use std::io::{self, Write};

use thiserror::Error;

use crate::{
    domain::deck::DECK_SIZE,
    repository::repository::{ApiError, CreateRepositoryError, DeckApi},
};

use super::service::Service;

pub const WIN_MESSAGE: &str = "Вы угадали!";
pub const LOSS_MESSAGE: &str = "Вы проиграли! Правильный ответ:";

#[derive(Debug, Error)]
pub enum GameError {
    #[error("create deck: {0}")]
    CreateDeck(#[source] ApiError),

    #[error("create deck: empty deck id")]
    EmptyDeckId,

    #[error("draw card: {0}")]
    DrawCard(#[source] ApiError),

    #[error("draw card: no cards returned")]
    EmptyDraw,

    #[error("queen not found after {rounds} draws")]
    QueenNotFound { rounds: usize },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to set up deck client: {0}")]
    Setup(#[from] CreateRepositoryError),
}

impl GameError {
    pub fn is_create_deck(&self) -> bool {
        matches!(self, GameError::CreateDeck(_) | GameError::EmptyDeckId)
    }
}

impl<A: DeckApi, W: io::Write> Service<A, W> {
    /// Plays one game: shuffles a new deck, draws until the first Queen and
    /// reports whether `user_guess` equals the number of draws it took.
    pub async fn play_game(&mut self, user_guess: i64) -> Result<bool, GameError> {
        let deck = self
            .repository
            .new_shuffled_deck()
            .await
            .map_err(GameError::CreateDeck)?;
        if deck.deck_id.is_empty() {
            return Err(GameError::EmptyDeckId);
        }
        tracing::info!(deck_id = %deck.deck_id, "deck created");

        let rounds = self.draw_until_queen(&deck.deck_id).await?;

        let won = i64::try_from(rounds).is_ok_and(|r| r == user_guess);
        if won {
            writeln!(self.output, "{WIN_MESSAGE}")?;
        } else {
            writeln!(self.output, "{LOSS_MESSAGE} {rounds}")?;
        }
        self.output.flush()?;

        tracing::info!(rounds, user_guess, won, "game finished");
        Ok(won)
    }

    async fn draw_until_queen(&mut self, deck_id: &str) -> Result<usize, GameError> {
        let mut rounds = 0;
        while rounds < DECK_SIZE {
            let draw = self
                .repository
                .draw_card(deck_id)
                .await
                .map_err(GameError::DrawCard)?;
            let card = *draw.first().ok_or(GameError::EmptyDraw)?;

            rounds += 1;
            writeln!(self.output, "{card}")?;
            tracing::debug!(rounds, %card, remaining = draw.remaining, "drew card");

            // Queen first: the last card of the deck arrives with remaining == 0.
            if card.is_queen() {
                return Ok(rounds);
            }
            if draw.is_exhausted() {
                break;
            }
        }
        Err(GameError::QueenNotFound { rounds })
    }
}
