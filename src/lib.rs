pub mod args;

pub mod domain {
    pub mod card;
    pub mod deck;
}

pub mod repository {
    pub mod deck_repository;
    pub mod repository;
}

pub mod service {
    pub mod game_service;
    pub mod service;
}

pub use domain::card::{Card, Rank, Suit};
pub use repository::repository::{DeckApi, Repository, DEFAULT_BASE_URL};
pub use service::{game_service::GameError, service::Service};

/// Plays one game against the public deck service, printing to stdout.
pub async fn play_game(user_guess: i64) -> Result<bool, GameError> {
    play_game_at(DEFAULT_BASE_URL, user_guess).await
}

/// Same as [`play_game`], against the deck service at `base_url`.
pub async fn play_game_at(base_url: &str, user_guess: i64) -> Result<bool, GameError> {
    let repository = Repository::new(base_url)?;
    Service::new(repository).play_game(user_guess).await
}
