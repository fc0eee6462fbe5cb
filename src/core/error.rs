use thiserror::Error;

use crate::callback::codec::DecodeError;
use crate::services::favorites::FavoriteError;
use crate::services::http::ApiError;

/// Centralized error types for the application
///
/// All errors crossing module boundaries are converted to this enum for
/// consistent handling at the dispatch boundary. Uses `thiserror` for
/// automatic conversion and display formatting.
#[derive(Error, Debug)]
pub enum BotError {
    /// Malformed or unrecognized callback wire string
    #[error("callback decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Transport-level HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend API errors (transport or business failure)
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Favorites domain errors with user-facing messages
    #[error("{0}")]
    Favorite(#[from] FavoriteError),

    /// Invalid input that passed the platform but failed our checks
    #[error("validation error: {0}")]
    Validation(String),
}

/// Type alias for Result with BotError
pub type BotResult<T> = Result<T, BotError>;
