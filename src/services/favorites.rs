//! Wrapper over the backend favorites endpoints
//!
//! Write-path failures are translated into [`FavoriteError`] variants whose
//! display strings are the user-facing messages; read paths map 404 to empty
//! results instead of errors.

use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;

use super::http::{ApiError, HttpClient};
use super::models::{FavoriteRace, RaceFavoriteStatus, ToggleFavorite};

/// Domain failures for favorite operations, with pt-BR user-facing messages
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("Dados inválidos para alterar favoritos")]
    InvalidData,
    #[error("Corrida não encontrada")]
    RaceNotFound,
    #[error("Corrida já está nos favoritos")]
    AlreadyFavorited,
    #[error("Acesso negado para alterar favorito")]
    AccessDenied,
    #[error("Erro interno do servidor")]
    Internal,
}

impl From<ApiError> for FavoriteError {
    fn from(e: ApiError) -> Self {
        match e.status {
            Some(StatusCode::BAD_REQUEST) => FavoriteError::InvalidData,
            Some(StatusCode::NOT_FOUND) => FavoriteError::RaceNotFound,
            Some(StatusCode::CONFLICT) => FavoriteError::AlreadyFavorited,
            Some(StatusCode::FORBIDDEN) => FavoriteError::AccessDenied,
            _ => FavoriteError::Internal,
        }
    }
}

pub struct FavoriteApiService {
    http: Arc<HttpClient>,
}

impl FavoriteApiService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Adds a race to the user's favorites
    pub async fn add_favorite_race(
        &self,
        telegram_id: &str,
        race_id: &str,
    ) -> Result<FavoriteRace, FavoriteError> {
        let favorite: FavoriteRace = self
            .http
            .post(&format!("/favorites/{}/{}", telegram_id, race_id))
            .await
            .map_err(|e| {
                log::error!("Error adding favorite {} for {}: {}", race_id, telegram_id, e);
                FavoriteError::from(e)
            })?;

        log::info!("Added race {} to favorites of {}", race_id, telegram_id);
        Ok(favorite)
    }

    /// Removes a race from the user's favorites
    pub async fn remove_favorite_race(
        &self,
        telegram_id: &str,
        race_id: &str,
    ) -> Result<(), FavoriteError> {
        self.http
            .delete::<serde_json::Value>(&format!("/favorites/{}/{}", telegram_id, race_id))
            .await
            .map_err(|e| {
                log::error!("Error removing favorite {} for {}: {}", race_id, telegram_id, e);
                FavoriteError::from(e)
            })?;

        log::info!("Removed race {} from favorites of {}", race_id, telegram_id);
        Ok(())
    }

    /// Toggles a race's favorite status, returning which direction it took
    pub async fn toggle_favorite_race(
        &self,
        telegram_id: &str,
        race_id: &str,
    ) -> Result<ToggleFavorite, FavoriteError> {
        let toggled: ToggleFavorite = self
            .http
            .put(&format!("/favorites/{}/{}/toggle", telegram_id, race_id))
            .await
            .map_err(|e| {
                log::error!("Error toggling favorite {} for {}: {}", race_id, telegram_id, e);
                FavoriteError::from(e)
            })?;

        log::info!(
            "Toggled favorite {} for {}: {:?}",
            race_id,
            telegram_id,
            toggled.action
        );
        Ok(toggled)
    }

    /// Lists the user's favorite races; a 404 means an empty list
    pub async fn get_user_favorite_races(
        &self,
        telegram_id: &str,
    ) -> Result<Vec<FavoriteRace>, FavoriteError> {
        match self
            .http
            .get::<Vec<FavoriteRace>>(&format!("/favorites/{}", telegram_id))
            .await
        {
            Ok(favorites) => {
                log::info!("Retrieved {} favorites for {}", favorites.len(), telegram_id);
                Ok(favorites)
            }
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => {
                log::error!("Error listing favorites for {}: {}", telegram_id, e);
                Err(FavoriteError::from(e))
            }
        }
    }

    /// Checks whether one race is favorited; a 404 means it is not
    pub async fn is_race_favorited(
        &self,
        telegram_id: &str,
        race_id: &str,
    ) -> Result<bool, FavoriteError> {
        match self
            .http
            .get::<RaceFavoriteStatus>(&format!("/favorites/{}/{}/status", telegram_id, race_id))
            .await
        {
            Ok(status) => Ok(status.is_favorited),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => {
                log::error!(
                    "Error checking favorite status of {} for {}: {}",
                    race_id,
                    telegram_id,
                    e
                );
                Err(FavoriteError::from(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (StatusCode::BAD_REQUEST, FavoriteError::InvalidData),
            (StatusCode::NOT_FOUND, FavoriteError::RaceNotFound),
            (StatusCode::CONFLICT, FavoriteError::AlreadyFavorited),
            (StatusCode::FORBIDDEN, FavoriteError::AccessDenied),
            (StatusCode::INTERNAL_SERVER_ERROR, FavoriteError::Internal),
        ];
        for (status, expected) in cases {
            assert_eq!(FavoriteError::from(ApiError::new("x", Some(status))), expected);
        }
        assert_eq!(FavoriteError::from(ApiError::new("x", None)), FavoriteError::Internal);
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            FavoriteError::AlreadyFavorited.to_string(),
            "Corrida já está nos favoritos"
        );
    }
}
