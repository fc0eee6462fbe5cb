//! Favorites list callback

use std::sync::Arc;

use async_trait::async_trait;

use crate::callback::data::CallbackData;
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::{messages, views};
use crate::services::analytics::{events, track_detached, Analytics, AnalyticsApiService, TelegramContext};
use crate::services::favorites::FavoriteApiService;

pub struct RaceListFavoriteCallbackHandler {
    favorites: Arc<FavoriteApiService>,
    analytics: Arc<AnalyticsApiService>,
}

impl RaceListFavoriteCallbackHandler {
    pub fn new(favorites: Arc<FavoriteApiService>, analytics: Arc<AnalyticsApiService>) -> Self {
        Self { favorites, analytics }
    }
}

#[async_trait]
impl CallbackHandler for RaceListFavoriteCallbackHandler {
    fn name(&self) -> &'static str {
        "RaceListFavoriteCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::RacesListFavorite)
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let Some(telegram_id) = input.user_id().map(str::to_string) else {
            return Ok(CommandOutput::html_edit(messages::errors::USER_ID_MISSING));
        };

        log::info!("Fetching favorite races for user {}", telegram_id);

        let favorite_races = match self.favorites.get_user_favorite_races(&telegram_id).await {
            Ok(favorites) => favorites,
            Err(e) => {
                log::error!("Error in RaceListFavoriteCallbackHandler: {}", e);
                return Ok(CommandOutput::html_edit(messages::errors::FAVORITES_FETCH_ERROR));
            }
        };

        if let Some(ctx) = TelegramContext::from_input(&input) {
            track_detached(
                Analytics::new(Arc::clone(&self.analytics), ctx),
                events::favorites_list_view(favorite_races.len()),
            );
        }

        Ok(views::favorites_list_view(&favorite_races))
    }
}
