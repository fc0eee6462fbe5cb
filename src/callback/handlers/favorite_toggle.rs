//! Favorite/unfavorite callbacks
//!
//! Both variants land on one handler: the backend exposes a single toggle
//! endpoint and reports which direction it actually took, and the rendered
//! state must follow that answer, never the button the user happened to tap.

use std::sync::Arc;

use async_trait::async_trait;

use crate::callback::data::CallbackData;
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::{messages, views};
use crate::services::analytics::{events, track_detached, Analytics, AnalyticsApiService, TelegramContext};
use crate::services::favorites::FavoriteApiService;
use crate::services::models::ToggleAction;
use crate::services::races::RaceApiService;

pub struct FavoriteToggleCallbackHandler {
    races: Arc<RaceApiService>,
    favorites: Arc<FavoriteApiService>,
    analytics: Arc<AnalyticsApiService>,
}

impl FavoriteToggleCallbackHandler {
    pub fn new(
        races: Arc<RaceApiService>,
        favorites: Arc<FavoriteApiService>,
        analytics: Arc<AnalyticsApiService>,
    ) -> Self {
        Self {
            races,
            favorites,
            analytics,
        }
    }
}

#[async_trait]
impl CallbackHandler for FavoriteToggleCallbackHandler {
    fn name(&self) -> &'static str {
        "FavoriteToggleCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(
            data,
            CallbackData::RaceFavorite { .. } | CallbackData::RaceUnfavorite { .. }
        )
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let (race_id, error_text) = match input.callback_data {
            Some(CallbackData::RaceFavorite { ref race_id }) => {
                (race_id.clone(), messages::errors::FAVORITE_ERROR)
            }
            Some(CallbackData::RaceUnfavorite { ref race_id }) => {
                (race_id.clone(), messages::errors::UNFAVORITE_ERROR)
            }
            _ => return Ok(CommandOutput::html_edit(messages::errors::FAVORITE_ERROR)),
        };

        let Some(telegram_id) = input.user_id().map(str::to_string) else {
            return Ok(CommandOutput::html_edit(messages::errors::USER_ID_MISSING));
        };

        log::info!("Toggling favorite {} for user {}", race_id, telegram_id);

        let toggled = match self.favorites.toggle_favorite_race(&telegram_id, &race_id).await {
            Ok(toggled) => toggled,
            Err(e) => {
                log::error!(
                    "Favorite toggle failed for race {} (user {}): {}",
                    race_id,
                    telegram_id,
                    e
                );
                return Ok(CommandOutput::html_edit(error_text));
            }
        };

        let race = match self.races.get_race_by_id(&race_id).await {
            Ok(Some(race)) => race,
            Ok(None) => return Ok(views::race_not_found_view()),
            Err(e) => {
                log::error!("Failed to reload race {} after toggle: {}", race_id, e);
                return Ok(CommandOutput::html_edit(error_text));
            }
        };

        // The backend decides the resulting state
        let is_favorited = toggled.action == ToggleAction::Added;

        log::info!(
            "Race favorite status toggled: race={}, user={}, action={:?}",
            race_id,
            telegram_id,
            toggled.action
        );

        if let Some(ctx) = TelegramContext::from_input(&input) {
            track_detached(
                Analytics::new(Arc::clone(&self.analytics), ctx),
                events::favorite_action(&race, is_favorited),
            );
        }

        Ok(views::race_detail_view(&race, None, is_favorited))
    }
}
