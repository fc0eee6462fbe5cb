//! Race detail views: from the UF-filtered list and from the general list

use std::sync::Arc;

use async_trait::async_trait;

use crate::callback::data::CallbackData;
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::{messages, views};
use crate::services::races::RaceApiService;

/// Detail entered from a UF-filtered list (`race:` prefix)
pub struct RaceDetailCallbackHandler {
    races: Arc<RaceApiService>,
}

impl RaceDetailCallbackHandler {
    pub fn new(races: Arc<RaceApiService>) -> Self {
        Self { races }
    }
}

#[async_trait]
impl CallbackHandler for RaceDetailCallbackHandler {
    fn name(&self) -> &'static str {
        "RaceDetailCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::RaceDetail { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let user_id = input.user_id().map(str::to_string);
        let Some(CallbackData::RaceDetail { race_id, uf }) = input.callback_data else {
            return Ok(views::race_not_found_view());
        };

        log::info!("Fetching race details for {} (user: {:?})", race_id, user_id);

        match self.races.get_race_by_id(&race_id).await {
            Ok(Some(race)) => Ok(views::race_detail_view(&race, uf.as_deref(), false)),
            Ok(None) => Ok(views::race_not_found_view()),
            Err(e) => {
                log::error!("Error in RaceDetailCallbackHandler: {}", e);
                Ok(CommandOutput::html_edit(messages::errors::RACES_FETCH_ERROR))
            }
        }
    }
}

/// Detail entered from the general list (`details:` prefix); back returns there
pub struct RaceDetailsCallbackHandler {
    races: Arc<RaceApiService>,
}

impl RaceDetailsCallbackHandler {
    pub fn new(races: Arc<RaceApiService>) -> Self {
        Self { races }
    }
}

#[async_trait]
impl CallbackHandler for RaceDetailsCallbackHandler {
    fn name(&self) -> &'static str {
        "RaceDetailsCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::RaceDetails { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let user_id = input.user_id().map(str::to_string);
        let Some(CallbackData::RaceDetails { race_id, source }) = input.callback_data else {
            return Ok(views::race_not_found_view());
        };

        log::info!(
            "Fetching race details for {} (source: {:?}, user: {:?})",
            race_id,
            source,
            user_id
        );

        match self.races.get_race_by_id(&race_id).await {
            Ok(Some(race)) => Ok(views::race_details_view(&race, false)),
            Ok(None) => Ok(views::race_not_found_view()),
            Err(e) => {
                log::error!("Error in RaceDetailsCallbackHandler: {}", e);
                Ok(CommandOutput::html_edit(messages::errors::RACES_FETCH_ERROR))
            }
        }
    }
}
