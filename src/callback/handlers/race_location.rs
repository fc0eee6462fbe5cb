//! Race location callback: share the race's coordinates

use std::sync::Arc;

use async_trait::async_trait;

use crate::callback::data::CallbackData;
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::{messages, views};
use crate::services::races::RaceApiService;

pub struct RaceLocationCallbackHandler {
    races: Arc<RaceApiService>,
}

impl RaceLocationCallbackHandler {
    pub fn new(races: Arc<RaceApiService>) -> Self {
        Self { races }
    }
}

#[async_trait]
impl CallbackHandler for RaceLocationCallbackHandler {
    fn name(&self) -> &'static str {
        "RaceLocationCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::RaceLocation { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let user_id = input.user_id().map(str::to_string);
        let Some(CallbackData::RaceLocation { race_id, uf }) = input.callback_data else {
            return Ok(CommandOutput::html_edit(messages::errors::LOCATION_ERROR));
        };

        log::info!("Showing race location for {} (user: {:?})", race_id, user_id);

        match self.races.get_race_by_id(&race_id).await {
            Ok(Some(race)) => Ok(views::race_location_view(&race, uf.as_deref())),
            Ok(None) => Ok(views::race_not_found_view()),
            Err(e) => {
                log::error!("Error in RaceLocationCallbackHandler: {}", e);
                Ok(CommandOutput::html_edit(messages::errors::LOCATION_ERROR))
            }
        }
    }
}
