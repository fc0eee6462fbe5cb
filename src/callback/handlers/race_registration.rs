//! Race registration callback: hand out the external registration link

use std::sync::Arc;

use async_trait::async_trait;

use crate::callback::data::CallbackData;
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::{messages, views};
use crate::services::analytics::{events, track_detached, Analytics, AnalyticsApiService, TelegramContext};
use crate::services::races::RaceApiService;

pub struct RaceRegistrationCallbackHandler {
    races: Arc<RaceApiService>,
    analytics: Arc<AnalyticsApiService>,
}

impl RaceRegistrationCallbackHandler {
    pub fn new(races: Arc<RaceApiService>, analytics: Arc<AnalyticsApiService>) -> Self {
        Self { races, analytics }
    }
}

#[async_trait]
impl CallbackHandler for RaceRegistrationCallbackHandler {
    fn name(&self) -> &'static str {
        "RaceRegistrationCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::RaceRegistration { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let Some(CallbackData::RaceRegistration { ref race_id, ref uf }) = input.callback_data else {
            return Ok(CommandOutput::html_edit(messages::errors::REGISTRATION_ERROR));
        };

        log::info!(
            "Handling race registration click for {} (user: {:?})",
            race_id,
            input.user_id()
        );

        let race = match self.races.get_race_by_id(race_id).await {
            Ok(Some(race)) => race,
            Ok(None) => return Ok(views::race_not_found_view()),
            Err(e) => {
                log::error!("Error in RaceRegistrationCallbackHandler: {}", e);
                return Ok(CommandOutput::html_edit(messages::errors::REGISTRATION_ERROR));
            }
        };

        // Click tracking happens off the response path
        if let Some(ctx) = TelegramContext::from_input(&input) {
            track_detached(
                Analytics::new(Arc::clone(&self.analytics), ctx),
                events::registration_click(&race),
            );
        }

        Ok(views::race_registration_view(&race, uf.as_deref()))
    }
}
