//! Distance bucket filter within a state

use std::sync::Arc;

use async_trait::async_trait;

use crate::callback::data::{CallbackData, DistanceBucket};
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::{messages, views};
use crate::services::races::{RaceApiService, RaceQuery};

pub struct DistanceFilterCallbackHandler {
    races: Arc<RaceApiService>,
}

impl DistanceFilterCallbackHandler {
    pub fn new(races: Arc<RaceApiService>) -> Self {
        Self { races }
    }
}

#[async_trait]
impl CallbackHandler for DistanceFilterCallbackHandler {
    fn name(&self) -> &'static str {
        "DistanceFilterCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::DistanceFilter { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let Some(CallbackData::DistanceFilter { uf, distance }) = input.callback_data else {
            return Ok(CommandOutput::html_edit(messages::errors::DISTANCE_FILTER_ERROR));
        };

        log::info!(
            "Filtering races by distance {} for UF {} (user: {:?})",
            distance.as_str(),
            uf,
            input.user.as_ref().map(|u| u.id.as_str())
        );

        let all_races = match self.races.get_available_races(&RaceQuery::by_uf(uf)).await {
            Ok(races) => races,
            Err(e) => {
                log::error!("Failed to filter races by distance: {}", e);
                return Ok(CommandOutput::html_edit(messages::errors::DISTANCE_FILTER_ERROR));
            }
        };

        let races = if distance == DistanceBucket::All {
            all_races
        } else {
            let (min, max) = distance.range();
            all_races
                .into_iter()
                .filter(|race| race.matches_distance_range(min, max))
                .collect()
        };

        if races.is_empty() {
            return Ok(views::no_races_found_view(uf, distance));
        }

        Ok(views::filtered_races_view(&races, uf, distance))
    }
}
