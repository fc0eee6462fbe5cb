//! General race list callbacks: the full list and its numeric-distance filter
//!
//! `races_list` optionally carries a pre-filter distance on entry;
//! `races_filter` is the explicit filter action on an already-open list. Both
//! match on exact membership of `distances_numbers`, unlike the UF path's
//! bucket ranges.

use std::sync::Arc;

use async_trait::async_trait;

use crate::callback::data::CallbackData;
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::{messages, views};
use crate::services::races::{RaceApiService, RaceQuery};

pub struct RaceListCallbackHandler {
    races: Arc<RaceApiService>,
}

impl RaceListCallbackHandler {
    pub fn new(races: Arc<RaceApiService>) -> Self {
        Self { races }
    }
}

#[async_trait]
impl CallbackHandler for RaceListCallbackHandler {
    fn name(&self) -> &'static str {
        "RaceListCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::RacesList { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let user_id = input.user_id().map(str::to_string);
        let Some(CallbackData::RacesList { distance }) = input.callback_data else {
            return Ok(CommandOutput::html_edit(messages::errors::RACES_FETCH_ERROR));
        };

        log::info!("Listing races (distance: {:?}, user: {:?})", distance, user_id);

        let all_races = match self.races.get_available_races(&RaceQuery::default()).await {
            Ok(races) => races,
            Err(e) => {
                log::error!("Error in RaceListCallbackHandler: {}", e);
                return Ok(CommandOutput::html_edit(messages::errors::RACES_FETCH_ERROR));
            }
        };

        let races = match distance {
            Some(d) => all_races
                .into_iter()
                .filter(|race| race.distances_numbers.contains(&d))
                .collect(),
            None => all_races,
        };

        Ok(views::general_race_list_view(&races, distance))
    }
}

pub struct RaceFilterCallbackHandler {
    races: Arc<RaceApiService>,
}

impl RaceFilterCallbackHandler {
    pub fn new(races: Arc<RaceApiService>) -> Self {
        Self { races }
    }
}

#[async_trait]
impl CallbackHandler for RaceFilterCallbackHandler {
    fn name(&self) -> &'static str {
        "RaceFilterCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::RacesFilter { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let user_id = input.user_id().map(str::to_string);
        let Some(CallbackData::RacesFilter { distance }) = input.callback_data else {
            return Ok(CommandOutput::html_edit(messages::errors::RACES_FETCH_ERROR));
        };

        log::info!(
            "Filtering races by distance {} (user: {:?})",
            distance,
            user_id
        );

        let races = match self.races.get_available_races(&RaceQuery::default()).await {
            Ok(all_races) => all_races
                .into_iter()
                .filter(|race| race.distances_numbers.contains(&distance))
                .collect::<Vec<_>>(),
            Err(e) => {
                log::error!("Error in RaceFilterCallbackHandler: {}", e);
                return Ok(CommandOutput::html_edit(messages::errors::RACES_FETCH_ERROR));
            }
        };

        Ok(views::filtered_race_list_view(&races, distance))
    }
}
