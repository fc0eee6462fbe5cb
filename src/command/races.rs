//! Race discovery commands: /corridas and /favoritos

use std::sync::Arc;

use crate::callback::data::CallbackData;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::{messages, views};
use crate::services::analytics::{events, track_detached, Analytics, AnalyticsApiService, TelegramContext};
use crate::services::favorites::FavoriteApiService;
use crate::services::races::{RaceApiService, RaceQuery};

/// Lists races: shows the UF picker on first call, or a state's races when a
/// UF filter was already chosen through a callback
pub async fn list_races_command(
    races: &Arc<RaceApiService>,
    input: CommandInput,
) -> BotResult<CommandOutput> {
    let user_id = input.user_id().map(str::to_string);

    if let Some(CallbackData::UfFilter { uf }) = input.callback_data {
        log::info!("Fetching races for UF filter {} (user: {:?})", uf, user_id);

        let state_races = match races.get_available_races(&RaceQuery::by_uf(uf)).await {
            Ok(state_races) => state_races,
            Err(e) => {
                log::error!("Error in list_races_command: {}", e);
                return Ok(CommandOutput::html_edit(messages::errors::RACES_FETCH_ERROR));
            }
        };

        if state_races.is_empty() {
            return Ok(CommandOutput::html_edit(messages::races::no_races_found(uf.as_str())));
        }

        let text = format!(
            "{}\n\n{}",
            messages::races::races_in_state(uf.as_str(), state_races.len()),
            messages::format_race_list(&state_races)
        );
        return Ok(CommandOutput::html_edit(text));
    }

    log::info!("Showing UF filter options (user: {:?})", user_id);
    Ok(views::uf_filter_view())
}

/// Lists the user's favorite races
pub async fn list_favorite_races_command(
    favorites: &Arc<FavoriteApiService>,
    analytics: &Arc<AnalyticsApiService>,
    input: CommandInput,
) -> BotResult<CommandOutput> {
    let Some(telegram_id) = input.user_id().map(str::to_string) else {
        return Ok(CommandOutput::html(messages::errors::USER_ID_MISSING));
    };

    log::info!("Listing favorite races for user {}", telegram_id);

    let favorite_races = match favorites.get_user_favorite_races(&telegram_id).await {
        Ok(favorite_races) => favorite_races,
        Err(e) => {
            log::error!("Error in list_favorite_races_command: {}", e);
            return Ok(CommandOutput::html(messages::errors::FAVORITES_FETCH_ERROR));
        }
    };

    if let Some(ctx) = TelegramContext::from_input(&input) {
        track_detached(
            Analytics::new(Arc::clone(analytics), ctx),
            events::favorites_command(favorite_races.len()),
        );
    }

    // Command responses arrive as new messages, not edits
    let mut view = views::favorites_list_view(&favorite_races);
    view.edit_message = false;
    Ok(view)
}
