//! View builders: assemble [`CommandOutput`] responses from messages and keyboards

use crate::callback::data::{DistanceBucket, Uf};
use crate::core::types::{CommandOutput, GeoPoint, InteractionKeyboard};
use crate::presentation::{keyboards, messages};
use crate::services::models::{FavoriteRace, Race};

/// Entry view of the race listing: pick a state
pub fn uf_filter_view() -> CommandOutput {
    CommandOutput::html(format!(
        "{}\n\n{}",
        messages::races::RACE_LIST_TITLE,
        messages::races::UF_FILTER_PROMPT
    ))
    .with_keyboard(InteractionKeyboard::inline(keyboards::uf_filter_buttons()))
}

/// Distance bucket picker for one state
pub fn distance_filter_view(uf: Uf) -> CommandOutput {
    CommandOutput::html_edit(messages::races::distance_filter_title(uf.as_str()))
        .with_keyboard(InteractionKeyboard::inline(keyboards::distance_filter_buttons(uf)))
}

/// Races of one state, filtered by a distance bucket
pub fn filtered_races_view(races: &[Race], uf: Uf, bucket: DistanceBucket) -> CommandOutput {
    let text = if bucket == DistanceBucket::All {
        messages::races::races_in_state(uf.as_str(), races.len())
    } else {
        messages::races::filtered_races(uf.as_str(), bucket, races.len())
    };

    let mut buttons = keyboards::race_list_buttons(races, uf.as_str());
    buttons.extend(keyboards::distance_filter_navigation_buttons(uf));

    CommandOutput::html_edit(text).with_keyboard(InteractionKeyboard::inline(buttons))
}

/// Empty result for a state/bucket pair, with paths back out
pub fn no_races_found_view(uf: Uf, bucket: DistanceBucket) -> CommandOutput {
    let text = if bucket == DistanceBucket::All {
        messages::races::no_races_found(uf.as_str())
    } else {
        messages::races::no_races_found_by_distance(uf.as_str(), bucket)
    };

    CommandOutput::html_edit(text).with_keyboard(InteractionKeyboard::inline(
        keyboards::distance_filter_navigation_buttons(uf),
    ))
}

/// Detail view for one race, remembering the origin UF filter
pub fn race_detail_view(race: &Race, uf: Option<&str>, is_favorited: bool) -> CommandOutput {
    let mut text = messages::format_race_detail(race);

    // Invisible link so the platform renders the promo image as a preview
    if let Some(image) = race.promo_image_url.as_deref() {
        text = format!("<a href=\"{}\">🖼️</a> {}", image, text);
    }

    CommandOutput::html_edit(text).with_keyboard(InteractionKeyboard::inline(
        keyboards::race_detail_buttons(race, uf, is_favorited),
    ))
}

/// Detail view entered from the general list; back leads to that list
pub fn race_details_view(race: &Race, is_favorited: bool) -> CommandOutput {
    let mut text = messages::format_race_detail(race);
    if let Some(image) = race.promo_image_url.as_deref() {
        text = format!("<a href=\"{}\">🖼️</a> {}", image, text);
    }

    let mut buttons = keyboards::race_detail_buttons(race, None, is_favorited);
    buttons.extend(keyboards::back_to_general_list_buttons());

    CommandOutput::html_edit(text).with_keyboard(InteractionKeyboard::inline(buttons))
}

pub fn race_not_found_view() -> CommandOutput {
    CommandOutput::html_edit(messages::errors::RACE_NOT_FOUND)
}

/// Location view with the geo payload for the platform's map bubble
pub fn race_location_view(race: &Race, uf: Option<&str>) -> CommandOutput {
    let (Some(latitude), Some(longitude)) = (race.latitude, race.longitude) else {
        return CommandOutput::html_edit(messages::errors::NO_LOCATION);
    };

    let mut output = CommandOutput::html_edit(messages::races::race_location(
        &race.title,
        &race.location,
        race.city.as_deref(),
    ))
    .with_keyboard(InteractionKeyboard::inline(keyboards::race_location_buttons(
        &race.id,
        uf,
    )));
    output.location = Some(GeoPoint { latitude, longitude });
    output
}

/// Registration view: external link plus back navigation
pub fn race_registration_view(race: &Race, uf: Option<&str>) -> CommandOutput {
    CommandOutput::html_edit(messages::races::registration_prompt(&race.title)).with_keyboard(
        InteractionKeyboard::inline(keyboards::race_registration_buttons(race, uf)),
    )
}

/// General race list, optionally pre-filtered by a numeric distance
pub fn general_race_list_view(races: &[Race], distance: Option<u32>) -> CommandOutput {
    if races.is_empty() {
        let text = match distance {
            Some(d) => messages::races::no_races_for_distance(d),
            None => messages::errors::NO_RACES_AVAILABLE.to_string(),
        };
        return CommandOutput::html_edit(text).with_keyboard(InteractionKeyboard::inline(
            keyboards::general_list_navigation_buttons(),
        ));
    }

    let text = match distance {
        Some(d) => messages::races::races_for_distance(d, races.len()),
        None => messages::races::all_races_available(races.len()),
    };

    let mut buttons = keyboards::general_race_list_buttons(races);
    buttons.extend(keyboards::general_race_filter_buttons());

    CommandOutput::html_edit(text).with_keyboard(InteractionKeyboard::inline(buttons))
}

/// General list filtered by an exact numeric distance
pub fn filtered_race_list_view(races: &[Race], distance: u32) -> CommandOutput {
    if races.is_empty() {
        return CommandOutput::html_edit(messages::races::no_races_for_distance(distance))
            .with_keyboard(InteractionKeyboard::inline(keyboards::back_to_general_list_buttons()));
    }

    let mut buttons = keyboards::general_race_list_buttons(races);
    buttons.extend(keyboards::back_to_general_list_buttons());

    CommandOutput::html_edit(messages::races::races_for_distance(distance, races.len()))
        .with_keyboard(InteractionKeyboard::inline(buttons))
}

/// The user's favorites, or an invitation to create some
pub fn favorites_list_view(favorites: &[FavoriteRace]) -> CommandOutput {
    if favorites.is_empty() {
        return CommandOutput::html_edit(messages::races::NO_FAVORITES).with_keyboard(
            InteractionKeyboard::inline(keyboards::navigation_to_all_races_buttons()),
        );
    }

    let mut buttons = keyboards::favorite_race_list_buttons(favorites);
    buttons.extend(keyboards::navigation_to_all_races_buttons());

    CommandOutput::html_edit(messages::races::favorites_list(favorites.len()))
        .with_keyboard(InteractionKeyboard::inline(buttons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::data::CallbackData;

    fn sample_race() -> Race {
        serde_json::from_value(serde_json::json!({
            "id": "665f1a2b3c4d5e6f70818293",
            "title": "Corrida do Parque",
            "organization": "VELOX",
            "distances": ["5km", "10km"],
            "distancesNumbers": [5, 10],
            "date": "2026-09-20",
            "location": "Parque Ibirapuera",
            "city": "São Paulo",
            "state": "SP",
            "latitude": -23.587,
            "longitude": -46.657,
            "promoImageUrl": "https://cdn.example.com/promo.jpg",
            "link": "https://example.com/inscricao",
            "time": "07:00",
            "status": "OPEN"
        }))
        .unwrap()
    }

    #[test]
    fn test_uf_filter_view_is_a_fresh_message() {
        let view = uf_filter_view();
        assert!(!view.edit_message);
        assert!(view.keyboard.is_some());
        assert!(view.text.contains("Lista de Corridas"));
    }

    #[test]
    fn test_detail_view_embeds_promo_preview() {
        let view = race_detail_view(&sample_race(), Some("SP"), false);
        assert!(view.edit_message);
        assert!(view.text.starts_with("<a href=\"https://cdn.example.com/promo.jpg\">"));
        assert!(view.text.contains("Corrida do Parque"));
    }

    #[test]
    fn test_location_view_carries_coordinates() {
        let view = race_location_view(&sample_race(), None);
        let location = view.location.expect("location payload");
        assert!((location.latitude - -23.587).abs() < f64::EPSILON);
    }

    #[test]
    fn test_location_view_without_coordinates_degrades() {
        let mut race = sample_race();
        race.latitude = None;
        let view = race_location_view(&race, None);
        assert!(view.location.is_none());
        assert!(view.text.contains("Localização não disponível"));
    }

    #[test]
    fn test_empty_general_list_offers_favorites() {
        let view = general_race_list_view(&[], None);
        let keyboard = view.keyboard.expect("keyboard");
        let data = keyboard.buttons[0][0].callback_data.clone().expect("callback");
        assert_eq!(data, CallbackData::races_list_favorite());
    }

    #[test]
    fn test_registration_view_has_url_button() {
        let view = race_registration_view(&sample_race(), None);
        let keyboard = view.keyboard.expect("keyboard");
        assert_eq!(
            keyboard.buttons[0][0].url.as_deref(),
            Some("https://example.com/inscricao")
        );
    }
}
