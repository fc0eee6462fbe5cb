//! Inline keyboard builders
//!
//! Every button carrying state goes through the [`CallbackData`] helper
//! constructors, so the codec remains the single place where wire encoding
//! happens.

use crate::callback::data::{CallbackData, DistanceBucket, NavAction, Uf};
use crate::core::config;
use crate::core::types::InteractionButton;
use crate::presentation::messages::uf_full_name;
use crate::services::models::{FavoriteRace, Race};

type Rows = Vec<Vec<InteractionButton>>;

/// UF choice row shown when entering the race list
pub fn uf_filter_buttons() -> Rows {
    vec![vec![
        InteractionButton::callback("🌆 São Paulo (SP)", CallbackData::uf_filter(Uf::Sp)),
        InteractionButton::callback("🌲 Paraná (PR)", CallbackData::uf_filter(Uf::Pr)),
    ]]
}

/// Distance bucket choices for one UF, plus navigation back to the states
pub fn distance_filter_buttons(uf: Uf) -> Rows {
    vec![
        vec![InteractionButton::callback(
            "📋 TODAS",
            CallbackData::distance_filter(uf, DistanceBucket::All),
        )],
        vec![InteractionButton::callback(
            "🏃‍♂️ 5km ~ 9km",
            CallbackData::distance_filter(uf, DistanceBucket::FiveToNine),
        )],
        vec![InteractionButton::callback(
            "🏃‍♂️ 10km ~ 21km",
            CallbackData::distance_filter(uf, DistanceBucket::TenToTwentyOne),
        )],
        vec![InteractionButton::callback(
            "🏃‍♂️ 42km (Maratona)",
            CallbackData::distance_filter(uf, DistanceBucket::Marathon),
        )],
        vec![InteractionButton::callback(
            "⬅️ Voltar aos Estados",
            CallbackData::navigation(NavAction::Back, "uf_filter"),
        )],
    ]
}

/// One detail button per race, carrying the origin UF
pub fn race_list_buttons(races: &[Race], uf: &str) -> Rows {
    races
        .iter()
        .map(|race| {
            vec![InteractionButton::callback(
                format!("🏃‍♂️ {}", race.title),
                CallbackData::race_detail(race.id.clone(), Some(uf)),
            )]
        })
        .collect()
}

/// "Other distances" + back-to-states rows under a filtered list
pub fn distance_filter_navigation_buttons(uf: Uf) -> Rows {
    vec![
        vec![InteractionButton::callback(
            "🔄 Outras Distâncias",
            CallbackData::uf_filter(uf),
        )],
        vec![InteractionButton::callback(
            "⬅️ Voltar aos Estados",
            CallbackData::navigation(NavAction::Back, "uf_filter"),
        )],
    ]
}

/// Action buttons on a race detail view
pub fn race_detail_buttons(race: &Race, uf: Option<&str>, is_favorited: bool) -> Rows {
    let mut rows: Rows = Vec::new();

    let mut main_actions = vec![InteractionButton::callback(
        "🔗 Abrir Inscrições",
        CallbackData::race_registration(race.id.clone(), uf),
    )];
    if race.has_coordinates() {
        main_actions.push(InteractionButton::callback(
            "📍 Ver Localização",
            CallbackData::race_location(race.id.clone(), uf),
        ));
    }
    rows.push(main_actions);

    let favorite_button = if is_favorited {
        InteractionButton::callback("💔 Desfavoritar", CallbackData::race_unfavorite(race.id.clone()))
    } else {
        InteractionButton::callback("❤️ Favoritar", CallbackData::race_favorite(race.id.clone()))
    };
    rows.push(vec![favorite_button]);

    if let Some(uf_code) = uf.and_then(Uf::parse) {
        rows.push(vec![InteractionButton::callback(
            format!("⬅️ Voltar para {}", uf_full_name(uf_code.as_str())),
            CallbackData::uf_filter(uf_code),
        )]);
    }

    rows
}

/// Back-to-detail row under the location view
pub fn race_location_buttons(race_id: &str, uf: Option<&str>) -> Rows {
    vec![vec![InteractionButton::callback(
        "⬅️ Voltar aos Detalhes",
        CallbackData::race_detail(race_id, uf),
    )]]
}

/// Registration view rows: the external URL plus back navigation
pub fn race_registration_buttons(race: &Race, uf: Option<&str>) -> Rows {
    vec![
        vec![InteractionButton::url("Iniciar Inscrição", race.link.clone())],
        vec![InteractionButton::callback(
            "⬅️ Voltar aos Detalhes",
            CallbackData::race_detail(race.id.clone(), uf),
        )],
    ]
}

/// General list rows: one details button per race, capped at the listing limit
pub fn general_race_list_buttons(races: &[Race]) -> Rows {
    races
        .iter()
        .take(config::listing::MAX_RACE_BUTTONS)
        .map(|race| {
            vec![InteractionButton::callback(
                format!("🏃‍♂️ {} - {}", race.title, race.distances.join("/")),
                CallbackData::race_details(race.id.clone(), None),
            )]
        })
        .collect()
}

/// Numeric distance filters + "all"/"favorites" shortcuts for the general list
pub fn general_race_filter_buttons() -> Rows {
    vec![
        vec![
            InteractionButton::callback("5km", CallbackData::races_filter(5)),
            InteractionButton::callback("10km", CallbackData::races_filter(10)),
            InteractionButton::callback("21km", CallbackData::races_filter(21)),
        ],
        vec![
            InteractionButton::callback("42km", CallbackData::races_filter(42)),
            InteractionButton::callback("📋 Todas", CallbackData::races_list(None)),
            InteractionButton::callback("⭐ Favoritas", CallbackData::races_list_favorite()),
        ],
    ]
}

/// Favorites shortcut shown under an empty general list
pub fn general_list_navigation_buttons() -> Rows {
    vec![vec![InteractionButton::callback(
        "⭐ Ver Favoritas",
        CallbackData::races_list_favorite(),
    )]]
}

/// Back to the unfiltered general list
pub fn back_to_general_list_buttons() -> Rows {
    vec![vec![InteractionButton::callback(
        "⬅️ Voltar",
        CallbackData::races_list(None),
    )]]
}

/// One details button per favorited race, capped at the listing limit
pub fn favorite_race_list_buttons(races: &[FavoriteRace]) -> Rows {
    races
        .iter()
        .take(config::listing::MAX_RACE_BUTTONS)
        .map(|race| {
            vec![InteractionButton::callback(
                format!("🏃‍♂️ {} - {}", race.title, race.distances.join("/")),
                CallbackData::race_details(race.id.clone(), Some("favorites")),
            )]
        })
        .collect()
}

/// "See all races" row shown with the favorites list
pub fn navigation_to_all_races_buttons() -> Rows {
    vec![vec![InteractionButton::callback(
        "🏃‍♂️ Ver Todas as Corridas",
        CallbackData::races_list(None),
    )]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::codec;

    fn sample_race(id: &str) -> Race {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": "Meia de Sampa",
            "distances": ["21km"],
            "distancesNumbers": [21],
            "date": "2026-10-04",
            "location": "Av. Paulista",
            "latitude": -23.561414,
            "longitude": -46.655881,
            "link": "https://example.com/meia",
            "status": "OPEN"
        }))
        .unwrap()
    }

    #[test]
    fn test_every_generated_button_fits_the_wire_budget() {
        let race = sample_race("665f1a2b3c4d5e6f70818293");
        let mut rows = uf_filter_buttons();
        rows.extend(distance_filter_buttons(Uf::Sp));
        rows.extend(race_detail_buttons(&race, Some("SP"), false));
        rows.extend(race_detail_buttons(&race, Some("SP"), true));
        rows.extend(general_race_filter_buttons());
        rows.extend(race_registration_buttons(&race, Some("PR")));

        for button in rows.iter().flatten() {
            if let Some(data) = &button.callback_data {
                assert!(codec::validate_size(data), "oversized: {}", codec::serialize(data));
            }
        }
    }

    #[test]
    fn test_detail_buttons_reflect_favorite_state() {
        let race = sample_race("abc123");
        let rows = race_detail_buttons(&race, None, false);
        assert!(rows[1][0].text.contains("Favoritar"));
        let rows = race_detail_buttons(&race, None, true);
        assert!(rows[1][0].text.contains("Desfavoritar"));
    }

    #[test]
    fn test_detail_buttons_skip_location_without_coordinates() {
        let mut race = sample_race("abc123");
        race.latitude = None;
        race.longitude = None;
        let rows = race_detail_buttons(&race, None, false);
        assert_eq!(rows[0].len(), 1);
    }

    #[test]
    fn test_general_list_caps_at_limit() {
        let races: Vec<Race> = (0..15).map(|i| sample_race(&format!("race{}", i))).collect();
        assert_eq!(general_race_list_buttons(&races).len(), config::listing::MAX_RACE_BUTTONS);
    }
}
