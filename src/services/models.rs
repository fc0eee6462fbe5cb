//! Data records returned by the backend race and favorites APIs

use serde::Deserialize;

/// Registration status of a race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaceStatus {
    Open,
    Closed,
    ComingSoon,
    Cancelled,
}

impl RaceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RaceStatus::Open => "Inscrições abertas",
            RaceStatus::Closed => "Inscrições encerradas",
            RaceStatus::ComingSoon => "Em breve",
            RaceStatus::Cancelled => "Cancelada",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RaceStatus::Open => "✅",
            RaceStatus::Closed => "🔒",
            RaceStatus::ComingSoon => "🔜",
            RaceStatus::Cancelled => "❌",
        }
    }
}

/// A race record from `GET /races/available` or `GET /races/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    /// Display labels, e.g. "5km"
    #[serde(default)]
    pub distances: Vec<String>,
    /// Numeric km values used for filtering
    #[serde(default)]
    pub distances_numbers: Vec<u32>,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub promo_image_url: Option<String>,
    pub link: String,
    #[serde(default)]
    pub time: Option<String>,
    pub status: RaceStatus,
}

impl Race {
    /// True when the record carries usable coordinates
    pub fn has_coordinates(&self) -> bool {
        matches!((self.latitude, self.longitude), (Some(lat), Some(lon)) if lat != 0.0 || lon != 0.0)
    }

    /// True when at least one of the race's distances falls inside the
    /// inclusive `[min, max]` km range
    pub fn matches_distance_range(&self, min: u32, max: u32) -> bool {
        self.distances_numbers.iter().any(|d| (min..=max).contains(d))
    }
}

/// A favorited race as returned by the favorites endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRace {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub distances: Vec<String>,
    #[serde(default)]
    pub distances_numbers: Vec<u32>,
    pub date: String,
    pub location: String,
    pub link: String,
    #[serde(default)]
    pub time: Option<String>,
    pub status: RaceStatus,
}

/// Direction a favorite toggle actually took, as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Result of `PUT /favorites/{telegramId}/{raceId}/toggle`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavorite {
    pub action: ToggleAction,
    #[serde(default)]
    pub favorite: Option<FavoriteRace>,
}

/// Favorite status of one race for one user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceFavoriteStatus {
    pub race_id: String,
    pub is_favorited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race_with_distances(distances: Vec<u32>) -> Race {
        serde_json::from_value(serde_json::json!({
            "id": "665f1a2b3c4d5e6f70818293",
            "title": "Corrida Teste",
            "distances": ["5km", "10km"],
            "distancesNumbers": distances,
            "date": "2026-09-20",
            "location": "Parque Ibirapuera",
            "link": "https://example.com/inscricao",
            "status": "OPEN"
        }))
        .unwrap()
    }

    #[test]
    fn test_race_deserializes_from_camel_case() {
        let race = race_with_distances(vec![5, 10]);
        assert_eq!(race.distances_numbers, vec![5, 10]);
        assert_eq!(race.status, RaceStatus::Open);
        assert!(race.city.is_none());
        assert!(!race.has_coordinates());
    }

    #[test]
    fn test_distance_range_is_inclusive() {
        let race = race_with_distances(vec![5, 21]);
        assert!(race.matches_distance_range(5, 9));
        assert!(race.matches_distance_range(10, 21));
        assert!(!race.matches_distance_range(42, 42));
    }

    #[test]
    fn test_toggle_action_deserializes() {
        let toggled: ToggleFavorite =
            serde_json::from_value(serde_json::json!({ "action": "added" })).unwrap();
        assert_eq!(toggled.action, ToggleAction::Added);
        let toggled: ToggleFavorite =
            serde_json::from_value(serde_json::json!({ "action": "removed" })).unwrap();
        assert_eq!(toggled.action, ToggleAction::Removed);
    }
}
