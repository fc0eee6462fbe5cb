//! Callback data model: every structured interaction a button can carry
//!
//! `CallbackData` is a closed tagged union. Rendering code must build values
//! through the helper constructors at the bottom of this file; they are the
//! sanctioned entry points and keep field validation in one place.

/// Brazilian federative-unit codes the bot currently filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uf {
    Sp,
    Pr,
}

impl Uf {
    /// Wire token and display code, e.g. "SP"
    pub fn as_str(&self) -> &'static str {
        match self {
            Uf::Sp => "SP",
            Uf::Pr => "PR",
        }
    }

    /// Parses a two-letter UF code, case-insensitively
    pub fn parse(s: &str) -> Option<Uf> {
        match s.to_ascii_uppercase().as_str() {
            "SP" => Some(Uf::Sp),
            "PR" => Some(Uf::Pr),
            _ => None,
        }
    }
}

impl std::fmt::Display for Uf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance buckets offered by the UF distance filter
///
/// These are enum tokens on the wire ("ALL", "5K-9K", ...), a different
/// encoding from the plain decimal distances used by `RacesList`/`RacesFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceBucket {
    All,
    FiveToNine,
    TenToTwentyOne,
    Marathon,
}

impl DistanceBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceBucket::All => "ALL",
            DistanceBucket::FiveToNine => "5K-9K",
            DistanceBucket::TenToTwentyOne => "10K-21K",
            DistanceBucket::Marathon => "42K",
        }
    }

    pub fn parse(s: &str) -> Option<DistanceBucket> {
        match s {
            "ALL" => Some(DistanceBucket::All),
            "5K-9K" => Some(DistanceBucket::FiveToNine),
            "10K-21K" => Some(DistanceBucket::TenToTwentyOne),
            "42K" => Some(DistanceBucket::Marathon),
            _ => None,
        }
    }

    /// Inclusive km range a race distance must intersect to match this bucket
    pub fn range(&self) -> (u32, u32) {
        match self {
            DistanceBucket::All => (0, 999),
            DistanceBucket::FiveToNine => (5, 9),
            DistanceBucket::TenToTwentyOne => (10, 21),
            DistanceBucket::Marathon => (42, 42),
        }
    }
}

/// Generic navigation control actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Back,
    Next,
    Close,
}

impl NavAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavAction::Back => "back",
            NavAction::Next => "next",
            NavAction::Close => "close",
        }
    }

    pub fn parse(s: &str) -> Option<NavAction> {
        match s {
            "back" => Some(NavAction::Back),
            "next" => Some(NavAction::Next),
            "close" => Some(NavAction::Close),
            _ => None,
        }
    }
}

/// Every structured interaction an inline button can round-trip
///
/// Immutable value objects; identity is field equality. Built by the helper
/// constructors below or by [`crate::callback::codec::deserialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackData {
    /// Generic back/forward/close control
    Navigation { action: NavAction, target: String },
    /// User picked a region filter
    UfFilter { uf: Uf },
    /// User picked a distance bucket within a region
    DistanceFilter { uf: Uf, distance: DistanceBucket },
    /// Detail view for one race, remembering the origin filter
    RaceDetail { race_id: String, uf: Option<String> },
    /// Geocoordinates view for one race
    RaceLocation { race_id: String, uf: Option<String> },
    /// External registration link for one race
    RaceRegistration { race_id: String, uf: Option<String> },
    /// Add one race to the user's favorites
    RaceFavorite { race_id: String },
    /// Remove one race from the user's favorites
    RaceUnfavorite { race_id: String },
    /// Detail view entered from the general list
    RaceDetails { race_id: String, source: Option<String> },
    /// General list view, optionally pre-filtered by a numeric distance
    RacesList { distance: Option<u32> },
    /// List only favorited races
    RacesListFavorite,
    /// Filter the general list by a numeric distance
    RacesFilter { distance: u32 },
}

impl CallbackData {
    /// The discriminant tag, used for logging and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            CallbackData::Navigation { .. } => "navigation",
            CallbackData::UfFilter { .. } => "uf_filter",
            CallbackData::DistanceFilter { .. } => "distance_filter",
            CallbackData::RaceDetail { .. } => "race_detail",
            CallbackData::RaceLocation { .. } => "race_location",
            CallbackData::RaceRegistration { .. } => "race_registration",
            CallbackData::RaceFavorite { .. } => "race_favorite",
            CallbackData::RaceUnfavorite { .. } => "race_unfavorite",
            CallbackData::RaceDetails { .. } => "race_details",
            CallbackData::RacesList { .. } => "races_list",
            CallbackData::RacesListFavorite => "races_list_favorite",
            CallbackData::RacesFilter { .. } => "races_filter",
        }
    }

    pub fn navigation(action: NavAction, target: impl Into<String>) -> Self {
        CallbackData::Navigation {
            action,
            target: target.into(),
        }
    }

    pub fn uf_filter(uf: Uf) -> Self {
        CallbackData::UfFilter { uf }
    }

    pub fn distance_filter(uf: Uf, distance: DistanceBucket) -> Self {
        CallbackData::DistanceFilter { uf, distance }
    }

    pub fn race_detail(race_id: impl Into<String>, uf: Option<&str>) -> Self {
        CallbackData::RaceDetail {
            race_id: race_id.into(),
            uf: uf.map(str::to_string),
        }
    }

    pub fn race_location(race_id: impl Into<String>, uf: Option<&str>) -> Self {
        CallbackData::RaceLocation {
            race_id: race_id.into(),
            uf: uf.map(str::to_string),
        }
    }

    pub fn race_registration(race_id: impl Into<String>, uf: Option<&str>) -> Self {
        CallbackData::RaceRegistration {
            race_id: race_id.into(),
            uf: uf.map(str::to_string),
        }
    }

    pub fn race_favorite(race_id: impl Into<String>) -> Self {
        CallbackData::RaceFavorite {
            race_id: race_id.into(),
        }
    }

    pub fn race_unfavorite(race_id: impl Into<String>) -> Self {
        CallbackData::RaceUnfavorite {
            race_id: race_id.into(),
        }
    }

    pub fn race_details(race_id: impl Into<String>, source: Option<&str>) -> Self {
        CallbackData::RaceDetails {
            race_id: race_id.into(),
            source: source.map(str::to_string),
        }
    }

    pub fn races_list(distance: Option<u32>) -> Self {
        CallbackData::RacesList { distance }
    }

    pub fn races_list_favorite() -> Self {
        CallbackData::RacesListFavorite
    }

    pub fn races_filter(distance: u32) -> Self {
        CallbackData::RacesFilter { distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uf_parse_is_case_insensitive() {
        assert_eq!(Uf::parse("sp"), Some(Uf::Sp));
        assert_eq!(Uf::parse("PR"), Some(Uf::Pr));
        assert_eq!(Uf::parse("RJ"), None);
    }

    #[test]
    fn test_bucket_ranges() {
        assert_eq!(DistanceBucket::FiveToNine.range(), (5, 9));
        assert_eq!(DistanceBucket::TenToTwentyOne.range(), (10, 21));
        assert_eq!(DistanceBucket::Marathon.range(), (42, 42));
        let (lo, hi) = DistanceBucket::All.range();
        assert!(lo == 0 && hi >= 100);
    }

    #[test]
    fn test_bucket_tokens_round_trip() {
        for bucket in [
            DistanceBucket::All,
            DistanceBucket::FiveToNine,
            DistanceBucket::TenToTwentyOne,
            DistanceBucket::Marathon,
        ] {
            assert_eq!(DistanceBucket::parse(bucket.as_str()), Some(bucket));
        }
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(CallbackData::races_list_favorite().kind(), "races_list_favorite");
        assert_eq!(CallbackData::race_favorite("abc").kind(), "race_favorite");
    }
}
