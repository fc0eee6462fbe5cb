//! Compact wire codec for [`CallbackData`]
//!
//! Telegram round-trips inline-button payloads as opaque strings of at most
//! 64 bytes, so every variant serializes to a short `:`-delimited form with a
//! fixed prefix token instead of its full type tag. Field values never contain
//! `:` (race ids are backend-generated opaque ids); anyone feeding
//! user-controlled ids through this codec must escape them first.
//!
//! Serialization is deterministic and `deserialize(serialize(x)) == x` for
//! every constructible value. Absent optional trailing fields are omitted from
//! the wire form entirely, never encoded as empty segments.

use thiserror::Error;

use super::data::{CallbackData, DistanceBucket, NavAction, Uf};

/// Hard budget imposed by the platform's button-payload limit, in UTF-8 bytes
pub const MAX_CALLBACK_DATA_BYTES: usize = 64;

/// Errors produced while decoding a callback wire string
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The prefix token matched no known variant
    #[error("prefixo de callback não reconhecido: {0}")]
    UnknownPrefix(String),

    /// A positional field was missing or failed validation
    #[error("campo inválido em callback {prefix}: {field}")]
    InvalidField {
        prefix: &'static str,
        field: &'static str,
    },
}

/// Serializes callback data to its compact wire form
///
/// Deterministic: the same value always produces the same string. The closed
/// enum makes an unknown variant unrepresentable, so unlike the wire-decoding
/// direction this cannot fail.
pub fn serialize(data: &CallbackData) -> String {
    match data {
        // Navigation always carries the target position, even when empty
        CallbackData::Navigation { action, target } => format!("nav:{}:{}", action.as_str(), target),
        CallbackData::UfFilter { uf } => format!("uf:{}", uf.as_str()),
        CallbackData::DistanceFilter { uf, distance } => {
            format!("dist:{}:{}", uf.as_str(), distance.as_str())
        }
        CallbackData::RaceDetail { race_id, uf } => with_optional("race", race_id, uf.as_deref()),
        CallbackData::RaceLocation { race_id, uf } => with_optional("location", race_id, uf.as_deref()),
        CallbackData::RaceRegistration { race_id, uf } => {
            with_optional("registration", race_id, uf.as_deref())
        }
        CallbackData::RaceFavorite { race_id } => format!("fav:{}", race_id),
        CallbackData::RaceUnfavorite { race_id } => format!("unfav:{}", race_id),
        CallbackData::RaceDetails { race_id, source } => {
            with_optional("details", race_id, source.as_deref())
        }
        CallbackData::RacesList { distance } => match distance {
            Some(d) => format!("list:{}", d),
            None => "list".to_string(),
        },
        CallbackData::RacesListFavorite => "listfav".to_string(),
        CallbackData::RacesFilter { distance } => format!("filter:{}", distance),
    }
}

/// `prefix:id` or `prefix:id:tail` when the optional trailing field is present
fn with_optional(prefix: &str, id: &str, tail: Option<&str>) -> String {
    match tail {
        Some(tail) => format!("{}:{}:{}", prefix, id, tail),
        None => format!("{}:{}", prefix, id),
    }
}

/// Reconstructs callback data from its wire form
///
/// Total over well-formed inputs of the known variants; fails with
/// [`DecodeError::UnknownPrefix`] on anything else. Missing optional trailing
/// segments decode to `None` (or the empty navigation target); malformed
/// required fields fail rather than silently coerce.
pub fn deserialize(serialized: &str) -> Result<CallbackData, DecodeError> {
    let mut split = serialized.split(':');
    let prefix = split.next().unwrap_or("");
    let parts: Vec<&str> = split.collect();

    match prefix {
        "nav" => {
            let action = parts
                .first()
                .and_then(|s| NavAction::parse(s))
                .ok_or(DecodeError::InvalidField {
                    prefix: "nav",
                    field: "action",
                })?;
            let target = parts.get(1).copied().unwrap_or("").to_string();
            Ok(CallbackData::Navigation { action, target })
        }
        "uf" => {
            let uf = required_uf(&parts, "uf")?;
            Ok(CallbackData::UfFilter { uf })
        }
        "dist" => {
            let uf = required_uf(&parts, "dist")?;
            let distance = parts
                .get(1)
                .and_then(|s| DistanceBucket::parse(s))
                .ok_or(DecodeError::InvalidField {
                    prefix: "dist",
                    field: "distance",
                })?;
            Ok(CallbackData::DistanceFilter { uf, distance })
        }
        "race" => {
            let (race_id, uf) = id_with_optional(&parts, "race")?;
            Ok(CallbackData::RaceDetail { race_id, uf })
        }
        "location" => {
            let (race_id, uf) = id_with_optional(&parts, "location")?;
            Ok(CallbackData::RaceLocation { race_id, uf })
        }
        "registration" => {
            let (race_id, uf) = id_with_optional(&parts, "registration")?;
            Ok(CallbackData::RaceRegistration { race_id, uf })
        }
        "fav" => Ok(CallbackData::RaceFavorite {
            race_id: required_id(&parts, "fav")?,
        }),
        "unfav" => Ok(CallbackData::RaceUnfavorite {
            race_id: required_id(&parts, "unfav")?,
        }),
        "details" => {
            let (race_id, source) = id_with_optional(&parts, "details")?;
            Ok(CallbackData::RaceDetails { race_id, source })
        }
        "list" => {
            let distance = match parts.first().copied().filter(|s| !s.is_empty()) {
                Some(raw) => Some(raw.parse::<u32>().map_err(|_| DecodeError::InvalidField {
                    prefix: "list",
                    field: "distance",
                })?),
                None => None,
            };
            Ok(CallbackData::RacesList { distance })
        }
        "listfav" => Ok(CallbackData::RacesListFavorite),
        "filter" => {
            let distance = parts
                .first()
                .and_then(|s| s.parse::<u32>().ok())
                .ok_or(DecodeError::InvalidField {
                    prefix: "filter",
                    field: "distance",
                })?;
            Ok(CallbackData::RacesFilter { distance })
        }
        other => Err(DecodeError::UnknownPrefix(other.to_string())),
    }
}

fn required_id(parts: &[&str], prefix: &'static str) -> Result<String, DecodeError> {
    parts
        .first()
        .copied()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(DecodeError::InvalidField { prefix, field: "raceId" })
}

fn required_uf(parts: &[&str], prefix: &'static str) -> Result<Uf, DecodeError> {
    parts
        .first()
        .and_then(|s| Uf::parse(s))
        .ok_or(DecodeError::InvalidField { prefix, field: "uf" })
}

/// Required id in position 0, optional non-empty tail in position 1
fn id_with_optional(
    parts: &[&str],
    prefix: &'static str,
) -> Result<(String, Option<String>), DecodeError> {
    let id = required_id(parts, prefix)?;
    let tail = parts
        .get(1)
        .copied()
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Ok((id, tail))
}

/// UTF-8 byte length of the serialized form
pub fn get_size(data: &CallbackData) -> usize {
    serialize(data).len()
}

/// True when the serialized form fits the platform's 64-byte budget
pub fn validate_size(data: &CallbackData) -> bool {
    get_size(data) <= MAX_CALLBACK_DATA_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// One constructible value per variant, with realistic field lengths
    fn all_variants() -> Vec<CallbackData> {
        vec![
            CallbackData::navigation(NavAction::Back, "home"),
            CallbackData::navigation(NavAction::Close, ""),
            CallbackData::uf_filter(Uf::Sp),
            CallbackData::distance_filter(Uf::Pr, DistanceBucket::FiveToNine),
            CallbackData::race_detail("665f1a2b3c4d5e6f70818293", Some("SP")),
            CallbackData::race_detail("665f1a2b3c4d5e6f70818293", None),
            CallbackData::race_location("665f1a2b3c4d5e6f70818293", Some("PR")),
            CallbackData::race_registration("665f1a2b3c4d5e6f70818293", None),
            CallbackData::race_favorite("665f1a2b3c4d5e6f70818293"),
            CallbackData::race_unfavorite("665f1a2b3c4d5e6f70818293"),
            CallbackData::race_details("665f1a2b3c4d5e6f70818293", Some("favorites")),
            CallbackData::races_list(None),
            CallbackData::races_list(Some(10)),
            CallbackData::races_list_favorite(),
            CallbackData::races_filter(42),
        ]
    }

    #[test]
    fn test_round_trip_every_variant() {
        for data in all_variants() {
            let wire = serialize(&data);
            let decoded = deserialize(&wire).unwrap_or_else(|e| panic!("{}: {:?}", wire, e));
            assert_eq!(decoded, data, "round trip failed for {}", wire);
        }
    }

    #[test]
    fn test_concrete_wire_forms() {
        assert_eq!(
            serialize(&CallbackData::navigation(NavAction::Back, "home")),
            "nav:back:home"
        );
        assert_eq!(serialize(&CallbackData::uf_filter(Uf::Sp)), "uf:SP");
        assert_eq!(
            serialize(&CallbackData::distance_filter(Uf::Sp, DistanceBucket::TenToTwentyOne)),
            "dist:SP:10K-21K"
        );
        assert_eq!(
            serialize(&CallbackData::race_detail("abc123", Some("PR"))),
            "race:abc123:PR"
        );
        assert_eq!(serialize(&CallbackData::race_detail("abc123", None)), "race:abc123");
        assert_eq!(serialize(&CallbackData::races_list(None)), "list");
        assert_eq!(serialize(&CallbackData::races_list(Some(5))), "list:5");
        assert_eq!(serialize(&CallbackData::races_list_favorite()), "listfav");
        assert_eq!(serialize(&CallbackData::races_filter(21)), "filter:21");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let data = CallbackData::race_registration("665f1a2b3c4d5e6f70818293", Some("SP"));
        assert_eq!(serialize(&data), serialize(&data.clone()));
    }

    #[test]
    fn test_unknown_prefix_is_rejected() {
        assert_eq!(
            deserialize("unknown:data"),
            Err(DecodeError::UnknownPrefix("unknown".to_string()))
        );
        assert_eq!(
            deserialize("garbage"),
            Err(DecodeError::UnknownPrefix("garbage".to_string()))
        );
        assert_eq!(deserialize(""), Err(DecodeError::UnknownPrefix(String::new())));
    }

    #[test]
    fn test_missing_required_fields_fail() {
        assert!(matches!(deserialize("fav"), Err(DecodeError::InvalidField { .. })));
        assert!(matches!(deserialize("race:"), Err(DecodeError::InvalidField { .. })));
        assert!(matches!(deserialize("uf:RJ"), Err(DecodeError::InvalidField { .. })));
        assert!(matches!(deserialize("dist:SP:7K"), Err(DecodeError::InvalidField { .. })));
        assert!(matches!(deserialize("filter"), Err(DecodeError::InvalidField { .. })));
        assert!(matches!(deserialize("list:abc"), Err(DecodeError::InvalidField { .. })));
        assert!(matches!(deserialize("nav:sideways"), Err(DecodeError::InvalidField { .. })));
    }

    #[test]
    fn test_optional_trailing_fields_default_to_absent() {
        assert_eq!(
            deserialize("race:abc123").unwrap(),
            CallbackData::race_detail("abc123", None)
        );
        // An explicitly empty trailing segment also decodes to absent
        assert_eq!(
            deserialize("race:abc123:").unwrap(),
            CallbackData::race_detail("abc123", None)
        );
        assert_eq!(deserialize("list").unwrap(), CallbackData::races_list(None));
        assert_eq!(deserialize("list:").unwrap(), CallbackData::races_list(None));
        // Navigation's target is semantically "empty string", not absent
        assert_eq!(
            deserialize("nav:close").unwrap(),
            CallbackData::navigation(NavAction::Close, "")
        );
    }

    #[test]
    fn test_size_invariant_with_realistic_ids() {
        // 24-char ids are the typical backend id length
        for data in all_variants() {
            assert!(
                validate_size(&data),
                "{} exceeds {} bytes ({})",
                serialize(&data),
                MAX_CALLBACK_DATA_BYTES,
                get_size(&data)
            );
        }
        // Worst case of the longest prefix with id and UF still fits
        let worst = CallbackData::race_registration("x".repeat(24), Some("SP"));
        assert!(get_size(&worst) <= MAX_CALLBACK_DATA_BYTES);
    }

    #[test]
    fn test_size_fails_when_artificially_exceeded() {
        let oversized = CallbackData::race_detail("x".repeat(80), None);
        assert!(!validate_size(&oversized));
        assert_eq!(get_size(&oversized), "race:".len() + 80);
    }

    #[test]
    fn test_get_size_counts_utf8_bytes() {
        // Multi-byte target characters count as bytes, not chars
        let data = CallbackData::navigation(NavAction::Back, "memória");
        assert_eq!(get_size(&data), "nav:back:".len() + "memória".len());
        assert!("memória".len() > "memória".chars().count());
    }
}
