// TheSportsDB API response types.
// Defines structs for deserializing league and season responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A league from the all-leagues catalog.
///
/// Serialized back under the upstream field names so cached payloads keep
/// the API's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    #[serde(rename = "idLeague")]
    pub id: String,
    #[serde(rename = "strLeague", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "strLeagueAlternate", default)]
    pub alternate_name: Option<String>,
    #[serde(rename = "strSport", default, deserialize_with = "null_as_default")]
    pub sport: String,
}

impl League {
    /// Alternate name for display; blank values count as absent.
    pub fn alternate_display(&self) -> &str {
        match self.alternate_name.as_deref().map(str::trim) {
            Some(alt) if !alt.is_empty() => alt,
            _ => "N/A",
        }
    }
}

/// One season of a league, as returned by the seasons search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "strBadge", default)]
    pub badge: Option<String>,
}

/// Response wrapper for `all_leagues.php`.
#[derive(Debug, Default, Deserialize)]
pub struct LeaguesResponse {
    #[serde(default)]
    pub leagues: Option<Vec<League>>,
}

/// Response wrapper for `search_all_seasons.php`.
#[derive(Debug, Default, Deserialize)]
pub struct SeasonsResponse {
    #[serde(default)]
    pub seasons: Option<Vec<Season>>,
}

impl SeasonsResponse {
    /// Badge of the first season in upstream order, if any.
    pub fn first_badge(self) -> Option<String> {
        self.seasons?
            .into_iter()
            .next()
            .and_then(|season| season.badge)
            .filter(|badge| !badge.trim().is_empty())
    }
}
