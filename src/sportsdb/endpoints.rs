// TheSportsDB endpoint functions.
// Typed methods for the league catalog and season badge lookups.

use reqwest::Url;
use tracing::debug;

use crate::error::{LeaguedexError, Result};

use super::client::SportsDbClient;
use super::types::{League, LeaguesResponse, SeasonsResponse};

impl SportsDbClient {
    /// URL of the full league catalog. Also the cache key for it.
    pub fn all_leagues_url(&self) -> String {
        self.url("/all_leagues.php")
    }

    /// URL of the seasons search for a league, with badges requested.
    pub fn seasons_url(&self, league_id: &str) -> Result<String> {
        let base = self.url("/search_all_seasons.php");
        let url = Url::parse_with_params(&base, &[("badge", "1"), ("id", league_id)])
            .map_err(|e| LeaguedexError::Config(format!("invalid seasons URL {}: {}", base, e)))?;
        Ok(url.into())
    }

    /// Fetch every league, in upstream order. A null collection is empty.
    pub async fn get_all_leagues(&self) -> Result<Vec<League>> {
        let wrapper: LeaguesResponse = self.get_json(&self.all_leagues_url()).await?;
        Ok(wrapper.leagues.unwrap_or_default())
    }

    /// Fetch the badge URL of the first season the API lists for a league.
    pub async fn get_season_badge(&self, league_id: &str) -> Result<Option<String>> {
        let wrapper: SeasonsResponse = self.get_json(&self.seasons_url(league_id)?).await?;
        debug!(
            league_id,
            seasons = wrapper.seasons.as_ref().map_or(0, Vec::len),
            "Seasons response received"
        );
        Ok(wrapper.first_badge())
    }
}
