// Fetch boundary for the UI.
// Wraps endpoint calls with caching and turns every failure into a logged "no update".

use tracing::{error, info, warn};

use crate::cache::CacheStore;
use crate::error::Result;

use super::client::SportsDbClient;
use super::types::League;

/// Load the league catalog, serving a fresh cached copy when one exists.
///
/// Returns `None` on any network or parse failure; the caller keeps whatever
/// list it already had.
pub async fn load_leagues(client: &SportsDbClient, cache: &CacheStore) -> Option<Vec<League>> {
    match try_load_leagues(client, cache).await {
        Ok(leagues) => Some(leagues),
        Err(e) => {
            error!(error = %e, "There has been a problem with the leagues fetch");
            None
        }
    }
}

async fn try_load_leagues(client: &SportsDbClient, cache: &CacheStore) -> Result<Vec<League>> {
    let url = client.all_leagues_url();

    match cache.get_fresh::<Vec<League>>(&url) {
        Ok(Some(leagues)) => {
            info!(count = leagues.len(), "Serving leagues from cache");
            return Ok(leagues);
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Ignoring unreadable leagues cache entry"),
    }

    let leagues = client.get_all_leagues().await?;
    info!(count = leagues.len(), "Fetched leagues from network");

    // A write failure only costs a refetch next time
    if let Err(e) = cache.set(&url, &leagues) {
        warn!(error = %e, "Failed to cache leagues");
    }

    Ok(leagues)
}

/// Look up the badge image URL for a league's most recent season.
///
/// No seasons, no badge, and any failure all yield `None`.
pub async fn load_season_badge(client: &SportsDbClient, league_id: &str) -> Option<String> {
    match client.get_season_badge(league_id).await {
        Ok(badge) => badge,
        Err(e) => {
            error!(league_id, error = %e, "There has been a problem with the season badge fetch");
            None
        }
    }
}
