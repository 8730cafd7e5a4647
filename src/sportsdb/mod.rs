// TheSportsDB API module.
// Provides the client, response types, and cached fetchers used by the UI.

pub mod client;
pub mod endpoints;
pub mod fetch;
pub mod types;

pub use client::SportsDbClient;
pub use fetch::{load_leagues, load_season_badge};
pub use types::{League, Season};
