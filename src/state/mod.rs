// State management module.
// Handles league filtering and the leagues view state machine.

pub mod filter;
pub mod leagues;

pub use filter::{FilterCriteria, LeagueFilter, SportFilter, filter_leagues};
pub use leagues::{BadgeSelection, BadgeTicket, LeaguesViewState, ViewPhase};
