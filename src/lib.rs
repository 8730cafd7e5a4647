//! leaguedex - browse TheSportsDB leagues in the terminal.
//!
//! Lists every league from the public catalog, narrows it by name and sport
//! type, and shows the badge of a league's most recent season in a modal.
//! The catalog response is cached on disk for 60 seconds.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod sportsdb;
pub mod state;
pub mod ui;
