// Leagues view state management.
// Owns the league set, filter criteria, table selection, and the badge modal state machine.

use ratatui::widgets::TableState;
use tracing::{debug, info};

use crate::sportsdb::League;

use super::filter::{FilterCriteria, LeagueFilter, SportFilter};

/// Rows moved by Page Up / Page Down.
const PAGE_SIZE: usize = 20;

/// Identifies one badge request. Only the most recent ticket may open the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeTicket {
    pub id: u64,
    pub league_id: String,
}

/// Where the view is in its load/select/show cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    BadgeFetching(BadgeTicket),
    ModalOpen,
}

impl ViewPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewPhase::Loading)
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self, ViewPhase::ModalOpen)
    }
}

/// Badge shown by the modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeSelection {
    pub league_id: Option<String>,
    pub image_url: Option<String>,
    pub visible: bool,
}

/// Complete state for the leagues view.
#[derive(Debug, Default)]
pub struct LeaguesViewState {
    phase: ViewPhase,
    leagues: Vec<League>,
    /// Bumped whenever `leagues` is replaced.
    generation: u64,
    criteria: FilterCriteria,
    filter: LeagueFilter,
    /// Selection within the filtered rows.
    pub table_state: TableState,
    badge: BadgeSelection,
    last_ticket: u64,
}

impl LeaguesViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn badge(&self) -> &BadgeSelection {
        &self.badge
    }

    /// Idle -> Loading. Returns false from any other phase.
    pub fn begin_loading(&mut self) -> bool {
        if self.phase != ViewPhase::Idle {
            return false;
        }
        self.phase = ViewPhase::Loading;
        true
    }

    /// Loading -> Loaded. `None` means the fetch failed and the previous set stays.
    pub fn finish_loading(&mut self, leagues: Option<Vec<League>>) -> bool {
        if !self.phase.is_loading() {
            return false;
        }
        if let Some(leagues) = leagues {
            self.leagues = leagues;
            self.generation += 1;
        }
        self.phase = ViewPhase::Loaded;
        self.sync_filter();
        true
    }

    pub fn total(&self) -> usize {
        self.leagues.len()
    }

    pub fn visible_count(&self) -> usize {
        self.filter.len()
    }

    /// Leagues passing the current criteria, in upstream order.
    pub fn visible_leagues(&self) -> impl Iterator<Item = &League> {
        self.filter
            .indices()
            .iter()
            .filter_map(|&i| self.leagues.get(i))
    }

    pub fn league(&self, id: &str) -> Option<&League> {
        self.leagues.iter().find(|league| league.id == id)
    }

    /// Apply a new name query.
    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.criteria.name_query = query.into();
        self.sync_filter();
    }

    pub fn set_sport(&mut self, sport: SportFilter) {
        self.criteria.sport = sport;
        self.sync_filter();
    }

    pub fn next_sport(&mut self) {
        self.set_sport(self.criteria.sport.next());
    }

    pub fn prev_sport(&mut self) {
        self.set_sport(self.criteria.sport.prev());
    }

    /// Refresh the memoized filter and reset the highlight if the rows changed.
    fn sync_filter(&mut self) {
        let changed = self
            .filter
            .refresh(&self.leagues, self.generation, &self.criteria);
        if changed {
            debug!(
                visible = self.filter.len(),
                total = self.leagues.len(),
                "Filter recomputed"
            );
            self.reset_selection();
        }
    }

    fn reset_selection(&mut self) {
        if self.filter.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    /// Select the next row.
    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    /// Select the previous row.
    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    pub fn page_down(&mut self) {
        self.move_selection(PAGE_SIZE as isize);
    }

    pub fn page_up(&mut self) {
        self.move_selection(-(PAGE_SIZE as isize));
    }

    pub fn select_first(&mut self) {
        if !self.filter.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.filter.is_empty() {
            self.table_state.select(Some(self.filter.len() - 1));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.filter.is_empty() {
            return;
        }
        let last = self.filter.len() - 1;
        let i = match self.table_state.selected() {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// League under the highlight.
    pub fn highlighted(&self) -> Option<&League> {
        let row = self.table_state.selected()?;
        let index = *self.filter.indices().get(row)?;
        self.leagues.get(index)
    }

    /// Start a badge lookup for the highlighted row.
    pub fn select_highlighted(&mut self) -> Option<BadgeTicket> {
        let league_id = self.highlighted()?.id.clone();
        self.select_league(&league_id)
    }

    /// Loaded -> BadgeFetching.
    ///
    /// Also accepted while a lookup is pending; the new ticket supersedes the old one.
    pub fn select_league(&mut self, league_id: &str) -> Option<BadgeTicket> {
        if !matches!(self.phase, ViewPhase::Loaded | ViewPhase::BadgeFetching(_)) {
            return None;
        }

        info!("League ID clicked: {}", league_id);
        self.last_ticket += 1;
        let ticket = BadgeTicket {
            id: self.last_ticket,
            league_id: league_id.to_string(),
        };
        self.badge = BadgeSelection {
            league_id: Some(ticket.league_id.clone()),
            image_url: None,
            visible: false,
        };
        self.phase = ViewPhase::BadgeFetching(ticket.clone());
        Some(ticket)
    }

    /// BadgeFetching -> ModalOpen, for the current ticket only.
    ///
    /// Returns false and leaves the state untouched for superseded tickets.
    pub fn finish_badge(&mut self, ticket: &BadgeTicket, image_url: Option<String>) -> bool {
        match &self.phase {
            ViewPhase::BadgeFetching(current) if current == ticket => {}
            _ => {
                debug!(ticket = ticket.id, "Discarding stale badge result");
                return false;
            }
        }

        self.badge = BadgeSelection {
            league_id: Some(ticket.league_id.clone()),
            image_url,
            visible: true,
        };
        self.phase = ViewPhase::ModalOpen;
        true
    }

    /// ModalOpen -> Loaded, clearing the badge. Returns false if no modal was open.
    pub fn close_modal(&mut self) -> bool {
        if !self.phase.is_modal_open() {
            return false;
        }
        self.badge = BadgeSelection::default();
        self.phase = ViewPhase::Loaded;
        true
    }
}
