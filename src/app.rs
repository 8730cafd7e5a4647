// App state and main event loop.
// Dispatches keyboard input, spawns fetch tasks, and applies their results to the view.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::cache::CacheStore;
use crate::sportsdb::{self, League, SportsDbClient};
use crate::state::{BadgeTicket, LeaguesViewState};
use crate::ui::{self, modal::ModalAction};

/// Timeout for polling terminal events.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Capacity of the fetch result channel.
const CHANNEL_BUFFER_SIZE: usize = 16;

/// Completed fetch, sent from a background task to the UI loop.
#[derive(Debug)]
pub enum FetchResult {
    Leagues(Option<Vec<League>>),
    Badge {
        ticket: BadgeTicket,
        image_url: Option<String>,
    },
}

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Main application state.
pub struct App {
    pub view: LeaguesViewState,
    pub input_mode: InputMode,
    /// Search text being edited; applied to the filter on Enter.
    pub search_draft: String,
    pub show_help: bool,
    pub should_quit: bool,
    client: SportsDbClient,
    cache: CacheStore,
    result_tx: mpsc::Sender<FetchResult>,
    result_rx: mpsc::Receiver<FetchResult>,
}

impl App {
    pub fn new(client: SportsDbClient, cache: CacheStore) -> Self {
        let (result_tx, result_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self {
            view: LeaguesViewState::new(),
            input_mode: InputMode::Normal,
            search_draft: String::new(),
            show_help: false,
            should_quit: false,
            client,
            cache,
            result_tx,
            result_rx,
        }
    }

    /// Kick off the initial league load. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        if !self.view.begin_loading() {
            return;
        }

        let client = self.client.clone();
        let cache = self.cache.clone();
        let tx = self.result_tx.clone();
        tokio::spawn(async move {
            let leagues = sportsdb::load_leagues(&client, &cache).await;
            send_result(&tx, FetchResult::Leagues(leagues)).await;
        });
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.start();
        while !self.should_quit {
            self.drain_results();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        info!("Exiting");
        Ok(())
    }

    /// Handle keyboard and other events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key);
        }
        Ok(())
    }

    /// Apply every fetch result that has arrived.
    pub fn drain_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.apply_result(result);
        }
    }

    fn apply_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Leagues(leagues) => {
                self.view.finish_loading(leagues);
            }
            FetchResult::Badge { ticket, image_url } => {
                self.view.finish_badge(&ticket, image_url);
            }
        }
    }

    /// Route one key press according to what is on screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.view.phase().is_modal_open() {
            if let Some(ModalAction::Close) = ui::modal::modal_action(&key) {
                self.view.close_modal();
            }
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('/') => {
                self.search_draft = self.view.criteria().name_query.clone();
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('s') => self.view.next_sport(),
            KeyCode::Char('S') => self.view.prev_sport(),
            KeyCode::Down | KeyCode::Char('j') => self.view.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.view.select_prev(),
            KeyCode::PageDown => self.view.page_down(),
            KeyCode::PageUp => self.view.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.view.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.view.select_last(),
            KeyCode::Enter => self.request_badge(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let query = std::mem::take(&mut self.search_draft);
                debug!(query = %query, "Search applied");
                self.view.set_name_query(query);
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                self.search_draft.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.search_draft.pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_draft.clear();
            }
            KeyCode::Char(c) => self.search_draft.push(c),
            _ => {}
        }
    }

    /// Start a badge lookup for the highlighted league.
    fn request_badge(&mut self) {
        let Some(ticket) = self.view.select_highlighted() else {
            return;
        };

        let client = self.client.clone();
        let tx = self.result_tx.clone();
        tokio::spawn(async move {
            let image_url = sportsdb::load_season_badge(&client, &ticket.league_id).await;
            send_result(&tx, FetchResult::Badge { ticket, image_url }).await;
        });
    }
}

/// Send a fetch result, logging if the UI side has gone away.
async fn send_result(tx: &mpsc::Sender<FetchResult>, result: FetchResult) {
    if let Err(e) = tx.send(result).await {
        error!(error = %e, "Failed to send fetch result - channel closed");
    }
}
