// UI module for rendering the TUI.
// Contains the filter header, league table, status bar, badge modal, and help overlay.

pub mod modal;
mod table;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, InputMode};
use crate::state::{SportFilter, ViewPhase};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + sport selector
            Constraint::Min(1),    // League table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_filter_bar(frame, app, chunks[0]);
    table::render_leagues_table(frame, &mut app.view, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Overlays are rendered last, on top of everything
    let badge = app.view.badge();
    let league_name = badge
        .league_id
        .as_deref()
        .and_then(|id| app.view.league(id))
        .map(|league| league.name.as_str());
    modal::draw_badge_modal(frame, badge, league_name);

    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the search box and sport type selector.
fn draw_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(74)])
        .split(area);

    let searching = app.input_mode == InputMode::Search;
    let search_style = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let search_line = if searching {
        Line::from(vec![
            Span::raw(app.search_draft.as_str()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else if app.view.criteria().name_query.is_empty() {
        Line::from(Span::styled(
            "input league name",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::raw(app.view.criteria().name_query.as_str()))
    };

    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(" Search (/) "),
    );
    frame.render_widget(search, chunks[0]);

    let selected = app.view.criteria().sport;
    let titles: Vec<Line> = SportFilter::ALL
        .iter()
        .map(|sport| Line::from(sport.label()))
        .collect();
    let selected_index = SportFilter::ALL
        .iter()
        .position(|s| *s == selected)
        .unwrap_or(0);

    let sports = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Sport Type (s/S) "),
        )
        .select(selected_index)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw(" │ "));
    frame.render_widget(sports, chunks[1]);
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.input_mode == InputMode::Search {
        vec![
            Span::raw(" ↵ "),
            Span::styled("Search", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Cancel", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^U "),
            Span::styled("Clear", Style::default().fg(Color::DarkGray)),
        ]
    } else if app.view.phase().is_modal_open() {
        vec![
            Span::raw(" Esc "),
            Span::styled("Close", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        let mut hints = vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Badge", Style::default().fg(Color::DarkGray)),
            Span::raw("  / "),
            Span::styled("Search", Style::default().fg(Color::DarkGray)),
            Span::raw("  s "),
            Span::styled("Sport", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ];
        if let ViewPhase::BadgeFetching(ticket) = app.view.phase() {
            hints.push(Span::styled(
                format!("  ⏳ Fetching badge for {}", ticket.league_id),
                Style::default().fg(Color::Yellow),
            ));
        }
        hints
    };

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 50.min(area.width);
    let popup_height = 16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let shortcut = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        shortcut("  ↑/↓ or j/k    ", "Navigate leagues"),
        shortcut("  PgUp/PgDn     ", "Page through leagues"),
        shortcut("  Home/End g/G  ", "Jump to first/last"),
        shortcut("  Enter         ", "Show season badge"),
        shortcut("  /             ", "Search by league name"),
        shortcut("  s / S         ", "Next/previous sport type"),
        shortcut("  Esc           ", "Close badge / cancel search"),
        shortcut("  ?             ", "Show/hide this help"),
        shortcut("  q             ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
