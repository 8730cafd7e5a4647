// League table rendering.
// Draws the filtered leagues with loading and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::state::{LeaguesViewState, ViewPhase};

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Leagues "));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Leagues "));
    frame.render_widget(text, area);
}

/// Render the leagues table.
pub fn render_leagues_table(frame: &mut Frame, view: &mut LeaguesViewState, area: Rect) {
    match view.phase() {
        ViewPhase::Idle | ViewPhase::Loading => {
            render_loading(frame, area, "Loading leagues");
            return;
        }
        _ => {}
    }

    if view.visible_count() == 0 {
        let message = if view.total() == 0 {
            "No leagues available"
        } else {
            "No leagues match the current filters"
        };
        render_empty(frame, area, message);
        return;
    }

    let header = Row::new(["League Name", "Alternate League Name", "Sport Type"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = view
        .visible_leagues()
        .map(|league| {
            let alternate = league.alternate_display();
            let alternate_style = if alternate == "N/A" {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(league.name.clone()),
                Cell::from(alternate.to_string()).style(alternate_style),
                Cell::from(league.sport.clone()).style(Style::default().fg(Color::Magenta)),
            ])
        })
        .collect();

    let title = format!(" Leagues ({}/{}) ", view.visible_count(), view.total());

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut view.table_state);
}
