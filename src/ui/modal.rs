// Season badge modal.
// Centered overlay showing the badge for the selected league, plus its close gestures.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::state::BadgeSelection;

const MODAL_WIDTH: u16 = 70;
const MODAL_HEIGHT: u16 = 9;

/// What a key press means while the modal is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Close,
}

/// Map a key press to a modal action. One close gesture yields one `Close`.
pub fn modal_action(key: &KeyEvent) -> Option<ModalAction> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
            Some(ModalAction::Close)
        }
        _ => None,
    }
}

/// Rect of the given size centered in `area`, clipped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Draw the badge modal on top of the current view. Draws nothing when hidden.
pub fn draw_badge_modal(frame: &mut Frame, badge: &BadgeSelection, league_name: Option<&str>) {
    if !badge.visible {
        return;
    }

    let modal_area = centered_rect(frame.area(), MODAL_WIDTH, MODAL_HEIGHT);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let title = match league_name {
        Some(name) => format!(" Season Badge - {} ", name),
        None => " Season Badge ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(block.inner(modal_area));

    frame.render_widget(block, modal_area);

    // No badge: the shell still opens, with no image content
    if let Some(url) = &badge.image_url {
        let image = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                url.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(image, chunks[0]);
    }

    let instructions = Line::from(vec![
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Close ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn render(badge: &BadgeSelection, name: Option<&str>) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_badge_modal(frame, badge, name))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_close_gestures() {
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(modal_action(&key), Some(ModalAction::Close));
        }
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(modal_action(&key), None);
    }

    #[test]
    fn test_renders_badge_url() {
        let badge = BadgeSelection {
            league_id: Some("4328".to_string()),
            image_url: Some("https://img/b.png".to_string()),
            visible: true,
        };
        let screen = render(&badge, Some("English Premier League"));
        assert!(screen.contains("Season Badge - English Premier League"));
        assert!(screen.contains("https://img/b.png"));
    }

    #[test]
    fn test_renders_shell_without_image() {
        let badge = BadgeSelection {
            league_id: Some("4328".to_string()),
            image_url: None,
            visible: true,
        };
        let screen = render(&badge, None);
        assert!(screen.contains("Season Badge"));
        assert!(!screen.contains("https://"));
    }

    #[test]
    fn test_hidden_modal_draws_nothing() {
        let screen = render(&BadgeSelection::default(), None);
        assert!(!screen.contains("Season Badge"));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let rect = centered_rect(Rect::new(0, 0, 40, 5), MODAL_WIDTH, MODAL_HEIGHT);
        assert_eq!(rect, Rect::new(0, 0, 40, 5));

        let rect = centered_rect(Rect::new(0, 0, 100, 29), 70, 9);
        assert_eq!(rect, Rect::new(15, 10, 70, 9));
    }
}
