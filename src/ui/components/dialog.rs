//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Pre-wrapped body lines
    pub body: Vec<Line<'a>>,
    /// Hint text pinned to the bottom (e.g., "Esc close")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
    /// Rows of the body scrolled out of view
    pub scroll: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            body: Vec::new(),
            hint: None,
            max_width: 60,
            scroll: 0,
        }
    }
}

/// Inner text width available to a dialog of `max_width` on a screen of
/// `screen_width` columns
pub fn content_width(max_width: u16, screen_width: u16) -> u16 {
    // 2 borders + 2 columns padding each side
    max_width.min(screen_width).saturating_sub(6).max(1)
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let body_width = content_width(config.max_width, area.width);
    let dialog_width = (body_width + 6).min(area.width);

    // Height: title + blank + body + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let wanted = 2 + config.body.len() as u16 + hint_lines + 2;
    let dialog_height = wanted.max(5).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let padded = Rect {
        x: inner.x + 2,
        width: inner.width.saturating_sub(4),
        ..inner
    };

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    content.extend(config.body);

    // The hint stays put while the body scrolls
    let (body_area, hint_area) = match config.hint {
        Some(_) if padded.height > hint_lines => (
            Rect {
                height: padded.height - hint_lines,
                ..padded
            },
            Some(Rect {
                y: padded.y + padded.height - 1,
                height: 1,
                ..padded
            }),
        ),
        _ => (padded, None),
    };

    let max_scroll = (content.len() as u16).saturating_sub(body_area.height);
    let paragraph = Paragraph::new(content).scroll((config.scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, body_area);

    if let (Some(hint_spans), Some(hint_area)) = (config.hint, hint_area) {
        frame.render_widget(Paragraph::new(Line::from(hint_spans)), hint_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_title_body_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        terminal
            .draw(|frame| {
                render_dialog(
                    frame,
                    DialogConfig {
                        title: "Soultrps",
                        body: vec![Line::from("A wellness marketplace")],
                        hint: Some(vec![Span::raw("Esc close")]),
                        max_width: 40,
                        ..Default::default()
                    },
                )
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Soultrps"));
        assert!(text.contains("A wellness marketplace"));
        assert!(text.contains("Esc close"));
    }

    #[test]
    fn test_scroll_hides_leading_rows() {
        let body: Vec<Line> = (0..30).map(|i| Line::from(format!("row {i:02}"))).collect();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| {
                render_dialog(
                    frame,
                    DialogConfig {
                        title: "Long",
                        body,
                        scroll: 5,
                        ..Default::default()
                    },
                )
            })
            .unwrap();

        let text = screen_text(&terminal);
        // Title and blank line scroll away first, then rows 00..02
        assert!(!text.contains("row 02"));
        assert!(text.contains("row 03"));
    }

    #[test]
    fn test_content_width_respects_screen() {
        assert_eq!(content_width(60, 100), 54);
        assert_eq!(content_width(60, 20), 14);
        assert_eq!(content_width(60, 2), 1);
    }
}
