//! Layout components (header navigation, status bar)

use crate::app::App;
use crate::content::PERSONAL_INFO;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Focus, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows taken by the header (nav line + rule)
pub const HEADER_HEIGHT: u16 = 2;

/// Split the screen into header, page and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Page
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the section the viewport is in highlighted
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.state.current_section();

    let mut nav = Vec::new();
    for (i, section) in Section::NAV.iter().enumerate() {
        let is_current = current == Some(*section)
            || (current == Some(Section::Footer) && *section == Section::Contact);
        let label_style = if is_current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        nav.push(Span::styled(
            format!("{}", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
        nav.push(Span::styled(format!(" {}", section.label()), label_style));
        nav.push(Span::raw("  "));
    }

    // Name goes first when there is room for it and the full nav
    let name = format!(" {}   ", PERSONAL_INFO.name);
    let nav_width: usize = nav.iter().map(|s| s.width()).sum();
    let mut spans = Vec::new();
    if nav_width + name.chars().count() <= area.width as usize {
        spans.push(Span::styled(
            name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.extend(nav);

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(
        focus_hints(app.state.focus),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        let color = if msg.is_error {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(&msg.text, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current focus
fn focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Page => "j/k:scroll  1-7:jump  p:projects  c:contact  t:top  q:quit".to_string(),
        Focus::Projects => "←/→:select  f/F:filter  Enter:details  Esc:back".to_string(),
        Focus::Form(_) => format!("Tab:next  {SUBMIT_SHORTCUT}:send  Esc:leave"),
        Focus::Modal => "g/d:copy link  j/k:scroll  Esc:close".to_string(),
    }
}
