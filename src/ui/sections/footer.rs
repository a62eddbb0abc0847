use crate::content::PERSONAL_INFO;
use crate::ui::page::{Element, PageContext};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Copyright notice for `year`
pub fn copyright(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PERSONAL_INFO.name)
}

pub fn build(ctx: &PageContext) -> Vec<Element> {
    let muted = Style::default().fg(Color::DarkGray);
    let link = Style::default().fg(Color::Gray);

    vec![Element::new(
        0,
        vec![
            Line::from(Span::styled("─".repeat(ctx.width as usize), muted)),
            Line::from(Span::styled(copyright(ctx.year), link)).centered(),
            Line::from(vec![
                Span::styled("Built with ", muted),
                Span::styled("♥", Style::default().fg(Color::Red)),
                Span::styled(" using Rust & ratatui", muted),
            ])
            .centered(),
            Line::from(vec![
                Span::styled("1", Style::default().fg(Color::Cyan)),
                Span::styled(" Home   ", link),
                Span::styled("4", Style::default().fg(Color::Cyan)),
                Span::styled(" Projects   ", link),
                Span::styled("7", Style::default().fg(Color::Cyan)),
                Span::styled(" Contact", link),
            ])
            .centered(),
            Line::from(Span::styled("t ↑ Back to top", muted)).centered(),
        ],
    )]
}
