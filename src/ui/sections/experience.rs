use crate::content::EXPERIENCE;
use crate::ui::page::{Element, PageContext};
use crate::ui::text::{bullet, heading};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn build(ctx: &PageContext) -> Vec<Element> {
    let mut elements = vec![
        Element::new(100, heading("Professional Experience", ctx.width)),
        Element::gap(1),
    ];

    for (i, exp) in EXPERIENCE.iter().enumerate() {
        let mut title = vec![
            Span::styled("● ", Style::default().fg(Color::Cyan)),
            Span::styled(
                exp.role,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if exp.current {
            title.push(Span::raw(" "));
            title.push(Span::styled(
                " Current ",
                Style::default().fg(Color::Black).bg(Color::Green),
            ));
        }

        let mut lines = vec![
            Line::from(title),
            Line::from(vec![
                Span::styled("│ ", Style::default().fg(Color::Cyan)),
                Span::styled(exp.company, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" · {}", exp.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        for achievement in exp.achievements {
            lines.extend(bullet(
                "│  ▸",
                achievement,
                ctx.width,
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::default());

        elements.push(Element::new((300 + i as u64 * 100).min(500), lines));
    }

    elements
}
