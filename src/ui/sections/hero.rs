//! Landing section: introduction and calls to action

use super::stats_line;
use crate::content::{PERSONAL_INFO, SOCIAL_LINKS};
use crate::ui::page::{Element, PageContext};
use crate::ui::text::paragraph;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn build(ctx: &PageContext) -> Vec<Element> {
    let info = &PERSONAL_INFO;
    let key = Style::default().fg(Color::Black).bg(Color::Cyan);

    let mut tagline = paragraph(
        info.hero_text,
        ctx.width,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC),
    );
    tagline.push(Line::from(Span::styled(
        "─".repeat(info.hero_text.chars().count().min(ctx.width as usize)),
        Style::default().fg(Color::Cyan),
    )));

    let mut socials = Vec::new();
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            socials.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        socials.push(Span::styled(link.name, Style::default().fg(Color::Blue)));
    }

    vec![
        Element::new(
            0,
            vec![Line::from(Span::styled(
                "Welcome to my digital space",
                Style::default().fg(Color::Cyan),
            ))],
        ),
        Element::gap(1),
        Element::new(
            100,
            vec![Line::from(Span::styled(
                info.name,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))],
        ),
        Element::new(
            200,
            vec![
                Line::from(Span::styled(
                    info.title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(info.role, Style::default().fg(Color::Gray))),
            ],
        ),
        Element::gap(1),
        Element::new(300, tagline),
        Element::gap(1),
        Element::new(
            400,
            vec![stats_line(["Experience", "Projects", "Technologies"])],
        ),
        Element::gap(1),
        Element::new(
            500,
            vec![
                Line::from(vec![
                    Span::styled(" p ", key),
                    Span::styled(
                        " View My Work →",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("    "),
                    Span::styled(" c ", key),
                    Span::styled(" Let's Connect", Style::default().fg(Color::White)),
                ]),
                Line::default(),
                Line::from(socials),
            ],
        ),
    ]
}
