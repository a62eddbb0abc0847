//! Skill categories with five-step level meters

use crate::content::{Skill, SKILL_CATEGORIES};
use crate::ui::page::{Element, PageContext};
use crate::ui::text::{heading, paragraph};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of the skill name column
const NAME_WIDTH: usize = 16;

pub fn build(ctx: &PageContext) -> Vec<Element> {
    let mut elements = vec![
        Element::new(100, heading("Technical Arsenal", ctx.width)),
        Element::gap(1),
    ];

    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
        let mut lines = vec![Line::from(Span::styled(
            category.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(category.skills.iter().map(skill_line));
        lines.push(Line::default());
        elements.push(Element::new(200 + i as u64 * 100, lines));
    }

    let cloud = SKILL_CATEGORIES
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| s.name))
        .collect::<Vec<_>>()
        .join(" · ");
    let mut cloud_lines = vec![Line::from(Span::styled(
        "Complete Tech Stack",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    cloud_lines.extend(paragraph(&cloud, ctx.width, Style::default().fg(Color::Cyan)));
    elements.push(Element::new(500, cloud_lines));

    elements
}

/// Filled dots for each 20 points of level
fn meter(level: u8) -> String {
    (1..=5u16)
        .map(|step| if level as u16 >= step * 20 { '●' } else { '○' })
        .collect()
}

fn skill_line(skill: &Skill) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<width$}", skill.name, width = NAME_WIDTH),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(meter(skill.level), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {:>3}%", skill.level),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
