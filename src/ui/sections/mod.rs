//! Per-section page content

mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

pub use projects::tech_badges;

use super::page::{Element, PageContext};
use crate::content::{PERSONAL_INFO, PROJECTS, SKILL_CATEGORIES};
use crate::state::Section;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Elements of one section, padded with a blank row above and below
pub fn build(section: Section, ctx: &PageContext) -> Vec<Element> {
    let mut elements = vec![Element::gap(1)];
    elements.extend(match section {
        Section::Hero => hero::build(ctx),
        Section::About => about::build(ctx),
        Section::Skills => skills::build(ctx),
        Section::Projects => projects::build(ctx),
        Section::Experience => experience::build(ctx),
        Section::Education => education::build(ctx),
        Section::Contact => contact::build(ctx),
        Section::Footer => footer::build(ctx),
    });
    elements.push(Element::gap(1));
    elements
}

/// Number of distinct skills across all categories
fn technology_count() -> usize {
    SKILL_CATEGORIES.iter().map(|c| c.skills.len()).sum()
}

/// "value label │ value label" summary row
fn stats_line(labels: [&str; 3]) -> Line<'static> {
    let values = [
        PERSONAL_INFO.experience.to_string(),
        PROJECTS.len().to_string(),
        format!("{}+", technology_count()),
    ];

    let mut spans = Vec::new();
    for (i, (value, label)) in values.into_iter().zip(labels).enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            value,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}
