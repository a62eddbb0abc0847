//! Project cards with a tech-stack filter bar

use crate::content::Project;
use crate::state::{Focus, ProjectsState};
use crate::ui::page::{Element, PageContext};
use crate::ui::text::{boxed, bullet, heading, paragraph};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Features listed on a card; the modal shows all of them
const CARD_FEATURES: usize = 3;

pub fn build(ctx: &PageContext) -> Vec<Element> {
    let projects = &ctx.state.projects;
    let focused = ctx.state.focus == Focus::Projects;

    let mut elements = vec![
        Element::new(100, heading("Featured Projects", ctx.width)),
        Element::gap(1),
        Element::new(200, vec![filter_bar(projects), Line::default()]),
    ];

    let filtered = projects.filtered();
    if filtered.is_empty() {
        elements.push(Element::new(
            300,
            vec![Line::from(Span::styled(
                "No projects found with this technology.",
                Style::default().fg(Color::DarkGray),
            ))
            .centered()],
        ));
        return elements;
    }

    for (i, project) in filtered.into_iter().enumerate() {
        let selected = focused && i == projects.selected;
        let mut lines = card(project, ctx.width, selected);
        lines.push(Line::default());
        elements.push(Element::new((300 + i as u64 * 100).min(500), lines));
    }

    elements
}

fn filter_bar(projects: &ProjectsState) -> Line<'static> {
    let active = projects.active_filter();
    let mut spans = vec![Span::styled("Filter: ", Style::default().fg(Color::DarkGray))];

    for tech in ProjectsState::filters() {
        let label = if tech == "all" { "All Projects" } else { tech };
        let style = if tech == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Tech names as inline badges
pub fn tech_badges(tech_stack: &[&'static str]) -> Line<'static> {
    let mut spans = Vec::new();
    for tech in tech_stack {
        spans.push(Span::styled(
            format!("[{tech}]"),
            Style::default().fg(Color::Magenta),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn card(project: &Project, width: u16, selected: bool) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let border = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut body = paragraph(
        project.tagline,
        inner,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC),
    );
    body.push(Line::default());
    body.extend(paragraph(
        project.short_description,
        inner,
        Style::default().fg(Color::Gray),
    ));
    body.push(Line::default());
    body.push(tech_badges(project.tech_stack));
    body.push(Line::default());
    for feature in project.key_features.iter().take(CARD_FEATURES) {
        body.extend(bullet("•", feature, inner, Style::default().fg(Color::Gray)));
    }
    body.push(Line::default());
    body.push(Line::from(vec![
        Span::styled("Code ", Style::default().fg(Color::DarkGray)),
        Span::styled(project.github, Style::default().fg(Color::Blue)),
    ]));
    body.push(Line::from(vec![
        Span::styled("Live Demo ", Style::default().fg(Color::DarkGray)),
        Span::styled(project.demo, Style::default().fg(Color::Blue)),
    ]));
    if selected {
        body.push(Line::from(Span::styled(
            "Enter: View Details →",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }

    boxed(project.name, body, width, border)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, ContactForm};
    use crate::ui::text::line_text;

    fn text_of(elements: &[Element]) -> String {
        elements
            .iter()
            .flat_map(|e| e.lines.iter().map(line_text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lists_every_project() {
        let state = AppState::default();
        let form = ContactForm::new();
        let text = text_of(&build(&PageContext::new(&state, &form, 80)));

        assert!(text.contains("Soultrps"));
        assert!(text.contains("Printing Pro"));
        assert!(text.contains("All Projects"));
        assert!(!text.contains("View Details"));
    }

    #[test]
    fn test_selected_card_shows_details_hint() {
        let mut state = AppState::default();
        state.focus = Focus::Projects;
        let form = ContactForm::new();
        let text = text_of(&build(&PageContext::new(&state, &form, 80)));

        assert_eq!(text.matches("View Details").count(), 1);
    }

    #[test]
    fn test_card_shows_first_three_features() {
        let project = &crate::content::PROJECTS[0];
        let text: Vec<String> = card(project, 100, false).iter().map(line_text).collect();
        let text = text.join("\n");

        for feature in &project.key_features[..CARD_FEATURES] {
            assert!(text.contains(feature), "missing {feature}");
        }
        assert!(!text.contains(project.key_features[CARD_FEATURES]));
    }
}
