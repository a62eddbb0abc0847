//! Project detail modal

use super::dialog::{content_width, render_dialog, DialogConfig};
use crate::content::Project;
use crate::ui::sections::tech_badges;
use crate::ui::text::{bullet, paragraph};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Widest the modal grows on large terminals
const MODAL_MAX_WIDTH: u16 = 80;

fn subheading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Body lines of the modal at `width` columns
pub fn modal_body(project: &Project, width: u16) -> Vec<Line<'static>> {
    let mut body = paragraph(
        project.tagline,
        width,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC),
    );

    body.push(Line::default());
    body.push(subheading("About"));
    body.extend(paragraph(
        project.short_description,
        width,
        Style::default().fg(Color::Gray),
    ));

    body.push(Line::default());
    body.push(subheading("Tech Stack"));
    body.push(tech_badges(project.tech_stack));

    body.push(Line::default());
    body.push(subheading("Key Features"));
    for feature in project.key_features {
        body.extend(bullet("✓", feature, width, Style::default().fg(Color::Gray)));
    }

    if !project.screenshots.is_empty() {
        body.push(Line::default());
        body.push(subheading("Screenshots"));
        for (i, screenshot) in project.screenshots.iter().enumerate() {
            body.push(Line::from(Span::styled(
                format!("  {}. {screenshot}", i + 1),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    body.push(Line::default());
    body.push(Line::from(vec![
        Span::styled("View on GitHub ", Style::default().fg(Color::DarkGray)),
        Span::styled(project.github, Style::default().fg(Color::Blue)),
    ]));
    body.push(Line::from(vec![
        Span::styled("Live Demo      ", Style::default().fg(Color::DarkGray)),
        Span::styled(project.demo, Style::default().fg(Color::Blue)),
    ]));

    body
}

/// Upper bound for the modal scroll offset on a screen `screen_width` wide
pub fn scroll_limit(project: &Project, screen_width: u16) -> u16 {
    let width = content_width(MODAL_MAX_WIDTH, screen_width);
    // Title and blank line sit above the body
    (modal_body(project, width).len() as u16).saturating_add(2)
}

/// Draw the modal for `project` over the page
pub fn draw(frame: &mut Frame, project: &Project, scroll: u16) {
    let width = content_width(MODAL_MAX_WIDTH, frame.area().width);
    let key = Style::default().fg(Color::Cyan);
    let muted = Style::default().fg(Color::DarkGray);

    render_dialog(
        frame,
        DialogConfig {
            title: project.name,
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            body: modal_body(project, width),
            hint: Some(vec![
                Span::styled("g", key),
                Span::styled(":copy github  ", muted),
                Span::styled("d", key),
                Span::styled(":copy demo  ", muted),
                Span::styled("j/k", key),
                Span::styled(":scroll  ", muted),
                Span::styled("Esc", key),
                Span::styled(":close", muted),
            ]),
            max_width: MODAL_MAX_WIDTH,
            scroll,
        },
    );
}
