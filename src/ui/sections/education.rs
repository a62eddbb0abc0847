use crate::content::EDUCATION;
use crate::ui::page::{Element, PageContext};
use crate::ui::text::heading;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn build(ctx: &PageContext) -> Vec<Element> {
    let mut elements = vec![
        Element::new(100, heading("Education", ctx.width)),
        Element::gap(1),
    ];

    for (i, edu) in EDUCATION.iter().enumerate() {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("◆ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    edu.degree,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {}", edu.institution),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!("  {}", edu.location),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        if !edu.year.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", edu.year),
                Style::default().fg(Color::Cyan),
            )));
        }
        lines.push(Line::default());

        elements.push(Element::new((300 + i as u64 * 100).min(500), lines));
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, ContactForm};
    use crate::ui::text::line_text;

    #[test]
    fn test_year_only_when_present() {
        let state = AppState::default();
        let form = ContactForm::new();
        let elements = build(&PageContext::new(&state, &form, 80));

        // Heading, gap, then one element per entry
        let entries = &elements[2..];
        assert_eq!(entries.len(), EDUCATION.len());
        assert!(entries[0].lines.iter().any(|l| line_text(l).trim() == "Recent"));
        assert_eq!(entries[1].lines.len(), 4);
    }
}
