use super::stats_line;
use crate::content::PERSONAL_INFO;
use crate::ui::page::{Element, PageContext};
use crate::ui::text::{boxed, heading, paragraph};
use ratatui::style::{Color, Style};

pub fn build(ctx: &PageContext) -> Vec<Element> {
    let goal = paragraph(
        PERSONAL_INFO.career_goal,
        ctx.width.saturating_sub(4),
        Style::default().fg(Color::White),
    );

    vec![
        Element::new(100, heading("About Me", ctx.width)),
        Element::gap(1),
        Element::new(
            300,
            paragraph(
                PERSONAL_INFO.about_text,
                ctx.width,
                Style::default().fg(Color::Gray),
            ),
        ),
        Element::gap(1),
        Element::new(
            400,
            boxed(
                "Career Goal",
                goal,
                ctx.width,
                Style::default().fg(Color::Cyan),
            ),
        ),
        Element::gap(1),
        Element::new(
            500,
            vec![stats_line(["Years Experience", "Major Projects", "Technologies"])],
        ),
    ]
}
