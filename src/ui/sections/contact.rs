//! Contact section: the form, its status banners and social links

use crate::content::SOCIAL_LINKS;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ContactForm, FieldName, Focus, SubmissionStatus};
use crate::ui::page::{Element, PageContext};
use crate::ui::text::{boxed, heading, paragraph, wrap_text};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const INTRO: &str = "I'm always open to discussing new projects, creative ideas, or \
                     opportunities to be part of your vision.";

const RESPONSE_NOTE: &str = "I typically respond to messages within 24-48 hours. For urgent \
                             inquiries, please reach out via email or LinkedIn.";

pub fn build(ctx: &PageContext) -> Vec<Element> {
    let mut elements = vec![
        Element::new(100, heading("Get In Touch", ctx.width)),
        Element::new(
            200,
            paragraph(INTRO, ctx.width, Style::default().fg(Color::Gray)),
        ),
        Element::gap(1),
        Element::new(300, form_lines(ctx)),
        Element::gap(1),
    ];

    let mut links = vec![Line::from(Span::styled(
        "Connect With Me",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    for link in SOCIAL_LINKS {
        links.push(Line::from(vec![
            Span::styled(format!("  {:<15}", link.name), Style::default().fg(Color::Cyan)),
            Span::styled(link.display_url(), Style::default().fg(Color::Gray)),
        ]));
    }
    elements.push(Element::new(400, links));
    elements.push(Element::gap(1));

    let mut note = paragraph(
        RESPONSE_NOTE,
        ctx.width.saturating_sub(4),
        Style::default().fg(Color::Gray),
    );
    note.push(Line::default());
    note.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::styled(
            "Available for opportunities",
            Style::default().fg(Color::Gray),
        ),
    ]));
    elements.push(Element::new(
        500,
        boxed(
            "Quick Response",
            note,
            ctx.width,
            Style::default().fg(Color::DarkGray),
        ),
    ));

    elements
}

/// Form slot that has keyboard focus, if any
fn active_slot(focus: Focus) -> Option<usize> {
    match focus {
        Focus::Form(slot) => Some(slot),
        _ => None,
    }
}

fn form_lines(ctx: &PageContext) -> Vec<Line<'static>> {
    let form = ctx.form;
    let active = active_slot(ctx.state.focus);
    let mut lines = Vec::new();

    for (slot, name) in FieldName::ALL.into_iter().enumerate() {
        lines.extend(field_lines(form, name, active == Some(slot), ctx.width));
    }

    lines.extend(submit_button(
        form.can_submit(),
        active == Some(Focus::SUBMIT_BUTTON),
        ctx.spinner,
    ));

    match form.status() {
        SubmissionStatus::Success => {
            lines.push(Line::default());
            lines.extend(banner(
                "✓ Message sent successfully!",
                "Thank you for reaching out. I'll get back to you soon.",
                None,
                Color::Green,
                ctx.width,
            ));
        }
        SubmissionStatus::Error => {
            lines.push(Line::default());
            lines.extend(banner(
                "✗ Something went wrong",
                "Please try again later or reach out via email directly.",
                Some("Esc to dismiss"),
                Color::Red,
                ctx.width,
            ));
        }
        SubmissionStatus::Idle | SubmissionStatus::Submitting => {}
    }

    lines
}

/// Boxed input with its inline error and, for the message, a live count
fn field_lines(
    form: &ContactForm,
    name: FieldName,
    is_active: bool,
    width: u16,
) -> Vec<Line<'static>> {
    let field = form.field(name);
    let error = form.visible_error(name);
    let inner = width.saturating_sub(4) as usize;

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if field.as_text().is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if is_active { "▌" } else { "" };

    // Keep one column free for the cursor
    let max_width = inner.saturating_sub(1);
    let mut body: Vec<Line<'static>> = field
        .display_value()
        .split('\n')
        .flat_map(|line| {
            if line.chars().count() <= max_width {
                vec![line.to_string()]
            } else if field.is_multiline() {
                wrap_text(line, max_width)
            } else {
                vec![clip_to_tail(line, max_width)]
            }
        })
        .map(|line| Line::from(Span::styled(line, value_style)))
        .collect();

    if is_active {
        if field.as_text().is_empty() {
            // Cursor sits before the placeholder
            if let Some(first) = body.first_mut() {
                first
                    .spans
                    .insert(0, Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        } else if let Some(last) = body.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
    }

    let mut lines = boxed(&format!("{} *", field.label()), body, width, border_style);

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        )));
    }
    if name == FieldName::Message {
        lines.push(Line::from(Span::styled(
            format!("  {} characters", form.message_char_count()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

/// Last `max_width` chars of a single-line value, keeping the cursor end in view
fn clip_to_tail(line: &str, max_width: usize) -> String {
    let len = line.chars().count();
    line.chars().skip(len.saturating_sub(max_width)).collect()
}

fn submit_button(enabled: bool, is_selected: bool, spinner: &str) -> Vec<Line<'static>> {
    let submitting = !enabled;
    let label = if submitting {
        format!("{spinner} Sending...")
    } else {
        format!("Send Message ({SUBMIT_SHORTCUT})")
    };

    let border_style = if is_selected && !submitting {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text_style = if submitting {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let width = label.chars().count() as u16 + 4;
    boxed("", vec![Line::from(Span::styled(label, text_style))], width, border_style)
}

fn banner(
    title: &str,
    detail: &str,
    hint: Option<&str>,
    color: Color,
    width: u16,
) -> Vec<Line<'static>> {
    let mut body = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    body.extend(paragraph(
        detail,
        width.saturating_sub(4),
        Style::default().fg(Color::Gray),
    ));
    if let Some(hint) = hint {
        body.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    boxed("", body, width, Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::submit::SubmitError;
    use crate::ui::text::line_text;

    fn form_text(state: &AppState, form: &ContactForm) -> String {
        let ctx = PageContext::new(state, form, 80);
        form_lines(&ctx)
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(FieldName::Name, "Jo");
        form.update_field(FieldName::Email, "jo@x.com");
        form.update_field(FieldName::Message, "This message has twenty chars.");
        form
    }

    mod fields {
        use super::*;

        #[test]
        fn test_placeholders_when_empty() {
            let text = form_text(&AppState::default(), &ContactForm::new());
            assert!(text.contains("Your name"));
            assert!(text.contains("your.email@example.com"));
            assert!(text.contains("0 characters"));
        }

        #[test]
        fn test_errors_hidden_until_touched() {
            let mut form = ContactForm::new();
            let text = form_text(&AppState::default(), &form);
            assert!(!text.contains("is required"));

            form.blur_field(FieldName::Email);
            let text = form_text(&AppState::default(), &form);
            assert!(text.contains("Email is required"));
            assert!(!text.contains("Name is required"));
        }

        #[test]
        fn test_long_single_line_value_stays_inside_box() {
            let mut form = ContactForm::new();
            form.update_field(FieldName::Email, format!("{}@end.io", "x".repeat(120)));
            let state = AppState::default();
            let ctx = PageContext::new(&state, &form, 80);

            let lines = form_lines(&ctx);
            assert!(lines.iter().all(|line| line.width() <= ctx.width as usize));
            let text = lines.iter().map(line_text).collect::<Vec<_>>().join("\n");
            assert!(text.contains("x@end.io"));
        }

        #[test]
        fn test_clip_keeps_tail() {
            assert_eq!(clip_to_tail("abcdef", 3), "def");
            assert_eq!(clip_to_tail("ab", 3), "ab");
        }

        #[test]
        fn test_char_count_counts_chars() {
            let mut form = ContactForm::new();
            form.update_field(FieldName::Message, "héllo");
            let text = form_text(&AppState::default(), &form);
            assert!(text.contains("5 characters"));
        }

        #[test]
        fn test_active_field_shows_cursor() {
            let state = AppState {
                focus: Focus::Form(0),
                ..AppState::default()
            };
            let mut form = ContactForm::new();
            form.update_field(FieldName::Name, "Jo");
            let text = form_text(&state, &form);
            assert!(text.contains("Jo▌"));
        }

        #[test]
        fn test_multiline_message_keeps_lines() {
            let mut form = ContactForm::new();
            form.update_field(FieldName::Message, "first line\nsecond line");
            let text = form_text(&AppState::default(), &form);
            assert!(text.contains("│ first line"));
            assert!(text.contains("│ second line"));
        }
    }

    mod status {
        use super::*;

        #[test]
        fn test_idle_button() {
            let text = form_text(&AppState::default(), &filled());
            assert!(text.contains("Send Message"));
            assert!(!text.contains("Sending..."));
        }

        #[test]
        fn test_submitting_button() {
            let mut form = filled();
            form.begin_submit().unwrap();
            let text = form_text(&AppState::default(), &form);
            assert!(text.contains("Sending..."));
            assert!(!text.contains("Send Message"));
        }

        #[test]
        fn test_success_banner() {
            let mut form = filled();
            let cycle = form.begin_submit().unwrap().cycle;
            form.finish_submit(cycle, Ok(()));
            let text = form_text(&AppState::default(), &form);
            assert!(text.contains("Message sent successfully!"));
            assert!(text.contains("I'll get back to you soon."));
        }

        #[test]
        fn test_error_banner_is_distinct_from_field_errors() {
            let mut form = filled();
            let cycle = form.begin_submit().unwrap().cycle;
            form.finish_submit(cycle, Err(SubmitError::Transport("down".to_string())));
            let text = form_text(&AppState::default(), &form);
            assert!(text.contains("Something went wrong"));
            assert!(text.contains("Esc to dismiss"));
            assert!(!text.contains("is required"));
        }
    }

    #[test]
    fn test_section_lists_social_links() {
        let state = AppState::default();
        let form = ContactForm::new();
        let text: String = build(&PageContext::new(&state, &form, 80))
            .iter()
            .flat_map(|e| e.lines.iter().map(line_text))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("imdhruv@zohomail.in"));
        assert!(text.contains("github.com/dhruv"));
        assert!(!text.contains("https://"));
        assert!(text.contains("Quick Response"));
    }
}
