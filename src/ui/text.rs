//! Text layout helpers shared by the page sections and dialogs

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Wrap text to fit within a maximum width, counted in characters
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0usize;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current_len + word_len + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            if !current_line.is_empty() {
                current_line.push(' ');
                current_len += 1;
            }
            current_line.push_str(word);
            current_len += word_len;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Wrapped paragraph with a uniform style
pub fn paragraph(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width as usize)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

/// Wrapped list item; continuation lines hang under the text
pub fn bullet(marker: &str, text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let indent = marker.chars().count() + 1;
    let wrapped = wrap_text(text, (width as usize).saturating_sub(indent));
    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 {
                format!("{marker} ")
            } else {
                " ".repeat(indent)
            };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Cyan)),
                Span::styled(line, style),
            ])
        })
        .collect()
}

/// Centered section heading followed by a short underline
pub fn heading(title: &str, width: u16) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "━".repeat(title.chars().count().min(width as usize)),
            Style::default().fg(Color::Cyan),
        ))
        .centered(),
    ]
}

/// Draw `body` inside a rounded box spanning `width` columns
pub fn boxed(
    title: &str,
    body: Vec<Line<'static>>,
    width: u16,
    border_style: Style,
) -> Vec<Line<'static>> {
    let inner = (width as usize).saturating_sub(4);
    let title_len = title.chars().count();

    let top = if title.is_empty() {
        format!("╭{}╮", "─".repeat(inner + 2))
    } else {
        let fill = (inner + 2).saturating_sub(title_len + 3);
        format!("╭─ {title} {}╮", "─".repeat(fill))
    };

    let mut lines = vec![Line::from(Span::styled(top, border_style))];
    for line in body {
        let pad = inner.saturating_sub(line.width());
        let mut spans = vec![Span::styled("│ ", border_style)];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" │", border_style));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(inner + 2)),
        border_style,
    )));
    lines
}

/// Plain text of a line, for tests and width checks
#[cfg(test)]
pub fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
