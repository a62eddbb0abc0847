//! The scrolling page: sections measured into a layout and drawn with their
//! entrance animation applied

use super::sections;
use crate::state::{AppState, ContactForm, PageLayout, RevealAnimation, Section};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use std::time::{Duration, Instant};

/// Columns kept free on each side of the page
pub const PAGE_MARGIN: u16 = 2;

/// Braille spinner frames for the submit button
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Block of lines that animates in as a unit
#[derive(Debug, Clone)]
pub struct Element {
    pub lines: Vec<Line<'static>>,
    /// Stagger before this element starts moving
    pub delay: Duration,
}

impl Element {
    pub fn new(delay_ms: u64, lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Vertical spacing; has nothing to animate
    pub fn gap(rows: usize) -> Self {
        Self::new(0, vec![Line::default(); rows])
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Everything a section needs to lay itself out
pub struct PageContext<'a> {
    pub state: &'a AppState,
    pub form: &'a ContactForm,
    /// Usable text width inside the page margins
    pub width: u16,
    pub spinner: &'static str,
    pub year: i32,
}

impl<'a> PageContext<'a> {
    pub fn new(state: &'a AppState, form: &'a ContactForm, page_width: u16) -> Self {
        Self {
            state,
            form,
            width: page_width.saturating_sub(PAGE_MARGIN * 2).max(1),
            spinner: SPINNER[0],
            year: 1970,
        }
    }

    /// Spinner frame for `elapsed` time since startup
    pub fn with_spinner(mut self, elapsed: Duration) -> Self {
        let frame = (elapsed.as_millis() / 100) as usize % SPINNER.len();
        self.spinner = SPINNER[frame];
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

/// Every section's elements, top to bottom
pub fn build(ctx: &PageContext) -> Vec<(Section, Vec<Element>)> {
    Section::ALL
        .iter()
        .map(|&section| (section, sections::build(section, ctx)))
        .collect()
}

/// Row extents of the built sections
pub fn measure(page: &[(Section, Vec<Element>)]) -> PageLayout {
    PageLayout::from_heights(page.iter().map(|(section, elements)| {
        let height: usize = elements.iter().map(Element::height).sum();
        (*section, height.min(u16::MAX as usize) as u16)
    }))
}

/// Flatten the page into lines, with unrevealed sections left blank so the
/// layout never shifts
pub fn compose(
    page: Vec<(Section, Vec<Element>)>,
    state: &AppState,
    now: Instant,
) -> Vec<Line<'static>> {
    let margin = " ".repeat(PAGE_MARGIN as usize);
    let mut lines = Vec::new();

    for (section, elements) in page {
        let reveal = if state.is_revealed(section) {
            state.section(section).map(|s| s.reveal)
        } else {
            None
        };

        for element in elements {
            let progress = reveal
                .map(|r| r.progress_at(now, element.delay))
                .unwrap_or(0.0);
            for line in element.lines {
                lines.push(animate_line(line, progress, &margin));
            }
        }
    }

    lines
}

/// Apply slide and fade for an element at `progress`
fn animate_line(line: Line<'static>, progress: f32, margin: &str) -> Line<'static> {
    if progress <= 0.0 {
        return Line::default();
    }

    let slide = ((1.0 - progress) * RevealAnimation::SLIDE_COLUMNS as f32).round() as usize;
    let fade = fade_color(progress);

    let mut spans = vec![Span::raw(format!("{margin}{}", " ".repeat(slide)))];
    spans.extend(line.spans.into_iter().map(|span| match fade {
        Some(color) => span.patch_style(Style::default().fg(color)),
        None => span,
    }));

    let mut animated = Line::from(spans).style(line.style);
    if let Some(alignment) = line.alignment {
        animated = animated.alignment(alignment);
    }
    animated
}

/// Color stand-in for opacity while an element fades in
fn fade_color(progress: f32) -> Option<Color> {
    if progress < 0.35 {
        Some(Color::DarkGray)
    } else if progress < 0.7 {
        Some(Color::Gray)
    } else {
        None
    }
}
