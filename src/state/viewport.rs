//! Page geometry: where each section sits and which part of the page is on
//! screen

use super::visibility::VisibilityDetector;
use super::Section;

/// Vertical extent of one section on the page, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub start: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn end(&self) -> u16 {
        self.start.saturating_add(self.height)
    }
}

/// Sections stacked top to bottom, rebuilt whenever the page is measured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
}

impl PageLayout {
    /// Stack sections in the given order
    pub fn from_heights(heights: impl IntoIterator<Item = (Section, u16)>) -> Self {
        let mut start = 0u16;
        let spans = heights
            .into_iter()
            .map(|(section, height)| {
                let span = SectionSpan {
                    section,
                    start,
                    height,
                };
                start = start.saturating_add(height);
                span
            })
            .collect();
        Self { spans }
    }

    pub fn total_height(&self) -> u16 {
        self.spans.last().map(SectionSpan::end).unwrap_or(0)
    }

    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans.iter().find(|s| s.section == section).copied()
    }

    /// Section containing page row `row`
    pub fn section_at(&self, row: u16) -> Option<Section> {
        self.spans
            .iter()
            .find(|s| row >= s.start && row < s.end())
            .map(|s| s.section)
    }
}

/// The window of page rows currently drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub offset: u16,
    pub height: u16,
}

impl Viewport {
    /// Largest offset that still fills the viewport
    pub fn max_offset(&self, layout: &PageLayout) -> u16 {
        layout.total_height().saturating_sub(self.height)
    }

    pub fn scroll_by(&mut self, delta: i32, layout: &PageLayout) {
        let target = (self.offset as i32 + delta).clamp(0, self.max_offset(layout) as i32);
        self.offset = target as u16;
    }

    pub fn scroll_to(&mut self, offset: u16, layout: &PageLayout) {
        self.offset = offset.min(self.max_offset(layout));
    }

    /// Keep the offset valid after the page or terminal changed size
    pub fn clamp(&mut self, layout: &PageLayout) {
        self.offset = self.offset.min(self.max_offset(layout));
    }

    /// Section under the top row of the viewport
    pub fn current_section(&self, layout: &PageLayout) -> Option<Section> {
        layout.section_at(self.offset)
    }
}

/// Detector backed by the real page layout and scroll position.
///
/// The fraction is measured against the smaller of the section and the
/// viewport, so a section taller than the screen counts as fully visible
/// once it fills the screen.
pub struct ViewportDetector<'a> {
    layout: &'a PageLayout,
    viewport: Viewport,
}

impl<'a> ViewportDetector<'a> {
    pub fn new(layout: &'a PageLayout, viewport: Viewport) -> Self {
        Self { layout, viewport }
    }
}

impl VisibilityDetector for ViewportDetector<'_> {
    fn visible_fraction(&self, target: Section) -> Option<f32> {
        let span = self.layout.span(target)?;
        if span.height == 0 || self.viewport.height == 0 {
            return Some(0.0);
        }

        let top = span.start.max(self.viewport.offset);
        let bottom = span
            .end()
            .min(self.viewport.offset.saturating_add(self.viewport.height));
        let overlap = bottom.saturating_sub(top);
        let basis = span.height.min(self.viewport.height);

        Some((overlap as f32 / basis as f32).min(1.0))
    }
}
