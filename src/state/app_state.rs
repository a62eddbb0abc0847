//! Application state definitions

use super::reveal::RevealAnimation;
use super::viewport::{PageLayout, Viewport};
use super::visibility::{VisibilityDetector, VisibilityObserver};
use crate::content::{Project, PROJECTS};
use std::time::{Duration, Instant};

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Footer,
}

impl Section {
    /// Every section, top to bottom
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Contact,
        Section::Footer,
    ];

    /// Sections listed in the header navigation
    pub const NAV: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
        }
    }

    /// Fraction of the section that must be on screen before it animates in
    pub fn default_threshold(&self) -> f32 {
        match self {
            Self::Hero | Self::Footer => 0.0,
            Self::Projects => 0.1,
            _ => 0.2,
        }
    }

    /// Section bound to a header digit (1-based)
    pub fn from_nav_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::NAV.get(i).copied())
    }
}

/// Which part of the UI receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrolling the page
    #[default]
    Page,
    /// Selecting project cards
    Projects,
    /// Typing into the contact form; index 3 is the submit button
    Form(usize),
    /// Project detail modal is open
    Modal,
}

impl Focus {
    pub const SUBMIT_BUTTON: usize = 3;
}

/// Visibility latch plus the animation it triggers
#[derive(Debug, Clone)]
pub struct SectionState {
    pub observer: VisibilityObserver,
    pub reveal: RevealAnimation,
}

impl SectionState {
    pub fn new(section: Section, threshold: f32) -> Self {
        Self {
            observer: VisibilityObserver::new(section, threshold),
            reveal: RevealAnimation::default(),
        }
    }
}

/// Tech-stack filter and card selection for the projects section
#[derive(Debug, Clone, Default)]
pub struct ProjectsState {
    /// Index into `filters()`; 0 is "all"
    pub filter_index: usize,
    /// Index into `filtered()`
    pub selected: usize,
    /// Project shown in the modal
    pub open: Option<u32>,
    /// Rows of the modal body scrolled away
    pub modal_scroll: u16,
}

impl ProjectsState {
    /// "all" followed by every tech in order of first appearance
    pub fn filters() -> Vec<&'static str> {
        let mut filters = vec!["all"];
        for tech in PROJECTS.iter().flat_map(|p| p.tech_stack.iter().copied()) {
            if !filters.contains(&tech) {
                filters.push(tech);
            }
        }
        filters
    }

    pub fn active_filter(&self) -> &'static str {
        Self::filters()
            .get(self.filter_index)
            .copied()
            .unwrap_or("all")
    }

    pub fn filtered(&self) -> Vec<&'static Project> {
        let filter = self.active_filter();
        PROJECTS
            .iter()
            .filter(|p| filter == "all" || p.tech_stack.contains(&filter))
            .collect()
    }

    pub fn next_filter(&mut self) {
        self.filter_index = (self.filter_index + 1) % Self::filters().len();
        self.selected = 0;
    }

    pub fn prev_filter(&mut self) {
        let count = Self::filters().len();
        self.filter_index = (self.filter_index + count - 1) % count;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.filtered().get(self.selected).copied()
    }

    /// Open the modal for the selected card
    pub fn open_selected(&mut self) -> bool {
        match self.selected_project() {
            Some(project) => {
                self.open = Some(project.id);
                self.modal_scroll = 0;
                true
            }
            None => false,
        }
    }

    pub fn open_project(&self) -> Option<&'static Project> {
        self.open
            .and_then(|id| PROJECTS.iter().find(|project| project.id == id))
    }

    pub fn close(&mut self) {
        self.open = None;
        self.modal_scroll = 0;
    }
}

/// Transient message in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub const LIFETIME: Duration = Duration::from_secs(3);

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= Self::LIFETIME
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub focus: Focus,
    pub viewport: Viewport,
    pub layout: PageLayout,
    pub sections: Vec<SectionState>,
    pub projects: ProjectsState,
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// Fresh state; `threshold_override` replaces every section's default
    pub fn new(threshold_override: Option<f32>) -> Self {
        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let threshold = threshold_override.unwrap_or(section.default_threshold());
                SectionState::new(section, threshold)
            })
            .collect();

        Self {
            focus: Focus::Page,
            viewport: Viewport::default(),
            layout: PageLayout::default(),
            sections,
            projects: ProjectsState::default(),
            status_message: None,
        }
    }

    pub fn section(&self, section: Section) -> Option<&SectionState> {
        self.sections
            .iter()
            .find(|s| s.observer.target() == section)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.section(section)
            .is_some_and(|s| s.observer.is_visible())
    }

    /// Poll every observer and start the entrance animation of any section
    /// that just became visible. Returns the sections that flipped.
    pub fn observe_sections(
        &mut self,
        detector: &dyn VisibilityDetector,
        now: Instant,
    ) -> Vec<Section> {
        let mut flipped = Vec::new();
        for state in &mut self.sections {
            if state.observer.observe(detector) {
                state.reveal.start(now);
                flipped.push(state.observer.target());
            }
        }
        flipped
    }

    /// Whether any entrance animation is mid-flight
    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.sections.iter().any(|s| s.reveal.is_running_at(now))
    }

    /// Jump so `section` starts at the top of the viewport
    pub fn jump_to(&mut self, section: Section) {
        if let Some(span) = self.layout.span(section) {
            self.viewport.scroll_to(span.start, &self.layout);
        }
    }

    pub fn current_section(&self) -> Option<Section> {
        self.viewport.current_section(&self.layout)
    }

    pub fn set_status(&mut self, message: StatusMessage) {
        self.status_message = Some(message);
    }

    pub fn expire_status(&mut self, now: Instant) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| m.is_expired_at(now))
        {
            self.status_message = None;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}
