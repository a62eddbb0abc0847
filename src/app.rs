//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_submit_modifier;
use crate::state::{
    AppState, FieldName, Focus, Section, StatusMessage, SubmitRejected, ViewportDetector,
};
use crate::submit::{ContactController, SimulatedTransport, SubmitTransport};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Poll interval while an entrance animation is running (~60fps)
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Poll ceiling while a submission is in flight or awaiting its revert
const BUSY_TICK: Duration = Duration::from_millis(100);

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact form and its submission plumbing
    pub contact: ContactController,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// When the app started, for spinner frames
    pub started_at: Instant,
}

impl App {
    /// Create a new App instance submitting through the simulated transport
    pub fn new(config: TuiConfig) -> Self {
        let transport = Arc::new(SimulatedTransport::new(config.submit_delay()));
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: TuiConfig, transport: Arc<dyn SubmitTransport>) -> Self {
        let contact = ContactController::new(transport, config.submit_timing());
        Self {
            state: AppState::new(config.reveal_threshold),
            contact,
            config,
            quit: false,
            terminal_size: None,
            started_at: Instant::now(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Re-measure the page, poll visibility and drain finished background
    /// work. Called once per frame before drawing.
    pub fn update(&mut self, now: Instant) {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let page = ui::page_area(Rect::new(0, 0, width, height));

        let layout = ui::measure(self, page.width);
        self.state.viewport.height = page.height;
        self.state.viewport.clamp(&layout);

        let viewport = self.state.viewport;
        let flipped = self
            .state
            .observe_sections(&ViewportDetector::new(&layout, viewport), now);
        for section in flipped {
            tracing::info!("Revealing {} section", section.label());
        }
        self.state.layout = layout;

        if self.contact.poll_events() {
            tracing::debug!("Contact form is now {}", self.contact.form().status().label());
        }
        self.state.expire_status(now);
    }

    /// How long the event loop may wait for input
    pub fn poll_interval(&self, now: Instant) -> Duration {
        if self.state.is_animating_at(now) {
            ANIMATION_TICK
        } else if self.contact.is_busy() {
            self.config.tick_rate().min(BUSY_TICK)
        } else {
            self.config.tick_rate()
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: Ctrl+C works from every focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.state.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Projects => self.handle_projects_key(key),
            Focus::Form(slot) => self.handle_form_key(slot, key),
            Focus::Modal => self.handle_modal_key(key),
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let delta = match mouse.kind {
            MouseEventKind::ScrollUp => -WHEEL_ROWS,
            MouseEventKind::ScrollDown => WHEEL_ROWS,
            _ => return Ok(()),
        };

        if self.state.focus == Focus::Modal {
            self.scroll_modal(delta);
        } else {
            self.scroll_page(delta);
        }
        Ok(())
    }

    fn scroll_page(&mut self, delta: i32) {
        let layout = &self.state.layout;
        self.state.viewport.scroll_by(delta, layout);
    }

    fn page_step(&self) -> i32 {
        self.state.viewport.height.saturating_sub(1).max(1) as i32
    }

    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_page(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_page(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_page(self.page_step()),
            KeyCode::PageUp => self.scroll_page(-self.page_step()),
            KeyCode::Char('g') | KeyCode::Char('t') | KeyCode::Home => {
                self.state.viewport.offset = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                let bottom = self.state.viewport.max_offset(&self.state.layout);
                self.state.viewport.offset = bottom;
            }
            KeyCode::Char('p') => self.focus_projects(),
            KeyCode::Char('c') => self.focus_form(0),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = c.to_digit(10).unwrap_or(0) as usize;
                if let Some(section) = Section::from_nav_index(index) {
                    self.state.jump_to(section);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn focus_projects(&mut self) {
        self.state.jump_to(Section::Projects);
        self.state.focus = Focus::Projects;
    }

    fn focus_form(&mut self, slot: usize) {
        self.state.jump_to(Section::Contact);
        self.state.focus = Focus::Form(slot);
    }

    fn handle_projects_key(&mut self, key: KeyEvent) -> Result<()> {
        let projects = &mut self.state.projects;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.state.focus = Focus::Page,
            KeyCode::Left | KeyCode::Char('h') => projects.select_prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => projects.select_next(),
            KeyCode::Char('f') => projects.next_filter(),
            KeyCode::Char('F') => projects.prev_filter(),
            KeyCode::Enter => {
                if projects.open_selected() {
                    self.state.focus = Focus::Modal;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_page(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_page(-1),
            _ => {}
        }
        Ok(())
    }

    fn scroll_modal(&mut self, delta: i32) {
        let Some(project) = self.state.projects.open_project() else {
            return;
        };
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        let limit = ui::modal_scroll_limit(project, width) as i32;

        let projects = &mut self.state.projects;
        projects.modal_scroll = (projects.modal_scroll as i32 + delta).clamp(0, limit) as u16;
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state.projects.close();
                self.state.focus = Focus::Projects;
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_modal(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_modal(-1),
            KeyCode::Char('g') => {
                if let Some(project) = self.state.projects.open_project() {
                    self.copy_link("GitHub link", project.github);
                }
            }
            KeyCode::Char('d') => {
                if let Some(project) = self.state.projects.open_project() {
                    self.copy_link("demo link", project.demo);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_form_key(&mut self, slot: usize, key: KeyEvent) -> Result<()> {
        let field = FieldName::ALL.get(slot).copied();

        // Submit shortcut works from any slot
        if key.code == KeyCode::Char('s') && is_submit_modifier(key.modifiers) {
            self.submit_form();
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                if !self.contact.dismiss_error() {
                    if let Some(name) = field {
                        self.contact.blur_field(name);
                    }
                    self.state.focus = Focus::Page;
                }
            }
            KeyCode::Tab => self.move_form_focus(slot, 1),
            KeyCode::BackTab => self.move_form_focus(slot, Focus::SUBMIT_BUTTON),
            KeyCode::Enter => match field {
                None => self.submit_form(),
                Some(FieldName::Message) => self.contact.push_char(FieldName::Message, '\n'),
                Some(_) => self.move_form_focus(slot, 1),
            },
            KeyCode::Backspace => {
                if let Some(name) = field {
                    self.contact.pop_char(name);
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(name) = field {
                    self.contact.push_char(name, c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Step through name, email, message and the submit button, blurring the
    /// field being left
    fn move_form_focus(&mut self, slot: usize, step: usize) {
        if let Some(&name) = FieldName::ALL.get(slot) {
            self.contact.blur_field(name);
        }
        let slots = Focus::SUBMIT_BUTTON + 1;
        self.state.focus = Focus::Form((slot + step) % slots);
    }

    fn submit_form(&mut self) {
        match self.contact.submit() {
            Ok(_) => {}
            Err(SubmitRejected::ValidationFailed { fields }) => {
                // Put the cursor on the first field that needs fixing
                if let Some(first) = fields.first() {
                    let slot = FieldName::ALL.iter().position(|f| f == first).unwrap_or(0);
                    self.state.focus = Focus::Form(slot);
                }
            }
            Err(SubmitRejected::AlreadySubmitting) => {
                tracing::debug!("Ignoring submit while a submission is in flight");
            }
        }
    }

    fn copy_link(&mut self, what: &str, url: &str) {
        match self.copy_to_clipboard(url) {
            Ok(()) => self
                .state
                .set_status(StatusMessage::info(format!("Copied {what}: {url}"))),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                self.state
                    .set_status(StatusMessage::error(format!("Failed to copy: {e}")));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
