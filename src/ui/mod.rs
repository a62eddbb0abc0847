//! UI module for rendering the TUI

mod components;
mod layout;
mod page;
mod sections;
mod text;

pub use components::project_modal::scroll_limit as modal_scroll_limit;

use crate::app::App;
use crate::state::{Focus, PageLayout};
use chrono::Datelike;
use page::PageContext;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::time::Instant;

/// Area the scrolling page occupies on a screen of `area`
pub fn page_area(area: Rect) -> Rect {
    layout::create_layout(area).1
}

fn page_context(app: &App, page_width: u16, now: Instant) -> PageContext<'_> {
    PageContext::new(&app.state, app.contact.form(), page_width)
        .with_spinner(now.saturating_duration_since(app.started_at))
        .with_year(chrono::Local::now().year())
}

/// Lay out every section at `page_width` columns
pub fn measure(app: &App, page_width: u16) -> PageLayout {
    let ctx = page_context(app, page_width, app.started_at);
    page::measure(&page::build(&ctx))
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let now = Instant::now();
    let (header_area, page_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    let ctx = page_context(app, page_area.width, now);
    let lines = page::compose(page::build(&ctx), &app.state, now);
    let page = Paragraph::new(lines).scroll((app.state.viewport.offset, 0));
    frame.render_widget(page, page_area);

    layout::draw_status_bar(frame, status_area, app);

    if app.state.focus == Focus::Modal {
        if let Some(project) = app.state.projects.open_project() {
            components::project_modal::draw(frame, project, app.state.projects.modal_scroll);
        }
    }
}
