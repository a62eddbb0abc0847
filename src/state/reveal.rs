//! Entrance animation state for sections

use std::time::{Duration, Instant};

/// Staggered fade/slide-in started when a section first becomes visible
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealAnimation {
    started_at: Option<Instant>,
}

impl RevealAnimation {
    /// Duration of each element's fade and slide
    pub const ELEMENT_DURATION: Duration = Duration::from_millis(600);
    /// Longest stagger delay any element uses
    pub const MAX_DELAY: Duration = Duration::from_millis(500);
    /// Columns an element travels while sliding in
    pub const SLIDE_COLUMNS: u16 = 6;

    /// Begin the animation; later calls keep the original start time
    pub fn start(&mut self, now: Instant) {
        self.started_at.get_or_insert(now);
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased progress (0.0 to 1.0) of an element that waits `delay` before
    /// animating
    pub fn progress_at(&self, now: Instant, delay: Duration) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed <= delay {
            return 0.0;
        }

        let linear = (elapsed - delay).as_secs_f32() / Self::ELEMENT_DURATION.as_secs_f32();
        // Cubic ease-out for smooth deceleration
        simple_easing::cubic_out(linear.min(1.0))
    }

    /// True once every staggered element has finished
    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.started_at.is_some_and(|started_at| {
            now.saturating_duration_since(started_at) >= Self::MAX_DELAY + Self::ELEMENT_DURATION
        })
    }

    /// Whether frames should be drawn quickly to keep the motion smooth
    pub fn is_running_at(&self, now: Instant) -> bool {
        self.has_started() && !self.is_complete_at(now)
    }
}
