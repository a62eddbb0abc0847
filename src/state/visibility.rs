//! One-shot visibility latches for section entrance animations
//!
//! A [`VisibilityObserver`] asks a [`VisibilityDetector`] how much of its
//! target is on screen. The first time that fraction reaches the observer's
//! threshold the observer latches to visible and stops asking.

use super::Section;

/// Capability for measuring how much of a section is inside the viewport
pub trait VisibilityDetector {
    /// Visible fraction of `target` in `0.0..=1.0`, or `None` while the
    /// target has not been laid out yet.
    fn visible_fraction(&self, target: Section) -> Option<f32>;
}

/// Monotonic visibility signal for a single section
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    target: Section,
    threshold: f32,
    visible: bool,
}

impl VisibilityObserver {
    pub fn new(target: Section, threshold: f32) -> Self {
        Self {
            target,
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn target(&self) -> Section {
        self.target
    }

    #[cfg(test)]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the observer still queries its detector
    pub fn is_attached(&self) -> bool {
        !self.visible
    }

    /// Poll the detector once.
    ///
    /// Returns true only on the call that flips the latch. Once visible the
    /// detector is never consulted again.
    pub fn observe(&mut self, detector: &dyn VisibilityDetector) -> bool {
        if !self.is_attached() {
            return false;
        }

        let Some(fraction) = detector.visible_fraction(self.target) else {
            return false;
        };

        if fraction > 0.0 && fraction >= self.threshold {
            tracing::debug!(
                "{} became visible ({fraction:.2} >= {:.2})",
                self.target.label(),
                self.threshold
            );
            self.visible = true;
            return true;
        }
        false
    }
}

/// Detector whose fractions are set by hand
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualDetector {
    fractions: std::collections::HashMap<Section, f32>,
    queries: std::cell::Cell<usize>,
}

#[cfg(test)]
impl ManualDetector {
    pub fn set(&mut self, target: Section, fraction: f32) {
        self.fractions.insert(target, fraction);
    }

    pub fn unmount(&mut self, target: Section) {
        self.fractions.remove(&target);
    }

    /// Number of times any observer asked this detector
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

#[cfg(test)]
impl VisibilityDetector for ManualDetector {
    fn visible_fraction(&self, target: Section) -> Option<f32> {
        self.queries.set(self.queries.get() + 1);
        self.fractions.get(&target).copied()
    }
}
