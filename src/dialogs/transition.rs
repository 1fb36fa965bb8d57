//! Dialog lifecycle: `Hidden -> Opening -> Visible -> Closing -> Hidden`.
//!
//! Opening and closing each run a linear slide between the resting position
//! and off-screen bottom. Time only moves through [`DialogTransition::advance`].

use serde::Serialize;
use std::time::Duration;

pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DialogPhase {
    Hidden,
    Opening,
    Visible,
    Closing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogTransition {
    phase: DialogPhase,
    elapsed: Duration,
    duration: Duration,
}

impl DialogTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: DialogPhase::Hidden,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// Whether selections made now should be committed.
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, DialogPhase::Opening | DialogPhase::Visible)
    }

    /// Starts the slide-in. A dialog that is closing turns around from
    /// where it is. Returns false when already opening or visible.
    pub fn open(&mut self) -> bool {
        match self.phase {
            DialogPhase::Hidden => {
                self.elapsed = Duration::ZERO;
            }
            DialogPhase::Closing => {
                self.elapsed = self.duration.saturating_sub(self.elapsed);
            }
            DialogPhase::Opening | DialogPhase::Visible => return false,
        }
        self.phase = DialogPhase::Opening;
        self.settle_instant();
        true
    }

    /// Starts the slide-out. Returns false when already closing or hidden.
    pub fn close(&mut self) -> bool {
        match self.phase {
            DialogPhase::Visible => {
                self.elapsed = Duration::ZERO;
            }
            DialogPhase::Opening => {
                self.elapsed = self.duration.saturating_sub(self.elapsed);
            }
            DialogPhase::Closing | DialogPhase::Hidden => return false,
        }
        self.phase = DialogPhase::Closing;
        self.settle_instant();
        true
    }

    /// Moves the slide forward by `dt`. Returns the new phase if the slide
    /// finished.
    pub fn advance(&mut self, dt: Duration) -> Option<DialogPhase> {
        if !matches!(self.phase, DialogPhase::Opening | DialogPhase::Closing) {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        self.finish_if_done()
    }

    /// Vertical slide offset: 0.0 at rest, 1.0 fully off-screen.
    pub fn offset(&self) -> f32 {
        match self.phase {
            DialogPhase::Hidden => 1.0,
            DialogPhase::Visible => 0.0,
            DialogPhase::Opening => 1.0 - self.progress(),
            DialogPhase::Closing => self.progress(),
        }
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn finish_if_done(&mut self) -> Option<DialogPhase> {
        if self.elapsed < self.duration {
            return None;
        }
        self.elapsed = Duration::ZERO;
        self.phase = match self.phase {
            DialogPhase::Opening => DialogPhase::Visible,
            DialogPhase::Closing => DialogPhase::Hidden,
            other => other,
        };
        Some(self.phase)
    }

    // Zero-length transitions complete as soon as they start.
    fn settle_instant(&mut self) {
        if self.duration.is_zero() {
            self.finish_if_done();
        }
    }
}

impl Default for DialogTransition {
    fn default() -> Self {
        Self::new(SLIDE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_150: Duration = Duration::from_millis(150);

    #[test]
    fn full_cycle() {
        let mut t = DialogTransition::default();
        assert_eq!(t.phase(), DialogPhase::Hidden);
        assert!(t.open());
        assert_eq!(t.phase(), DialogPhase::Opening);
        assert_eq!(t.advance(MS_150), None);
        assert!((t.offset() - 0.5).abs() < 1e-3);
        assert_eq!(t.advance(MS_150), Some(DialogPhase::Visible));
        assert_eq!(t.offset(), 0.0);

        assert!(t.close());
        assert_eq!(t.phase(), DialogPhase::Closing);
        assert_eq!(t.advance(SLIDE_DURATION), Some(DialogPhase::Hidden));
        assert_eq!(t.offset(), 1.0);
    }

    #[test]
    fn visible_stays_visible() {
        let mut t = DialogTransition::default();
        t.open();
        t.advance(SLIDE_DURATION);
        assert_eq!(t.advance(Duration::from_secs(10)), None);
        assert_eq!(t.phase(), DialogPhase::Visible);
    }

    #[test]
    fn reusable_after_hidden() {
        let mut t = DialogTransition::default();
        for _ in 0..3 {
            assert!(t.open());
            t.advance(SLIDE_DURATION);
            assert!(t.close());
            t.advance(SLIDE_DURATION);
            assert_eq!(t.phase(), DialogPhase::Hidden);
        }
    }

    #[test]
    fn closing_while_opening_reverses_from_current_offset() {
        let mut t = DialogTransition::default();
        t.open();
        t.advance(Duration::from_millis(100));
        let before = t.offset();
        assert!(t.close());
        assert!((t.offset() - before).abs() < 1e-3);
        assert_eq!(t.advance(Duration::from_millis(100)), Some(DialogPhase::Hidden));
    }

    #[test]
    fn redundant_requests_are_rejected() {
        let mut t = DialogTransition::default();
        assert!(!t.close());
        t.open();
        assert!(!t.open());
    }

    #[test]
    fn zero_duration_is_instant() {
        let mut t = DialogTransition::new(Duration::ZERO);
        t.open();
        assert_eq!(t.phase(), DialogPhase::Visible);
        t.close();
        assert_eq!(t.phase(), DialogPhase::Hidden);
    }
}
