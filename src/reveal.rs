//! Viewport reveal triggers.
//!
//! A reveal watches an element's on-screen rect and latches when the
//! element first enters the visible viewport. Entrance animations key off
//! the latch time, so off-screen content never animates prematurely.

use egui::Rect;

/// How a reveal decides it has fired
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Once fired, never reset (element leaving the viewport does not re-arm)
    pub once: bool,
    /// Shifts the effective viewport boundary: positive fires before the
    /// element is fully on screen, negative requires it to be this far inside
    pub margin: f32,
}

impl RevealConfig {
    pub fn once() -> Self {
        Self {
            once: true,
            margin: 0.0,
        }
    }

    pub fn once_with_margin(margin: f32) -> Self {
        Self { once: true, margin }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::once()
    }
}

/// Reveal state machine. With `once = true` the `Revealed` state is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    /// Not yet visible; nothing animates
    Idle,
    /// Fired at page time `at`; animations sample `now - at`
    Revealed { at: f32 },
}

#[derive(Debug, Clone)]
pub struct Reveal {
    config: RevealConfig,
    phase: RevealPhase,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phase: RevealPhase::Idle,
        }
    }

    /// Feed the element's current screen rect and the visible viewport.
    /// Call once per frame; an element that never intersects simply stays idle.
    pub fn observe(&mut self, element: Rect, viewport: Rect, now: f32) {
        let visible = viewport.expand(self.config.margin).intersects(element);
        match self.phase {
            RevealPhase::Idle => {
                if visible {
                    self.phase = RevealPhase::Revealed { at: now };
                }
            }
            RevealPhase::Revealed { .. } => {
                if !visible && !self.config.once {
                    self.phase = RevealPhase::Idle;
                }
            }
        }
    }

    #[allow(dead_code)] // Public API for inspection/tests
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealed { .. })
    }

    /// Seconds since the trigger fired, or `None` while idle
    pub fn elapsed(&self, now: f32) -> Option<f32> {
        match self.phase {
            RevealPhase::Idle => None,
            RevealPhase::Revealed { at } => Some(now - at),
        }
    }

    /// Pin the reveal infinitely far in the past so every animation keyed
    /// off it samples its settled state (reduced-motion / degraded hosts).
    pub fn force_settle(&mut self) {
        self.phase = RevealPhase::Revealed {
            at: f32::NEG_INFINITY,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn viewport() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0))
    }

    fn element_at(top: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(800.0, top + 300.0))
    }

    #[test]
    fn test_fires_when_visible() {
        let mut reveal = Reveal::new(RevealConfig::once());
        reveal.observe(element_at(400.0), viewport(), 1.0);
        assert_eq!(reveal.phase(), RevealPhase::Revealed { at: 1.0 });
        assert_eq!(reveal.elapsed(3.5), Some(2.5));
    }

    #[test]
    fn test_once_latch_survives_scrolling_away() {
        let mut reveal = Reveal::new(RevealConfig::once());
        reveal.observe(element_at(400.0), viewport(), 1.0);
        // Element scrolls far out of view; the latch must not reset
        reveal.observe(element_at(5000.0), viewport(), 2.0);
        assert_eq!(reveal.phase(), RevealPhase::Revealed { at: 1.0 });
    }

    #[test]
    fn test_never_visible_stays_idle() {
        let mut reveal = Reveal::new(RevealConfig::once());
        for frame in 0..100 {
            reveal.observe(element_at(2000.0), viewport(), frame as f32 * 0.016);
        }
        assert_eq!(reveal.phase(), RevealPhase::Idle);
        assert_eq!(reveal.elapsed(10.0), None);
    }

    #[test]
    fn test_negative_margin_requires_deeper_entry() {
        // Element top at y=550: inside the raw viewport, but not inside the
        // viewport shrunk by 100
        let element = element_at(550.0);

        let mut strict = Reveal::new(RevealConfig::once_with_margin(-100.0));
        strict.observe(element, viewport(), 0.0);
        assert!(!strict.is_revealed());

        let mut loose = Reveal::new(RevealConfig::once());
        loose.observe(element, viewport(), 0.0);
        assert!(loose.is_revealed());

        // Scrolled 100 further in, the strict reveal fires too
        strict.observe(element_at(450.0), viewport(), 1.0);
        assert!(strict.is_revealed());
    }

    #[test]
    fn test_non_latching_reveal_resets() {
        let mut reveal = Reveal::new(RevealConfig {
            once: false,
            margin: 0.0,
        });
        reveal.observe(element_at(400.0), viewport(), 0.0);
        assert!(reveal.is_revealed());
        reveal.observe(element_at(5000.0), viewport(), 1.0);
        assert!(!reveal.is_revealed());
    }

    #[test]
    fn test_force_settle_reports_infinite_elapsed() {
        let mut reveal = Reveal::new(RevealConfig::once());
        reveal.force_settle();
        assert!(reveal.is_revealed());
        assert_eq!(reveal.elapsed(0.0), Some(f32::INFINITY));
    }
}
