//! Smooth-scroll constants.

/// Smoothing factor for anchor scroll animation (lower = smoother)
pub const SCROLL_SMOOTHING: f32 = 0.85;
/// Distance below which the anchor animation snaps to its target
pub const SCROLL_SNAP_THRESHOLD: f32 = 0.5;
/// Fixed offset above an anchor target (keeps section headers clear of the top edge)
pub const NAV_SCROLL_OFFSET: f32 = 80.0;
