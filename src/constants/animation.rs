//! Animation-related constants.

/// Maximum delta time for animations (prevents snapping after long frames)
pub const MAX_ANIMATION_DT: f32 = 0.05; // 50ms cap (~20 FPS minimum)

/// Viewport margin for section reveals (negative = element must be this far
/// inside the viewport before the entrance animation fires)
pub const SECTION_REVEAL_MARGIN: f32 = -100.0;

/// Stagger between hero children
pub const HERO_STAGGER_CHILDREN: f32 = 0.15;
/// Delay before the first hero child starts
pub const HERO_DELAY_CHILDREN: f32 = 0.2;
/// Hero children rise from this far below their resting position
pub const HERO_ITEM_RISE: f32 = 30.0;
/// Hero child entrance duration
pub const HERO_ITEM_DURATION: f32 = 0.8;

/// Standard rise distance for section children
pub const ITEM_RISE: f32 = 40.0;
/// Standard section child entrance duration
pub const ITEM_DURATION: f32 = 0.6;

/// Scale that pop-in tiles/chips start from
pub const POP_START_SCALE: f32 = 0.9;
/// Pop-in tile/chip duration
pub const POP_DURATION: f32 = 0.5;

/// Stat counter ramp duration in seconds
pub const COUNTER_DURATION: f32 = 2.0;

/// Hero background orb drift period in seconds
pub const ORB_PERIOD_SLOW: f32 = 6.0;
/// Second orb drifts slower and out of phase
pub const ORB_PERIOD_SLOWER: f32 = 8.0;
/// Vertical drift amplitude of the hero orbs
pub const ORB_DRIFT: f32 = 20.0;

/// Scroll indicator bob period in seconds
pub const INDICATOR_BOB_PERIOD: f32 = 2.0;
/// Scroll indicator dot travel distance
pub const INDICATOR_BOB_DISTANCE: f32 = 8.0;

/// Education timeline dot pulse period in seconds
pub const TIMELINE_PULSE_PERIOD: f32 = 2.0;
/// Per-dot phase offset of the timeline pulse
pub const TIMELINE_PULSE_STAGGER: f32 = 0.3;

/// Footer border gradient sweep period in seconds
pub const FOOTER_GRADIENT_PERIOD: f32 = 6.0;
