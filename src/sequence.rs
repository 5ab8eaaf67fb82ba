//! Declarative staged animation sequences.
//!
//! A sequence describes how a revealed container and its children enter:
//! each stage interpolates a fixed set of visual properties over a duration,
//! and children start on a stagger so they animate in declared order.
//! Sampling is pure - given the time since the reveal fired, return the
//! property values - so playback happens at most once per element simply
//! because the reveal latch fires at most once.

use crate::easing::Easing;

/// The animatable properties. Values outside these four are not supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySet {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl PropertySet {
    /// Fully visible, untransformed
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Invisible, untransformed
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Invisible, offset downward by `rise` (the standard entrance start)
    pub fn below(rise: f32) -> Self {
        Self {
            translate_y: rise,
            ..Self::HIDDEN
        }
    }

    /// Invisible, offset leftward by `slide` (timeline card entrance start)
    pub fn left_of(slide: f32) -> Self {
        Self {
            translate_x: -slide,
            ..Self::HIDDEN
        }
    }

    /// Invisible, shrunk to `scale` (chip/tile pop-in start)
    pub fn shrunk(scale: f32) -> Self {
        Self {
            scale,
            ..Self::HIDDEN
        }
    }

    fn is_finite(&self) -> bool {
        self.opacity.is_finite()
            && self.translate_x.is_finite()
            && self.translate_y.is_finite()
            && self.scale.is_finite()
    }

    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self {
            opacity: a.opacity + (b.opacity - a.opacity) * t,
            translate_x: a.translate_x + (b.translate_x - a.translate_x) * t,
            translate_y: a.translate_y + (b.translate_y - a.translate_y) * t,
            scale: a.scale + (b.scale - a.scale) * t,
        }
    }
}

/// One transition from an initial property set to a target property set
#[derive(Debug, Clone)]
pub struct AnimationStage {
    initial: PropertySet,
    target: PropertySet,
    duration: f32,
    delay: f32,
    easing: Easing,
}

impl AnimationStage {
    /// Build a stage, rejecting malformed parameters up front. Invalid
    /// configurations are a programming error, never a runtime fault, so
    /// they fail here rather than being silently coerced at sample time.
    pub fn new(
        initial: PropertySet,
        target: PropertySet,
        duration: f32,
        delay: f32,
        easing: Easing,
    ) -> Result<Self, String> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(format!("stage duration must be positive, got {duration}"));
        }
        if !delay.is_finite() || delay < 0.0 {
            return Err(format!("stage delay must be non-negative, got {delay}"));
        }
        if !initial.is_finite() || !target.is_finite() {
            return Err("stage property sets must be finite".to_string());
        }
        Ok(Self {
            initial,
            target,
            duration,
            delay,
            easing,
        })
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Time at which this stage has fully played out
    pub fn end_time(&self) -> f32 {
        self.delay + self.duration
    }

    /// Property values `t` seconds after the owning timeline started.
    /// Before the delay the initial set holds; past the end the target holds.
    pub fn sample(&self, t: f32) -> PropertySet {
        if t <= self.delay {
            return self.initial;
        }
        let progress = ((t - self.delay) / self.duration).clamp(0.0, 1.0);
        PropertySet::lerp(&self.initial, &self.target, self.easing.apply(progress))
    }

    pub fn is_done(&self, t: f32) -> bool {
        t >= self.end_time()
    }
}

/// Entrance choreography for a container and its children
#[derive(Debug, Clone)]
pub struct SequenceConfig {
    parent: Vec<AnimationStage>,
    child: AnimationStage,
    stagger_children: f32,
    delay_children: f32,
}

impl SequenceConfig {
    pub fn new(
        parent: Vec<AnimationStage>,
        child: AnimationStage,
        stagger_children: f32,
        delay_children: f32,
    ) -> Result<Self, String> {
        if parent.is_empty() {
            return Err("sequence needs at least one parent stage".to_string());
        }
        if !stagger_children.is_finite() || stagger_children < 0.0 {
            return Err(format!(
                "stagger_children must be non-negative, got {stagger_children}"
            ));
        }
        if !delay_children.is_finite() || delay_children < 0.0 {
            return Err(format!(
                "delay_children must be non-negative, got {delay_children}"
            ));
        }
        Ok(Self {
            parent,
            child,
            stagger_children,
            delay_children,
        })
    }

    /// The common case: container fades in while children rise from below
    /// on a stagger.
    pub fn fade_and_rise(
        rise: f32,
        child_duration: f32,
        easing: Easing,
        stagger_children: f32,
        delay_children: f32,
    ) -> Result<Self, String> {
        let parent = AnimationStage::new(
            PropertySet::HIDDEN,
            PropertySet::IDENTITY,
            0.3,
            0.0,
            Easing::Linear,
        )?;
        let child = AnimationStage::new(
            PropertySet::below(rise),
            PropertySet::IDENTITY,
            child_duration,
            0.0,
            easing,
        )?;
        Self::new(vec![parent], child, stagger_children, delay_children)
    }

    /// Parent property values at `t` seconds after the reveal fired.
    /// Later stages take over once their own window opens.
    pub fn parent_at(&self, t: f32) -> PropertySet {
        let mut current = self.parent[0].sample(t);
        for stage in &self.parent[1..] {
            if t > stage.delay() {
                current = stage.sample(t);
            }
        }
        current
    }

    /// When child `index`'s own timeline starts, relative to the trigger
    pub fn child_start(&self, index: usize) -> f32 {
        self.delay_children + index as f32 * self.stagger_children
    }

    /// Child `index`'s property values at `t` seconds after the reveal fired
    pub fn child_at(&self, index: usize, t: f32) -> PropertySet {
        self.child.sample(t - self.child_start(index))
    }

    /// True once every parent stage and every child has finished playing
    pub fn is_settled(&self, t: f32, child_count: usize) -> bool {
        let parent_done = self.parent.iter().all(|s| s.is_done(t));
        let children_done = match child_count {
            0 => true,
            n => self.child.is_done(t - self.child_start(n - 1)),
        };
        parent_done && children_done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EASE_OUT_EXPO;

    fn rise_stage(rise: f32, duration: f32, delay: f32) -> AnimationStage {
        AnimationStage::new(
            PropertySet::below(rise),
            PropertySet::IDENTITY,
            duration,
            delay,
            Easing::Linear,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let bad = AnimationStage::new(
            PropertySet::HIDDEN,
            PropertySet::IDENTITY,
            0.0,
            0.0,
            Easing::Linear,
        );
        assert!(bad.is_err());
        let bad = AnimationStage::new(
            PropertySet::HIDDEN,
            PropertySet::IDENTITY,
            -1.0,
            0.0,
            Easing::Linear,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_rejects_negative_delay() {
        let bad = AnimationStage::new(
            PropertySet::HIDDEN,
            PropertySet::IDENTITY,
            1.0,
            -0.1,
            Easing::Linear,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_rejects_non_finite_properties() {
        let mut broken = PropertySet::HIDDEN;
        broken.translate_y = f32::NAN;
        let bad = AnimationStage::new(broken, PropertySet::IDENTITY, 1.0, 0.0, Easing::Linear);
        assert!(bad.is_err());
    }

    #[test]
    fn test_rejects_negative_stagger() {
        let child = rise_stage(40.0, 0.6, 0.0);
        let parent = rise_stage(0.0, 0.3, 0.0);
        let bad = SequenceConfig::new(vec![parent], child, -0.1, 0.0);
        assert!(bad.is_err());
    }

    #[test]
    fn test_sample_before_delay_holds_initial() {
        let stage = rise_stage(40.0, 0.6, 0.5);
        let props = stage.sample(0.25);
        assert_eq!(props, PropertySet::below(40.0));
    }

    #[test]
    fn test_sample_after_end_holds_target() {
        let stage = rise_stage(40.0, 0.6, 0.5);
        assert_eq!(stage.sample(10.0), PropertySet::IDENTITY);
        assert!(stage.is_done(1.1));
    }

    #[test]
    fn test_sample_midpoint_interpolates() {
        let stage = rise_stage(40.0, 1.0, 0.0);
        let props = stage.sample(0.5);
        assert!((props.opacity - 0.5).abs() < 1e-5);
        assert!((props.translate_y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_child_stagger_start_times() {
        // staggerChildren = 0.15 with 3 children: starts at 0.0, 0.15, 0.30
        let seq = SequenceConfig::fade_and_rise(40.0, 0.6, EASE_OUT_EXPO, 0.15, 0.0).unwrap();
        assert!((seq.child_start(0) - 0.0).abs() < 1e-6);
        assert!((seq.child_start(1) - 0.15).abs() < 1e-6);
        assert!((seq.child_start(2) - 0.30).abs() < 1e-6);

        // At t just past child 0's start, child 2 has not begun
        let early = seq.child_at(2, 0.1);
        assert_eq!(early, PropertySet::below(40.0));
        let late = seq.child_at(2, 10.0);
        assert_eq!(late, PropertySet::IDENTITY);
    }

    #[test]
    fn test_delay_children_offsets_all_starts() {
        let seq = SequenceConfig::fade_and_rise(30.0, 0.8, EASE_OUT_EXPO, 0.15, 0.2).unwrap();
        assert!((seq.child_start(0) - 0.2).abs() < 1e-6);
        assert!((seq.child_start(3) - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_zero_stagger_children_animate_together() {
        let seq = SequenceConfig::fade_and_rise(40.0, 0.6, EASE_OUT_EXPO, 0.0, 0.0).unwrap();
        let a = seq.child_at(0, 0.3);
        let b = seq.child_at(4, 0.3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_settled() {
        let seq = SequenceConfig::fade_and_rise(40.0, 0.6, EASE_OUT_EXPO, 0.15, 0.0).unwrap();
        assert!(!seq.is_settled(0.5, 3));
        // Last child starts at 0.30 and runs 0.6s
        assert!(!seq.is_settled(0.85, 3));
        assert!(seq.is_settled(0.95, 3));
        // With no children only the parent matters
        assert!(seq.is_settled(0.35, 0));
    }

    #[test]
    fn test_later_parent_stage_takes_over() {
        let first = rise_stage(0.0, 0.3, 0.0);
        let second = AnimationStage::new(
            PropertySet::IDENTITY,
            PropertySet {
                scale: 1.1,
                ..PropertySet::IDENTITY
            },
            0.2,
            0.5,
            Easing::Linear,
        )
        .unwrap();
        let child = rise_stage(40.0, 0.6, 0.0);
        let seq = SequenceConfig::new(vec![first, second], child, 0.0, 0.0).unwrap();

        // Before the second stage opens, the first stage's target holds
        assert_eq!(seq.parent_at(0.4), PropertySet::IDENTITY);
        // After the second stage finishes, its target holds
        let settled = seq.parent_at(1.0);
        assert!((settled.scale - 1.1).abs() < 1e-5);
    }
}
