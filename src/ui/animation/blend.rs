//! Eased blend between the card's previous and newly picked color.

use std::time::{Duration, Instant};

use iced::Color;
use iced_anim::Animated;
use iced_anim::transition::Easing;

const BLEND_DURATION: Duration = Duration::from_millis(350);

fn blend_easing() -> Easing {
    Easing::EASE_IN_OUT.with_duration(BLEND_DURATION)
}

/// Animated card color: retargeting starts a fresh blend from wherever the
/// previous one currently is, so rapid picks stay smooth.
#[derive(Debug)]
pub struct ColorBlend {
    previous: Color,
    target: Color,
    anim: Animated<f32>,
}

impl ColorBlend {
    pub fn new(initial: Color) -> Self {
        Self {
            previous: initial,
            target: initial,
            anim: Animated::transition(1.0, blend_easing()),
        }
    }

    /// Retarget the blend toward `next`. A no-op if already targeted.
    pub fn set(&mut self, next: Color) {
        if next == self.target {
            return;
        }
        self.previous = self.current();
        self.target = next;
        self.anim = Animated::transition(0.0, blend_easing());
        self.anim.update(1.0.into());
    }

    /// The color to paint this frame.
    pub fn current(&self) -> Color {
        mix(self.previous, self.target, *self.anim.value())
    }

    #[allow(dead_code)]
    pub fn target(&self) -> Color {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.anim.tick(now);
    }
}

/// Per-channel linear interpolation between two colors.
fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_settled_on_initial_color() {
        let blend = ColorBlend::new(Color::WHITE);
        assert_eq!(blend.current(), Color::WHITE);
        assert_eq!(blend.target(), Color::WHITE);
    }

    #[test]
    fn set_retargets_without_jumping() {
        let mut blend = ColorBlend::new(Color::BLACK);
        blend.set(Color::WHITE);
        assert_eq!(blend.target(), Color::WHITE);
        // The visible color has not jumped ahead of the animation.
        assert_eq!(blend.current(), Color::BLACK);
    }

    #[test]
    fn retargeting_same_color_is_a_noop() {
        let mut blend = ColorBlend::new(Color::BLACK);
        blend.set(Color::BLACK);
        assert!(!blend.is_animating());
    }

    #[test]
    fn mix_endpoints_and_midpoint() {
        assert_eq!(mix(Color::BLACK, Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(mix(Color::BLACK, Color::WHITE, 1.0), Color::WHITE);
        let mid = mix(Color::BLACK, Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
    }
}
