//! Hover lift for the grid swatches, built on `iced_anim`.
//!
//! At most one swatch is hovered at a time, so only two animations are
//! tracked: the swatch fading in and the previous one fading out.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Exclusive hover state for the swatch grid, keyed by swatch id.
#[derive(Debug)]
pub struct SwatchHover {
    active: Option<usize>,
    active_anim: Animated<f32>,
    fading: Option<usize>,
    fading_anim: Animated<f32>,
}

impl SwatchHover {
    pub fn new() -> Self {
        Self {
            active: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Move the hover to `swatch`, or clear it with `None`. The previously
    /// hovered swatch keeps its current value and fades back out.
    pub fn set_hovered(&mut self, swatch: Option<usize>) {
        if self.active == swatch {
            return;
        }

        if let Some(old) = self.active.take() {
            self.fading = Some(old);
            let current = *self.active_anim.value();
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new) = swatch {
            self.active = Some(new);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Lift progress for a swatch, 0.0 to 1.0.
    pub fn progress(&self, swatch: usize) -> f32 {
        if self.active == Some(swatch) {
            *self.active_anim.value()
        } else if self.fading == Some(swatch) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Advance both animations; call on each frame tick.
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
        // Drop the fading slot once it has come back to rest.
        if self.fading.is_some()
            && *self.fading_anim.value() < 0.01
            && self.fading_anim.value() == self.fading_anim.target()
        {
            self.fading = None;
        }
    }
}

impl Default for SwatchHover {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_is_exclusive() {
        let mut hover = SwatchHover::new();
        assert_eq!(hover.progress(1), 0.0);

        hover.set_hovered(Some(1));
        hover.set_hovered(Some(2));
        assert_eq!(hover.active, Some(2));
        assert_eq!(hover.fading, Some(1));
    }

    #[test]
    fn unhover_moves_active_to_fading() {
        let mut hover = SwatchHover::new();
        hover.set_hovered(Some(3));
        hover.set_hovered(None);
        assert_eq!(hover.active, None);
        assert_eq!(hover.fading, Some(3));
    }

    #[test]
    fn progress_stays_in_unit_range() {
        let mut hover = SwatchHover::new();
        hover.set_hovered(Some(0));
        for swatch in 0..6 {
            let p = hover.progress(swatch);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}
