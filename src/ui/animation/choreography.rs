//! One-shot screen entrance choreography.
//!
//! The original design scheduled deferred closures for every transition;
//! here every transition is a row in a precomputed deadline table, applied
//! against elapsed time on each frame tick. No detached timers exist, so
//! dropping the owning state abandons everything still pending.
//!
//! Four named phases run concurrently once started, each with its own delay,
//! duration, and curve. After them, the six swatches reveal one by one in
//! strict reverse declaration order: stagger step `k` targets swatch `5 - k`
//! at `0.9 + 0.1 * k` seconds, so the last-declared swatch flips first.

use crate::palette::{Palette, SWATCH_COUNT};

use super::spring::SpringResponse;

/// Duration of a single swatch flip.
pub const ROTATE_SECS: f32 = 0.35;
/// Gap between a swatch landing in the grid and its stack copy hiding.
pub const STACK_HIDE_LAG: f32 = 0.11;
/// First reveal deadline.
pub const REVEAL_BASE: f32 = 0.9;
/// Spacing between consecutive reveal deadlines.
pub const REVEAL_STEP: f32 = 0.1;
/// Hex label fade-in after its swatch lands in the grid.
const TEXT_FADE_SECS: f32 = 0.25;

/// Spring used by the card entrance and panel reveal.
const ENTRANCE_SPRING: SpringResponse = SpringResponse::new(1.3, 0.7);
/// Settle window allotted to the entrance spring before it is pinned at 1.
const ENTRANCE_SPRING_SECS: f32 = 2.6;

/// Named entrance phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Card flips in from −270° and drops into its slot.
    CardEntrance,
    /// Title label and "View all" button slide into place.
    HeaderSlide,
    /// Bottom panel expands from zero height.
    PanelReveal,
    /// Forming stack scales 2.3×→1× while its overlay fades out.
    StackSettle,
}

/// Timing curve for a phase.
#[derive(Debug, Clone, Copy)]
pub enum Curve {
    EaseInOut,
    Spring(SpringResponse),
}

/// Start delay, duration, and curve of one phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseSpec {
    pub delay: f32,
    pub duration: f32,
    pub curve: Curve,
}

impl PhaseSpec {
    /// Progress at `elapsed` seconds since the choreography started.
    ///
    /// 0 before the delay, pinned at 1 once the duration has passed. Spring
    /// phases may transiently exceed 1 in between (overshoot).
    pub fn progress(&self, elapsed: f32) -> f32 {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            0.0
        } else if t >= self.duration {
            1.0
        } else {
            match self.curve {
                Curve::EaseInOut => ease_in_out(t / self.duration),
                Curve::Spring(spring) => spring.value_at(t),
            }
        }
    }

    fn ends_at(&self) -> f32 {
        self.delay + self.duration
    }
}

/// Phase timing table. Delays and curves carried over from the original
/// screen: card and panel share one delayed spring, the header and stack
/// ease in immediately.
pub fn phase_spec(phase: Phase) -> PhaseSpec {
    match phase {
        Phase::CardEntrance => PhaseSpec {
            delay: 0.3,
            duration: ENTRANCE_SPRING_SECS,
            curve: Curve::Spring(ENTRANCE_SPRING),
        },
        Phase::HeaderSlide => PhaseSpec {
            delay: 0.0,
            duration: 0.7,
            curve: Curve::EaseInOut,
        },
        Phase::PanelReveal => PhaseSpec {
            delay: 0.3,
            duration: ENTRANCE_SPRING_SECS,
            curve: Curve::Spring(ENTRANCE_SPRING),
        },
        Phase::StackSettle => PhaseSpec {
            delay: 0.0,
            duration: 0.8,
            curve: Curve::EaseInOut,
        },
    }
}

/// Cubic ease-in-out over a normalized 0..=1 input.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Flag transition kind for one deadline-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Rotate,
    AddToGrid,
    ShowText,
    HideInStack,
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: f32,
    swatch: usize,
    step: Step,
}

/// The screen animator: a sorted deadline table plus a cursor.
///
/// `advance` applies every row whose deadline has passed, in order. The
/// cursor only moves forward, so applying is idempotent and the palette
/// flags stay monotonic no matter how ticks arrive.
#[derive(Debug)]
pub struct Choreography {
    deadlines: Vec<Deadline>,
    cursor: usize,
}

impl Choreography {
    pub fn new() -> Self {
        let mut deadlines = Vec::with_capacity(SWATCH_COUNT * 4);
        for k in 0..SWATCH_COUNT {
            // Reverse declaration order: the last swatch reveals first.
            let swatch = SWATCH_COUNT - 1 - k;
            let rotate_at = REVEAL_BASE + k as f32 * REVEAL_STEP;
            let added_at = rotate_at + ROTATE_SECS;
            deadlines.push(Deadline {
                at: rotate_at,
                swatch,
                step: Step::Rotate,
            });
            deadlines.push(Deadline {
                at: added_at,
                swatch,
                step: Step::AddToGrid,
            });
            deadlines.push(Deadline {
                at: added_at,
                swatch,
                step: Step::ShowText,
            });
            deadlines.push(Deadline {
                at: added_at + STACK_HIDE_LAG,
                swatch,
                step: Step::HideInStack,
            });
        }
        // Stable sort keeps AddToGrid ahead of ShowText at equal deadlines.
        deadlines.sort_by(|a, b| a.at.total_cmp(&b.at));

        Self {
            deadlines,
            cursor: 0,
        }
    }

    /// Apply every transition due at `elapsed` seconds to the palette.
    pub fn advance(&mut self, elapsed: f32, palette: &mut Palette) {
        while let Some(deadline) = self.deadlines.get(self.cursor) {
            if deadline.at > elapsed {
                break;
            }
            match deadline.step {
                Step::Rotate => {
                    tracing::debug!(swatch = deadline.swatch, "swatch flip started");
                    palette.mark_rotated(deadline.swatch);
                }
                Step::AddToGrid => palette.mark_added_to_grid(deadline.swatch),
                Step::ShowText => palette.mark_text_visible(deadline.swatch),
                Step::HideInStack => palette.mark_removed_from_stack(deadline.swatch),
            }
            self.cursor += 1;
        }
    }

    /// Whether every deadline has been applied.
    pub fn all_applied(&self) -> bool {
        self.cursor == self.deadlines.len()
    }

    /// Progress of a named phase at `elapsed` seconds.
    pub fn phase_progress(&self, phase: Phase, elapsed: f32) -> f32 {
        phase_spec(phase).progress(elapsed)
    }

    /// Flip progress of a swatch's forming-stack copy, eased 0..=1.
    pub fn rotation_progress(&self, swatch: usize, elapsed: f32) -> f32 {
        let t = (elapsed - self.rotate_deadline(swatch)) / ROTATE_SECS;
        ease_in_out(t)
    }

    /// Opacity of a swatch's hex label, ramping in after the grid landing.
    pub fn text_alpha(&self, swatch: usize, elapsed: f32) -> f32 {
        let added_at = self.rotate_deadline(swatch) + ROTATE_SECS;
        ((elapsed - added_at) / TEXT_FADE_SECS).clamp(0.0, 1.0)
    }

    /// When the whole choreography has settled, including phase tails.
    pub fn is_settled(&self, elapsed: f32) -> bool {
        elapsed >= self.total_secs()
    }

    /// Time after which nothing moves anymore.
    pub fn total_secs(&self) -> f32 {
        let phases = [
            Phase::CardEntrance,
            Phase::HeaderSlide,
            Phase::PanelReveal,
            Phase::StackSettle,
        ];
        let phase_end = phases
            .into_iter()
            .map(|p| phase_spec(p).ends_at())
            .fold(0.0, f32::max);
        let reveal_end = self
            .deadlines
            .last()
            .map(|d| d.at + TEXT_FADE_SECS)
            .unwrap_or(0.0);
        phase_end.max(reveal_end)
    }

    /// Flip-start schedule as `(swatch, deadline)` pairs in firing order.
    pub fn activation_schedule(&self) -> Vec<(usize, f32)> {
        self.deadlines
            .iter()
            .filter(|d| d.step == Step::Rotate)
            .map(|d| (d.swatch, d.at))
            .collect()
    }

    fn rotate_deadline(&self, swatch: usize) -> f32 {
        let k = (SWATCH_COUNT - 1).saturating_sub(swatch);
        REVEAL_BASE + k as f32 * REVEAL_STEP
    }
}

impl Default for Choreography {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn full_run_reveals_every_swatch() {
        let mut intro = Choreography::new();
        let mut palette = Palette::standard();

        intro.advance(intro.total_secs() + 1.0, &mut palette);

        assert!(intro.all_applied());
        for (_, swatch) in palette.iter() {
            assert!(swatch.rotated());
            assert!(swatch.added_to_grid());
            assert!(swatch.text_visible());
            assert!(swatch.removed_from_stack());
        }
    }

    #[test]
    fn activation_order_is_reverse_declaration_order() {
        let intro = Choreography::new();
        let schedule = intro.activation_schedule();

        let order: Vec<usize> = schedule.iter().map(|(swatch, _)| *swatch).collect();
        assert_eq!(order, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn activation_deadlines_step_by_a_tenth_from_nine_tenths() {
        let intro = Choreography::new();
        let schedule = intro.activation_schedule();

        for (k, (_, at)) in schedule.iter().enumerate() {
            let expected = REVEAL_BASE + k as f32 * REVEAL_STEP;
            assert!((at - expected).abs() < EPS, "step {k}: {at} != {expected}");
        }
        // Strictly increasing.
        for pair in schedule.windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
        assert!((schedule[0].1 - 0.9).abs() < EPS);
        assert!((schedule[5].1 - 1.4).abs() < EPS);
    }

    #[test]
    fn last_declared_swatch_flips_first() {
        let mut intro = Choreography::new();
        let mut palette = Palette::standard();

        // Just past the first deadline: only swatch 5 has started.
        intro.advance(0.95, &mut palette);
        assert!(palette.get(5).unwrap().rotated());
        for id in 0..5 {
            assert!(!palette.get(id).unwrap().rotated(), "swatch {id} flipped early");
        }
    }

    #[test]
    fn grid_landing_waits_for_the_flip() {
        let mut intro = Choreography::new();
        let mut palette = Palette::standard();

        // Swatch 5 flips at 0.9 and lands at 0.9 + ROTATE_SECS.
        intro.advance(0.9 + ROTATE_SECS - 0.01, &mut palette);
        assert!(palette.get(5).unwrap().rotated());
        assert!(!palette.get(5).unwrap().added_to_grid());

        intro.advance(0.9 + ROTATE_SECS + 0.01, &mut palette);
        assert!(palette.get(5).unwrap().added_to_grid());
        assert!(palette.get(5).unwrap().text_visible());
        assert!(!palette.get(5).unwrap().removed_from_stack());
    }

    #[test]
    fn stack_copy_hides_a_beat_after_the_text_shows() {
        let mut intro = Choreography::new();
        let mut palette = Palette::standard();

        let added_at = 0.9 + ROTATE_SECS;
        intro.advance(added_at + STACK_HIDE_LAG - 0.01, &mut palette);
        assert!(palette.get(5).unwrap().text_visible());
        assert!(!palette.get(5).unwrap().removed_from_stack());

        intro.advance(added_at + STACK_HIDE_LAG + 0.01, &mut palette);
        assert!(palette.get(5).unwrap().removed_from_stack());
    }

    #[test]
    fn text_never_trails_removal() {
        // For every applied prefix of the timeline, a hidden stack copy
        // implies a visible label.
        let mut intro = Choreography::new();
        let mut palette = Palette::standard();

        let mut t = 0.0;
        while t < intro.total_secs() + 0.1 {
            intro.advance(t, &mut palette);
            for (id, swatch) in palette.iter() {
                if swatch.removed_from_stack() {
                    assert!(swatch.text_visible(), "swatch {id} hidden before its text");
                }
            }
            t += 0.017;
        }
    }

    #[test]
    fn rewinding_elapsed_time_applies_nothing_twice() {
        let mut intro = Choreography::new();
        let mut palette = Palette::standard();

        intro.advance(1.3, &mut palette);
        let rotated_before: Vec<bool> = palette.iter().map(|(_, s)| s.rotated()).collect();

        // A stale or repeated tick must not disturb anything.
        intro.advance(0.5, &mut palette);
        intro.advance(1.3, &mut palette);
        let rotated_after: Vec<bool> = palette.iter().map(|(_, s)| s.rotated()).collect();
        assert_eq!(rotated_before, rotated_after);
    }

    #[test]
    fn phase_progress_respects_delay_and_end() {
        let intro = Choreography::new();

        assert_eq!(intro.phase_progress(Phase::CardEntrance, 0.2), 0.0);
        assert_eq!(intro.phase_progress(Phase::PanelReveal, 0.0), 0.0);
        assert_eq!(intro.phase_progress(Phase::HeaderSlide, 0.7), 1.0);
        assert_eq!(intro.phase_progress(Phase::StackSettle, 5.0), 1.0);
        assert_eq!(intro.phase_progress(Phase::CardEntrance, 10.0), 1.0);

        let mid = intro.phase_progress(Phase::HeaderSlide, 0.35);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn ease_in_out_hits_its_anchors() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < EPS);
        // Slow start, fast middle.
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn text_alpha_ramps_after_landing() {
        let intro = Choreography::new();
        let added_at = 0.9 + ROTATE_SECS;

        assert_eq!(intro.text_alpha(5, added_at - 0.1), 0.0);
        let mid = intro.text_alpha(5, added_at + 0.1);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(intro.text_alpha(5, added_at + 1.0), 1.0);
    }

    #[test]
    fn settles_after_the_longest_tail() {
        let intro = Choreography::new();
        let total = intro.total_secs();

        assert!(!intro.is_settled(total - 0.1));
        assert!(intro.is_settled(total));
        // The delayed entrance spring is the longest phase.
        assert!((total - (0.3 + ENTRANCE_SPRING_SECS)).abs() < EPS);
    }
}
