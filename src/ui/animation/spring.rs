//! Closed-form spring response for the entrance phases.
//!
//! Analytical solution rather than frame-by-frame integration, normalized to
//! a unit step: position starts at 0 with zero velocity and settles at 1.
//!
//! Parameters follow the response/damping-fraction convention: `response` is
//! the undamped oscillation period in seconds, `damping_fraction` is the
//! ratio to critical damping (below 1.0 overshoots).
//!
//! With mass 1 and `delta = 1`:
//!
//! ```text
//! stiffness = (2π / response)²
//! damping   = damping_fraction * 2 * sqrt(stiffness)
//!
//! overdamped  (ζ ≥ 1): x(t) = 1 - (1 + t * sqrt(k)) * e^(-t * sqrt(k))
//! underdamped (ζ < 1): ω = sqrt(4k - d²) / 2
//!                      x(t) = 1 - (cos(ωt) + (d / 2ω) * sin(ωt)) * e^(-t * d / 2)
//! ```

use std::f32::consts::TAU;

/// Spring timing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringResponse {
    /// Undamped oscillation period, in seconds.
    pub response: f32,
    /// 1.0 is critically damped; lower values overshoot.
    pub damping_fraction: f32,
}

impl SpringResponse {
    pub const fn new(response: f32, damping_fraction: f32) -> Self {
        Self {
            response,
            damping_fraction,
        }
    }

    pub fn is_overdamped(&self) -> bool {
        self.damping_fraction >= 1.0
    }

    /// Position at `t` seconds after release. Clamped to 0 for `t <= 0`;
    /// may exceed 1 transiently when underdamped.
    pub fn value_at(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }

        let stiffness = (TAU / self.response).powi(2);
        let damping = self.damping_fraction * 2.0 * stiffness.sqrt();

        if self.is_overdamped() {
            let angular = -stiffness.sqrt();
            1.0 - (1.0 - t * angular) * (t * angular).exp()
        } else {
            let damping_frequency = (4.0 * stiffness - damping * damping).sqrt();
            let leftover = damping / damping_frequency;
            let dfm = 0.5 * damping_frequency;
            let dm = -0.5 * damping;
            1.0 - ((t * dfm).cos() + (t * dfm).sin() * leftover) * (t * dm).exp()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let spring = SpringResponse::new(1.3, 0.7);
        assert_eq!(spring.value_at(0.0), 0.0);
        assert_eq!(spring.value_at(-1.0), 0.0);
    }

    #[test]
    fn settles_at_one() {
        let spring = SpringResponse::new(1.3, 0.7);
        assert!((spring.value_at(30.0) - 1.0).abs() < 1e-3);

        let stiff = SpringResponse::new(0.4, 1.0);
        assert!((stiff.value_at(30.0) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn underdamped_overshoots() {
        let spring = SpringResponse::new(1.3, 0.7);
        let overshoot = (0..300)
            .map(|i| spring.value_at(i as f32 * 0.01))
            .fold(0.0_f32, f32::max);
        assert!(overshoot > 1.0, "damping below critical should overshoot");
    }

    #[test]
    fn overdamped_never_overshoots() {
        let spring = SpringResponse::new(1.3, 1.4);
        assert!(spring.is_overdamped());
        for i in 0..600 {
            let v = spring.value_at(i as f32 * 0.01);
            assert!(v <= 1.0 + 1e-4, "overdamped response crossed target");
        }
    }

    #[test]
    fn response_rises_monotonically_early_on() {
        let spring = SpringResponse::new(1.3, 0.7);
        let early: Vec<f32> = (0..20).map(|i| spring.value_at(i as f32 * 0.02)).collect();
        for pair in early.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }
}
