// src/app/state.rs
//! Application state definitions

use std::time::Instant;

use crate::palette::{DEFAULT_CARD_COLOR, Palette};
use crate::ui::animation::{Choreography, ColorBlend, SwatchHover};

/// Main application state
pub struct App {
    /// The swatch records (the only data this app has).
    pub board: Palette,
    /// UI state (entrance choreography, selection, hover).
    pub ui: UiState,
}

/// UI view state
pub struct UiState {
    /// The one-shot entrance animator.
    pub intro: Choreography,
    /// When the screen appeared; None until the first message arrives.
    pub intro_started: Option<Instant>,
    /// Seconds since `intro_started`, refreshed on each frame tick. The view
    /// reads this instead of sampling the clock itself.
    pub intro_elapsed: f32,
    /// Animated card face color.
    pub card_color: ColorBlend,
    /// Hover lift on grid swatches.
    pub swatch_hover: SwatchHover,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            intro: Choreography::new(),
            intro_started: None,
            intro_elapsed: 0.0,
            card_color: ColorBlend::new(DEFAULT_CARD_COLOR),
            swatch_hover: SwatchHover::new(),
        }
    }

    /// Whether the entrance choreography still has motion left.
    pub fn intro_running(&self) -> bool {
        self.intro_started.is_some() && !self.intro.is_settled(self.intro_elapsed)
    }

    /// Whether anything on screen needs frame ticks right now.
    pub fn has_active_animations(&self) -> bool {
        crate::app::subscription_logic::needs_frame_subscription(
            self.intro_running(),
            self.card_color.is_animating(),
            self.swatch_hover.is_animating(),
        )
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
