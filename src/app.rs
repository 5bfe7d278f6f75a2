//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::palette::Palette;

pub use message::Message;
pub use state::{App, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            board: Palette::standard(),
            ui: UiState::new(),
        };

        // Kick off the entrance choreography once the runtime is up.
        (app, Task::done(Message::IntroStarted))
    }

    pub fn title(&self) -> String {
        "Cardstock".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Frame ticks only while something is actually moving.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_frame_subscription(
        intro_running: bool,
        color_blending: bool,
        hover_animating: bool,
    ) -> bool {
        intro_running || color_blending || hover_animating
    }
}
