//! Entrance choreography handlers: start the clock, then apply due
//! transitions on every frame tick.

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_intro(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::IntroStarted => {
                self.ui.intro_started = Some(Instant::now());
                self.ui.intro_elapsed = 0.0;
                tracing::info!("screen entrance started");
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                if let Some(started) = self.ui.intro_started {
                    self.ui.intro_elapsed = now.duration_since(started).as_secs_f32();
                    self.ui.intro.advance(self.ui.intro_elapsed, &mut self.board);
                }
                self.ui.card_color.tick(now);
                self.ui.swatch_hover.tick(now);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
