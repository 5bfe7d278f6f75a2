//! Message update handlers - thin dispatcher delegating to submodules

mod grid;
mod intro;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to the appropriate submodule handler
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_intro(&message) {
            return task;
        }
        if let Some(task) = self.handle_grid(&message) {
            return task;
        }

        Task::none()
    }
}
