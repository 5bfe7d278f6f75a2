// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::animation::Phase;
use crate::ui::components::{credit_card, header, swatch_grid};
use crate::ui::theme;

impl App {
    /// Build the screen from the current entrance progress and selection.
    pub fn view(&self) -> Element<'_, Message> {
        let elapsed = self.ui.intro_elapsed;
        let entrance = self.ui.intro.phase_progress(Phase::CardEntrance, elapsed);
        let slide = self.ui.intro.phase_progress(Phase::HeaderSlide, elapsed);

        let content = column![
            header::top_bar(),
            credit_card::view(self.ui.card_color.current(), entrance),
            header::title_row(slide),
            swatch_grid::view(&self.board, &self.ui.intro, elapsed, &self.ui.swatch_hover),
        ]
        .width(Fill)
        .height(Fill);

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::screen)
            .into()
    }
}
