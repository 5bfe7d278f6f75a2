//! Top bar (back + profile) and the sliding title row.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

/// How far out of place the title row starts.
const SLIDE_DISTANCE: f32 = 200.0;

pub fn top_bar<'a>() -> Element<'a, Message> {
    let back = button(text("←").size(22))
        .padding(4)
        .style(theme::ghost_button)
        .on_press(Message::BackPressed);

    let profile = button(
        container(Space::new())
            .width(45)
            .height(45)
            .style(|_theme| theme::circle(theme::SURFACE, 45.0)),
    )
    .padding(0)
    .style(theme::ghost_button)
    .on_press(Message::ProfilePressed);

    row![back, Space::new().width(Fill), profile]
        .align_y(Alignment::Center)
        .padding(Padding::new(16.0).bottom(5.0))
        .into()
}

/// Title and "View all" converge horizontally as `slide` goes 0→1.
pub fn title_row<'a>(slide: f32) -> Element<'a, Message> {
    let offset = SLIDE_DISTANCE * (1.0 - slide.clamp(0.0, 1.0));

    let title = container(text("Choose a color").size(20).font(iced::Font {
        weight: theme::SEMIBOLD,
        ..Default::default()
    }))
    .width(Fill)
    .padding(Padding::new(0.0).left(offset));

    let view_all = container(
        button(
            column![
                text("View all").size(14).color(theme::ACCENT_PINK),
                // Stand-in underline.
                container(Space::new())
                    .width(52)
                    .height(1)
                    .style(|_theme| theme::circle(theme::ACCENT_PINK, 1.0)),
            ]
            .spacing(1),
        )
        .padding(0)
        .style(theme::ghost_button)
        .on_press(Message::ViewAllPressed),
    )
    .padding(Padding::new(0.0).right(offset));

    row![title, view_all]
        .align_y(Alignment::Center)
        .padding(16)
        .into()
}
