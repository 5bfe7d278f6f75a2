//! The credit-card face.
//!
//! The entrance flip has no 3D rotation to lean on, so the −270°→0° spin
//! maps to a vertical squash (`|cos θ|` of the remaining angle) while the
//! card drops into its slot from above the clipped container.

use iced::widget::{Space, column, container, row, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::ui::theme;

/// Height of the card's slot in the screen layout.
pub const SLOT_HEIGHT: f32 = 250.0;

const CARD_HEIGHT: f32 = 210.0;
/// How far above its slot the card starts.
const DROP_TRAVEL: f32 = 480.0;

/// Build the card for a given face color and entrance progress.
///
/// `entrance` is 0 before the drop starts and settles at 1; spring overshoot
/// above 1 briefly squashes past flat.
pub fn view<'a, Message: 'a>(face: iced::Color, entrance: f32) -> Element<'a, Message> {
    let remaining = (1.0 - entrance) * 270.0_f32;
    let squash = remaining.to_radians().cos().abs();
    let rise = ((1.0 - entrance) * DROP_TRAVEL).max(0.0);

    let body = container(card_content())
        .width(Fill)
        .height((CARD_HEIGHT * squash).max(1.0))
        .clip(true)
        .style(move |_theme| theme::card_face(face));

    // Bottom-aligned column: growing the spacer pushes the card up and out
    // of the clipped slot, so shrinking it reads as a drop from above.
    container(column![body, Space::new().height(rise)])
        .width(Fill)
        .height(SLOT_HEIGHT)
        .align_y(Alignment::End)
        .padding(Padding::new(0.0).left(16.0).right(16.0))
        .clip(true)
        .into()
}

fn card_content<'a, Message: 'a>() -> Element<'a, Message> {
    // Masked number: four dots and the last group.
    let number = row![
        dot(),
        dot(),
        dot(),
        dot(),
        text("7864").size(14).font(iced::Font {
            weight: theme::SEMIBOLD,
            ..Default::default()
        }),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let holder = row![
        container(text("Hanna Adler").size(18).font(iced::Font {
            weight: theme::SEMIBOLD,
            ..Default::default()
        }))
        .width(Fill),
        outline_ring(30.0, 1.0, 1.0),
        outline_ring(30.0, 1.0, 1.0),
    ]
    .spacing(2)
    .align_y(Alignment::Center);

    let details = column![number, Space::new().height(Fill), holder]
        .width(Fill)
        .height(Fill)
        .padding(20);

    // Decorative corner ring sits behind the details.
    let corner_ring = container(outline_ring(110.0, 18.0, 0.5))
        .width(Fill)
        .align_x(Alignment::End)
        .padding(Padding::new(0.0).top(8.0).right(8.0));

    stack![corner_ring, details].width(Fill).height(Fill).into()
}

fn dot<'a, Message: 'a>() -> Element<'a, Message> {
    container(Space::new())
        .width(6)
        .height(6)
        .style(|_theme| theme::circle(theme::TEXT_PRIMARY, 6.0))
        .into()
}

fn outline_ring<'a, Message: 'a>(diameter: f32, stroke: f32, alpha: f32) -> Element<'a, Message> {
    let color = iced::Color {
        a: alpha,
        ..theme::TEXT_PRIMARY
    };
    container(Space::new())
        .width(diameter)
        .height(diameter)
        .style(move |_theme| theme::ring(color, stroke, diameter))
        .into()
}
