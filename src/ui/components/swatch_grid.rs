//! The lower half of the screen: rising panel, forming stack, and the
//! permanent two-column grid the swatches land in.
//!
//! Both regions render from the same palette: a swatch shows in the forming
//! stack until `removed_from_stack`, and in the grid once `added_to_grid`,
//! so the handoff overlaps by design. Swatch 180° flips map to a horizontal
//! squash, matching the card's fake rotation.

use iced::widget::{Space, Stack, column, container, mouse_area, row, stack, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::palette::{Palette, Swatch};
use crate::ui::animation::{Choreography, Phase, SwatchHover};
use crate::ui::theme;

const SWATCH_WIDTH: f32 = 150.0;
const SWATCH_HEIGHT_START: f32 = 150.0;
const SWATCH_HEIGHT_END: f32 = 60.0;
/// The forming stack starts blown up and settles to natural size.
const STACK_SCALE_START: f32 = 2.3;
const PANEL_MAX_HEIGHT: f32 = 380.0;
const GRID_SPACING: f32 = 15.0;

pub fn view<'a>(
    board: &'a Palette,
    intro: &'a Choreography,
    elapsed: f32,
    hover: &'a SwatchHover,
) -> Element<'a, Message> {
    let panel_p = intro.phase_progress(Phase::PanelReveal, elapsed);
    let settle = intro.phase_progress(Phase::StackSettle, elapsed);

    // Black panel growing up from the bottom edge.
    let panel = column![
        Space::new().height(Fill),
        container(Space::new())
            .width(Fill)
            .height((PANEL_MAX_HEIGHT * panel_p).max(0.0))
            .style(theme::bottom_panel),
    ]
    .width(Fill)
    .height(Fill);

    stack![
        panel,
        forming_stack(board, intro, elapsed, settle),
        grid(board, intro, elapsed, hover),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}

/// All not-yet-consumed swatches stacked at the center, plus the fading
/// overlay that sells the scale/opacity settle.
fn forming_stack<'a>(
    board: &'a Palette,
    intro: &'a Choreography,
    elapsed: f32,
    settle: f32,
) -> Element<'a, Message> {
    let scale = STACK_SCALE_START + (1.0 - STACK_SCALE_START) * settle;
    let width = SWATCH_WIDTH * scale;
    let height =
        (SWATCH_HEIGHT_START + (SWATCH_HEIGHT_END - SWATCH_HEIGHT_START) * settle) * scale;

    let mut layers: Vec<Element<'a, Message>> = Vec::new();
    for (id, swatch) in board.iter() {
        if swatch.removed_from_stack() {
            continue;
        }
        let flip = flip_width_factor(intro.rotation_progress(id, elapsed));
        let color = swatch.color;
        layers.push(centered(
            container(Space::new())
                .width((width * flip).max(1.0))
                .height(height.max(1.0))
                .style(move |_theme| theme::swatch(color, 0.0)),
        ));
    }

    let overlay_alpha = 1.0 - settle;
    if overlay_alpha > 0.005 {
        layers.push(centered(
            container(Space::new())
                .width(width.max(1.0))
                .height(height.max(1.0))
                .style(move |_theme| theme::stack_overlay(overlay_alpha)),
        ));
    }

    Stack::with_children(layers).width(Fill).height(Fill).into()
}

/// The permanent grid, two columns in declaration order. Cells are inert
/// placeholders until their swatch has landed.
fn grid<'a>(
    board: &'a Palette,
    intro: &'a Choreography,
    elapsed: f32,
    hover: &'a SwatchHover,
) -> Element<'a, Message> {
    let cells: Vec<Element<'a, Message>> = board
        .iter()
        .map(|(id, swatch)| grid_cell(id, swatch, intro, elapsed, hover))
        .collect();

    let mut rows = column![].spacing(GRID_SPACING);
    let mut iter = cells.into_iter();
    while let (Some(left), Some(right)) = (iter.next(), iter.next()) {
        rows = rows.push(row![left, right].spacing(GRID_SPACING));
    }

    container(rows)
        .width(Fill)
        .align_x(Alignment::Center)
        .padding(iced::Padding::new(0.0).top(40.0))
        .into()
}

fn grid_cell<'a>(
    id: usize,
    swatch: &'a Swatch,
    intro: &'a Choreography,
    elapsed: f32,
    hover: &'a SwatchHover,
) -> Element<'a, Message> {
    let tile: Element<'a, Message> = if swatch.added_to_grid() {
        let lift = hover.progress(id);
        let color = swatch.color;
        mouse_area(
            container(Space::new())
                .width(SWATCH_WIDTH)
                .height(SWATCH_HEIGHT_END)
                .style(move |_theme| theme::swatch(color, lift)),
        )
        .on_press(Message::SwatchPicked(id))
        .on_enter(Message::SwatchHovered(Some(id)))
        .on_exit(Message::SwatchHovered(None))
        .into()
    } else {
        Space::new()
            .width(SWATCH_WIDTH)
            .height(SWATCH_HEIGHT_END)
            .into()
    };

    let alpha = if swatch.text_visible() {
        intro.text_alpha(id, elapsed)
    } else {
        0.0
    };
    let label = text(swatch.hex_label).size(12).color(Color {
        a: alpha,
        ..theme::TEXT_MUTED
    });

    column![tile, label].spacing(6).into()
}

fn centered<'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}

/// Width factor of a tile mid-flip: 1 → 0 → 1 across a 180° turn.
fn flip_width_factor(rotation: f32) -> f32 {
    (rotation * std::f32::consts::PI).cos().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_factor_pinches_at_quarter_turn() {
        assert!((flip_width_factor(0.0) - 1.0).abs() < 1e-6);
        assert!(flip_width_factor(0.5) < 1e-6);
        assert!((flip_width_factor(1.0) - 1.0).abs() < 1e-6);
    }
}
