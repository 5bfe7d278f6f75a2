//! Theme for the card screen. Dark mode only, matching the mock.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector, color};

// ============================================================================
// Color palette
// ============================================================================

/// Screen backdrop.
pub const BACKGROUND: Color = color!(0x1d1a2f);

/// Bottom panel behind the grid.
pub const PANEL: Color = color!(0x000000);

/// Raised surface (profile placeholder).
pub const SURFACE: Color = color!(0x322d4d);

pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_MUTED: Color = color!(0xb3b3b3);

/// Accent used by the "View all" link (the pink swatch).
pub const ACCENT_PINK: Color = color!(0xFE9EC4);

/// Semibold weight for titles and the card number.
pub const SEMIBOLD: iced::font::Weight = iced::font::Weight::Semibold;

// ============================================================================
// Container styles
// ============================================================================

/// Whole-screen background.
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Bottom panel with large rounded top corners.
pub fn bottom_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL)),
        border: Border {
            radius: iced::border::Radius {
                top_left: 40.0,
                top_right: 40.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A color swatch rectangle, with an optional hover lift shadow.
pub fn swatch(color: Color, hover_progress: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25 + 0.25 * hover_progress),
            offset: Vector::new(0.0, 2.0 + 4.0 * hover_progress),
            blur_radius: 6.0 + 10.0 * hover_progress,
        },
        ..Default::default()
    }
}

/// The card face.
pub fn card_face(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            radius: 15.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 18.0,
        },
        ..Default::default()
    }
}

/// Overlay masking the forming stack while it settles.
pub fn stack_overlay(alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..BACKGROUND
        })),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled dot or avatar circle; `diameter` fixes the corner radius.
pub fn circle(color: Color, diameter: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: (diameter / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outline-only ring; `diameter` fixes the corner radius.
pub fn ring(stroke: Color, width: f32, diameter: f32) -> container::Style {
    container::Style {
        border: Border {
            color: stroke,
            width,
            radius: (diameter / 2.0).into(),
        },
        ..Default::default()
    }
}

// ============================================================================
// Button styles
// ============================================================================

/// Borderless button for the top bar and "View all" link.
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => TEXT_MUTED,
        _ => TEXT_PRIMARY,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
