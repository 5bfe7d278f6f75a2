//! Application messages

/// Application messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // ============ Entrance ============
    /// The screen became visible; start the entrance choreography.
    IntroStarted,
    /// Frame tick while anything is animating.
    AnimationTick,

    // ============ Grid ============
    /// A grid swatch was clicked.
    SwatchPicked(usize),
    /// The hovered grid swatch changed (None on exit).
    SwatchHovered(Option<usize>),

    // ============ Chrome (decorative controls from the mock) ============
    BackPressed,
    ProfilePressed,
    ViewAllPressed,
}
