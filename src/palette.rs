//! The fixed swatch palette and its per-swatch display flags.
//!
//! Six swatches are built once at startup and never destroyed. Each carries
//! four presentational flags that only ever flip false→true, driven by the
//! entrance choreography. `removed_from_stack` hides a swatch in the forming
//! stack while `added_to_grid` shows it in the permanent grid - a handoff,
//! not a deletion. Only the update loop mutates flags, through the `mark_*`
//! methods below.

use iced::{Color, color};

/// The palette is always exactly six swatches.
pub const SWATCH_COUNT: usize = 6;

/// Default card face color (the pink swatch).
pub const DEFAULT_CARD_COLOR: Color = color!(0xFE9EC4);

/// One color swatch with its display state.
#[derive(Debug, Clone)]
pub struct Swatch {
    /// Displayed hex code, e.g. `#15654B`.
    pub hex_label: &'static str,
    pub color: Color,
    rotated: bool,
    added_to_grid: bool,
    text_visible: bool,
    removed_from_stack: bool,
}

impl Swatch {
    const fn new(hex_label: &'static str, color: Color) -> Self {
        Self {
            hex_label,
            color,
            rotated: false,
            added_to_grid: false,
            text_visible: false,
            removed_from_stack: false,
        }
    }

    /// Whether the forming-stack copy has started its flip.
    pub fn rotated(&self) -> bool {
        self.rotated
    }

    /// Whether the swatch has landed in the permanent grid.
    pub fn added_to_grid(&self) -> bool {
        self.added_to_grid
    }

    /// Whether the hex label under the grid cell is shown.
    pub fn text_visible(&self) -> bool {
        self.text_visible
    }

    /// Whether the forming-stack copy is hidden.
    pub fn removed_from_stack(&self) -> bool {
        self.removed_from_stack
    }
}

/// The ordered store of all six swatches. Swatch ids are their indices.
#[derive(Debug, Clone)]
pub struct Palette {
    swatches: [Swatch; SWATCH_COUNT],
}

impl Palette {
    /// The standard palette, in declaration order.
    pub fn standard() -> Self {
        Self {
            swatches: [
                Swatch::new("#15654B", color!(0x15654B)),
                Swatch::new("#DAA4FF", color!(0xDAA4FF)),
                Swatch::new("#FFD90A", color!(0xFFD90A)),
                Swatch::new("#FE9EC4", color!(0xFE9EC4)),
                Swatch::new("#FB3272", color!(0xFB3272)),
                Swatch::new("#4460EE", color!(0x4460EE)),
            ],
        }
    }

    pub fn get(&self, id: usize) -> Option<&Swatch> {
        self.swatches.get(id)
    }

    /// Iterate swatches with their ids, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Swatch)> {
        self.swatches.iter().enumerate()
    }

    pub fn mark_rotated(&mut self, id: usize) {
        if let Some(swatch) = self.swatches.get_mut(id) {
            swatch.rotated = true;
        }
    }

    pub fn mark_added_to_grid(&mut self, id: usize) {
        if let Some(swatch) = self.swatches.get_mut(id) {
            swatch.added_to_grid = true;
        }
    }

    pub fn mark_text_visible(&mut self, id: usize) {
        if let Some(swatch) = self.swatches.get_mut(id) {
            swatch.text_visible = true;
        }
    }

    pub fn mark_removed_from_stack(&mut self, id: usize) {
        if let Some(swatch) = self.swatches.get_mut(id) {
            swatch.removed_from_stack = true;
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
