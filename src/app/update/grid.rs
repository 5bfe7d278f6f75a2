//! Grid interaction handlers: swatch picks, hover, and the decorative
//! chrome buttons.

use iced::{Color, Task};

use crate::app::message::Message;
use crate::app::state::App;
use crate::palette::Palette;

/// Resolve a pick to the color it should apply. Swatches that have not
/// landed in the grid yet are not selectable.
pub fn pick_target(board: &Palette, id: usize) -> Option<Color> {
    board
        .get(id)
        .filter(|swatch| swatch.added_to_grid())
        .map(|swatch| swatch.color)
}

impl App {
    pub fn handle_grid(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SwatchPicked(id) => {
                match pick_target(&self.board, *id) {
                    Some(color) => {
                        tracing::debug!(swatch = id, "card recolored");
                        self.ui.card_color.set(color);
                    }
                    None => {
                        tracing::debug!(swatch = id, "pick ignored, swatch not revealed yet");
                    }
                }
                Some(Task::none())
            }

            Message::SwatchHovered(swatch) => {
                self.ui.swatch_hover.set_hovered(*swatch);
                Some(Task::none())
            }

            // The mock renders these controls but wires them to nothing.
            Message::BackPressed => {
                tracing::debug!("back pressed");
                Some(Task::none())
            }
            Message::ProfilePressed => {
                tracing::debug!("profile pressed");
                Some(Task::none())
            }
            Message::ViewAllPressed => {
                tracing::debug!("view-all pressed");
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrevealed_swatch_is_not_selectable() {
        let board = Palette::standard();
        assert_eq!(pick_target(&board, 0), None);
        assert_eq!(pick_target(&board, 5), None);
    }

    #[test]
    fn revealed_swatch_yields_its_own_color() {
        let mut board = Palette::standard();
        board.mark_added_to_grid(3);

        let picked = pick_target(&board, 3).expect("revealed swatch must be selectable");
        assert_eq!(picked, board.get(3).unwrap().color);
        // Its neighbors stay unselectable.
        assert_eq!(pick_target(&board, 2), None);
    }

    #[test]
    fn out_of_range_pick_is_rejected() {
        let board = Palette::standard();
        assert_eq!(pick_target(&board, 99), None);
    }
}
