//! Input routing for tile selection.
//!
//! The grid itself only exposes pure queries; deciding what a click or a
//! key press means is the job of whichever component implements
//! [`Interactive`]. [`GridSelector`] is the standard implementation: it
//! translates a left pointer press into a nearest-tile pick and stores the
//! result in the grid's selection slot.

use glam::Vec2;

use crate::grid::HexGrid;

/// Pointer buttons, engine-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Keyboard input, engine-agnostic. `Other` carries whatever scan code the
/// windowing layer produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    Other(u32),
}

/// Capability interface for components that consume raw input events.
pub trait Interactive {
    fn handle_keyboard(&mut self, _key: Key) {}
    fn handle_pointer(&mut self, button: PointerButton, position: Vec2);
}

/// Routes pointer input to a grid's selection slot.
pub struct GridSelector<'a> {
    grid: &'a mut HexGrid,
}

impl<'a> GridSelector<'a> {
    pub fn new(grid: &'a mut HexGrid) -> Self {
        Self { grid }
    }
}

impl Interactive for GridSelector<'_> {
    fn handle_keyboard(&mut self, _key: Key) {
        // No keyboard bindings yet; selection is pointer-driven.
    }

    fn handle_pointer(&mut self, button: PointerButton, position: Vec2) {
        if button != PointerButton::Left {
            return;
        }
        // Picking an empty grid is a caller error; an empty grid simply has
        // nothing to select.
        if let Ok(index) = self.grid.pick_nearest(position) {
            self.grid.select(Some(index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRASS_COLOR;
    use crate::grid::GridIndex;
    use image::RgbImage;

    fn grass_grid(rows: u32, columns: u32) -> HexGrid {
        let img = RgbImage::from_pixel(columns, rows, GRASS_COLOR);
        HexGrid::from_pixels(800.0, 600.0, &img)
    }

    #[test]
    fn left_press_selects_nearest_tile() {
        let mut grid = grass_grid(3, 3);
        let target = GridIndex::new(1, 2);
        let point = grid.position(target).unwrap() + Vec2::new(1.0, 1.0);

        GridSelector::new(&mut grid).handle_pointer(PointerButton::Left, point);
        assert_eq!(grid.selected(), Some(target));
    }

    #[test]
    fn other_buttons_and_keys_leave_selection_alone() {
        let mut grid = grass_grid(2, 2);

        let mut selector = GridSelector::new(&mut grid);
        selector.handle_pointer(PointerButton::Right, Vec2::new(10.0, 10.0));
        selector.handle_keyboard(Key::Escape);
        assert!(grid.selected().is_none());
    }

    #[test]
    fn pressing_on_an_empty_grid_is_a_no_op() {
        let mut grid = HexGrid::empty();
        GridSelector::new(&mut grid).handle_pointer(PointerButton::Left, Vec2::ZERO);
        assert!(grid.selected().is_none());
    }
}
