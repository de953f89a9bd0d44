//! Screen-space placement of flat-top hexes on an offset grid.
//!
//! The layout is pure geometry: it knows the screen size and the grid shape,
//! derives a hex size that fits both axes, and places each (row, column)
//! index at its hex center. It holds no tile state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{COLUMN_ADVANCE, HEIGHT_RATIO, OUTLINE_THICKNESS, TOP_MARGIN, WIDTH_MARGIN};
use crate::grid::GridIndex;

const SQRT_3: f32 = 1.732_050_8;

/// Flat-top hex layout for a `rows` x `columns` offset grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    hex_size: f32,
}

impl HexLayout {
    /// Derive the layout for a grid of the given shape on the given screen.
    ///
    /// The hex size is the minimum of a width-derived and a height-derived
    /// candidate, so the grid overflows neither screen axis. Callers must
    /// guarantee `rows > 0 && columns > 0`; the grid builder never constructs
    /// a layout for an empty image.
    pub fn new(screen_width: f32, screen_height: f32, rows: u32, columns: u32) -> Self {
        debug_assert!(rows > 0 && columns > 0);

        let width_candidate = screen_width / columns as f32 * COLUMN_ADVANCE * WIDTH_MARGIN;
        let height_candidate = screen_height / rows as f32 * HEIGHT_RATIO;

        Self {
            hex_size: width_candidate.min(height_candidate),
        }
    }

    /// Width of one flat-top hex (horizontal corner-to-corner).
    pub fn hex_width(&self) -> f32 {
        self.hex_size * 2.0
    }

    /// Height of one flat-top hex (vertical edge-to-edge).
    pub fn hex_height(&self) -> f32 {
        self.hex_size * SQRT_3
    }

    /// Screen-space center of the hex at `index`.
    ///
    /// Closed form of the incremental walk that places the tiles: each
    /// column advances by 3/4 of a hex width plus half the outline
    /// thickness, odd columns sit half a hex above the row baseline, and
    /// each row's baseline advances by a full hex height plus outline.
    pub fn position(&self, index: GridIndex) -> Vec2 {
        let w = self.hex_width();
        let h = self.hex_height();
        let t = OUTLINE_THICKNESS;

        let x = (w + t) * COLUMN_ADVANCE + index.col as f32 * (w * COLUMN_ADVANCE + t / 2.0);

        let baseline = (h + t) * TOP_MARGIN + index.row as f32 * (h + t);
        let interlock = (index.col % 2) as f32 * (h / 2.0 + t / 2.0);

        Vec2::new(x, baseline - interlock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_size_is_min_of_both_candidates() {
        // Wide screen: the height candidate limits the size.
        let wide = HexLayout::new(4000.0, 300.0, 10, 10);
        assert_eq!(wide.hex_width(), 2.0 * (300.0 / 10.0 * HEIGHT_RATIO));

        // Tall screen: the width candidate limits the size.
        let tall = HexLayout::new(300.0, 4000.0, 10, 10);
        assert_eq!(
            tall.hex_width(),
            2.0 * (300.0 / 10.0 * COLUMN_ADVANCE * WIDTH_MARGIN)
        );
    }

    #[test]
    fn closed_form_matches_incremental_walk() {
        let rows = 5;
        let columns = 7;
        let layout = HexLayout::new(1024.0, 768.0, rows, columns);

        let w = layout.hex_width();
        let h = layout.hex_height();
        let t = OUTLINE_THICKNESS;

        // Literal re-walk of the placement loop: position first, then
        // advance the running offsets.
        let initial_x = (w + t) * COLUMN_ADVANCE;
        let initial_y = (h + t) * TOP_MARGIN;
        let mut offset_x = initial_x;
        let mut offset_y = initial_y;

        for row in 0..rows {
            for col in 0..columns {
                let expected = Vec2::new(offset_x, offset_y);
                let actual = layout.position(GridIndex::new(row, col));
                assert!(
                    (actual - expected).length() < 1e-3,
                    "index ({row},{col}): closed form {actual:?} vs walk {expected:?}"
                );

                offset_x += w * COLUMN_ADVANCE + t / 2.0;
                if col % 2 == 0 {
                    offset_y -= h / 2.0 + t / 2.0;
                } else {
                    offset_y += h / 2.0 + t / 2.0;
                }
            }
            offset_x = initial_x;
            offset_y = initial_y + (row + 1) as f32 * (h + t);
        }
    }

    #[test]
    fn odd_columns_interlock_above_even_columns() {
        let layout = HexLayout::new(800.0, 600.0, 4, 4);
        let even = layout.position(GridIndex::new(1, 0));
        let odd = layout.position(GridIndex::new(1, 1));

        assert!(odd.y < even.y, "odd column must sit above the row baseline");
        assert!(
            (even.y - odd.y - (layout.hex_height() / 2.0 + OUTLINE_THICKNESS / 2.0)).abs() < 1e-4
        );
    }

    #[test]
    fn rows_advance_by_full_hex_height() {
        let layout = HexLayout::new(800.0, 600.0, 4, 4);
        let top = layout.position(GridIndex::new(0, 2));
        let below = layout.position(GridIndex::new(1, 2));

        assert_eq!(top.x, below.x);
        assert!((below.y - top.y - (layout.hex_height() + OUTLINE_THICKNESS)).abs() < 1e-4);
    }
}
