//! The hex grid: a dense row-major table of terrain tiles built from a
//! decoded map image, with neighbor enumeration and nearest-point picking.

use glam::Vec2;
use image::RgbImage;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::layout::HexLayout;
use crate::terrain::TerrainKind;

/// Neighbor offsets as (d_row, d_col) for tiles on even rows.
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [(0, 1), (1, 0), (0, -1), (-1, 0), (1, -1), (1, 1)];

/// Neighbor offsets as (d_row, d_col) for tiles on odd rows. Offset grids
/// shift alternate rows horizontally, so the two diagonal entries differ
/// from the even-row table.
const ODD_ROW_OFFSETS: [(i32, i32); 6] = [(0, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (-1, -1)];

/// Identity of one tile: 0-based (row, column) on the offset grid.
///
/// Ordered row-major: `(0, 5) < (1, 0)`. Row parity selects the
/// neighbor-offset table for the tile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridIndex {
    pub row: u32,
    pub col: u32,
}

impl GridIndex {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// One hex cell. Immutable after construction; consumers refer to tiles by
/// [`GridIndex`], never by reference identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub index: GridIndex,
    pub terrain: TerrainKind,
    /// Movement cost, copied from the terrain kind at build time.
    pub cost: f32,
    /// Screen-space hex center, computed once by the layout.
    pub position: Vec2,
}

/// A `rows` x `columns` table of hex tiles in row-major order.
///
/// Built once from a decoded image; the shape and every tile's terrain,
/// cost, and position never change afterwards. Only the transient
/// `selected` slot is mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexGrid {
    rows: u32,
    columns: u32,
    tiles: Vec<Tile>,
    layout: Option<HexLayout>,
    selected: Option<GridIndex>,
}

impl HexGrid {
    /// The degenerate empty grid. Every query on it returns empty results
    /// (or [`GridError::InvalidState`] for `pick_nearest`).
    pub fn empty() -> Self {
        Self {
            rows: 0,
            columns: 0,
            tiles: Vec::new(),
            layout: None,
            selected: None,
        }
    }

    /// Build a grid from a decoded map image.
    ///
    /// One tile per pixel: `columns = image width`, `rows = image height`,
    /// and the tile at (row, col) is classified from the pixel at
    /// (x = col, y = row). Total: unknown colors become
    /// [`TerrainKind::Unknown`] tiles, and a zero-sized image yields the
    /// empty grid, so construction never fails.
    pub fn from_pixels(screen_width: f32, screen_height: f32, pixels: &RgbImage) -> Self {
        let columns = pixels.width();
        let rows = pixels.height();

        if rows == 0 || columns == 0 {
            return Self::empty();
        }

        let layout = HexLayout::new(screen_width, screen_height, rows, columns);

        let mut tiles = Vec::with_capacity(rows as usize * columns as usize);
        for row in 0..rows {
            for col in 0..columns {
                let index = GridIndex::new(row, col);
                let (terrain, cost) = TerrainKind::classify(*pixels.get_pixel(col, row));
                tiles.push(Tile {
                    index,
                    terrain,
                    cost,
                    position: layout.position(index),
                });
            }
        }

        debug!(
            "built {rows}x{columns} hex grid ({} tiles, hex width {:.1})",
            tiles.len(),
            layout.hex_width()
        );

        Self {
            rows,
            columns,
            tiles,
            layout: Some(layout),
            selected: None,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Layout the grid was built with; `None` for the empty grid.
    pub fn layout(&self) -> Option<HexLayout> {
        self.layout
    }

    /// Whether `index` addresses a tile of this grid.
    pub fn contains(&self, index: GridIndex) -> bool {
        index.row < self.rows && index.col < self.columns
    }

    /// Tile at `index`, or `None` when out of bounds.
    pub fn get(&self, index: GridIndex) -> Option<&Tile> {
        if !self.contains(index) {
            return None;
        }
        self.tiles
            .get(index.row as usize * self.columns as usize + index.col as usize)
    }

    /// Screen-space center of the tile at `index`.
    pub fn position(&self, index: GridIndex) -> Option<Vec2> {
        self.get(index).map(|tile| tile.position)
    }

    /// All tiles in row-major order, for render enumeration.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The up-to-six in-bounds neighbors of `index`.
    ///
    /// The offset table is selected by row parity; candidates falling off
    /// any grid edge are silently skipped, so boundary tiles yield fewer
    /// than six entries. An out-of-bounds `index` yields nothing.
    pub fn neighbors(&self, index: GridIndex) -> impl Iterator<Item = GridIndex> + '_ {
        let table: &[(i32, i32); 6] = if index.row % 2 == 0 {
            &EVEN_ROW_OFFSETS
        } else {
            &ODD_ROW_OFFSETS
        };
        let valid = self.contains(index);

        table.iter().filter_map(move |&(d_row, d_col)| {
            if !valid {
                return None;
            }
            let row = index.row as i64 + d_row as i64;
            let col = index.col as i64 + d_col as i64;
            let in_bounds =
                row >= 0 && row < self.rows as i64 && col >= 0 && col < self.columns as i64;
            in_bounds.then(|| GridIndex::new(row as u32, col as u32))
        })
    }

    /// Index of the tile whose center is nearest to `point`.
    ///
    /// Linear scan over all tiles comparing squared Euclidean distance.
    /// Ties go to the first tile in row-major order, so the result is
    /// deterministic. The grid must be non-empty; picking on an empty grid
    /// is a caller error and returns [`GridError::InvalidState`].
    pub fn pick_nearest(&self, point: Vec2) -> Result<GridIndex, GridError> {
        let mut best: Option<(GridIndex, f32)> = None;

        for tile in &self.tiles {
            let dist = point.distance_squared(tile.position);
            let closer = match best {
                Some((_, closest)) => dist < closest,
                None => true,
            };
            if closer {
                best = Some((tile.index, dist));
            }
        }

        best.map(|(index, _)| index)
            .ok_or(GridError::InvalidState("pick_nearest requires a non-empty grid"))
    }

    /// Currently selected tile index, if any.
    pub fn selected(&self) -> Option<GridIndex> {
        self.selected
    }

    /// Currently selected tile, if any.
    pub fn selected_tile(&self) -> Option<&Tile> {
        self.selected.and_then(|index| self.get(index))
    }

    /// Set or clear the selection. Out-of-bounds indices are ignored so the
    /// slot can never hold an index the grid cannot resolve.
    pub fn select(&mut self, index: Option<GridIndex>) {
        match index {
            Some(i) if !self.contains(i) => {}
            _ => self.selected = index,
        }
    }
}
