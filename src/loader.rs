//! Map image loading
//!
//! Thin I/O wrapper: decodes an image file into RGB pixels and hands them to
//! the grid builder. Everything interesting happens in [`HexGrid`]; this
//! module only owns the fallible file/decode step.

use std::path::Path;

use log::info;

use crate::error::MapLoadError;
use crate::grid::HexGrid;

/// Decode the image at `path` and build a hex grid fitted to the given
/// screen dimensions. One image pixel becomes one tile.
pub fn load_map(
    path: impl AsRef<Path>,
    screen_width: f32,
    screen_height: f32,
) -> Result<HexGrid, MapLoadError> {
    let path = path.as_ref();
    info!("loading map image: {}", path.display());

    let bytes = std::fs::read(path)?;
    let pixels = image::load_from_memory(&bytes)?.to_rgb8();
    info!("map image decoded: {}x{}", pixels.width(), pixels.height());

    let grid = HexGrid::from_pixels(screen_width, screen_height, &pixels);
    info!("map grid ready: {} rows x {} columns", grid.rows(), grid.columns());

    Ok(grid)
}
