//! hexfield - hexagonal terrain grids decoded from raster map images
//!
//! A map image is turned into a grid of flat-top hex tiles: each pixel's
//! color selects a terrain kind with a fixed movement cost, and the grid
//! answers the spatial queries an interaction layer or a path search sits
//! on top of — indexed lookup, per-tile neighbor enumeration under offset
//! coordinates, and nearest-tile picking for pointer positions.
//!
//! Rendering, windowing, and pathfinding itself are out of scope; consumers
//! drive those off the grid's query surface.

pub mod constants;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod layout;
pub mod loader;
pub mod terrain;

pub use error::{GridError, MapLoadError};
pub use grid::{GridIndex, HexGrid, Tile};
pub use interaction::{GridSelector, Interactive, Key, PointerButton};
pub use layout::HexLayout;
pub use loader::load_map;
pub use terrain::TerrainKind;
