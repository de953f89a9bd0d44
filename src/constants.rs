//! Map constants and configuration values
//!
//! This module centralizes the magic numbers used by terrain classification
//! and hex layout, so the color tables and the geometry live in one place.

use image::Rgb;

// ============================================================================
// TERRAIN REFERENCE COLORS
// ============================================================================

/// Pixel color that marks a water tile in a map image
pub const WATER_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// Pixel color that marks a sand tile in a map image
pub const SAND_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

/// Pixel color that marks a mud tile in a map image
pub const MUD_COLOR: Rgb<u8> = Rgb([139, 69, 19]);

/// Pixel color that marks a grass tile in a map image
pub const GRASS_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Pixel color that marks a street tile in a map image
pub const STREET_COLOR: Rgb<u8> = Rgb([128, 128, 128]);

/// Display color for tiles whose pixel matched no known terrain
pub const NOT_FOUND_COLOR: Rgb<u8> = Rgb([255, 0, 255]);

// ============================================================================
// MOVEMENT COSTS
// ============================================================================

/// Movement cost for water tiles (prohibitive without boats)
pub const WATER_COST: f32 = 10.0;

/// Movement cost for sand tiles
pub const SAND_COST: f32 = 4.0;

/// Movement cost for mud tiles
pub const MUD_COST: f32 = 6.0;

/// Movement cost for grass tiles
pub const GRASS_COST: f32 = 2.0;

/// Movement cost for street tiles (the cheapest terrain to cross)
pub const STREET_COST: f32 = 1.0;

/// Sentinel cost for unclassified terrain; a path search treats it as a wall
pub const NOT_FOUND_COST: f32 = f32::INFINITY;

// ============================================================================
// HEX LAYOUT GEOMETRY
// ============================================================================

/// Outline thickness reserved between adjacent hexes, in screen units
pub const OUTLINE_THICKNESS: f32 = 2.0;

/// Horizontal advance between flat-top hex columns, as a fraction of hex width
pub const COLUMN_ADVANCE: f32 = 3.0 / 4.0;

/// Margin factor applied to the width-derived hex size candidate
pub const WIDTH_MARGIN: f32 = 0.83;

/// Ratio of hex size to per-row screen height for the height-derived candidate
pub const HEIGHT_RATIO: f32 = 0.53;

/// Factor applied to the first row's vertical offset from the screen top
pub const TOP_MARGIN: f32 = 1.3;
