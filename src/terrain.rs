//! Terrain classification: mapping map-image pixel colors to terrain kinds
//! and their movement costs.

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::constants::{
    GRASS_COLOR, GRASS_COST, MUD_COLOR, MUD_COST, NOT_FOUND_COLOR, NOT_FOUND_COST, SAND_COLOR,
    SAND_COST, STREET_COLOR, STREET_COST, WATER_COLOR, WATER_COST,
};

/// Terrain kind of a single hex tile, decoded from one map-image pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    Water,
    Sand,
    Mud,
    Grass,
    Street,
    /// Fallback for pixels that match no reference color (anti-aliased
    /// edges, stray compression artifacts, hand-edited maps).
    Unknown,
}

impl TerrainKind {
    /// Classify a pixel color into a terrain kind and its movement cost.
    ///
    /// Total by construction: unrecognized colors resolve to [`Unknown`]
    /// with the sentinel cost instead of failing, so grid construction can
    /// never reject a map image.
    ///
    /// [`Unknown`]: TerrainKind::Unknown
    pub fn classify(pixel: Rgb<u8>) -> (TerrainKind, f32) {
        let kind = match pixel {
            WATER_COLOR => TerrainKind::Water,
            SAND_COLOR => TerrainKind::Sand,
            MUD_COLOR => TerrainKind::Mud,
            GRASS_COLOR => TerrainKind::Grass,
            STREET_COLOR => TerrainKind::Street,
            _ => TerrainKind::Unknown,
        };
        (kind, kind.cost())
    }

    /// Movement cost of this terrain. Higher is harder to traverse;
    /// `Unknown` yields the `NOT_FOUND_COST` sentinel.
    pub fn cost(self) -> f32 {
        match self {
            TerrainKind::Water => WATER_COST,
            TerrainKind::Sand => SAND_COST,
            TerrainKind::Mud => MUD_COST,
            TerrainKind::Grass => GRASS_COST,
            TerrainKind::Street => STREET_COST,
            TerrainKind::Unknown => NOT_FOUND_COST,
        }
    }

    /// Display color for rendering this terrain. Known kinds return their
    /// reference color; `Unknown` returns the fallback fill color.
    pub fn color(self) -> Rgb<u8> {
        match self {
            TerrainKind::Water => WATER_COLOR,
            TerrainKind::Sand => SAND_COLOR,
            TerrainKind::Mud => MUD_COLOR,
            TerrainKind::Grass => GRASS_COLOR,
            TerrainKind::Street => STREET_COLOR,
            TerrainKind::Unknown => NOT_FOUND_COLOR,
        }
    }
}
