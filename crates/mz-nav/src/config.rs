//! Per-navigator construction defaults.

use mz_core::TILE_WIDTH;

use crate::Color;

/// Defaults applied when a [`Navigator`][crate::Navigator] is created.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Speed in "16 px tile" units; scaled by `tile_width / 16`.
    pub base_speed: f32,

    /// Pixel width of one maze tile.
    pub tile_width: f32,

    pub radius: f32,

    pub collide_radius: f32,

    pub color: Color,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            base_speed:     100.0,
            tile_width:     TILE_WIDTH,
            radius:         10.0,
            collide_radius: 5.0,
            color:          Color::WHITE,
        }
    }
}
