use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use utoipa::ToSchema;

/// Hard floor for terrain dimensions; the terrain-resize drag clamps here too.
pub const MIN_TERRAIN_M: f64 = 2.0;
pub const MIN_PEOPLE: u32 = 1;
pub const MAX_PEOPLE: u32 = 4;
pub const MAX_SUFFICIENCY_TARGET: u32 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("peopleCount must be between {MIN_PEOPLE} and {MAX_PEOPLE}, got {0}")]
    PeopleCountOutOfRange(u32),
    #[error("sufficiencyTarget must be between 0 and {MAX_SUFFICIENCY_TARGET}, got {0}")]
    SufficiencyTargetOutOfRange(u32),
    #[error("terrain must be at least {MIN_TERRAIN_M} m per side, got {width} x {height}")]
    TerrainTooSmall { width: f64, height: f64 },
    #[error("background calibration values must be finite")]
    NonFiniteBackground,
}

/// Presentation-only calibration of the optional background image. No
/// invariants beyond staying finite.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundCalibration {
    pub image: Option<String>,
    #[serde(default = "one")]
    pub scale: f64,
    /// Pixel offset of the image relative to the terrain origin.
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default)]
    pub rotation: f64,
}

fn one() -> f64 {
    1.0
}

impl Default for BackgroundCalibration {
    fn default() -> Self {
        Self {
            image: None,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
            rotation: 0.0,
        }
    }
}

impl BackgroundCalibration {
    fn is_finite(&self) -> bool {
        [self.scale, self.x, self.y, self.opacity, self.rotation]
            .iter()
            .all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenConfig {
    pub people_count: u32,
    /// Target self-sufficiency percentage, 0–100.
    pub sufficiency_target: u32,
    /// Terrain dimensions in metres.
    pub terrain_width: f64,
    pub terrain_height: f64,
    #[serde(default)]
    pub background: BackgroundCalibration,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            people_count: 2,
            sufficiency_target: 50,
            terrain_width: 20.0,
            terrain_height: 15.0,
            background: BackgroundCalibration::default(),
        }
    }
}

impl GardenConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&self.people_count) {
            return Err(ConfigError::PeopleCountOutOfRange(self.people_count));
        }
        if self.sufficiency_target > MAX_SUFFICIENCY_TARGET {
            return Err(ConfigError::SufficiencyTargetOutOfRange(
                self.sufficiency_target,
            ));
        }
        if self.terrain_width < MIN_TERRAIN_M || self.terrain_height < MIN_TERRAIN_M {
            return Err(ConfigError::TerrainTooSmall {
                width: self.terrain_width,
                height: self.terrain_height,
            });
        }
        if !self.background.is_finite() {
            return Err(ConfigError::NonFiniteBackground);
        }
        Ok(())
    }
}
