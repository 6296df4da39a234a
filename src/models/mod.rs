use serde::{Deserialize, Serialize};

pub mod config;
pub mod culture;
pub mod plot;
pub mod request;
pub mod suggestion;

/// A position in screen pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position in garden space, metres from the terrain's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterPoint {
    pub x: f64,
    pub y: f64,
}

impl MeterPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
