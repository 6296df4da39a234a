use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum Category {
    Vegetable,
    Fruit,
    Herb,
    Root,
    Bulb,
    Leafy,
    Pod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum WateringLevel {
    Low,
    Moderate,
    High,
}

/// In-row and between-row spacing in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpacingCm {
    pub between_plants: u32,
    pub between_rows: u32,
}

impl SpacingCm {
    /// Footprint of a single plant in square metres.
    pub fn plant_area_m2(&self) -> f64 {
        (self.between_plants * self.between_rows) as f64 / 10_000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WateringProfile {
    pub level: WateringLevel,
    pub liters_per_week: f64,
}

/// A crop reference record from the static catalog. Read-only at runtime:
/// calculations consume it, nothing mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Culture {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub spacing: SpacingCm,
    /// Plants needed per household member for 100% self-sufficiency.
    pub plants_per_person: f64,
    pub watering: WateringProfile,
    pub yield_kg_per_plant: f64,
}
