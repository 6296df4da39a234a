use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::plot::PlotId;

/// A generated, not-yet-placed candidate plot proposed to close the gap
/// between needed and existing plant capacity for one culture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlotSuggestion {
    pub culture_id: String,
    pub culture_name: String,
    /// Deficit in plants, strictly positive by construction.
    pub missing_plants: u32,
    pub suggested_width: f64,
    pub suggested_height: f64,
    /// Toggled off by the user to exclude a suggestion from batch placement.
    #[serde(default = "default_selected")]
    pub selected: bool,
}

fn default_selected() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedSuggestion {
    pub culture_id: String,
    pub plot_id: PlotId,
    pub x: f64,
    pub y: f64,
}

/// Result of running the placement engine over a batch of suggestions.
/// Suggestions that found no free spot are listed by culture id; reporting
/// that to the user is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementOutcome {
    pub placed: Vec<PlacedSuggestion>,
    pub unplaced: Vec<String>,
}
