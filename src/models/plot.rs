use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use uuid::Uuid;

pub type PlotId = Uuid;

/// Nudge applied to duplicated plots so the copy does not sit exactly on the
/// original.
const DUPLICATE_OFFSET_M: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    Culture,
    Building,
    Tree,
    Pond,
    WaterTank,
    Greenhouse,
    Coop,
    Beehive,
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlotShape {
    Rect,
    Circle,
}

/// Unrotated axis-aligned bounds in metres. This is the collision authority:
/// rotation is cosmetic and never feeds into overlap tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A placed object on the terrain or inside a greenhouse.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    #[serde(default = "Uuid::new_v4")]
    pub id: PlotId,
    pub kind: PlotKind,
    #[serde(default = "default_shape")]
    pub shape: PlotShape,
    /// Top-left corner in metres.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees in [0, 360). Visual only.
    #[serde(default)]
    pub rotation: f64,
    pub color: Option<String>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    pub planted_culture_id: Option<String>,
    pub selected_variety: Option<String>,
    /// Greenhouse interior, exactly one level deep. A sub-plot never owns
    /// sub-plots of its own.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_plots: Vec<Plot>,
    /// Only meaningful for `PlotKind::Coop`.
    pub chicken_count: Option<u32>,
}

fn default_shape() -> PlotShape {
    PlotShape::Rect
}

fn default_opacity() -> f64 {
    1.0
}

impl Plot {
    pub fn new(kind: PlotKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            shape: PlotShape::Rect,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            color: None,
            opacity: 1.0,
            planted_culture_id: None,
            selected_variety: None,
            sub_plots: Vec::new(),
            chicken_count: None,
        }
    }

    /// A culture bed planted with the given catalog id.
    pub fn planted(culture_id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            planted_culture_id: Some(culture_id.to_string()),
            ..Self::new(PlotKind::Culture, x, y, width, height)
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Fallback fill colour when `color` carries no override.
    pub fn default_color(&self) -> &'static str {
        match self.kind {
            PlotKind::Culture => "#8bc34a",
            PlotKind::Building => "#9e9e9e",
            PlotKind::Tree => "#33691e",
            PlotKind::Pond => "#4fc3f7",
            PlotKind::WaterTank => "#0277bd",
            PlotKind::Greenhouse => "#b2dfdb",
            PlotKind::Coop => "#bcaaa4",
            PlotKind::Beehive => "#ffca28",
            PlotKind::Path => "#d7ccc8",
        }
    }

    /// Copy with fresh ids (sub-plots included), nudged off the original.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        copy.x += DUPLICATE_OFFSET_M;
        copy.y += DUPLICATE_OFFSET_M;
        for sub in &mut copy.sub_plots {
            sub.id = Uuid::new_v4();
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_gets_fresh_ids() {
        let mut greenhouse = Plot::new(PlotKind::Greenhouse, 1.0, 1.0, 4.0, 3.0);
        greenhouse.sub_plots.push(Plot::planted("tomato", 0.2, 0.2, 1.0, 1.0));

        let copy = greenhouse.duplicate();
        assert_ne!(copy.id, greenhouse.id, "Duplicate must not share an id");
        assert_ne!(
            copy.sub_plots[0].id, greenhouse.sub_plots[0].id,
            "Sub-plot ids must be regenerated too"
        );
        assert_eq!(copy.x, greenhouse.x + DUPLICATE_OFFSET_M);
    }

    #[test]
    fn test_every_kind_has_a_default_color() {
        for kind in [
            PlotKind::Culture,
            PlotKind::Building,
            PlotKind::Tree,
            PlotKind::Pond,
            PlotKind::WaterTank,
            PlotKind::Greenhouse,
            PlotKind::Coop,
            PlotKind::Beehive,
            PlotKind::Path,
        ] {
            let plot = Plot::new(kind, 0.0, 0.0, 1.0, 1.0);
            assert!(plot.default_color().starts_with('#'));
        }
    }

    #[test]
    fn test_plot_deserializes_with_defaults() {
        let plot: Plot = serde_json::from_str(
            r#"{ "kind": "culture", "x": 1.0, "y": 2.0, "width": 1.2, "height": 3.0 }"#,
        )
        .unwrap();
        assert_eq!(plot.shape, PlotShape::Rect);
        assert_eq!(plot.rotation, 0.0);
        assert_eq!(plot.opacity, 1.0);
        assert!(plot.sub_plots.is_empty());
    }
}
