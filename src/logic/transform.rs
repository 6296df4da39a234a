use serde::{Deserialize, Serialize};

use crate::models::{MeterPoint, PxPoint};

/// Fixed pixel density of garden space at scale 1.0.
pub const PX_PER_METER: f64 = 40.0;
pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 5.0;
/// Multiplicative zoom per wheel tick.
pub const ZOOM_STEP: f64 = 1.1;

/// Pan/zoom view state. Pure presentation, never persisted: it is recomputed
/// with `fit` whenever the container or terrain dimensions change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Pixel offset of the terrain origin within the container.
    pub x: f64,
    pub y: f64,
    /// Clamped to [`MIN_SCALE`], [`MAX_SCALE`].
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl ViewTransform {
    pub fn screen_to_meters(&self, screen: PxPoint) -> MeterPoint {
        MeterPoint {
            x: (screen.x - self.x) / self.scale / PX_PER_METER,
            y: (screen.y - self.y) / self.scale / PX_PER_METER,
        }
    }

    pub fn meters_to_screen(&self, point: MeterPoint) -> PxPoint {
        PxPoint {
            x: point.x * PX_PER_METER * self.scale + self.x,
            y: point.y * PX_PER_METER * self.scale + self.y,
        }
    }

    /// Multiplicative zoom keeping the garden-space point under the cursor
    /// fixed on screen.
    pub fn zoom_at(&mut self, cursor: PxPoint, factor: f64) {
        let s0 = self.scale;
        let s1 = (s0 * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.x = cursor.x - (cursor.x - self.x) / s0 * s1;
        self.y = cursor.y - (cursor.y - self.y) / s0 * s1;
        self.scale = s1;
    }

    /// Scale to show the whole terrain inside the container, centred. Callers
    /// skip this while a drag operation is live.
    pub fn fit(container_w: f64, container_h: f64, terrain_w_m: f64, terrain_h_m: f64) -> Self {
        let terrain_w_px = terrain_w_m * PX_PER_METER;
        let terrain_h_px = terrain_h_m * PX_PER_METER;
        let scale = (container_w / terrain_w_px)
            .min(container_h / terrain_h_px)
            .clamp(MIN_SCALE, MAX_SCALE);
        Self {
            x: (container_w - terrain_w_px * scale) / 2.0,
            y: (container_h - terrain_h_px * scale) / 2.0,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON_PX: f64 = 1e-6;

    #[test]
    fn test_screen_meters_round_trip() {
        let view = ViewTransform {
            x: 120.0,
            y: -35.0,
            scale: 1.7,
        };
        let screen = PxPoint::new(412.0, 266.0);
        let back = view.meters_to_screen(view.screen_to_meters(screen));
        assert!((back.x - screen.x).abs() < EPSILON_PX);
        assert!((back.y - screen.y).abs() < EPSILON_PX);
    }

    #[test]
    fn test_unit_view_maps_meters_to_40px() {
        let view = ViewTransform::default();
        let px = view.meters_to_screen(MeterPoint::new(2.0, 3.0));
        assert_eq!(px.x, 80.0);
        assert_eq!(px.y, 120.0);
    }

    #[test]
    fn test_zoom_keeps_cursor_point_fixed() {
        let cursor = PxPoint::new(333.0, 187.0);
        for factor in [ZOOM_STEP, 1.0 / ZOOM_STEP, 1.5, 0.4, 2.0] {
            let mut view = ViewTransform {
                x: 50.0,
                y: 80.0,
                scale: 1.3,
            };
            let before = view.screen_to_meters(cursor);
            view.zoom_at(cursor, factor);
            let now = view.meters_to_screen(before);
            assert!(
                (now.x - cursor.x).abs() < EPSILON_PX && (now.y - cursor.y).abs() < EPSILON_PX,
                "Point under cursor drifted at factor {factor}: ({}, {})",
                now.x - cursor.x,
                now.y - cursor.y
            );
        }
    }

    #[test]
    fn test_zoom_clamps_scale() {
        let cursor = PxPoint::new(0.0, 0.0);
        let mut view = ViewTransform::default();
        for _ in 0..100 {
            view.zoom_at(cursor, ZOOM_STEP);
        }
        assert_eq!(view.scale, MAX_SCALE);
        for _ in 0..100 {
            view.zoom_at(cursor, 1.0 / ZOOM_STEP);
        }
        assert_eq!(view.scale, MIN_SCALE);
    }

    #[test]
    fn test_fit_centers_terrain() {
        // 20m x 10m terrain = 800x400 px; container 1000x500 → scale limited
        // to 1.25 by both axes, centred with equal margins.
        let view = ViewTransform::fit(1000.0, 500.0, 20.0, 10.0);
        assert!((view.scale - 1.25).abs() < 1e-12);
        assert!((view.x - 0.0).abs() < 1e-9);
        assert!((view.y - 0.0).abs() < 1e-9);

        // A wide container centres horizontally.
        let view = ViewTransform::fit(2000.0, 400.0, 20.0, 10.0);
        assert!((view.scale - 1.0).abs() < 1e-12);
        assert!((view.x - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_never_exceeds_max_scale() {
        let view = ViewTransform::fit(10_000.0, 10_000.0, 2.0, 2.0);
        assert_eq!(view.scale, MAX_SCALE);
    }
}
