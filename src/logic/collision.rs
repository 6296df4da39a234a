use crate::models::plot::{Bounds, Plot};
use crate::models::MeterPoint;

/// Grid step of the placement scan, in metres.
pub const PLACEMENT_STEP_M: f64 = 0.5;
/// Scan origin: suggestions start one metre in from the terrain edge.
pub const PLACEMENT_MARGIN_M: f64 = 1.0;

/// Axis-aligned overlap test. Rotation is deliberately ignored: collision
/// always runs against the unrotated bounding box.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// First-fit scanline placement of a `width` x `height` candidate among the
/// existing plots. Scans left-to-right in [`PLACEMENT_STEP_M`] steps from
/// (1, 1), wrapping to the next row until the terrain height is exhausted.
/// Returns the first collision-free top-left position, or `None`.
///
/// Deliberately not an optimal packer; a human layout may beat it.
pub fn place_greedy(
    existing: &[Plot],
    width: f64,
    height: f64,
    terrain_w: f64,
    terrain_h: f64,
    step: f64,
) -> Option<MeterPoint> {
    let mut y = PLACEMENT_MARGIN_M;
    while y + height <= terrain_h {
        let mut x = PLACEMENT_MARGIN_M;
        while x <= terrain_w - width {
            let candidate = Bounds {
                x,
                y,
                width,
                height,
            };
            if !existing.iter().any(|p| overlaps(&candidate, &p.bounds())) {
                return Some(MeterPoint::new(x, y));
            }
            x += step;
        }
        y += step;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plot::{Plot, PlotKind};

    fn bounds(x: f64, y: f64, w: f64, h: f64) -> Bounds {
        Bounds {
            x,
            y,
            width: w,
            height: h,
        }
    }

    #[test]
    fn test_intersecting_plots_overlap() {
        // (0,0,2,2) and (1,1,2,2) intersect in [1,2]x[1,2].
        let a = bounds(0.0, 0.0, 2.0, 2.0);
        let b = bounds(1.0, 1.0, 2.0, 2.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            (bounds(0.0, 0.0, 2.0, 2.0), bounds(1.0, 1.0, 2.0, 2.0)),
            (bounds(0.0, 0.0, 1.0, 1.0), bounds(5.0, 5.0, 1.0, 1.0)),
            (bounds(0.0, 0.0, 3.0, 1.0), bounds(2.9, 0.5, 1.0, 3.0)),
        ];
        for (a, b) in cases {
            assert_eq!(
                overlaps(&a, &b),
                overlaps(&b, &a),
                "overlaps must be symmetric for {a:?} / {b:?}"
            );
        }
    }

    #[test]
    fn test_positive_area_overlaps_itself() {
        let a = bounds(3.0, 4.0, 0.2, 0.2);
        assert!(overlaps(&a, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = bounds(0.0, 0.0, 2.0, 2.0);
        let b = bounds(2.0, 0.0, 2.0, 2.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_place_on_empty_terrain_starts_at_margin() {
        let pos = place_greedy(&[], 1.2, 1.0, 10.0, 10.0, PLACEMENT_STEP_M).unwrap();
        assert_eq!((pos.x, pos.y), (PLACEMENT_MARGIN_M, PLACEMENT_MARGIN_M));
    }

    #[test]
    fn test_placement_never_overlaps_existing() {
        let existing = vec![
            Plot::new(PlotKind::Building, 1.0, 1.0, 4.0, 3.0),
            Plot::new(PlotKind::Pond, 6.0, 1.0, 2.0, 2.0),
            Plot::new(PlotKind::Culture, 1.0, 5.0, 3.0, 1.5),
        ];
        let pos = place_greedy(&existing, 2.0, 1.5, 10.0, 10.0, PLACEMENT_STEP_M)
            .expect("A 10x10 terrain has room for a 2x1.5 bed");
        let candidate = bounds(pos.x, pos.y, 2.0, 1.5);
        for plot in &existing {
            assert!(
                !overlaps(&candidate, &plot.bounds()),
                "Placed at ({}, {}) over {:?}",
                pos.x,
                pos.y,
                plot.kind
            );
        }
    }

    #[test]
    fn test_placement_skips_occupied_rows() {
        // A full-width wall across the scan origin pushes the candidate down.
        let wall = Plot::new(PlotKind::Building, 0.0, 0.0, 10.0, 3.0);
        let pos = place_greedy(&[wall], 1.0, 1.0, 10.0, 10.0, PLACEMENT_STEP_M).unwrap();
        assert!(pos.y >= 3.0, "Candidate must clear the wall, got y={}", pos.y);
    }

    #[test]
    fn test_full_terrain_returns_none() {
        let full = Plot::new(PlotKind::Building, 0.0, 0.0, 6.0, 6.0);
        assert!(place_greedy(&[full], 1.0, 1.0, 6.0, 6.0, PLACEMENT_STEP_M).is_none());
    }

    #[test]
    fn test_candidate_wider_than_terrain_returns_none() {
        assert!(place_greedy(&[], 12.0, 1.0, 10.0, 10.0, PLACEMENT_STEP_M).is_none());
    }
}
