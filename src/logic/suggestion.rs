use log::debug;

use crate::logic::collision::{place_greedy, PLACEMENT_STEP_M};
use crate::logic::sufficiency::{count_existing_plants, needed_plants};
use crate::models::{
    config::GardenConfig,
    culture::Culture,
    plot::Plot,
    suggestion::{PlacedSuggestion, PlacementOutcome, PlotSuggestion},
};

/// Standard bed width for suggested plots.
pub const BED_WIDTH_M: f64 = 1.2;
pub const MIN_BED_HEIGHT_M: f64 = 1.0;

/// One suggestion per catalog culture whose deficit is positive, in catalog
/// order. The candidate bed is [`BED_WIDTH_M`] wide and tall enough to hold
/// the deficit at catalog spacing, rounded up to 0.1 m and floored at
/// [`MIN_BED_HEIGHT_M`]. All suggestions start selected.
pub fn generate_suggestions(
    plots: &[Plot],
    config: &GardenConfig,
    catalog: &[Culture],
) -> Vec<PlotSuggestion> {
    catalog
        .iter()
        .filter_map(|culture| {
            let needed = needed_plants(culture, config.people_count, config.sufficiency_target);
            let existing = count_existing_plants(plots, culture);
            let deficit = needed.saturating_sub(existing);
            if deficit == 0 {
                return None;
            }
            let deficit_area = deficit as f64 * culture.spacing.plant_area_m2();
            let height = ((deficit_area / BED_WIDTH_M) * 10.0).ceil() / 10.0;
            Some(PlotSuggestion {
                culture_id: culture.id.clone(),
                culture_name: culture.name.clone(),
                missing_plants: deficit,
                suggested_width: BED_WIDTH_M,
                suggested_height: height.max(MIN_BED_HEIGHT_M),
                selected: true,
            })
        })
        .collect()
}

/// Inserts the selected suggestions into the live plot list, one at a time
/// in the given order, so each placement sees every earlier one as an
/// obstacle. Suggestions the terrain has no room for end up in
/// `PlacementOutcome::unplaced` instead of failing the batch.
pub fn place_suggestions(
    plots: &mut Vec<Plot>,
    config: &GardenConfig,
    suggestions: &[PlotSuggestion],
) -> PlacementOutcome {
    let mut outcome = PlacementOutcome::default();
    for suggestion in suggestions.iter().filter(|s| s.selected) {
        match place_greedy(
            plots,
            suggestion.suggested_width,
            suggestion.suggested_height,
            config.terrain_width,
            config.terrain_height,
            PLACEMENT_STEP_M,
        ) {
            Some(pos) => {
                let plot = Plot::planted(
                    &suggestion.culture_id,
                    pos.x,
                    pos.y,
                    suggestion.suggested_width,
                    suggestion.suggested_height,
                );
                debug!(
                    "placed suggestion '{}' at ({}, {})",
                    suggestion.culture_id, pos.x, pos.y
                );
                outcome.placed.push(PlacedSuggestion {
                    culture_id: suggestion.culture_id.clone(),
                    plot_id: plot.id,
                    x: pos.x,
                    y: pos.y,
                });
                plots.push(plot);
            }
            None => {
                debug!("no room for suggestion '{}'", suggestion.culture_id);
                outcome.unplaced.push(suggestion.culture_id.clone());
            }
        }
    }
    outcome
}
