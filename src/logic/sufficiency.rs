use chrono::Utc;

use crate::models::{
    config::GardenConfig,
    culture::Culture,
    plot::{Plot, PlotKind},
    request::{CultureReportEntry, SufficiencyReport},
};

/// Plants needed to hit the sufficiency target for the household.
pub fn needed_plants(culture: &Culture, people_count: u32, sufficiency_target: u32) -> u32 {
    (culture.plants_per_person * people_count as f64 * sufficiency_target as f64 / 100.0).ceil()
        as u32
}

/// Area the needed plants would occupy at catalog spacing, m², one decimal.
pub fn needed_area_m2(culture: &Culture, needed: u32) -> f64 {
    round1(needed as f64 * culture.spacing.plant_area_m2())
}

/// How many plants of `culture` fit in the plot's footprint. This is the
/// single source of truth for capacity: always recomputed from the current
/// geometry, never cached against stale dimensions.
pub fn plot_capacity(plot: &Plot, culture: &Culture) -> u32 {
    let rows = (plot.height * 100.0 / culture.spacing.between_rows as f64).floor();
    let per_row = (plot.width * 100.0 / culture.spacing.between_plants as f64).floor();
    (rows * per_row).max(0.0) as u32
}

/// Total plants of `culture` across the layout. Descends exactly one level
/// into greenhouse interiors; a greenhouse's own `planted_culture_id` is
/// ignored so interior beds are never double counted. Order-independent.
pub fn count_existing_plants(plots: &[Plot], culture: &Culture) -> u32 {
    let mut total = 0;
    for plot in plots {
        match plot.kind {
            PlotKind::Greenhouse => {
                for sub in &plot.sub_plots {
                    if sub.planted_culture_id.as_deref() == Some(culture.id.as_str()) {
                        total += plot_capacity(sub, culture);
                    }
                }
            }
            _ => {
                if plot.planted_culture_id.as_deref() == Some(culture.id.as_str()) {
                    total += plot_capacity(plot, culture);
                }
            }
        }
    }
    total
}

/// Full per-culture sufficiency report plus the global score:
/// `min(100, round(100 * Σexisting / Σneeded))`, 0 when nothing is needed.
/// Plots referencing unknown culture ids simply contribute nothing.
pub fn build_report(plots: &[Plot], config: &GardenConfig, catalog: &[Culture]) -> SufficiencyReport {
    let mut entries = Vec::with_capacity(catalog.len());
    let mut total_needed = 0u32;
    let mut total_existing = 0u32;
    let mut total_watering = 0.0;

    for culture in catalog {
        let needed = needed_plants(culture, config.people_count, config.sufficiency_target);
        let existing = count_existing_plants(plots, culture);
        let watering = round1(existing as f64 * culture.watering.liters_per_week);
        total_needed += needed;
        total_existing += existing;
        total_watering += watering;
        entries.push(CultureReportEntry {
            culture_id: culture.id.clone(),
            culture_name: culture.name.clone(),
            needed_plants: needed,
            needed_area_m2: needed_area_m2(culture, needed),
            existing_plants: existing,
            missing_plants: needed.saturating_sub(existing),
            watering_liters_per_week: watering,
        });
    }

    let score = if total_needed == 0 {
        0
    } else {
        ((100.0 * total_existing as f64 / total_needed as f64).round() as u32).min(100)
    };

    SufficiencyReport {
        score,
        total_needed_plants: total_needed,
        total_existing_plants: total_existing,
        total_watering_liters_per_week: round1(total_watering),
        entries,
        generated_at: Utc::now(),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
