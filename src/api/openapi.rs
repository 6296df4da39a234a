use utoipa::OpenApi;

use crate::models::{
    config::{BackgroundCalibration, GardenConfig},
    culture::{Category, Culture, SpacingCm, WateringLevel, WateringProfile},
    plot::{Plot, PlotKind, PlotShape},
    request::{
        CultureApiResponse, CultureListResponse, CultureReportEntry, CultureResponse,
        ErrorResponse, Link, Pagination, PlaceApiResponse, PlaceRequest, PlaceResponse,
        ReportApiResponse, ReportRequest, SufficiencyReport, SuggestionsApiResponse,
        SuggestionsResponse,
    },
    suggestion::{PlacedSuggestion, PlacementOutcome, PlotSuggestion},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Potager Planner API",
        description = "Garden-layout planning core: browse the culture catalogue, compute household sufficiency reports over a plot layout, and generate collision-free plot suggestions to close the deficit.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::cultures::list_cultures,
        crate::api::handlers::cultures::get_culture,
        crate::api::handlers::report::post_report,
        crate::api::handlers::report::post_suggestions,
        crate::api::handlers::report::post_place,
    ),
    components(
        schemas(
            // Enums
            Category, WateringLevel, PlotKind, PlotShape,
            // Catalog
            SpacingCm, WateringProfile, Culture, CultureResponse,
            // Layout
            Plot, GardenConfig, BackgroundCalibration,
            // Report
            ReportRequest, CultureReportEntry, SufficiencyReport,
            // Suggestions
            PlotSuggestion, SuggestionsResponse, PlaceRequest, PlaceResponse,
            PlacedSuggestion, PlacementOutcome,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            CultureApiResponse,
            CultureListResponse,
            ReportApiResponse,
            SuggestionsApiResponse,
            PlaceApiResponse,
        )
    ),
    tags(
        (name = "cultures", description = "Culture catalogue — list and detail"),
        (name = "report",   description = "Sufficiency reporting and plot suggestions"),
    )
)]
pub struct ApiDoc;
