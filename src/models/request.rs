use std::collections::HashMap;

use actix_web::http::Method;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    config::GardenConfig,
    culture::Culture,
    plot::Plot,
    suggestion::{PlacementOutcome, PlotSuggestion},
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String)]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    CultureApiResponse = ApiResponse<CultureResponse>,
    ReportApiResponse = ApiResponse<SufficiencyReport>,
    SuggestionsApiResponse = ApiResponse<SuggestionsResponse>,
    PlaceApiResponse = ApiResponse<PlaceResponse>
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(CultureListResponse = PaginatedResponse<CultureApiResponse>)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

/// Plain JSON error body, used by 400/404 responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Culture domain struct for use in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CultureResponse {
    #[serde(flatten)]
    pub culture: Culture,
}

/// Shared request body for report and suggestion generation: the live plot
/// list plus the garden configuration. Plots arrive exactly as the client
/// editor holds them; nothing here is persisted server-side.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub plots: Vec<Plot>,
    pub config: GardenConfig,
}

/// Per-culture line of the sufficiency report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CultureReportEntry {
    pub culture_id: String,
    pub culture_name: String,
    pub needed_plants: u32,
    /// Area the needed plants would occupy, m², one decimal.
    pub needed_area_m2: f64,
    pub existing_plants: u32,
    pub missing_plants: u32,
    /// Weekly watering estimate for the plants actually in the ground.
    pub watering_liters_per_week: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SufficiencyReport {
    /// Global self-sufficiency score, 0–100.
    pub score: u32,
    pub total_needed_plants: u32,
    pub total_existing_plants: u32,
    pub total_watering_liters_per_week: f64,
    pub entries: Vec<CultureReportEntry>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub suggestions: Vec<PlotSuggestion>,
    pub generated_at: DateTime<Utc>,
}

/// Request body for batch placement: the live layout plus the (possibly
/// user-toggled) suggestion list to insert.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRequest {
    #[serde(default)]
    pub plots: Vec<Plot>,
    pub config: GardenConfig,
    pub suggestions: Vec<PlotSuggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponse {
    /// Updated plot list with every placed suggestion appended.
    pub plots: Vec<Plot>,
    pub outcome: PlacementOutcome,
    pub generated_at: DateTime<Utc>,
}
