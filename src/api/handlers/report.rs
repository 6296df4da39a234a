use actix_web::{http::Method, post, web, HttpResponse, Responder};
use chrono::Utc;

use crate::{
    data::cultures::get_all_cultures,
    logic::{
        suggestion::{generate_suggestions, place_suggestions},
        sufficiency::build_report,
    },
    models::request::{
        link, ApiResponse, ErrorResponse, PlaceApiResponse, PlaceRequest, PlaceResponse,
        ReportApiResponse, ReportRequest, SuggestionsApiResponse, SuggestionsResponse,
    },
};

/// POST /api/report
/// Computes the sufficiency report for the submitted layout and configuration.
#[utoipa::path(
    post,
    path = "/api/report",
    tag = "report",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Per-culture sufficiency report", body = ReportApiResponse),
        (status = 400, description = "Invalid garden configuration", body = ErrorResponse),
    )
)]
#[post("/report")]
pub async fn post_report(body: web::Json<ReportRequest>) -> impl Responder {
    let request = body.into_inner();
    if let Err(e) = request.config.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }

    let catalog = get_all_cultures();
    let report = build_report(&request.plots, &request.config, &catalog);

    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/report", Method::POST));
    links.insert("suggestions".into(), link("/api/suggestions", Method::POST));
    links.insert("cultures".into(), link("/api/cultures", Method::GET));
    HttpResponse::Ok().json(ApiResponse::new(report, links))
}

/// POST /api/suggestions
/// Generates plot suggestions for every culture still in deficit.
#[utoipa::path(
    post,
    path = "/api/suggestions",
    tag = "report",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Suggestions for cultures in deficit", body = SuggestionsApiResponse),
        (status = 400, description = "Invalid garden configuration", body = ErrorResponse),
    )
)]
#[post("/suggestions")]
pub async fn post_suggestions(body: web::Json<ReportRequest>) -> impl Responder {
    let request = body.into_inner();
    if let Err(e) = request.config.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }

    let catalog = get_all_cultures();
    let suggestions = generate_suggestions(&request.plots, &request.config, &catalog);

    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/suggestions", Method::POST));
    links.insert("place".into(), link("/api/suggestions/place", Method::POST));
    HttpResponse::Ok().json(ApiResponse::new(
        SuggestionsResponse {
            suggestions,
            generated_at: Utc::now(),
        },
        links,
    ))
}

/// POST /api/suggestions/place
/// Inserts the selected suggestions into the layout, collision-free, and
/// returns the updated plot list.
#[utoipa::path(
    post,
    path = "/api/suggestions/place",
    tag = "report",
    request_body = PlaceRequest,
    responses(
        (status = 200, description = "Updated layout with placement outcome", body = PlaceApiResponse),
        (status = 400, description = "Invalid garden configuration", body = ErrorResponse),
    )
)]
#[post("/suggestions/place")]
pub async fn post_place(body: web::Json<PlaceRequest>) -> impl Responder {
    let request = body.into_inner();
    if let Err(e) = request.config.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }

    let mut plots = request.plots;
    let outcome = place_suggestions(&mut plots, &request.config, &request.suggestions);

    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/suggestions/place", Method::POST));
    links.insert("report".into(), link("/api/report", Method::POST));
    HttpResponse::Ok().json(ApiResponse::new(
        PlaceResponse {
            plots,
            outcome,
            generated_at: Utc::now(),
        },
        links,
    ))
}
