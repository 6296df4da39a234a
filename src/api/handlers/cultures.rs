use actix_web::{get, http::Method, web, HttpResponse, Responder};

use crate::{
    data::cultures::{get_all_cultures, get_culture_by_id},
    models::request::{
        link, ApiResponse, CultureApiResponse, CultureListResponse, CultureResponse,
        ErrorResponse, PaginatedResponse, Pagination,
    },
};

/// GET /api/cultures
/// Returns the whole culture catalog.
#[utoipa::path(
    get,
    path = "/api/cultures",
    tag = "cultures",
    responses(
        (status = 200, description = "Full culture catalog", body = CultureListResponse),
    )
)]
#[get("/cultures")]
pub async fn list_cultures() -> impl Responder {
    let cultures = get_all_cultures();
    let total = cultures.len();
    let items: Vec<ApiResponse<CultureResponse>> = cultures
        .into_iter()
        .map(|culture| {
            let id = culture.id.clone();
            let mut links = std::collections::HashMap::new();
            links.insert("self".into(), link(format!("/api/cultures/{id}"), Method::GET));
            ApiResponse::new(CultureResponse { culture }, links)
        })
        .collect();
    let mut collection_links = std::collections::HashMap::new();
    collection_links.insert("self".into(), link("/api/cultures", Method::GET));
    collection_links.insert("report".into(), link("/api/report", Method::POST));
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        collection_links,
        Pagination {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        },
    ))
}

/// GET /api/cultures/{id}
/// Returns a single culture by id.
#[utoipa::path(
    get,
    path = "/api/cultures/{id}",
    tag = "cultures",
    params(("id" = String, Path, description = "Culture catalog id")),
    responses(
        (status = 200, description = "The culture", body = CultureApiResponse),
        (status = 404, description = "Unknown culture id", body = ErrorResponse),
    )
)]
#[get("/cultures/{id}")]
pub async fn get_culture(path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match get_culture_by_id(&id) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Culture '{}' not found.", id)
        })),
        Some(culture) => {
            let mut links = std::collections::HashMap::new();
            links.insert("self".into(), link(format!("/api/cultures/{id}"), Method::GET));
            links.insert("collection".into(), link("/api/cultures", Method::GET));
            HttpResponse::Ok().json(ApiResponse::new(CultureResponse { culture }, links))
        }
    }
}
