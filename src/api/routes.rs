use actix_web::web;

use crate::api::handlers::{
    cultures::{get_culture, list_cultures},
    report::{post_place, post_report, post_suggestions},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_cultures)
            .service(get_culture)
            .service(post_report)
            .service(post_suggestions)
            .service(post_place),
    );
}
