use actix_web::{web, Scope};

use crate::controllers;

pub const API_PREFIX: &str = "/api";

pub fn config(cfg: &mut web::ServiceConfig) {
    // List entries
    cfg.route("/data", web::get().to(controllers::entries::index))
        // Save an entry
        .route("/save", web::post().to(controllers::entries::create))
        // Download a stored file
        .route(
            "/download/{filename}",
            web::get().to(controllers::entries::download),
        )
        // Remove everything
        .route(
            "/clear-all",
            web::delete().to(controllers::entries::clear_all),
        );
}

/// The JSON api, unknown paths under it get a JSON 404
pub fn api() -> Scope {
    web::scope(API_PREFIX)
        .configure(config)
        .default_service(web::to(controllers::not_found::index))
}
