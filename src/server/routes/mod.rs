//! HTTP route modules

mod generate;
mod health;

pub use generate::{EditRequest, EditResponse, generate};
pub use health::health_check;

use actix_web::web;

/// Configure all gateway routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .service(web::scope("/api").route("/generate", web::post().to(generate)));
}
