//! HTTP handlers and route configuration.

mod businesses;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Business lookup and scoring
            .service(
                web::scope("/businesses")
                    .route("", web::get().to(businesses::search))
                    .route("/score/{place_id}", web::get().to(businesses::score))
                    .route(
                        "/web-analytics/{place_id}",
                        web::get().to(businesses::web_analytics),
                    )
                    .route("/trends/{name}", web::get().to(businesses::trends))
                    .route("/summary/{place_id}", web::get().to(businesses::summary))
                    .route("/{place_id}", web::get().to(businesses::details)),
            ),
    );
}
