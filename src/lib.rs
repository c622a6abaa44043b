use actix_web::web;

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod harvest;
pub mod models;
pub mod templates_structs;

/// Route table, shared by `main` and the integration tests.
/// Expects `AppConfig` and `HarvestClient` in app data.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(handlers::auth_handlers::login_page))
        .route("/login", web::post().to(handlers::auth_handlers::login_submit))
        // Root redirect
        .route(
            "/",
            web::get().to(|| async {
                actix_web::HttpResponse::SeeOther()
                    .insert_header(("Location", "/dashboard"))
                    .finish()
            }),
        )
        // Protected routes
        .service(
            web::scope("")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                .route("/dashboard", web::get().to(handlers::dashboard::index))
                .route("/logout", web::post().to(handlers::auth_handlers::logout)),
        );
}
