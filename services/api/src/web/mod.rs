pub mod admin;
pub mod applications;
pub mod contracts;
pub mod dashboard;
pub mod middleware;
pub mod offers;
pub mod profiles;
pub mod rest;
pub mod state;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};

use crate::web::state::AppState;
pub use middleware::require_auth;
pub use rest::ApiDoc;

/// Builds the full API router: the public probes plus every authenticated
/// route behind the session middleware.
pub fn router(app_state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(rest::health_handler))
        .route("/catalog", get(rest::catalog_handler));

    let protected_routes = Router::new()
        .route(
            "/offers",
            get(offers::list_offers_handler).post(offers::create_offer_handler),
        )
        .route(
            "/offers/{id}",
            get(offers::get_offer_handler).delete(offers::delete_offer_handler),
        )
        .route("/offers/{id}/status", patch(offers::set_offer_status_handler))
        .route(
            "/offers/{id}/applications",
            get(applications::list_offer_applications_handler)
                .post(applications::submit_application_handler),
        )
        .route(
            "/applications/mine",
            get(applications::my_applications_handler),
        )
        .route(
            "/applications/{id}/decision",
            post(applications::decide_application_handler),
        )
        .route("/contracts", get(contracts::list_contracts_handler))
        .route(
            "/contracts/{id}/status",
            patch(contracts::set_contract_status_handler),
        )
        .route(
            "/profile/tutor",
            get(profiles::get_tutor_profile_handler).put(profiles::update_tutor_profile_handler),
        )
        .route("/dashboard", get(dashboard::dashboard_handler))
        .route("/admin/users", get(admin::list_users_handler))
        .route(
            "/admin/users/{id}/active",
            patch(admin::set_user_active_handler),
        )
        .route("/admin/users/{id}/role", patch(admin::set_user_role_handler))
        .route(
            "/admin/tutors/{id}/documents",
            patch(admin::set_documents_handler),
        )
        .route("/admin/offers", get(admin::admin_offers_handler))
        .route("/admin/stats", get(admin::admin_stats_handler))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(app_state)
}
