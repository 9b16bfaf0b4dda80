//! services/api/src/web/rest.rs
//!
//! The unauthenticated endpoints and the master definition for the OpenAPI
//! specification.

use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::web::{admin, applications, contracts, dashboard, offers, profiles};
use repetiteur_core::catalog;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        catalog_handler,
        offers::create_offer_handler,
        offers::list_offers_handler,
        offers::get_offer_handler,
        offers::set_offer_status_handler,
        offers::delete_offer_handler,
        applications::submit_application_handler,
        applications::list_offer_applications_handler,
        applications::my_applications_handler,
        applications::decide_application_handler,
        contracts::list_contracts_handler,
        contracts::set_contract_status_handler,
        profiles::get_tutor_profile_handler,
        profiles::update_tutor_profile_handler,
        dashboard::dashboard_handler,
        admin::list_users_handler,
        admin::set_user_active_handler,
        admin::set_user_role_handler,
        admin::set_documents_handler,
        admin::admin_offers_handler,
        admin::admin_stats_handler,
    ),
    components(
        schemas(
            CatalogResponse,
            crate::error::ErrorBody,
            offers::CreateOfferRequest,
            offers::OfferStatusRequest,
            offers::OfferResponse,
            offers::CascadeResponse,
            applications::SubmitApplicationRequest,
            applications::DecisionRequest,
            applications::ApplicationResponse,
            applications::DecisionResponse,
            contracts::ContractStatusRequest,
            contracts::ContractResponse,
            profiles::UpdateTutorProfileRequest,
            profiles::TutorProfileResponse,
            admin::SetActiveRequest,
            admin::SetRoleRequest,
            admin::SetDocumentsRequest,
            admin::AccountResponse,
            admin::AdminOfferRow,
        )
    ),
    tags(
        (name = "Mon Répétiteur API", description = "Tutoring marketplace: offers, applications, contracts and back-office moderation.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Unauthenticated Handlers
//=========================================================================================

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The fixed option lists the client renders in its forms.
#[derive(Serialize, ToSchema)]
pub struct CatalogResponse {
    pub subjects: Vec<&'static str>,
    pub levels: Vec<&'static str>,
    pub frequencies: Vec<&'static str>,
    pub availabilities: Vec<&'static str>,
}

#[utoipa::path(
    get,
    path = "/catalog",
    responses((status = 200, description = "Form option lists", body = CatalogResponse))
)]
pub async fn catalog_handler() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        subjects: catalog::SUBJECTS.to_vec(),
        levels: catalog::LEVELS.to_vec(),
        frequencies: catalog::FREQUENCIES.to_vec(),
        availabilities: catalog::AVAILABILITIES.to_vec(),
    })
}
