//! services/api/src/web/dashboard.rs
//!
//! Role-shaped dashboard counters. All numbers are recomputed from the
//! entity set on every request; nothing here reads a stored counter.

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::error::HttpError;
use crate::web::state::AppState;
use repetiteur_core::aggregates::{self, ParentDashboard, TutorDashboard};
use repetiteur_core::domain::{Actor, Role};
use repetiteur_core::error::DomainError;

/// The dashboard for the caller's role. Exactly one of the two payloads is
/// present; an account holding both roles gets the parent view.
#[derive(Serialize)]
pub struct DashboardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentDashboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutor: Option<TutorDashboard>,
}

#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Counters for the caller's role"),
        (status = 403, description = "Admins use /admin/stats")
    )
)]
pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<DashboardResponse>, HttpError> {
    if actor.has_role(Role::Parent) {
        let offers = state.store.list_offers_by_parent(actor.account_id).await?;
        let applications = state
            .store
            .list_applications_for_parent(actor.account_id)
            .await?;
        let contracts = state.store.list_contracts_by_parent(actor.account_id).await?;
        return Ok(Json(DashboardResponse {
            parent: Some(aggregates::parent_dashboard(
                &offers,
                &applications,
                &contracts,
            )),
            tutor: None,
        }));
    }

    if actor.has_role(Role::Tutor) {
        let open_offers = state.store.list_open_offers().await?;
        let applications = state
            .store
            .list_applications_by_tutor(actor.account_id)
            .await?;
        let contracts = state.store.list_contracts_by_tutor(actor.account_id).await?;
        return Ok(Json(DashboardResponse {
            parent: None,
            tutor: Some(aggregates::tutor_dashboard(
                open_offers.len(),
                &applications,
                &contracts,
            )),
        }));
    }

    Err(HttpError(DomainError::PermissionDenied(
        "admins read their numbers from /admin/stats".to_string(),
    )))
}
