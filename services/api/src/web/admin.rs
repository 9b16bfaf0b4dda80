//! services/api/src/web/admin.rs
//!
//! Back-office handlers: account moderation, tutor document review, the
//! all-offers table and the statistics panel.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::HttpError;
use crate::web::state::AppState;
use repetiteur_core::aggregates::{self, AdminStats};
use repetiteur_core::domain::{Account, Actor, Role};
use repetiteur_core::error::DomainError;
use repetiteur_core::lifecycle;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct SetActiveRequest {
    pub active: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct SetRoleRequest {
    /// One of `super_admin`, `admin`, `tutor`, `parent`.
    pub role: String,
}

#[derive(Deserialize, ToSchema)]
pub struct SetDocumentsRequest {
    pub validated: bool,
}

#[derive(Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name,
            phone: account.phone,
            avatar_url: account.avatar_url,
            is_active: account.is_active,
            roles: account
                .roles
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
            created_at: account.created_at,
        }
    }
}

/// One row of the back-office offers table.
#[derive(Serialize, ToSchema)]
pub struct AdminOfferRow {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub subject: String,
    pub level: String,
    pub status: String,
    pub budget_min: i64,
    pub budget_max: i64,
    pub applications_count: usize,
    pub created_at: DateTime<Utc>,
}

fn ensure_admin(actor: &Actor) -> Result<(), HttpError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(HttpError(DomainError::PermissionDenied(
            "back-office access is admin only".to_string(),
        )))
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// List all accounts.
#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "All accounts", body = [AccountResponse]),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<AccountResponse>>, HttpError> {
    ensure_admin(&actor)?;
    let accounts = state.store.list_accounts().await?;
    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}

/// Activate or deactivate an account. Acting on a super admin account takes
/// a super admin.
#[utoipa::path(
    patch,
    path = "/admin/users/{id}/active",
    params(("id" = Uuid, Path, description = "Account id")),
    request_body = SetActiveRequest,
    responses(
        (status = 200, description = "Account after the change", body = AccountResponse),
        (status = 403, description = "Insufficient rights for this target"),
        (status = 404, description = "Unknown account")
    )
)]
pub async fn set_user_active_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(account_id): Path<Uuid>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<AccountResponse>, HttpError> {
    let mut target = state.store.get_account(account_id).await?;
    let active = lifecycle::set_account_active(&actor, &target, req.active)?;
    state.store.set_account_active(target.id, active).await?;
    target.is_active = active;
    Ok(Json(AccountResponse::from(target)))
}

/// Change an account's role. Super admin only.
#[utoipa::path(
    patch,
    path = "/admin/users/{id}/role",
    params(("id" = Uuid, Path, description = "Account id")),
    request_body = SetRoleRequest,
    responses(
        (status = 200, description = "Account after the change", body = AccountResponse),
        (status = 403, description = "Caller is not a super admin"),
        (status = 422, description = "Unknown role")
    )
)]
pub async fn set_user_role_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(account_id): Path<Uuid>,
    Json(req): Json<SetRoleRequest>,
) -> Result<Json<AccountResponse>, HttpError> {
    let role = Role::parse(&req.role).ok_or_else(|| {
        HttpError(DomainError::Validation(format!(
            "'{}' is not a valid role",
            req.role
        )))
    })?;
    let mut target = state.store.get_account(account_id).await?;
    let role = lifecycle::change_account_role(&actor, &target, role)?;
    state.store.set_account_role(target.id, role).await?;
    target.roles = vec![role];
    Ok(Json(AccountResponse::from(target)))
}

/// Record the admin's review of a tutor's uploaded documents.
#[utoipa::path(
    patch,
    path = "/admin/tutors/{id}/documents",
    params(("id" = Uuid, Path, description = "Tutor account id")),
    request_body = SetDocumentsRequest,
    responses(
        (status = 200, description = "Validation flag recorded"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Tutor has no profile yet")
    )
)]
pub async fn set_documents_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(account_id): Path<Uuid>,
    Json(req): Json<SetDocumentsRequest>,
) -> Result<Json<serde_json::Value>, HttpError> {
    let validated = lifecycle::set_documents_validated(&actor, req.validated)?;
    state
        .store
        .set_documents_validated(account_id, validated)
        .await?;
    Ok(Json(serde_json::json!({
        "account_id": account_id,
        "documents_validated": validated,
    })))
}

/// The back-office offers table, with per-offer application counts.
#[utoipa::path(
    get,
    path = "/admin/offers",
    responses(
        (status = 200, description = "All offers with application counts", body = [AdminOfferRow]),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn admin_offers_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<AdminOfferRow>>, HttpError> {
    ensure_admin(&actor)?;
    let offers = state.store.list_all_offers().await?;
    let applications = state.store.list_all_applications().await?;
    let counts = aggregates::applications_per_offer(&applications);

    Ok(Json(
        offers
            .into_iter()
            .map(|offer| AdminOfferRow {
                applications_count: counts.get(&offer.id).copied().unwrap_or(0),
                id: offer.id,
                parent_id: offer.parent_id,
                subject: offer.subject,
                level: offer.level,
                status: offer.status.as_str().to_string(),
                budget_min: offer.budget_min,
                budget_max: offer.budget_max,
                created_at: offer.created_at,
            })
            .collect(),
    ))
}

/// The statistics panel, recomputed from the entity set.
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses(
        (status = 200, description = "Marketplace-wide counters"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn admin_stats_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<AdminStats>, HttpError> {
    ensure_admin(&actor)?;
    let accounts = state.store.list_accounts().await?;
    let offers = state.store.list_all_offers().await?;
    let applications = state.store.list_all_applications().await?;
    let contracts = state.store.list_all_contracts().await?;
    Ok(Json(aggregates::admin_stats(
        &accounts,
        &offers,
        &applications,
        &contracts,
    )))
}
