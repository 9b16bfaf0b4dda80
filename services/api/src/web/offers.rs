//! services/api/src/web/offers.rs
//!
//! Handlers for creating, listing and managing offers. Every mutation loads
//! the current state, asks the lifecycle engine for a decision, then makes a
//! single store call.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::HttpError;
use crate::web::state::AppState;
use repetiteur_core::domain::{Actor, NewOffer, Offer, OfferStatus, Role};
use repetiteur_core::error::DomainError;
use repetiteur_core::lifecycle;
use repetiteur_core::ports::NotificationEvent;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct CreateOfferRequest {
    pub subject: String,
    pub level: String,
    pub description: String,
    pub address: String,
    pub frequency: String,
    /// FCFA
    pub budget_min: i64,
    /// FCFA
    pub budget_max: i64,
}

#[derive(Deserialize, ToSchema)]
pub struct OfferStatusRequest {
    /// One of `open`, `in_progress`, `closed`.
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct OfferResponse {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub subject: String,
    pub level: String,
    pub description: String,
    pub address: String,
    pub frequency: String,
    pub budget_min: i64,
    pub budget_max: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id,
            parent_id: offer.parent_id,
            subject: offer.subject,
            level: offer.level,
            description: offer.description,
            address: offer.address,
            frequency: offer.frequency,
            budget_min: offer.budget_min,
            budget_max: offer.budget_max,
            status: offer.status.as_str().to_string(),
            created_at: offer.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CascadeResponse {
    pub contracts_deleted: u64,
    pub applications_deleted: u64,
    pub offer_deleted: bool,
}

pub(crate) fn parse_offer_status(s: &str) -> Result<OfferStatus, HttpError> {
    OfferStatus::parse(s).ok_or_else(|| {
        HttpError(DomainError::Validation(format!(
            "'{s}' is not a valid offer status"
        )))
    })
}

//=========================================================================================
// Handlers
//=========================================================================================

/// Create a new offer. Parents only.
#[utoipa::path(
    post,
    path = "/offers",
    request_body = CreateOfferRequest,
    responses(
        (status = 201, description = "Offer created", body = OfferResponse),
        (status = 403, description = "Caller is not a parent"),
        (status = 422, description = "Invalid budget range or missing field")
    )
)]
pub async fn create_offer_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<CreateOfferRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let offer = lifecycle::create_offer(
        &actor,
        NewOffer {
            subject: req.subject,
            level: req.level,
            description: req.description,
            address: req.address,
            frequency: req.frequency,
            budget_min: req.budget_min,
            budget_max: req.budget_max,
        },
        Utc::now(),
    )?;
    state.store.create_offer(&offer).await?;
    Ok((StatusCode::CREATED, Json(OfferResponse::from(offer))))
}

/// List offers for the caller: a parent sees their own, a tutor sees the
/// open ones, an admin sees everything.
#[utoipa::path(
    get,
    path = "/offers",
    responses(
        (status = 200, description = "Offers visible to the caller", body = [OfferResponse]),
        (status = 403, description = "Account has no marketplace view")
    )
)]
pub async fn list_offers_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<OfferResponse>>, HttpError> {
    let offers = if actor.has_role(Role::Parent) {
        state.store.list_offers_by_parent(actor.account_id).await?
    } else if actor.has_role(Role::Tutor) {
        state.store.list_open_offers().await?
    } else if actor.is_admin() {
        state.store.list_all_offers().await?
    } else {
        return Err(HttpError(DomainError::PermissionDenied(
            "this account has no marketplace view".to_string(),
        )));
    };
    Ok(Json(offers.into_iter().map(OfferResponse::from).collect()))
}

/// Fetch one offer. Visible to its parent, to any tutor, and to admins.
#[utoipa::path(
    get,
    path = "/offers/{id}",
    params(("id" = Uuid, Path, description = "Offer id")),
    responses(
        (status = 200, description = "The offer", body = OfferResponse),
        (status = 404, description = "Unknown offer")
    )
)]
pub async fn get_offer_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(offer_id): Path<Uuid>,
) -> Result<Json<OfferResponse>, HttpError> {
    let offer = state.store.get_offer(offer_id).await?;
    let visible =
        actor.is_admin() || actor.account_id == offer.parent_id || actor.has_role(Role::Tutor);
    if !visible {
        return Err(HttpError(DomainError::PermissionDenied(
            "you may not view this offer".to_string(),
        )));
    }
    Ok(Json(OfferResponse::from(offer)))
}

/// Change an offer's status. Owning parent or admin.
#[utoipa::path(
    patch,
    path = "/offers/{id}/status",
    params(("id" = Uuid, Path, description = "Offer id")),
    request_body = OfferStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OfferResponse),
        (status = 403, description = "Not the owner nor an admin"),
        (status = 404, description = "Unknown offer")
    )
)]
pub async fn set_offer_status_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(offer_id): Path<Uuid>,
    Json(req): Json<OfferStatusRequest>,
) -> Result<Json<OfferResponse>, HttpError> {
    let new_status = parse_offer_status(&req.status)?;
    let mut offer = state.store.get_offer(offer_id).await?;

    let status = lifecycle::change_offer_status(&actor, &offer, new_status)?;
    state.store.update_offer_status(offer.id, status).await?;

    offer.status = status;
    Ok(Json(OfferResponse::from(offer)))
}

/// Delete an offer together with its applications and contracts. Admin only;
/// the store performs the cascade atomically.
#[utoipa::path(
    delete,
    path = "/offers/{id}",
    params(("id" = Uuid, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Cascade result", body = CascadeResponse),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Unknown offer")
    )
)]
pub async fn delete_offer_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(offer_id): Path<Uuid>,
) -> Result<Json<CascadeResponse>, HttpError> {
    lifecycle::authorize_offer_delete(&actor)?;
    let offer = state.store.get_offer(offer_id).await?;

    let report = state.store.delete_offer_cascade(offer.id).await?;
    state
        .notifier
        .notify(
            offer.parent_id,
            NotificationEvent::OfferDeleted {
                offer_id: offer.id,
                parent_id: offer.parent_id,
            },
        )
        .await;

    Ok(Json(CascadeResponse {
        contracts_deleted: report.contracts_deleted,
        applications_deleted: report.applications_deleted,
        offer_deleted: report.offer_deleted,
    }))
}
