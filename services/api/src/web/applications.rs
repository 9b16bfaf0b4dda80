//! services/api/src/web/applications.rs
//!
//! Handlers for submitting and deciding applications. Accepting an
//! application is the one place a contract is born; the store records the
//! status change and the new contract in a single atomic write.

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
use crate::web::contracts::ContractResponse;
use crate::web::state::AppState;
use repetiteur_core::domain::{Actor, Application, ApplicationStatus, Role, TutorProfile};
use repetiteur_core::error::DomainError;
use repetiteur_core::lifecycle::{self, Decision};
use repetiteur_core::ports::{NotificationEvent, PortError};

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct SubmitApplicationRequest {
    /// At least 20 characters.
    pub message: String,
}

#[derive(Deserialize, ToSchema)]
pub struct DecisionRequest {
    /// `accept` or `reject`.
    pub decision: String,
}

#[derive(Serialize, ToSchema)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub offer_id: Uuid,
    pub tutor_id: Uuid,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            offer_id: application.offer_id,
            tutor_id: application.tutor_id,
            message: application.message,
            status: application.status.as_str().to_string(),
            created_at: application.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct DecisionResponse {
    pub application: ApplicationResponse,
    /// Present exactly when the decision was an acceptance.
    pub contract: Option<ContractResponse>,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// Apply to an open offer. Tutors with validated documents only; one
/// application per (offer, tutor) pair.
#[utoipa::path(
    post,
    path = "/offers/{id}/applications",
    params(("id" = Uuid, Path, description = "Offer id")),
    request_body = SubmitApplicationRequest,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationResponse),
        (status = 403, description = "Not a tutor, or documents not validated"),
        (status = 409, description = "Offer not open, or already applied"),
        (status = 422, description = "Message too short")
    )
)]
pub async fn submit_application_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(offer_id): Path<Uuid>,
    Json(req): Json<SubmitApplicationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let offer = state.store.get_offer(offer_id).await?;

    // A tutor who never filled in a profile is treated as one whose
    // documents are not validated.
    let profile = match state.store.get_tutor_profile(actor.account_id).await {
        Ok(profile) => profile,
        Err(PortError::NotFound(_)) => TutorProfile {
            account_id: actor.account_id,
            ..TutorProfile::default()
        },
        Err(e) => return Err(e.into()),
    };

    let already_applied = state
        .store
        .application_exists(offer.id, actor.account_id)
        .await?;

    let application = lifecycle::submit_application(
        &actor,
        &profile,
        &offer,
        already_applied,
        &req.message,
        Utc::now(),
    )?;

    // The store's uniqueness constraint decides the concurrent case; the
    // loser surfaces as a 409.
    state.store.create_application(&application).await?;

    state
        .notifier
        .notify(
            offer.parent_id,
            NotificationEvent::ApplicationSubmitted {
                offer_id: offer.id,
                tutor_id: application.tutor_id,
            },
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

/// List the applications received on one offer. Owning parent or admin.
#[utoipa::path(
    get,
    path = "/offers/{id}/applications",
    params(("id" = Uuid, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Applications for the offer", body = [ApplicationResponse]),
        (status = 403, description = "Not the owner nor an admin")
    )
)]
pub async fn list_offer_applications_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(offer_id): Path<Uuid>,
) -> Result<Json<Vec<ApplicationResponse>>, HttpError> {
    let offer = state.store.get_offer(offer_id).await?;
    if !actor.is_admin() && actor.account_id != offer.parent_id {
        return Err(HttpError(DomainError::PermissionDenied(
            "only the offer's parent may see its applications".to_string(),
        )));
    }
    let applications = state.store.list_applications_for_offer(offer.id).await?;
    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// List the caller's own applications. Tutors only.
#[utoipa::path(
    get,
    path = "/applications/mine",
    responses(
        (status = 200, description = "The tutor's applications", body = [ApplicationResponse]),
        (status = 403, description = "Caller is not a tutor")
    )
)]
pub async fn my_applications_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<ApplicationResponse>>, HttpError> {
    if !actor.has_role(Role::Tutor) {
        return Err(HttpError(DomainError::PermissionDenied(
            "only a tutor has applications".to_string(),
        )));
    }
    let applications = state
        .store
        .list_applications_by_tutor(actor.account_id)
        .await?;
    Ok(Json(
        applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect(),
    ))
}

/// Accept or reject a pending application. Owning parent only. Accepting
/// creates the contract; siblings stay pending and the offer keeps its
/// status.
#[utoipa::path(
    post,
    path = "/applications/{id}/decision",
    params(("id" = Uuid, Path, description = "Application id")),
    request_body = DecisionRequest,
    responses(
        (status = 200, description = "Decision recorded", body = DecisionResponse),
        (status = 403, description = "Not the owning parent"),
        (status = 409, description = "Application already decided"),
        (status = 422, description = "Unknown decision keyword")
    )
)]
pub async fn decide_application_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(application_id): Path<Uuid>,
    Json(req): Json<DecisionRequest>,
) -> Result<Json<DecisionResponse>, HttpError> {
    let decision = match req.decision.as_str() {
        "accept" => Decision::Accept,
        "reject" => Decision::Reject,
        other => {
            return Err(HttpError(DomainError::Validation(format!(
                "'{other}' is not a decision; use accept or reject"
            ))))
        }
    };

    let mut application = state.store.get_application(application_id).await?;
    let offer = state.store.get_offer(application.offer_id).await?;

    let outcome = lifecycle::decide_application(&actor, &offer, &application, decision, Utc::now())?;
    state
        .store
        .record_application_decision(
            application.id,
            outcome.application_status,
            outcome.contract.as_ref(),
        )
        .await?;

    let event = match outcome.application_status {
        ApplicationStatus::Accepted => NotificationEvent::ApplicationAccepted {
            application_id: application.id,
            tutor_id: application.tutor_id,
        },
        _ => NotificationEvent::ApplicationRejected {
            application_id: application.id,
            tutor_id: application.tutor_id,
        },
    };
    state.notifier.notify(application.tutor_id, event).await;

    application.status = outcome.application_status;
    Ok(Json(DecisionResponse {
        application: ApplicationResponse::from(application),
        contract: outcome.contract.map(ContractResponse::from),
    }))
}
