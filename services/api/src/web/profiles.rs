//! services/api/src/web/profiles.rs
//!
//! The tutor's self-service profile. The `complete` flag in the response is
//! recomputed from the saved fields on every read; `documents_validated`
//! belongs to the admins and survives any self-service save untouched.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::HttpError;
use crate::web::state::AppState;
use repetiteur_core::domain::{Actor, Role, TutorProfile};
use repetiteur_core::error::DomainError;
use repetiteur_core::ports::PortError;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct UpdateTutorProfileRequest {
    pub bio: String,
    pub subjects: Vec<String>,
    pub levels: Vec<String>,
    pub availability: Vec<String>,
    pub location: String,
    pub hourly_rate: Option<i64>,
    pub years_experience: Option<i32>,
    pub cni_front_url: Option<String>,
    pub cni_back_url: Option<String>,
    pub diploma_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct TutorProfileResponse {
    pub account_id: Uuid,
    pub bio: String,
    pub subjects: Vec<String>,
    pub levels: Vec<String>,
    pub availability: Vec<String>,
    pub location: String,
    pub hourly_rate: Option<i64>,
    pub years_experience: Option<i32>,
    pub cni_front_url: Option<String>,
    pub cni_back_url: Option<String>,
    pub diploma_url: Option<String>,
    pub documents_validated: bool,
    /// Derived from the other fields, never stored.
    pub complete: bool,
}

impl From<TutorProfile> for TutorProfileResponse {
    fn from(profile: TutorProfile) -> Self {
        let complete = profile.is_complete();
        Self {
            account_id: profile.account_id,
            bio: profile.bio,
            subjects: profile.subjects,
            levels: profile.levels,
            availability: profile.availability,
            location: profile.location,
            hourly_rate: profile.hourly_rate,
            years_experience: profile.years_experience,
            cni_front_url: profile.cni_front_url,
            cni_back_url: profile.cni_back_url,
            diploma_url: profile.diploma_url,
            documents_validated: profile.documents_validated,
            complete,
        }
    }
}

fn ensure_tutor(actor: &Actor) -> Result<(), HttpError> {
    if actor.has_role(Role::Tutor) {
        Ok(())
    } else {
        Err(HttpError(DomainError::PermissionDenied(
            "only a tutor has a tutor profile".to_string(),
        )))
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// Fetch the caller's tutor profile. A tutor who never saved one gets an
/// empty profile back rather than a 404, so the form can prefill.
#[utoipa::path(
    get,
    path = "/profile/tutor",
    responses(
        (status = 200, description = "The tutor's profile", body = TutorProfileResponse),
        (status = 403, description = "Caller is not a tutor")
    )
)]
pub async fn get_tutor_profile_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<TutorProfileResponse>, HttpError> {
    ensure_tutor(&actor)?;
    let profile = match state.store.get_tutor_profile(actor.account_id).await {
        Ok(profile) => profile,
        Err(PortError::NotFound(_)) => TutorProfile {
            account_id: actor.account_id,
            ..TutorProfile::default()
        },
        Err(e) => return Err(e.into()),
    };
    Ok(Json(TutorProfileResponse::from(profile)))
}

/// Save the caller's tutor profile (self-service fields only).
#[utoipa::path(
    put,
    path = "/profile/tutor",
    request_body = UpdateTutorProfileRequest,
    responses(
        (status = 200, description = "Profile saved, completeness recomputed", body = TutorProfileResponse),
        (status = 403, description = "Caller is not a tutor")
    )
)]
pub async fn update_tutor_profile_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<UpdateTutorProfileRequest>,
) -> Result<Json<TutorProfileResponse>, HttpError> {
    ensure_tutor(&actor)?;

    let documents_validated = match state.store.get_tutor_profile(actor.account_id).await {
        Ok(existing) => existing.documents_validated,
        Err(PortError::NotFound(_)) => false,
        Err(e) => return Err(e.into()),
    };

    let profile = TutorProfile {
        account_id: actor.account_id,
        bio: req.bio,
        subjects: req.subjects,
        levels: req.levels,
        availability: req.availability,
        location: req.location,
        hourly_rate: req.hourly_rate,
        years_experience: req.years_experience,
        cni_front_url: req.cni_front_url,
        cni_back_url: req.cni_back_url,
        diploma_url: req.diploma_url,
        documents_validated,
    };
    state.store.upsert_tutor_profile(&profile).await?;

    Ok(Json(TutorProfileResponse::from(profile)))
}
