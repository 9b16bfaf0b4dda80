//! services/api/src/web/contracts.rs
//!
//! Handlers for viewing contracts and for the parent-side status changes.
//! The tutor's view is read-only.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::HttpError;
use crate::web::state::AppState;
use repetiteur_core::domain::{Actor, Contract, ContractStatus, Role};
use repetiteur_core::error::DomainError;
use repetiteur_core::lifecycle;
use repetiteur_core::ports::NotificationEvent;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct ContractStatusRequest {
    /// One of `active`, `completed`, `cancelled`.
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContractResponse {
    pub id: Uuid,
    pub offer_id: Uuid,
    pub parent_id: Uuid,
    pub tutor_id: Uuid,
    pub subject: String,
    pub level: String,
    pub frequency: String,
    pub address: String,
    pub agreed_rate: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Contract> for ContractResponse {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id,
            offer_id: contract.offer_id,
            parent_id: contract.parent_id,
            tutor_id: contract.tutor_id,
            subject: contract.subject,
            level: contract.level,
            frequency: contract.frequency,
            address: contract.address,
            agreed_rate: contract.agreed_rate,
            start_date: contract.start_date,
            end_date: contract.end_date,
            status: contract.status.as_str().to_string(),
            created_at: contract.created_at,
        }
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// List the caller's contracts: a parent sees the ones they own, a tutor the
/// ones they are engaged on, an admin all of them.
#[utoipa::path(
    get,
    path = "/contracts",
    responses(
        (status = 200, description = "The caller's contracts", body = [ContractResponse]),
        (status = 403, description = "Account has no contract view")
    )
)]
pub async fn list_contracts_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<ContractResponse>>, HttpError> {
    let contracts = if actor.has_role(Role::Parent) {
        state.store.list_contracts_by_parent(actor.account_id).await?
    } else if actor.has_role(Role::Tutor) {
        state.store.list_contracts_by_tutor(actor.account_id).await?
    } else if actor.is_admin() {
        state.store.list_all_contracts().await?
    } else {
        return Err(HttpError(DomainError::PermissionDenied(
            "this account has no contract view".to_string(),
        )));
    };
    Ok(Json(
        contracts.into_iter().map(ContractResponse::from).collect(),
    ))
}

/// Change a contract's status. Owning parent only; completing or cancelling
/// stamps the end date, and `active -> active` is a no-op.
#[utoipa::path(
    patch,
    path = "/contracts/{id}/status",
    params(("id" = Uuid, Path, description = "Contract id")),
    request_body = ContractStatusRequest,
    responses(
        (status = 200, description = "Contract after the change", body = ContractResponse),
        (status = 403, description = "Not the owning parent"),
        (status = 409, description = "Contract is no longer active")
    )
)]
pub async fn set_contract_status_handler(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<Actor>,
    Path(contract_id): Path<Uuid>,
    Json(req): Json<ContractStatusRequest>,
) -> Result<Json<ContractResponse>, HttpError> {
    let new_status = ContractStatus::parse(&req.status).ok_or_else(|| {
        HttpError(DomainError::Validation(format!(
            "'{}' is not a valid contract status",
            req.status
        )))
    })?;

    let mut contract = state.store.get_contract(contract_id).await?;

    match lifecycle::change_contract_status(&actor, &contract, new_status, Utc::now())? {
        None => Ok(Json(ContractResponse::from(contract))),
        Some(update) => {
            state
                .store
                .update_contract_status(contract.id, update.status, Some(update.end_date))
                .await?;
            state
                .notifier
                .notify(
                    contract.tutor_id,
                    NotificationEvent::ContractStatusChanged {
                        contract_id: contract.id,
                        status: update.status,
                    },
                )
                .await;
            contract.status = update.status;
            contract.end_date = Some(update.end_date);
            Ok(Json(ContractResponse::from(contract)))
        }
    }
}
