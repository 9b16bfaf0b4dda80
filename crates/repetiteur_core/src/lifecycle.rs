//! crates/repetiteur_core/src/lifecycle.rs
//!
//! The lifecycle engine: pure decision functions over provided state. Each
//! function authorizes through the policy matrix, validates, and returns the
//! resulting entity or update for the caller to persist with a single store
//! call. No function here performs I/O; `now` is always passed in.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    Account, Actor, Application, ApplicationStatus, Contract, ContractStatus, NewOffer, Offer,
    OfferStatus, Role, TutorProfile, MIN_APPLICATION_MESSAGE_LEN,
};
use crate::error::{DomainError, DomainResult};
use crate::policy::{authorize, Action};

/// A parent's accept/reject decision on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

/// What a decision produced: the application's new status and, on accept,
/// exactly one contract draft.
#[derive(Debug, Clone)]
pub struct DecisionOutcome {
    pub application_status: ApplicationStatus,
    pub contract: Option<Contract>,
}

/// A contract status change to persist: the new status and the end date to
/// stamp, if any.
#[derive(Debug, Clone)]
pub struct ContractUpdate {
    pub status: ContractStatus,
    pub end_date: chrono::NaiveDate,
}

/// Validates input and builds a new offer, status `open`.
pub fn create_offer(actor: &Actor, input: NewOffer, now: DateTime<Utc>) -> DomainResult<Offer> {
    authorize(actor, &Action::CreateOffer)?;

    for (field, value) in [
        ("subject", &input.subject),
        ("level", &input.level),
        ("description", &input.description),
        ("address", &input.address),
        ("frequency", &input.frequency),
    ] {
        if value.trim().is_empty() {
            return Err(DomainError::Validation(format!("{field} is required")));
        }
    }
    if input.budget_min <= 0 || input.budget_max <= 0 {
        return Err(DomainError::Validation(
            "budgets must be positive amounts".to_string(),
        ));
    }
    if input.budget_max < input.budget_min {
        return Err(DomainError::Validation(
            "budget_max must be greater than or equal to budget_min".to_string(),
        ));
    }

    Ok(Offer {
        id: Uuid::new_v4(),
        parent_id: actor.account_id,
        subject: input.subject,
        level: input.level,
        description: input.description,
        address: input.address,
        frequency: input.frequency,
        budget_min: input.budget_min,
        budget_max: input.budget_max,
        status: OfferStatus::Open,
        created_at: now,
    })
}

/// Decides a manual offer status change. Every transition between the three
/// statuses is permitted, including reopening a closed offer; only ownership
/// gates the action. Never touches the offer's applications.
pub fn change_offer_status(
    actor: &Actor,
    offer: &Offer,
    new_status: OfferStatus,
) -> DomainResult<OfferStatus> {
    authorize(
        actor,
        &Action::ChangeOfferStatus {
            offer_owner: offer.parent_id,
        },
    )?;
    Ok(new_status)
}

/// Builds a pending application for the acting tutor.
///
/// `already_applied` is the caller's read of the store for this
/// (offer, tutor) pair; the store's uniqueness constraint remains the
/// backstop for the concurrent case.
pub fn submit_application(
    actor: &Actor,
    profile: &TutorProfile,
    offer: &Offer,
    already_applied: bool,
    message: &str,
    now: DateTime<Utc>,
) -> DomainResult<Application> {
    if profile.account_id != actor.account_id {
        return Err(DomainError::PermissionDenied(
            "a tutor may only apply on their own behalf".to_string(),
        ));
    }
    authorize(
        actor,
        &Action::SubmitApplication {
            documents_validated: profile.documents_validated,
        },
    )?;
    if offer.status != OfferStatus::Open {
        return Err(DomainError::InvalidState(format!(
            "offer is {}, applications are only accepted while it is open",
            offer.status.as_str()
        )));
    }
    if already_applied {
        return Err(DomainError::Conflict(
            "you have already applied to this offer".to_string(),
        ));
    }
    if message.chars().count() < MIN_APPLICATION_MESSAGE_LEN {
        return Err(DomainError::Validation(format!(
            "the message must be at least {MIN_APPLICATION_MESSAGE_LEN} characters"
        )));
    }

    Ok(Application {
        id: Uuid::new_v4(),
        offer_id: offer.id,
        tutor_id: actor.account_id,
        message: message.to_string(),
        status: ApplicationStatus::Pending,
        created_at: now,
    })
}

/// Decides a pending application.
///
/// Accepting creates exactly one active contract copying the offer's
/// subject/level/frequency/address. It does NOT reject sibling pending
/// applications and does NOT move the offer's status: an offer may stay open
/// with several tutors engaged in parallel.
pub fn decide_application(
    actor: &Actor,
    offer: &Offer,
    application: &Application,
    decision: Decision,
    now: DateTime<Utc>,
) -> DomainResult<DecisionOutcome> {
    if application.offer_id != offer.id {
        return Err(DomainError::Validation(
            "application does not belong to this offer".to_string(),
        ));
    }
    authorize(
        actor,
        &Action::DecideApplication {
            offer_owner: offer.parent_id,
        },
    )?;
    if application.status != ApplicationStatus::Pending {
        return Err(DomainError::InvalidState(format!(
            "application was already {}",
            application.status.as_str()
        )));
    }

    match decision {
        Decision::Reject => Ok(DecisionOutcome {
            application_status: ApplicationStatus::Rejected,
            contract: None,
        }),
        Decision::Accept => Ok(DecisionOutcome {
            application_status: ApplicationStatus::Accepted,
            contract: Some(Contract {
                id: Uuid::new_v4(),
                offer_id: offer.id,
                parent_id: offer.parent_id,
                tutor_id: application.tutor_id,
                subject: offer.subject.clone(),
                level: offer.level.clone(),
                frequency: offer.frequency.clone(),
                address: offer.address.clone(),
                agreed_rate: None,
                start_date: now.date_naive(),
                end_date: None,
                status: ContractStatus::Active,
                created_at: now,
            }),
        }),
    }
}

/// Decides a contract status change. Only the owning parent, only while the
/// contract is active. Completing or cancelling stamps the end date.
/// `active -> active` is a no-op, signalled as `Ok(None)`.
pub fn change_contract_status(
    actor: &Actor,
    contract: &Contract,
    new_status: ContractStatus,
    now: DateTime<Utc>,
) -> DomainResult<Option<ContractUpdate>> {
    authorize(
        actor,
        &Action::ChangeContractStatus {
            contract_owner: contract.parent_id,
        },
    )?;
    if contract.status != ContractStatus::Active {
        return Err(DomainError::InvalidState(format!(
            "contract is {}, only an active contract can change status",
            contract.status.as_str()
        )));
    }
    match new_status {
        ContractStatus::Active => Ok(None),
        ContractStatus::Completed | ContractStatus::Cancelled => Ok(Some(ContractUpdate {
            status: new_status,
            end_date: now.date_naive(),
        })),
    }
}

/// Permission gate for the cascade delete. The cascade itself (contracts,
/// then applications, then the offer, in one transaction) is a store
/// operation.
pub fn authorize_offer_delete(actor: &Actor) -> DomainResult<()> {
    authorize(actor, &Action::DeleteOffer)
}

/// Soft-(de)activates an account. An admin may act on any account except a
/// super admin's; a super admin may act on anyone.
pub fn set_account_active(actor: &Actor, target: &Account, active: bool) -> DomainResult<bool> {
    authorize(
        actor,
        &Action::ToggleAccountActive {
            target_roles: target.roles.clone(),
        },
    )?;
    Ok(active)
}

/// Changes an account's role. Super admin only, and never on another super
/// admin account.
pub fn change_account_role(actor: &Actor, target: &Account, new_role: Role) -> DomainResult<Role> {
    authorize(actor, &Action::ChangeAccountRole)?;
    if target.roles.contains(&Role::SuperAdmin) {
        return Err(DomainError::PermissionDenied(
            "a super admin account's role cannot be changed".to_string(),
        ));
    }
    Ok(new_role)
}

/// Admin review outcome for a tutor's uploaded documents.
pub fn set_documents_validated(actor: &Actor, validated: bool) -> DomainResult<bool> {
    authorize(actor, &Action::SetDocumentsValidated)?;
    Ok(validated)
}
