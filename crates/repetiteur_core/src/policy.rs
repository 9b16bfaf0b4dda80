//! crates/repetiteur_core/src/policy.rs
//!
//! The single capability matrix. Every lifecycle operation asks this module
//! before doing anything else; no role or ownership check lives anywhere
//! else in the codebase.

use uuid::Uuid;

use crate::domain::{Actor, Role};
use crate::error::{DomainError, DomainResult};

/// An attempted action, carrying the ownership facts the matrix needs.
#[derive(Debug, Clone)]
pub enum Action {
    CreateOffer,
    ChangeOfferStatus { offer_owner: Uuid },
    DeleteOffer,
    SubmitApplication { documents_validated: bool },
    DecideApplication { offer_owner: Uuid },
    ChangeContractStatus { contract_owner: Uuid },
    ToggleAccountActive { target_roles: Vec<Role> },
    ChangeAccountRole,
    SetDocumentsValidated,
}

/// The capability matrix, one arm per row.
pub fn allows(actor: &Actor, action: &Action) -> bool {
    match action {
        Action::CreateOffer => actor.has_role(Role::Parent),
        Action::ChangeOfferStatus { offer_owner } => {
            actor.is_admin() || (actor.has_role(Role::Parent) && actor.account_id == *offer_owner)
        }
        Action::DeleteOffer => actor.is_admin(),
        Action::SubmitApplication { documents_validated } => {
            actor.has_role(Role::Tutor) && *documents_validated
        }
        Action::DecideApplication { offer_owner } => {
            actor.has_role(Role::Parent) && actor.account_id == *offer_owner
        }
        Action::ChangeContractStatus { contract_owner } => {
            actor.has_role(Role::Parent) && actor.account_id == *contract_owner
        }
        Action::ToggleAccountActive { target_roles } => {
            if target_roles.contains(&Role::SuperAdmin) {
                actor.has_role(Role::SuperAdmin)
            } else {
                actor.is_admin()
            }
        }
        Action::ChangeAccountRole => actor.has_role(Role::SuperAdmin),
        Action::SetDocumentsValidated => actor.is_admin(),
    }
}

/// Like [`allows`], but produces the specific message the caller surfaces.
pub fn authorize(actor: &Actor, action: &Action) -> DomainResult<()> {
    if allows(actor, action) {
        return Ok(());
    }
    let message = match action {
        Action::CreateOffer => "only a parent may create an offer",
        Action::ChangeOfferStatus { .. } => {
            "only the owning parent or an admin may change an offer's status"
        }
        Action::DeleteOffer => "only an admin may delete an offer",
        Action::SubmitApplication {
            documents_validated: false,
        } if actor.has_role(Role::Tutor) => {
            "your documents must be validated by an admin before applying"
        }
        Action::SubmitApplication { .. } => "only a tutor may apply to an offer",
        Action::DecideApplication { .. } => {
            "only the parent who owns the offer may decide an application"
        }
        Action::ChangeContractStatus { .. } => {
            "only the parent who owns the contract may change its status"
        }
        Action::ToggleAccountActive { .. } => {
            "only a super admin may act on a super admin account"
        }
        Action::ChangeAccountRole => "only a super admin may change account roles",
        Action::SetDocumentsValidated => "only an admin may validate tutor documents",
    };
    Err(DomainError::PermissionDenied(message.to_string()))
}
