//! crates/repetiteur_core/src/aggregates.rs
//!
//! Read-side derived values. Everything here is recomputed from the entity
//! set handed in; nothing is a persisted counter that can go stale.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    Account, Application, ApplicationStatus, Contract, ContractStatus, Offer, OfferStatus, Role,
};

/// Applications per offer, for listings that show a count badge.
pub fn applications_per_offer(applications: &[Application]) -> HashMap<Uuid, usize> {
    let mut counts = HashMap::new();
    for app in applications {
        *counts.entry(app.offer_id).or_insert(0) += 1;
    }
    counts
}

pub fn open_offer_count(offers: &[Offer]) -> usize {
    offers.iter().filter(|o| o.status == OfferStatus::Open).count()
}

pub fn count_offers_with_status(offers: &[Offer], status: OfferStatus) -> usize {
    offers.iter().filter(|o| o.status == status).count()
}

pub fn count_applications_with_status(
    applications: &[Application],
    status: ApplicationStatus,
) -> usize {
    applications.iter().filter(|a| a.status == status).count()
}

pub fn count_contracts_with_status(contracts: &[Contract], status: ContractStatus) -> usize {
    contracts.iter().filter(|c| c.status == status).count()
}

/// Accounts holding each role. An account holding several roles is counted
/// once per role, matching how the admin screen reads the numbers.
pub fn role_counts(accounts: &[Account]) -> HashMap<Role, usize> {
    let mut counts = HashMap::new();
    for account in accounts {
        for role in &account.roles {
            *counts.entry(*role).or_insert(0) += 1;
        }
    }
    counts
}

/// What a parent sees at the top of their dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ParentDashboard {
    pub total_offers: usize,
    pub open_offers: usize,
    pub pending_applications: usize,
    pub accepted_applications: usize,
    pub active_contracts: usize,
}

/// `offers` are the parent's own offers, `applications` the applications
/// received across those offers, `contracts` the parent's contracts.
pub fn parent_dashboard(
    offers: &[Offer],
    applications: &[Application],
    contracts: &[Contract],
) -> ParentDashboard {
    ParentDashboard {
        total_offers: offers.len(),
        open_offers: open_offer_count(offers),
        pending_applications: count_applications_with_status(
            applications,
            ApplicationStatus::Pending,
        ),
        accepted_applications: count_applications_with_status(
            applications,
            ApplicationStatus::Accepted,
        ),
        active_contracts: count_contracts_with_status(contracts, ContractStatus::Active),
    }
}

/// What a tutor sees at the top of their dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct TutorDashboard {
    pub available_offers: usize,
    pub pending_applications: usize,
    pub accepted_applications: usize,
    pub rejected_applications: usize,
    pub active_contracts: usize,
}

/// `open_offers` is the count of offers currently open marketplace-wide,
/// `applications` the tutor's own applications, `contracts` the tutor's
/// contracts.
pub fn tutor_dashboard(
    open_offers: usize,
    applications: &[Application],
    contracts: &[Contract],
) -> TutorDashboard {
    TutorDashboard {
        available_offers: open_offers,
        pending_applications: count_applications_with_status(
            applications,
            ApplicationStatus::Pending,
        ),
        accepted_applications: count_applications_with_status(
            applications,
            ApplicationStatus::Accepted,
        ),
        rejected_applications: count_applications_with_status(
            applications,
            ApplicationStatus::Rejected,
        ),
        active_contracts: count_contracts_with_status(contracts, ContractStatus::Active),
    }
}

/// The admin statistics panel.
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub total_accounts: usize,
    pub parents: usize,
    pub tutors: usize,
    pub admins: usize,
    pub total_offers: usize,
    pub open_offers: usize,
    pub total_applications: usize,
    pub active_contracts: usize,
}

pub fn admin_stats(
    accounts: &[Account],
    offers: &[Offer],
    applications: &[Application],
    contracts: &[Contract],
) -> AdminStats {
    let roles = role_counts(accounts);
    AdminStats {
        total_accounts: accounts.len(),
        parents: roles.get(&Role::Parent).copied().unwrap_or(0),
        tutors: roles.get(&Role::Tutor).copied().unwrap_or(0),
        admins: roles.get(&Role::Admin).copied().unwrap_or(0)
            + roles.get(&Role::SuperAdmin).copied().unwrap_or(0),
        total_offers: offers.len(),
        open_offers: open_offer_count(offers),
        total_applications: applications.len(),
        active_contracts: count_contracts_with_status(contracts, ContractStatus::Active),
    }
}
