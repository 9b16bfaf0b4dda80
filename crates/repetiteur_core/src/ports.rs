//! crates/repetiteur_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of the concrete database, identity provider and
//! notification channel.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    Account, Actor, Application, ApplicationStatus, Contract, ContractStatus, Offer, OfferStatus,
    Role, TutorProfile,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

/// What the transactional offer cascade removed, per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeReport {
    pub contracts_deleted: u64,
    pub applications_deleted: u64,
    pub offer_deleted: bool,
}

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait MarketplaceStore: Send + Sync {
    // --- Accounts ---
    async fn get_account(&self, account_id: Uuid) -> PortResult<Account>;

    async fn list_accounts(&self) -> PortResult<Vec<Account>>;

    async fn set_account_active(&self, account_id: Uuid, active: bool) -> PortResult<()>;

    async fn set_account_role(&self, account_id: Uuid, role: Role) -> PortResult<()>;

    // --- Tutor Profiles ---
    async fn get_tutor_profile(&self, account_id: Uuid) -> PortResult<TutorProfile>;

    async fn upsert_tutor_profile(&self, profile: &TutorProfile) -> PortResult<()>;

    async fn set_documents_validated(&self, account_id: Uuid, validated: bool) -> PortResult<()>;

    // --- Offers ---
    async fn create_offer(&self, offer: &Offer) -> PortResult<()>;

    async fn get_offer(&self, offer_id: Uuid) -> PortResult<Offer>;

    async fn list_offers_by_parent(&self, parent_id: Uuid) -> PortResult<Vec<Offer>>;

    async fn list_open_offers(&self) -> PortResult<Vec<Offer>>;

    async fn list_all_offers(&self) -> PortResult<Vec<Offer>>;

    async fn update_offer_status(&self, offer_id: Uuid, status: OfferStatus) -> PortResult<()>;

    /// Deletes the offer's contracts, its applications, then the offer
    /// itself, atomically. Returns how many rows each step removed.
    async fn delete_offer_cascade(&self, offer_id: Uuid) -> PortResult<CascadeReport>;

    // --- Applications ---
    /// Persists a new application. The store must hold a uniqueness
    /// constraint on (offer_id, tutor_id) and surface a violation as
    /// [`PortError::Conflict`] so concurrent duplicate submissions lose.
    async fn create_application(&self, application: &Application) -> PortResult<()>;

    async fn get_application(&self, application_id: Uuid) -> PortResult<Application>;

    async fn application_exists(&self, offer_id: Uuid, tutor_id: Uuid) -> PortResult<bool>;

    async fn list_applications_for_offer(&self, offer_id: Uuid) -> PortResult<Vec<Application>>;

    async fn list_applications_by_tutor(&self, tutor_id: Uuid) -> PortResult<Vec<Application>>;

    /// All applications received across a parent's offers.
    async fn list_applications_for_parent(&self, parent_id: Uuid) -> PortResult<Vec<Application>>;

    async fn list_all_applications(&self) -> PortResult<Vec<Application>>;

    /// Persists an accept/reject decision as one atomic write: the new
    /// application status plus, on accept, the resulting contract.
    async fn record_application_decision(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
        contract: Option<&Contract>,
    ) -> PortResult<()>;

    // --- Contracts ---
    async fn create_contract(&self, contract: &Contract) -> PortResult<()>;

    async fn get_contract(&self, contract_id: Uuid) -> PortResult<Contract>;

    async fn list_contracts_by_parent(&self, parent_id: Uuid) -> PortResult<Vec<Contract>>;

    async fn list_contracts_by_tutor(&self, tutor_id: Uuid) -> PortResult<Vec<Contract>>;

    async fn list_all_contracts(&self) -> PortResult<Vec<Contract>>;

    async fn update_contract_status(
        &self,
        contract_id: Uuid,
        status: ContractStatus,
        end_date: Option<NaiveDate>,
    ) -> PortResult<()>;
}

/// Resolves the opaque session tokens issued by the external auth service.
/// The core never sees credentials; it only ever receives an [`Actor`].
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the actor for a live session token. Expired or unknown tokens
    /// and deactivated accounts resolve to [`PortError::NotFound`].
    async fn resolve(&self, token: &str) -> PortResult<Actor>;
}

/// Domain events handed to the external notification layer. Delivery is
/// fire-and-forget; a failure is logged by the adapter, never surfaced.
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    ApplicationSubmitted { offer_id: Uuid, tutor_id: Uuid },
    ApplicationAccepted { application_id: Uuid, tutor_id: Uuid },
    ApplicationRejected { application_id: Uuid, tutor_id: Uuid },
    ContractStatusChanged { contract_id: Uuid, status: ContractStatus },
    OfferDeleted { offer_id: Uuid, parent_id: Uuid },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, account_id: Uuid, event: NotificationEvent);
}
