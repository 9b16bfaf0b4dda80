//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete
//! implementation of the `MarketplaceStore` port from the `core` crate. It
//! handles all interactions with the PostgreSQL database using `sqlx`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use repetiteur_core::domain::{
    Account, Application, ApplicationStatus, Contract, ContractStatus, Offer, OfferStatus, Role,
    TutorProfile,
};
use repetiteur_core::ports::{CascadeReport, MarketplaceStore, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `MarketplaceStore` port.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a new `PgStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn roles_for(&self, account_id: Uuid) -> PortResult<Vec<Role>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT role FROM account_roles WHERE account_id = $1")
                .bind(account_id)
                .fetch_all(&self.pool)
                .await
                .map_err(unexpected)?;
        Ok(rows
            .into_iter()
            .filter_map(|(role,)| Role::parse(&role))
            .collect())
    }
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

fn not_found_or(e: sqlx::Error, what: &str, id: Uuid) -> PortError {
    match e {
        sqlx::Error::RowNotFound => PortError::NotFound(format!("{what} {id} not found")),
        _ => PortError::Unexpected(e.to_string()),
    }
}

/// Maps an insert failure, surfacing a uniqueness violation as a conflict so
/// the losing side of a concurrent duplicate submission gets the right error.
fn conflict_or(e: sqlx::Error, message: &str) -> PortError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            PortError::Conflict(message.to_string())
        }
        _ => PortError::Unexpected(e.to_string()),
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct AccountRecord {
    id: Uuid,
    full_name: String,
    phone: String,
    avatar_url: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl AccountRecord {
    fn to_domain(self, roles: Vec<Role>) -> Account {
        Account {
            id: self.id,
            full_name: self.full_name,
            phone: self.phone,
            avatar_url: self.avatar_url,
            is_active: self.is_active,
            roles,
            created_at: self.created_at,
        }
    }
}

#[derive(FromRow)]
struct TutorProfileRecord {
    account_id: Uuid,
    bio: String,
    subjects: Vec<String>,
    levels: Vec<String>,
    availability: Vec<String>,
    location: String,
    hourly_rate: Option<i64>,
    years_experience: Option<i32>,
    cni_front_url: Option<String>,
    cni_back_url: Option<String>,
    diploma_url: Option<String>,
    documents_validated: bool,
}

impl TutorProfileRecord {
    fn to_domain(self) -> TutorProfile {
        TutorProfile {
            account_id: self.account_id,
            bio: self.bio,
            subjects: self.subjects,
            levels: self.levels,
            availability: self.availability,
            location: self.location,
            hourly_rate: self.hourly_rate,
            years_experience: self.years_experience,
            cni_front_url: self.cni_front_url,
            cni_back_url: self.cni_back_url,
            diploma_url: self.diploma_url,
            documents_validated: self.documents_validated,
        }
    }
}

#[derive(FromRow)]
struct OfferRecord {
    id: Uuid,
    parent_id: Uuid,
    subject: String,
    level: String,
    description: String,
    address: String,
    frequency: String,
    budget_min: i64,
    budget_max: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl OfferRecord {
    fn to_domain(self) -> PortResult<Offer> {
        let status = OfferStatus::parse(&self.status).ok_or_else(|| {
            PortError::Unexpected(format!("offer {} has unknown status {}", self.id, self.status))
        })?;
        Ok(Offer {
            id: self.id,
            parent_id: self.parent_id,
            subject: self.subject,
            level: self.level,
            description: self.description,
            address: self.address,
            frequency: self.frequency,
            budget_min: self.budget_min,
            budget_max: self.budget_max,
            status,
            created_at: self.created_at,
        })
    }
}

#[derive(FromRow)]
struct ApplicationRecord {
    id: Uuid,
    offer_id: Uuid,
    tutor_id: Uuid,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl ApplicationRecord {
    fn to_domain(self) -> PortResult<Application> {
        let status = ApplicationStatus::parse(&self.status).ok_or_else(|| {
            PortError::Unexpected(format!(
                "application {} has unknown status {}",
                self.id, self.status
            ))
        })?;
        Ok(Application {
            id: self.id,
            offer_id: self.offer_id,
            tutor_id: self.tutor_id,
            message: self.message,
            status,
            created_at: self.created_at,
        })
    }
}

#[derive(FromRow)]
struct ContractRecord {
    id: Uuid,
    offer_id: Uuid,
    parent_id: Uuid,
    tutor_id: Uuid,
    subject: String,
    level: String,
    frequency: String,
    address: String,
    agreed_rate: Option<i64>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: String,
    created_at: DateTime<Utc>,
}

impl ContractRecord {
    fn to_domain(self) -> PortResult<Contract> {
        let status = ContractStatus::parse(&self.status).ok_or_else(|| {
            PortError::Unexpected(format!(
                "contract {} has unknown status {}",
                self.id, self.status
            ))
        })?;
        Ok(Contract {
            id: self.id,
            offer_id: self.offer_id,
            parent_id: self.parent_id,
            tutor_id: self.tutor_id,
            subject: self.subject,
            level: self.level,
            frequency: self.frequency,
            address: self.address,
            agreed_rate: self.agreed_rate,
            start_date: self.start_date,
            end_date: self.end_date,
            status,
            created_at: self.created_at,
        })
    }
}

const OFFER_COLUMNS: &str = "id, parent_id, subject, level, description, address, frequency, \
                             budget_min, budget_max, status, created_at";
const APPLICATION_COLUMNS: &str = "id, offer_id, tutor_id, message, status, created_at";
const CONTRACT_COLUMNS: &str = "id, offer_id, parent_id, tutor_id, subject, level, frequency, \
                                address, agreed_rate, start_date, end_date, status, created_at";

//=========================================================================================
// `MarketplaceStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl MarketplaceStore for PgStore {
    async fn get_account(&self, account_id: Uuid) -> PortResult<Account> {
        let record = sqlx::query_as::<_, AccountRecord>(
            "SELECT id, full_name, phone, avatar_url, is_active, created_at \
             FROM accounts WHERE id = $1",
        )
        .bind(account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| not_found_or(e, "Account", account_id))?;

        let roles = self.roles_for(account_id).await?;
        Ok(record.to_domain(roles))
    }

    async fn list_accounts(&self) -> PortResult<Vec<Account>> {
        let records = sqlx::query_as::<_, AccountRecord>(
            "SELECT id, full_name, phone, avatar_url, is_active, created_at \
             FROM accounts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        let role_rows: Vec<(Uuid, String)> =
            sqlx::query_as("SELECT account_id, role FROM account_roles")
                .fetch_all(&self.pool)
                .await
                .map_err(unexpected)?;
        let mut roles_by_account: HashMap<Uuid, Vec<Role>> = HashMap::new();
        for (account_id, role) in role_rows {
            if let Some(role) = Role::parse(&role) {
                roles_by_account.entry(account_id).or_default().push(role);
            }
        }

        Ok(records
            .into_iter()
            .map(|r| {
                let roles = roles_by_account.remove(&r.id).unwrap_or_default();
                r.to_domain(roles)
            })
            .collect())
    }

    async fn set_account_active(&self, account_id: Uuid, active: bool) -> PortResult<()> {
        let result = sqlx::query("UPDATE accounts SET is_active = $1 WHERE id = $2")
            .bind(active)
            .bind(account_id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!(
                "Account {account_id} not found"
            )));
        }
        Ok(())
    }

    async fn set_account_role(&self, account_id: Uuid, role: Role) -> PortResult<()> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;
        sqlx::query("DELETE FROM account_roles WHERE account_id = $1")
            .bind(account_id)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?;
        sqlx::query("INSERT INTO account_roles (account_id, role) VALUES ($1, $2)")
            .bind(account_id)
            .bind(role.as_str())
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?;
        tx.commit().await.map_err(unexpected)
    }

    async fn get_tutor_profile(&self, account_id: Uuid) -> PortResult<TutorProfile> {
        let record = sqlx::query_as::<_, TutorProfileRecord>(
            "SELECT account_id, bio, subjects, levels, availability, location, hourly_rate, \
             years_experience, cni_front_url, cni_back_url, diploma_url, documents_validated \
             FROM tutor_profiles WHERE account_id = $1",
        )
        .bind(account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| not_found_or(e, "Tutor profile", account_id))?;
        Ok(record.to_domain())
    }

    async fn upsert_tutor_profile(&self, profile: &TutorProfile) -> PortResult<()> {
        // Self-service fields only: the admin-owned documents_validated flag
        // keeps its stored value on conflict.
        sqlx::query(
            "INSERT INTO tutor_profiles \
             (account_id, bio, subjects, levels, availability, location, hourly_rate, \
              years_experience, cni_front_url, cni_back_url, diploma_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (account_id) DO UPDATE SET \
               bio = EXCLUDED.bio, \
               subjects = EXCLUDED.subjects, \
               levels = EXCLUDED.levels, \
               availability = EXCLUDED.availability, \
               location = EXCLUDED.location, \
               hourly_rate = EXCLUDED.hourly_rate, \
               years_experience = EXCLUDED.years_experience, \
               cni_front_url = EXCLUDED.cni_front_url, \
               cni_back_url = EXCLUDED.cni_back_url, \
               diploma_url = EXCLUDED.diploma_url",
        )
        .bind(profile.account_id)
        .bind(&profile.bio)
        .bind(&profile.subjects)
        .bind(&profile.levels)
        .bind(&profile.availability)
        .bind(&profile.location)
        .bind(profile.hourly_rate)
        .bind(profile.years_experience)
        .bind(&profile.cni_front_url)
        .bind(&profile.cni_back_url)
        .bind(&profile.diploma_url)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }

    async fn set_documents_validated(&self, account_id: Uuid, validated: bool) -> PortResult<()> {
        let result =
            sqlx::query("UPDATE tutor_profiles SET documents_validated = $1 WHERE account_id = $2")
                .bind(validated)
                .bind(account_id)
                .execute(&self.pool)
                .await
                .map_err(unexpected)?;
        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!(
                "Tutor profile {account_id} not found"
            )));
        }
        Ok(())
    }

    async fn create_offer(&self, offer: &Offer) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO offers \
             (id, parent_id, subject, level, description, address, frequency, budget_min, \
              budget_max, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(offer.id)
        .bind(offer.parent_id)
        .bind(&offer.subject)
        .bind(&offer.level)
        .bind(&offer.description)
        .bind(&offer.address)
        .bind(&offer.frequency)
        .bind(offer.budget_min)
        .bind(offer.budget_max)
        .bind(offer.status.as_str())
        .bind(offer.created_at)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }

    async fn get_offer(&self, offer_id: Uuid) -> PortResult<Offer> {
        let record = sqlx::query_as::<_, OfferRecord>(&format!(
            "SELECT {OFFER_COLUMNS} FROM offers WHERE id = $1"
        ))
        .bind(offer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| not_found_or(e, "Offer", offer_id))?;
        record.to_domain()
    }

    async fn list_offers_by_parent(&self, parent_id: Uuid) -> PortResult<Vec<Offer>> {
        let records = sqlx::query_as::<_, OfferRecord>(&format!(
            "SELECT {OFFER_COLUMNS} FROM offers WHERE parent_id = $1 ORDER BY created_at DESC"
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn list_open_offers(&self) -> PortResult<Vec<Offer>> {
        let records = sqlx::query_as::<_, OfferRecord>(&format!(
            "SELECT {OFFER_COLUMNS} FROM offers WHERE status = 'open' ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn list_all_offers(&self) -> PortResult<Vec<Offer>> {
        let records = sqlx::query_as::<_, OfferRecord>(&format!(
            "SELECT {OFFER_COLUMNS} FROM offers ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn update_offer_status(&self, offer_id: Uuid, status: OfferStatus) -> PortResult<()> {
        let result = sqlx::query("UPDATE offers SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(offer_id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!("Offer {offer_id} not found")));
        }
        Ok(())
    }

    async fn delete_offer_cascade(&self, offer_id: Uuid) -> PortResult<CascadeReport> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;

        let contracts_deleted = sqlx::query("DELETE FROM contracts WHERE offer_id = $1")
            .bind(offer_id)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?
            .rows_affected();
        let applications_deleted = sqlx::query("DELETE FROM applications WHERE offer_id = $1")
            .bind(offer_id)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?
            .rows_affected();
        let offers_deleted = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(offer_id)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?
            .rows_affected();

        if offers_deleted == 0 {
            // Nothing to delete; the rollback keeps the whole cascade a no-op.
            tx.rollback().await.map_err(unexpected)?;
            return Err(PortError::NotFound(format!("Offer {offer_id} not found")));
        }
        tx.commit().await.map_err(unexpected)?;

        Ok(CascadeReport {
            contracts_deleted,
            applications_deleted,
            offer_deleted: true,
        })
    }

    async fn create_application(&self, application: &Application) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO applications (id, offer_id, tutor_id, message, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(application.id)
        .bind(application.offer_id)
        .bind(application.tutor_id)
        .bind(&application.message)
        .bind(application.status.as_str())
        .bind(application.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_or(e, "an application for this offer already exists"))?;
        Ok(())
    }

    async fn get_application(&self, application_id: Uuid) -> PortResult<Application> {
        let record = sqlx::query_as::<_, ApplicationRecord>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE id = $1"
        ))
        .bind(application_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| not_found_or(e, "Application", application_id))?;
        record.to_domain()
    }

    async fn application_exists(&self, offer_id: Uuid, tutor_id: Uuid) -> PortResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE offer_id = $1 AND tutor_id = $2)",
        )
        .bind(offer_id)
        .bind(tutor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)
    }

    async fn list_applications_for_offer(&self, offer_id: Uuid) -> PortResult<Vec<Application>> {
        let records = sqlx::query_as::<_, ApplicationRecord>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE offer_id = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(offer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn list_applications_by_tutor(&self, tutor_id: Uuid) -> PortResult<Vec<Application>> {
        let records = sqlx::query_as::<_, ApplicationRecord>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE tutor_id = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(tutor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn list_applications_for_parent(&self, parent_id: Uuid) -> PortResult<Vec<Application>> {
        let records = sqlx::query_as::<_, ApplicationRecord>(
            "SELECT a.id, a.offer_id, a.tutor_id, a.message, a.status, a.created_at \
             FROM applications a \
             JOIN offers o ON o.id = a.offer_id \
             WHERE o.parent_id = $1 \
             ORDER BY a.created_at DESC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn list_all_applications(&self) -> PortResult<Vec<Application>> {
        let records = sqlx::query_as::<_, ApplicationRecord>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn record_application_decision(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
        contract: Option<&Contract>,
    ) -> PortResult<()> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;

        let updated = sqlx::query("UPDATE applications SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(application_id)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?
            .rows_affected();
        if updated == 0 {
            tx.rollback().await.map_err(unexpected)?;
            return Err(PortError::NotFound(format!(
                "Application {application_id} not found"
            )));
        }

        if let Some(contract) = contract {
            sqlx::query(
                "INSERT INTO contracts \
                 (id, offer_id, parent_id, tutor_id, subject, level, frequency, address, \
                  agreed_rate, start_date, end_date, status, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
            )
            .bind(contract.id)
            .bind(contract.offer_id)
            .bind(contract.parent_id)
            .bind(contract.tutor_id)
            .bind(&contract.subject)
            .bind(&contract.level)
            .bind(&contract.frequency)
            .bind(&contract.address)
            .bind(contract.agreed_rate)
            .bind(contract.start_date)
            .bind(contract.end_date)
            .bind(contract.status.as_str())
            .bind(contract.created_at)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?;
        }

        tx.commit().await.map_err(unexpected)
    }

    async fn create_contract(&self, contract: &Contract) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO contracts \
             (id, offer_id, parent_id, tutor_id, subject, level, frequency, address, \
              agreed_rate, start_date, end_date, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(contract.id)
        .bind(contract.offer_id)
        .bind(contract.parent_id)
        .bind(contract.tutor_id)
        .bind(&contract.subject)
        .bind(&contract.level)
        .bind(&contract.frequency)
        .bind(&contract.address)
        .bind(contract.agreed_rate)
        .bind(contract.start_date)
        .bind(contract.end_date)
        .bind(contract.status.as_str())
        .bind(contract.created_at)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(())
    }

    async fn get_contract(&self, contract_id: Uuid) -> PortResult<Contract> {
        let record = sqlx::query_as::<_, ContractRecord>(&format!(
            "SELECT {CONTRACT_COLUMNS} FROM contracts WHERE id = $1"
        ))
        .bind(contract_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| not_found_or(e, "Contract", contract_id))?;
        record.to_domain()
    }

    async fn list_contracts_by_parent(&self, parent_id: Uuid) -> PortResult<Vec<Contract>> {
        let records = sqlx::query_as::<_, ContractRecord>(&format!(
            "SELECT {CONTRACT_COLUMNS} FROM contracts WHERE parent_id = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn list_contracts_by_tutor(&self, tutor_id: Uuid) -> PortResult<Vec<Contract>> {
        let records = sqlx::query_as::<_, ContractRecord>(&format!(
            "SELECT {CONTRACT_COLUMNS} FROM contracts WHERE tutor_id = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(tutor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn list_all_contracts(&self) -> PortResult<Vec<Contract>> {
        let records = sqlx::query_as::<_, ContractRecord>(&format!(
            "SELECT {CONTRACT_COLUMNS} FROM contracts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn update_contract_status(
        &self,
        contract_id: Uuid,
        status: ContractStatus,
        end_date: Option<NaiveDate>,
    ) -> PortResult<()> {
        let result =
            sqlx::query("UPDATE contracts SET status = $1, end_date = COALESCE($2, end_date) \
                         WHERE id = $3")
                .bind(status.as_str())
                .bind(end_date)
                .bind(contract_id)
                .execute(&self.pool)
                .await
                .map_err(unexpected)?;
        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!(
                "Contract {contract_id} not found"
            )));
        }
        Ok(())
    }
}
