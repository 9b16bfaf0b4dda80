//! crates/repetiteur_core/src/domain.rs
//!
//! Defines the pure, core data structures for the tutoring marketplace.
//! These structs are independent of any database or serialization format
//! beyond the status strings shared with the wire and the store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum biography length for a tutor profile to count as complete.
pub const MIN_BIO_LEN: usize = 50;

/// Minimum length of an application message.
pub const MIN_APPLICATION_MESSAGE_LEN: usize = 20;

/// The fixed set of roles an account may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Tutor,
    Parent,
}

impl Role {
    pub const fn ordered() -> [Self; 4] {
        [Self::SuperAdmin, Self::Admin, Self::Tutor, Self::Parent]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Tutor => "tutor",
            Self::Parent => "parent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "super_admin" => Some(Self::SuperAdmin),
            "admin" => Some(Self::Admin),
            "tutor" => Some(Self::Tutor),
            "parent" => Some(Self::Parent),
            _ => None,
        }
    }
}

/// The authenticated caller of every operation. Supplied by the external
/// identity provider; never derived from ambient state.
#[derive(Debug, Clone)]
pub struct Actor {
    pub account_id: Uuid,
    pub roles: Vec<Role>,
}

impl Actor {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// True for admin or super_admin.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin) || self.has_role(Role::SuperAdmin)
    }
}

/// A person using the system. Accounts are created by the external auth
/// service on registration and soft-deactivated by an admin, never deleted.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub full_name: String,
    /// Unique, used as the login identifier. Ivorian format: +225 then 10 digits.
    pub phone: String,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

/// Self-service tutor data, attached 1:1 to a tutor account.
///
/// `documents_validated` is set exclusively by an admin after reviewing the
/// uploaded identity/diploma documents. There is no stored "complete" flag;
/// see [`TutorProfile::is_complete`].
#[derive(Debug, Clone, Default)]
pub struct TutorProfile {
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
}

impl TutorProfile {
    /// Recomputed on every read, never persisted.
    pub fn is_complete(&self) -> bool {
        self.bio.chars().count() >= MIN_BIO_LEN
            && !self.subjects.is_empty()
            && !self.levels.is_empty()
            && !self.availability.is_empty()
            && !self.location.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Open,
    InProgress,
    Closed,
}

impl OfferStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// A parent's request for tutoring services in a subject/level.
#[derive(Debug, Clone)]
pub struct Offer {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub subject: String,
    pub level: String,
    pub description: String,
    pub address: String,
    pub frequency: String,
    /// FCFA. Invariant: `budget_max >= budget_min`, both positive.
    pub budget_min: i64,
    pub budget_max: i64,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw input for a new offer, before the lifecycle engine has validated it.
#[derive(Debug, Clone)]
pub struct NewOffer {
    pub subject: String,
    pub level: String,
    pub description: String,
    pub address: String,
    pub frequency: String,
    pub budget_min: i64,
    pub budget_max: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// A tutor's bid to fulfill a specific offer. At most one per (offer, tutor)
/// pair; the store enforces the uniqueness constraint.
#[derive(Debug, Clone)]
pub struct Application {
    pub id: Uuid,
    pub offer_id: Uuid,
    pub tutor_id: Uuid,
    pub message: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Active,
    Completed,
    Cancelled,
}

impl ContractStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// The agreed engagement formed when a parent accepts an application.
/// Subject, level, frequency and address are copied from the offer at
/// acceptance time so later offer edits do not rewrite history.
#[derive(Debug, Clone)]
pub struct Contract {
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
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> TutorProfile {
        TutorProfile {
            account_id: Uuid::new_v4(),
            bio: "Enseignant de mathématiques depuis dix ans, patient et méthodique.".to_string(),
            subjects: vec!["Mathématiques".to_string()],
            levels: vec!["3ème".to_string()],
            availability: vec!["Lundi soir".to_string()],
            location: "Cocody".to_string(),
            ..TutorProfile::default()
        }
    }

    #[test]
    fn profile_complete_requires_every_field() {
        assert!(complete_profile().is_complete());

        let mut p = complete_profile();
        p.bio = "Trop court.".to_string();
        assert!(!p.is_complete());

        let mut p = complete_profile();
        p.subjects.clear();
        assert!(!p.is_complete());

        let mut p = complete_profile();
        p.levels.clear();
        assert!(!p.is_complete());

        let mut p = complete_profile();
        p.availability.clear();
        assert!(!p.is_complete());

        let mut p = complete_profile();
        p.location = "   ".to_string();
        assert!(!p.is_complete());
    }

    #[test]
    fn profile_complete_counts_chars_not_bytes() {
        let mut p = complete_profile();
        // 50 accented characters is exactly the threshold.
        p.bio = "é".repeat(MIN_BIO_LEN);
        assert!(p.is_complete());
        p.bio = "é".repeat(MIN_BIO_LEN - 1);
        assert!(!p.is_complete());
    }

    #[test]
    fn status_strings_round_trip() {
        for s in [OfferStatus::Open, OfferStatus::InProgress, OfferStatus::Closed] {
            assert_eq!(OfferStatus::parse(s.as_str()), Some(s));
        }
        for s in [
            ApplicationStatus::Pending,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(ApplicationStatus::parse(s.as_str()), Some(s));
        }
        for s in [
            ContractStatus::Active,
            ContractStatus::Completed,
            ContractStatus::Cancelled,
        ] {
            assert_eq!(ContractStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(Role::parse("prestataire"), None);
    }
}
