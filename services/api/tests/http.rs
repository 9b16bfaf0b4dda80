//! Router-level tests: an in-memory store and a fixed token table stand in
//! for Postgres and the external auth service, so every request exercises
//! the real middleware, handlers and lifecycle engine.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use api_lib::config::Config;
use api_lib::web::{self, state::AppState};
use repetiteur_core::domain::{
    Account, Actor, Application, ApplicationStatus, Contract, ContractStatus, Offer, OfferStatus,
    Role, TutorProfile,
};
use repetiteur_core::ports::{
    CascadeReport, IdentityProvider, MarketplaceStore, NotificationEvent, Notifier, PortError,
    PortResult,
};

//=========================================================================================
// In-memory test doubles
//=========================================================================================

#[derive(Default)]
struct MemStoreInner {
    accounts: HashMap<Uuid, Account>,
    profiles: HashMap<Uuid, TutorProfile>,
    offers: HashMap<Uuid, Offer>,
    applications: HashMap<Uuid, Application>,
    contracts: HashMap<Uuid, Contract>,
}

#[derive(Default)]
struct MemStore {
    inner: Mutex<MemStoreInner>,
}

impl MemStore {
    fn seed_account(&self, account: Account) {
        self.inner.lock().unwrap().accounts.insert(account.id, account);
    }

    fn seed_profile(&self, profile: TutorProfile) {
        self.inner
            .lock()
            .unwrap()
            .profiles
            .insert(profile.account_id, profile);
    }

    fn application_count(&self, offer_id: Uuid) -> usize {
        self.inner
            .lock()
            .unwrap()
            .applications
            .values()
            .filter(|a| a.offer_id == offer_id)
            .count()
    }

    fn contract_count(&self) -> usize {
        self.inner.lock().unwrap().contracts.len()
    }
}

#[async_trait]
impl MarketplaceStore for MemStore {
    async fn get_account(&self, account_id: Uuid) -> PortResult<Account> {
        self.inner
            .lock()
            .unwrap()
            .accounts
            .get(&account_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Account {account_id} not found")))
    }

    async fn list_accounts(&self) -> PortResult<Vec<Account>> {
        Ok(self.inner.lock().unwrap().accounts.values().cloned().collect())
    }

    async fn set_account_active(&self, account_id: Uuid, active: bool) -> PortResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let account = inner
            .accounts
            .get_mut(&account_id)
            .ok_or_else(|| PortError::NotFound(format!("Account {account_id} not found")))?;
        account.is_active = active;
        Ok(())
    }

    async fn set_account_role(&self, account_id: Uuid, role: Role) -> PortResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let account = inner
            .accounts
            .get_mut(&account_id)
            .ok_or_else(|| PortError::NotFound(format!("Account {account_id} not found")))?;
        account.roles = vec![role];
        Ok(())
    }

    async fn get_tutor_profile(&self, account_id: Uuid) -> PortResult<TutorProfile> {
        self.inner
            .lock()
            .unwrap()
            .profiles
            .get(&account_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Tutor profile {account_id} not found")))
    }

    async fn upsert_tutor_profile(&self, profile: &TutorProfile) -> PortResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let documents_validated = inner
            .profiles
            .get(&profile.account_id)
            .map(|p| p.documents_validated)
            .unwrap_or(false);
        let mut stored = profile.clone();
        stored.documents_validated = documents_validated;
        inner.profiles.insert(stored.account_id, stored);
        Ok(())
    }

    async fn set_documents_validated(&self, account_id: Uuid, validated: bool) -> PortResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let profile = inner
            .profiles
            .get_mut(&account_id)
            .ok_or_else(|| PortError::NotFound(format!("Tutor profile {account_id} not found")))?;
        profile.documents_validated = validated;
        Ok(())
    }

    async fn create_offer(&self, offer: &Offer) -> PortResult<()> {
        self.inner.lock().unwrap().offers.insert(offer.id, offer.clone());
        Ok(())
    }

    async fn get_offer(&self, offer_id: Uuid) -> PortResult<Offer> {
        self.inner
            .lock()
            .unwrap()
            .offers
            .get(&offer_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Offer {offer_id} not found")))
    }

    async fn list_offers_by_parent(&self, parent_id: Uuid) -> PortResult<Vec<Offer>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .offers
            .values()
            .filter(|o| o.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn list_open_offers(&self) -> PortResult<Vec<Offer>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .offers
            .values()
            .filter(|o| o.status == OfferStatus::Open)
            .cloned()
            .collect())
    }

    async fn list_all_offers(&self) -> PortResult<Vec<Offer>> {
        Ok(self.inner.lock().unwrap().offers.values().cloned().collect())
    }

    async fn update_offer_status(&self, offer_id: Uuid, status: OfferStatus) -> PortResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let offer = inner
            .offers
            .get_mut(&offer_id)
            .ok_or_else(|| PortError::NotFound(format!("Offer {offer_id} not found")))?;
        offer.status = status;
        Ok(())
    }

    async fn delete_offer_cascade(&self, offer_id: Uuid) -> PortResult<CascadeReport> {
        let mut inner = self.inner.lock().unwrap();
        if inner.offers.remove(&offer_id).is_none() {
            return Err(PortError::NotFound(format!("Offer {offer_id} not found")));
        }
        let before_contracts = inner.contracts.len();
        inner.contracts.retain(|_, c| c.offer_id != offer_id);
        let before_applications = inner.applications.len();
        inner.applications.retain(|_, a| a.offer_id != offer_id);
        Ok(CascadeReport {
            contracts_deleted: (before_contracts - inner.contracts.len()) as u64,
            applications_deleted: (before_applications - inner.applications.len()) as u64,
            offer_deleted: true,
        })
    }

    async fn create_application(&self, application: &Application) -> PortResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let duplicate = inner
            .applications
            .values()
            .any(|a| a.offer_id == application.offer_id && a.tutor_id == application.tutor_id);
        if duplicate {
            return Err(PortError::Conflict(
                "an application for this offer already exists".to_string(),
            ));
        }
        inner.applications.insert(application.id, application.clone());
        Ok(())
    }

    async fn get_application(&self, application_id: Uuid) -> PortResult<Application> {
        self.inner
            .lock()
            .unwrap()
            .applications
            .get(&application_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Application {application_id} not found")))
    }

    async fn application_exists(&self, offer_id: Uuid, tutor_id: Uuid) -> PortResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .applications
            .values()
            .any(|a| a.offer_id == offer_id && a.tutor_id == tutor_id))
    }

    async fn list_applications_for_offer(&self, offer_id: Uuid) -> PortResult<Vec<Application>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .applications
            .values()
            .filter(|a| a.offer_id == offer_id)
            .cloned()
            .collect())
    }

    async fn list_applications_by_tutor(&self, tutor_id: Uuid) -> PortResult<Vec<Application>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .applications
            .values()
            .filter(|a| a.tutor_id == tutor_id)
            .cloned()
            .collect())
    }

    async fn list_applications_for_parent(&self, parent_id: Uuid) -> PortResult<Vec<Application>> {
        let inner = self.inner.lock().unwrap();
        let offer_ids: Vec<Uuid> = inner
            .offers
            .values()
            .filter(|o| o.parent_id == parent_id)
            .map(|o| o.id)
            .collect();
        Ok(inner
            .applications
            .values()
            .filter(|a| offer_ids.contains(&a.offer_id))
            .cloned()
            .collect())
    }

    async fn list_all_applications(&self) -> PortResult<Vec<Application>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .applications
            .values()
            .cloned()
            .collect())
    }

    async fn record_application_decision(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
        contract: Option<&Contract>,
    ) -> PortResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let application = inner
            .applications
            .get_mut(&application_id)
            .ok_or_else(|| PortError::NotFound(format!("Application {application_id} not found")))?;
        application.status = status;
        if let Some(contract) = contract {
            inner.contracts.insert(contract.id, contract.clone());
        }
        Ok(())
    }

    async fn create_contract(&self, contract: &Contract) -> PortResult<()> {
        self.inner
            .lock()
            .unwrap()
            .contracts
            .insert(contract.id, contract.clone());
        Ok(())
    }

    async fn get_contract(&self, contract_id: Uuid) -> PortResult<Contract> {
        self.inner
            .lock()
            .unwrap()
            .contracts
            .get(&contract_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Contract {contract_id} not found")))
    }

    async fn list_contracts_by_parent(&self, parent_id: Uuid) -> PortResult<Vec<Contract>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .contracts
            .values()
            .filter(|c| c.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn list_contracts_by_tutor(&self, tutor_id: Uuid) -> PortResult<Vec<Contract>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .contracts
            .values()
            .filter(|c| c.tutor_id == tutor_id)
            .cloned()
            .collect())
    }

    async fn list_all_contracts(&self) -> PortResult<Vec<Contract>> {
        Ok(self.inner.lock().unwrap().contracts.values().cloned().collect())
    }

    async fn update_contract_status(
        &self,
        contract_id: Uuid,
        status: ContractStatus,
        end_date: Option<NaiveDate>,
    ) -> PortResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let contract = inner
            .contracts
            .get_mut(&contract_id)
            .ok_or_else(|| PortError::NotFound(format!("Contract {contract_id} not found")))?;
        contract.status = status;
        if end_date.is_some() {
            contract.end_date = end_date;
        }
        Ok(())
    }
}

/// Maps fixed bearer tokens to actors.
#[derive(Default)]
struct StaticIdentity {
    sessions: HashMap<String, Actor>,
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn resolve(&self, token: &str) -> PortResult<Actor> {
        self.sessions
            .get(token)
            .cloned()
            .ok_or_else(|| PortError::NotFound("no live session".to_string()))
    }
}

struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _account_id: Uuid, _event: NotificationEvent) {}
}

//=========================================================================================
// Test harness
//=========================================================================================

struct TestApp {
    router: Router,
    store: Arc<MemStore>,
    parent_id: Uuid,
    tutor_id: Uuid,
}

fn account(id: Uuid, role: Role, name: &str) -> Account {
    Account {
        id,
        full_name: name.to_string(),
        phone: format!("+2250700{:06}", id.as_fields().0 % 1_000_000),
        avatar_url: None,
        is_active: true,
        roles: vec![role],
        created_at: Utc::now(),
    }
}

/// A router with one parent ("parent-token"), one validated tutor
/// ("tutor-token"), one admin ("admin-token") and one super admin
/// ("root-token").
fn test_app() -> TestApp {
    let store = Arc::new(MemStore::default());
    let parent_id = Uuid::new_v4();
    let tutor_id = Uuid::new_v4();
    let admin_id = Uuid::new_v4();
    let root_id = Uuid::new_v4();

    store.seed_account(account(parent_id, Role::Parent, "Mariam Diabaté"));
    store.seed_account(account(tutor_id, Role::Tutor, "Yao Kouassi"));
    store.seed_account(account(admin_id, Role::Admin, "Admin"));
    store.seed_account(account(root_id, Role::SuperAdmin, "Root"));
    store.seed_profile(TutorProfile {
        account_id: tutor_id,
        bio: "Professeur de mathématiques passionné, dix ans d'expérience.".to_string(),
        subjects: vec!["Mathématiques".to_string()],
        levels: vec!["3ème".to_string()],
        availability: vec!["Samedi matin".to_string()],
        location: "Cocody".to_string(),
        documents_validated: true,
        ..TutorProfile::default()
    });

    let mut identity = StaticIdentity::default();
    for (token, id, role) in [
        ("parent-token", parent_id, Role::Parent),
        ("tutor-token", tutor_id, Role::Tutor),
        ("admin-token", admin_id, Role::Admin),
        ("root-token", root_id, Role::SuperAdmin),
    ] {
        identity.sessions.insert(
            token.to_string(),
            Actor {
                account_id: id,
                roles: vec![role],
            },
        );
    }

    let config = Config {
        bind_address: "127.0.0.1:0".parse().expect("loopback address"),
        database_url: String::new(),
        log_level: tracing::Level::INFO,
        cors_origin: "http://localhost:5173".to_string(),
    };

    let state = Arc::new(AppState {
        store: store.clone(),
        identity: Arc::new(identity),
        notifier: Arc::new(NullNotifier),
        config: Arc::new(config),
    });

    TestApp {
        router: web::router(state),
        store,
        parent_id,
        tutor_id,
    }
}

async fn send(router: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request built"),
        None => builder.body(Body::empty()).expect("request built"),
    };

    let response = router.clone().oneshot(request).await.expect("router responded");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collected")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn offer_body() -> Value {
    json!({
        "subject": "Mathématiques",
        "level": "3ème",
        "description": "Préparation au brevet, deux séances par semaine.",
        "address": "Cocody, Abidjan",
        "frequency": "2 fois par semaine",
        "budget_min": 5000,
        "budget_max": 10000,
    })
}

//=========================================================================================
// Tests
//=========================================================================================

#[tokio::test]
async fn protected_routes_reject_missing_and_unknown_tokens() {
    let app = test_app();
    let (status, _) = send(&app.router, "GET", "/offers", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app.router, "GET", "/offers", Some("forged"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // The probes stay public.
    let (status, body) = send(&app.router, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app.router, "GET", "/catalog", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["subjects"].as_array().expect("subjects list").len() > 0);
}

#[tokio::test]
async fn parent_creates_an_open_offer() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        "POST",
        "/offers",
        Some("parent-token"),
        Some(offer_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "open");
    assert_eq!(body["parent_id"], app.parent_id.to_string());
}

#[tokio::test]
async fn inverted_budget_range_is_a_422_with_a_specific_message() {
    let app = test_app();
    let mut body = offer_body();
    body["budget_min"] = json!(10000);
    body["budget_max"] = json!(5000);
    let (status, body) = send(&app.router, "POST", "/offers", Some("parent-token"), Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "validation_error");
    assert!(body["message"]
        .as_str()
        .expect("message present")
        .contains("budget_max"));
}

#[tokio::test]
async fn tutor_cannot_create_offers() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        "POST",
        "/offers",
        Some("tutor-token"),
        Some(offer_body()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "permission_denied");
}

#[tokio::test]
async fn application_flow_accept_creates_one_contract_and_offer_stays_open() {
    let app = test_app();

    let (_, offer) = send(
        &app.router,
        "POST",
        "/offers",
        Some("parent-token"),
        Some(offer_body()),
    )
    .await;
    let offer_id = offer["id"].as_str().expect("offer id").to_string();

    // The tutor applies.
    let (status, application) = send(
        &app.router,
        "POST",
        &format!("/offers/{offer_id}/applications"),
        Some("tutor-token"),
        Some(json!({ "message": "J'ai cinq ans d'expérience avec ce niveau." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(application["status"], "pending");
    let application_id = application["id"].as_str().expect("application id").to_string();

    // A second identical application is a conflict and adds no row.
    let (status, body) = send(
        &app.router,
        "POST",
        &format!("/offers/{offer_id}/applications"),
        Some("tutor-token"),
        Some(json!({ "message": "J'ai cinq ans d'expérience avec ce niveau." })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");
    assert_eq!(
        app.store
            .application_count(offer_id.parse().expect("uuid")),
        1
    );

    // The parent accepts: exactly one active contract appears.
    let (status, decision) = send(
        &app.router,
        "POST",
        &format!("/applications/{application_id}/decision"),
        Some("parent-token"),
        Some(json!({ "decision": "accept" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decision["application"]["status"], "accepted");
    assert_eq!(decision["contract"]["status"], "active");
    assert_eq!(app.store.contract_count(), 1);

    // Deciding again hits a non-pending application.
    let (status, body) = send(
        &app.router,
        "POST",
        &format!("/applications/{application_id}/decision"),
        Some("parent-token"),
        Some(json!({ "decision": "reject" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "invalid_state");

    // The offer did not move by itself.
    let (_, offer) = send(
        &app.router,
        "GET",
        &format!("/offers/{offer_id}"),
        Some("parent-token"),
        None,
    )
    .await;
    assert_eq!(offer["status"], "open");
}

#[tokio::test]
async fn unvalidated_tutor_gets_a_403_before_any_write() {
    let app = test_app();
    let (_, offer) = send(
        &app.router,
        "POST",
        "/offers",
        Some("parent-token"),
        Some(offer_body()),
    )
    .await;
    let offer_id = offer["id"].as_str().expect("offer id").to_string();

    // Pull the tutor's validation flag back out.
    let (status, _) = send(
        &app.router,
        "PATCH",
        &format!("/admin/tutors/{}/documents", app.tutor_id),
        Some("admin-token"),
        Some(json!({ "validated": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app.router,
        "POST",
        &format!("/offers/{offer_id}/applications"),
        Some("tutor-token"),
        Some(json!({ "message": "J'ai cinq ans d'expérience avec ce niveau." })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "permission_denied");
    assert_eq!(app.store.application_count(offer_id.parse().expect("uuid")), 0);
}

#[tokio::test]
async fn offer_delete_cascades_and_is_admin_only() {
    let app = test_app();
    let (_, offer) = send(
        &app.router,
        "POST",
        "/offers",
        Some("parent-token"),
        Some(offer_body()),
    )
    .await;
    let offer_id = offer["id"].as_str().expect("offer id").to_string();

    send(
        &app.router,
        "POST",
        &format!("/offers/{offer_id}/applications"),
        Some("tutor-token"),
        Some(json!({ "message": "J'ai cinq ans d'expérience avec ce niveau." })),
    )
    .await;

    // The owning parent may not delete, only admins.
    let (status, _) = send(
        &app.router,
        "DELETE",
        &format!("/offers/{offer_id}"),
        Some("parent-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, report) = send(
        &app.router,
        "DELETE",
        &format!("/offers/{offer_id}"),
        Some("admin-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["offer_deleted"], true);
    assert_eq!(report["applications_deleted"], 1);
    assert_eq!(app.store.application_count(offer_id.parse().expect("uuid")), 0);
}

#[tokio::test]
async fn role_change_is_super_admin_only() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        "PATCH",
        &format!("/admin/users/{}/role", app.tutor_id),
        Some("admin-token"),
        Some(json!({ "role": "parent" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "permission_denied");

    let (status, body) = send(
        &app.router,
        "PATCH",
        &format!("/admin/users/{}/role", app.tutor_id),
        Some("root-token"),
        Some(json!({ "role": "parent" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roles"], json!(["parent"]));
}

#[tokio::test]
async fn profile_save_recomputes_the_complete_flag() {
    let app = test_app();

    let incomplete = json!({
        "bio": "Trop court.",
        "subjects": ["Mathématiques"],
        "levels": ["3ème"],
        "availability": ["Samedi matin"],
        "location": "Cocody",
        "hourly_rate": null,
        "years_experience": null,
        "cni_front_url": null,
        "cni_back_url": null,
        "diploma_url": null,
    });
    let (status, body) = send(
        &app.router,
        "PUT",
        "/profile/tutor",
        Some("tutor-token"),
        Some(incomplete),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["complete"], false);
    // The admin-owned flag survived the self-service save.
    assert_eq!(body["documents_validated"], true);

    let complete = json!({
        "bio": "Professeur de mathématiques passionné, dix ans d'expérience en collège.",
        "subjects": ["Mathématiques"],
        "levels": ["3ème"],
        "availability": ["Samedi matin"],
        "location": "Cocody",
        "hourly_rate": 4000,
        "years_experience": 10,
        "cni_front_url": null,
        "cni_back_url": null,
        "diploma_url": null,
    });
    let (status, body) = send(
        &app.router,
        "PUT",
        "/profile/tutor",
        Some("tutor-token"),
        Some(complete),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["complete"], true);
}

#[tokio::test]
async fn dashboards_reflect_writes_immediately() {
    let app = test_app();

    send(
        &app.router,
        "POST",
        "/offers",
        Some("parent-token"),
        Some(offer_body()),
    )
    .await;

    let (status, body) = send(&app.router, "GET", "/dashboard", Some("parent-token"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["parent"]["total_offers"], 1);
    assert_eq!(body["parent"]["open_offers"], 1);

    let (status, body) = send(&app.router, "GET", "/dashboard", Some("tutor-token"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tutor"]["available_offers"], 1);

    let (status, body) = send(&app.router, "GET", "/admin/stats", Some("admin-token"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_offers"], 1);
    assert_eq!(body["parents"], 1);
    assert_eq!(body["tutors"], 1);
    assert_eq!(body["admins"], 2);
}
