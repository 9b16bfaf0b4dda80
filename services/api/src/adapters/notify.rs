//! services/api/src/adapters/notify.rs
//!
//! The notification adapter. The real delivery channel (push, SMS) is an
//! external service; this adapter emits the events as structured log lines
//! for it to pick up. Delivery is fire-and-forget by contract.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use repetiteur_core::ports::{NotificationEvent, Notifier};

#[derive(Clone, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, account_id: Uuid, event: NotificationEvent) {
        match event {
            NotificationEvent::ApplicationSubmitted { offer_id, tutor_id } => {
                info!(%account_id, %offer_id, %tutor_id, "notify: application submitted");
            }
            NotificationEvent::ApplicationAccepted {
                application_id,
                tutor_id,
            } => {
                info!(%account_id, %application_id, %tutor_id, "notify: application accepted");
            }
            NotificationEvent::ApplicationRejected {
                application_id,
                tutor_id,
            } => {
                info!(%account_id, %application_id, %tutor_id, "notify: application rejected");
            }
            NotificationEvent::ContractStatusChanged {
                contract_id,
                status,
            } => {
                info!(%account_id, %contract_id, status = status.as_str(), "notify: contract status changed");
            }
            NotificationEvent::OfferDeleted {
                offer_id,
                parent_id,
            } => {
                info!(%account_id, %offer_id, %parent_id, "notify: offer deleted");
            }
        }
    }
}
