//! services/api/src/adapters/identity.rs
//!
//! Resolves the opaque session tokens issued by the external auth service.
//! The auth service writes `auth_sessions` rows at login; this adapter only
//! ever reads them, together with the account's roles and active flag.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use repetiteur_core::domain::{Actor, Role};
use repetiteur_core::ports::{IdentityProvider, PortError, PortResult};

#[derive(Clone)]
pub struct PgIdentityProvider {
    pool: PgPool,
}

impl PgIdentityProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for PgIdentityProvider {
    async fn resolve(&self, token: &str) -> PortResult<Actor> {
        // An expired token or a deactivated account resolves the same as an
        // unknown token: the caller is nobody.
        let account_id: Uuid = sqlx::query_scalar(
            "SELECT s.account_id \
             FROM auth_sessions s \
             JOIN accounts a ON a.id = s.account_id \
             WHERE s.token = $1 AND s.expires_at > now() AND a.is_active",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => PortError::NotFound("no live session".to_string()),
            _ => PortError::Unexpected(e.to_string()),
        })?;

        let roles: Vec<(String,)> =
            sqlx::query_as("SELECT role FROM account_roles WHERE account_id = $1")
                .bind(account_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| PortError::Unexpected(e.to_string()))?;

        Ok(Actor {
            account_id,
            roles: roles.into_iter().filter_map(|(r,)| Role::parse(&r)).collect(),
        })
    }
}
