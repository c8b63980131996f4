//! Demo login gate and in-memory sessions.
//!
//! Credentials are a fixed two-account allow-list compared by exact string
//! match; this is demo-only access control, not a security boundary. A
//! successful login opens a session owning a fresh dashboard provider for
//! the account's role; logout (or a process restart) drops it and all of
//! its dataset state.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::TimingConfig;
use crate::services::dashboard::{AdminProvider, OperationsProvider};
use crate::services::jitter::JitterRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Operations,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub display_name: String,
}

struct Account {
    user: User,
    password: &'static str,
}

fn directory() -> Vec<Account> {
    vec![
        Account {
            user: User {
                id: "1".to_string(),
                username: "ops@kmrl.com".to_string(),
                role: Role::Operations,
                display_name: "Operations Manager".to_string(),
            },
            password: "ops123",
        },
        Account {
            user: User {
                id: "2".to_string(),
                username: "admin@kmrl.com".to_string(),
                role: Role::Admin,
                display_name: "System Administrator".to_string(),
            },
            password: "admin123",
        },
    ]
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Deliberately generic: the same message for unknown users and wrong
    /// passwords.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Session not found")]
    UnknownSession,
    #[error("This account cannot access the requested dashboard")]
    RoleMismatch,
}

/// Dashboard provider owned by one session, typed by the account's role.
#[derive(Clone)]
pub enum DashboardHandle {
    Operations(OperationsProvider),
    Admin(AdminProvider),
}

impl std::fmt::Debug for DashboardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardHandle::Operations(_) => f.write_str("DashboardHandle::Operations"),
            DashboardHandle::Admin(_) => f.write_str("DashboardHandle::Admin"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    pub token: Uuid,
    pub user: User,
    pub dashboard: DashboardHandle,
}

/// In-memory session registry. Nothing is persisted; a restart signs
/// everyone out.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    timing: TimingConfig,
    rng_seed: Option<u64>,
}

impl SessionManager {
    pub fn new(timing: TimingConfig, rng_seed: Option<u64>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            timing,
            rng_seed,
        }
    }

    fn fresh_rng(&self) -> JitterRng {
        match self.rng_seed {
            Some(seed) => JitterRng::from_seed_u64(seed),
            None => JitterRng::from_entropy(),
        }
    }

    fn open_session(&self, user: User) -> Session {
        let dashboard = match user.role {
            Role::Operations => DashboardHandle::Operations(OperationsProvider::new(
                self.timing,
                self.fresh_rng(),
            )),
            Role::Admin => {
                DashboardHandle::Admin(AdminProvider::new(self.timing, self.fresh_rng()))
            }
        };
        Session {
            token: Uuid::new_v4(),
            user,
            dashboard,
        }
    }

    /// Validate credentials against the allow-list and open a session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        tokio::time::sleep(self.timing.login_delay()).await;

        let account = directory()
            .into_iter()
            .find(|a| a.user.username == username && a.password == password)
            .ok_or_else(|| {
                warn!(username = %username, "Rejected login");
                AuthError::InvalidCredentials
            })?;

        let session = self.open_session(account.user);
        self.sessions
            .write()
            .await
            .insert(session.token, session.clone());
        info!(
            username = %session.user.username,
            role = ?session.user.role,
            "Session opened"
        );
        Ok(session)
    }

    /// Demo shortcut from the login page: sign in as the first account
    /// holding `role`.
    pub async fn demo_login(&self, role: Role) -> Result<Session, AuthError> {
        tokio::time::sleep(self.timing.demo_login_delay()).await;

        let account = directory()
            .into_iter()
            .find(|a| a.user.role == role)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = self.open_session(account.user);
        self.sessions
            .write()
            .await
            .insert(session.token, session.clone());
        info!(
            username = %session.user.username,
            role = ?session.user.role,
            "Demo session opened"
        );
        Ok(session)
    }

    pub async fn get(&self, token: &Uuid) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Drop the session and all dashboard state it owns. Returns whether a
    /// session existed for the token.
    pub async fn logout(&self, token: &Uuid) -> bool {
        let removed = self.sessions.write().await.remove(token);
        if let Some(session) = &removed {
            info!(username = %session.user.username, "Session closed");
        }
        removed.is_some()
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OperatingMode;
    use std::time::Duration;
    use tokio::time::Instant;

    fn manager() -> SessionManager {
        SessionManager::new(TimingConfig::default(), Some(42))
    }

    #[tokio::test(start_paused = true)]
    async fn login_resolves_after_the_simulated_delay() {
        let manager = manager();
        let start = Instant::now();
        let session = manager.login("admin@kmrl.com", "admin123").await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(1500));

        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(session.user.display_name, "System Administrator");
        assert!(matches!(session.dashboard, DashboardHandle::Admin(_)));
        assert_eq!(manager.active_sessions().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn operations_login_gets_an_operations_provider() {
        let manager = manager();
        let session = manager.login("ops@kmrl.com", "ops123").await.unwrap();
        assert_eq!(session.user.role, Role::Operations);
        assert!(matches!(
            session.dashboard,
            DashboardHandle::Operations(_)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_password_is_rejected_without_a_session() {
        let manager = manager();
        let result = manager.login("admin@kmrl.com", "nope").await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
        assert_eq!(manager.active_sessions().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_user_gets_the_same_generic_error() {
        let manager = manager();
        let result = manager.login("intruder@kmrl.com", "admin123").await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test(start_paused = true)]
    async fn demo_login_picks_the_account_by_role() {
        let manager = manager();
        let session = manager.demo_login(Role::Operations).await.unwrap();
        assert_eq!(session.user.username, "ops@kmrl.com");
    }

    #[tokio::test(start_paused = true)]
    async fn admin_walkthrough_from_login_to_festival_and_back() {
        let manager = manager();
        let session = manager.login("admin@kmrl.com", "admin123").await.unwrap();
        let DashboardHandle::Admin(provider) = &session.dashboard else {
            panic!("admin account should own an admin provider");
        };

        let data = provider.snapshot().await;
        assert_eq!(data.metrics.total_trains, 24);
        assert_eq!(data.metrics.on_time_performance, 94.2);

        let data = provider.select_mode(OperatingMode::Festival).await.unwrap();
        assert_eq!(data.metrics.total_trains, 32);
        assert_eq!(data.metrics.on_time_performance, 92.5);
        let f004 = data.train_schedule.iter().find(|t| t.id == "F004").unwrap();
        assert_eq!((f004.passengers, f004.capacity), (295, 300));

        let data = provider.select_mode(OperatingMode::Normal).await.unwrap();
        assert_eq!(data.metrics.total_trains, 24);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_drops_the_session() {
        let manager = manager();
        let session = manager.login("ops@kmrl.com", "ops123").await.unwrap();
        assert!(manager.get(&session.token).await.is_some());

        assert!(manager.logout(&session.token).await);
        assert!(manager.get(&session.token).await.is_none());
        assert_eq!(manager.active_sessions().await, 0);
        // A second logout is a no-op
        assert!(!manager.logout(&session.token).await);
    }
}
