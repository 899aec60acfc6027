// ── Organization session ──
//
// A `Session` owns the API client, the authenticated user, the active
// organization, and the running-timer slot. The timer is an explicit
// per-session value: seeded when an organization is entered, updated by
// the time store, cleared on logout.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use tempo_api::{ApiClient, TransportConfig};

use crate::config::{AuthCredentials, ClientConfig};
use crate::error::CoreError;
use crate::model::{Organization, TimeEntry, User};
use crate::notice::NoticeSender;

/// Shared slot holding the organization's running timer.
///
/// Cheap to clone; all clones observe the same slot. Consumers either
/// poll [`current`](Self::current) or watch via [`subscribe`](Self::subscribe).
#[derive(Debug, Clone)]
pub struct TimerSlot {
    tx: Arc<watch::Sender<Option<TimeEntry>>>,
}

impl TimerSlot {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Option<TimeEntry> {
        self.tx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.tx.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<TimeEntry>> {
        self.tx.subscribe()
    }

    pub(crate) fn set(&self, entry: TimeEntry) {
        self.tx.send_modify(|slot| *slot = Some(entry));
    }

    pub(crate) fn clear(&self) {
        self.tx.send_modify(|slot| *slot = None);
    }
}

/// An authenticated connection to one server, scoped to one
/// organization at a time.
pub struct Session {
    api: Arc<ApiClient>,
    notices: NoticeSender,
    auth: AuthCredentials,
    requested_org: Option<String>,
    user: Option<User>,
    organization: Option<Organization>,
    timer: TimerSlot,
}

impl Session {
    /// Build the transport from a [`ClientConfig`]. No network traffic
    /// happens until [`authenticate`](Self::authenticate).
    pub fn connect(config: &ClientConfig, notices: NoticeSender) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
            accept_invalid_certs: config.accept_invalid_certs,
            ..TransportConfig::default()
        };

        let api = match &config.auth {
            AuthCredentials::Token(token) => {
                ApiClient::from_token(config.url.as_str(), token, &transport)?
            }
            AuthCredentials::Credentials { .. } => {
                ApiClient::from_session(config.url.as_str(), &transport)?
            }
        };

        Ok(Self {
            api: Arc::new(api),
            notices,
            auth: config.auth.clone(),
            requested_org: config.organization.clone(),
            user: None,
            organization: None,
            timer: TimerSlot::new(),
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn api(&self) -> Arc<ApiClient> {
        Arc::clone(&self.api)
    }

    pub fn notices(&self) -> NoticeSender {
        self.notices.clone()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }

    pub fn timer(&self) -> TimerSlot {
        self.timer.clone()
    }

    /// The active organization's identifier, required by every
    /// resource operation.
    pub fn org_id(&self) -> Result<String, CoreError> {
        self.organization
            .as_ref()
            .map(|org| org.id.to_string())
            .ok_or(CoreError::NoOrganization)
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Sign in with the configured credentials and load the account.
    pub async fn authenticate(&mut self) -> Result<&User, CoreError> {
        let user: User = match &self.auth {
            AuthCredentials::Token(_) => self.api.me().await?.into(),
            AuthCredentials::Credentials { email, password } => {
                self.api.login(email, password).await?.into()
            }
        };
        debug!(user = %user.email, "authenticated");
        self.user = Some(user);
        Ok(self.user.as_ref().ok_or(CoreError::NotAuthenticated)?)
    }

    /// Create an account, then sign in as it.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &secrecy::SecretString,
    ) -> Result<&User, CoreError> {
        let user: User = self.api.register(name, email, password).await?.into();
        info!(user = %user.email, "account registered");
        self.user = Some(user);
        Ok(self.user.as_ref().ok_or(CoreError::NotAuthenticated)?)
    }

    /// Drop the session state. The server session (if cookie-based)
    /// simply expires; no local credentials survive in this value.
    pub fn logout(&mut self) {
        self.user = None;
        self.organization = None;
        self.timer.clear();
        self.notices.info("Signed out");
    }

    // ── Organization ─────────────────────────────────────────────────

    /// Enter an organization: the configured one if set, otherwise the
    /// account's current organization. Seeds the running-timer slot.
    pub async fn enter_organization(&mut self) -> Result<&Organization, CoreError> {
        let org_id = match &self.requested_org {
            Some(id) => id.clone(),
            None => self
                .user
                .as_ref()
                .ok_or(CoreError::NotAuthenticated)?
                .current_organization_id
                .as_ref()
                .ok_or(CoreError::NoOrganization)?
                .to_string(),
        };

        let org: Organization = self.api.get_organization(&org_id).await?.into();
        self.seed_timer(&org_id).await;
        self.organization = Some(org);
        Ok(self.organization.as_ref().ok_or(CoreError::NoOrganization)?)
    }

    /// Switch the account's active organization and re-seed the timer.
    pub async fn switch_organization(&mut self, org_id: &str) -> Result<&Organization, CoreError> {
        let org: Organization = self.api.switch_organization(org_id).await?.into();
        info!(org = %org.name, "switched organization");
        self.seed_timer(org_id).await;
        self.organization = Some(org);
        Ok(self.organization.as_ref().ok_or(CoreError::NoOrganization)?)
    }

    /// Probe the server for a running timer and mirror it locally.
    /// A probe failure leaves the slot empty rather than failing the
    /// whole organization entry.
    async fn seed_timer(&self, org_id: &str) {
        match self.api.get_running_timer(org_id).await {
            Ok(Some(dto)) => self.timer.set(dto.into()),
            Ok(None) => self.timer.clear(),
            Err(err) => {
                debug!(%err, "running-timer probe failed");
                self.timer.clear();
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::EntityId;
    use chrono::Utc;

    fn entry() -> TimeEntry {
        TimeEntry {
            id: EntityId::from("t1"),
            description: None,
            start: Utc::now(),
            end: None,
            billable: false,
            project_id: None,
            task_id: None,
            client_id: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn timer_slot_starts_empty() {
        let slot = TimerSlot::new();
        assert!(!slot.is_running());
        assert!(slot.current().is_none());
    }

    #[test]
    fn timer_slot_clones_observe_the_same_value() {
        let slot = TimerSlot::new();
        let other = slot.clone();

        slot.set(entry());
        assert!(other.is_running());

        other.clear();
        assert!(!slot.is_running());
    }

    #[tokio::test]
    async fn timer_slot_notifies_subscribers() {
        let slot = TimerSlot::new();
        let mut rx = slot.subscribe();

        slot.set(entry());
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_some());
    }
}
