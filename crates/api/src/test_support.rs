//! In-memory fakes for the storage and session seams

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hive_shared::{BrandingRow, SessionRecord, TenantId, UserId, UserRecord};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::session::{HeaderMapping, ProviderSession, SessionProvider, SessionProviderError};
use crate::store::{AccountStore, StoreError, StoreResult, TenantStore};

/// Snapshot of how many reads a fake store served
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StoreCalls {
    pub slug: usize,
    pub domain: usize,
    pub tenant_branding: usize,
    pub default_branding: usize,
}

impl StoreCalls {
    pub fn total(&self) -> usize {
        self.slug + self.domain + self.tenant_branding + self.default_branding
    }
}

#[derive(Default)]
pub struct FakeTenantStore {
    slugs: HashMap<String, TenantId>,
    domains: HashMap<String, TenantId>,
    branding: HashMap<TenantId, BrandingRow>,
    default_branding: Option<BrandingRow>,
    fail: bool,
    delay: Option<Duration>,
    slug_calls: AtomicUsize,
    domain_calls: AtomicUsize,
    tenant_branding_calls: AtomicUsize,
    default_branding_calls: AtomicUsize,
}

impl FakeTenantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tenant(mut self, slug: &str, id: &str) -> Self {
        self.slugs.insert(slug.to_string(), TenantId::from(id));
        self
    }

    pub fn with_domain(mut self, domain: &str, id: &str) -> Self {
        self.domains.insert(domain.to_string(), TenantId::from(id));
        self
    }

    pub fn with_branding(mut self, id: &str, row: BrandingRow) -> Self {
        self.branding.insert(TenantId::from(id), row);
        self
    }

    pub fn with_default_branding(mut self, row: BrandingRow) -> Self {
        self.default_branding = Some(row);
        self
    }

    /// Every read fails with a database error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Every read sleeps first, widening the window for concurrent callers
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> StoreCalls {
        StoreCalls {
            slug: self.slug_calls.load(Ordering::SeqCst),
            domain: self.domain_calls.load(Ordering::SeqCst),
            tenant_branding: self.tenant_branding_calls.load(Ordering::SeqCst),
            default_branding: self.default_branding_calls.load(Ordering::SeqCst),
        }
    }

    async fn read<T>(&self, counter: &AtomicUsize, value: Option<T>) -> StoreResult<Option<T>> {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(StoreError::Database("connection refused".to_string()));
        }
        Ok(value)
    }
}

#[async_trait]
impl TenantStore for FakeTenantStore {
    async fn tenant_id_by_slug(&self, slug: &str) -> StoreResult<Option<TenantId>> {
        self.read(&self.slug_calls, self.slugs.get(slug).cloned()).await
    }

    async fn tenant_id_by_domain(&self, domain: &str) -> StoreResult<Option<TenantId>> {
        self.read(&self.domain_calls, self.domains.get(domain).cloned())
            .await
    }

    async fn branding_for_tenant(&self, tenant_id: &TenantId) -> StoreResult<Option<BrandingRow>> {
        self.read(
            &self.tenant_branding_calls,
            self.branding.get(tenant_id).cloned(),
        )
        .await
    }

    async fn default_branding(&self) -> StoreResult<Option<BrandingRow>> {
        self.read(&self.default_branding_calls, self.default_branding.clone())
            .await
    }
}

/// Branding row with only a title set
pub fn titled_row(title: &str) -> BrandingRow {
    BrandingRow {
        title_text: Some(title.to_string()),
        ..BrandingRow::default()
    }
}

pub fn test_user() -> UserRecord {
    UserRecord {
        id: UserId(Uuid::new_v4()),
        email: "ada@example.com".to_string(),
        name: Some("Ada".to_string()),
        role: "owner".to_string(),
        tenant_id: Some(TenantId::from("t_central")),
    }
}

pub fn test_session(user: &UserRecord) -> SessionRecord {
    SessionRecord {
        id: Uuid::new_v4(),
        user_id: user.id,
        expires_at: OffsetDateTime::now_utc() + time::Duration::hours(1),
    }
}

/// Account store holding at most one session and its user
#[derive(Default)]
pub struct FakeAccountStore {
    pub session: Option<SessionRecord>,
    pub user: Option<UserRecord>,
}

#[async_trait]
impl AccountStore for FakeAccountStore {
    async fn live_session(&self, session_id: Uuid) -> StoreResult<Option<SessionRecord>> {
        Ok(self.session.clone().filter(|s| s.id == session_id))
    }

    async fn user_by_id(&self, user_id: UserId) -> StoreResult<Option<UserRecord>> {
        Ok(self.user.clone().filter(|u| u.id == user_id))
    }
}

enum ProviderBehavior {
    Authenticated(ProviderSession),
    Anonymous,
    Failing,
}

/// Session provider with a fixed outcome and a call counter
pub struct FakeSessionProvider {
    behavior: ProviderBehavior,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_headers: std::sync::Mutex<Option<HeaderMapping>>,
}

impl FakeSessionProvider {
    fn with_behavior(behavior: ProviderBehavior) -> Self {
        Self {
            behavior,
            delay: None,
            calls: AtomicUsize::new(0),
            last_headers: std::sync::Mutex::new(None),
        }
    }

    pub fn authenticated(user: UserRecord) -> Self {
        let session = test_session(&user);
        Self::with_behavior(ProviderBehavior::Authenticated(ProviderSession { session, user }))
    }

    pub fn anonymous() -> Self {
        Self::with_behavior(ProviderBehavior::Anonymous)
    }

    pub fn failing() -> Self {
        Self::with_behavior(ProviderBehavior::Failing)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_headers(&self) -> Option<HeaderMapping> {
        self.last_headers.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionProvider for FakeSessionProvider {
    async fn get_session(
        &self,
        headers: &HeaderMapping,
    ) -> Result<Option<ProviderSession>, SessionProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_headers.lock().unwrap() = Some(headers.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.behavior {
            ProviderBehavior::Authenticated(found) => Ok(Some(found.clone())),
            ProviderBehavior::Anonymous => Ok(None),
            ProviderBehavior::Failing => Err(SessionProviderError::InvalidToken),
        }
    }
}
