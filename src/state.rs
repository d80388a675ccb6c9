//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{AuditService, DuplicateService, LinkService};
use crate::config::{Config, DEFAULT_AUDIT_SAMPLE_SIZE};
use crate::domain::repositories::EntityRepository;
use crate::infrastructure::hash_store::ContentHashStore;

/// Audit tuning taken from [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct AuditSettings {
    pub sample_size: usize,
    pub concurrency: usize,
    pub timeout: Duration,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_AUDIT_SAMPLE_SIZE,
            concurrency: 8,
            timeout: Duration::from_secs(120),
        }
    }
}

impl From<&Config> for AuditSettings {
    fn from(config: &Config) -> Self {
        Self {
            sample_size: config.audit_sample_size,
            concurrency: config.audit_concurrency,
            timeout: config.audit_timeout(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn EntityRepository>>,
    pub duplicate_service: Arc<DuplicateService>,
    pub audit_service: Arc<AuditService<dyn EntityRepository>>,
    pub repository: Arc<dyn EntityRepository>,
    pub default_sample_size: usize,
}

impl AppState {
    /// Wires the services over one repository and one hash store.
    pub fn new(
        repository: Arc<dyn EntityRepository>,
        hash_store: Arc<dyn ContentHashStore>,
        audit: AuditSettings,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            duplicate_service: Arc::new(DuplicateService::new(hash_store)),
            audit_service: Arc::new(AuditService::new(
                repository.clone(),
                audit.concurrency,
                audit.timeout,
            )),
            repository,
            default_sample_size: audit.sample_size,
        }
    }
}
