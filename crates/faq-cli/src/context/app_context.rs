use std::path::Path;

use anyhow::Context;

use faq_config::FaqConfig;
use faq_core::identity::AuthIdentity;
use faq_directory::ClerkDirectory;
use faq_service::FaqService;
use faq_store::FaqStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: FaqService<ClerkDirectory>,
    pub config: FaqConfig,
    pub identity: Option<AuthIdentity>,
}

impl AppContext {
    /// Initialize the store, directory client, service, and the
    /// caller's identity (if a valid session token is stored).
    pub async fn init(config: FaqConfig) -> anyhow::Result<Self> {
        let db_path = &config.database.path;
        if db_path != ":memory:" {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        let store = FaqStore::open_local(db_path)
            .await
            .context("failed to open FAQ record store")?;

        if !config.clerk.is_configured() {
            tracing::warn!(
                "clerk.secret_key is not configured — listing and login will fail against the live directory",
            );
        }

        let directory =
            ClerkDirectory::with_api_base(&config.clerk.secret_key, &config.clerk.api_url);

        let identity = resolve_identity(&config).await;

        let service = FaqService::new(store, directory)
            .with_list_limit(config.general.list_limit)
            .with_delete_policy(config.general.delete_policy);

        Ok(Self {
            service,
            config,
            identity,
        })
    }
}

/// Resolve the caller's identity from the stored session token.
///
/// A missing or expired token is normal for read-only use; validation
/// errors are logged and treated as "not logged in" rather than
/// failing startup.
async fn resolve_identity(config: &FaqConfig) -> Option<AuthIdentity> {
    if !config.clerk.is_configured() {
        return None;
    }

    match faq_auth::resolve_identity(&config.clerk.secret_key).await {
        Ok(identity) => identity,
        Err(error) => {
            tracing::warn!(%error, "session token validation failed; continuing unauthenticated");
            None
        }
    }
}
