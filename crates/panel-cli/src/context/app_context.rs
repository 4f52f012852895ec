use anyhow::Context;
use panel_config::PanelConfig;
use panel_core::identity::AuthIdentity;
use panel_db::service::PanelService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: PanelService,
    /// Caller for this invocation; handed to each access operation explicitly.
    pub identity: Option<AuthIdentity>,
}

impl AppContext {
    /// Open the store and resolve the caller identity.
    pub async fn init(config: &PanelConfig, as_email: Option<&str>) -> anyhow::Result<Self> {
        let provider = panel_auth::resolve_provider(as_email, config)
            .context("failed to set up identity provider")?;
        let identity = provider
            .caller_identity()
            .context("failed to resolve caller identity")?;

        match &identity {
            Some(identity) => tracing::debug!(
                subject = %identity.subject,
                email = ?identity.email,
                source = ?provider.source(),
                "resolved caller identity"
            ),
            None => tracing::debug!("no caller identity; running unauthenticated"),
        }

        let service =
            PanelService::new_local(&config.database.path, config.status.policy())
                .await
                .with_context(|| {
                    format!("failed to open interview store at {}", config.database.path)
                })?;

        Ok(Self { service, identity })
    }

    /// The caller, in the shape every access operation takes.
    #[must_use]
    pub const fn caller(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }
}
