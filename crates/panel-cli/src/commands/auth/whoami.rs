use panel_config::PanelConfig;
use panel_core::identity::AuthIdentity;
use panel_core::responses::WhoAmIResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn handle(flags: &GlobalFlags, config: &PanelConfig) -> anyhow::Result<()> {
    let provider = panel_auth::resolve_provider(flags.as_email.as_deref(), config)?;
    let identity = provider.caller_identity()?;
    let source = identity.as_ref().and(provider.source());
    output(&whoami_response(identity, source), flags.format)
}

fn whoami_response(identity: Option<AuthIdentity>, source: Option<&str>) -> WhoAmIResponse {
    match identity {
        Some(identity) => WhoAmIResponse {
            authenticated: true,
            verified: matches!(source, Some("env" | "file")),
            subject: Some(identity.subject),
            email: identity.email,
            source: source.map(String::from),
        },
        None => WhoAmIResponse {
            authenticated: false,
            verified: false,
            subject: None,
            email: None,
            source: None,
        },
    }
}
