use panel_config::PanelConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    subject: String,
    email: Option<String>,
    expires_at: Option<String>,
}

pub fn handle(args: &AuthLoginArgs, flags: &GlobalFlags, config: &PanelConfig) -> anyhow::Result<()> {
    let claims = panel_auth::login(args.token.trim(), &config.auth)?;
    if claims.email.is_none() {
        tracing::warn!(
            subject = %claims.subject,
            "token has no email claim; candidate and interviewer operations will be forbidden"
        );
    }

    output(
        &AuthLoginResponse {
            authenticated: true,
            subject: claims.subject,
            email: claims.email,
            expires_at: claims.expires_at.map(|at| at.to_rfc3339()),
        },
        flags.format,
    )
}
