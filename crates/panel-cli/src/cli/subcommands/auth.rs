use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Verify and store a bearer token issued by the identity provider.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show the identity the next command would run as.
    Whoami,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Bearer token (JWT) issued by the identity provider.
    #[arg(long)]
    pub token: String,
}
