mod login;
mod logout;
mod whoami;

use panel_config::PanelConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `panel auth <subcommand>`.
pub fn handle(action: &AuthCommands, flags: &GlobalFlags, config: &PanelConfig) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config),
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Whoami => whoami::handle(flags, config),
    }
}
