use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::run(ctx, flags).await,
        Commands::Mine(args) => commands::mine::run(&args.candidate, ctx, flags).await,
        Commands::Call(args) => commands::call::run(&args.stream_call_id, ctx, flags).await,
        Commands::Create(args) => commands::create::run(args, ctx, flags).await,
        Commands::Status(args) => commands::status::run(&args.id, &args.status, ctx, flags).await,
        Commands::Auth { .. } => unreachable!("auth is pre-dispatched in main"),
    }
}
