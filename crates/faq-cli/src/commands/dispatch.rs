use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler.
///
/// `Auth` is handled before context initialization in `main` and never
/// reaches this point.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List { limit } => commands::list::run(limit, ctx, flags).await,
        Commands::Get { id } => commands::get::run(&id, ctx, flags).await,
        Commands::Ask { question, answer } => {
            commands::ask::run(question, answer, ctx, flags).await
        }
        Commands::Delete { id } => commands::delete::run(&id, ctx, flags).await,
        Commands::Auth { .. } => unreachable!("auth is dispatched before context init"),
    }
}
