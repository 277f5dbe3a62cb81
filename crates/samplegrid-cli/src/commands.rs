use super::args::{Cli, Commands, LogLevel};
use super::context::ExecutionContext;
use super::handlers;
use super::logging;
use anyhow::Result;
use samplegrid_runtime::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    // Log lines would tear the alternate screen
    let log_level = if matches!(cli.command, Some(Commands::Browse)) {
        LogLevel::Error
    } else {
        cli.log_level
    };
    logging::init(log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");
    let ctx = ExecutionContext::new(data_dir, cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Init => handlers::init::handle(&ctx),
        Commands::List { query } => handlers::list::handle(&ctx, query.as_deref()),
        Commands::Search { query } => handlers::list::handle(&ctx, Some(&query)),
        Commands::Show { sample_id } => handlers::show::handle(&ctx, &sample_id),
        Commands::Add { sample_id, set } => handlers::add::handle(&ctx, sample_id, set),
        Commands::Form => handlers::form::handle(&ctx),
        Commands::Schema => handlers::schema::handle(&ctx),
        Commands::Export {
            output,
            export_format,
        } => handlers::export::handle(&ctx, &output, export_format),
        Commands::Browse => handlers::browse::handle(&ctx),
    }
}
