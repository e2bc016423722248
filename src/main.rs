use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, ServeParams, handle_list, handle_query, handle_schema, handle_serve,
    handle_show,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = BookshelfConfig::load(&cwd, cli.config.as_deref())
        .context("Failed to load bookshelf configuration")?;

    let log_file = cli.log_file.or_else(|| config.logging.file.clone());
    logging::init(cli.verbose, &config.logging.level, log_file);

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_playground,
        } => handle_serve(
            ctx,
            ServeParams {
                host,
                port,
                no_playground,
            },
        ),
        Commands::Query { query, variables } => handle_query(&ctx, query, variables),
        Commands::Schema => handle_schema(&ctx),
        Commands::List { json } => handle_list(&ctx, json),
        Commands::Show { id, json } => handle_show(&ctx, id, json),
    }
}
