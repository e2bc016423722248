use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema_with, run_server};

use super::CommandContext;

/// Command-line overrides for the `[server]` config section
pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_playground: bool,
}

pub fn handle_serve(ctx: CommandContext, params: ServeParams) -> Result<()> {
    let mut config = ctx.config;
    if let Some(host) = params.host {
        config.server.host = host;
    }
    if let Some(port) = params.port {
        config.server.port = port;
    }
    let playground = config.server.playground && !params.no_playground;
    let addr = config.socket_addr()?;

    let schema = build_schema_with(ctx.catalog);

    println!(
        "{} GraphQL server on {}",
        "Starting".green(),
        format!("http://{}", addr).cyan()
    );
    if playground {
        println!("GraphiQL: http://{}", addr);
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, addr, playground))?;
    Ok(())
}
