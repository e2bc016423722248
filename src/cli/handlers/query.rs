use anyhow::{Context, Result};

use crate::graphql::build_schema_with;

use super::CommandContext;

pub fn handle_query(ctx: &CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema_with(ctx.catalog);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Invalid --variables JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("Query returned {} error(s)", response.errors.len());
    }
    Ok(())
}
