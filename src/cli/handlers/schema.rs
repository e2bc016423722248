use anyhow::Result;

use crate::graphql::build_schema_with;

use super::CommandContext;

pub fn handle_schema(ctx: &CommandContext) -> Result<()> {
    let schema = build_schema_with(ctx.catalog);
    print!("{}", schema.sdl());
    Ok(())
}
