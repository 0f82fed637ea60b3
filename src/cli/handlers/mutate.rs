use anyhow::Result;

use super::{CommandContext, execute_and_print};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let query = wrap_mutation(&mutation);
    execute_and_print(&ctx.schema(), &query, variables)
}

/// Turn a mutation body into a full operation.
///
/// A bare selection is wrapped in `mutation { }`. A body starting with a
/// variable list such as `($name: String!) { .. }` only gets the `mutation`
/// keyword, and a complete operation is passed through unchanged.
fn wrap_mutation(body: &str) -> String {
    let trimmed = body.trim_start();
    if trimmed.starts_with("mutation") {
        trimmed.to_string()
    } else if trimmed.starts_with('(') {
        format!("mutation {}", trimmed)
    } else {
        format!("mutation {{ {} }}", body)
    }
}
