use anyhow::Result;

use super::CommandContext;
use crate::graphql::build_schema;

/// Parse optional JSON variables from the command line.
pub fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    Ok(match variables {
        Some(v) => async_graphql::Variables::from_json(serde_json::from_str(&v)?),
        None => async_graphql::Variables::default(),
    })
}

/// Execute a GraphQL document against the configured database and print
/// the JSON response.
pub fn execute_and_print(
    ctx: CommandContext,
    query: &str,
    variables: async_graphql::Variables,
) -> Result<()> {
    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let repo = ctx.connect().await?;
        let schema = build_schema(repo);
        let request = async_graphql::Request::new(query).variables(variables);
        Ok::<_, anyhow::Error>(schema.execute(request).await)
    })?;

    for error in &response.errors {
        tracing::debug!(message = %error.message, "GraphQL error");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
