use anyhow::{Context, Result};
use tokio::net::TcpListener;

use super::CommandContext;
use crate::graphql::{build_schema, endpoint_url, run_server};

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    let config = ctx.config.clone().with_port(port).with_host(host);
    let addr = config.socket_addr()?;

    tokio::runtime::Runtime::new()?.block_on(async {
        let repo = ctx.connect().await?;
        let schema = build_schema(repo);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        // Announce the bound port, which differs from the configured one for port 0.
        let bound_port = listener.local_addr()?.port();
        println!("Server is running on {}", endpoint_url(bound_port));

        run_server(schema, listener).await?;
        Ok::<(), anyhow::Error>(())
    })
}
