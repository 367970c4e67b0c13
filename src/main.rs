use anyhow::{Context, Result};
use clap::Parser;

use userql::cli::handlers::{
    CommandContext, handle_init, handle_migrate, handle_mutate, handle_query, handle_schema,
    handle_serve,
};
use userql::cli::{Cli, Commands};
use userql::logging;

fn main() -> Result<()> {
    let Cli {
        command,
        config,
        database_url,
        verbose,
        log_file,
    } = Cli::parse();

    logging::init(verbose, log_file).context("Failed to initialize logging")?;

    let load_context = || CommandContext::load(config.as_deref(), database_url.clone());

    match command {
        Commands::Init { force } => handle_init(&std::env::current_dir()?, force),
        Commands::Schema => handle_schema(),
        Commands::Migrate => handle_migrate(load_context()?),
        Commands::Serve { port, host } => handle_serve(load_context()?, port, host),
        Commands::Query { query, variables } => handle_query(load_context()?, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(load_context()?, mutation, variables),
    }
}
