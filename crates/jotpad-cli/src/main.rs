//! Jotpad CLI - Manage your notes from the terminal
//!
//! Every command drives the same notes controller as the desktop app.

mod cli;
mod commands;
mod error;


use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::auth::{run_login, run_logout};
use crate::commands::common::connect;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jotpad=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { command } => run_config(command, cli.api_url)?,
        Commands::List { json } => run_list(connect(cli.api_url)?.api, json).await?,
        Commands::Add { title, content } => {
            run_add(connect(cli.api_url)?.api, &title, &content).await?;
        }
        Commands::Edit { id, title, content } => {
            run_edit(connect(cli.api_url)?.api, &id, title, content).await?;
        }
        Commands::Delete { id } => run_delete(connect(cli.api_url)?.api, &id).await?,
        Commands::Login { email, password } => {
            let connection = connect(cli.api_url)?;
            run_login(&connection.api, &connection.store, &email, &password).await?;
        }
        Commands::Logout => {
            let connection = connect(cli.api_url)?;
            run_logout(connection.api, &connection.store).await?;
        }
    }

    Ok(())
}
