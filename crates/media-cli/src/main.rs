//! CLI entry point.
//!
//! Loads `.env`, parses arguments, initialises logging and dispatches to
//! the command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use media_cli::{Cli, CliConfig, Commands, MediaTypeCommand, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load before parsing so clap's env fallbacks see .env values
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            host,
            allow_origins,
        } => {
            let config = handlers::serve::server_config(cli.database, host, port, allow_origins);
            handlers::serve::execute(config).await?;
        }
        Commands::MediaTypes { command } => {
            let ctx = bootstrap(&CliConfig {
                database_path: cli.database,
            })
            .await?;
            let repo = ctx.repos().media_types.as_ref();

            match command {
                MediaTypeCommand::List => handlers::media_types::list(repo).await?,
                MediaTypeCommand::Seed { names } => {
                    let inserted = handlers::media_types::seed(repo, &names).await?;
                    println!("{} media type(s) added.", inserted.len());
                }
            }
        }
    }

    Ok(())
}
