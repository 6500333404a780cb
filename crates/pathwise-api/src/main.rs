//! Pathwise CLI entry point.
//!
//! Binary name: `pathwise`
//!
//! Parses CLI arguments, sets up logging, initializes state and services,
//! gates advisory commands behind login, then dispatches.

mod cli;
mod state;

use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser;
use clap_complete::generate;
use console::style;
use tracing_subscriber::EnvFilter;

use cli::advise::OutputMode;
use cli::{Cli, Commands};
use pathwise_infra::llm::test_provider_connection;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli)?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "pathwise", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    if cli.command.requires_login() {
        cli::auth::login(&state).await?;
    }

    let mode = OutputMode {
        json: cli.json,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Signup { username, email } => {
            cli::auth::signup(&state, username, email, cli.json).await?;
        }

        Commands::ImportUsers { database } => {
            cli::auth::import_users(&state, &database, cli.json).await?;
        }

        Commands::Interview {
            position,
            question_type,
            no_pace,
        } => {
            cli::interview::run_interview(&state, position, question_type, no_pace, cli.quiet)
                .await?;
        }

        Commands::Ask { no_pace } => {
            cli::coach::run_coach_chat(&state, no_pace, cli.quiet).await?;
        }

        Commands::Plan {
            industry,
            years,
            current_role,
            target_role,
        } => {
            cli::advise::plan(&state, industry, years, current_role, target_role, mode).await?;
        }

        Commands::Resume {
            file,
            text,
            job,
            job_file,
        } => {
            cli::advise::resume(&state, file, text, job, job_file, mode).await?;
        }

        Commands::Market { role, location } => {
            cli::advise::market(&state, role, location, mode).await?;
        }

        Commands::Skills { skills, months } => {
            cli::advise::skills(&state, skills, months, mode).await?;
        }

        Commands::Network { goal, platform } => {
            cli::advise::network(&state, goal, platform, mode).await?;
        }

        Commands::Personas => {
            cli::personas::list_personas(&state, cli.json)?;
        }

        Commands::Check => {
            let provider = &state.config.provider;
            let result = test_provider_connection(&state.provider).await;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "provider": provider.name,
                        "base_url": provider.base_url,
                        "model": provider.model,
                        "ok": result.is_ok(),
                        "error": result.as_ref().err().map(|e| e.to_string()),
                    })
                );
            } else {
                match &result {
                    Ok(()) => println!(
                        "  {} {} ({}) is responding",
                        style("✓").green().bold(),
                        style(&provider.model).cyan(),
                        provider.base_url
                    ),
                    Err(e) => println!(
                        "  {} {} ({}): {e}",
                        style("✗").red().bold(),
                        style(&provider.model).cyan(),
                        provider.base_url
                    ),
                }
            }
            result?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Set up tracing based on verbosity and `--log-file`.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,pathwise=debug",
        _ => "trace",
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false);

    match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            if cli.json {
                builder.json().init();
            } else {
                builder.init();
            }
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
