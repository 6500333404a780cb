//! Account commands: signup, legacy import and the login gate.

use std::path::Path;

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::{Input, Password};

use pathwise_infra::sqlite::legacy::read_legacy_accounts;
use pathwise_types::error::CredentialError;

use crate::state::AppState;

/// Non-interactive login for scripts.
pub const USER_ENV: &str = "PATHWISE_USER";
pub const PASSWORD_ENV: &str = "PATHWISE_PASSWORD";

const MAX_LOGIN_ATTEMPTS: usize = 3;

/// Create an account through prompts.
pub async fn signup(
    state: &AppState,
    username: Option<String>,
    email: Option<String>,
    json: bool,
) -> Result<()> {
    let username = match username {
        Some(u) => u,
        None => Input::<String>::new().with_prompt("Username").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;
    let confirm = Password::new().with_prompt("Confirm password").interact()?;

    let created = match state
        .credentials
        .register(&username, &password, &confirm, &email)
        .await
    {
        Ok(created) => created,
        Err(CredentialError::Validation { field, reason }) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({"created": false, "field": field, "error": reason})
                );
                return Ok(());
            }
            bail!("{field} {reason}");
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!(
            "{}",
            serde_json::json!({"created": created, "username": username.trim()})
        );
        return Ok(());
    }

    println!();
    if created {
        println!(
            "  {} Account '{}' created. You can now log in.",
            style("✓").green().bold(),
            style(username.trim()).cyan()
        );
    } else {
        println!(
            "  {} Username or email already exists.",
            style("✗").red().bold()
        );
    }
    println!();
    Ok(())
}

/// Import accounts from an earlier `career_coach.db`.
pub async fn import_users(state: &AppState, database: &Path, json: bool) -> Result<()> {
    let accounts = read_legacy_accounts(database)
        .await
        .with_context(|| format!("could not read {}", database.display()))?;
    let summary = state.credentials.import_legacy(&accounts).await?;

    if json {
        println!("{}", serde_json::to_string(&summary)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Imported {} account{} from {}",
        style("✓").green().bold(),
        summary.imported,
        if summary.imported == 1 { "" } else { "s" },
        style(database.display()).cyan()
    );
    if summary.existing > 0 {
        println!("  {} {} already present", style("i").blue().bold(), summary.existing);
    }
    if summary.rejected > 0 {
        println!(
            "  {} {} skipped (missing fields or unknown hash format)",
            style("!").yellow().bold(),
            summary.rejected
        );
    }
    println!();
    Ok(())
}

/// Authenticate before an advisory command runs.
///
/// Uses `PATHWISE_USER`/`PATHWISE_PASSWORD` when both are set, otherwise
/// prompts up to three times. Returns the username.
pub async fn login(state: &AppState) -> Result<String> {
    if let (Ok(username), Ok(password)) = (std::env::var(USER_ENV), std::env::var(PASSWORD_ENV)) {
        if state.credentials.authenticate(&username, &password).await? {
            return Ok(username);
        }
        bail!("invalid credentials in {USER_ENV}/{PASSWORD_ENV}");
    }

    println!("  {}", style("Log in to continue").bold());
    for attempt in 1..=MAX_LOGIN_ATTEMPTS {
        let username = Input::<String>::new().with_prompt("Username").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;

        if state.credentials.authenticate(&username, &password).await? {
            println!("  {} Logged in as {}", style("✓").green().bold(), style(&username).cyan());
            println!();
            return Ok(username);
        }

        let left = MAX_LOGIN_ATTEMPTS - attempt;
        if left > 0 {
            println!(
                "  {} Invalid username or password ({left} attempt{} left)",
                style("✗").red().bold(),
                if left == 1 { "" } else { "s" }
            );
        }
    }

    bail!("login failed; create an account with `pathwise signup`")
}
