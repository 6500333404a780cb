//! One-shot advisory commands: plan, resume, market, skills, network.
//!
//! Missing flags are prompted for with dialoguer. Replies are markdown and
//! rendered once complete, followed by the web sources they cite.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select};

use pathwise_core::advisory::AdvisoryReply;
use pathwise_infra::extract::SUPPORTED_EXTENSIONS;
use pathwise_types::advisory::{AdvisoryRequest, NetworkingPlatform};
use pathwise_types::error::AdvisoryError;

use crate::state::AppState;

use super::chat::output::thinking_spinner;
use super::chat::renderer::ReplyRenderer;

/// Global output flags relevant to one-shot commands.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub json: bool,
    pub quiet: bool,
}

fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

fn number_or_prompt(value: Option<u8>, prompt: &str, default: u8) -> Result<u8> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<u8>::new()
            .with_prompt(prompt)
            .default(default)
            .interact_text()?),
    }
}

pub async fn plan(
    state: &AppState,
    industry: Option<String>,
    years: Option<u8>,
    current_role: Option<String>,
    target_role: Option<String>,
    mode: OutputMode,
) -> Result<()> {
    let request = AdvisoryRequest::ActionPlan {
        industry: text_or_prompt(industry, "Industry")?,
        years_experience: number_or_prompt(years, "Years of experience (0-30)", 0)?,
        current_role: text_or_prompt(current_role, "Current role")?,
        target_role: text_or_prompt(target_role, "Target role")?,
    };
    run(state, &request, mode).await
}

pub async fn resume(
    state: &AppState,
    file: Option<PathBuf>,
    text: Option<String>,
    job: Option<String>,
    job_file: Option<PathBuf>,
    mode: OutputMode,
) -> Result<()> {
    let resume_text = match (file, text) {
        (Some(path), _) => read_document(state, &path).await?,
        (None, Some(text)) => text,
        (None, None) => {
            let path: String = Input::new()
                .with_prompt(format!("Resume file ({})", SUPPORTED_EXTENSIONS.join(", ")))
                .interact_text()?;
            read_document(state, Path::new(path.trim())).await?
        }
    };
    let job_description = match (job, job_file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(read_document(state, &path).await?),
        (None, None) => None,
    };

    let request = AdvisoryRequest::ResumeReview {
        resume_text,
        job_description,
    };
    run(state, &request, mode).await
}

async fn read_document(state: &AppState, path: &Path) -> Result<String> {
    state
        .extractor
        .extract_path(path)
        .await
        .with_context(|| format!("could not read {}", path.display()))
}

pub async fn market(
    state: &AppState,
    role: Option<String>,
    location: Option<String>,
    mode: OutputMode,
) -> Result<()> {
    let request = AdvisoryRequest::MarketResearch {
        role: text_or_prompt(role, "Role")?,
        location: text_or_prompt(location, "Location")?,
    };
    run(state, &request, mode).await
}

pub async fn skills(
    state: &AppState,
    skills: Option<String>,
    months: Option<u8>,
    mode: OutputMode,
) -> Result<()> {
    let request = AdvisoryRequest::LearningPlan {
        skills: text_or_prompt(skills, "Skills to learn (comma separated)")?,
        months: number_or_prompt(months, "Plan length in months (1-12)", 3)?,
    };
    run(state, &request, mode).await
}

pub async fn network(
    state: &AppState,
    goal: Option<String>,
    platform: Option<NetworkingPlatform>,
    mode: OutputMode,
) -> Result<()> {
    let goal = text_or_prompt(goal, "Networking goal")?;
    let platform = match platform {
        Some(p) => p,
        None => {
            let labels: Vec<&str> = NetworkingPlatform::ALL.iter().map(|p| p.label()).collect();
            let index = Select::new()
                .with_prompt("Platform")
                .items(&labels)
                .default(0)
                .interact()?;
            NetworkingPlatform::ALL[index]
        }
    };
    run(state, &AdvisoryRequest::NetworkingStrategy { goal, platform }, mode).await
}

async fn run(state: &AppState, request: &AdvisoryRequest, mode: OutputMode) -> Result<()> {
    let spinner = thinking_spinner("Preparing your advice...", mode.quiet || mode.json);
    let result = state.advisory.run(request).await;
    spinner.finish_and_clear();

    let reply = match result {
        Ok(reply) => reply,
        Err(AdvisoryError::Validation { field, reason }) => {
            anyhow::bail!("{field} {reason}")
        }
        Err(e) => return Err(e.into()),
    };

    if mode.json {
        println!("{}", serde_json::to_string_pretty(&reply_json(request, &reply))?);
        return Ok(());
    }

    let renderer = ReplyRenderer::for_persona(reply.persona);
    println!();
    println!("{}", renderer.render(&reply.content, &reply.sources));
    Ok(())
}

fn reply_json(request: &AdvisoryRequest, reply: &AdvisoryReply) -> serde_json::Value {
    serde_json::json!({
        "kind": request.kind(),
        "persona": reply.persona,
        "content": reply.content,
        "sources": reply.sources,
    })
}
