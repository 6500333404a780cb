//! Interactive mock interview loop.
//!
//! Drives one `InterviewSession`: prints the opening line, reads answers,
//! sends each to the provider and replays the reply word by word. A failed
//! completion keeps the answer; `/retry` re-sends it.

use std::time::Instant;

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use tracing::info;

use pathwise_core::interview::{InterviewSession, Pace, SessionOptions};
use pathwise_core::persona::PersonaPromptBuilder;
use pathwise_types::error::InterviewError;
use pathwise_types::interview::{QuestionType, TurnRole};
use pathwise_types::persona::PersonaKey;

use crate::state::AppState;

use super::chat::banner::print_welcome_banner;
use super::chat::commands::{self, ChatCommand};
use super::chat::input::{ChatInput, InputEvent};
use super::chat::output::{print_paced, thinking_spinner};

const INTERVIEWER: &str = "Interviewer";

/// Run an interview until the user exits.
pub async fn run_interview(
    state: &AppState,
    position: Option<String>,
    question_type: Option<QuestionType>,
    no_pace: bool,
    quiet: bool,
) -> Result<()> {
    let position = match position {
        Some(p) => p,
        None => Input::<String>::new()
            .with_prompt("Position you are interviewing for")
            .interact_text()?,
    };
    let question_type = match question_type {
        Some(qt) => qt,
        None => {
            let labels: Vec<&str> = QuestionType::ALL.iter().map(|qt| qt.label()).collect();
            let index = Select::new()
                .with_prompt("Question type")
                .items(&labels)
                .default(0)
                .interact()?;
            QuestionType::ALL[index]
        }
    };

    let config = &state.config;
    let coach = state.catalog.get(PersonaKey::InterviewCoach);
    let options = SessionOptions::from_settings(&config.provider, &config.interview)
        .with_system_prompt(PersonaPromptBuilder::build(coach, &[]));
    let pace = if no_pace {
        Pace::none()
    } else {
        Pace::from_millis(config.replay.pace_ms)
    };

    let mut session = InterviewSession::new(options);
    session.start(&position, question_type)?;

    let mut details = vec![
        ("Position", position.clone()),
        ("Questions", question_type.label().to_string()),
        ("Model", config.provider.model.clone()),
    ];
    if let Some(cap) = config.interview.max_turns {
        details.push(("Answers", format!("up to {cap}")));
    }
    print_welcome_banner(&coach.name, &coach.description, &details);
    if let Some(opening) = session.replay_latest() {
        print_paced(INTERVIEWER, opening, pace).await;
    }
    println!();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep answering.").dim());
                continue;
            }
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::History => print_transcript(&session),
                ChatCommand::Retry => {
                    if session.has_pending_answer() {
                        let started = Instant::now();
                        let spinner = thinking_spinner("thinking...", quiet);
                        let result = session.retry(&state.provider).await;
                        spinner.finish_and_clear();
                        show_reply(state, &session, result, started, pace).await;
                    } else {
                        println!("\n  {} Nothing to retry.\n", style("i").blue().bold());
                    }
                }
                ChatCommand::Unknown(name) => println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                ),
            }
            continue;
        }

        let started = Instant::now();
        let spinner = thinking_spinner("thinking...", quiet);
        let result = session.submit_answer(&state.provider, &text).await;
        spinner.finish_and_clear();
        show_reply(state, &session, result, started, pace).await;
    }

    info!(
        position = %position,
        answered = session.answered(),
        "interview ended"
    );
    println!(
        "\n  {} Interview ended after {} answer{}.",
        style("✓").green().bold(),
        session.answered(),
        if session.answered() == 1 { "" } else { "s" }
    );
    Ok(())
}

async fn show_reply(
    state: &AppState,
    session: &InterviewSession,
    result: Result<String, InterviewError>,
    started: Instant,
    pace: Pace,
) {
    match result {
        Ok(_) => {
            if let Some(reply) = session.replay_latest() {
                print_paced(INTERVIEWER, reply, pace).await;
            }
            println!(
                "\n  {} {:.1}s {} {}\n",
                style("|").dim(),
                style(started.elapsed().as_secs_f64()).dim(),
                style("\u{00b7}").dim(),
                style(&state.config.provider.model).dim()
            );
        }
        Err(InterviewError::Validation { reason, .. }) => {
            println!("\n  {} {reason}\n", style("!").yellow().bold());
        }
        Err(InterviewError::Completion(e)) => {
            eprintln!("\n  {} LLM error: {e}", style("!").red().bold());
            eprintln!(
                "  {}\n",
                style("Your answer is kept. Type /retry to send it again, /exit to quit.").dim()
            );
        }
    }
}

fn print_transcript(session: &InterviewSession) {
    println!();
    for turn in session.turns() {
        let label = match turn.role {
            TurnRole::User => style("You").green().bold(),
            TurnRole::Assistant => style(INTERVIEWER).cyan().bold(),
        };
        println!("  {label} {}", turn.content);
    }
    if session.has_pending_answer() {
        println!("  {}", style("(waiting for a reply; /retry to resend)").dim());
    }
    println!();
}
