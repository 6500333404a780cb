//! Interactive career coach chat (`pathwise ask`).

use std::time::Instant;

use anyhow::Result;
use console::style;
use tracing::info;

use pathwise_core::advisory::CoachChat;
use pathwise_core::interview::{Pace, replay};
use pathwise_types::error::AdvisoryError;
use pathwise_types::llm::MessageRole;
use pathwise_types::persona::PersonaKey;

use crate::state::AppState;

use super::chat::banner::print_welcome_banner;
use super::chat::commands::{self, ChatCommand};
use super::chat::input::{ChatInput, InputEvent};
use super::chat::output::{print_paced, thinking_spinner};

const COACH: &str = "Coach";

/// Run the coach chat until the user exits.
pub async fn run_coach_chat(state: &AppState, no_pace: bool, quiet: bool) -> Result<()> {
    let persona = state.catalog.get(PersonaKey::AskCareerCoach);
    let mut chat = CoachChat::new(&state.catalog, state.config.provider.request_settings());
    let pace = if no_pace {
        Pace::none()
    } else {
        Pace::from_millis(state.config.replay.pace_ms)
    };

    print_welcome_banner(
        &persona.name,
        &persona.description,
        &[("Model", state.config.provider.model.clone())],
    );

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    // Question whose completion failed; the chat history no longer holds it.
    let mut unanswered: Option<String> = None;

    loop {
        let text = match input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        let question = match commands::parse(&text) {
            None => text,
            Some(ChatCommand::Retry) => match unanswered.take() {
                Some(q) => q,
                None => {
                    println!("\n  {} Nothing to retry.\n", style("i").blue().bold());
                    continue;
                }
            },
            Some(ChatCommand::Help) => {
                commands::print_help();
                continue;
            }
            Some(ChatCommand::Clear) => {
                input.clear();
                continue;
            }
            Some(ChatCommand::Exit) => break,
            Some(ChatCommand::History) => {
                print_history(&chat);
                continue;
            }
            Some(ChatCommand::Unknown(name)) => {
                println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                );
                continue;
            }
        };

        let started = Instant::now();
        let spinner = thinking_spinner("thinking...", quiet);
        let result = chat.ask(&state.provider, &question).await;
        spinner.finish_and_clear();

        match result {
            Ok(reply) => {
                print_paced(COACH, replay(&reply), pace).await;
                println!(
                    "\n  {} {:.1}s {} {}\n",
                    style("|").dim(),
                    style(started.elapsed().as_secs_f64()).dim(),
                    style("\u{00b7}").dim(),
                    style(&state.config.provider.model).dim()
                );
            }
            Err(AdvisoryError::Validation { reason, .. }) => {
                println!("\n  {} {reason}\n", style("!").yellow().bold());
            }
            Err(AdvisoryError::Completion(e)) => {
                unanswered = Some(question);
                eprintln!("\n  {} LLM error: {e}", style("!").red().bold());
                eprintln!("  {}\n", style("Type /retry to ask again, /exit to quit.").dim());
            }
        }
    }

    info!(messages = chat.history().len(), "coach chat ended");
    println!("\n  {}", style("Session ended.").dim());
    Ok(())
}

fn print_history(chat: &CoachChat) {
    println!();
    if chat.history().is_empty() {
        println!("  {}", style("No messages yet.").dim());
    }
    for message in chat.history() {
        let label = match message.role {
            MessageRole::User => style("You").green().bold(),
            _ => style(COACH).cyan().bold(),
        };
        let preview = if message.content.chars().count() > 100 {
            format!("{}...", message.content.chars().take(97).collect::<String>())
        } else {
            message.content.clone()
        };
        println!("  {label} {preview}");
    }
    println!();
}
