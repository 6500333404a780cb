//! Spinner and paced reply printing.

use std::io::Write;
use std::time::Duration;

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};

use pathwise_core::interview::{Pace, Replay, paced};

/// Start the "thinking..." spinner shown while a completion is in flight.
///
/// Hidden when `quiet` is set so scripted output stays clean.
pub fn thinking_spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print a replayed reply word by word, indented under a speaker label.
pub async fn print_paced(speaker: &str, reply: Replay, pace: Pace) {
    print!("\n  {} ", console::style(speaker).cyan().bold());
    let _ = std::io::stdout().flush();

    let mut fragments = Box::pin(paced(reply, pace));
    // Line breaks are deferred so the reply does not end on an indent.
    let mut breaks = 0;
    while let Some(fragment) = fragments.next().await {
        if fragment == "\n" {
            breaks += 1;
            continue;
        }
        for _ in 0..breaks {
            print!("\n  ");
        }
        breaks = 0;
        print!("{fragment}");
        let _ = std::io::stdout().flush();
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_spinner_is_hidden() {
        assert!(thinking_spinner("thinking...", true).is_hidden());
    }
}
