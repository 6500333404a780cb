//! Terminal rendering of advisory replies.
//!
//! Replies are markdown documents: plans, resume reviews and outreach
//! drafts. Prose goes through `termimad` in whole sections so lists and
//! tables keep their layout; fenced blocks (SQL drills, message templates)
//! are highlighted with `syntect`. Web sources are listed after the body.

use console::style;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::{MadSkin, StyledChar};
use termimad::crossterm::style::Color;

use pathwise_types::persona::PersonaKey;
use pathwise_types::search::SearchHit;

const CODE_THEME: &str = "base16-ocean.dark";

/// A run of markdown between code fences, or one fenced block.
#[derive(Debug, PartialEq, Eq)]
enum Section<'a> {
    Prose(Vec<&'a str>),
    Fenced { lang: &'a str, lines: Vec<&'a str> },
}

/// Split markdown on ``` fences. An unclosed fence runs to the end.
fn sections(markdown: &str) -> Vec<Section<'_>> {
    let mut out = Vec::new();
    let mut current = Section::Prose(Vec::new());

    for line in markdown.lines() {
        let fence = line.trim_start().strip_prefix("```");
        current = match (current, fence) {
            (Section::Prose(lines), Some(lang)) => {
                if !lines.is_empty() {
                    out.push(Section::Prose(lines));
                }
                Section::Fenced {
                    lang: lang.trim(),
                    lines: Vec::new(),
                }
            }
            (fenced @ Section::Fenced { .. }, Some(_)) => {
                out.push(fenced);
                Section::Prose(Vec::new())
            }
            (Section::Prose(mut lines), None) => {
                lines.push(line);
                Section::Prose(lines)
            }
            (Section::Fenced { lang, mut lines }, None) => {
                lines.push(line);
                Section::Fenced { lang, lines }
            }
        };
    }

    match current {
        Section::Prose(lines) if lines.is_empty() => {}
        last => out.push(last),
    }
    out
}

/// Header colour for each advisor.
fn accent(persona: PersonaKey) -> Color {
    match persona {
        PersonaKey::ResumeAnalysis => Color::Green,
        PersonaKey::JobMarketResearch => Color::Blue,
        PersonaKey::SkillsDevelopment => Color::Yellow,
        PersonaKey::InterviewCoach => Color::Magenta,
        PersonaKey::NetworkingStrategist | PersonaKey::AskCareerCoach => Color::Cyan,
    }
}

/// Renders one persona's replies for the terminal.
pub struct ReplyRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl ReplyRenderer {
    pub fn for_persona(persona: PersonaKey) -> Self {
        let color = accent(persona);
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(color);
        for header in skin.headers.iter_mut().take(2) {
            header.set_fg(color);
        }
        skin.bullet = StyledChar::from_fg_char(color, '•');
        skin.inline_code.set_fg(Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Render a markdown reply followed by its numbered sources.
    pub fn render(&self, markdown: &str, sources: &[SearchHit]) -> String {
        let mut output = String::new();
        for section in sections(markdown) {
            match section {
                Section::Prose(lines) => {
                    output.push_str(&self.skin.term_text(&lines.join("\n")).to_string());
                }
                Section::Fenced { lang, lines } => {
                    output.push_str(&self.highlight(lang, &lines));
                    output.push('\n');
                }
            }
        }

        if !sources.is_empty() {
            output.push_str(&format!("\n  {}\n", style("Sources").bold()));
            for (i, hit) in sources.iter().enumerate() {
                output.push_str(&format!("  {}. {} {}\n", i + 1, hit.title, style(&hit.link).dim()));
            }
        }
        output
    }

    fn highlight(&self, lang: &str, lines: &[&str]) -> String {
        let mut output = String::new();
        if !lang.is_empty() {
            output.push_str(&format!("  {}\n", style(lang).dim()));
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let Some(theme) = self.theme_set.themes.get(CODE_THEME) else {
            for line in lines {
                output.push_str(&format!("    {line}\n"));
            }
            return output;
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        for line in lines {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges, false);
            output.push_str(&format!("    {escaped}\x1b[0m\n"));
        }
        output
    }
}
