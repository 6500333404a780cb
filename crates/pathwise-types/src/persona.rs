//! Advisory persona definitions.
//!
//! A persona is a role-specific prompt template: a free-form description of
//! who the assistant is, plus an ordered list of instructions. The catalog
//! maps a stable key (e.g. `interview_coach`) to its persona and is loaded
//! once at startup.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifiers for the personas every catalog must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaKey {
    ResumeAnalysis,
    JobMarketResearch,
    SkillsDevelopment,
    InterviewCoach,
    NetworkingStrategist,
    AskCareerCoach,
}

impl PersonaKey {
    pub const ALL: [PersonaKey; 6] = [
        PersonaKey::ResumeAnalysis,
        PersonaKey::JobMarketResearch,
        PersonaKey::SkillsDevelopment,
        PersonaKey::InterviewCoach,
        PersonaKey::NetworkingStrategist,
        PersonaKey::AskCareerCoach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaKey::ResumeAnalysis => "resume_analysis",
            PersonaKey::JobMarketResearch => "job_market_research",
            PersonaKey::SkillsDevelopment => "skills_development",
            PersonaKey::InterviewCoach => "interview_coach",
            PersonaKey::NetworkingStrategist => "networking_strategist",
            PersonaKey::AskCareerCoach => "ask_career_coach",
        }
    }
}

impl fmt::Display for PersonaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown persona key: '{s}'"))
    }
}

/// A single advisory persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Display name (e.g. "InterviewCoach").
    pub name: String,
    /// Who the assistant is, its expertise, tone and response format.
    pub description: String,
    /// Ordered task guidelines.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Whether flows using this persona may ground answers in web search.
    #[serde(default)]
    pub web_search: bool,
}

/// On-disk shape of a persona catalog (`personas.toml`).
///
/// ```toml
/// [personas.interview_coach]
/// name = "InterviewCoach"
/// description = "..."
/// instructions = ["...", "..."]
/// web_search = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonaFile {
    #[serde(default)]
    pub personas: BTreeMap<PersonaKey, Persona>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_key_roundtrip() {
        for key in PersonaKey::ALL {
            assert_eq!(key.as_str().parse::<PersonaKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_persona_file_parses_toml() {
        let raw = r#"
[personas.interview_coach]
name = "InterviewCoach"
description = "You run mock interviews."
instructions = ["Ask one question at a time."]
"#;
        let file: PersonaFile = toml::from_str(raw).unwrap();
        let coach = &file.personas[&PersonaKey::InterviewCoach];
        assert_eq!(coach.name, "InterviewCoach");
        assert_eq!(coach.instructions.len(), 1);
        assert!(!coach.web_search);
    }

    #[test]
    fn test_persona_file_rejects_unknown_key() {
        let raw = r#"
[personas.astrologer]
name = "Astrologer"
description = "Reads stars."
"#;
        assert!(toml::from_str::<PersonaFile>(raw).is_err());
    }
}
