//! One-shot advisory requests.
//!
//! Each variant carries the user-supplied context for one advisory flow.
//! Rendering into a prompt and persona selection live in `pathwise-core`.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Channel a networking strategy should focus on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkingPlatform {
    LinkedIn,
    IndustryEvents,
    ProfessionalAssociations,
    ColdOutreach,
}

impl NetworkingPlatform {
    pub const ALL: [NetworkingPlatform; 4] = [
        NetworkingPlatform::LinkedIn,
        NetworkingPlatform::IndustryEvents,
        NetworkingPlatform::ProfessionalAssociations,
        NetworkingPlatform::ColdOutreach,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NetworkingPlatform::LinkedIn => "LinkedIn",
            NetworkingPlatform::IndustryEvents => "Industry Events",
            NetworkingPlatform::ProfessionalAssociations => "Professional Associations",
            NetworkingPlatform::ColdOutreach => "Cold Outreach",
        }
    }
}

impl fmt::Display for NetworkingPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NetworkingPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "linkedin" => Ok(NetworkingPlatform::LinkedIn),
            "industryevents" | "events" => Ok(NetworkingPlatform::IndustryEvents),
            "professionalassociations" | "associations" => {
                Ok(NetworkingPlatform::ProfessionalAssociations)
            }
            "coldoutreach" | "outreach" => Ok(NetworkingPlatform::ColdOutreach),
            _ => Err(format!("invalid networking platform: '{s}'")),
        }
    }
}

/// A one-shot advisory request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdvisoryRequest {
    /// Weekly plan for moving from one role to another.
    ActionPlan {
        industry: String,
        years_experience: u8,
        current_role: String,
        target_role: String,
    },
    ResumeReview {
        resume_text: String,
        job_description: Option<String>,
    },
    MarketResearch {
        role: String,
        location: String,
    },
    /// Month-by-month plan for acquiring a set of skills.
    LearningPlan {
        skills: String,
        months: u8,
    },
    NetworkingStrategy {
        goal: String,
        platform: NetworkingPlatform,
    },
    /// Free-form question for the career coach.
    Question { text: String },
}

impl AdvisoryRequest {
    /// Short flow name for logs and spans.
    pub fn kind(&self) -> &'static str {
        match self {
            AdvisoryRequest::ActionPlan { .. } => "action_plan",
            AdvisoryRequest::ResumeReview { .. } => "resume_review",
            AdvisoryRequest::MarketResearch { .. } => "market_research",
            AdvisoryRequest::LearningPlan { .. } => "learning_plan",
            AdvisoryRequest::NetworkingStrategy { .. } => "networking_strategy",
            AdvisoryRequest::Question { .. } => "question",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse_labels() {
        for platform in NetworkingPlatform::ALL {
            assert_eq!(platform.label().parse::<NetworkingPlatform>().unwrap(), platform);
        }
        assert_eq!(
            "cold-outreach".parse::<NetworkingPlatform>().unwrap(),
            NetworkingPlatform::ColdOutreach
        );
        assert!("myspace".parse::<NetworkingPlatform>().is_err());
    }

    #[test]
    fn test_request_serde_tagged() {
        let request = AdvisoryRequest::MarketResearch {
            role: "Data Engineer".to_string(),
            location: "Berlin".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "market_research");
        assert_eq!(json["location"], "Berlin");
        let parsed: AdvisoryRequest = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_request_kind() {
        let request = AdvisoryRequest::Question {
            text: "How do I negotiate?".to_string(),
        };
        assert_eq!(request.kind(), "question");
    }
}
