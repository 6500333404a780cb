//! Validation, persona routing and prompt rendering for advisory requests.

use pathwise_types::advisory::AdvisoryRequest;
use pathwise_types::error::AdvisoryError;
use pathwise_types::persona::PersonaKey;

const MARKDOWN_SUFFIX: &str =
    "Format document as a clear markdown document with headers and subheaders";

/// Upper bound accepted for `ActionPlan::years_experience`.
pub const MAX_YEARS_EXPERIENCE: u8 = 30;
/// Accepted range for `LearningPlan::months`.
pub const LEARNING_PLAN_MONTHS: std::ops::RangeInclusive<u8> = 1..=12;

/// Persona that answers a request.
pub fn persona_for(request: &AdvisoryRequest) -> PersonaKey {
    match request {
        AdvisoryRequest::ActionPlan { .. } | AdvisoryRequest::LearningPlan { .. } => {
            PersonaKey::SkillsDevelopment
        }
        AdvisoryRequest::ResumeReview { .. } => PersonaKey::ResumeAnalysis,
        AdvisoryRequest::MarketResearch { .. } => PersonaKey::JobMarketResearch,
        AdvisoryRequest::NetworkingStrategy { .. } => PersonaKey::NetworkingStrategist,
        AdvisoryRequest::Question { .. } => PersonaKey::AskCareerCoach,
    }
}

fn required(field: &str, value: &str) -> Result<(), AdvisoryError> {
    if value.trim().is_empty() {
        Err(AdvisoryError::validation(field, "is required"))
    } else {
        Ok(())
    }
}

/// Reject requests with missing or out-of-range fields.
pub fn validate(request: &AdvisoryRequest) -> Result<(), AdvisoryError> {
    match request {
        AdvisoryRequest::ActionPlan {
            industry,
            years_experience,
            current_role,
            target_role,
        } => {
            required("industry", industry)?;
            required("current_role", current_role)?;
            required("target_role", target_role)?;
            if *years_experience > MAX_YEARS_EXPERIENCE {
                return Err(AdvisoryError::validation(
                    "years_experience",
                    format!("must be at most {MAX_YEARS_EXPERIENCE}"),
                ));
            }
            Ok(())
        }
        AdvisoryRequest::ResumeReview { resume_text, .. } => required("resume_text", resume_text),
        AdvisoryRequest::MarketResearch { role, location } => {
            required("role", role)?;
            required("location", location)
        }
        AdvisoryRequest::LearningPlan { skills, months } => {
            required("skills", skills)?;
            if !LEARNING_PLAN_MONTHS.contains(months) {
                return Err(AdvisoryError::validation(
                    "months",
                    format!(
                        "must be between {} and {}",
                        LEARNING_PLAN_MONTHS.start(),
                        LEARNING_PLAN_MONTHS.end()
                    ),
                ));
            }
            Ok(())
        }
        AdvisoryRequest::NetworkingStrategy { goal, .. } => required("goal", goal),
        AdvisoryRequest::Question { text } => required("question", text),
    }
}

/// Render the user prompt for a request.
pub fn render_prompt(request: &AdvisoryRequest) -> String {
    match request {
        AdvisoryRequest::ActionPlan {
            industry,
            years_experience,
            current_role,
            target_role,
        } => format!(
            "Create a weekly action plan for a {} targeting {} role in {} with {years_experience} years of experience. {MARKDOWN_SUFFIX}",
            current_role.trim(),
            target_role.trim(),
            industry.trim(),
        ),
        AdvisoryRequest::ResumeReview {
            resume_text,
            job_description,
        } => {
            let mut prompt = format!("Analyze this resume:\n{}\n", resume_text.trim());
            if let Some(jd) = job_description.as_deref().filter(|jd| !jd.trim().is_empty()) {
                prompt.push_str(&format!("Compare with job description:\n{}", jd.trim()));
            }
            prompt
        }
        AdvisoryRequest::MarketResearch { role, location } => format!(
            "Research the job market for {} in {}. Include salary ranges, required skills, and market demand. {MARKDOWN_SUFFIX}",
            role.trim(),
            location.trim(),
        ),
        AdvisoryRequest::LearningPlan { skills, months } => format!(
            "Create a {months}-month learning plan for: {}. {MARKDOWN_SUFFIX}",
            skills.trim(),
        ),
        AdvisoryRequest::NetworkingStrategy { goal, platform } => format!(
            "Create a networking strategy for {} focusing on {platform}. {MARKDOWN_SUFFIX}",
            goal.trim(),
        ),
        AdvisoryRequest::Question { text } => text.trim().to_string(),
    }
}

/// Web search query used to ground the answer, if the flow has one.
pub fn search_query(request: &AdvisoryRequest) -> Option<String> {
    match request {
        AdvisoryRequest::ActionPlan {
            industry,
            target_role,
            ..
        } => Some(format!("{} career path {}", target_role.trim(), industry.trim())),
        AdvisoryRequest::ResumeReview {
            job_description, ..
        } => Some(match job_description.as_deref().map(str::trim) {
            Some(jd) if !jd.is_empty() => {
                let title = jd.lines().next().unwrap_or(jd);
                format!("{title} resume keywords")
            }
            _ => "resume best practices ATS".to_string(),
        }),
        AdvisoryRequest::MarketResearch { role, location } => Some(format!(
            "{} jobs {} salary demand",
            role.trim(),
            location.trim()
        )),
        AdvisoryRequest::LearningPlan { skills, .. } => {
            Some(format!("{} courses learning resources", skills.trim()))
        }
        AdvisoryRequest::NetworkingStrategy { goal, platform } => {
            Some(format!("{} networking {platform}", goal.trim()))
        }
        AdvisoryRequest::Question { .. } => None,
    }
}
