//! Prompt rendering for the mock interview.
//!
//! The whole transcript is replayed into every prompt, so the model sees
//! the complete interview so far without any server-side conversation
//! state.

use pathwise_types::interview::{QuestionType, Turn};

/// Renders an interview prompt from the session context.
///
/// Layout:
/// ```text
/// You are conducting a mock interview for a {position} position. The question type is {question_type}. Here is the conversation so far:
/// {role}: {content}
/// {role}: {content}
/// Based on the user's latest response, provide feedback and ask the next question. If this is the final question, provide a final assessment.
/// ```
pub struct InterviewPromptBuilder;

impl InterviewPromptBuilder {
    /// Build the prompt. Pure: identical inputs give byte-identical output.
    pub fn build(position: &str, question_type: QuestionType, turns: &[Turn]) -> String {
        let transcript: Vec<String> = turns
            .iter()
            .map(|turn| format!("{}: {}", turn.role, turn.content))
            .collect();

        format!(
            "You are conducting a mock interview for a {position} position. \
             The question type is {question_type}. Here is the conversation so far:\n\
             {}\n\
             Based on the user's latest response, provide feedback and ask the next question. \
             If this is the final question, provide a final assessment.",
            transcript.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "You are conducting a mock interview for a Data Scientist position. \
                          The question type is Behavioral. Here is the conversation so far:";
    const TRAILER: &str = "Based on the user's latest response, provide feedback and ask the next question. \
                           If this is the final question, provide a final assessment.";

    #[test]
    fn test_seed_only_transcript() {
        let turns = vec![Turn::assistant("Let's begin your interview! Tell me about yourself")];
        let prompt = InterviewPromptBuilder::build("Data Scientist", QuestionType::Behavioral, &turns);
        assert_eq!(
            prompt,
            format!(
                "{HEADER}\nassistant: Let's begin your interview! Tell me about yourself\n{TRAILER}"
            )
        );
    }

    #[test]
    fn test_transcript_lines_in_order() {
        let turns = vec![
            Turn::assistant("Tell me about yourself"),
            Turn::user("I build models."),
            Turn::assistant("What kind?"),
            Turn::user("Churn models."),
        ];
        let prompt = InterviewPromptBuilder::build("Data Scientist", QuestionType::Behavioral, &turns);
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "assistant: Tell me about yourself");
        assert_eq!(lines[2], "user: I build models.");
        assert_eq!(lines[3], "assistant: What kind?");
        assert_eq!(lines[4], "user: Churn models.");
        assert_eq!(lines[5], TRAILER);
    }

    #[test]
    fn test_problem_solving_uses_display_name() {
        let prompt = InterviewPromptBuilder::build(
            "SRE",
            QuestionType::ProblemSolving,
            &[Turn::assistant("Go")],
        );
        assert!(prompt.contains("The question type is Problem Solving."));
        assert!(prompt.contains("for a SRE position."));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let turns = vec![Turn::assistant("Hi"), Turn::user("Hello\nthere")];
        let first = InterviewPromptBuilder::build("PM", QuestionType::Leadership, &turns);
        let second = InterviewPromptBuilder::build("PM", QuestionType::Leadership, &turns);
        assert_eq!(first, second);
    }
}
