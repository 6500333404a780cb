//! System prompt rendering for advisory personas.

use pathwise_types::persona::Persona;
use pathwise_types::search::SearchHit;

/// Builds the system prompt for a persona.
///
/// Layout:
/// ```text
/// {description}
///
/// <instructions>
/// - {instruction}
/// </instructions>
///
/// <web_results>
/// 1. {title}
///    {snippet}
///    {link}
/// </web_results>
/// ```
pub struct PersonaPromptBuilder;

impl PersonaPromptBuilder {
    pub fn build(persona: &Persona, web_results: &[SearchHit]) -> String {
        let mut sections = Vec::with_capacity(3);

        sections.push(persona.description.trim().to_string());

        if !persona.instructions.is_empty() {
            let lines: Vec<String> = persona
                .instructions
                .iter()
                .map(|i| format!("- {}", i.trim()))
                .collect();
            sections.push(format!("<instructions>\n{}\n</instructions>", lines.join("\n")));
        }

        if !web_results.is_empty() {
            let hits: Vec<String> = web_results
                .iter()
                .enumerate()
                .map(|(i, hit)| format!("{}. {}\n   {}\n   {}", i + 1, hit.title, hit.snippet, hit.link))
                .collect();
            sections.push(format!(
                "<web_results>\n\
                Current search results you may cite:\n\
                {}\n\
                </web_results>",
                hits.join("\n")
            ));
        }

        sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona() -> Persona {
        Persona {
            name: "Coach".to_string(),
            description: "  You coach people.\n".to_string(),
            instructions: vec!["Be brief.".to_string(), "Be kind.".to_string()],
            web_search: false,
        }
    }

    #[test]
    fn test_description_and_instructions() {
        let prompt = PersonaPromptBuilder::build(&persona(), &[]);
        assert_eq!(
            prompt,
            "You coach people.\n\n<instructions>\n- Be brief.\n- Be kind.\n</instructions>"
        );
    }

    #[test]
    fn test_no_instructions_section_when_empty() {
        let mut p = persona();
        p.instructions.clear();
        let prompt = PersonaPromptBuilder::build(&p, &[]);
        assert!(!prompt.contains("<instructions>"));
    }

    #[test]
    fn test_web_results_section() {
        let hits = vec![SearchHit {
            title: "Salary guide".to_string(),
            snippet: "Median pay rose".to_string(),
            link: "https://example.com/guide".to_string(),
        }];
        let prompt = PersonaPromptBuilder::build(&persona(), &hits);
        assert!(prompt.ends_with(
            "<web_results>\nCurrent search results you may cite:\n1. Salary guide\n   Median pay rose\n   https://example.com/guide\n</web_results>"
        ));
    }
}
