// Résumé screening prompt templates.

/// Résumé summary prompt. Replace `{resume_text}`.
pub const RESUME_SUMMARY_TEMPLATE: &str = "Extract the name, contact details, work experience \
(in months/years), and skills from the following resume:\n\n{resume_text}";

/// Eligibility prompt. Replace `{job_requirements}` and `{resume_summary}`.
pub const ELIGIBILITY_TEMPLATE: &str = "Based on the following job requirements:\n\
{job_requirements}\n\n\
And the following resume details:\n{resume_summary}\n\n\
Is this candidate eligible for the job? Consider if the candidate meets or exceeds the \
experience requirements. Give a yes or no answer, and explain why.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptTemplate;

    #[test]
    fn test_summary_template_placeholders() {
        let template = PromptTemplate::new(RESUME_SUMMARY_TEMPLATE).unwrap();
        assert_eq!(template.placeholders(), vec!["resume_text"]);
    }

    #[test]
    fn test_eligibility_template_renders_completely() {
        let template = PromptTemplate::new(ELIGIBILITY_TEMPLATE).unwrap();
        assert_eq!(
            template.placeholders(),
            vec!["job_requirements", "resume_summary"]
        );
        let rendered = template
            .render([
                ("job_requirements", "3+ years Rust"),
                ("resume_summary", "Name: Jane Doe"),
            ])
            .unwrap();
        assert!(rendered.starts_with("Based on the following job requirements:\n3+ years Rust\n\n"));
        assert!(rendered.contains("Give a yes or no answer, and explain why."));
    }
}
