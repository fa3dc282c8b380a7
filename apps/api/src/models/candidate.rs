use serde::Serialize;

use crate::screening::classifier::Eligibility;
use crate::screening::extractor::{CandidateFields, CONTACT_NOT_FOUND};

/// Display text used in place of the contact sentinel.
pub const NO_CONTACT_DISPLAY: &str = "No contact details found";

/// One screened résumé. Lives only for the duration of a screening run.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub name: String,
    pub contact: String,
    pub contact_display: String,
    pub filename: String,
    /// The model's résumé summary, shown verbatim.
    pub resume_output: String,
    pub eligibility_verdict: String,
    pub eligibility: Eligibility,
}

impl Candidate {
    pub fn new(filename: String, resume_output: String, eligibility_verdict: String) -> Self {
        let fields = CandidateFields::from_summary(&resume_output);
        let contact_display = if fields.contact.contains(CONTACT_NOT_FOUND) {
            NO_CONTACT_DISPLAY.to_string()
        } else {
            fields.contact.clone()
        };
        let eligibility = Eligibility::classify(&eligibility_verdict);

        Self {
            name: fields.name,
            contact: fields.contact,
            contact_display,
            filename,
            resume_output,
            eligibility_verdict,
            eligibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_fields_and_bucket() {
        let candidate = Candidate::new(
            "jane.pdf".to_string(),
            "Name: Jane Doe\nContact Details: jane@x.com".to_string(),
            "Yes, exceeds requirements".to_string(),
        );
        assert_eq!(candidate.name, "Jane Doe");
        assert_eq!(candidate.contact, "jane@x.com");
        assert_eq!(candidate.contact_display, "jane@x.com");
        assert_eq!(candidate.eligibility, Eligibility::Eligible);
    }

    #[test]
    fn test_missing_contact_has_display_text() {
        let candidate = Candidate::new(
            "anon.pdf".to_string(),
            "Skills: Rust".to_string(),
            "No, insufficient experience".to_string(),
        );
        assert_eq!(candidate.name, "Name not found");
        assert_eq!(candidate.contact, "Contact details not found");
        assert_eq!(candidate.contact_display, NO_CONTACT_DISPLAY);
        assert_eq!(candidate.eligibility, Eligibility::Ineligible);
    }
}
