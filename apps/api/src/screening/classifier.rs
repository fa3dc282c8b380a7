use serde::Serialize;

/// Binary partition of a free-text eligibility verdict.
///
/// Any occurrence of "yes" (case-insensitive) counts as eligible, even inside a negated
/// or hedged sentence. There is no confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    Eligible,
    Ineligible,
}

impl Eligibility {
    pub fn classify(verdict: &str) -> Self {
        if verdict.to_lowercase().contains("yes") {
            Eligibility::Eligible
        } else {
            Eligibility::Ineligible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_is_eligible() {
        assert_eq!(
            Eligibility::classify("Yes, exceeds requirements"),
            Eligibility::Eligible
        );
    }

    #[test]
    fn test_no_is_ineligible() {
        assert_eq!(
            Eligibility::classify("No, insufficient experience"),
            Eligibility::Ineligible
        );
    }

    #[test]
    fn test_hedged_is_ineligible() {
        assert_eq!(Eligibility::classify("Maybe, unclear"), Eligibility::Ineligible);
    }

    #[test]
    fn test_match_is_case_insensitive_and_anywhere() {
        assert_eq!(
            Eligibility::classify("After review: YES."),
            Eligibility::Eligible
        );
        assert_eq!(Eligibility::classify("eyes on detail"), Eligibility::Eligible);
    }

    #[test]
    fn test_negated_verdict_still_counts_as_yes() {
        assert_eq!(
            Eligibility::classify("No, yes they could grow into it"),
            Eligibility::Eligible
        );
    }

    #[test]
    fn test_empty_verdict_is_ineligible() {
        assert_eq!(Eligibility::classify(""), Eligibility::Ineligible);
    }
}
