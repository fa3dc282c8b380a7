//! Candidate field extraction from a model-written résumé summary.
//!
//! The summary is expected to carry labelled lines such as `Name: ...` and
//! `Contact Details: ...`. Nothing is validated beyond the label being present.

use thiserror::Error;

pub const NAME_MARKER: &str = "Name:";
pub const CONTACT_MARKER: &str = "Contact Details:";
pub const NAME_NOT_FOUND: &str = "Name not found";
pub const CONTACT_NOT_FOUND: &str = "Contact details not found";

/// How far a field's value extends past its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSpan {
    /// Up to the next line break.
    SingleLine,
    /// Up to the end of the text.
    Remainder,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("marker '{marker}' not present")]
pub struct FieldAbsent {
    pub marker: String,
}

/// Takes the text after the first `marker`, stopping at a repeat of the same marker,
/// then at the span boundary, and trims it.
pub fn extract_field(text: &str, marker: &str, span: FieldSpan) -> Result<String, FieldAbsent> {
    let start = text.find(marker).ok_or_else(|| FieldAbsent {
        marker: marker.to_string(),
    })? + marker.len();

    let rest = &text[start..];
    let rest = rest.find(marker).map_or(rest, |next| &rest[..next]);
    let value = match span {
        FieldSpan::SingleLine => rest.split('\n').next().unwrap_or_default(),
        FieldSpan::Remainder => rest,
    };
    Ok(value.trim().to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFields {
    pub name: String,
    pub contact: String,
}

impl CandidateFields {
    pub fn from_summary(summary: &str) -> Self {
        Self {
            name: extract_field(summary, NAME_MARKER, FieldSpan::SingleLine)
                .unwrap_or_else(|_| NAME_NOT_FOUND.to_string()),
            contact: extract_field(summary, CONTACT_MARKER, FieldSpan::Remainder)
                .unwrap_or_else(|_| CONTACT_NOT_FOUND.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Name: Jane Doe\nContact Details: jane@x.com";

    #[test]
    fn test_single_line_name() {
        assert_eq!(
            extract_field(SAMPLE, NAME_MARKER, FieldSpan::SingleLine).unwrap(),
            "Jane Doe"
        );
    }

    #[test]
    fn test_remainder_contact() {
        assert_eq!(
            extract_field(SAMPLE, CONTACT_MARKER, FieldSpan::Remainder).unwrap(),
            "jane@x.com"
        );
    }

    #[test]
    fn test_absent_marker() {
        let err = extract_field("Skills: Rust", NAME_MARKER, FieldSpan::SingleLine).unwrap_err();
        assert_eq!(err.marker, NAME_MARKER);
    }

    #[test]
    fn test_sentinels_when_markers_missing() {
        let fields = CandidateFields::from_summary("The candidate knows Rust.");
        assert_eq!(fields.name, "Name not found");
        assert_eq!(fields.contact, "Contact details not found");
    }

    #[test]
    fn test_remainder_keeps_following_lines() {
        let summary = "Name: Jane Doe\nContact Details:\n  jane@x.com\n  +1 555 0100\n";
        let fields = CandidateFields::from_summary(summary);
        assert_eq!(fields.contact, "jane@x.com\n  +1 555 0100");
    }

    #[test]
    fn test_value_stops_at_repeated_marker() {
        let summary = "Name: Jane Name: Doe";
        assert_eq!(
            extract_field(summary, NAME_MARKER, FieldSpan::SingleLine).unwrap(),
            "Jane"
        );
    }

    #[test]
    fn test_markdown_bold_markers_still_match() {
        let summary = "**Name:** Jane Doe\n**Contact Details:** jane@x.com";
        let fields = CandidateFields::from_summary(summary);
        assert_eq!(fields.name, "** Jane Doe");
        assert_eq!(fields.contact, "** jane@x.com");
    }

    #[test]
    fn test_empty_value_is_present_but_blank() {
        assert_eq!(
            extract_field("Name:\nSkills: Go", NAME_MARKER, FieldSpan::SingleLine).unwrap(),
            ""
        );
    }
}
