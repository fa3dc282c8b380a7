//! Named-placeholder prompt templates.
//!
//! Placeholders are written `{name}`. A doubled brace (`{{` or `}}`) is a literal brace.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PromptError {
    #[error("Template is malformed at byte {position}: {reason}")]
    Malformed { position: usize, reason: String },

    #[error("No value supplied for placeholder '{0}'")]
    MissingVariable(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    pub fn new(source: &str) -> Result<Self, PromptError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, n) in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        name.push(n);
                    }
                    if !closed {
                        return Err(PromptError::Malformed {
                            position: pos,
                            reason: "unclosed '{'".to_string(),
                        });
                    }
                    if !is_valid_name(&name) {
                        return Err(PromptError::Malformed {
                            position: pos,
                            reason: format!("invalid placeholder name '{name}'"),
                        });
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    return Err(PromptError::Malformed {
                        position: pos,
                        reason: "unmatched '}'".to_string(),
                    });
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Distinct placeholder names, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    /// Substitutes every placeholder. Values for unknown names are ignored.
    pub fn render<'a, I>(&self, values: I) -> Result<String, PromptError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values: HashMap<&str, &str> = values.into_iter().collect();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values
                        .get(name.as_str())
                        .ok_or_else(|| PromptError::MissingVariable(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_all_placeholders() {
        let template = PromptTemplate::new("Translate into {language}.\n\ntext: {text}\n").unwrap();
        let out = template
            .render([("language", "French"), ("text", "Good morning")])
            .unwrap();
        assert_eq!(out, "Translate into French.\n\ntext: Good morning\n");
        assert!(!out.contains('{'));
    }

    #[test]
    fn test_repeated_placeholder_is_listed_once() {
        let template = PromptTemplate::new("{a} and {b} and {a}").unwrap();
        assert_eq!(template.placeholders(), vec!["a", "b"]);
        assert_eq!(template.render([("a", "x"), ("b", "y")]).unwrap(), "x and y and x");
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let template = PromptTemplate::new("text: {text}").unwrap();
        let err = template.render([("other", "value")]).unwrap_err();
        assert_eq!(err, PromptError::MissingVariable("text".to_string()));
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let template = PromptTemplate::new("{body}").unwrap();
        let out = template.render([("body", "{\"gift\": true}")]).unwrap();
        assert_eq!(out, "{\"gift\": true}");
    }

    #[test]
    fn test_doubled_braces_are_literal() {
        let template = PromptTemplate::new("{{\"key\": {value}}}").unwrap();
        assert_eq!(template.placeholders(), vec!["value"]);
        assert_eq!(template.render([("value", "1")]).unwrap(), "{\"key\": 1}");
    }

    #[test]
    fn test_unclosed_brace_is_malformed() {
        let err = PromptTemplate::new("hello {name").unwrap_err();
        assert!(matches!(err, PromptError::Malformed { position: 6, .. }));
    }

    #[test]
    fn test_stray_closing_brace_is_malformed() {
        assert!(PromptTemplate::new("oops }").is_err());
    }

    #[test]
    fn test_invalid_placeholder_name_is_malformed() {
        assert!(PromptTemplate::new("{not a name}").is_err());
        assert!(PromptTemplate::new("{}").is_err());
    }
}
