// Translation prompt template.

/// Replace `{language}` and `{text}`.
pub const TRANSLATION_TEMPLATE: &str = r#"
You are a professional translator. Please accurately translate the following text into {language}. Ensure the translation maintains the original meaning, tone, and context.

text: {text}
"#;
