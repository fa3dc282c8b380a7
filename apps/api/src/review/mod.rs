// Customer Review Analyzer: prompt, model call, optional schema parse.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
