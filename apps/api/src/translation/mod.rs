// Language Translator: static language table, prompt, model call.

pub mod handlers;
pub mod languages;
pub mod prompts;
pub mod translator;
