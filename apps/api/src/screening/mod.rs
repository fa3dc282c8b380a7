// Résumé Screener: PDF text, summary and eligibility calls, field extraction,
// classification.

pub mod classifier;
pub mod extractor;
pub mod handlers;
pub mod pdf;
pub mod prompts;
pub mod screener;
