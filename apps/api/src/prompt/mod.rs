// Prompt Builder: named-placeholder templates and schema-guided output.
// Each pipeline keeps its own template constants in a prompts.rs alongside it.

pub mod schema;
pub mod template;

pub use schema::{ResponseSchema, SchemaError, StructuredOutputParser};
pub use template::{PromptError, PromptTemplate};
