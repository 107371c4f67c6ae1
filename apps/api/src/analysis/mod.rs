// Profile analysis: fixture overrides, assessor backends, reply extraction
// and validation. All LLM calls go through llm_client.

pub mod assessor;
pub mod extract;
pub mod fixtures;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod validate;
