// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file only holds cross-cutting pieces.

/// Closing instruction for every schema-constrained system prompt.
pub const SCHEMA_ONLY_INSTRUCTION: &str =
    "You must only respond with a JSON object following the schema provided.";

/// Instruction that keeps the model on real, published program titles.
pub const NO_INVENTED_PROGRAMS: &str = "\
    YOU MUST ONLY USE ACTUAL PROGRAMS THAT EXIST. DO NOT CREATE OR INVENT PROGRAMS. \
    Every program title must be copied EXACTLY as listed; do not use generic names.";

/// Joins prompt sections with blank lines.
pub fn compose(sections: &[&str]) -> String {
    sections
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
