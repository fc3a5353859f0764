// Pathway API: career in, enriched MDC pathways out.
// Generation goes through llm_client; every returned step passes through the
// catalog resolver in enrich.rs.

pub mod enrich;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
