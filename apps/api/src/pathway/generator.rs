//! Pathway generation: pluggable backend behind a trait.
//!
//! `AppState` holds an `Arc<dyn PathwayGenerator>`; production wires
//! `GeminiPathwayGenerator`, tests wire stubs.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{GeminiClient, MODEL};
use crate::pathway::models::PathwayData;
use crate::pathway::prompts::{build_system_prompt, build_user_query, pathway_schema};

#[async_trait]
pub trait PathwayGenerator: Send + Sync {
    async fn generate(&self, career: &str) -> Result<PathwayData, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiPathwayGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Generates pathways through Gemini. Without an API key every call fails
/// with `AppError::NotConfigured` instead of refusing to start.
pub struct GeminiPathwayGenerator {
    client: Option<GeminiClient>,
    system_prompt: String,
}

impl GeminiPathwayGenerator {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self {
            client,
            system_prompt: build_system_prompt(),
        }
    }
}

#[async_trait]
impl PathwayGenerator for GeminiPathwayGenerator {
    async fn generate(&self, career: &str) -> Result<PathwayData, AppError> {
        let Some(client) = &self.client else {
            return Err(AppError::NotConfigured);
        };

        info!(career = %career, model = MODEL, "Generating pathway");

        let schema = pathway_schema(career);
        let raw: Value = client
            .call_json(&build_user_query(career), &self.system_prompt, &schema)
            .await
            .inspect_err(|e| warn!(career = %career, "Pathway generation failed: {e}"))?;

        let data = PathwayData::from_value(raw)?;

        info!(
            career = %career,
            pathways = data.pathways.len(),
            primary = data.primary_index(),
            "Pathway generated"
        );

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let generator = GeminiPathwayGenerator::new(None);
        let result = generator.generate("Nurse").await;
        assert!(matches!(result, Err(AppError::NotConfigured)));
    }
}
