//! Axum route handlers for the Pathway API.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::dispatcher::CLASSIFIERS;
use crate::catalog::{normalize, resolve_program_url, PathwayStep, StepKind};
use crate::errors::AppError;
use crate::pathway::enrich::{enrich, enrich_step, EnrichedStep, PathwayResponse};
use crate::state::AppState;

const CAREER_REQUIRED: &str = "Career parameter is required and must be a non-empty string.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `career` stays untyped so a wrong JSON type gets the same 400 as a missing one.
#[derive(Debug, Deserialize)]
pub struct GeneratePathwayRequest {
    #[serde(default)]
    pub career: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: StepKind,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_kind() -> StepKind {
    StepKind::Degree
}

fn default_level() -> String {
    "MDC".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub normalized: String,
    /// First program class that claims the name, in dispatch order.
    pub program_class: Option<&'static str>,
    pub program_url: String,
    #[serde(flatten)]
    pub step: EnrichedStep,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-pathway
///
/// Generates pathways for a career and returns them with every step enriched.
pub async fn handle_generate_pathway(
    State(state): State<AppState>,
    request: Result<Json<GeneratePathwayRequest>, JsonRejection>,
) -> Result<Json<PathwayResponse>, AppError> {
    let career = request
        .ok()
        .and_then(|Json(body)| match body.career {
            Some(Value::String(career)) => Some(career),
            _ => None,
        })
        .map(|career| career.trim().to_string())
        .filter(|career| !career.is_empty())
        .ok_or_else(|| AppError::Validation(CAREER_REQUIRED.to_string()))?;

    let data = state.generator.generate(&career).await?;

    Ok(Json(enrich(data)))
}

/// GET /api/catalog/resolve?name=...&type=...&level=...
///
/// Runs catalog resolution for one ad-hoc step. Any name resolves to something.
pub async fn handle_resolve(
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Result<Json<ResolveResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    let step = PathwayStep {
        kind: query.kind,
        level: query.level,
        name: query.name,
        description: String::new(),
    };

    Ok(Json(ResolveResponse {
        normalized: normalize(&step.name),
        program_class: CLASSIFIERS
            .iter()
            .find(|c| c.is_member(&step.name))
            .map(|c| c.class.label()),
        program_url: resolve_program_url(&step.name),
        step: enrich_step(step),
    }))
}
