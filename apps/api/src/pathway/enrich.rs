//! Step enrichment: attaches catalog links, exam requirements and transfer
//! recommendations to generated steps before they are returned to clients.

use serde::Serialize;

use crate::catalog::transfer::{transfer_info, TransferInfo};
use crate::catalog::{
    resolve_certification, resolve_step_link, CertificationEntry, PathwayStep, ResolvedLink,
    StepKind,
};
use crate::pathway::models::PathwayData;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedStep {
    #[serde(flatten)]
    pub step: PathwayStep,
    pub program_link: ResolvedLink,
    pub certification: Option<&'static CertificationEntry>,
    pub transfer: Option<TransferInfo>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPathway {
    pub title: String,
    pub is_primary: bool,
    pub steps: Vec<EnrichedStep>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayResponse {
    pub title: String,
    pub primary_index: usize,
    pub pathways: Vec<EnrichedPathway>,
}

pub fn enrich_step(step: PathwayStep) -> EnrichedStep {
    let program_link = resolve_step_link(&step);
    let certification = match step.kind {
        StepKind::Exam => resolve_certification(&step.name),
        _ => None,
    };
    let transfer = match step.kind {
        StepKind::Transfer => Some(transfer_info()),
        _ => None,
    };

    EnrichedStep {
        step,
        program_link,
        certification,
        transfer,
    }
}

pub fn enrich(data: PathwayData) -> PathwayResponse {
    let primary_index = data.primary_index();
    let pathways = data
        .pathways
        .into_iter()
        .map(|pathway| EnrichedPathway {
            title: pathway.title,
            is_primary: pathway.is_primary,
            steps: pathway.steps.into_iter().map(enrich_step).collect(),
        })
        .collect();

    PathwayResponse {
        title: data.title,
        primary_index,
        pathways,
    }
}
