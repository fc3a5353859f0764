//! Catalog Resolver: maps free-text program and exam names produced by the
//! pathway generator onto MDC's static program catalog.
//!
//! Everything in this module is a pure function over immutable tables: no I/O,
//! no shared mutable state, safe to call from any number of handlers at once.
//! A miss is never an error; it is reported as `None`, `false`, or an unmatched
//! [`ResolvedLink`].
//!
//! Matching is containment-based and therefore ORDER-SENSITIVE:
//! - class precedence: Bachelor's → Associate in Science → Associate in Arts
//! - table order: first matching entry wins, specific keys listed before generic
//! - certification lookup: exact phrase before containment

pub mod associate_arts;
pub mod associate_science;
pub mod bachelors;
pub mod certification;
pub mod classifier;
pub mod dispatcher;
pub mod normalizer;
pub mod transfer;

use serde::{Deserialize, Serialize};

pub use certification::{resolve_certification, CertificationEntry};
pub use dispatcher::{resolve_program_url, resolve_step_link};
pub use normalizer::normalize;

/// Root of every program page on the MDC site.
pub const MDC_BASE_URL: &str = "https://www.mdc.edu/";

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// One row of a program table: lower-case subject phrase → program page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub url: &'static str,
}

pub(crate) const fn entry(key: &'static str, url: &'static str) -> CatalogEntry {
    CatalogEntry { key, url }
}

/// Kind of a pathway step, as emitted by the generator in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Degree,
    Transfer,
    Internship,
    Exam,
}

/// A single step of a generated pathway. Produced only by the generator;
/// the resolver reads `name` (and `level` for link gating) and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayStep {
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(default)]
    pub level: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Outcome of link resolution for one step.
/// `matched = false` means no navigation link should be offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub matched: bool,
    pub url: Option<String>,
}

impl ResolvedLink {
    pub fn matched(url: impl Into<String>) -> Self {
        Self {
            matched: true,
            url: Some(url.into()),
        }
    }

    pub fn unmatched() -> Self {
        Self {
            matched: false,
            url: None,
        }
    }
}
