//! URL Dispatcher: one step name in, one program URL out.
//!
//! Class precedence is Bachelor's → A.S. → A.A.; A.S. must run before A.A. so
//! technology subjects are claimed by the A.S. table before A.A. containment
//! can see them. Never fails: a miss falls through to a guessed slug URL.

use tracing::debug;

use super::associate_arts::ASSOCIATE_ARTS;
use super::associate_science::ASSOCIATE_SCIENCE;
use super::bachelors::BACHELORS;
use super::classifier::ProgramClassifier;
use super::normalizer::{first_alternative, normalize};
use super::{PathwayStep, ResolvedLink, StepKind, MDC_BASE_URL};

/// Classifiers in dispatch order.
pub static CLASSIFIERS: [&ProgramClassifier; 3] = [&BACHELORS, &ASSOCIATE_SCIENCE, &ASSOCIATE_ARTS];

/// Degree-level prefixes removed from the original name before slugging,
/// applied in this order.
const SLUG_PREFIXES: &[&str] = &[
    "associate in arts in ",
    "associate in science in ",
    "associate in ",
    "bachelor of science in ",
    "bachelor of arts in ",
    "bachelor of applied sciences in ",
    "bachelor of applied science in ",
    "bachelor of ",
    "certificate in ",
    "certificate ",
];

const SLUG_ENGINEERING_MARKER: &str = "engineering - ";

/// Resolves a program name to its catalog URL, or guesses one from its slug.
pub fn resolve_program_url(name: &str) -> String {
    // catalog titles like "Transportation and Logistics" must be seen unsplit
    if let Some(url) = CLASSIFIERS.iter().find_map(|c| c.resolve_protected(name)) {
        return url.to_string();
    }

    let candidate = normalize(name);
    if let Some(url) = CLASSIFIERS.iter().find_map(|c| c.resolve_url(&candidate)) {
        return url.to_string();
    }

    let url = fallback_url(name);
    debug!(name = %name, url = %url, "program not in catalog, using slug");
    url
}

pub fn resolve_step_url(step: &PathwayStep) -> String {
    resolve_program_url(&step.name)
}

/// Whether a navigation link should be offered for `step`, and where it goes.
///
/// Only degree steps get links. A.S./A.A. links require an MDC level and a
/// catalog match; certificates always get the guessed URL; bachelor's links
/// require a catalog match.
pub fn resolve_step_link(step: &PathwayStep) -> ResolvedLink {
    if step.kind != StepKind::Degree || !offers_program_link(step) {
        return ResolvedLink::unmatched();
    }
    ResolvedLink::matched(resolve_step_url(step))
}

fn offers_program_link(step: &PathwayStep) -> bool {
    let name = step.name.to_lowercase();
    let mentions_bachelor = name.contains("bachelor");
    let at_mdc = step.level.to_lowercase().contains("mdc");

    (at_mdc
        && !mentions_bachelor
        && (ASSOCIATE_SCIENCE.is_member(&step.name) || ASSOCIATE_ARTS.is_member(&step.name)))
        || name.contains("certificate")
        || (mentions_bachelor && BACHELORS.is_member(&step.name))
}

/// Slug heuristic over the original (case-preserved) name.
fn fallback_url(name: &str) -> String {
    let mut residual = first_alternative(name);
    for prefix in SLUG_PREFIXES {
        residual = strip_prefix_ignore_case(residual, prefix).trim_start();
    }
    let residual = residual.trim();

    let title = match find_ignore_ascii_case(residual, SLUG_ENGINEERING_MARKER) {
        Some(at) => {
            let specialization = first_alternative(&residual[at + SLUG_ENGINEERING_MARKER.len()..]);
            if specialization.is_empty() {
                residual.to_string()
            } else {
                format!("{specialization} Engineering")
            }
        }
        None => residual.to_string(),
    };

    let slug: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if slug.is_empty() {
        MDC_BASE_URL.to_string()
    } else {
        format!("{MDC_BASE_URL}{slug}/")
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> &'a str {
    match text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &text[prefix.len()..],
        _ => text,
    }
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}
