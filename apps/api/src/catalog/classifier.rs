//! Program Classifiers: one matcher, configured once per program class.
//!
//! Resolution of a name against a class:
//! 1. canonicalize (trim, lower-case, collapse whitespace, fold en/em dashes)
//! 2. refuse names carrying another class's degree prefix, unless the subject
//!    names one of the class's claim terms ("associate in arts in cybersecurity
//!    technology" is still an A.S. program)
//! 3. strip the class prefix ("associate in science in", ...)
//! 4. catalog titles containing a separator word ("transportation and
//!    logistics") are matched before any alternation split, but only when the
//!    title is the first option listed
//! 5. specialization families ("teaching secondary (biology)") use their own table
//! 6. "engineering - X or Y" keeps the first specialization, anything else keeps
//!    the first alternative of the whole residual
//! 7. ordered bidirectional containment against the class table; subjects with an
//!    exact-only term ("technology" for A.A.) may only match a key exactly

use serde::Serialize;
use tracing::debug;

use super::normalizer::{first_alternative, has_separator, starts_with_separator};
use super::CatalogEntry;

const ENGINEERING_MARKER: &str = "engineering -";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramClass {
    Bachelors,
    AssociateInScience,
    AssociateInArts,
}

impl ProgramClass {
    pub fn label(self) -> &'static str {
        match self {
            ProgramClass::Bachelors => "Bachelor's",
            ProgramClass::AssociateInScience => "A.S.",
            ProgramClass::AssociateInArts => "A.A.",
        }
    }
}

/// Programs sharing a title stem that differ only in a trailing subject,
/// e.g. "Teaching Secondary (Biology)". Their subjects live in a separate table
/// so they never collide with the class's plain subject keys.
#[derive(Debug)]
pub struct SpecializationFamily {
    pub stem: &'static str,
    pub table: &'static [CatalogEntry],
}

#[derive(Debug)]
pub struct ProgramClassifier {
    pub class: ProgramClass,
    /// Degree prefixes owned by this class, longest first.
    pub prefixes: &'static [&'static str],
    /// Names starting with one of these belong to another class.
    pub foreign_prefixes: &'static [&'static str],
    /// Foreign prefixes whose names are still claimed when the subject
    /// contains one of `claim_terms`.
    pub claimed_prefixes: &'static [&'static str],
    pub claim_terms: &'static [&'static str],
    /// Bare subjects (no own prefix) are only considered when this is false.
    pub prefix_required: bool,
    pub table: &'static [CatalogEntry],
    pub families: &'static [SpecializationFamily],
    /// Subjects containing one of these terms only match a key exactly.
    pub exact_only_terms: &'static [&'static str],
}

impl ProgramClassifier {
    /// True only if `name` carries this class's prefix, has a non-empty subject
    /// after it, and that subject resolves to a catalog URL.
    pub fn is_member(&self, name: &str) -> bool {
        let lowered = canonicalize(name);
        match strip_word_prefix(&lowered, self.prefixes) {
            Some(subject) if !subject.is_empty() => self.resolve_url(name).is_some(),
            _ => false,
        }
    }

    /// Resolves `name` to this class's program page, or `None` on a miss.
    pub fn resolve_url(&self, name: &str) -> Option<&'static str> {
        let lowered = canonicalize(name);
        let residual = self.residual(&lowered)?;

        if let Some(url) = self.resolve_protected_residual(residual) {
            return Some(url);
        }
        if let Some(url) = self.resolve_family(residual) {
            return Some(url);
        }

        let subject = subject_of(residual);
        let found = find(self.table, &subject, self.loose_allowed(&subject)).map(|e| e.url);
        if found.is_none() {
            debug!(class = self.class.label(), subject = %subject, "no catalog match");
        }
        found
    }

    /// Matches only exact keys and separator-bearing catalog titles, without
    /// applying the alternation split. Used by the dispatcher before it splits
    /// the whole step name.
    pub fn resolve_protected(&self, name: &str) -> Option<&'static str> {
        let lowered = canonicalize(name);
        let residual = self.residual(&lowered)?;
        self.resolve_protected_residual(residual)
    }

    fn residual<'a>(&self, lowered: &'a str) -> Option<&'a str> {
        if lowered.is_empty() {
            return None;
        }
        if let Some(subject) = self.claimed_subject(lowered) {
            return (!subject.is_empty()).then_some(subject);
        }
        if self
            .foreign_prefixes
            .iter()
            .any(|prefix| lowered.starts_with(prefix))
        {
            return None;
        }

        let residual = match strip_word_prefix(lowered, self.prefixes) {
            Some(subject) => subject,
            None if self.prefix_required => return None,
            None => lowered,
        };

        (!residual.is_empty()).then_some(residual)
    }

    fn claimed_subject<'a>(&self, lowered: &'a str) -> Option<&'a str> {
        let subject = strip_word_prefix(lowered, self.claimed_prefixes)?;
        self.claim_terms
            .iter()
            .any(|term| subject.contains(term))
            .then_some(subject)
    }

    fn resolve_protected_residual(&self, residual: &str) -> Option<&'static str> {
        find_protected(self.table, residual, self.loose_allowed(residual)).map(|e| e.url)
    }

    fn resolve_family(&self, residual: &str) -> Option<&'static str> {
        self.families.iter().find_map(|family| {
            let rest = residual.strip_prefix(family.stem)?;
            let subject = trim_specialization(rest);
            if subject.is_empty() {
                return None;
            }
            let loose = self.loose_allowed(subject);
            find_protected(family.table, subject, loose)
                .or_else(|| find(family.table, trim_specialization(first_alternative(subject)), loose))
                .map(|e| e.url)
        })
    }

    fn loose_allowed(&self, text: &str) -> bool {
        !self.exact_only_terms.iter().any(|term| text.contains(term))
    }
}

/// Trim, lower-case, collapse inner whitespace, and fold en/em dashes to '-'.
pub(crate) fn canonicalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace(['\u{2013}', '\u{2014}'], "-")
}

fn strip_word_prefix<'a>(lowered: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| {
        let rest = lowered.strip_prefix(prefix)?;
        // "associate in arts inorganic" is not the A.A. prefix
        (rest.is_empty() || rest.starts_with(char::is_whitespace)).then(|| rest.trim())
    })
}

/// Reduces a residual to the single subject used for table lookup.
fn subject_of(residual: &str) -> String {
    if let Some((_, specialization)) = residual.split_once(ENGINEERING_MARKER) {
        let first = first_alternative(specialization);
        if first.is_empty() {
            return residual.to_string();
        }
        return format!("{ENGINEERING_MARKER} {first}");
    }
    first_alternative(residual).to_string()
}

fn trim_specialization(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '-' | ':'))
}

/// Ordered lookup: exact key, or (when `loose`) containment in either direction.
/// First entry in table order wins.
fn find(table: &'static [CatalogEntry], subject: &str, loose: bool) -> Option<&'static CatalogEntry> {
    if subject.is_empty() {
        return None;
    }
    table.iter().find(|e| {
        e.key == subject || (loose && (subject.contains(e.key) || e.key.contains(subject)))
    })
}

/// Exact key, or (when `loose`) a key containing a separator word that opens the
/// unsplit text as its first listed option.
fn find_protected(
    table: &'static [CatalogEntry],
    text: &str,
    loose: bool,
) -> Option<&'static CatalogEntry> {
    if text.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|e| e.key == text || (loose && has_separator(e.key) && leads_with(text, e.key)))
}

/// `key` opens `text` and is followed by nothing or by another alternative.
fn leads_with(text: &str, key: &str) -> bool {
    text.strip_prefix(key)
        .is_some_and(|rest| rest.is_empty() || starts_with_separator(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry;

    const FIXTURE: &[CatalogEntry] = &[
        entry("leather goods", "https://example.test/leather/"),
        entry("pottery", "https://example.test/pottery/"),
        entry("glass and ceramics", "https://example.test/glass/"),
        entry("engineering - marine", "https://example.test/marine/"),
        entry("engineering - naval", "https://example.test/naval/"),
        entry("weaving technology", "https://example.test/weaving/"),
    ];

    const FAMILY: &[CatalogEntry] = &[
        entry("history", "https://example.test/teach-history/"),
        entry("art, music, drama", "https://example.test/teach-arts/"),
    ];

    static FIXTURE_CLASSIFIER: ProgramClassifier = ProgramClassifier {
        class: ProgramClass::AssociateInArts,
        prefixes: &["associate in crafts in"],
        foreign_prefixes: &["associate in trades"],
        claimed_prefixes: &["associate in trades in"],
        claim_terms: &["studio"],
        prefix_required: false,
        table: FIXTURE,
        families: &[SpecializationFamily {
            stem: "teaching crafts",
            table: FAMILY,
        }],
        exact_only_terms: &["technology"],
    };

    static PREFIXED_ONLY: ProgramClassifier = ProgramClassifier {
        class: ProgramClass::Bachelors,
        prefixes: &["bachelor of crafts in"],
        foreign_prefixes: &[],
        claimed_prefixes: &[],
        claim_terms: &[],
        prefix_required: true,
        table: FIXTURE,
        families: &[],
        exact_only_terms: &[],
    };

    #[test]
    fn test_canonicalize_collapses_whitespace_and_dashes() {
        assert_eq!(
            canonicalize("  Supply Chain  Management \u{2013} Project "),
            "supply chain management - project"
        );
    }

    #[test]
    fn test_prefix_is_stripped_case_insensitively() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("ASSOCIATE IN CRAFTS IN Pottery"),
            Some("https://example.test/pottery/")
        );
    }

    #[test]
    fn test_bare_subject_resolves_when_prefix_optional() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Leather Goods"),
            Some("https://example.test/leather/")
        );
        assert!(!FIXTURE_CLASSIFIER.is_member("Leather Goods"));
    }

    #[test]
    fn test_bare_subject_refused_when_prefix_required() {
        assert_eq!(PREFIXED_ONLY.resolve_url("Pottery"), None);
        assert_eq!(
            PREFIXED_ONLY.resolve_url("Bachelor of Crafts in Pottery"),
            Some("https://example.test/pottery/")
        );
    }

    #[test]
    fn test_foreign_prefix_never_matches() {
        assert_eq!(FIXTURE_CLASSIFIER.resolve_url("Associate in Trades in Pottery"), None);
    }

    #[test]
    fn test_foreign_prefix_claimed_by_claim_term() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Trades in Studio Pottery"),
            Some("https://example.test/pottery/")
        );
        // claimed names are resolvable but never members
        assert!(!FIXTURE_CLASSIFIER.is_member("Associate in Trades in Studio Pottery"));
    }

    #[test]
    fn test_prefix_must_end_on_word_boundary() {
        // "inleather" is not "in leather": the whole string is treated as a bare subject
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("associate in crafts inleather goods"),
            Some("https://example.test/leather/")
        );
        assert!(!FIXTURE_CLASSIFIER.is_member("associate in crafts inleather goods"));
    }

    #[test]
    fn test_containment_works_both_ways() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Studio Pottery"),
            Some("https://example.test/pottery/")
        );
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Leather"),
            Some("https://example.test/leather/")
        );
    }

    #[test]
    fn test_first_alternative_is_used() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Pottery or Leather Goods"),
            Some("https://example.test/pottery/")
        );
    }

    #[test]
    fn test_separator_title_is_matched_before_split() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Glass and Ceramics"),
            Some("https://example.test/glass/")
        );
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_protected("Associate in Crafts in Glass and Ceramics"),
            Some("https://example.test/glass/")
        );
    }

    #[test]
    fn test_separator_title_listed_second_loses_to_first_option() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Pottery or Glass and Ceramics"),
            Some("https://example.test/pottery/")
        );
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_protected("Associate in Crafts in Pottery or Glass and Ceramics"),
            None
        );
    }

    #[test]
    fn test_separator_title_listed_first_is_kept_whole() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Glass and Ceramics or Pottery"),
            Some("https://example.test/glass/")
        );
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_protected("Glass and Ceramics, Leather Goods"),
            Some("https://example.test/glass/")
        );
        // a longer title that merely starts with the key is not the key
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_protected("Glass and Ceramics Restoration"),
            None
        );
    }

    #[test]
    fn test_resolve_protected_ignores_plain_containment() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_protected("Associate in Crafts in Studio Pottery"),
            None
        );
    }

    #[test]
    fn test_engineering_specialization_takes_first_option() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Engineering - Naval or Marine"),
            Some("https://example.test/naval/")
        );
    }

    #[test]
    fn test_exact_only_term_blocks_loose_match() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Pottery Technology"),
            None
        );
        // exact keys are never suppressed
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Weaving Technology"),
            Some("https://example.test/weaving/")
        );
    }

    #[test]
    fn test_family_subject_uses_family_table() {
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Teaching Crafts (History)"),
            Some("https://example.test/teach-history/")
        );
        assert_eq!(
            FIXTURE_CLASSIFIER.resolve_url("Associate in Crafts in Teaching Crafts (Art, Music, Drama)"),
            Some("https://example.test/teach-arts/")
        );
    }

    #[test]
    fn test_degenerate_names_never_match() {
        for name in ["", "   ", "Associate in Crafts in", "Associate in Crafts in   ", ", "] {
            assert_eq!(FIXTURE_CLASSIFIER.resolve_url(name), None, "{name:?}");
            assert!(!FIXTURE_CLASSIFIER.is_member(name), "{name:?}");
        }
    }
}
