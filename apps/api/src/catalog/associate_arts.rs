//! Associate in Arts programs (transfer tracks) offered at MDC.
//!
//! A.A. names frequently overlap with A.S. ones ("Computer Engineering" vs
//! "Computer Engineering Technology"). A subject naming a technology or
//! technician track therefore only matches an A.A. key exactly.

use super::classifier::{ProgramClass, ProgramClassifier, SpecializationFamily};
use super::{entry, CatalogEntry};

pub const ASSOCIATE_ARTS_PROGRAMS: &[CatalogEntry] = &[
    entry("accounting", "https://www.mdc.edu/accounting/"),
    entry("agriculture", "https://www.mdc.edu/agriculture"),
    entry("anthropology", "https://www.mdc.edu/anthropology"),
    entry("landscape", "https://www.mdc.edu/landscape"),
    entry("architecture", "https://www.mdc.edu/architectureaa/"),
    entry("area & ethnic studies", "https://www.mdc.edu/ethnicstudies"),
    entry("art education", "https://www.mdc.edu/art"),
    entry("atmospheric science & meteorology", "https://www.mdc.edu/meteorology"),
    entry("biology", "https://www.mdc.edu/biology/"),
    entry("biotechnology", "https://www.mdc.edu/biotechnologyaa/"),
    entry("building construction", "https://www.mdc.edu/buildingconstruction"),
    entry("business administration", "https://www.mdc.edu/businessadministration/"),
    entry("chemistry", "https://www.mdc.edu/chemistry"),
    entry("computer arts animation", "https://www.mdc.edu/animation/"),
    entry("computer information systems", "https://www.mdc.edu/cis"),
    entry("computer science", "https://www.mdc.edu/computerscience"),
    entry("criminal justice administration", "https://www.mdc.edu/criminaljustice/"),
    entry("dance", "https://www.mdc.edu/dance"),
    entry("dietetics", "https://www.mdc.edu/dietetics"),
    entry("drama education", "https://www.mdc.edu/drama"),
    entry("economics", "https://www.mdc.edu/economics/"),
    entry("engineering - architectural", "https://www.mdc.edu/architecturalengineering"),
    entry("architectural engineering", "https://www.mdc.edu/architecturalengineering"),
    entry("engineering - biomedical", "https://www.mdc.edu/engineeringscience"),
    entry("biomedical engineering", "https://www.mdc.edu/engineeringscience"),
    entry("engineering - chemical", "https://www.mdc.edu/chemicalengineering"),
    entry("chemical engineering", "https://www.mdc.edu/chemicalengineering"),
    entry("engineering - civil", "https://www.mdc.edu/civilengineering"),
    entry("civil engineering", "https://www.mdc.edu/civilengineering"),
    entry("engineering - computer", "https://www.mdc.edu/computerengineering"),
    entry("computer engineering", "https://www.mdc.edu/computerengineering"),
    entry("engineering - electrical", "https://www.mdc.edu/electricalengineering"),
    entry("electrical engineering", "https://www.mdc.edu/electricalengineering"),
    entry("engineering - geomatics", "https://www.mdc.edu/geomatics"),
    entry("surveying and mapping", "https://www.mdc.edu/geomatics"),
    entry("engineering - industrial", "https://www.mdc.edu/industrialengineering"),
    entry("industrial engineering", "https://www.mdc.edu/industrialengineering"),
    entry("engineering - mechanical", "https://www.mdc.edu/mechanicalengineering"),
    entry("mechanical engineering", "https://www.mdc.edu/mechanicalengineering"),
    entry("engineering - ocean", "https://www.mdc.edu/oceanengineering"),
    entry("ocean engineering", "https://www.mdc.edu/oceanengineering"),
    entry(
        "english/literature & english education",
        "https://www.mdc.edu/englishliterature",
    ),
    entry("english literature", "https://www.mdc.edu/englishliterature"),
    entry("environmental sciences", "https://www.mdc.edu/environmentalsciences/"),
    entry("exercise science", "https://www.mdc.edu/exercisescience"),
    entry("foreign language", "https://www.mdc.edu/foreignlanguage"),
    entry("forestry", "https://www.mdc.edu/forestry"),
    entry("geology", "https://www.mdc.edu/geology"),
    entry("graphic or commercial arts", "https://www.mdc.edu/graphiccommercialarts"),
    entry("graphic arts", "https://www.mdc.edu/graphiccommercialarts"),
    entry(
        "health services administration",
        "https://www.mdc.edu/healthservicesadministration",
    ),
    entry("history", "https://www.mdc.edu/history"),
    entry(
        "hospitality administration/travel & tourism",
        "https://www.mdc.edu/hospitalityadministration/",
    ),
    entry("interior design", "https://www.mdc.edu/interiordesign/"),
    entry("international relations", "https://www.mdc.edu/internationalrelations/"),
    entry("mass communications/journalism", "https://www.mdc.edu/journalism/"),
    entry("mathematics", "https://www.mdc.edu/mathematics"),
    entry("music education", "https://www.mdc.edu/music"),
    entry("philosophy", "https://www.mdc.edu/philosophy"),
    entry(
        "physical education teaching & coaching",
        "https://www.mdc.edu/physicaleducation",
    ),
    entry("physics", "https://www.mdc.edu/physics"),
    entry("political science", "https://www.mdc.edu/politicalscience"),
    entry("pre-bachelor of arts", "https://www.mdc.edu/prebachelor"),
    entry("pre-law", "https://www.mdc.edu/prelaw"),
    entry("pre-medical technology", "https://www.mdc.edu/premed"),
    entry("pre-medical science/dentistry", "https://www.mdc.edu/predentistry"),
    entry("pre-dentistry", "https://www.mdc.edu/predentistry"),
    entry("pre-nursing", "https://www.mdc.edu/prenursing"),
    entry("pre-occupational therapy", "https://www.mdc.edu/preoccupationaltherapy"),
    entry("pre-optometry", "https://www.mdc.edu/preoptometry"),
    entry("pre-pharmacy", "https://www.mdc.edu/prepharmacy"),
    entry("pre-physical therapy", "https://www.mdc.edu/prephysicaltherapy"),
    entry("pre-veterinary medicine", "https://www.mdc.edu/prevet"),
    entry("psychology", "https://www.mdc.edu/psychology/"),
    entry("public administration", "https://www.mdc.edu/publicadministration"),
    entry("recreation", "https://www.mdc.edu/recreation"),
    entry("religion", "https://www.mdc.edu/religion"),
    entry("social work", "https://www.mdc.edu/socialwork"),
    entry("sociology", "https://www.mdc.edu/sociology/"),
    entry("speech pathology & audiology", "https://www.mdc.edu/speechpathology"),
    entry("teaching (elementary)", "https://www.mdc.edu/teachingelementary"),
    entry("teaching elementary", "https://www.mdc.edu/teachingelementary"),
    entry(
        "teaching (exceptional student education)",
        "https://www.mdc.edu/teachingexceptionalstudent",
    ),
    entry(
        "teaching exceptional student education",
        "https://www.mdc.edu/teachingexceptionalstudent",
    ),
    entry(
        "teaching (pre-elementary/early childhood)",
        "https://www.mdc.edu/teachingearlychildhood",
    ),
    entry("teaching early childhood", "https://www.mdc.edu/teachingearlychildhood"),
    entry("teaching (secondary)", "https://www.mdc.edu/teachingsecondary"),
    entry("teaching secondary", "https://www.mdc.edu/teachingsecondary"),
];

/// Subjects of "Teaching Secondary (...)".
pub const TEACHING_SECONDARY_PROGRAMS: &[CatalogEntry] = &[
    entry("biology", "https://www.mdc.edu/teachingsecondarybiology"),
    entry("chemistry", "https://www.mdc.edu/teachingsecondarychemistry"),
    entry("earth/space", "https://www.mdc.edu/teachingsecondaryearthspace"),
    entry("earth space", "https://www.mdc.edu/teachingsecondaryearthspace"),
    entry("english/foreign languages", "https://www.mdc.edu/teachingsecondaryenglish"),
    entry("mathematics education", "https://www.mdc.edu/teachingsecondarymath"),
    entry("physics", "https://www.mdc.edu/teachingsecondaryphysics"),
    entry("social science", "https://www.mdc.edu/teachingsecondarysocialscience"),
    entry(
        "vocational: business, technical, home",
        "https://www.mdc.edu/teachingsecondaryvocational",
    ),
];

pub static ASSOCIATE_ARTS: ProgramClassifier = ProgramClassifier {
    class: ProgramClass::AssociateInArts,
    prefixes: &["associate in arts in"],
    foreign_prefixes: &["associate in science", "bachelor of"],
    claimed_prefixes: &[],
    claim_terms: &[],
    prefix_required: false,
    table: ASSOCIATE_ARTS_PROGRAMS,
    families: &[SpecializationFamily {
        stem: "teaching secondary",
        table: TEACHING_SECONDARY_PROGRAMS,
    }],
    exact_only_terms: &["technology", "technician"],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::assert_well_formed;

    #[test]
    fn test_tables_are_well_formed() {
        assert_well_formed(ASSOCIATE_ARTS_PROGRAMS);
        assert_well_formed(TEACHING_SECONDARY_PROGRAMS);
    }

    #[test]
    fn test_engineering_specialization_keeps_first_option() {
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Engineering - Mechanical or Civil"),
            Some("https://www.mdc.edu/mechanicalengineering")
        );
    }

    #[test]
    fn test_engineering_specialization_with_parenthetical() {
        assert_eq!(
            ASSOCIATE_ARTS
                .resolve_url("Associate in Arts in Engineering - Geomatics (Surveying and Mapping)"),
            Some("https://www.mdc.edu/geomatics")
        );
    }

    #[test]
    fn test_technology_track_is_not_member() {
        assert!(!ASSOCIATE_ARTS.is_member("Associate in Arts in Cybersecurity Technology"));
        assert!(!ASSOCIATE_ARTS.is_member("Associate in Arts in Biotechnology Technician"));
    }

    #[test]
    fn test_exact_key_with_technology_still_matches() {
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Biotechnology"),
            Some("https://www.mdc.edu/biotechnologyaa/")
        );
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Pre-Medical Technology"),
            Some("https://www.mdc.edu/premed")
        );
    }

    #[test]
    fn test_landscape_architecture_is_not_architecture() {
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Landscape Architecture"),
            Some("https://www.mdc.edu/landscape")
        );
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Architecture"),
            Some("https://www.mdc.edu/architectureaa/")
        );
    }

    #[test]
    fn test_teaching_secondary_subjects() {
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Teaching Secondary (Biology)"),
            Some("https://www.mdc.edu/teachingsecondarybiology")
        );
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Teaching Secondary Physics"),
            Some("https://www.mdc.edu/teachingsecondaryphysics")
        );
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url(
                "Associate in Arts in Teaching Secondary (Vocational: Business, Technical, Home)"
            ),
            Some("https://www.mdc.edu/teachingsecondaryvocational")
        );
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Teaching Secondary (Mathematics)"),
            Some("https://www.mdc.edu/teachingsecondarymath")
        );
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Teaching Secondary"),
            Some("https://www.mdc.edu/teachingsecondary")
        );
    }

    #[test]
    fn test_plain_subjects() {
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Psychology"),
            Some("https://www.mdc.edu/psychology/")
        );
        assert!(ASSOCIATE_ARTS.is_member("Associate in Arts in Business Administration"));
        assert_eq!(
            ASSOCIATE_ARTS.resolve_url("Associate in Arts in Pre-Medical Science/Dentistry"),
            Some("https://www.mdc.edu/predentistry")
        );
    }

    #[test]
    fn test_other_degree_classes_are_refused() {
        assert_eq!(ASSOCIATE_ARTS.resolve_url("Associate in Science in Nursing"), None);
        assert_eq!(ASSOCIATE_ARTS.resolve_url("Bachelor of Science in Biology"), None);
    }
}
