//! Associate in Science programs offered at MDC.

use super::classifier::{ProgramClass, ProgramClassifier};
use super::{entry, CatalogEntry};

/// Specializations are listed ahead of the general program they extend, so the
/// first hit in table order is always the most specific one.
pub const ASSOCIATE_SCIENCE_PROGRAMS: &[CatalogEntry] = &[
    entry("accounting technology", "https://www.mdc.edu/accountingtechnology/"),
    entry("animation & game art", "https://www.mdc.edu/animationgameart/"),
    entry("animation and game art", "https://www.mdc.edu/animationgameart/"),
    entry("applied artificial intelligence", "https://www.mdc.edu/appliedai/"),
    entry(
        "architectural design and construction technology",
        "https://www.mdc.edu/architecturaldesign/",
    ),
    entry("aviation administration", "https://www.mdc.edu/aviationadministration/"),
    entry(
        "aviation maintenance management",
        "https://www.mdc.edu/aviationmaintenance/",
    ),
    entry(
        "biomedical engineering technology",
        "https://www.mdc.edu/biomedicalengineering",
    ),
    entry("bioinformatics", "https://www.mdc.edu/bioinformatics"),
    entry("chemical technology", "https://www.mdc.edu/biochemicalengineering"),
    entry("biotechnology", "https://www.mdc.edu/biotechnologyas"),
    entry(
        "building construction technology",
        "https://www.mdc.edu/constructiontechnology/",
    ),
    entry("business administration", "https://www.mdc.edu/businessadministrationas/"),
    entry(
        "business intelligence specialist",
        "https://www.mdc.edu/businessintelligence/",
    ),
    entry("civil engineering technology", "https://www.mdc.edu/civilengineeringas"),
    entry("clinical laboratory science", "https://www.mdc.edu/medicaltechnology/"),
    entry(
        "computer crime investigation",
        "https://www.mdc.edu/computercrimeinvestigation/",
    ),
    entry("computer engineering technology", "https://www.mdc.edu/computerengineeringas"),
    entry(
        "computer information technology",
        "https://www.mdc.edu/computerinformationtechnology/",
    ),
    entry(
        "computer programming and analysis - business application programming",
        "https://www.mdc.edu/businessapplications",
    ),
    entry(
        "computer programming and analysis - internet of things (iot) applications",
        "https://www.mdc.edu/internetofthings/",
    ),
    entry(
        "computer programming and analysis - mobile applications development",
        "https://www.mdc.edu/mobileappdeveloper",
    ),
    entry(
        "crime scene technology - crime scene investigation",
        "https://www.mdc.edu/crimescenetechnologycsi/",
    ),
    entry(
        "crime scene technology - forensic science",
        "https://www.mdc.edu/crimescenetechnologyforensic/",
    ),
    entry(
        "criminal justice technology",
        "https://www.mdc.edu/criminaljusticetechnology/",
    ),
    entry("culinary arts management", "https://www.mdc.edu/culinaryartsmanagement/"),
    entry("cybersecurity", "https://www.mdc.edu/cybersecurityas"),
    entry(
        "database technology - oracle database administration",
        "https://www.mdc.edu/oracledba",
    ),
    entry("dental hygiene", "https://www.mdc.edu/dentalhygiene/"),
    entry("diagnostic medical sonography", "https://www.mdc.edu/sonography/"),
    entry("infant toddler", "https://www.mdc.edu/earlychildhoodinfant/"),
    entry("preschool", "https://www.mdc.edu/earlychildhoodpreschool/"),
    entry("administrators", "https://www.mdc.edu/earlychildhoodadministrator/"),
    entry("early childhood education", "https://www.mdc.edu/earlychildhoodas/"),
    entry(
        "electronics engineering technology",
        "https://www.mdc.edu/electronicsengineeringtechnology",
    ),
    entry("emergency medical services", "https://www.mdc.edu/ems/"),
    entry("entrepreneurship", "https://www.mdc.edu/entrepreneurship/"),
    entry("fashion design", "https://www.mdc.edu/fashiondesign/"),
    entry("fashion merchandising", "https://www.mdc.edu/fashionmerchandising/"),
    entry("film production technology", "https://www.mdc.edu/filmproduction/"),
    entry("financial services - banking", "https://www.mdc.edu/banking/"),
    entry(
        "financial services - wealth management",
        "https://www.mdc.edu/financialmanagement",
    ),
    entry("fire science technology", "https://www.mdc.edu/firescience/"),
    entry("funeral service education", "https://www.mdc.edu/funeralservices/"),
    entry("game development & design", "https://www.mdc.edu/gamedevelopment/"),
    entry("game development and design", "https://www.mdc.edu/gamedevelopment/"),
    entry("graphic design technology", "https://www.mdc.edu/graphicdesign/"),
    entry("graphic internet technology", "https://www.mdc.edu/graphicinternet/"),
    entry("health information technology", "https://www.mdc.edu/healthinformation/"),
    entry(
        "health science - health services management",
        "https://www.mdc.edu/healthservicesas",
    ),
    entry("health sciences", "https://www.mdc.edu/healthsciencesas"),
    entry("histologic technology", "https://www.mdc.edu/histotechnology/"),
    entry("hospitality & tourism management", "https://www.mdc.edu/tourismmanagement/"),
    entry("hospitality and tourism management", "https://www.mdc.edu/tourismmanagement/"),
    entry(
        "interior design technology",
        "https://www.mdc.edu/interiordesigntechnology/",
    ),
    entry("landscape & horticulture technology", "https://www.mdc.edu/landscapeas"),
    entry("landscape and horticulture technology", "https://www.mdc.edu/landscapeas"),
    entry("marketing", "https://www.mdc.edu/marketing/"),
    entry(
        "music business - management",
        "https://www.mdc.edu/musicbusinessmanagement/",
    ),
    entry(
        "music business - performance",
        "https://www.mdc.edu/musicbusinessproduction/",
    ),
    entry(
        "networking services technology - enterprise cloud computing",
        "https://www.mdc.edu/cloudcomputing/",
    ),
    entry(
        "networking services technology - network infrastructure",
        "https://www.mdc.edu/networkinfrastructure/",
    ),
    entry("nuclear medicine technology", "https://www.mdc.edu/nuclearmedicine/"),
    entry("nursing", "https://www.mdc.edu/nursingrn/"),
    entry("opticianry", "https://www.mdc.edu/opticianry/"),
    entry("paralegal studies", "https://www.mdc.edu/paralegal/"),
    entry("photographic technology", "https://www.mdc.edu/photography/"),
    entry(
        "physical therapist assistant",
        "https://www.mdc.edu/physicaltherapistassistant/",
    ),
    entry("professional pilot technology", "https://www.mdc.edu/professionalpilot/"),
    entry("radiation therapy", "https://www.mdc.edu/radiation"),
    entry(
        "radio & television broadcast programming",
        "https://www.mdc.edu/broadcast/",
    ),
    entry(
        "radio and television broadcast programming",
        "https://www.mdc.edu/broadcast/",
    ),
    entry("radiography", "https://www.mdc.edu/radiography/"),
    entry("respiratory care", "https://www.mdc.edu/respiratorycare/"),
    entry("sign language interpretation", "https://www.mdc.edu/signlanguage/"),
    entry(
        "social and human services - generalist",
        "https://www.mdc.edu/humanservices",
    ),
    entry(
        "social and human services - addictions studies",
        "https://www.mdc.edu/addictionstudies/",
    ),
    entry("sport management", "https://www.mdc.edu/sportmanagement"),
    entry("surgical technology", "https://www.mdc.edu/surgicaltechnology/"),
    entry(
        "translation/interpretation studies",
        "https://www.mdc.edu/translationinterpretation/",
    ),
    entry(
        "translation interpretation studies",
        "https://www.mdc.edu/translationinterpretation/",
    ),
    entry(
        "transportation and logistics",
        "https://www.mdc.edu/transportationlogistics/",
    ),
    entry("veterinary technology", "https://www.mdc.edu/veterinarytechnology/"),
];

pub static ASSOCIATE_SCIENCE: ProgramClassifier = ProgramClassifier {
    class: ProgramClass::AssociateInScience,
    prefixes: &["associate in science in"],
    foreign_prefixes: &["associate in arts", "bachelor of"],
    // A.A.-labelled technology programs are A.S. programs
    claimed_prefixes: &["associate in arts in"],
    claim_terms: &["technology", "technician"],
    prefix_required: false,
    table: ASSOCIATE_SCIENCE_PROGRAMS,
    families: &[],
    exact_only_terms: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::assert_well_formed;

    #[test]
    fn test_table_is_well_formed() {
        assert_well_formed(ASSOCIATE_SCIENCE_PROGRAMS);
    }

    #[test]
    fn test_nursing() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Nursing"),
            Some("https://www.mdc.edu/nursingrn/")
        );
        assert!(ASSOCIATE_SCIENCE.is_member("Associate in Science in Nursing"));
    }

    #[test]
    fn test_nursing_track_variants_resolve_to_nursing() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Nursing - R.N. (Accelerated)"),
            Some("https://www.mdc.edu/nursingrn/")
        );
    }

    #[test]
    fn test_bare_subject_resolves_but_is_not_member() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Dental Hygiene"),
            Some("https://www.mdc.edu/dentalhygiene/")
        );
        assert!(!ASSOCIATE_SCIENCE.is_member("Dental Hygiene"));
    }

    #[test]
    fn test_other_degree_classes_are_refused() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Arts in Business Administration"),
            None
        );
        assert_eq!(ASSOCIATE_SCIENCE.resolve_url("Bachelor of Science in Nursing"), None);
        assert!(!ASSOCIATE_SCIENCE.is_member("Associate in Arts in Psychology"));
    }

    #[test]
    fn test_technology_program_labelled_associate_in_arts_is_claimed() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Arts in Cybersecurity Technology"),
            Some("https://www.mdc.edu/cybersecurityas")
        );
        assert!(!ASSOCIATE_SCIENCE.is_member("Associate in Arts in Cybersecurity Technology"));
        // without an A.S. indicator the A.A. label is respected
        assert_eq!(ASSOCIATE_SCIENCE.resolve_url("Associate in Arts in Pre-Nursing"), None);
    }

    #[test]
    fn test_separator_title_listed_second_does_not_win() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Nursing or Transportation and Logistics"),
            Some("https://www.mdc.edu/nursingrn/")
        );
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Transportation and Logistics or Nursing"),
            Some("https://www.mdc.edu/transportationlogistics/")
        );
    }

    #[test]
    fn test_separator_titles_are_protected() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Transportation and Logistics"),
            Some("https://www.mdc.edu/transportationlogistics/")
        );
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url(
                "Associate in Science in Computer Programming and Analysis - Mobile Applications Development"
            ),
            Some("https://www.mdc.edu/mobileappdeveloper")
        );
    }

    #[test]
    fn test_specializations_win_over_general_program() {
        assert_eq!(
            ASSOCIATE_SCIENCE
                .resolve_url("Associate in Science in Early Childhood Education - Infant Toddler"),
            Some("https://www.mdc.edu/earlychildhoodinfant/")
        );
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Early Childhood Education"),
            Some("https://www.mdc.edu/earlychildhoodas/")
        );
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Biotechnology - Bioinformatics"),
            Some("https://www.mdc.edu/bioinformatics")
        );
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Biotechnology"),
            Some("https://www.mdc.edu/biotechnologyas")
        );
    }

    #[test]
    fn test_music_business_titles() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url(
                "Associate in Science in Music Business - Management and Marketing"
            ),
            Some("https://www.mdc.edu/musicbusinessmanagement/")
        );
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Marketing"),
            Some("https://www.mdc.edu/marketing/")
        );
    }

    #[test]
    fn test_social_and_human_services() {
        assert_eq!(
            ASSOCIATE_SCIENCE.resolve_url("Associate in Science in Social and Human Services"),
            Some("https://www.mdc.edu/humanservices")
        );
        assert_eq!(
            ASSOCIATE_SCIENCE
                .resolve_url("Associate in Science in Social and Human Services - Addictions Studies"),
            Some("https://www.mdc.edu/addictionstudies/")
        );
    }

    #[test]
    fn test_unknown_program_is_not_member() {
        assert!(!ASSOCIATE_SCIENCE.is_member("Associate in Science in Underwater Basket Weaving"));
    }
}
