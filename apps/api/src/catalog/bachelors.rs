//! Bachelor's programs offered at MDC.
//!
//! Keys are the subject after the degree prefix. A name only belongs to this
//! class when it carries one of the bachelor's prefixes.

use super::classifier::{ProgramClass, ProgramClassifier};
use super::{entry, CatalogEntry};

pub const BACHELORS_PROGRAMS: &[CatalogEntry] = &[
    // Benjamin León School of Nursing
    entry("nursing", "https://www.mdc.edu/bsn/"),
    entry("rn to bsn", "https://www.mdc.edu/bsn/"),
    // School of Global Business, Trade and Transportation
    entry(
        "leadership and management innovation - general",
        "https://www.mdc.edu/leadershipandmanagementinnovation/",
    ),
    entry(
        "leadership and management innovation - accounting",
        "https://www.mdc.edu/accountingmanagement/",
    ),
    entry(
        "leadership and management innovation - hospitality management",
        "https://www.mdc.edu/hospitalitymanagement/",
    ),
    entry(
        "leadership and management innovation - human resource management",
        "https://www.mdc.edu/humanresourcemanagement/",
    ),
    entry(
        "leadership and management innovation - digital marketing",
        "https://www.mdc.edu/digitalmarketingbas/",
    ),
    entry("procurement management", "https://www.mdc.edu/procurement-management/"),
    entry("project management", "https://www.mdc.edu/project-management/"),
    entry("supply chain analytics", "https://www.mdc.edu/supplychainanalytics/"),
    entry("supply chain management", "https://www.mdc.edu/supplychainmanagement/"),
    // School of Education
    entry("early childhood education", "https://www.mdc.edu/earlychildhood/"),
    entry("exceptional student education", "https://www.mdc.edu/ese/"),
    entry("secondary mathematics education", "https://www.mdc.edu/secondarymath/"),
    entry(
        "secondary science education - biology",
        "https://www.mdc.edu/secondarybiology/",
    ),
    // School of Engineering, Technology, and Design
    entry("applied artificial intelligence", "https://www.mdc.edu/appliedaibs/"),
    entry("cybersecurity", "https://www.mdc.edu/cybersecuritybs/"),
    entry("data analytics", "https://www.mdc.edu/dataanalytics/"),
    entry(
        "electrical and computer engineering technology",
        "https://www.mdc.edu/electronicsengineeringbs/",
    ),
    entry(
        "film, television & digital production",
        "https://www.mdc.edu/filmtvproduction/",
    ),
    entry(
        "information systems technology - networking",
        "https://www.mdc.edu/informationsystemsnetworking/",
    ),
    entry(
        "information systems technology - software engineering",
        "https://www.mdc.edu/softwareengineering/",
    ),
    // School of Health Sciences
    entry(
        "health sciences - clinical laboratory science",
        "https://www.mdc.edu/medicallaboratorysciences/",
    ),
    entry(
        "health sciences - histotechnology",
        "https://www.mdc.edu/histotechnologybas/",
    ),
    entry(
        "health sciences - physician assistant studies",
        "https://www.mdc.edu/physicianassistant/",
    ),
    // School of Justice, Public Safety, and Law Studies
    entry(
        "public safety management - crime scene investigation",
        "https://www.mdc.edu/csi/",
    ),
    entry(
        "public safety management - emergency management",
        "https://www.mdc.edu/emergencymanagement/",
    ),
    entry("criminal justice", "https://www.mdc.edu/criminaljusticebas/"),
    // School of Science
    entry(
        "biological sciences - biopharmaceutical sciences",
        "https://www.mdc.edu/biopharmaceutical/",
    ),
    entry(
        "biological sciences - biotechnology",
        "https://www.mdc.edu/biotechnology/",
    ),
    entry(
        "biological sciences - science education",
        "https://www.mdc.edu/scienceeducation/",
    ),
];

pub static BACHELORS: ProgramClassifier = ProgramClassifier {
    class: ProgramClass::Bachelors,
    prefixes: &[
        "bachelor of applied sciences in",
        "bachelor of applied science in",
        "bachelor of science in",
        "bachelor of arts in",
    ],
    foreign_prefixes: &[],
    claimed_prefixes: &[],
    claim_terms: &[],
    prefix_required: true,
    table: BACHELORS_PROGRAMS,
    families: &[],
    exact_only_terms: &[],
};
