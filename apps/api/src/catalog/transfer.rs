//! Transfer recommendations shown with every `transfer` step.

use serde::Serialize;

pub const TRANSFER_AGREEMENTS_URL: &str =
    "https://www.mdc.edu/transfer-information/transfer-agreements/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstitutionType {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub name: &'static str,
    pub website: &'static str,
    pub location: &'static str,
    #[serde(rename = "type")]
    pub kind: InstitutionType,
    pub notes: &'static str,
}

const fn university(
    name: &'static str,
    website: &'static str,
    location: &'static str,
    kind: InstitutionType,
    notes: &'static str,
) -> University {
    University {
        name,
        website,
        location,
        kind,
        notes,
    }
}

/// In-state universities, public first.
pub const FLORIDA_UNIVERSITIES: &[University] = &[
    university(
        "University of Florida (UF)",
        "https://www.ufl.edu/",
        "Gainesville",
        InstitutionType::Public,
        "Flagship state university, strong articulation agreements with MDC",
    ),
    university(
        "Florida State University (FSU)",
        "https://www.fsu.edu/",
        "Tallahassee",
        InstitutionType::Public,
        "Major research university, excellent transfer pathways",
    ),
    university(
        "University of South Florida (USF)",
        "https://www.usf.edu/",
        "Tampa",
        InstitutionType::Public,
        "Multiple campuses, strong engineering and business programs",
    ),
    university(
        "Florida International University (FIU)",
        "https://www.fiu.edu/",
        "Miami",
        InstitutionType::Public,
        "Local option in Miami, strong transfer agreements with MDC",
    ),
    university(
        "University of Central Florida (UCF)",
        "https://www.ucf.edu/",
        "Orlando",
        InstitutionType::Public,
        "Largest university in Florida, excellent engineering and hospitality programs",
    ),
    university(
        "Florida Atlantic University (FAU)",
        "https://www.fau.edu/",
        "Boca Raton",
        InstitutionType::Public,
        "Multiple campuses in South Florida, strong business and engineering programs",
    ),
    university(
        "Florida A&M University (FAMU)",
        "https://www.famu.edu/",
        "Tallahassee",
        InstitutionType::Public,
        "Historically Black University, strong programs in pharmacy and engineering",
    ),
    university(
        "University of North Florida (UNF)",
        "https://www.unf.edu/",
        "Jacksonville",
        InstitutionType::Public,
        "Strong business and health sciences programs",
    ),
    university(
        "Florida Gulf Coast University (FGCU)",
        "https://www.fgcu.edu/",
        "Fort Myers",
        InstitutionType::Public,
        "Growing university with strong environmental and business programs",
    ),
    university(
        "University of West Florida (UWF)",
        "https://uwf.edu/",
        "Pensacola",
        InstitutionType::Public,
        "Strong programs in business, education, and health sciences",
    ),
    university(
        "New College of Florida",
        "https://www.ncf.edu/",
        "Sarasota",
        InstitutionType::Public,
        "Small liberal arts honors college, unique academic structure",
    ),
    university(
        "Florida Polytechnic University",
        "https://www.floridapoly.edu/",
        "Lakeland",
        InstitutionType::Public,
        "STEM-focused university, strong engineering and technology programs",
    ),
    university(
        "University of Miami",
        "https://welcome.miami.edu/",
        "Coral Gables",
        InstitutionType::Private,
        "Private research university, strong programs across disciplines",
    ),
    university(
        "Nova Southeastern University (NSU)",
        "https://www.nova.edu/",
        "Fort Lauderdale",
        InstitutionType::Private,
        "Private university with strong health sciences and law programs",
    ),
    university(
        "Florida Institute of Technology (FIT)",
        "https://www.fit.edu/",
        "Melbourne",
        InstitutionType::Private,
        "STEM-focused private university, strong engineering and aviation programs",
    ),
    university(
        "Rollins College",
        "https://www.rollins.edu/",
        "Winter Park",
        InstitutionType::Private,
        "Private liberal arts college, strong business and arts programs",
    ),
    university(
        "Stetson University",
        "https://www.stetson.edu/",
        "DeLand",
        InstitutionType::Private,
        "Private university, strong programs in business, law, and music",
    ),
    university(
        "Barry University",
        "https://www.barry.edu/",
        "Miami Shores",
        InstitutionType::Private,
        "Private Catholic university, strong health sciences and education programs",
    ),
    university(
        "St. Thomas University",
        "https://www.stu.edu/",
        "Miami Gardens",
        InstitutionType::Private,
        "Private Catholic university, strong business and law programs",
    ),
    university(
        "Lynn University",
        "https://www.lynn.edu/",
        "Boca Raton",
        InstitutionType::Private,
        "Private university, strong hospitality and business programs",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInfo {
    pub agreements_url: &'static str,
    pub recommendations: &'static [University],
}

pub fn transfer_info() -> TransferInfo {
    TransferInfo {
        agreements_url: TRANSFER_AGREEMENTS_URL,
        recommendations: FLORIDA_UNIVERSITIES,
    }
}
