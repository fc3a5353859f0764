//! Certification Resolver: exam and licence names → official page + requirements.
//!
//! The table deliberately carries several phrasings per exam. Lookup runs an
//! exact-phrase pass first, then symmetric containment in table order, so
//! specific phrasings ("nclex-rn", "comptia a+") are listed before the generic
//! ones they contain ("nclex", "a+").

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub canonical_key: &'static str,
    pub url: &'static str,
    pub requirements: &'static [&'static str],
}

const fn cert(
    canonical_key: &'static str,
    url: &'static str,
    requirements: &'static [&'static str],
) -> CertificationEntry {
    CertificationEntry {
        canonical_key,
        url,
        requirements,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Official pages
// ────────────────────────────────────────────────────────────────────────────

const NCEES_FE: &str = "https://ncees.org/engineering/fe/";
const NCEES_PE: &str = "https://ncees.org/engineering/pe/";
const NCARB_ARE: &str = "https://www.ncarb.org/get-licensed/are";
const NCARB_AXP: &str = "https://www.ncarb.org/get-licensed/axp";
const NCSBN_NCLEX: &str = "https://www.ncsbn.org/nclex.htm";
const USMLE: &str = "https://www.usmle.org/";
const NABP_NAPLEX: &str = "https://nabp.pharmacy/programs/examinations/naplex/";
const ADA_NBDHE: &str =
    "https://www.ada.org/en/education-careers/dental-hygiene-national-board-examination";
const ARDMS: &str = "https://www.ardms.org/";
const ARRT: &str = "https://www.arrt.org/";
const NBRC: &str = "https://www.nbrc.org/";
const FSBPT: &str = "https://www.fsbpt.org/";
const FLORIDA_BAR: &str = "https://www.floridabar.org/";
const NCBEX: &str = "https://www.ncbex.org/";
const COMPTIA_A_PLUS: &str = "https://www.comptia.org/certifications/a";
const COMPTIA_SECURITY_PLUS: &str = "https://www.comptia.org/certifications/security";
const ISC2_CISSP: &str = "https://www.isc2.org/certifications/cissp";
const PMI_PMP: &str = "https://www.pmi.org/certifications/project-management-pmp";
const FTCE: &str = "https://www.fl.nesinc.com/";
const FAA_ATP: &str =
    "https://www.faa.gov/licenses_certificates/airmen_certification/airline_transport_pilot/";
const AICPA_CPA: &str = "https://www.aicpa-cima.com/cpa-exam";

// ────────────────────────────────────────────────────────────────────────────
// Requirement lists
// ────────────────────────────────────────────────────────────────────────────

const FE_REQUIREMENTS: &[&str] = &[
    "Bachelor's degree in engineering or related field (or in final year)",
    "Registration with state engineering board",
    "Pass the FE exam (6-hour computer-based exam)",
    "Valid for lifetime once passed",
];

const PE_REQUIREMENTS: &[&str] = &[
    "Passed the FE exam",
    "Bachelor's degree in engineering from ABET-accredited program",
    "4 years of progressive engineering experience under a PE",
    "Pass the PE exam (8-hour exam in specific discipline)",
    "State-specific additional requirements may apply",
];

const ARE_REQUIREMENTS: &[&str] = &[
    "Completed AXP (Architectural Experience Program) - 3,740 hours",
    "Professional degree in architecture (B.Arch or M.Arch)",
    "Pass all 6 divisions of the ARE",
    "Meet state-specific requirements",
];

const AXP_REQUIREMENTS: &[&str] = &[
    "3,740 hours of diverse professional experience",
    "Experience must be under the supervision of a licensed architect",
    "Documented across 6 experience areas",
    "Can be completed while in school or after graduation",
];

const NCLEX_RN_REQUIREMENTS: &[&str] = &[
    "Graduate from an accredited RN program (ADN or BSN)",
    "Apply for RN licensure with state board of nursing",
    "Receive Authorization to Test (ATT)",
    "Pass the NCLEX-RN exam (up to 265 questions)",
    "Meet state-specific requirements",
];

const NCLEX_PN_REQUIREMENTS: &[&str] = &[
    "Graduate from an accredited practical/vocational nursing program",
    "Apply for PN/LVN licensure with state board of nursing",
    "Receive Authorization to Test (ATT)",
    "Pass the NCLEX-PN exam (up to 205 questions)",
    "Meet state-specific requirements",
];

const NCLEX_COUNCIL_REQUIREMENTS: &[&str] = &[
    "Graduate from an accredited nursing program",
    "Apply for licensure with state board of nursing",
    "Receive Authorization to Test (ATT)",
    "Pass the NCLEX exam",
    "Meet state-specific requirements",
];

const NCLEX_REQUIREMENTS: &[&str] = &[
    "Graduate from an accredited nursing program (ADN or BSN)",
    "Apply for licensure with state board of nursing",
    "Receive Authorization to Test (ATT)",
    "Pass the NCLEX exam (computerized adaptive test)",
    "Meet state-specific requirements",
];

const USMLE_REQUIREMENTS: &[&str] = &[
    "Medical degree (MD) from accredited medical school",
    "Pass Step 1, Step 2 CK, Step 2 CS, and Step 3",
    "Complete clinical rotations",
    "Meet state-specific requirements",
];

const NAPLEX_REQUIREMENTS: &[&str] = &[
    "Pharmacy degree (PharmD) from accredited program",
    "Complete required pharmacy internships",
    "Pass the NAPLEX exam (250 questions)",
    "Pass state-specific MPJE exam",
    "Meet state-specific requirements",
];

const NBDHE_REQUIREMENTS: &[&str] = &[
    "Graduate from accredited dental hygiene program",
    "Pass the National Board Dental Hygiene Examination (NBDHE)",
    "Pass state-specific clinical and written exams",
    "Meet state-specific requirements",
];

const ARDMS_REQUIREMENTS: &[&str] = &[
    "Graduate from accredited diagnostic medical sonography program",
    "Complete clinical experience requirements",
    "Pass ARDMS certification exam in specialty area",
    "Maintain continuing education credits",
];

const ARRT_REQUIREMENTS: &[&str] = &[
    "Graduate from accredited radiologic technology program",
    "Complete clinical experience requirements",
    "Pass ARRT certification exam",
    "Meet ethics requirements",
    "Maintain continuing education credits",
];

const RRT_REQUIREMENTS: &[&str] = &[
    "Hold CRT certification",
    "Pass RRT (Registered Respiratory Therapist) written exam",
    "Pass RRT clinical simulation exam",
    "Maintain continuing education credits",
];

const CRT_REQUIREMENTS: &[&str] = &[
    "Graduate from accredited respiratory care program",
    "Pass CRT (Certified Respiratory Therapist) exam",
    "Maintain continuing education credits",
];

const NBRC_REQUIREMENTS: &[&str] = &[
    "Graduate from accredited respiratory care program",
    "Pass CRT (Certified Respiratory Therapist) exam",
    "For RRT: Pass additional advanced level exams",
    "Maintain continuing education credits",
];

const NPTE_REQUIREMENTS: &[&str] = &[
    "Graduate from accredited physical therapy program (DPT)",
    "Complete required clinical hours",
    "Pass the NPTE (National Physical Therapy Examination)",
    "Meet state-specific requirements",
    "Pass state jurisprudence exam (if required)",
];

const FLORIDA_BAR_REQUIREMENTS: &[&str] = &[
    "Juris Doctor (JD) degree from accredited law school",
    "Pass the Florida Bar Examination",
    "Pass the Multistate Professional Responsibility Examination (MPRE)",
    "Complete Florida Law Component",
    "Meet character and fitness requirements",
];

const BAR_REQUIREMENTS: &[&str] = &[
    "Juris Doctor (JD) degree from accredited law school",
    "Pass the Multistate Bar Examination (MBE)",
    "Pass state-specific bar exam components",
    "Pass Multistate Professional Responsibility Examination (MPRE)",
    "Meet state-specific character and fitness requirements",
];

const A_PLUS_REQUIREMENTS: &[&str] = &[
    "No formal prerequisites required",
    "Recommended: 9-12 months hands-on experience",
    "Pass two exams: Core 1 and Core 2",
    "Renew every 3 years through continuing education",
];

const SECURITY_PLUS_REQUIREMENTS: &[&str] = &[
    "Recommended: Network+ and 2 years IT security experience",
    "Pass one exam covering security concepts",
    "Renew every 3 years through continuing education",
];

const CISSP_REQUIREMENTS: &[&str] = &[
    "5 years of cumulative paid work experience in 2+ domains",
    "OR 4 years with a college degree or approved credential",
    "Pass the CISSP exam (250 questions, 6 hours)",
    "Endorsement from another CISSP",
    "Maintain continuing education credits",
];

const PMP_REQUIREMENTS: &[&str] = &[
    "4-year degree + 36 months leading projects + 35 hours project management education",
    "OR High school diploma + 60 months leading projects + 35 hours project management education",
    "Pass the PMP exam (180 questions, 230 minutes)",
    "Maintain continuing education credits (60 PDUs every 3 years)",
];

const FTCE_REQUIREMENTS: &[&str] = &[
    "Bachelor's degree from accredited institution",
    "Complete approved teacher preparation program",
    "Pass Florida Teacher Certification Examinations (FTCE)",
    "Pass subject area exam for certification field",
    "Pass General Knowledge Test",
    "Pass Professional Education Test",
];

const ATP_REQUIREMENTS: &[&str] = &[
    "Be at least 23 years old",
    "Hold Commercial Pilot Certificate",
    "1,500 hours total flight time",
    "500 hours cross-country flight time",
    "100 hours night flight time",
    "75 hours instrument time",
    "Pass written, oral, and flight tests",
];

const CPA_REQUIREMENTS: &[&str] = &[
    "Bachelor's degree (150 semester hours total)",
    "Complete accounting coursework requirements",
    "Pass all 4 sections of the Uniform CPA Examination",
    "Complete ethics exam (state-specific)",
    "Meet state-specific experience requirements",
    "Meet state-specific residency requirements",
];

// ────────────────────────────────────────────────────────────────────────────
// Table
// ────────────────────────────────────────────────────────────────────────────

pub const CERTIFICATIONS: &[CertificationEntry] = &[
    // Engineering
    cert("fundamentals of engineering", NCEES_FE, FE_REQUIREMENTS),
    cert("fe exam", NCEES_FE, FE_REQUIREMENTS),
    cert("principles and practice of engineering", NCEES_PE, PE_REQUIREMENTS),
    cert("pe exam", NCEES_PE, PE_REQUIREMENTS),
    cert("professional engineering", NCEES_PE, PE_REQUIREMENTS),
    // Architecture
    cert("architect registration examination", NCARB_ARE, ARE_REQUIREMENTS),
    cert("a.r.e.", NCARB_ARE, ARE_REQUIREMENTS),
    cert("are exam", NCARB_ARE, ARE_REQUIREMENTS),
    cert("architectural experience program", NCARB_AXP, AXP_REQUIREMENTS),
    cert("axp", NCARB_AXP, AXP_REQUIREMENTS),
    // Nursing
    cert("nclex-rn", NCSBN_NCLEX, NCLEX_RN_REQUIREMENTS),
    cert("nclex-pn", NCSBN_NCLEX, NCLEX_PN_REQUIREMENTS),
    cert(
        "national council licensure examination",
        NCSBN_NCLEX,
        NCLEX_COUNCIL_REQUIREMENTS,
    ),
    cert("nclex", NCSBN_NCLEX, NCLEX_REQUIREMENTS),
    // Medical and allied health
    cert("united states medical licensing examination", USMLE, USMLE_REQUIREMENTS),
    cert("usmle", USMLE, USMLE_REQUIREMENTS),
    cert(
        "north american pharmacist licensure examination",
        NABP_NAPLEX,
        NAPLEX_REQUIREMENTS,
    ),
    cert("naplex", NABP_NAPLEX, NAPLEX_REQUIREMENTS),
    cert("dental hygiene national board", ADA_NBDHE, NBDHE_REQUIREMENTS),
    cert("dental hygiene exam", ADA_NBDHE, NBDHE_REQUIREMENTS),
    cert(
        "american registry for diagnostic medical sonography",
        ARDMS,
        ARDMS_REQUIREMENTS,
    ),
    cert("ardms", ARDMS, ARDMS_REQUIREMENTS),
    cert(
        "american registry of radiologic technologists",
        ARRT,
        ARRT_REQUIREMENTS,
    ),
    cert("arrt", ARRT, ARRT_REQUIREMENTS),
    cert("rrt", NBRC, RRT_REQUIREMENTS),
    cert("crt", NBRC, CRT_REQUIREMENTS),
    cert("national board for respiratory care", NBRC, NBRC_REQUIREMENTS),
    cert("nbrc", NBRC, NBRC_REQUIREMENTS),
    cert("national physical therapy examination", FSBPT, NPTE_REQUIREMENTS),
    cert("npte", FSBPT, NPTE_REQUIREMENTS),
    // Legal
    cert("florida bar", FLORIDA_BAR, FLORIDA_BAR_REQUIREMENTS),
    cert("bar exam", NCBEX, BAR_REQUIREMENTS),
    // IT and cybersecurity
    cert("comptia a+", COMPTIA_A_PLUS, A_PLUS_REQUIREMENTS),
    cert("security+", COMPTIA_SECURITY_PLUS, SECURITY_PLUS_REQUIREMENTS),
    cert("a+", COMPTIA_A_PLUS, A_PLUS_REQUIREMENTS),
    cert(
        "certified information systems security professional",
        ISC2_CISSP,
        CISSP_REQUIREMENTS,
    ),
    cert("cissp", ISC2_CISSP, CISSP_REQUIREMENTS),
    cert("project management professional", PMI_PMP, PMP_REQUIREMENTS),
    cert("pmp", PMI_PMP, PMP_REQUIREMENTS),
    // Teaching
    cert("florida teacher certification examinations", FTCE, FTCE_REQUIREMENTS),
    cert("ftce", FTCE, FTCE_REQUIREMENTS),
    // Aviation
    cert("airline transport pilot", FAA_ATP, ATP_REQUIREMENTS),
    cert("atp", FAA_ATP, ATP_REQUIREMENTS),
    // Accounting
    cert("certified public accountant", AICPA_CPA, CPA_REQUIREMENTS),
    cert("cpa", AICPA_CPA, CPA_REQUIREMENTS),
];

/// Looks up an exam or certification by name. Lower-cases and trims only;
/// exam names are not split on alternations.
pub fn resolve_certification(name: &str) -> Option<&'static CertificationEntry> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let found = CERTIFICATIONS
        .iter()
        .find(|c| c.canonical_key == needle)
        .or_else(|| {
            CERTIFICATIONS
                .iter()
                .find(|c| needle.contains(c.canonical_key) || c.canonical_key.contains(&needle))
        });

    if found.is_none() {
        debug!(exam = %needle, "no certification match");
    }
    found
}
