// All LLM prompt constants for the Pathway module.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{json, Value};

use crate::llm_client::prompts::{compose, NO_INVENTED_PROGRAMS, SCHEMA_ONLY_INSTRUCTION};

/// Advisor role and pathway structure rules.
pub const PATHWAY_SYSTEM: &str = r#"You are a career and academic advisor at Miami Dade College (MDC) North Campus. Generate a complete educational pathway for a student interested in a specific career.

PATHWAY STRUCTURE (include every step that applies):
1. START with the MDC program that gives the most direct route to the career:
   * Associate in Science (A.S.) for technical and vocational careers
   * Associate in Arts (A.A.) for transfer-oriented careers
   * Certificate programs for quick entry or as a stepping stone
   * Bachelor's programs (B.S./B.A./B.A.S.) when MDC offers one that leads directly to the career
2. A TRANSFER step to a 4-year university, only when the career needs a bachelor's degree that MDC does not offer or a specialized program (architecture, pharmacy) requires it
3. The B.S./B.A. degree step when required and not already completed at MDC
4. PROFESSIONAL EXPERIENCE / INTERNSHIP steps required for licensure, with hours and supervision requirements when applicable (e.g. AXP: 3,740 hours under a licensed architect)
5. ALL REQUIRED LICENSURE EXAMS and certifications, marked "REQUIRED" in the description (FE and PE for engineers, A.R.E. for architects, NCLEX-RN or NCLEX-PN for nurses)
6. OPTIONAL advanced degrees (M.S., M.A., M.Arch, Ph.D.), marked "(OPTIONAL)" in the level or description

STEP FIELDS:
- type: one of degree, transfer, internship, exam
- level: e.g. "A.A. (MDC)", "A.S. (MDC)", "B.S.", "M.S. (Optional)"; MDC programs MUST include "MDC" in the level
- name: for degree steps, the full official title, e.g. "Associate in Science in Nursing", "Associate in Arts in Engineering - Mechanical", "Certificate in [Program Name]", "Bachelor of Science in [Program Name]"
- description: 1-2 sentences on what the step involves and why it is needed

MULTIPLE PATHWAYS:
- When several MDC programs lead to the same career, return one complete pathway per program and mark the recommended one with isPrimary: true
- When only one MDC program clearly applies, return a single pathway
- Prefer an MDC bachelor's program over a transfer step when it leads directly to the career
- Transfer steps should mention articulation agreements, accredited destinations (FIU, UF, UCF) and admission prerequisites such as GPA or portfolios"#;

/// Catalog titles the model must choose from. Kept in the published form.
pub const PROGRAM_LISTS: &str = r#"ASSOCIATE IN ARTS (A.A.) PROGRAMS:
Accounting, Agriculture, Anthropology, Architecture, Area & Ethnic Studies, Art, Art Education, Atmospheric Science & Meteorology, Biology, Biotechnology, Building Construction, Business Administration, Chemistry, Computer Arts Animation, Computer Information Systems, Computer Science, Criminal Justice Administration, Dance, Dietetics, Drama, Drama Education, Economics, Engineering - Architectural, Engineering - Biomedical, Engineering - Chemical, Engineering - Civil, Engineering - Computer, Engineering - Electrical, Engineering - Geomatics (Surveying and Mapping), Engineering - Industrial, Engineering - Mechanical, Engineering - Ocean, English/Literature & English Education, Environmental Sciences, Exercise Science, Foreign Language, Forestry, Geology, Graphic or Commercial Arts, Health Services Administration, History, Hospitality Administration/Travel & Tourism, Interior Design, International Relations, Landscape Architecture, Mass Communications/Journalism, Mathematics, Music, Music Education, Philosophy, Physical Education Teaching & Coaching, Physics, Political Science, Pre-Bachelor of Arts, Pre-Law, Pre-Medical Science/Dentistry, Pre-Medical Technology, Pre-Nursing, Pre-Occupational Therapy, Pre-Optometry, Pre-Pharmacy, Pre-Physical Therapy, Pre-Veterinary Medicine, Psychology, Public Administration, Recreation, Religion, Social Work, Sociology, Speech Pathology & Audiology, Teaching (Elementary), Teaching (Exceptional Student Education), Teaching (Pre-Elementary/Early Childhood), Teaching (Secondary), Teaching Secondary (Biology), Teaching Secondary (Chemistry), Teaching Secondary (Earth/Space), Teaching Secondary (English/Foreign Languages), Teaching Secondary (Mathematics Education), Teaching Secondary (Physics), Teaching Secondary (Social Science), Teaching Secondary (Vocational: Business, Technical, Home)

ASSOCIATE IN SCIENCE (A.S.) PROGRAMS:
Accounting Technology, Animation & Game Art, Applied Artificial Intelligence, Architectural Design and Construction Technology, Aviation Administration, Aviation Maintenance Management, Biomedical Engineering Technology, Biotechnology, Biotechnology - Bioinformatics, Biotechnology - Chemical Technology, Building Construction Technology, Business Administration, Business Intelligence Specialist, Civil Engineering Technology, Clinical Laboratory Science, Computer Crime Investigation, Computer Engineering Technology, Computer Information Technology, Computer Programming and Analysis - Business Application Programming, Computer Programming and Analysis - Internet of Things (IoT) Applications, Computer Programming and Analysis - Mobile Applications Development, Crime Scene Technology - Crime Scene Investigation, Crime Scene Technology - Forensic Science, Criminal Justice Technology, Culinary Arts Management, Cybersecurity, Database Technology - Oracle Database Administration, Dental Hygiene, Diagnostic Medical Sonography, Early Childhood Education, Early Childhood Education - Administrators, Early Childhood Education - Infant Toddler, Early Childhood Education - Preschool, Electronics Engineering Technology, Emergency Medical Services, Entrepreneurship, Fashion Design, Fashion Merchandising, Film Production Technology, Financial Services - Banking, Financial Services - Wealth Management, Fire Science Technology, Funeral Service Education, Game Development & Design, Graphic Design Technology, Graphic Internet Technology, Health Information Technology, Health Science - Health Services Management, Health Sciences, Histologic Technology, Hospitality & Tourism Management, Interior Design Technology, Landscape & Horticulture Technology, Marketing, Music Business - Management and Marketing, Music Business - Performance and Production, Networking Services Technology - Enterprise Cloud Computing, Networking Services Technology - Network Infrastructure, Nuclear Medicine Technology, Nursing, Opticianry, Paralegal Studies, Photographic Technology, Physical Therapist Assistant, Professional Pilot Technology, Radiation Therapy, Radio & Television Broadcast Programming, Radiography, Respiratory Care, Sign Language Interpretation, Social and Human Services - Addictions Studies, Social and Human Services - Generalist, Sport Management, Surgical Technology, Translation/Interpretation Studies, Transportation and Logistics, Veterinary Technology

BACHELOR'S PROGRAMS:
Bachelor of Science in Nursing, Bachelor of Applied Sciences in Leadership and Management Innovation (Accounting, Hospitality Management, Human Resource Management, Digital Marketing), Bachelor of Applied Sciences in Supply Chain Management (Procurement Management, Project Management, Supply Chain Analytics), Bachelor of Science in Early Childhood Education, Bachelor of Science in Exceptional Student Education, Bachelor of Science in Secondary Mathematics Education, Bachelor of Science in Secondary Science Education - Biology, Bachelor of Science in Applied Artificial Intelligence, Bachelor of Science in Cybersecurity, Bachelor of Science in Data Analytics, Bachelor of Science in Electrical and Computer Engineering Technology, Bachelor of Applied Science in Film, Television & Digital Production, Bachelor of Science in Information Systems Technology - Networking, Bachelor of Science in Information Systems Technology - Software Engineering, Bachelor of Applied Sciences in Health Sciences - Clinical Laboratory Science, Bachelor of Applied Sciences in Health Sciences - Histotechnology, Bachelor of Applied Sciences in Health Sciences - Physician Assistant Studies, Bachelor of Applied Sciences in Public Safety Management - Crime Scene Investigation, Bachelor of Applied Sciences in Public Safety Management - Emergency Management, Bachelor of Applied Sciences in Criminal Justice, Bachelor of Science in Biological Sciences - Biopharmaceutical Sciences, Bachelor of Science in Biological Sciences - Biotechnology, Bachelor of Science in Biological Sciences - Science Education

Choose the program MOST CLOSELY RELATED to the career: "Associate in Arts in Engineering - Mechanical" for a mechanical engineer (not a generic engineering title), "Associate in Science in Nursing" for a nurse (not Health Sciences)."#;

/// User query template. Replace `{career}` before sending.
pub const PATHWAY_PROMPT_TEMPLATE: &str = r#"Generate comprehensive educational pathway(s) for becoming a "{career}".

- Provide one pathway per MDC program that can lead to this career, and mark the most direct one with isPrimary: true
- Start each pathway with an MDC program (A.S., A.A., Certificate, or a Bachelor's MDC actually offers), using the exact title from the system instructions
- Include a transfer step only when a bachelor's degree is required and MDC does not offer one in the field
- Include required professional experience, every required licensure exam or certification, and optional advanced degrees when relevant
- If only one MDC program clearly leads to this career, return a single pathway inside the pathways array"#;

pub fn build_system_prompt() -> String {
    compose(&[
        PATHWAY_SYSTEM,
        PROGRAM_LISTS,
        NO_INVENTED_PROGRAMS,
        SCHEMA_ONLY_INSTRUCTION,
    ])
}

pub fn build_user_query(career: &str) -> String {
    PATHWAY_PROMPT_TEMPLATE.replace("{career}", career)
}

/// Response schema in the Gemini OpenAPI subset.
pub fn pathway_schema(career: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": format!("Pathway to becoming a {career}")
            },
            "pathways": {
                "type": "ARRAY",
                "description": "Alternative pathways, one per MDC program that leads to the career.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "Title of this pathway, e.g. 'Pathway 1: A.S. in Computer Information Technology'"
                        },
                        "isPrimary": {
                            "type": "BOOLEAN",
                            "description": "True for the recommended pathway"
                        },
                        "steps": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "type": {
                                        "type": "STRING",
                                        "enum": ["degree", "transfer", "internship", "exam"]
                                    },
                                    "level": {
                                        "type": "STRING",
                                        "description": "e.g. A.A. (MDC), B.S., M.S. (Optional), or type of step"
                                    },
                                    "name": {
                                        "type": "STRING",
                                        "description": "Name of the degree, exam, or step"
                                    },
                                    "description": {
                                        "type": "STRING",
                                        "description": "A 1-2 sentence description of this step."
                                    }
                                },
                                "required": ["type", "level", "name", "description"]
                            }
                        }
                    },
                    "required": ["title", "isPrimary", "steps"]
                }
            }
        },
        "required": ["title", "pathways"]
    })
}
