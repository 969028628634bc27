//! Red-flag safety screen.
//!
//! Detects symptoms outside physiotherapy scope that need urgent medical
//! referral. The list is deliberately broader and coarser than the symptom
//! categories: a false positive costs one over-cautious reply, a false
//! negative could delay emergency care. This check runs BEFORE category
//! inference and short-circuits the whole triage pipeline.

/// Red-flag substrings, matched against normalized input.
///
/// Stems are used where they safely cover inflections ("bleed" covers
/// bleeding, "faint" covers fainting, "numb" covers numbness). Order is
/// irrelevant; the result is a single boolean.
static RED_FLAGS: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "short of breath",
    "breathless",
    "faint",
    "stroke",
    "bleed",
    "fracture",
    "broken bone",
    "head injury",
    "severe burn",
    "unconscious",
    "dizzy",
    "dizziness",
    "nausea",
    "nauseous",
    "vomit",
    "fever",
    "infection",
    "severe swelling",
    "numb",
    "tingling",
    "sudden weakness",
    "vision",
    "slurred speech",
    "speech",
    "confusion",
];

/// True if the normalized text mentions any red-flag symptom.
pub fn is_emergency_or_out_of_scope(normalized: &str) -> bool {
    match RED_FLAGS.iter().find(|flag| normalized.contains(**flag)) {
        Some(&flag) => {
            tracing::warn!(red_flag = flag, "red-flag symptom detected, triage short-circuited");
            true
        }
        None => false,
    }
}
