//! Keyword category classification.
//!
//! A fixed, ordered rule table maps keywords to symptom categories.
//! Matching is case-insensitive substring search over normalized input
//! ("knee" matches "my knee hurts"). Table order is the tie-break when
//! several categories could match overlapping phrasing; reordering rules
//! changes classification outcomes for ambiguous input.

use crate::catalog::Category;

/// Rule table, checked top to bottom. First rule whose any keyword is a
/// substring of the input wins.
static RULES: &[(Category, &[&str])] = &[
    (
        Category::Back,
        &["back", "spine", "lumbar", "sciatica", "slipped disc"],
    ),
    (Category::Neck, &["neck", "cervical", "whiplash"]),
    (
        Category::Knee,
        &["knee", "patella", "meniscus", "acl"],
    ),
    (
        Category::Shoulder,
        &["shoulder", "rotator cuff", "frozen shoulder"],
    ),
    (
        Category::Posture,
        &["posture", "slouch", "hunch", "desk job", "sitting all day"],
    ),
];

/// First matching category in rule-table order, or `None`.
pub fn infer_category(normalized: &str) -> Option<Category> {
    for (category, keywords) in RULES {
        if keywords.iter().any(|kw| normalized.contains(kw)) {
            return Some(*category);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_keywords_classify_as_back() {
        assert_eq!(infer_category("sharp lower back pain"), Some(Category::Back));
        assert_eq!(infer_category("sciatica flaring up again"), Some(Category::Back));
    }

    #[test]
    fn knee_phrase_matches_by_substring() {
        assert_eq!(
            infer_category("my knee hurts when climbing stairs"),
            Some(Category::Knee)
        );
    }

    #[test]
    fn neck_and_shoulder_and_posture() {
        assert_eq!(infer_category("stiff neck since monday"), Some(Category::Neck));
        assert_eq!(infer_category("rotator cuff strain"), Some(Category::Shoulder));
        assert_eq!(infer_category("i slouch at my desk job"), Some(Category::Posture));
    }

    #[test]
    fn no_keyword_returns_none() {
        assert_eq!(infer_category("i feel tired all the time"), None);
        assert_eq!(infer_category(""), None);
    }

    #[test]
    fn table_order_breaks_ties() {
        // Mentions both back and knee; back is declared first and wins.
        assert_eq!(
            infer_category("back and knee pain after lifting"),
            Some(Category::Back)
        );
        // Mentions neck and posture; neck is declared first.
        assert_eq!(
            infer_category("bad posture giving me neck pain"),
            Some(Category::Neck)
        );
    }

    #[test]
    fn matching_assumes_normalized_input() {
        // The classifier itself is substring-only; callers normalize first.
        assert_eq!(infer_category("KNEE"), None);
        assert_eq!(infer_category("knee"), Some(Category::Knee));
    }
}
