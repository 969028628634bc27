//! Wire-facing types for a chat turn.
//!
//! The JSON shape is the contract with the clinic frontend: camelCase
//! keys, and every field besides `bot` independently omitted when unset.
//! Context is caller-owned; the engine returns an updated value only on
//! turns that change it, and holds no state of its own.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Treatment};

/// The category value threaded between turns via the opaque context.
///
/// Besides the five catalog categories this carries two sentinel values
/// the catalog has no treatment list for: `general` (a `symptom:` turn
/// that matched no rule) and `emergency` (a `symptom:` turn that hit the
/// safety screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextTag {
    Back,
    Neck,
    Knee,
    Shoulder,
    Posture,
    General,
    Emergency,
}

impl From<Category> for ContextTag {
    fn from(category: Category) -> Self {
        match category {
            Category::Back => ContextTag::Back,
            Category::Neck => ContextTag::Neck,
            Category::Knee => ContextTag::Knee,
            Category::Shoulder => ContextTag::Shoulder,
            Category::Posture => ContextTag::Posture,
        }
    }
}

impl ContextTag {
    /// Parse the lowercase wire name. Anything else yields `None`; the
    /// HTTP edge uses this to absorb stale or garbled client context.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "back" => Some(ContextTag::Back),
            "neck" => Some(ContextTag::Neck),
            "knee" => Some(ContextTag::Knee),
            "shoulder" => Some(ContextTag::Shoulder),
            "posture" => Some(ContextTag::Posture),
            "general" => Some(ContextTag::General),
            "emergency" => Some(ContextTag::Emergency),
            _ => None,
        }
    }

    /// The catalog category behind this tag, if any. The sentinels have no
    /// treatment list.
    pub fn category(self) -> Option<Category> {
        match self {
            ContextTag::Back => Some(Category::Back),
            ContextTag::Neck => Some(Category::Neck),
            ContextTag::Knee => Some(Category::Knee),
            ContextTag::Shoulder => Some(Category::Shoulder),
            ContextTag::Posture => Some(Category::Posture),
            ContextTag::General | ContextTag::Emergency => None,
        }
    }
}

/// Caller-owned conversation state. Created empty on the first turn,
/// replaced with the value from each response, discarded with the
/// caller's session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_category: Option<ContextTag>,
}

impl ConversationContext {
    pub fn with(tag: ContextTag) -> Self {
        ConversationContext {
            last_category: Some(tag),
        }
    }
}

/// One recommended treatment, display-capped by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub id: String,
}

impl From<&Treatment> for Recommendation {
    fn from(t: &Treatment) -> Self {
        Recommendation {
            name: t.name.to_string(),
            id: t.id.to_string(),
        }
    }
}

/// Call-to-action button: label + relative booking URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub url: String,
}

impl Cta {
    /// Booking CTA for a treatment id. Ids are `[a-z0-9-]` slugs, so they
    /// embed in the query string verbatim.
    pub fn book(label: impl Into<String>, treatment_id: &str) -> Self {
        Cta {
            label: label.into(),
            url: format!("/book?treatment={treatment_id}"),
        }
    }
}

/// A complete chat turn response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub bot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands_hint: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ConversationContext>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_tag_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContextTag::Emergency).unwrap(),
            "\"emergency\""
        );
        assert_eq!(serde_json::to_string(&ContextTag::Back).unwrap(), "\"back\"");
    }

    #[test]
    fn context_round_trips_through_wire_shape() {
        let ctx: ConversationContext =
            serde_json::from_str(r#"{"lastCategory":"knee"}"#).unwrap();
        assert_eq!(ctx.last_category, Some(ContextTag::Knee));
        assert_eq!(
            serde_json::to_string(&ctx).unwrap(),
            r#"{"lastCategory":"knee"}"#
        );
    }

    #[test]
    fn null_and_missing_last_category_both_deserialize() {
        let ctx: ConversationContext = serde_json::from_str(r#"{"lastCategory":null}"#).unwrap();
        assert_eq!(ctx.last_category, None);
        let ctx: ConversationContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx.last_category, None);
    }

    #[test]
    fn tag_parse_accepts_wire_names_only() {
        assert_eq!(ContextTag::parse("knee"), Some(ContextTag::Knee));
        assert_eq!(ContextTag::parse("emergency"), Some(ContextTag::Emergency));
        assert_eq!(ContextTag::parse("banana"), None);
        assert_eq!(ContextTag::parse("Knee"), None);
        assert_eq!(ContextTag::parse(""), None);
    }

    #[test]
    fn bare_response_serializes_bot_only() {
        let response = ChatResponse {
            bot: "hello".into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"bot":"hello"}"#
        );
    }

    #[test]
    fn commands_hint_uses_camel_case_key() {
        let response = ChatResponse {
            bot: "x".into(),
            commands_hint: Some(vec!["help".into()]),
            ..Default::default()
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("commandsHint").is_some());
        assert!(json.get("commands_hint").is_none());
    }

    #[test]
    fn booking_cta_url_shape() {
        let cta = Cta::book("Book now", "exercise-therapy");
        assert_eq!(cta.url, "/book?treatment=exercise-therapy");
    }

    #[test]
    fn sentinel_tags_have_no_catalog_category() {
        assert!(ContextTag::General.category().is_none());
        assert!(ContextTag::Emergency.category().is_none());
        assert_eq!(ContextTag::Knee.category(), Some(Category::Knee));
    }
}
