//! Dialogue controller.
//!
//! One turn is a fresh evaluation over `(message, context)`: normalize →
//! greeting → command → safety → category → catalog → response. Each
//! stage can short-circuit. The engine holds only the immutable catalog;
//! all cross-turn continuity is the caller-supplied context, so identical
//! input always yields an identical response and concurrent turns share
//! nothing mutable.
//!
//! Two asymmetries are deliberate, inherited product behavior and pinned
//! by tests below; do not unify them without checking with the clinic:
//! - `symptom: <text>` with no rule match resolves to the `general` tag,
//!   while non-command text with no match just asks for more detail;
//! - the `symptom:` safety hit records `lastCategory: emergency`, the
//!   non-command safety hit leaves context untouched.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::catalog::{primary_treatment, Catalog, Treatment};
use crate::triage::classify::infer_category;
use crate::triage::command::{parse_command, Command};
use crate::triage::messages::{
    self, MessageTemplates, APOLOGY_QUICK_REPLIES, CATEGORY_QUICK_REPLIES,
    ONBOARDING_QUICK_REPLIES,
};
use crate::triage::normalize::normalize;
use crate::triage::safety::is_emergency_or_out_of_scope;
use crate::triage::types::{ChatResponse, ContextTag, ConversationContext, Cta, Recommendation};

/// Display caps for attached recommendation lists.
const INLINE_RECOMMENDATION_CAP: usize = 3;
const FULL_RECOMMENDATION_CAP: usize = 5;

/// Greeting tokens, matched exactly (one trailing `!`/`.`/`?` tolerated).
static GREETINGS: &[&str] = &["hi", "hello", "hey", "namaste"];

fn is_greeting(normalized: &str) -> bool {
    let token = normalized.trim_end_matches(['!', '.', '?']).trim_end();
    GREETINGS.contains(&token)
}

fn recommendations(treatments: &[Treatment], cap: usize) -> Option<Vec<Recommendation>> {
    if treatments.is_empty() {
        return None;
    }
    Some(treatments.iter().take(cap).map(Recommendation::from).collect())
}

/// The symptom-triage engine. Pure and synchronous: no I/O, no clock, no
/// shared mutable state. Safe to call concurrently.
pub struct TriageEngine {
    catalog: Catalog,
    /// Forces `turn` to panic so tests can drive the fault barrier.
    #[cfg(test)]
    induce_fault: bool,
}

impl TriageEngine {
    pub fn new(catalog: Catalog) -> Self {
        TriageEngine {
            catalog,
            #[cfg(test)]
            induce_fault: false,
        }
    }

    /// Evaluate one turn.
    ///
    /// A latent fault anywhere in response construction degrades to the
    /// apology response instead of unwinding into the caller; the fault
    /// is logged for operators, never surfaced to the user.
    pub fn respond(&self, message: &str, context: &ConversationContext) -> ChatResponse {
        match catch_unwind(AssertUnwindSafe(|| self.turn(message, context))) {
            Ok(response) => response,
            Err(_) => {
                tracing::error!("triage turn panicked, degrading to fallback response");
                ChatResponse {
                    bot: MessageTemplates::apology(),
                    suggestions: Some(
                        APOLOGY_QUICK_REPLIES.iter().map(|s| s.to_string()).collect(),
                    ),
                    ..Default::default()
                }
            }
        }
    }

    fn turn(&self, message: &str, context: &ConversationContext) -> ChatResponse {
        #[cfg(test)]
        if self.induce_fault {
            panic!("induced turn fault");
        }

        let text = normalize(message);

        if text.is_empty() || is_greeting(&text) {
            return Self::onboarding();
        }

        if let Some(command) = parse_command(&text) {
            return match command {
                Command::Start => Self::start_prompt(),
                Command::Help => Self::help(),
                Command::Recommend => self.recommend(context),
                Command::Book(payload) => self.book(&payload, context),
                Command::Symptom(payload) => self.symptom(&payload),
            };
        }

        if is_emergency_or_out_of_scope(&text) {
            // Base path: caution message, category quick replies, and
            // (unlike the symptom: path) no context mutation.
            return ChatResponse {
                bot: MessageTemplates::emergency(),
                suggestions: Some(category_quick_replies()),
                ..Default::default()
            };
        }

        match infer_category(&text) {
            None => ChatResponse {
                bot: MessageTemplates::no_match(),
                suggestions: Some(category_quick_replies()),
                commands_hint: Some(vec!["start".into(), "help".into()]),
                ..Default::default()
            },
            Some(category) => self.category_response(category.into()),
        }
    }

    // ── Turn builders ──────────────────────────────────────────

    fn onboarding() -> ChatResponse {
        ChatResponse {
            bot: MessageTemplates::onboarding(),
            suggestions: Some(
                ONBOARDING_QUICK_REPLIES.iter().map(|s| s.to_string()).collect(),
            ),
            commands_hint: Some(messages::commands_hint()),
            ..Default::default()
        }
    }

    fn start_prompt() -> ChatResponse {
        ChatResponse {
            bot: MessageTemplates::start_prompt(),
            suggestions: Some(category_quick_replies()),
            commands_hint: Some(messages::commands_hint()),
            ..Default::default()
        }
    }

    fn help() -> ChatResponse {
        ChatResponse {
            bot: MessageTemplates::help(),
            ..Default::default()
        }
    }

    fn symptom(&self, payload: &str) -> ChatResponse {
        let text = normalize(payload);

        if is_emergency_or_out_of_scope(&text) {
            return ChatResponse {
                bot: MessageTemplates::emergency(),
                suggestions: Some(category_quick_replies()),
                context: Some(ConversationContext::with(ContextTag::Emergency)),
                ..Default::default()
            };
        }

        let tag: ContextTag = match infer_category(&text) {
            Some(category) => category.into(),
            None => ContextTag::General,
        };
        let treatments = tag
            .category()
            .map(|c| self.catalog.treatments_for(c))
            .unwrap_or(&[]);

        ChatResponse {
            bot: MessageTemplates::symptom_reply(tag),
            recommendations: recommendations(treatments, INLINE_RECOMMENDATION_CAP),
            context: Some(ConversationContext::with(tag)),
            ..Default::default()
        }
    }

    fn recommend(&self, context: &ConversationContext) -> ChatResponse {
        // `general` and `emergency` carry no treatment list; the user still
        // hasn't given a classifiable symptom, so they get the same
        // guidance as an empty context.
        let treatments = context
            .last_category
            .and_then(ContextTag::category)
            .map(|c| self.catalog.treatments_for(c))
            .unwrap_or(&[]);

        let Some(primary) = primary_treatment(treatments) else {
            return ChatResponse {
                bot: MessageTemplates::recommend_needs_symptom(),
                ..Default::default()
            };
        };

        ChatResponse {
            bot: MessageTemplates::recommend_reply(primary.name),
            recommendations: recommendations(treatments, FULL_RECOMMENDATION_CAP),
            cta: Some(Cta::book("Book now", primary.id)),
            ..Default::default()
        }
    }

    fn book(&self, payload: &str, context: &ConversationContext) -> ChatResponse {
        match self.catalog.find_treatment(payload) {
            Some((_, treatment)) => ChatResponse {
                bot: MessageTemplates::booking_confirmation(treatment.name),
                cta: Some(Cta::book("Pick a slot", treatment.id)),
                ..Default::default()
            },
            None => {
                // On a miss, fall back to the primary for the caller's
                // last category when one is known.
                let primary = context
                    .last_category
                    .and_then(ContextTag::category)
                    .map(|c| self.catalog.treatments_for(c))
                    .and_then(primary_treatment);
                ChatResponse {
                    bot: MessageTemplates::book_not_found(primary.map(|p| p.name)),
                    commands_hint: Some(vec!["recommend".into(), "book <treatment>".into()]),
                    ..Default::default()
                }
            }
        }
    }

    fn category_response(&self, tag: ContextTag) -> ChatResponse {
        let treatments = tag
            .category()
            .map(|c| self.catalog.treatments_for(c))
            .unwrap_or(&[]);
        let primary = primary_treatment(treatments);

        let book_suggestion = match primary {
            Some(p) => format!("book {}", p.name.to_lowercase()),
            None => "book <treatment>".to_string(),
        };

        ChatResponse {
            bot: MessageTemplates::category_reply(tag, treatments),
            suggestions: Some(vec!["recommend".into(), book_suggestion, "help".into()]),
            recommendations: recommendations(treatments, FULL_RECOMMENDATION_CAP),
            cta: primary.map(|p| Cta::book("Book now", p.id)),
            context: Some(ConversationContext::with(tag)),
            ..Default::default()
        }
    }
}

fn category_quick_replies() -> Vec<String> {
    CATEGORY_QUICK_REPLIES.iter().map(|s| s.to_string()).collect()
}
