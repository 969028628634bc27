//! Reply templates and fixed quick-reply sets.
//!
//! All user-visible wording lives here so the engine stays pure control
//! flow. Calm, non-alarmist register; the emergency message directs to
//! care without diagnosing.

use crate::catalog::Treatment;
use crate::triage::types::ContextTag;

/// The five category quick replies shown when we need the user to pick a
/// body area.
pub const CATEGORY_QUICK_REPLIES: [&str; 5] = [
    "Back Pain",
    "Neck Pain",
    "Knee Pain",
    "Shoulder Pain",
    "Posture Issues",
];

/// Quick replies for the onboarding / greeting turn.
pub const ONBOARDING_QUICK_REPLIES: [&str; 3] =
    ["Start Consultation", "Describe Symptom", "Help"];

/// Quick replies attached to the fallback apology turn.
pub const APOLOGY_QUICK_REPLIES: [&str; 2] = ["Start Consultation", "Help"];

/// Example commands shown as a hint under the input box.
pub fn commands_hint() -> Vec<String> {
    vec![
        "symptom: <describe what hurts>".into(),
        "recommend".into(),
        "book <treatment>".into(),
        "help".into(),
    ]
}

/// Fixed display label for a context tag.
pub fn display_label(tag: ContextTag) -> &'static str {
    match tag {
        ContextTag::Back => "back",
        ContextTag::Neck => "neck",
        ContextTag::Knee => "knee",
        ContextTag::Shoulder => "shoulder",
        ContextTag::Posture => "posture",
        ContextTag::General => "general",
        ContextTag::Emergency => "emergency",
    }
}

/// Category-specific follow-up question for the `symptom:` path.
pub fn follow_up(tag: ContextTag) -> &'static str {
    match tag {
        ContextTag::Back => {
            "Does the pain stay in your back, or does it travel down your leg?"
        }
        ContextTag::Neck => {
            "Does turning your head make it worse, and did it start after a jolt or a long day at the screen?"
        }
        ContextTag::Knee => {
            "Does it hurt more going up stairs, down stairs, or after sitting for a while?"
        }
        ContextTag::Shoulder => {
            "Can you raise your arm above your head, and does it ache at night?"
        }
        ContextTag::Posture => {
            "How many hours a day do you spend seated, and where do you feel it most?"
        }
        ContextTag::General | ContextTag::Emergency => {
            "How long have you had this, and does anything make it better or worse?"
        }
    }
}

/// Template builders for every canned reply the engine emits.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Greeting / empty-message onboarding.
    pub fn onboarding() -> String {
        "Namaste! I'm the PhysioAssist triage companion. Tell me what's bothering you, \
         or tap Start Consultation and I'll walk you through it."
            .into()
    }

    /// `start` command.
    pub fn start_prompt() -> String {
        "Let's begin. Describe your symptom in a few words — for example \
         \"symptom: sharp lower back pain\" — and I'll suggest treatments that fit."
            .into()
    }

    /// `help` command: enumerate the grammar.
    pub fn help() -> String {
        "Here's what I understand:\n\
         • start — begin a consultation\n\
         • symptom: <description> — describe what hurts\n\
         • recommend — treatments for your last symptom\n\
         • book <treatment> — get a booking link\n\
         • help — show this message"
            .into()
    }

    /// Safety short-circuit. Directs to care without diagnosing.
    pub fn emergency() -> String {
        "What you're describing may need prompt medical attention, and it's outside \
         what physiotherapy triage can help with. Please contact a doctor or your \
         local emergency services right away. If it turns out to be muscle or joint \
         related, I'm here afterwards — you can pick a body area below."
            .into()
    }

    /// Non-command text that matched no category rule.
    pub fn no_match() -> String {
        "I couldn't confidently match that to a body area I know. Could you pick one \
         below, or describe it with a word like back, neck, knee, shoulder or posture?"
            .into()
    }

    /// `recommend` without a usable prior category.
    pub fn recommend_needs_symptom() -> String {
        "Tell me your symptom first — try \"symptom: my knee hurts\" — and then \
         I can recommend treatments that fit."
            .into()
    }

    /// `symptom:` reply: category label + follow-up question.
    pub fn symptom_reply(tag: ContextTag) -> String {
        format!(
            "Noted — this sounds like a {} concern. {}",
            display_label(tag),
            follow_up(tag)
        )
    }

    /// Free-text category hit: label + up to three treatments as bullets.
    pub fn category_reply(tag: ContextTag, treatments: &[Treatment]) -> String {
        let bullets: String = treatments
            .iter()
            .take(3)
            .map(|t| format!("\n• {}", t.name))
            .collect();
        format!(
            "That sounds like a {} issue. These usually help:{}\n\
             Say \"recommend\" for the full picture, or \"book <treatment>\" when ready.",
            display_label(tag),
            bullets
        )
    }

    /// `recommend` reply naming the primary treatment.
    pub fn recommend_reply(primary_name: &str) -> String {
        format!(
            "Based on what you told me, I'd start with {primary_name}. \
             Here are the options our physiotherapists offer for this:"
        )
    }

    /// `book` hit: confirmation naming the matched treatment.
    pub fn booking_confirmation(treatment_name: &str) -> String {
        format!(
            "Great choice — {treatment_name} it is. Use the button below to pick \
             a slot that suits you."
        )
    }

    /// `book` miss. Names the last category's primary when one is known.
    pub fn book_not_found(known_primary: Option<&str>) -> String {
        match known_primary {
            Some(name) => format!(
                "I couldn't find that treatment in our catalog. For your last \
                 symptom I'd start with {name} — try \"book {}\" — or say \
                 \"recommend\" to see every option.",
                name.to_lowercase()
            ),
            None => "I couldn't find that treatment in our catalog. Try the exact \
                 name — for example \"book manual therapy\" — or say \"recommend\" \
                 to see what fits your symptom."
                .into(),
        }
    }

    /// Fault-barrier fallback. Never exposes the underlying error.
    pub fn apology() -> String {
        "Sorry — I hit a technical snag on my side. Nothing you did; please try \
         that again in a moment."
            .into()
    }
}
