//! Treatment catalog: symptom categories, their treatment lists, and the
//! fuzzy name matcher used by the `book` command.
//!
//! The catalog is an immutable configuration value built once at startup
//! and passed by reference into the triage engine. Nothing mutates it at
//! runtime; rule and list ORDER is observable behavior (it decides
//! tie-breaks and which match "wins") and must not be reordered casually.

use serde::{Deserialize, Serialize};

use crate::triage::normalize::normalize;

/// A coarse symptom cluster used to select treatments.
///
/// Declaration order here is the classification priority order; the
/// classifier and the catalog both iterate `Category::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Back,
    Neck,
    Knee,
    Shoulder,
    Posture,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Back,
        Category::Neck,
        Category::Knee,
        Category::Shoulder,
        Category::Posture,
    ];

    /// Stable machine key, safe to embed in URLs (`[a-z]` only).
    pub fn slug(self) -> &'static str {
        match self {
            Category::Back => "back",
            Category::Neck => "neck",
            Category::Knee => "knee",
            Category::Shoulder => "shoulder",
            Category::Posture => "posture",
        }
    }
}

/// A bookable treatment.
///
/// `id` is the stable machine key used in booking URLs; it is restricted
/// to `[a-z0-9-]` so it needs no percent-encoding. Duration and price are
/// catalog-owned metadata for the booking surface; the triage core never
/// surfaces them in a chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_inr: Option<u32>,
}

const fn t(
    id: &'static str,
    name: &'static str,
    primary: bool,
    duration_min: u32,
    price_inr: u32,
) -> Treatment {
    Treatment {
        id,
        name,
        primary,
        duration_min: Some(duration_min),
        price_inr: Some(price_inr),
    }
}

/// Read-only mapping from category to its ordered treatment list.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<(Category, Vec<Treatment>)>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            entries: vec![
                (
                    Category::Back,
                    vec![
                        t("manual-therapy", "Manual Therapy", true, 45, 1200),
                        t("exercise-therapy", "Exercise Therapy", false, 40, 900),
                        t("heat-therapy", "Heat Therapy", false, 30, 600),
                        t("dry-needling", "Dry Needling", false, 30, 1000),
                        t("core-strengthening", "Core Strengthening", false, 45, 800),
                    ],
                ),
                (
                    Category::Neck,
                    vec![
                        t("cervical-mobilization", "Cervical Mobilization", true, 40, 1100),
                        t("posture-correction", "Posture Correction", false, 40, 800),
                        t("heat-therapy", "Heat Therapy", false, 30, 600),
                        t("stretching-program", "Stretching Program", false, 35, 700),
                    ],
                ),
                (
                    Category::Knee,
                    vec![
                        t("exercise-therapy", "Exercise Therapy", true, 40, 900),
                        t("manual-therapy", "Manual Therapy", false, 45, 1200),
                        t("ultrasound-therapy", "Ultrasound Therapy", false, 25, 950),
                        t("strength-training", "Strength Training", false, 45, 850),
                    ],
                ),
                (
                    Category::Shoulder,
                    vec![
                        t("shoulder-mobilization", "Shoulder Mobilization", true, 40, 1100),
                        t("exercise-therapy", "Exercise Therapy", false, 40, 900),
                        t("dry-needling", "Dry Needling", false, 30, 1000),
                        t("kinesio-taping", "Kinesio Taping", false, 20, 500),
                    ],
                ),
                (
                    Category::Posture,
                    vec![
                        t("posture-correction", "Posture Correction", true, 40, 800),
                        t("ergonomic-coaching", "Ergonomic Coaching", false, 45, 750),
                        t("core-strengthening", "Core Strengthening", false, 45, 800),
                        t("stretching-program", "Stretching Program", false, 35, 700),
                    ],
                ),
            ],
        }
    }
}

impl Catalog {
    /// Ordered treatment list for a category. Unknown categories yield an
    /// empty slice, never an error.
    pub fn treatments_for(&self, category: Category) -> &[Treatment] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    /// Fuzzy treatment lookup for free text from the `book` command.
    ///
    /// Matches on exact normalized name equality, or substring containment
    /// in either direction ("exercise" finds "Exercise Therapy",
    /// "exercise therapy please" finds it too). First match in
    /// catalog-iteration order wins.
    pub fn find_treatment(&self, free_text: &str) -> Option<(Category, &Treatment)> {
        let query = normalize(free_text);
        if query.is_empty() {
            return None;
        }
        for (category, list) in &self.entries {
            for treatment in list {
                let name = treatment.name.to_lowercase();
                if name == query || name.contains(&query) || query.contains(&name) {
                    return Some((*category, treatment));
                }
            }
        }
        None
    }

    /// Iterate all (category, treatments) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Treatment])> {
        self.entries.iter().map(|(c, list)| (*c, list.as_slice()))
    }
}

/// The designated primary treatment: the entry flagged `primary`, else the
/// first list entry. An unflagged list is a fallback case, not an error.
pub fn primary_treatment(treatments: &[Treatment]) -> Option<&Treatment> {
    treatments
        .iter()
        .find(|t| t.primary)
        .or_else(|| treatments.first())
}
