//! Category normalization for the raw, volunteer-entered space labels.
//!
//! A three-pass rule cascade. The type label picks a coarse bucket, then
//! the name/description text refines the generic buckets, with a final
//! override pulling ambiguous outdoor venues into Open Space. Ordered,
//! first match wins throughout; the rule order is load-bearing and must
//! not be rearranged.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data_models::SpaceRecord;

/// The closed set of canonical categories. Every record gets exactly one;
/// `Other` is the universal fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Bar,
    Club,
    Restaurant,
    /// Merged bar/club/restaurant bucket, used only under
    /// [`NightlifeGranularity::Merged`].
    Nightlife,
    Bathhouse,
    Retail,
    PublicArt,
    Cultural,
    OpenSpace,
    Church,
    Shelter,
    Memorial,
    Residential,
    CommunityCentre,
    Health,
    GymSports,
    Other,
}

impl Category {
    /// Display label used in the export and the legend.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bar => "Bar",
            Category::Club => "Club",
            Category::Restaurant => "Restaurant",
            Category::Nightlife => "Bar/Club/Restaurant",
            Category::Bathhouse => "Bathhouse",
            Category::Retail => "Retail",
            Category::PublicArt => "Public Art",
            Category::Cultural => "Cultural",
            Category::OpenSpace => "Open Space",
            Category::Church => "Church",
            Category::Shelter => "Shelter",
            Category::Memorial => "Memorial",
            Category::Residential => "Residential",
            Category::CommunityCentre => "Community Centre",
            Category::Health => "Health",
            Category::GymSports => "Gym/Sports",
            Category::Other => "Other",
        }
    }
}

/// Whether nightlife labels split into Bar/Club/Restaurant or collapse
/// into the earlier single "Bar/Club/Restaurant" bucket. Exactly one rule
/// table is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NightlifeGranularity {
    #[default]
    Split,
    Merged,
}

// Label-driven coarse buckets, checked top to bottom.
const LABEL_RULES: &[(&str, Category)] = &[
    ("retail", Category::Retail),
    ("public art", Category::PublicArt),
    ("cultural", Category::Cultural),
    ("bathhouse", Category::Bathhouse),
    ("cruising spot", Category::OpenSpace),
    ("open space", Category::OpenSpace),
];

const NIGHTLIFE_LABEL_KEYWORDS: &[&str] = &["bar", "restaurant", "club"];

// Open-space override hints: plain substrings, not word-boundary matches.
const OPEN_SPACE_HINTS: &[&str] = &["beach", "park", "trail", "square", "plaza", "field"];

static RESTAURANT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(restaurant|eatery|bistro|diner|trattoria|osteria|taqueria)\b").unwrap()
});
static BAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(bar|pub|tavern)\b").unwrap());
static CLUB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(club|lounge|night\s*club|nightclub|discotheque|disco)\b").unwrap()
});
static CHURCH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(church|cathedral|chapel|parish)\b").unwrap());
// Suppresses the Church Street / Church-Wellesley false positives: a venue
// named for the street is not a place of worship.
static CHURCH_STREET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"church\s*(street|st\.?)|\bchurch-wellesley\b").unwrap());
static SHELTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(shelter|drop[-\s]*in|refuge|homeless|safe\s*house)\b").unwrap());
static MEMORIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(memorial)\b").unwrap());
static RESIDENTIAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(apartment|residential|condo|residence|housing|tenement|tower)\b").unwrap()
});
static COMMUNITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(the 519|community\s+centre|community\s+center|resource\s+centre|resource\s+center|youth\s+service|youth\s+centre|youth\s+center|safe[-\s]*space)\b",
    )
    .unwrap()
});
static HEALTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(clinic|hospital|aids|hiv|health|sexual\s*health|casey house|wellness|testing)\b")
        .unwrap()
});
static GYM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(gym|fitness|workout|yoga|dojo|martial\s*arts|boxing|crossfit|athletic|sports\s*centre|arena|stadium|court|rink|fieldhouse)\b",
    )
    .unwrap()
});

/// Deterministic, side-effect-free classifier over a record's type label,
/// name, and description. Matching is case-insensitive throughout.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    granularity: NightlifeGranularity,
}

impl Classifier {
    pub fn new(granularity: NightlifeGranularity) -> Self {
        Self { granularity }
    }

    /// Total function: every record gets exactly one category.
    pub fn classify(&self, record: &SpaceRecord) -> Category {
        let label = record.type_label.to_lowercase();
        let name = record.name.to_lowercase();
        let description = record.description.to_lowercase();
        let text = format!("{} {}", name, description);

        let mut category = self.label_pass(&label, &text);

        // Text refinement only applies while the label committed to nothing
        // more specific than Other/Open Space.
        if matches!(category, Category::Other | Category::OpenSpace) {
            if let Some(refined) = text_pass(&name, &text) {
                category = refined;
            }
        }

        // Ambiguous outdoor venues group best as open space on the map,
        // even when a generic or loosely-related label was assigned.
        if matches!(
            category,
            Category::Other | Category::Cultural | Category::Retail
        ) && OPEN_SPACE_HINTS.iter().any(|hint| text.contains(hint))
        {
            category = Category::OpenSpace;
        }

        category
    }

    fn label_pass(&self, label: &str, text: &str) -> Category {
        for (keyword, category) in LABEL_RULES {
            if label.contains(keyword) {
                return *category;
            }
        }
        if NIGHTLIFE_LABEL_KEYWORDS.iter().any(|k| label.contains(k)) {
            return match self.granularity {
                NightlifeGranularity::Merged => Category::Nightlife,
                NightlifeGranularity::Split => split_nightlife(text),
            };
        }
        Category::Other
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(NightlifeGranularity::default())
    }
}

/// A "bar"/"club"/"restaurant" label alone is too coarse; the name and
/// description decide which bucket the venue actually belongs to.
fn split_nightlife(text: &str) -> Category {
    if RESTAURANT_RE.is_match(text) {
        Category::Restaurant
    } else if BAR_RE.is_match(text) {
        Category::Bar
    } else if CLUB_RE.is_match(text) {
        Category::Club
    } else {
        Category::Bar
    }
}

/// Text-driven refinement for records the label left generic. Rule order
/// is most-specific-first; a record matching several rules takes the first.
fn text_pass(name: &str, text: &str) -> Option<Category> {
    if CHURCH_RE.is_match(name) && !CHURCH_STREET_RE.is_match(name) {
        Some(Category::Church)
    } else if SHELTER_RE.is_match(text) {
        Some(Category::Shelter)
    } else if MEMORIAL_RE.is_match(name) {
        Some(Category::Memorial)
    } else if RESIDENTIAL_RE.is_match(text) {
        Some(Category::Residential)
    } else if COMMUNITY_RE.is_match(text) {
        Some(Category::CommunityCentre)
    } else if HEALTH_RE.is_match(text) {
        Some(Category::Health)
    } else if GYM_RE.is_match(text) {
        Some(Category::GymSports)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, type_label: &str, description: &str) -> SpaceRecord {
        SpaceRecord {
            name: name.to_string(),
            type_label: type_label.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn classify(name: &str, type_label: &str, description: &str) -> Category {
        Classifier::default().classify(&record(name, type_label, description))
    }

    #[test]
    fn test_label_buckets() {
        assert_eq!(classify("Glad Day", "Retail - Bookstore", ""), Category::Retail);
        assert_eq!(classify("Mural", "Public Art", ""), Category::PublicArt);
        assert_eq!(classify("Buddies", "Cultural venue", ""), Category::Cultural);
        assert_eq!(classify("Spa Excess", "Bathhouse", ""), Category::Bathhouse);
        assert_eq!(classify("Cherry Beach", "Cruising Spot", ""), Category::OpenSpace);
        assert_eq!(classify("Barbara Hall", "Open Space", ""), Category::OpenSpace);
    }

    #[test]
    fn test_label_case_insensitive() {
        assert_eq!(classify("Woody's", "BAR", ""), Category::Bar);
        assert_eq!(classify("Woody's", "Bar", ""), Category::Bar);
        assert_eq!(classify("Woody's", "bar", ""), Category::Bar);
    }

    #[test]
    fn test_nightlife_refinement_restaurant() {
        assert_eq!(
            classify("The Beet", "Bar/Restaurant", "A vegetarian diner on Church"),
            Category::Restaurant
        );
    }

    #[test]
    fn test_nightlife_refinement_club() {
        assert_eq!(
            classify("Fly 2.0", "club", "Legendary nightclub and lounge"),
            Category::Club
        );
    }

    #[test]
    fn test_nightlife_refinement_bar_wins_over_club_order() {
        // "bar" rule is checked before "club": a text with both stays Bar.
        assert_eq!(
            classify("Crews & Tangos", "bar", "drag bar and dance club"),
            Category::Bar
        );
    }

    #[test]
    fn test_nightlife_default_is_bar() {
        assert_eq!(classify("Unnamed", "Bar", "no keywords here"), Category::Bar);
    }

    #[test]
    fn test_merged_granularity() {
        let merged = Classifier::new(NightlifeGranularity::Merged);
        assert_eq!(
            merged.classify(&record("The Beet", "Bar/Restaurant", "A vegetarian diner")),
            Category::Nightlife
        );
        assert_eq!(Category::Nightlife.label(), "Bar/Club/Restaurant");
        // The open-space override still applies under merged granularity.
        assert_eq!(
            merged.classify(&record("Hanlan's Point", "Other", "clothing-optional beach")),
            Category::OpenSpace
        );
    }

    #[test]
    fn test_church_from_name() {
        assert_eq!(
            classify("Metropolitan Community Cathedral", "", ""),
            Category::Church
        );
    }

    #[test]
    fn test_church_street_suppression() {
        // Named for the street, not a place of worship; the community
        // centre rule picks it up instead.
        assert_eq!(
            classify("519 Church Street Community Centre", "", ""),
            Category::CommunityCentre
        );
    }

    #[test]
    fn test_church_wellesley_suppression() {
        assert_eq!(
            classify("Church-Wellesley Village BIA", "", ""),
            Category::Other
        );
    }

    #[test]
    fn test_church_in_description_does_not_count() {
        // Church detection is name-only.
        assert_eq!(
            classify("Some Venue", "", "across from the church"),
            Category::Other
        );
    }

    #[test]
    fn test_shelter() {
        assert_eq!(
            classify("Sprott House", "", "a drop-in refuge for homeless youth, with shelter beds"),
            Category::Shelter
        );
    }

    #[test]
    fn test_memorial_name_only() {
        assert_eq!(classify("AIDS Memorial", "", ""), Category::Memorial);
        assert_eq!(
            classify("Barbara Hall Park", "", "site of the memorial"),
            Category::OpenSpace
        );
    }

    #[test]
    fn test_residential() {
        assert_eq!(
            classify("Alexander Tower", "", "condo residence"),
            Category::Residential
        );
    }

    #[test]
    fn test_community_centre() {
        assert_eq!(classify("The 519", "", ""), Category::CommunityCentre);
        assert_eq!(
            classify("SOY", "", "youth service with a weekly safe space"),
            Category::CommunityCentre
        );
    }

    #[test]
    fn test_health() {
        assert_eq!(
            classify("Hassle Free Clinic", "", "sexual health testing"),
            Category::Health
        );
        assert_eq!(classify("Casey House", "", "casey house hospice"), Category::Health);
    }

    #[test]
    fn test_gym_sports() {
        assert_eq!(
            classify("Mattamy Athletic Centre", "", "arena and fitness facility"),
            Category::GymSports
        );
    }

    #[test]
    fn test_pass2_order_shelter_before_health() {
        // Matches both the shelter and health rule sets; first match wins.
        assert_eq!(
            classify("Refuge House", "", "homeless shelter with an hiv testing clinic"),
            Category::Shelter
        );
    }

    #[test]
    fn test_pass2_skipped_for_specific_labels() {
        // A Retail label commits; the health keywords in the text are ignored.
        assert_eq!(
            classify("Pharmacy", "Retail", "wellness and testing supplies"),
            Category::Retail
        );
    }

    #[test]
    fn test_beach_override_on_retail() {
        assert_eq!(
            classify("Boardwalk Shop", "Retail", "located at the beach boardwalk"),
            Category::OpenSpace
        );
    }

    #[test]
    fn test_open_space_override_on_cultural() {
        assert_eq!(
            classify("Trillium Stage", "Cultural", "outdoor plaza amphitheatre"),
            Category::OpenSpace
        );
    }

    #[test]
    fn test_open_space_override_leaves_specific_buckets_alone() {
        assert_eq!(
            classify("Club on the Square", "club", "club overlooking the square"),
            Category::Club
        );
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(classify("Mystery Spot", "Miscellaneous Venue", ""), Category::Other);
    }

    #[test]
    fn test_totality_on_garbage() {
        assert_eq!(classify("", "", ""), Category::Other);
        assert_eq!(classify("Ω≈ç√∫", "˜µ≤≥", "’“«…æ"), Category::Other);
        let long = "x".repeat(100_000);
        assert_eq!(classify(&long, &long, &long), Category::Other);
    }

    #[test]
    fn test_deterministic() {
        let r = record("Woody's", "Bar", "landmark video bar");
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(&r), classifier.classify(&r));
    }
}
