use crate::core::{Profile, Scheme};
use crate::ranking::jitter::{JitterSource, MAX_JITTER};
use crate::ranking::Scorer;

/// Starting score before any rule fires
pub const BASE_SCORE: u32 = 50;

/// Upper bound of a match score
pub const MAX_SCORE: u32 = 98;

/// Lower bound of a match score
pub const MIN_SCORE: u32 = 0;

/// Social categories that are looked up in the eligibility text
const TARGETED_CATEGORIES: &[&str] = &["sc", "st"];

/// One additive scoring rule
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub bonus: i32,
    applies: fn(&Profile, &Scheme) -> bool,
}

impl Rule {
    pub fn applies(&self, profile: &Profile, scheme: &Scheme) -> bool {
        (self.applies)(profile, scheme)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("bonus", &self.bonus)
            .finish()
    }
}

/// Rule table, evaluated independently for every (profile, scheme) pair
pub const RULES: &[Rule] = &[
    Rule {
        name: "student_scholarship",
        bonus: 25,
        applies: student_scholarship,
    },
    Rule {
        name: "farmer_kisan",
        bonus: 30,
        applies: farmer_kisan,
    },
    Rule {
        name: "business_loan",
        bonus: 25,
        applies: business_loan,
    },
    Rule {
        name: "social_category",
        bonus: 20,
        applies: social_category,
    },
    Rule {
        name: "bpl",
        bonus: 10,
        applies: below_poverty_line,
    },
    Rule {
        name: "girl_scheme",
        bonus: 15,
        applies: girl_scheme,
    },
];

/// Case-insensitive substring search. "kisan" matches inside "pmkisan".
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn student_scholarship(profile: &Profile, scheme: &Scheme) -> bool {
    profile.occupation == "student" && scheme.category == "scholarship"
}

fn farmer_kisan(profile: &Profile, scheme: &Scheme) -> bool {
    profile.occupation == "farmer" && contains_ci(&scheme.name, "kisan")
}

fn business_loan(profile: &Profile, scheme: &Scheme) -> bool {
    profile.occupation == "businessman"
        && (scheme.category == "loan" || contains_ci(&scheme.name, "mudra"))
}

fn social_category(profile: &Profile, scheme: &Scheme) -> bool {
    TARGETED_CATEGORIES.contains(&profile.category.as_str())
        && contains_ci(&scheme.eligibility, &profile.category)
}

fn below_poverty_line(profile: &Profile, _scheme: &Scheme) -> bool {
    profile.is_bpl()
}

fn girl_scheme(profile: &Profile, scheme: &Scheme) -> bool {
    profile.gender == "female" && contains_ci(&scheme.name, "girl")
}

/// Rule-table scorer: base score, additive bonuses, jitter, clamp
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleScorer;

impl RuleScorer {
    pub fn new() -> Self {
        Self
    }

    /// Names of the rules that fire for this pair
    pub fn matched_rules(&self, profile: &Profile, scheme: &Scheme) -> Vec<&'static str> {
        RULES
            .iter()
            .filter(|rule| rule.applies(profile, scheme))
            .map(|rule| rule.name)
            .collect()
    }

    /// Sum of the bonuses that fire, before jitter and clamping
    pub fn bonus(&self, profile: &Profile, scheme: &Scheme) -> i32 {
        RULES
            .iter()
            .filter(|rule| rule.applies(profile, scheme))
            .map(|rule| rule.bonus)
            .sum()
    }
}

impl Scorer for RuleScorer {
    fn score(&self, profile: &Profile, scheme: &Scheme, jitter: &mut dyn JitterSource) -> u32 {
        let jitter = jitter.next_jitter().min(MAX_JITTER);
        let raw = i64::from(BASE_SCORE)
            + i64::from(self.bonus(profile, scheme))
            + i64::from(jitter);

        raw.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u32
    }

    fn name(&self) -> &str {
        "rules"
    }
}
