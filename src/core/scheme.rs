use serde::{Deserialize, Serialize};

/// A government welfare, subsidy, loan or scholarship program
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    /// Human-readable title
    #[serde(default)]
    pub name: String,

    /// `scholarship`, `subsidy`, `loan`, `grant`, ...
    #[serde(default)]
    pub category: String,

    /// Free-text monetary description (e.g. "₹6,000/year")
    #[serde(default)]
    pub amount: String,

    #[serde(default)]
    pub deadline: String,

    /// Free-text eligibility, may mention category codes
    #[serde(default)]
    pub eligibility: String,

    /// Application steps, usually one numbered step per line
    #[serde(default)]
    pub how_to_apply: String,

    #[serde(default)]
    pub link: String,

    /// Origin portal, empty when unknown
    #[serde(default)]
    pub source: String,
}

impl Scheme {
    /// Create a scheme with the required fields, everything else empty
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_eligibility(mut self, eligibility: impl Into<String>) -> Self {
        self.eligibility = eligibility.into();
        self
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        if self.source.is_empty() {
            format!("{} [{}]", self.name, self.category)
        } else {
            format!("{} [{}] ({})", self.name, self.category, self.source)
        }
    }
}

/// Scheme plus its match score for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredScheme {
    #[serde(flatten)]
    pub scheme: Scheme,

    /// Always within `[MIN_SCORE, MAX_SCORE]`
    pub match_score: u32,
}

impl ScoredScheme {
    pub fn new(scheme: Scheme, match_score: u32) -> Self {
        Self { scheme, match_score }
    }

    /// Display string for logging
    pub fn display(&self) -> String {
        format!("{} - {}% match", self.scheme.display_name(), self.match_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let scheme: Scheme =
            serde_json::from_str(r#"{"name":"PM Vishwakarma Yojana","category":"grant"}"#).unwrap();
        assert_eq!(scheme.name, "PM Vishwakarma Yojana");
        assert_eq!(scheme.eligibility, "");
        assert_eq!(scheme.how_to_apply, "");
    }

    #[test]
    fn test_scored_scheme_flattens_fields() {
        let scored = ScoredScheme::new(
            Scheme::new("Stand Up India Scheme", "loan").with_amount("Loan ₹10 Lakh to ₹1 Crore"),
            77,
        );
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["name"], "Stand Up India Scheme");
        assert_eq!(json["amount"], "Loan ₹10 Lakh to ₹1 Crore");
        assert_eq!(json["matchScore"], 77);
        assert!(json.get("scheme").is_none());
    }

    #[test]
    fn test_display_name() {
        let mut scheme = Scheme::new("PM-KISAN Samman Nidhi Yojana", "subsidy");
        assert_eq!(scheme.display_name(), "PM-KISAN Samman Nidhi Yojana [subsidy]");

        scheme.source = "myscheme.gov.in".to_string();
        assert_eq!(
            scheme.display_name(),
            "PM-KISAN Samman Nidhi Yojana [subsidy] (myscheme.gov.in)"
        );
    }
}
