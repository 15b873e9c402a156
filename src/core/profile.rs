use serde::{Deserialize, Serialize};

/// Citizen profile collected by the wizard
///
/// Only `occupation`, `category`, `gender` and `bpl_status` feed the scorer.
/// The remaining fields are carried through for display and export.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub age: String,

    /// `male`, `female` or `other`
    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub mobile: String,

    #[serde(default)]
    pub email: String,

    /// Social category code (`sc`, `st`, `obc`, `general`)
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub religion: String,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub district: String,

    #[serde(default)]
    pub income: String,

    /// `bpl` when the household is below the poverty line
    #[serde(default)]
    pub bpl_status: String,

    /// `student`, `farmer`, `businessman`, `other` or empty
    #[serde(default)]
    pub occupation: String,

    #[serde(default)]
    pub education_level: String,

    #[serde(default)]
    pub stream: String,

    #[serde(default)]
    pub current_year: String,

    #[serde(default)]
    pub board: String,
}

impl Profile {
    /// Create a profile carrying only the scoring attributes
    pub fn new(
        occupation: impl Into<String>,
        category: impl Into<String>,
        gender: impl Into<String>,
        bpl_status: impl Into<String>,
    ) -> Self {
        Self {
            occupation: occupation.into(),
            category: category.into(),
            gender: gender.into(),
            bpl_status: bpl_status.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_bpl(&self) -> bool {
        self.bpl_status == "bpl"
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
