use serde::{Deserialize, Serialize};

/// Keyword buckets. `Tools` and `Certification` come from the category
/// lookup table, `Custom` from capitalized phrases in a job description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Technical,
    Soft,
    Action,
    Industry,
    Tools,
    Certification,
    Custom,
    #[default]
    General,
}

/// A keyword with how often it occurs and how much it matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    #[serde(default)]
    pub frequency: u32,
    #[serde(default = "default_importance")]
    pub importance: f64,
    #[serde(default)]
    pub category: KeywordCategory,
}

fn default_importance() -> f64 {
    1.0
}

impl Keyword {
    pub fn new(word: impl Into<String>, frequency: u32, importance: f64) -> Self {
        let word = word.into();
        let category = crate::keywords::vocabulary::categorize_keyword(&word);
        Self {
            word,
            frequency,
            importance,
            category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Fuzzy,
    Synonym,
}

/// A job keyword that the resume covers, and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub job_keyword: String,
    pub resume_keyword: String,
    pub match_type: MatchType,
    /// 1.0 exact, 0.8 synonym, similarity for fuzzy.
    pub confidence: f64,
    /// Occurrences of the resume keyword.
    pub frequency: u32,
    /// Importance of the job keyword, carried so scorers need no second lookup.
    pub importance: f64,
}

/// A job keyword with no exact, synonym or fuzzy counterpart in the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingKeyword {
    pub keyword: String,
    pub importance: f64,
    pub category: KeywordCategory,
    pub synonyms: Vec<String>,
}
