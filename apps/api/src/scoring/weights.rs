use serde::{Deserialize, Serialize};

/// Weights of the ATS dimensions. Defaults sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keywords: f64,
    pub formatting: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keywords: 0.4,
            formatting: 0.2,
            skills: 0.2,
            experience: 0.1,
            education: 0.1,
        }
    }
}

/// Weights of the resume quality dimensions. Defaults sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityWeights {
    pub content: f64,
    pub structure: f64,
    pub keywords: f64,
    pub achievements: f64,
    pub readability: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            content: 0.35,
            structure: 0.20,
            keywords: 0.20,
            achievements: 0.15,
            readability: 0.10,
        }
    }
}

/// Weighted sum clamped to [0, 100].
pub fn weighted_total(pairs: &[(f64, f64)]) -> f64 {
    pairs
        .iter()
        .map(|(score, weight)| score * weight)
        .sum::<f64>()
        .clamp(0.0, 100.0)
}
