//! Relevance of keywords to an industry and job level.

use serde::{Deserialize, Serialize};

use crate::keywords::vocabulary::{
    categorize_keyword, industry_group_weight, industry_terms, is_action_verb, is_certification,
    is_industry_keyword, is_technical_keyword, level_terms,
};
use crate::models::{Industry, JobLevel, Keyword, KeywordCategory};

const MAX_BASE_SCORE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRelevance {
    pub keyword: String,
    pub base_score: f64,
    pub industry_score: f64,
    pub level_score: f64,
    /// Mean of the three component scores.
    pub total_score: f64,
    pub category: KeywordCategory,
    pub frequency: u32,
    pub importance: f64,
}

/// Scores each keyword and returns them most relevant first.
pub fn analyze_relevance(
    keywords: &[Keyword],
    industry: Industry,
    level: JobLevel,
) -> Vec<KeywordRelevance> {
    let mut scored: Vec<KeywordRelevance> = keywords
        .iter()
        .map(|keyword| {
            let base_score = base_keyword_score(&keyword.word);
            let industry_score = industry_score(&keyword.word, industry);
            let level_score = level_score(&keyword.word, level);
            KeywordRelevance {
                keyword: keyword.word.clone(),
                base_score,
                industry_score,
                level_score,
                total_score: (base_score + industry_score + level_score) / 3.0,
                category: categorize_keyword(&keyword.word),
                frequency: keyword.frequency.max(1),
                importance: if keyword.importance > 0.0 {
                    keyword.importance
                } else {
                    1.0
                },
            }
        })
        .collect();

    scored.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    scored
}

/// 1, plus 2 technical, 1.5 industry, 1 action verb, 2 certification;
/// capped at 5.
pub fn base_keyword_score(word: &str) -> f64 {
    let mut score = 1.0;
    if is_technical_keyword(word) {
        score += 2.0;
    }
    if is_industry_keyword(word) {
        score += 1.5;
    }
    if is_action_verb(word) {
        score += 1.0;
    }
    if is_certification(word) {
        score += 2.0;
    }
    f64::min(score, MAX_BASE_SCORE)
}

/// Group weight × 5 when the word is in the industry's database, else 1.
pub fn industry_score(word: &str, industry: Industry) -> f64 {
    let word = word.trim().to_lowercase();
    industry_terms(industry)
        .iter()
        .find(|(_, terms)| terms.contains(&word.as_str()))
        .map(|(group, _)| industry_group_weight(industry, group) * 5.0)
        .unwrap_or(1.0)
}

/// 3 when the keyword mentions a seniority term for the level, else 1.
pub fn level_score(word: &str, level: JobLevel) -> f64 {
    let word = word.to_lowercase();
    if level_terms(level).iter().any(|term| word.contains(term)) {
        3.0
    } else {
        1.0
    }
}
