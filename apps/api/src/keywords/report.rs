//! Keyword optimization report for a resume against one job description.

use serde::{Deserialize, Serialize};

use crate::keywords::density::{analyze_density, DensityEntry};
use crate::keywords::extractor::{extract_job_keywords, extract_resume_keywords};
use crate::keywords::matcher::match_keywords;
use crate::keywords::tokenizer::{key_phrases, Phrase};
use crate::keywords::vocabulary::{suggest_section, usage_example};
use crate::models::{
    Industry, KeywordCategory, KeywordMatch, MissingKeyword, ResumeDocument, ResumeSection,
};

const MAX_SUGGESTIONS: usize = 15;
const TOP_MISSING: usize = 5;
const OVERUSED_DENSITY: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSuggestion {
    pub keyword: String,
    pub importance: f64,
    pub category: KeywordCategory,
    pub synonyms: Vec<String>,
    pub suggested_section: ResumeSection,
    /// Example resume line using the keyword.
    pub context: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Critical,
    Warning,
    Opportunity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecommendation {
    pub kind: RecommendationKind,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Matched job keywords as a percentage of all job keywords.
    pub match_score: f64,
    pub total_matches: usize,
    pub total_keywords: usize,
    pub matches: Vec<KeywordMatch>,
    pub density: Vec<DensityEntry>,
    pub suggestions: Vec<KeywordSuggestion>,
    pub top_missing: Vec<KeywordSuggestion>,
    pub overused: Vec<DensityEntry>,
    /// Repeated, meaningful phrases in the job description.
    pub key_phrases: Vec<Phrase>,
    pub recommendations: Vec<KeywordRecommendation>,
}

pub fn generate_keyword_report(
    resume: &ResumeDocument,
    job_description: &str,
    industry: Industry,
    threshold: f64,
) -> KeywordReport {
    let job_keywords = extract_job_keywords(job_description);
    let resume_keywords = extract_resume_keywords(resume);
    let result = match_keywords(&job_keywords, &resume_keywords, threshold);

    let job_words: Vec<String> = job_keywords.iter().map(|k| k.word.clone()).collect();
    let density = analyze_density(&resume.keyword_text(), &job_words);
    let suggestions = build_suggestions(&result.missing, industry);

    let total_keywords = job_keywords.len();
    let total_matches = result.matches.len();
    let match_score = if total_keywords > 0 {
        total_matches as f64 / total_keywords as f64 * 100.0
    } else {
        0.0
    };

    let overused: Vec<DensityEntry> = density
        .iter()
        .filter(|d| d.density > OVERUSED_DENSITY)
        .cloned()
        .collect();
    let recommendations =
        keyword_recommendations(total_matches, suggestions.len(), !overused.is_empty());

    KeywordReport {
        match_score,
        total_matches,
        total_keywords,
        matches: result.matches,
        density,
        top_missing: suggestions.iter().take(TOP_MISSING).cloned().collect(),
        suggestions,
        overused,
        key_phrases: key_phrases(job_description),
        recommendations,
    }
}

/// Missing keywords as placement suggestions, most important first.
pub fn build_suggestions(missing: &[MissingKeyword], industry: Industry) -> Vec<KeywordSuggestion> {
    let mut suggestions: Vec<KeywordSuggestion> = missing
        .iter()
        .map(|m| KeywordSuggestion {
            keyword: m.keyword.clone(),
            importance: m.importance,
            category: m.category,
            synonyms: m.synonyms.clone(),
            suggested_section: suggest_section(&m.keyword),
            context: usage_example(&m.keyword, industry),
        })
        .collect();
    suggestions.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn keyword_recommendations(
    matches: usize,
    suggestions: usize,
    has_overused: bool,
) -> Vec<KeywordRecommendation> {
    let mut recs = Vec::new();
    if matches < 5 {
        recs.push(KeywordRecommendation {
            kind: RecommendationKind::Critical,
            message: "Very few keyword matches found".to_string(),
            action: "Add more relevant keywords from job description".to_string(),
        });
    }
    if has_overused {
        recs.push(KeywordRecommendation {
            kind: RecommendationKind::Warning,
            message: "Some keywords may be overused".to_string(),
            action: "Reduce frequency of overused keywords to appear more natural".to_string(),
        });
    }
    if suggestions > 10 {
        recs.push(KeywordRecommendation {
            kind: RecommendationKind::Opportunity,
            message: "Many missing keywords identified".to_string(),
            action: "Focus on adding the top 5-7 most important missing keywords".to_string(),
        });
    }
    recs
}
