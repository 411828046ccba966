//! Keyword extraction from job descriptions and resumes.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::keywords::tokenizer::{count_token_runs, tokenize, word_frequencies};
use crate::keywords::vocabulary::{
    categorize_keyword, is_action_verb, is_certification, is_industry_keyword, is_stop_word,
    is_technical_keyword, scan_vocabulary, PRIORITY_TECHNICAL,
};
use crate::models::{Keyword, KeywordCategory, ResumeDocument};

/// One whole-word, case-insensitive pattern per vocabulary term.
static VOCABULARY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    scan_vocabulary()
        .map(|term| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            (term, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Runs of capitalized words: "Product Owner", "Google Cloud Platform".
static CAPITALIZED_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*\b").unwrap());

/// Keywords a job description asks for, unique by word and sorted by
/// descending importance. Blank input yields nothing.
pub fn extract_job_keywords(text: &str) -> Vec<Keyword> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    let mut keywords = Vec::new();

    for (term, pattern) in VOCABULARY_PATTERNS.iter() {
        let hits = pattern.find_iter(&lower).count();
        if hits > 0 {
            keywords.push(Keyword {
                word: term.to_string(),
                frequency: hits as u32,
                importance: job_keyword_importance(term, &lower),
                category: categorize_keyword(term),
            });
        }
    }

    keywords.extend(extract_custom_keywords(text));

    // Stable sort: among equal importance the vocabulary entry stays ahead
    // of a custom phrase with the same word.
    keywords.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    let mut seen = HashSet::new();
    keywords.retain(|k| seen.insert(k.word.clone()));

    debug!(count = keywords.len(), "extracted job keywords");
    keywords
}

/// Base 1, +2 when the posting marks anything as required, +1 when it lists
/// preferences, +1 for the core technical terms.
pub fn job_keyword_importance(keyword: &str, job_text_lower: &str) -> f64 {
    let mut importance = 1.0;
    if job_text_lower.contains("required") || job_text_lower.contains("must have") {
        importance += 2.0;
    }
    if job_text_lower.contains("preferred") || job_text_lower.contains("nice to have") {
        importance += 1.0;
    }
    if PRIORITY_TECHNICAL.contains(&keyword) {
        importance += 1.0;
    }
    importance
}

/// Capitalized multi-word phrases, with leading and trailing stopwords
/// stripped ("The Data Platform" → "data platform"). Single words are
/// dropped since sentence-initial capitals would flood the list.
pub fn extract_custom_keywords(text: &str) -> Vec<Keyword> {
    let mut custom: Vec<Keyword> = Vec::new();
    for m in CAPITALIZED_PHRASE.find_iter(text) {
        let words: Vec<&str> = m.as_str().split_whitespace().collect();
        let start = words.iter().position(|w| !is_stop_word(w));
        let end = words.iter().rposition(|w| !is_stop_word(w));
        let (Some(start), Some(end)) = (start, end) else {
            continue;
        };
        if end <= start {
            continue;
        }
        let phrase = words[start..=end].join(" ").to_lowercase();
        match custom.iter_mut().find(|k| k.word == phrase) {
            Some(existing) => existing.frequency += 1,
            None => custom.push(Keyword {
                word: phrase,
                frequency: 1,
                importance: 1.0,
                category: KeywordCategory::Custom,
            }),
        }
    }
    custom
}

/// Single-word keywords with a term-frequency importance, boosted for
/// technical (x2), action (x1.5), industry (x1.8) and certification (x2.5)
/// terms. Stopwords and short tokens are skipped.
pub fn extract_single_keywords(text: &str) -> Vec<Keyword> {
    let tokens = tokenize(text);
    let total = tokens.len();
    if total == 0 {
        return Vec::new();
    }

    let mut keywords: Vec<Keyword> = word_frequencies(&tokens)
        .into_iter()
        .filter(|(word, _)| !is_stop_word(word))
        .map(|(word, frequency)| {
            let importance = single_word_importance(&word, frequency, total);
            Keyword::new(word, frequency, importance)
        })
        .collect();

    keywords.sort_by(|a, b| {
        b.importance
            .total_cmp(&a.importance)
            .then_with(|| a.word.cmp(&b.word))
    });
    keywords
}

fn single_word_importance(word: &str, frequency: u32, total_words: usize) -> f64 {
    let mut importance = frequency as f64 / total_words as f64;
    if is_technical_keyword(word) {
        importance *= 2.0;
    }
    if is_action_verb(word) {
        importance *= 1.5;
    }
    if is_industry_keyword(word) {
        importance *= 1.8;
    }
    if is_certification(word) {
        importance *= 2.5;
    }
    importance
}

/// Keywords a resume offers: word frequencies over its keyword-bearing text,
/// plus multi-word vocabulary terms and skill items taken verbatim so that
/// phrases like "machine learning" can match exactly.
pub fn extract_resume_keywords(resume: &ResumeDocument) -> Vec<Keyword> {
    let text = resume.ats_text().to_lowercase();
    let tokens = tokenize(&text);

    let mut keywords: Vec<Keyword> = word_frequencies(&tokens)
        .into_iter()
        .map(|(word, frequency)| Keyword::new(word, frequency, 1.0))
        .collect();
    let mut seen: HashSet<String> = keywords.iter().map(|k| k.word.clone()).collect();

    for (term, pattern) in VOCABULARY_PATTERNS.iter() {
        if seen.contains(*term) {
            continue;
        }
        let hits = pattern.find_iter(&text).count();
        if hits > 0 {
            seen.insert(term.to_string());
            keywords.push(Keyword::new(*term, hits as u32, 1.0));
        }
    }

    for item in resume.skill_items() {
        let item = item.trim().to_lowercase();
        if item.is_empty() || seen.contains(&item) {
            continue;
        }
        let hits = count_token_runs(&tokens, &tokenize(&item)).max(1);
        seen.insert(item.clone());
        keywords.push(Keyword::new(item, hits as u32, 1.0));
    }

    keywords.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.word.cmp(&b.word))
    });
    keywords
}
