//! Job-to-resume keyword matching: exact, then synonym table, then
//! Levenshtein similarity.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keywords::vocabulary::synonyms_for;
use crate::models::{Keyword, KeywordMatch, MatchType, MissingKeyword};

pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;
pub const SYNONYM_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Sorted by confidence, highest first.
    pub matches: Vec<KeywordMatch>,
    pub missing: Vec<MissingKeyword>,
}

impl MatchResult {
    /// Share of job keywords that found a match, 0–100.
    pub fn coverage(&self) -> f64 {
        let total = self.matches.len() + self.missing.len();
        if total == 0 {
            return 0.0;
        }
        self.matches.len() as f64 / total as f64 * 100.0
    }
}

/// Edit distance over chars using two rolling rows.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Shorter string on the column axis
    let (target, source) = if a.len() < b.len() { (&a, &b) } else { (&b, &a) };
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        for j in 0..target.len() {
            let cost = usize::from(sc != target[j]);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;
            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }
    row[target.len()]
}

/// Normalized similarity `(max_len - distance) / max_len`; 1.0 for two
/// empty strings.
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Matches every job keyword against the resume keywords. The first
/// strategy that succeeds wins; the rest go to `missing` with their
/// synonym suggestions.
pub fn match_keywords(job: &[Keyword], resume: &[Keyword], threshold: f64) -> MatchResult {
    let mut result = MatchResult::default();
    let resume_lower: Vec<String> = resume.iter().map(|k| k.word.to_lowercase()).collect();

    for job_keyword in job {
        let word = job_keyword.word.to_lowercase();
        match find_match(&word, &resume_lower, threshold) {
            Some((idx, match_type, confidence)) => {
                let found = &resume[idx];
                result.matches.push(KeywordMatch {
                    job_keyword: job_keyword.word.clone(),
                    resume_keyword: found.word.clone(),
                    match_type,
                    confidence,
                    frequency: found.frequency,
                    importance: job_keyword.importance,
                });
            }
            None => result.missing.push(MissingKeyword {
                keyword: job_keyword.word.clone(),
                importance: job_keyword.importance,
                category: job_keyword.category,
                synonyms: synonyms_for(&word).iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    result
        .matches
        .sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    debug!(
        matched = result.matches.len(),
        missing = result.missing.len(),
        "matched keywords"
    );
    result
}

fn find_match(word: &str, resume: &[String], threshold: f64) -> Option<(usize, MatchType, f64)> {
    if let Some(idx) = resume.iter().position(|r| r == word) {
        return Some((idx, MatchType::Exact, 1.0));
    }

    for synonym in synonyms_for(word) {
        if let Some(idx) = resume.iter().position(|r| r == synonym) {
            return Some((idx, MatchType::Synonym, SYNONYM_CONFIDENCE));
        }
    }

    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in resume.iter().enumerate() {
        let similarity = calculate_similarity(word, candidate);
        if similarity >= threshold && best.map_or(true, |(_, s)| similarity > s) {
            best = Some((idx, similarity));
        }
    }
    best.map(|(idx, similarity)| (idx, MatchType::Fuzzy, similarity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keyword(word: &str, frequency: u32, importance: f64) -> Keyword {
        Keyword::new(word, frequency, importance)
    }

    #[test]
    fn test_levenshtein_known_distances() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(calculate_similarity("javascript", "javascript"), 1.0);
        assert_eq!(calculate_similarity("", ""), 1.0);
        assert_eq!(calculate_similarity("", "x"), 0.0);
        let s = calculate_similarity("kubernetes", "kubernets");
        assert!((s - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let job = vec![make_keyword("Python", 1, 2.0)];
        let resume = vec![make_keyword("python", 3, 1.0)];
        let result = match_keywords(&job, &resume, DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(result.matches.len(), 1);
        let m = &result.matches[0];
        assert_eq!(m.match_type, MatchType::Exact);
        assert_eq!(m.confidence, 1.0);
        assert_eq!(m.frequency, 3);
        assert_eq!(m.importance, 2.0);
        assert_eq!(m.job_keyword.to_lowercase(), m.resume_keyword.to_lowercase());
    }

    #[test]
    fn test_synonym_beats_fuzzy() {
        let job = vec![make_keyword("javascript", 1, 1.0)];
        let resume = vec![make_keyword("javascrip", 1, 1.0), make_keyword("js", 4, 1.0)];
        let result = match_keywords(&job, &resume, DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(result.matches[0].match_type, MatchType::Synonym);
        assert_eq!(result.matches[0].resume_keyword, "js");
        assert_eq!(result.matches[0].confidence, SYNONYM_CONFIDENCE);
    }

    #[test]
    fn test_fuzzy_picks_best_candidate() {
        let job = vec![make_keyword("kubernetes", 1, 1.0)];
        let resume = vec![
            make_keyword("kubernet", 1, 1.0),
            make_keyword("kubernets", 2, 1.0),
        ];
        let result = match_keywords(&job, &resume, DEFAULT_FUZZY_THRESHOLD);
        let m = &result.matches[0];
        assert_eq!(m.match_type, MatchType::Fuzzy);
        assert_eq!(m.resume_keyword, "kubernets");
        assert!((m.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_missing_keywords_carry_synonyms() {
        let job = vec![make_keyword("leadership", 1, 1.5)];
        let resume = vec![make_keyword("gardening", 1, 1.0)];
        let result = match_keywords(&job, &resume, DEFAULT_FUZZY_THRESHOLD);
        assert!(result.matches.is_empty());
        assert_eq!(result.missing.len(), 1);
        assert!(result.missing[0].synonyms.contains(&"mentoring".to_string()));
        assert_eq!(result.coverage(), 0.0);
    }

    #[test]
    fn test_matches_sorted_by_confidence() {
        let job = vec![
            make_keyword("kubernetes", 1, 1.0),
            make_keyword("javascript", 1, 1.0),
            make_keyword("docker", 1, 1.0),
        ];
        let resume = vec![
            make_keyword("kubernets", 1, 1.0),
            make_keyword("js", 1, 1.0),
            make_keyword("docker", 1, 1.0),
        ];
        let result = match_keywords(&job, &resume, DEFAULT_FUZZY_THRESHOLD);
        let kinds: Vec<MatchType> = result.matches.iter().map(|m| m.match_type).collect();
        assert_eq!(
            kinds,
            vec![MatchType::Exact, MatchType::Fuzzy, MatchType::Synonym]
        );
        assert_eq!(result.coverage(), 100.0);
    }

    #[test]
    fn test_lower_threshold_admits_weaker_matches() {
        let job = vec![make_keyword("postgres", 1, 1.0)];
        let resume = vec![make_keyword("postgresql", 1, 1.0)];
        assert!(match_keywords(&job, &resume, 0.9).matches.is_empty());
        assert_eq!(match_keywords(&job, &resume, 0.8).matches.len(), 1);
    }
}
