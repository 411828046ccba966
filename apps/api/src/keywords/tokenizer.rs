//! Word tokens, frequency maps and n-gram phrase candidates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::keywords::vocabulary::{
    is_action_verb, is_industry_keyword, is_technical_keyword, FILLER_PHRASES,
};

/// Tokens shorter than this are ignored by frequency counts.
const MIN_COUNTED_LEN: usize = 3;

/// Lower-cased word tokens, split on anything that is not a word character.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Word frequencies in first-seen order, skipping tokens of two characters
/// or fewer. Order is kept so ties sort deterministically downstream.
pub fn word_frequencies(tokens: &[String]) -> Vec<(String, u32)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, u32)> = Vec::new();
    for token in tokens {
        if token.chars().count() < MIN_COUNTED_LEN {
            continue;
        }
        match index.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }
    counts
}

/// A candidate multi-word phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    pub frequency: u32,
    pub score: f64,
}

/// All 2- and 3-grams over the token stream with their counts, bigrams first,
/// each group in first-seen order.
pub fn ngrams(tokens: &[String]) -> Vec<Phrase> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut phrases: Vec<Phrase> = Vec::new();
    for n in 2..=3 {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            let text = window.join(" ");
            match index.get(&text) {
                Some(&i) => phrases[i].frequency += 1,
                None => {
                    index.insert(text.clone(), phrases.len());
                    let score = phrase_score(&text);
                    phrases.push(Phrase {
                        text,
                        frequency: 1,
                        score,
                    });
                }
            }
        }
    }
    phrases
}

/// Phrase quality: +0.5 technical, +0.4 industry term, +0.3 when any word is
/// an action verb, -0.5 for filler. Never negative.
pub fn phrase_score(phrase: &str) -> f64 {
    let mut score = 0.0;
    if is_technical_keyword(phrase) {
        score += 0.5;
    }
    if is_industry_keyword(phrase) {
        score += 0.4;
    }
    if phrase.split(' ').any(is_action_verb) {
        score += 0.3;
    }
    if FILLER_PHRASES.contains(&phrase) {
        score -= 0.5;
    }
    f64::max(score, 0.0)
}

/// Repeated phrases that clear the quality bar.
pub fn key_phrases(text: &str) -> Vec<Phrase> {
    let tokens = tokenize(text);
    ngrams(&tokens)
        .into_iter()
        .filter(|p| p.frequency > 1 && p.score > 0.3)
        .collect()
}

/// True when `needle` occurs as a whole-token run inside `haystack`.
pub fn contains_token_run(haystack: &[String], needle: &[String]) -> bool {
    count_token_runs(haystack, needle) > 0
}

/// Number of positions where `needle` starts. Runs may overlap.
pub fn count_token_runs(haystack: &[String], needle: &[String]) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}
