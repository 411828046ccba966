//! Keyword density: how much of a text a keyword (or its synonyms) takes up.

use serde::{Deserialize, Serialize};

use crate::keywords::tokenizer::tokenize;
use crate::keywords::vocabulary::synonyms_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityBand {
    Absent,
    Low,
    Good,
    High,
    Overused,
}

impl DensityBand {
    /// Bands: 0, (0, 0.5), [0.5, 2], (2, 4], above 4.
    pub fn classify(density: f64) -> Self {
        if density <= 0.0 {
            DensityBand::Absent
        } else if density < 0.5 {
            DensityBand::Low
        } else if density <= 2.0 {
            DensityBand::Good
        } else if density <= 4.0 {
            DensityBand::High
        } else {
            DensityBand::Overused
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            DensityBand::Absent => "Add this keyword to your resume",
            DensityBand::Low => "Consider increasing usage",
            DensityBand::Good => "Good keyword density",
            DensityBand::High => "High density - ensure natural usage",
            DensityBand::Overused => "Overused - reduce frequency to avoid keyword stuffing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityEntry {
    pub keyword: String,
    pub occurrences: usize,
    /// Percent of all tokens, two decimals.
    pub density: f64,
    pub band: DensityBand,
    pub recommendation: String,
}

/// Density of each keyword in `text`, highest first. Synonym forms count
/// toward the keyword; a token is credited to at most one form.
pub fn analyze_density(text: &str, keywords: &[String]) -> Vec<DensityEntry> {
    let tokens = tokenize(text);
    let total = tokens.len();

    let mut entries: Vec<DensityEntry> = keywords
        .iter()
        .map(|keyword| {
            let occurrences = count_occurrences(&tokens, keyword);
            let density = if total > 0 {
                occurrences as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            let density = round2(density);
            let band = DensityBand::classify(density);
            DensityEntry {
                keyword: keyword.clone(),
                occurrences,
                density,
                band,
                recommendation: band.recommendation().to_string(),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.density.total_cmp(&a.density));
    entries
}

fn count_occurrences(tokens: &[String], keyword: &str) -> usize {
    let mut forms: Vec<Vec<String>> = std::iter::once(keyword)
        .chain(synonyms_for(keyword).iter().copied())
        .map(tokenize)
        .filter(|form| !form.is_empty())
        .collect();
    // Longer forms first so "node js" claims its tokens before "js".
    forms.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut claimed = vec![false; tokens.len()];
    let mut count = 0;
    for form in &forms {
        if form.len() > tokens.len() {
            continue;
        }
        for start in 0..=(tokens.len() - form.len()) {
            let span = start..start + form.len();
            if tokens[span.clone()] == form[..] && claimed[span.clone()].iter().all(|c| !c) {
                claimed[span].iter_mut().for_each(|c| *c = true);
                count += 1;
            }
        }
    }
    count
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(DensityBand::classify(0.0), DensityBand::Absent);
        assert_eq!(DensityBand::classify(0.3), DensityBand::Low);
        assert_eq!(DensityBand::classify(0.5), DensityBand::Good);
        assert_eq!(DensityBand::classify(2.0), DensityBand::Good);
        assert_eq!(DensityBand::classify(3.0), DensityBand::High);
        assert_eq!(DensityBand::classify(4.0), DensityBand::High);
        assert_eq!(DensityBand::classify(5.0), DensityBand::Overused);
    }

    #[test]
    fn test_density_counts_and_rounds() {
        let text = "rust is fast and rust is safe";
        let result = analyze_density(text, &keywords(&["rust", "python"]));
        assert_eq!(result[0].keyword, "rust");
        assert_eq!(result[0].occurrences, 2);
        assert!((result[0].density - 28.57).abs() < 1e-9);
        assert_eq!(result[0].band, DensityBand::Overused);
        assert_eq!(result[1].occurrences, 0);
        assert_eq!(result[1].recommendation, "Add this keyword to your resume");
    }

    #[test]
    fn test_synonyms_count_toward_keyword() {
        let text = "Wrote js daily and some javascript and node.js services";
        let result = analyze_density(text, &keywords(&["javascript"]));
        // javascript, js, node.js; the "js" inside node.js is not double counted
        assert_eq!(result[0].occurrences, 3);
    }

    #[test]
    fn test_multi_word_keyword() {
        let text = "machine learning beats learning machines";
        let result = analyze_density(text, &keywords(&["Machine Learning"]));
        assert_eq!(result[0].occurrences, 1);
        assert!((result[0].density - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_follows_reported_density() {
        // 1 hit in 201 tokens is 0.4975%, reported as 0.5
        let mut words = vec!["rust".to_string()];
        words.extend((0..200).map(|i| format!("filler{i}")));
        let result = analyze_density(&words.join(" "), &keywords(&["rust"]));
        assert!((result[0].density - 0.5).abs() < 1e-9);
        assert_eq!(result[0].band, DensityBand::Good);
        assert_eq!(result[0].recommendation, "Good keyword density");
    }

    #[test]
    fn test_empty_text_is_absent() {
        let result = analyze_density("", &keywords(&["rust"]));
        assert_eq!(result[0].density, 0.0);
        assert_eq!(result[0].band, DensityBand::Absent);
    }
}
