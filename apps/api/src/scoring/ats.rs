//! ATS compatibility analysis: how well a resume would fare in an
//! applicant tracking system screening for one job description.
//!
//! Five dimensions, each 0–100, combined with `ScoringWeights`:
//! keywords, formatting, skills, experience and education.

use std::collections::HashSet;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::keywords::density::round2;
use crate::keywords::extractor::{extract_job_keywords, extract_resume_keywords};
use crate::keywords::matcher::match_keywords;
use crate::keywords::vocabulary::suggest_section;
use crate::models::{Keyword, KeywordMatch, MissingKeyword, ResumeDocument, ResumeSection};
use crate::parsing::text::year_of;
use crate::scoring::weights::{weighted_total, ScoringWeights};
use crate::scoring::{ensure_finite, AnalysisError, Grade, Priority};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtsScores {
    pub keywords: f64,
    pub formatting: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl AtsScores {
    fn overall(&self, weights: &ScoringWeights) -> f64 {
        weighted_total(&[
            (self.keywords, weights.keywords),
            (self.formatting, weights.formatting),
            (self.skills, weights.skills),
            (self.experience, weights.experience),
            (self.education, weights.education),
        ])
    }

    fn as_slice(&self) -> [f64; 5] {
        [
            self.keywords,
            self.formatting,
            self.skills,
            self.experience,
            self.education,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsCategory {
    Keywords,
    Formatting,
    Skills,
    Experience,
    Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsRecommendation {
    pub category: AtsCategory,
    pub priority: Priority,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementKind {
    Keyword,
    Section,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub kind: ImprovementKind,
    pub suggestion: String,
    pub section: ResumeSection,
    /// Keyword importance for keyword improvements; fixed ranks for sections.
    pub priority: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub overall: f64,
    pub grade: Grade,
    pub scores: AtsScores,
    pub keyword_matches: Vec<KeywordMatch>,
    pub missing_keywords: Vec<MissingKeyword>,
    pub formatting_issues: Vec<String>,
    pub recommendations: Vec<AtsRecommendation>,
    pub improvements: Vec<Improvement>,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

pub fn analyze_ats(
    resume: &ResumeDocument,
    job_description: &str,
    config: &AnalysisConfig,
) -> Result<AtsAnalysis, AnalysisError> {
    analyze_ats_at(resume, job_description, config, Utc::now().year())
}

/// Same as `analyze_ats` with the current year pinned, which the
/// recent-experience bonus depends on.
pub fn analyze_ats_at(
    resume: &ResumeDocument,
    job_description: &str,
    config: &AnalysisConfig,
    current_year: i32,
) -> Result<AtsAnalysis, AnalysisError> {
    let job_keywords = extract_job_keywords(job_description);
    let resume_keywords = extract_resume_keywords(resume);
    let matched = match_keywords(&job_keywords, &resume_keywords, config.fuzzy_threshold);

    let (formatting, formatting_issues) = score_formatting(resume);
    let scores = AtsScores {
        keywords: score_keywords(&job_keywords, &matched.matches),
        formatting,
        skills: score_skills(resume, &job_keywords),
        experience: score_experience(resume, current_year),
        education: score_education(resume),
    };
    let overall = scores.overall(&config.weights);

    let mut checked = scores.as_slice().to_vec();
    checked.push(overall);
    ensure_finite("ats", &checked)?;

    let recommendations = recommendations(&scores, matched.missing.len());
    let improvements = improvements(&matched.missing, resume);

    debug!(
        overall,
        keywords = scores.keywords,
        missing = matched.missing.len(),
        "ats analysis complete"
    );

    let overall = round2(overall);
    Ok(AtsAnalysis {
        overall,
        grade: Grade::from_score(overall),
        scores,
        keyword_matches: matched.matches,
        missing_keywords: matched.missing,
        formatting_issues,
        recommendations,
        improvements,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Dimension scores
// ────────────────────────────────────────────────────────────────────────────

/// Σ(frequency × importance × confidence) over matches divided by the total
/// importance on offer, as a capped percentage. Zero without job keywords.
pub fn score_keywords(job_keywords: &[Keyword], matches: &[KeywordMatch]) -> f64 {
    let max_possible: f64 = job_keywords.iter().map(|k| k.importance).sum();
    if max_possible <= 0.0 {
        return 0.0;
    }
    let achieved: f64 = matches
        .iter()
        .map(|m| m.frequency as f64 * m.importance * m.confidence)
        .sum();
    (achieved / max_possible * 100.0).clamp(0.0, 100.0)
}

const REQUIRED_SECTIONS: &[ResumeSection] = &[ResumeSection::Personal, ResumeSection::Experience];
const RECOMMENDED_SECTIONS: &[ResumeSection] = &[
    ResumeSection::Skills,
    ResumeSection::Education,
    ResumeSection::Summary,
];

/// Starts at 100 and loses 20 per missing required section, 5 per missing
/// recommended section, 15 without an email and 10 without a phone.
pub fn score_formatting(resume: &ResumeDocument) -> (f64, Vec<String>) {
    let mut score: f64 = 100.0;
    let mut issues = Vec::new();

    for section in REQUIRED_SECTIONS {
        if !resume.has_section(*section) {
            score -= 20.0;
            issues.push(format!("Missing required section: {}", section.as_str()));
        }
    }
    for section in RECOMMENDED_SECTIONS {
        if !resume.has_section(*section) {
            score -= 5.0;
            issues.push(format!("Missing recommended section: {}", section.as_str()));
        }
    }
    if resume.email().is_none() {
        score -= 15.0;
        issues.push("Missing email address".to_string());
    }
    if resume.phone().is_none() {
        score -= 10.0;
        issues.push("Missing phone number".to_string());
    }

    (score.max(0.0), issues)
}

pub fn score_skills(resume: &ResumeDocument, job_keywords: &[Keyword]) -> f64 {
    if resume.skills.is_empty() {
        return 0.0;
    }
    let mut score: f64 = 50.0;

    let categories: HashSet<&str> = resume
        .skills
        .iter()
        .map(|group| group.category.trim())
        .collect();
    if categories.len() >= 3 {
        score += 20.0;
    }

    let has_technical = resume.skills.iter().any(|group| {
        let category = group.category.to_lowercase();
        category.contains("technical") || category.contains("programming")
    });
    if has_technical {
        score += 20.0;
    }

    let relevant = resume.skill_items().any(|item| {
        let item = item.trim().to_lowercase();
        !item.is_empty() && job_keywords.iter().any(|k| k.word.contains(&item))
    });
    if relevant {
        score += 10.0;
    }

    score.min(100.0)
}

pub fn score_experience(resume: &ResumeDocument, current_year: i32) -> f64 {
    let entries = &resume.experience;
    if entries.is_empty() {
        return 0.0;
    }
    let mut score = 40.0;

    let detailed = entries
        .iter()
        .filter(|exp| {
            !exp.company.trim().is_empty()
                && !exp.position.trim().is_empty()
                && exp.start_date.as_deref().is_some_and(|d| !d.trim().is_empty())
                && exp.has_description_or_achievements()
        })
        .count();
    score += detailed as f64 / entries.len() as f64 * 30.0;

    let recent = entries.iter().any(|exp| {
        exp.start_date
            .as_deref()
            .and_then(year_of)
            .is_some_and(|year| year >= current_year - 2)
    });
    if recent {
        score += 15.0;
    }

    if entries.len() >= 2 {
        score += 15.0;
    }

    f64::min(score, 100.0)
}

/// Neutral 50 without education; otherwise 70 plus up to 30 for entries that
/// name both institution and degree.
pub fn score_education(resume: &ResumeDocument) -> f64 {
    let entries = &resume.education;
    if entries.is_empty() {
        return 50.0;
    }
    let complete = entries
        .iter()
        .filter(|edu| !edu.institution.trim().is_empty() && !edu.degree.trim().is_empty())
        .count();
    f64::min(70.0 + complete as f64 / entries.len() as f64 * 30.0, 100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Advice
// ────────────────────────────────────────────────────────────────────────────

fn recommendations(scores: &AtsScores, missing_count: usize) -> Vec<AtsRecommendation> {
    let mut recs = Vec::new();
    if scores.keywords < 60.0 {
        recs.push(AtsRecommendation {
            category: AtsCategory::Keywords,
            priority: Priority::High,
            message: "Increase keyword matches with job description".to_string(),
            action: "Add relevant keywords to experience and skills sections".to_string(),
        });
    }
    if scores.formatting < 80.0 {
        recs.push(AtsRecommendation {
            category: AtsCategory::Formatting,
            priority: Priority::Medium,
            message: "Improve ATS-friendly formatting".to_string(),
            action: "Use standard section headers and avoid complex formatting".to_string(),
        });
    }
    if scores.skills < 70.0 {
        recs.push(AtsRecommendation {
            category: AtsCategory::Skills,
            priority: Priority::Medium,
            message: "Enhance skills section".to_string(),
            action: "Add more relevant technical and soft skills".to_string(),
        });
    }
    if missing_count > 5 {
        recs.push(AtsRecommendation {
            category: AtsCategory::Keywords,
            priority: Priority::High,
            message: "Many important keywords missing".to_string(),
            action: "Review job description and add missing keywords naturally".to_string(),
        });
    }
    recs
}

fn improvements(missing: &[MissingKeyword], resume: &ResumeDocument) -> Vec<Improvement> {
    let mut items: Vec<Improvement> = missing
        .iter()
        .take(5)
        .map(|m| Improvement {
            kind: ImprovementKind::Keyword,
            suggestion: format!("Add \"{}\" to your resume", m.keyword),
            section: suggest_section(&m.keyword),
            priority: m.importance,
        })
        .collect();

    if !resume.has_section(ResumeSection::Summary) {
        items.push(Improvement {
            kind: ImprovementKind::Section,
            suggestion: "Add a professional summary section".to_string(),
            section: ResumeSection::Summary,
            priority: 3.0,
        });
    }
    if !resume.has_section(ResumeSection::Skills) {
        items.push(Improvement {
            kind: ImprovementKind::Section,
            suggestion: "Add a skills section with relevant technical and soft skills"
                .to_string(),
            section: ResumeSection::Skills,
            priority: 4.0,
        });
    }

    items.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    items
}
