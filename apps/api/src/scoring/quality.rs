//! Resume quality scoring independent of any job description.
//!
//! Five categories (content, structure, keywords, achievements, readability)
//! are scored 0–100 and combined with `QualityWeights`. Every evaluator also
//! records findings (strengths, issues, suggestions) which drive the
//! recommendations. On top of a single score this module benchmarks against
//! industry/level targets, tracks the change between two scores, and ranks
//! several resumes against each other.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::models::resume::has_opt_text;
use crate::models::{
    ExperienceEntry, Industry, JobLevel, PersonalInfo, ResumeDocument, ResumeSection,
};
use crate::parsing::text::year_month;
use crate::scoring::weights::{weighted_total, QualityWeights};
use crate::scoring::{ensure_finite, AnalysisError, Grade, Priority};

static QUANTIFIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+[\d%$]|\b(increased|decreased|improved|reduced|grew|saved|generated)\b.*\d+")
        .unwrap()
});
static STRONG_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(led|managed|developed|implemented|created|improved|increased|reduced|delivered|achieved)")
        .unwrap()
});
static VALUE_PROPOSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(results?|achievements?|improved?|increased?|decreased?|led|managed)\b")
        .unwrap()
});
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

const PROGRESSION_TITLES: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "manager",
    "director",
    "head",
    "vp",
    "chief",
];
const STRONG_VERBS: &[&str] = &["managed", "led", "developed", "implemented", "created", "improved"];
const INFORMAL_WORDS: &[&str] = &["awesome", "cool", "stuff", "things", "a lot"];

fn summary_level_terms(level: JobLevel) -> &'static [&'static str] {
    match level {
        JobLevel::Entry => &["motivated", "eager", "recent graduate", "learning"],
        JobLevel::Mid => &["experienced", "skilled", "proficient", "demonstrated"],
        JobLevel::Senior => &["expert", "leadership", "strategic", "extensive experience"],
        JobLevel::Executive => &["visionary", "transformational", "executive", "board"],
    }
}

fn expected_positions(level: JobLevel) -> usize {
    match level {
        JobLevel::Entry => 1,
        JobLevel::Mid => 2,
        JobLevel::Senior => 3,
        JobLevel::Executive => 4,
    }
}

fn relevant_skills(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Technology => &["javascript", "python", "react", "aws", "git", "sql", "docker"],
        Industry::Finance => &["excel", "financial modeling", "bloomberg", "risk management", "sql"],
        Industry::Healthcare => &["patient care", "medical records", "hipaa", "clinical", "epic"],
        Industry::Marketing => &["seo", "google analytics", "social media", "content marketing", "adobe"],
        Industry::Sales => &["salesforce", "crm", "lead generation", "negotiation", "pipeline management"],
        Industry::Law | Industry::General => &[],
    }
}

fn domain_terms(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Technology => &["software", "development", "programming", "technical"],
        Industry::Finance => &["financial", "analysis", "investment", "market"],
        Industry::Healthcare => &["patient", "clinical", "medical", "healthcare"],
        Industry::Marketing => &["marketing", "campaign", "brand", "digital"],
        Industry::Sales => &["sales", "revenue", "client", "business development"],
        Industry::Law | Industry::General => &[],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityCategory {
    Content,
    Structure,
    Keywords,
    Achievements,
    Readability,
}

impl QualityCategory {
    pub const ALL: [QualityCategory; 5] = [
        QualityCategory::Content,
        QualityCategory::Structure,
        QualityCategory::Keywords,
        QualityCategory::Achievements,
        QualityCategory::Readability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityCategory::Content => "content",
            QualityCategory::Structure => "structure",
            QualityCategory::Keywords => "keywords",
            QualityCategory::Achievements => "achievements",
            QualityCategory::Readability => "readability",
        }
    }
}

/// One observation made while scoring. Impacts are the points lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    Strength { message: String, points: f64 },
    Issue { message: String, impact: f64 },
    Suggestion { message: String, impact: f64 },
}

impl Finding {
    fn strength(message: impl Into<String>, points: f64) -> Self {
        Finding::Strength {
            message: message.into(),
            points,
        }
    }

    fn issue(message: impl Into<String>, impact: f64) -> Self {
        Finding::Issue {
            message: message.into(),
            impact,
        }
    }

    fn suggestion(message: impl Into<String>, impact: f64) -> Self {
        Finding::Suggestion {
            message: message.into(),
            impact,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub score: f64,
    pub findings: Vec<Finding>,
}

impl Evaluation {
    fn add(&mut self, points: f64, finding: Finding) {
        self.score += points;
        self.findings.push(finding);
    }

    fn note(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    fn absorb(&mut self, other: Evaluation) {
        self.score += other.score;
        self.findings.extend(other.findings);
    }

    fn capped(mut self, max: f64) -> Self {
        self.score = self.score.min(max);
        self
    }

    /// Rounded and clamped to a 0–100 category score.
    fn finish(mut self) -> Self {
        self.score = self.score.round().clamp(0.0, 100.0);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    pub content: f64,
    pub structure: f64,
    pub keywords: f64,
    pub achievements: f64,
    pub readability: f64,
}

impl QualityScores {
    pub fn get(&self, category: QualityCategory) -> f64 {
        match category {
            QualityCategory::Content => self.content,
            QualityCategory::Structure => self.structure,
            QualityCategory::Keywords => self.keywords,
            QualityCategory::Achievements => self.achievements,
            QualityCategory::Readability => self.readability,
        }
    }

    fn from_fn(mut f: impl FnMut(QualityCategory) -> f64) -> Self {
        Self {
            content: f(QualityCategory::Content),
            structure: f(QualityCategory::Structure),
            keywords: f(QualityCategory::Keywords),
            achievements: f(QualityCategory::Achievements),
            readability: f(QualityCategory::Readability),
        }
    }

    fn overall(&self, weights: &QualityWeights) -> f64 {
        weighted_total(&[
            (self.content, weights.content),
            (self.structure, weights.structure),
            (self.keywords, weights.keywords),
            (self.achievements, weights.achievements),
            (self.readability, weights.readability),
        ])
        .round()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityFindings {
    pub content: Vec<Finding>,
    pub structure: Vec<Finding>,
    pub keywords: Vec<Finding>,
    pub achievements: Vec<Finding>,
    pub readability: Vec<Finding>,
}

impl QualityFindings {
    pub fn get(&self, category: QualityCategory) -> &[Finding] {
        match category {
            QualityCategory::Content => &self.content,
            QualityCategory::Structure => &self.structure,
            QualityCategory::Keywords => &self.keywords,
            QualityCategory::Achievements => &self.achievements,
            QualityCategory::Readability => &self.readability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub category: QualityCategory,
    pub message: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    pub category: QualityCategory,
    pub message: String,
    pub score: f64,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Generic advice for one of the weakest categories.
    Focus,
    Critical,
    Improvement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRecommendation {
    pub category: QualityCategory,
    pub kind: RecommendationKind,
    pub message: String,
    pub impact: f64,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub overall: f64,
    pub grade: Grade,
    pub scores: QualityScores,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
    pub recommendations: Vec<QualityRecommendation>,
    pub findings: QualityFindings,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn score_resume(
    resume: &ResumeDocument,
    config: &AnalysisConfig,
) -> Result<QualityScore, AnalysisError> {
    score_resume_at(resume, config, Utc::now().date_naive())
}

/// `today` resolves "present" when ordering experience by start date.
pub fn score_resume_at(
    resume: &ResumeDocument,
    config: &AnalysisConfig,
    today: NaiveDate,
) -> Result<QualityScore, AnalysisError> {
    let content = evaluate_content(resume, config.industry, config.job_level, today);
    let structure = evaluate_structure(resume);
    let keywords = evaluate_keywords(resume, config.industry);
    let achievements = evaluate_achievements(resume);
    let readability = evaluate_readability(resume);

    let scores = QualityScores {
        content: content.score,
        structure: structure.score,
        keywords: keywords.score,
        achievements: achievements.score,
        readability: readability.score,
    };
    let overall = scores.overall(&config.quality_weights);
    ensure_finite(
        "quality",
        &[
            scores.content,
            scores.structure,
            scores.keywords,
            scores.achievements,
            scores.readability,
            overall,
        ],
    )?;

    let findings = QualityFindings {
        content: content.findings,
        structure: structure.findings,
        keywords: keywords.findings,
        achievements: achievements.findings,
        readability: readability.findings,
    };

    debug!(overall, ?scores, "scored resume quality");

    Ok(QualityScore {
        overall,
        grade: Grade::from_score(overall),
        strengths: identify_strengths(&scores),
        weaknesses: identify_weaknesses(&scores),
        recommendations: quality_recommendations(&scores, &findings, config.industry),
        scores,
        findings,
    })
}

/// Personal info (20), summary (15), experience (35), education (15) and
/// skills (15).
pub fn evaluate_content(
    resume: &ResumeDocument,
    industry: Industry,
    level: JobLevel,
    today: NaiveDate,
) -> Evaluation {
    let mut eval = Evaluation::default();
    eval.absorb(evaluate_personal(resume.personal.as_ref()));
    eval.absorb(evaluate_summary(&resume.summary, level));
    eval.absorb(evaluate_experience(&resume.experience, level, today));
    eval.absorb(evaluate_education(resume, industry));
    eval.absorb(evaluate_skills(resume, industry));
    eval.finish()
}

pub fn evaluate_personal(personal: Option<&PersonalInfo>) -> Evaluation {
    let mut eval = Evaluation::default();
    let Some(personal) = personal else {
        eval.note(Finding::issue("Missing personal information section", 20.0));
        return eval;
    };

    if has_opt_text(personal.name.as_deref()) {
        eval.add(5.0, Finding::strength("Name provided", 5.0));
    } else {
        eval.note(Finding::issue("Missing name", 5.0));
    }
    if has_opt_text(personal.email.as_deref()) {
        eval.add(5.0, Finding::strength("Email provided", 5.0));
    } else {
        eval.note(Finding::issue("Missing email address", 5.0));
    }
    if has_opt_text(personal.phone.as_deref()) {
        eval.add(3.0, Finding::strength("Phone number provided", 3.0));
    } else {
        eval.note(Finding::suggestion("Consider adding phone number", 3.0));
    }

    let extras = [
        (&personal.linkedin, 2.0, "LinkedIn profile included"),
        (&personal.github, 2.0, "GitHub profile included"),
        (&personal.website, 2.0, "Portfolio/website included"),
        (&personal.location, 1.0, "Location provided"),
    ];
    for (field, points, message) in extras {
        if has_opt_text(field.as_deref()) {
            eval.add(points, Finding::strength(message, points));
        }
    }
    eval.capped(20.0)
}

pub fn evaluate_summary(summary: &str, level: JobLevel) -> Evaluation {
    let mut eval = Evaluation::default();
    if summary.trim().is_empty() {
        eval.note(Finding::issue("Missing professional summary", 15.0));
        return eval;
    }

    let words = summary.split_whitespace().count();
    if (30..=80).contains(&words) {
        eval.add(8.0, Finding::strength("Appropriate summary length", 8.0));
    } else if words < 30 {
        eval.add(4.0, Finding::suggestion("Summary could be more detailed", 4.0));
    } else {
        eval.add(6.0, Finding::suggestion("Summary might be too long", 2.0));
    }

    let lower = summary.to_lowercase();
    if summary_level_terms(level).iter().any(|t| lower.contains(t)) {
        eval.add(4.0, Finding::strength("Level-appropriate language used", 4.0));
    } else {
        eval.note(Finding::suggestion(
            "Include more level-appropriate terminology",
            2.0,
        ));
    }

    if VALUE_PROPOSITION.is_match(summary) {
        eval.add(3.0, Finding::strength("Clear value proposition", 3.0));
    } else {
        eval.note(Finding::suggestion(
            "Strengthen value proposition with specific achievements",
            3.0,
        ));
    }
    eval.capped(15.0)
}

pub fn evaluate_experience(
    experience: &[ExperienceEntry],
    level: JobLevel,
    today: NaiveDate,
) -> Evaluation {
    let mut eval = Evaluation::default();
    if experience.is_empty() {
        eval.note(Finding::issue("Missing work experience", 35.0));
        return eval;
    }

    if experience.len() >= expected_positions(level) {
        eval.add(
            10.0,
            Finding::strength(
                format!("Appropriate number of positions ({})", experience.len()),
                10.0,
            ),
        );
    } else {
        eval.add(
            5.0,
            Finding::suggestion("Consider including more work experience", 5.0),
        );
    }

    for entry in experience {
        eval.absorb(evaluate_position(entry));
    }

    if experience.len() > 1 && shows_progression(experience, today) {
        eval.add(5.0, Finding::strength("Shows career progression", 5.0));
    }
    eval.capped(35.0)
}

pub fn evaluate_position(entry: &ExperienceEntry) -> Evaluation {
    let mut eval = Evaluation::default();
    if entry.company.trim().is_empty() {
        eval.note(Finding::issue("Missing company name", 2.0));
    } else {
        eval.score += 2.0;
    }
    if entry.position.trim().is_empty() {
        eval.note(Finding::issue("Missing job title", 2.0));
    } else {
        eval.score += 2.0;
    }
    if has_opt_text(entry.start_date.as_deref()) {
        eval.score += 1.0;
    } else {
        eval.note(Finding::issue("Missing start date", 1.0));
    }

    if entry.has_description_or_achievements() {
        eval.add(
            3.0,
            Finding::strength("Includes job description/achievements", 3.0),
        );
    } else {
        eval.note(Finding::issue("Missing job description or achievements", 3.0));
    }

    if !entry.achievements.is_empty() {
        eval.absorb(evaluate_achievement_quality(&entry.achievements));
    }
    eval.capped(8.0)
}

pub fn is_quantifiable(achievement: &str) -> bool {
    QUANTIFIABLE.is_match(achievement)
}

pub fn evaluate_achievement_quality(achievements: &[String]) -> Evaluation {
    let mut eval = Evaluation::default();

    let quantifiable = achievements.iter().filter(|a| is_quantifiable(a)).count();
    if quantifiable > 0 {
        let points = quantifiable.min(3) as f64;
        eval.add(
            points,
            Finding::strength(format!("{quantifiable} quantifiable achievements"), points),
        );
    }

    if achievements
        .iter()
        .any(|a| STRONG_OPENER.is_match(a.trim()))
    {
        eval.add(1.0, Finding::strength("Uses strong action verbs", 1.0));
    }
    eval.capped(4.0)
}

/// True when, ordered by start date, some title gains a seniority word the
/// previous title lacked.
pub fn shows_progression(experience: &[ExperienceEntry], today: NaiveDate) -> bool {
    let mut dated: Vec<((i32, u32), String)> = experience
        .iter()
        .filter_map(|exp| {
            let start = year_month(exp.start_date.as_deref()?, today)?;
            Some((start, exp.position.to_lowercase()))
        })
        .collect();
    if dated.len() < 2 {
        return false;
    }
    dated.sort_by_key(|(start, _)| *start);

    dated.windows(2).any(|pair| {
        let (previous, current) = (&pair[0].1, &pair[1].1);
        PROGRESSION_TITLES
            .iter()
            .any(|title| current.contains(title) && !previous.contains(title))
    })
}

pub fn evaluate_education(resume: &ResumeDocument, industry: Industry) -> Evaluation {
    let mut eval = Evaluation::default();
    if resume.education.is_empty() {
        return match industry {
            Industry::Finance | Industry::Healthcare | Industry::Law => {
                eval.add(
                    5.0,
                    Finding::issue("Education typically required for this industry", 10.0),
                );
                eval
            }
            _ => {
                eval.add(
                    10.0,
                    Finding::suggestion("Consider adding education information", 5.0),
                );
                eval
            }
        };
    }

    for (i, edu) in resume.education.iter().enumerate() {
        if edu.institution.trim().is_empty() || edu.degree.trim().is_empty() {
            eval.add(
                4.0,
                Finding::suggestion(format!("Education entry {} incomplete", i + 1), 4.0),
            );
        } else {
            eval.add(
                8.0,
                Finding::strength(format!("Education entry {} complete", i + 1), 8.0),
            );
        }
        if !edu.field.trim().is_empty() {
            eval.score += 2.0;
        }
        let strong_gpa = edu
            .gpa
            .as_deref()
            .and_then(|gpa| gpa.trim().parse::<f64>().ok())
            .is_some_and(|gpa| gpa >= 3.5);
        if strong_gpa {
            eval.add(1.0, Finding::strength("Strong GPA included", 1.0));
        }
        if !edu.honors.trim().is_empty() {
            eval.add(2.0, Finding::strength("Academic honors included", 2.0));
        }
    }
    eval.capped(15.0)
}

pub fn evaluate_skills(resume: &ResumeDocument, industry: Industry) -> Evaluation {
    let mut eval = Evaluation::default();
    if resume.skills.is_empty() {
        eval.note(Finding::issue("Missing skills section", 15.0));
        return eval;
    }

    let categories: HashSet<&str> = resume.skills.iter().map(|g| g.category.as_str()).collect();
    if categories.len() >= 3 {
        eval.add(5.0, Finding::strength("Diverse skill categories", 5.0));
    } else if categories.len() >= 2 {
        eval.add(3.0, Finding::strength("Multiple skill categories", 3.0));
    }

    let total = resume.skill_items().count();
    if total >= 15 {
        eval.add(5.0, Finding::strength("Comprehensive skills list", 5.0));
    } else if total >= 8 {
        eval.add(3.0, Finding::strength("Good number of skills", 3.0));
    } else {
        eval.note(Finding::suggestion("Consider adding more relevant skills", 2.0));
    }

    let items: Vec<String> = resume.skill_items().map(str::to_lowercase).collect();
    let relevant = relevant_skills(industry)
        .iter()
        .any(|kw| items.iter().any(|item| item.contains(kw)));
    if relevant {
        eval.add(5.0, Finding::strength("Industry-relevant skills included", 5.0));
    } else {
        eval.note(Finding::suggestion("Add more industry-specific skills", 3.0));
    }
    eval.capped(15.0)
}

const KEY_SECTIONS: [ResumeSection; 5] = [
    ResumeSection::Personal,
    ResumeSection::Summary,
    ResumeSection::Experience,
    ResumeSection::Education,
    ResumeSection::Skills,
];
const BONUS_SECTIONS: [ResumeSection; 3] = [
    ResumeSection::Projects,
    ResumeSection::Certifications,
    ResumeSection::Awards,
];

pub fn evaluate_structure(resume: &ResumeDocument) -> Evaluation {
    let mut eval = Evaluation::default();

    let present = KEY_SECTIONS
        .iter()
        .filter(|s| resume.has_section(**s))
        .count();
    let section_points = present as f64 / KEY_SECTIONS.len() as f64 * 40.0;
    eval.add(
        section_points,
        Finding::strength(
            format!("{present}/{} key sections present", KEY_SECTIONS.len()),
            section_points.round(),
        ),
    );

    if !resume.experience.is_empty() {
        if resume
            .experience
            .iter()
            .all(|exp| has_opt_text(exp.start_date.as_deref()))
        {
            eval.add(20.0, Finding::strength("Consistent date formatting", 20.0));
        } else {
            eval.note(Finding::issue("Inconsistent or missing dates", 10.0));
        }
    }

    if resume.email().is_some() && resume.phone().is_some() {
        eval.add(20.0, Finding::strength("Complete contact information", 20.0));
    }
    if resume.has_section(ResumeSection::Summary) {
        eval.add(10.0, Finding::strength("Professional summary included", 10.0));
    }

    let bonus: Vec<&str> = BONUS_SECTIONS
        .iter()
        .filter(|s| resume.has_section(**s))
        .map(|s| s.as_str())
        .collect();
    if !bonus.is_empty() {
        let points = bonus.len() as f64 * 5.0;
        eval.add(
            points,
            Finding::strength(format!("Additional sections: {}", bonus.join(", ")), points),
        );
    }
    eval.finish()
}

/// Starts at 70; strong verbs and industry vocabulary move it either way.
pub fn evaluate_keywords(resume: &ResumeDocument, industry: Industry) -> Evaluation {
    let mut eval = Evaluation {
        score: 70.0,
        findings: Vec::new(),
    };
    let text = resume.full_text().to_lowercase();

    let verbs = STRONG_VERBS.iter().filter(|v| text.contains(*v)).count();
    if verbs >= 3 {
        eval.add(15.0, Finding::strength("Strong action verbs used", 15.0));
    } else {
        eval.add(-10.0, Finding::suggestion("Add more action verbs", 10.0));
    }

    let terms = domain_terms(industry)
        .iter()
        .filter(|t| text.contains(*t))
        .count();
    if terms >= 2 {
        eval.add(15.0, Finding::strength("Industry-relevant terminology", 15.0));
    }
    eval.finish()
}

pub fn evaluate_achievements(resume: &ResumeDocument) -> Evaluation {
    let mut eval = Evaluation::default();
    if resume.experience.is_empty() {
        eval.note(Finding::issue("No experience to evaluate achievements", 100.0));
        return eval;
    }

    let total = resume.achievements().count();
    let quantifiable = resume.achievements().filter(|a| is_quantifiable(a)).count();

    if total >= 6 {
        eval.add(40.0, Finding::strength(format!("{total} achievements listed"), 40.0));
    } else if total >= 3 {
        eval.add(25.0, Finding::strength(format!("{total} achievements listed"), 25.0));
    } else if total > 0 {
        eval.add(15.0, Finding::suggestion("Consider adding more achievements", 10.0));
    } else {
        eval.note(Finding::issue("No specific achievements listed", 40.0));
    }

    if quantifiable > 0 {
        let bonus = (quantifiable as f64 * 15.0).min(60.0);
        eval.add(
            bonus,
            Finding::strength(format!("{quantifiable} quantifiable achievements"), bonus),
        );
    } else {
        eval.note(Finding::suggestion("Add quantifiable results and metrics", 20.0));
    }
    eval.finish()
}

/// Reads the prose of the resume: length, sentence length and tone.
pub fn evaluate_readability(resume: &ResumeDocument) -> Evaluation {
    let text = resume.narrative_text();
    if text.trim().is_empty() {
        return Evaluation {
            score: 0.0,
            findings: vec![Finding::issue("No content to evaluate", 100.0)],
        };
    }

    let mut eval = Evaluation {
        score: 70.0,
        findings: Vec::new(),
    };

    let words = text.split_whitespace().count();
    if (200..=600).contains(&words) {
        eval.add(15.0, Finding::strength("Appropriate content length", 15.0));
    } else if words < 200 {
        eval.add(-10.0, Finding::suggestion("Consider adding more detail", 10.0));
    } else {
        eval.add(-5.0, Finding::suggestion("Content might be too lengthy", 5.0));
    }

    let sentences = SENTENCE_BREAK
        .split(&text)
        .filter(|s| !s.trim().is_empty())
        .count();
    if sentences > 0 {
        let average = words as f64 / sentences as f64;
        if (10.0..=20.0).contains(&average) {
            eval.add(10.0, Finding::strength("Good sentence structure", 10.0));
        }
    }

    let lower = text.to_lowercase();
    if INFORMAL_WORDS.iter().any(|w| lower.contains(w)) {
        eval.note(Finding::suggestion("Use more professional language", 5.0));
    } else {
        eval.add(5.0, Finding::strength("Professional tone maintained", 5.0));
    }
    eval.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Strengths, weaknesses, recommendations
// ────────────────────────────────────────────────────────────────────────────

pub fn identify_strengths(scores: &QualityScores) -> Vec<Strength> {
    let mut strengths: Vec<Strength> = QualityCategory::ALL
        .iter()
        .filter_map(|&category| {
            let score = scores.get(category);
            let message = if score >= 85.0 {
                format!("Excellent {} quality", category.as_str())
            } else if score >= 75.0 {
                format!("Strong {}", category.as_str())
            } else {
                return None;
            };
            Some(Strength {
                category,
                message,
                score,
            })
        })
        .collect();
    strengths.sort_by(|a, b| b.score.total_cmp(&a.score));
    strengths
}

pub fn identify_weaknesses(scores: &QualityScores) -> Vec<Weakness> {
    let mut weaknesses: Vec<Weakness> = QualityCategory::ALL
        .iter()
        .filter_map(|&category| {
            let score = scores.get(category);
            let (message, priority) = if score < 60.0 {
                (
                    format!("{} needs significant improvement", category.as_str()),
                    Priority::High,
                )
            } else if score < 75.0 {
                (
                    format!("{} could be enhanced", category.as_str()),
                    Priority::Medium,
                )
            } else {
                return None;
            };
            Some(Weakness {
                category,
                message,
                score,
                priority,
            })
        })
        .collect();
    weaknesses.sort_by(|a, b| a.score.total_cmp(&b.score));
    weaknesses
}

fn category_advice(category: QualityCategory, industry: Industry) -> [(String, Priority); 2] {
    let advice = |message: &str, priority| (message.to_string(), priority);
    match category {
        QualityCategory::Content => [
            advice("Add more detailed work experience descriptions", Priority::High),
            advice("Include a compelling professional summary", Priority::High),
        ],
        QualityCategory::Structure => [
            advice("Use consistent formatting throughout", Priority::High),
            advice("Organize sections in logical order", Priority::Medium),
        ],
        QualityCategory::Keywords => [
            (
                format!("Add more {industry}-specific terminology"),
                Priority::High,
            ),
            advice("Include relevant action verbs", Priority::Medium),
        ],
        QualityCategory::Achievements => [
            advice("Add quantifiable results and metrics", Priority::High),
            advice(
                "Use specific numbers, percentages, and dollar amounts",
                Priority::High,
            ),
        ],
        QualityCategory::Readability => [
            advice("Use clear, concise language", Priority::Medium),
            advice("Maintain professional tone throughout", Priority::Medium),
        ],
    }
}

/// Advice for the three weakest categories under 70, then the first two
/// issues or suggestions of each category. Highest priority and impact
/// first, at most eight.
pub fn quality_recommendations(
    scores: &QualityScores,
    findings: &QualityFindings,
    industry: Industry,
) -> Vec<QualityRecommendation> {
    let mut recommendations = Vec::new();

    let mut weakest = QualityCategory::ALL.to_vec();
    weakest.sort_by(|a, b| scores.get(*a).total_cmp(&scores.get(*b)));
    for category in weakest.into_iter().take(3) {
        if scores.get(category) < 70.0 {
            for (message, priority) in category_advice(category, industry) {
                recommendations.push(QualityRecommendation {
                    category,
                    kind: RecommendationKind::Focus,
                    message,
                    impact: 0.0,
                    priority,
                });
            }
        }
    }

    for category in QualityCategory::ALL {
        let actionable = findings
            .get(category)
            .iter()
            .filter_map(|finding| match finding {
                Finding::Issue { message, impact } => {
                    Some((RecommendationKind::Critical, message, *impact, Priority::High))
                }
                Finding::Suggestion { message, impact } => Some((
                    RecommendationKind::Improvement,
                    message,
                    *impact,
                    Priority::Medium,
                )),
                Finding::Strength { .. } => None,
            })
            .take(2);
        for (kind, message, impact, priority) in actionable {
            recommendations.push(QualityRecommendation {
                category,
                kind,
                message: message.clone(),
                impact: impact.abs(),
                priority,
            });
        }
    }

    recommendations.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.impact.total_cmp(&a.impact))
    });
    recommendations.truncate(8);
    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Benchmarks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub min: f64,
    pub good: f64,
    pub excellent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    Below,
    Acceptable,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub score: f64,
    pub benchmark: Benchmark,
    pub performance: Performance,
    pub percentile: f64,
    pub to_minimum: f64,
    pub to_good: f64,
    pub to_excellent: f64,
}

/// Target scores per industry and level. Industries without their own row
/// use the general one; executive shares the senior row.
pub fn benchmark_for(industry: Industry, level: JobLevel) -> Benchmark {
    let row = |min, good, excellent| Benchmark {
        min,
        good,
        excellent,
    };
    match (industry, level) {
        (Industry::Technology, JobLevel::Entry) => row(65.0, 80.0, 90.0),
        (Industry::Technology, JobLevel::Mid) => row(70.0, 85.0, 95.0),
        (Industry::Technology, _) => row(75.0, 88.0, 95.0),
        (Industry::Finance, JobLevel::Entry) => row(70.0, 82.0, 92.0),
        (Industry::Finance, JobLevel::Mid) => row(75.0, 87.0, 95.0),
        (Industry::Finance, _) => row(80.0, 90.0, 97.0),
        (Industry::Healthcare, JobLevel::Entry) => row(68.0, 81.0, 91.0),
        (Industry::Healthcare, JobLevel::Mid) => row(73.0, 86.0, 94.0),
        (Industry::Healthcare, _) => row(78.0, 89.0, 96.0),
        (_, JobLevel::Entry) => row(65.0, 78.0, 88.0),
        (_, JobLevel::Mid) => row(70.0, 83.0, 93.0),
        (_, _) => row(75.0, 87.0, 95.0),
    }
}

/// Coarse percentile: five-point buckets from 60 up, the score itself below.
pub fn percentile(score: f64) -> f64 {
    let score = score.clamp(0.0, 100.0);
    [95.0, 90.0, 85.0, 80.0, 75.0, 70.0, 65.0, 60.0]
        .into_iter()
        .find(|bucket| score >= *bucket)
        .unwrap_or_else(|| score.round())
}

pub fn benchmark_score(overall: f64, industry: Industry, level: JobLevel) -> BenchmarkResult {
    let benchmark = benchmark_for(industry, level);
    let performance = if overall >= benchmark.excellent {
        Performance::Excellent
    } else if overall >= benchmark.good {
        Performance::Good
    } else if overall >= benchmark.min {
        Performance::Acceptable
    } else {
        Performance::Below
    };

    BenchmarkResult {
        score: overall,
        benchmark,
        performance,
        percentile: percentile(overall),
        to_minimum: overall - benchmark.min,
        to_good: overall - benchmark.good,
        to_excellent: overall - benchmark.excellent,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Improvement tracking
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Improved,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificantChange {
    pub category: QualityCategory,
    pub change: f64,
    pub direction: ChangeDirection,
    pub magnitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressKind {
    Positive,
    Concern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressNote {
    pub kind: ProgressKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreImprovement {
    pub overall: f64,
    /// Per-category deltas, current minus previous.
    pub changes: QualityScores,
    pub significant_changes: Vec<SignificantChange>,
    pub notes: Vec<ProgressNote>,
}

/// A category moving 10 points or more either way is significant.
pub fn track_improvement(previous: &QualityScore, current: &QualityScore) -> ScoreImprovement {
    let overall = current.overall - previous.overall;
    let changes =
        QualityScores::from_fn(|c| current.scores.get(c) - previous.scores.get(c));

    let significant_changes = QualityCategory::ALL
        .iter()
        .filter_map(|&category| {
            let change = changes.get(category);
            (change.abs() >= 10.0).then(|| SignificantChange {
                category,
                change,
                direction: if change > 0.0 {
                    ChangeDirection::Improved
                } else {
                    ChangeDirection::Declined
                },
                magnitude: change.abs(),
            })
        })
        .collect();

    let mut notes = Vec::new();
    if overall > 0.0 {
        notes.push(ProgressNote {
            kind: ProgressKind::Positive,
            message: format!("Great progress! Overall score improved by {overall} points"),
        });
    } else if overall < -5.0 {
        notes.push(ProgressNote {
            kind: ProgressKind::Concern,
            message: format!(
                "Score decreased by {} points. Review recent changes",
                overall.abs()
            ),
        });
    }

    ScoreImprovement {
        overall,
        changes,
        significant_changes,
        notes,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Comparison
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedResume {
    #[serde(default)]
    pub name: Option<String>,
    pub resume: ResumeDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResume {
    pub name: String,
    pub overall: f64,
    pub grade: Grade,
    pub scores: QualityScores,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreAverages {
    pub overall: f64,
    pub scores: QualityScores,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Performance,
    Gap,
    CategoryLeader,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<QualityCategory>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Highest overall score first.
    pub rankings: Vec<RankedResume>,
    pub averages: ScoreAverages,
    pub insights: Vec<Insight>,
}

pub fn compare_resumes(
    resumes: &[NamedResume],
    config: &AnalysisConfig,
) -> Result<Comparison, AnalysisError> {
    compare_resumes_at(resumes, config, Utc::now().date_naive())
}

pub fn compare_resumes_at(
    resumes: &[NamedResume],
    config: &AnalysisConfig,
    today: NaiveDate,
) -> Result<Comparison, AnalysisError> {
    if resumes.is_empty() {
        return Ok(Comparison::default());
    }

    let mut rankings = resumes
        .iter()
        .enumerate()
        .map(|(i, named)| {
            let score = score_resume_at(&named.resume, config, today)?;
            Ok(RankedResume {
                name: named
                    .name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| format!("Resume {}", i + 1)),
                overall: score.overall,
                grade: score.grade,
                scores: score.scores,
            })
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;
    rankings.sort_by(|a, b| b.overall.total_cmp(&a.overall));

    let count = rankings.len() as f64;
    let averages = ScoreAverages {
        overall: (rankings.iter().map(|r| r.overall).sum::<f64>() / count).round(),
        scores: QualityScores::from_fn(|c| {
            (rankings.iter().map(|r| r.scores.get(c)).sum::<f64>() / count).round()
        }),
    };

    let insights = comparison_insights(&rankings);
    Ok(Comparison {
        rankings,
        averages,
        insights,
    })
}

/// Expects `rankings` sorted best first and non-empty.
fn comparison_insights(rankings: &[RankedResume]) -> Vec<Insight> {
    let (Some(best), Some(worst)) = (rankings.first(), rankings.last()) else {
        return Vec::new();
    };

    let mut insights = vec![Insight {
        kind: InsightKind::Performance,
        category: None,
        message: format!(
            "{} has the highest overall score ({})",
            best.name, best.overall
        ),
    }];

    if rankings.len() > 1 {
        insights.push(Insight {
            kind: InsightKind::Gap,
            category: None,
            message: format!(
                "Score gap of {} points between highest and lowest",
                best.overall - worst.overall
            ),
        });
    }

    for category in QualityCategory::ALL {
        let leader = rankings.iter().fold(best, |leader, current| {
            if current.scores.get(category) > leader.scores.get(category) {
                current
            } else {
                leader
            }
        });
        insights.push(Insight {
            kind: InsightKind::CategoryLeader,
            category: Some(category),
            message: format!(
                "{} leads in {} ({})",
                leader.name,
                category.as_str(),
                leader.scores.get(category)
            ),
        });
    }
    insights
}

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPriority {
    Immediate,
    High,
    Medium,
    Low,
}

impl From<Priority> for StepPriority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => StepPriority::High,
            Priority::Medium => StepPriority::Medium,
            Priority::Low => StepPriority::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextStep {
    pub priority: StepPriority,
    pub action: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub grade: Grade,
    pub percentile: f64,
    pub performance: Performance,
    pub top_strength: Option<QualityCategory>,
    pub main_weakness: Option<QualityCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub score: QualityScore,
    pub benchmark: BenchmarkResult,
    pub summary: ReportSummary,
    pub action_items: Vec<QualityRecommendation>,
    pub next_steps: Vec<NextStep>,
}

pub fn generate_score_report(
    resume: &ResumeDocument,
    config: &AnalysisConfig,
) -> Result<ScoreReport, AnalysisError> {
    let score = score_resume(resume, config)?;
    Ok(build_score_report(score, config, Utc::now()))
}

pub fn build_score_report(
    score: QualityScore,
    config: &AnalysisConfig,
    generated_at: DateTime<Utc>,
) -> ScoreReport {
    let benchmark = benchmark_score(score.overall, config.industry, config.job_level);
    let summary = ReportSummary {
        grade: score.grade,
        percentile: benchmark.percentile,
        performance: benchmark.performance,
        top_strength: score.strengths.first().map(|s| s.category),
        main_weakness: score.weaknesses.first().map(|w| w.category),
    };
    let next_steps = next_steps(&score, &benchmark);
    let action_items = score.recommendations.iter().take(5).cloned().collect();

    ScoreReport {
        generated_at,
        score,
        benchmark,
        summary,
        action_items,
        next_steps,
    }
}

fn next_steps(score: &QualityScore, benchmark: &BenchmarkResult) -> Vec<NextStep> {
    let target = benchmark.benchmark;
    let (priority, action, description) = if score.overall < target.min {
        (
            StepPriority::Immediate,
            "Focus on basic resume requirements",
            "Address fundamental issues before applying to positions",
        )
    } else if score.overall < target.good {
        (
            StepPriority::High,
            "Enhance content quality",
            "Improve resume to competitive level for target positions",
        )
    } else if score.overall < target.excellent {
        (
            StepPriority::Medium,
            "Polish and optimize",
            "Fine-tune resume for premium opportunities",
        )
    } else {
        (
            StepPriority::Low,
            "Maintain excellence",
            "Keep resume updated and relevant",
        )
    };

    let mut steps = vec![NextStep {
        priority,
        action: action.to_string(),
        description: description.to_string(),
    }];
    steps.extend(score.weaknesses.iter().take(2).map(|weakness| NextStep {
        priority: weakness.priority.into(),
        action: format!("Improve {}", weakness.category.as_str()),
        description: weakness.message.clone(),
    }));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ProjectEntry, SkillGroup};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn tech_config() -> AnalysisConfig {
        AnalysisConfig {
            industry: Industry::Technology,
            ..Default::default()
        }
    }

    fn make_experience(
        company: &str,
        position: &str,
        start: &str,
        achievements: &[&str],
    ) -> ExperienceEntry {
        ExperienceEntry {
            company: company.to_string(),
            position: position.to_string(),
            start_date: Some(start.to_string()),
            achievements: achievements.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    fn make_skills(category: &str, items: &[&str]) -> SkillGroup {
        SkillGroup {
            category: category.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
            level: None,
        }
    }

    fn make_strong_resume() -> ResumeDocument {
        let mut acme = make_experience(
            "Acme",
            "Senior Software Engineer",
            "2021-01",
            &["Led migration of 12 services to Rust", "Reduced latency by 40%"],
        );
        acme.description = "Owns platform development.".to_string();

        ResumeDocument {
            personal: Some(PersonalInfo {
                name: Some("Jane Doe".to_string()),
                title: Some("Engineer".to_string()),
                email: Some("jane@example.com".to_string()),
                phone: Some("+15551234567".to_string()),
                location: Some("Berlin".to_string()),
                linkedin: Some("https://linkedin.com/in/janedoe".to_string()),
                github: Some("https://github.com/janedoe".to_string()),
                website: Some("https://janedoe.dev".to_string()),
            }),
            summary: "Experienced backend engineer who led platform teams delivering \
                      reliable distributed systems. Improved deployment speed and reduced \
                      incidents across services while mentoring engineers and shaping \
                      architecture decisions for payments, search, and analytics products \
                      used by millions of customers every single day worldwide."
                .to_string(),
            experience: vec![
                acme,
                make_experience(
                    "Globex",
                    "Software Engineer",
                    "2018-03",
                    &["Increased test coverage to 90%", "Built billing pipeline"],
                ),
                make_experience("Initech", "Intern", "2016-06", &["Developed 3 internal tools"]),
            ],
            education: vec![EducationEntry {
                institution: "State University".to_string(),
                degree: "BS".to_string(),
                field: "Computer Science".to_string(),
                gpa: Some("3.8".to_string()),
                honors: "Cum Laude".to_string(),
                ..Default::default()
            }],
            skills: vec![
                make_skills("Languages", &["Python", "Rust", "Go", "TypeScript", "SQL"]),
                make_skills(
                    "Technical Tools",
                    &["Docker", "Kubernetes", "Terraform", "Git", "AWS"],
                ),
                make_skills(
                    "Practices",
                    &["CI/CD", "Code Review", "Testing", "Observability", "Mentoring"],
                ),
            ],
            projects: vec![ProjectEntry {
                name: "atlas".to_string(),
                description: "Service mesh dashboard".to_string(),
                ..Default::default()
            }],
            certifications: vec!["AWS Certified Solutions Architect".to_string()],
            awards: vec![],
        }
    }

    #[test]
    fn test_personal_info_points() {
        let full = make_strong_resume().personal;
        assert_eq!(evaluate_personal(full.as_ref()).score, 20.0);

        let missing = evaluate_personal(None);
        assert_eq!(missing.score, 0.0);
        assert!(matches!(&missing.findings[0], Finding::Issue { impact, .. } if *impact == 20.0));

        let minimal = PersonalInfo {
            name: Some("Jane".to_string()),
            ..Default::default()
        };
        assert_eq!(evaluate_personal(Some(&minimal)).score, 5.0);
    }

    #[test]
    fn test_summary_scoring() {
        let resume = make_strong_resume();
        assert_eq!(evaluate_summary(&resume.summary, JobLevel::Mid).score, 15.0);
        // Short, no level language, no value words.
        assert_eq!(evaluate_summary("Backend engineer.", JobLevel::Mid).score, 4.0);
        assert_eq!(evaluate_summary("   ", JobLevel::Mid).score, 0.0);
    }

    #[test]
    fn test_position_and_achievement_quality() {
        let entry = make_experience(
            "Acme",
            "Engineer",
            "2020-01",
            &["Led rollout to 30 teams", "Reduced cost by 25%", "Wrote docs"],
        );
        let quality = evaluate_achievement_quality(&entry.achievements);
        assert_eq!(quality.score, 3.0);
        assert_eq!(evaluate_position(&entry).score, 8.0);

        let bare = ExperienceEntry::default();
        let eval = evaluate_position(&bare);
        assert_eq!(eval.score, 0.0);
        assert_eq!(eval.findings.len(), 4);
    }

    #[test]
    fn test_career_progression() {
        let experience = vec![
            make_experience("B", "Lead Engineer", "2022-01", &[]),
            make_experience("A", "Engineer", "2019-05", &[]),
        ];
        assert!(shows_progression(&experience, today()));

        let flat = vec![
            make_experience("A", "Engineer", "2019-05", &[]),
            make_experience("B", "Engineer II", "2022-01", &[]),
        ];
        assert!(!shows_progression(&flat, today()));
    }

    #[test]
    fn test_education_without_entries_depends_on_industry() {
        let empty = ResumeDocument::default();
        assert_eq!(evaluate_education(&empty, Industry::Finance).score, 5.0);
        assert_eq!(evaluate_education(&empty, Industry::Law).score, 5.0);
        assert_eq!(evaluate_education(&empty, Industry::Technology).score, 10.0);
        assert_eq!(
            evaluate_education(&make_strong_resume(), Industry::General).score,
            13.0
        );
    }

    #[test]
    fn test_strong_resume_category_scores() {
        let resume = make_strong_resume();
        assert_eq!(
            evaluate_content(&resume, Industry::Technology, JobLevel::Mid, today()).score,
            98.0
        );
        assert_eq!(evaluate_structure(&resume).score, 100.0);
        assert_eq!(evaluate_keywords(&resume, Industry::Technology).score, 100.0);
        assert_eq!(evaluate_achievements(&resume).score, 70.0);
    }

    #[test]
    fn test_strong_resume_overall() {
        let score = score_resume_at(&make_strong_resume(), &tech_config(), today()).unwrap();
        assert!(score.overall >= 90.0, "overall was {}", score.overall);
        assert_eq!(score.grade, Grade::A);
        assert_eq!(score.strengths[0].category, QualityCategory::Structure);
        assert!(score
            .weaknesses
            .iter()
            .any(|w| w.category == QualityCategory::Achievements && w.priority == Priority::Medium));
    }

    #[test]
    fn test_empty_resume_baselines() {
        let score =
            score_resume_at(&ResumeDocument::default(), &AnalysisConfig::default(), today())
                .unwrap();
        assert_eq!(score.scores.content, 10.0);
        assert_eq!(score.scores.structure, 0.0);
        assert_eq!(score.scores.keywords, 60.0);
        assert_eq!(score.scores.achievements, 0.0);
        assert_eq!(score.scores.readability, 0.0);
        assert_eq!(score.overall, 16.0);
        assert_eq!(score.grade, Grade::F);
        assert!(score.strengths.is_empty());
        assert_eq!(score.weaknesses.len(), 5);
        assert_eq!(score.weaknesses[0].category, QualityCategory::Structure);
        assert_eq!(score.weaknesses[4].category, QualityCategory::Keywords);
    }

    #[test]
    fn test_empty_resume_recommendations() {
        let score =
            score_resume_at(&ResumeDocument::default(), &AnalysisConfig::default(), today())
                .unwrap();
        let recs = &score.recommendations;
        assert_eq!(recs.len(), 8);
        assert_eq!(recs[0].message, "No experience to evaluate achievements");
        assert_eq!(recs[0].kind, RecommendationKind::Critical);
        assert_eq!(recs[7].message, "Add more action verbs");
        assert_eq!(recs[7].priority, Priority::Medium);
        assert!(recs
            .windows(2)
            .all(|pair| pair[0].priority >= pair[1].priority));
    }

    #[test]
    fn test_readability_tone() {
        let casual = ResumeDocument {
            summary: "This is cool stuff.".to_string(),
            ..Default::default()
        };
        assert_eq!(evaluate_readability(&casual).score, 60.0);

        let plain = ResumeDocument {
            summary: "Built reliable systems.".to_string(),
            ..Default::default()
        };
        assert_eq!(evaluate_readability(&plain).score, 65.0);
    }

    #[test]
    fn test_benchmarks_and_percentile() {
        assert_eq!(
            benchmark_for(Industry::Finance, JobLevel::Senior),
            Benchmark {
                min: 80.0,
                good: 90.0,
                excellent: 97.0
            }
        );
        assert_eq!(
            benchmark_for(Industry::Technology, JobLevel::Executive),
            benchmark_for(Industry::Technology, JobLevel::Senior)
        );
        assert_eq!(
            benchmark_for(Industry::Marketing, JobLevel::Mid),
            benchmark_for(Industry::General, JobLevel::Mid)
        );

        let result = benchmark_score(84.0, Industry::General, JobLevel::Mid);
        assert_eq!(result.performance, Performance::Good);
        assert_eq!(result.percentile, 80.0);
        assert_eq!(result.to_good, 1.0);

        assert_eq!(percentile(99.0), 95.0);
        assert_eq!(percentile(61.0), 60.0);
        assert_eq!(percentile(42.4), 42.0);
        assert_eq!(percentile(150.0), 95.0);
    }

    #[test]
    fn test_track_improvement() {
        let config = tech_config();
        let before = score_resume_at(&ResumeDocument::default(), &config, today()).unwrap();
        let after = score_resume_at(&make_strong_resume(), &config, today()).unwrap();

        let up = track_improvement(&before, &after);
        assert!(up.overall > 0.0);
        assert_eq!(up.notes.len(), 1);
        assert_eq!(up.notes[0].kind, ProgressKind::Positive);
        assert_eq!(
            up.notes[0].message,
            format!("Great progress! Overall score improved by {} points", up.overall)
        );
        assert!(up
            .significant_changes
            .iter()
            .all(|c| c.direction == ChangeDirection::Improved && c.magnitude >= 10.0));

        let down = track_improvement(&after, &before);
        assert_eq!(down.notes[0].kind, ProgressKind::Concern);
        assert_eq!(down.changes.structure, -100.0);

        let same = track_improvement(&after, &after);
        assert!(same.notes.is_empty());
        assert!(same.significant_changes.is_empty());
    }

    #[test]
    fn test_compare_resumes() {
        let resumes = vec![
            NamedResume {
                name: None,
                resume: ResumeDocument::default(),
            },
            NamedResume {
                name: Some("Strong".to_string()),
                resume: make_strong_resume(),
            },
        ];
        let comparison = compare_resumes_at(&resumes, &tech_config(), today()).unwrap();

        assert_eq!(comparison.rankings.len(), 2);
        assert_eq!(comparison.rankings[0].name, "Strong");
        assert_eq!(comparison.rankings[1].name, "Resume 1");

        let expected_avg =
            ((comparison.rankings[0].overall + comparison.rankings[1].overall) / 2.0).round();
        assert_eq!(comparison.averages.overall, expected_avg);

        assert_eq!(comparison.insights.len(), 7);
        assert_eq!(comparison.insights[0].kind, InsightKind::Performance);
        assert!(comparison.insights[0].message.starts_with("Strong has the highest"));
        assert_eq!(comparison.insights[1].kind, InsightKind::Gap);
        assert!(comparison.insights[2..]
            .iter()
            .all(|i| i.kind == InsightKind::CategoryLeader));
    }

    #[test]
    fn test_compare_empty_input() {
        let comparison = compare_resumes_at(&[], &AnalysisConfig::default(), today()).unwrap();
        assert_eq!(comparison, Comparison::default());
    }

    #[test]
    fn test_score_report_next_steps() {
        let config = AnalysisConfig::default();
        let score = score_resume_at(&ResumeDocument::default(), &config, today()).unwrap();
        let report = build_score_report(score, &config, Utc::now());

        assert_eq!(report.benchmark.performance, Performance::Below);
        assert_eq!(report.summary.main_weakness, Some(QualityCategory::Structure));
        assert_eq!(report.summary.top_strength, None);
        assert_eq!(report.action_items.len(), 5);
        assert_eq!(report.next_steps.len(), 3);
        assert_eq!(report.next_steps[0].priority, StepPriority::Immediate);
        assert_eq!(report.next_steps[1].action, "Improve structure");
    }
}
