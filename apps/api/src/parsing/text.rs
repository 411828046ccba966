//! Text cleanup, date normalization, contact extraction and resume
//! normalization for data coming out of parsers and imports.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::keywords::density::round2;
use crate::models::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, SkillGroup,
};

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,@+#/%$&()':-]").unwrap());

static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]+").unwrap());

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" ?\n[\s]*").unwrap());

/// Strips decorative symbols, collapses runs of spaces and blank lines.
pub fn clean_text(text: &str) -> String {
    let text = DISALLOWED_CHARS.replace_all(text, "");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    let text = LINE_BREAKS.replace_all(&text, "\n");
    text.trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

static PRESENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)present|current").unwrap());
static MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]{3,9})\.?\s+(\d{4})").unwrap());
static SLASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{4})").unwrap());
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4})-(\d{1,2})").unwrap());
static BARE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4})").unwrap());
static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").unwrap());

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// 1-based month for a full or three-letter-prefix month name.
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    if name.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| *m == name || m.starts_with(&name))
        .map(|i| i as u32 + 1)
}

pub fn standardize_date(date: &str) -> String {
    standardize_date_at(date, Utc::now().date_naive())
}

/// Normalizes a free-form date to `YYYY-MM`. "Present"/"current" become
/// `today`; strings with no recognizable date are returned unchanged.
pub fn standardize_date_at(date: &str, today: NaiveDate) -> String {
    let date = date.trim();
    if date.is_empty() {
        return String::new();
    }
    if PRESENT.is_match(date) {
        return format!("{:04}-{:02}", today.year(), today.month());
    }
    if let Some(caps) = MONTH_YEAR.captures(date) {
        if let Some(month) = month_number(&caps[1]) {
            return format!("{}-{:02}", &caps[2], month);
        }
    }
    if let Some(caps) = SLASH_DATE.captures(date) {
        return format!("{}-{:0>2}", &caps[2], &caps[1]);
    }
    if let Some(caps) = ISO_DATE.captures(date) {
        return format!("{}-{:0>2}", &caps[1], &caps[2]);
    }
    if let Some(caps) = BARE_YEAR.captures(date) {
        return format!("{}-01", &caps[1]);
    }
    date.to_string()
}

/// First plausible calendar year (1900–2099) in a date string.
pub fn year_of(date: &str) -> Option<i32> {
    YEAR.captures(date).and_then(|caps| caps[1].parse().ok())
}

/// `(year, month)` of a free-form date, for ordering entries.
pub fn year_month(date: &str, today: NaiveDate) -> Option<(i32, u32)> {
    let standardized = standardize_date_at(date, today);
    let (year, month) = standardized.split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

// ────────────────────────────────────────────────────────────────────────────
// Contact details
// ────────────────────────────────────────────────────────────────────────────

pub(crate) static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
pub(crate) static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?1?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap()
});
pub(crate) static LINKEDIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());
pub(crate) static GITHUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/[\w-]+").unwrap());
static WEBSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:https?://)?(?:www\.)?[a-z0-9-]+(?:\.[a-z0-9-]+)*\.(?:com|org|net|io|dev|me|co|app|site|tech|info|xyz)\b(?:/[\w./-]*)?",
    )
    .unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

/// Pulls contact details out of free text. Emails are lower-cased, phone
/// numbers reduced to `+<digits>`, profile links given an https scheme.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let email = EMAIL.find(text).map(|m| m.as_str().to_lowercase());
    let phone = PHONE.find(text).map(|m| normalize_phone(m.as_str()));
    let linkedin = LINKEDIN
        .find(text)
        .map(|m| format!("https://{}", m.as_str()));
    let github = GITHUB.find(text).map(|m| format!("https://{}", m.as_str()));

    let email_spans: Vec<(usize, usize)> = EMAIL
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    let website = WEBSITE
        .find_iter(text)
        .filter(|m| {
            !email_spans
                .iter()
                .any(|(start, end)| m.start() >= *start && m.start() < *end)
        })
        .map(|m| m.as_str())
        .find(|url| {
            let lower = url.to_lowercase();
            !lower.contains("linkedin") && !lower.contains("github")
        })
        .map(|url| {
            if url.to_lowercase().starts_with("http") {
                url.to_string()
            } else {
                format!("https://{url}")
            }
        });

    ContactInfo {
        email,
        phone,
        linkedin,
        github,
        website,
    }
}

fn normalize_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if digits.starts_with('+') {
        digits
    } else if digits.len() == 11 && digits.starts_with('1') {
        format!("+{digits}")
    } else {
        format!("+1{digits}")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume normalization
// ────────────────────────────────────────────────────────────────────────────

pub fn normalize_resume(resume: &ResumeDocument) -> ResumeDocument {
    normalize_resume_at(resume, Utc::now().date_naive())
}

/// Cleans every text field, standardizes dates and drops entries too
/// incomplete to be useful: experience without company and position,
/// education without institution and degree, skill groups with no items.
pub fn normalize_resume_at(resume: &ResumeDocument, today: NaiveDate) -> ResumeDocument {
    ResumeDocument {
        personal: resume.personal.as_ref().map(normalize_personal),
        summary: clean_text(&resume.summary),
        experience: resume
            .experience
            .iter()
            .map(|exp| ExperienceEntry {
                company: clean_text(&exp.company),
                position: clean_text(&exp.position),
                location: clean_text(&exp.location),
                start_date: clean_date(exp.start_date.as_deref(), today),
                end_date: clean_date(exp.end_date.as_deref(), today),
                current: exp.current,
                description: clean_text(&exp.description),
                achievements: clean_list(&exp.achievements),
            })
            .filter(|exp| !exp.company.is_empty() && !exp.position.is_empty())
            .collect(),
        education: resume
            .education
            .iter()
            .map(|edu| EducationEntry {
                institution: clean_text(&edu.institution),
                degree: clean_text(&edu.degree),
                field: clean_text(&edu.field),
                location: clean_text(&edu.location),
                start_date: clean_date(edu.start_date.as_deref(), today),
                end_date: clean_date(edu.end_date.as_deref(), today),
                gpa: edu.gpa.as_deref().map(clean_text).filter(|g| !g.is_empty()),
                honors: clean_text(&edu.honors),
                description: clean_text(&edu.description),
            })
            .filter(|edu| !edu.institution.is_empty() && !edu.degree.is_empty())
            .collect(),
        skills: resume
            .skills
            .iter()
            .map(|group| SkillGroup {
                category: clean_text(&group.category),
                items: clean_list(&group.items),
                level: group.level.as_deref().map(clean_text).filter(|l| !l.is_empty()),
            })
            .filter(|group| !group.items.is_empty())
            .collect(),
        projects: resume
            .projects
            .iter()
            .map(|p| ProjectEntry {
                name: clean_text(&p.name),
                description: clean_text(&p.description),
                technologies: clean_list(&p.technologies),
                ..p.clone()
            })
            .filter(|p| !p.name.is_empty())
            .collect(),
        certifications: clean_list(&resume.certifications),
        awards: clean_list(&resume.awards),
    }
}

/// Cleans name, title and location. Each contact field is re-read only from
/// its own value; unrecognized values are kept as given.
fn normalize_personal(personal: &PersonalInfo) -> PersonalInfo {
    let scan = |value: &Option<String>| {
        value
            .as_deref()
            .map(extract_contact_info)
            .unwrap_or_default()
    };

    PersonalInfo {
        name: clean_opt(personal.name.as_deref()),
        title: clean_opt(personal.title.as_deref()),
        location: clean_opt(personal.location.as_deref()),
        email: scan(&personal.email).email.or_else(|| personal.email.clone()),
        phone: scan(&personal.phone).phone.or_else(|| personal.phone.clone()),
        linkedin: scan(&personal.linkedin)
            .linkedin
            .or_else(|| personal.linkedin.clone()),
        github: scan(&personal.github).github.or_else(|| personal.github.clone()),
        website: scan(&personal.website)
            .website
            .or_else(|| personal.website.clone()),
    }
}

fn clean_opt(value: Option<&str>) -> Option<String> {
    value.map(clean_text).filter(|v| !v.is_empty())
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| clean_text(item))
        .filter(|item| !item.is_empty())
        .collect()
}

fn clean_date(date: Option<&str>, today: NaiveDate) -> Option<String> {
    date.map(|d| standardize_date_at(d, today))
        .filter(|d| !d.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Text statistics
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordShare {
    pub word: String,
    pub count: usize,
    /// Percent of all words, two decimals.
    pub density: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    /// The ten most frequent whitespace-separated words.
    pub top_words: Vec<WordShare>,
}

pub fn analyze_text(text: &str) -> TextStats {
    let words: Vec<String> = text.split_whitespace().map(|w| w.to_lowercase()).collect();
    if words.is_empty() {
        return TextStats::default();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in &words {
        let count = counts.entry(word.as_str()).or_insert(0);
        if *count == 0 {
            order.push(word.as_str());
        }
        *count += 1;
    }

    let mut shares: Vec<WordShare> = order
        .into_iter()
        .map(|word| {
            let count = counts[word];
            WordShare {
                word: word.to_string(),
                count,
                density: round2(count as f64 / words.len() as f64 * 100.0),
            }
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares.truncate(10);

    TextStats {
        word_count: words.len(),
        top_words: shares,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_clean_text_strips_symbols_and_spacing() {
        assert_eq!(clean_text("  ★ Senior   Engineer ★  "), "Senior Engineer");
        assert_eq!(clean_text("line one\n\n\n  line two"), "line one\nline two");
        assert_eq!(clean_text("C++ & C# (40% faster)"), "C++ & C# (40% faster)");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_standardize_date_formats() {
        assert_eq!(standardize_date_at("January 2020", today()), "2020-01");
        assert_eq!(standardize_date_at("Sep 2019", today()), "2019-09");
        assert_eq!(standardize_date_at("3/2021", today()), "2021-03");
        assert_eq!(standardize_date_at("2018-7", today()), "2018-07");
        assert_eq!(standardize_date_at("2017", today()), "2017-01");
        assert_eq!(standardize_date_at("Present", today()), "2024-06");
        assert_eq!(standardize_date_at("someday", today()), "someday");
        assert_eq!(standardize_date_at("  ", today()), "");
    }

    #[test]
    fn test_year_helpers() {
        assert_eq!(year_of("Jan 2022"), Some(2022));
        assert_eq!(year_of("2019-05"), Some(2019));
        assert_eq!(year_of("n/a"), None);
        assert_eq!(year_month("March 2020", today()), Some((2020, 3)));
        assert_eq!(year_month("current", today()), Some((2024, 6)));
        assert_eq!(year_month("13/2020", today()), None);
    }

    #[test]
    fn test_extract_contact_info() {
        let text = "Jane Doe | Jane.Doe@Example.com | (555) 123-4567 | \
                    linkedin.com/in/janedoe | github.com/janedoe | janedoe.dev";
        let contact = extract_contact_info(text);
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("+15551234567"));
        assert_eq!(
            contact.linkedin.as_deref(),
            Some("https://linkedin.com/in/janedoe")
        );
        assert_eq!(contact.github.as_deref(), Some("https://github.com/janedoe"));
        assert_eq!(contact.website.as_deref(), Some("https://janedoe.dev"));
    }

    #[test]
    fn test_email_domain_is_not_a_website() {
        let contact = extract_contact_info("reach me at jane@example.com");
        assert_eq!(contact.website, None);
    }

    #[test]
    fn test_normalize_resume_drops_incomplete_entries() {
        let resume = ResumeDocument {
            summary: "  Builder   of things  ".to_string(),
            experience: vec![
                ExperienceEntry {
                    company: "Acme".to_string(),
                    position: "Engineer".to_string(),
                    start_date: Some("Jan 2020".to_string()),
                    end_date: Some("Present".to_string()),
                    achievements: vec!["  ".to_string(), "Shipped v2".to_string()],
                    ..Default::default()
                },
                ExperienceEntry {
                    company: "Nameless".to_string(),
                    ..Default::default()
                },
            ],
            education: vec![EducationEntry {
                institution: "MIT".to_string(),
                ..Default::default()
            }],
            skills: vec![SkillGroup {
                category: "Empty".to_string(),
                items: vec![],
                level: None,
            }],
            ..Default::default()
        };
        let normalized = normalize_resume_at(&resume, today());
        assert_eq!(normalized.summary, "Builder of things");
        assert_eq!(normalized.experience.len(), 1);
        assert_eq!(normalized.experience[0].start_date.as_deref(), Some("2020-01"));
        assert_eq!(normalized.experience[0].end_date.as_deref(), Some("2024-06"));
        assert_eq!(normalized.experience[0].achievements, vec!["Shipped v2"]);
        assert!(normalized.education.is_empty());
        assert!(normalized.skills.is_empty());
    }

    #[test]
    fn test_normalize_personal_formats_contacts() {
        let resume = ResumeDocument {
            personal: Some(PersonalInfo {
                name: Some(" Ada  Lovelace ".to_string()),
                email: Some("ADA@Example.com".to_string()),
                phone: Some("555.123.4567".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let personal = normalize_resume_at(&resume, today()).personal.unwrap();
        assert_eq!(personal.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(personal.email.as_deref(), Some("ada@example.com"));
        assert_eq!(personal.phone.as_deref(), Some("+15551234567"));
        assert_eq!(personal.website, None);
    }

    #[test]
    fn test_normalize_personal_keeps_fields_apart() {
        let resume = ResumeDocument {
            personal: Some(PersonalInfo {
                email: Some("jsmith5551234567@example.com".to_string()),
                github: Some("github.com/jsmith".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let personal = normalize_resume_at(&resume, today()).personal.unwrap();
        assert_eq!(personal.phone, None);
        assert_eq!(personal.website, None);
        assert_eq!(
            personal.email.as_deref(),
            Some("jsmith5551234567@example.com")
        );
        assert_eq!(personal.github.as_deref(), Some("https://github.com/jsmith"));
    }

    #[test]
    fn test_analyze_text() {
        let stats = analyze_text("Rust rust go RUST go zig");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.top_words[0].word, "rust");
        assert_eq!(stats.top_words[0].count, 3);
        assert!((stats.top_words[0].density - 50.0).abs() < 1e-9);
        assert_eq!(stats.top_words[1].word, "go");
        assert_eq!(analyze_text("   ").word_count, 0);
    }
}
