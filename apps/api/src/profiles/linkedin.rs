//! LinkedIn URL handling and conversion of manually supplied LinkedIn
//! profile data. Profiles are never fetched; LinkedIn has no public API.

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::non_blank;
use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, SkillGroup};
use crate::parsing::text::month_number;

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?(www\.)?linkedin\.com/in/[\w-]+/?$").unwrap()
});
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/([\w-]+)").unwrap());
static MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]{3,9})\.?\s+(\d{4})").unwrap());
static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)([a-z]{3,9}\.?\s+\d{4})\s*[-–—]\s*([a-z]{3,9}\.?\s+\d{4}|present|current)",
    )
    .unwrap()
});
static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

pub fn validate_linkedin_url(url: &str) -> bool {
    PROFILE_URL.is_match(url.trim())
}

/// Canonical `https://www.linkedin.com/in/<user>` form, without query or
/// trailing slash.
pub fn normalize_linkedin_url(url: &str) -> String {
    let mut url = url.trim();
    if let Some(idx) = url.find(['?', '#']) {
        url = &url[..idx];
    }
    let url = url.trim_end_matches('/');
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host_and_path = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    format!("https://www.{host_and_path}")
}

pub fn extract_linkedin_username(url: &str) -> Option<String> {
    USERNAME.captures(url).map(|caps| caps[1].to_string())
}

/// Candidate profile URLs for a username.
pub fn linkedin_profile_urls(username: &str) -> Vec<String> {
    vec![
        format!("https://www.linkedin.com/in/{username}"),
        format!("https://linkedin.com/in/{username}"),
        format!("https://www.linkedin.com/in/{username}/"),
    ]
}

/// `Mon YYYY` (or a full month name) as `YYYY-MM`.
pub fn parse_linkedin_date(text: &str) -> Option<String> {
    let caps = MONTH_YEAR.captures(text.trim())?;
    let month = month_number(&caps[1])?;
    Some(format!("{}-{month:02}", &caps[2]))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
    pub current: bool,
}

pub fn parse_duration(text: &str) -> DateRange {
    parse_duration_at(text, Utc::now().date_naive())
}

/// Reads a LinkedIn duration line such as `Jan 2020 - Present · 3 yrs`.
/// Falls back to bare years when no month range is present.
pub fn parse_duration_at(text: &str, today: NaiveDate) -> DateRange {
    let lower = text.to_lowercase();
    let current = lower.contains("present") || lower.contains("current");
    let mut range = DateRange {
        current,
        end: current.then(|| today.format("%Y-%m").to_string()),
        ..Default::default()
    };

    if let Some(caps) = RANGE.captures(text) {
        range.start = parse_linkedin_date(&caps[1]);
        if !current {
            range.end = parse_linkedin_date(&caps[2]);
        }
        return range;
    }

    let years: Vec<&str> = YEAR
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    if let Some(first) = years.first() {
        range.start = Some(format!("{first}-01"));
    }
    if !current {
        if let Some(second) = years.get(1) {
            range.end = Some(format!("{second}-12"));
        }
    }
    range
}

// ────────────────────────────────────────────────────────────────────────────
// Manual profile data
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkedInPosition {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Duration line as shown on the profile.
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkedInSchool {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkedInProfile {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub about: String,
    pub experience: Vec<LinkedInPosition>,
    pub education: Vec<LinkedInSchool>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

pub fn resume_from_linkedin(profile: &LinkedInProfile, profile_url: &str) -> ResumeDocument {
    resume_from_linkedin_at(profile, profile_url, Utc::now().date_naive())
}

pub fn resume_from_linkedin_at(
    profile: &LinkedInProfile,
    profile_url: &str,
    today: NaiveDate,
) -> ResumeDocument {
    let experience = profile
        .experience
        .iter()
        .map(|position| {
            let range = parse_duration_at(&position.duration, today);
            ExperienceEntry {
                company: position.company.clone(),
                position: position.title.clone(),
                location: position.location.clone(),
                start_date: range.start,
                end_date: range.end,
                current: range.current,
                description: position.description.clone(),
                achievements: Vec::new(),
            }
        })
        .collect();

    let education = profile
        .education
        .iter()
        .map(|school| {
            let range = parse_duration_at(&school.duration, today);
            EducationEntry {
                institution: school.school.clone(),
                degree: school.degree.clone(),
                field: school.field.clone(),
                start_date: range.start,
                end_date: range.end,
                ..Default::default()
            }
        })
        .collect();

    let skills = if profile.skills.is_empty() {
        Vec::new()
    } else {
        vec![SkillGroup {
            category: "Skills".to_string(),
            items: profile.skills.clone(),
            level: None,
        }]
    };

    ResumeDocument {
        personal: Some(PersonalInfo {
            name: non_blank(profile.name.clone()),
            title: non_blank(profile.headline.clone()),
            location: non_blank(profile.location.clone()),
            linkedin: Some(normalize_linkedin_url(profile_url)),
            ..Default::default()
        }),
        summary: profile.about.clone(),
        experience,
        education,
        skills,
        certifications: profile.certifications.clone(),
        ..Default::default()
    }
}
