//! Profile adapters: turn third-party profiles into the common resume shape
//! and fold imported data into an existing resume.

pub mod github;
pub mod handlers;
pub mod linkedin;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{PersonalInfo, ResumeDocument};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid profile URL: {0}")]
    InvalidUrl(String),

    #[error("unsupported profile source: {0}")]
    Unsupported(String),

    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("profile provider rate limit reached")]
    RateLimited,

    #[error("profile provider returned status {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfilePlatform {
    Github,
    Linkedin,
    Twitter,
    Portfolio,
}

impl ProfilePlatform {
    /// Classifies a profile URL by host. Bare hosts without a scheme are
    /// accepted.
    pub fn detect(url: &str) -> Result<Self, ProfileError> {
        let parsed = parse_loose_url(url)?;
        let host = parsed
            .host_str()
            .map(str::to_lowercase)
            .ok_or_else(|| ProfileError::InvalidUrl(url.to_string()))?;

        let platform = if host_matches(&host, "github.com") {
            ProfilePlatform::Github
        } else if host_matches(&host, "linkedin.com") {
            ProfilePlatform::Linkedin
        } else if host_matches(&host, "twitter.com") || host_matches(&host, "x.com") {
            ProfilePlatform::Twitter
        } else {
            ProfilePlatform::Portfolio
        };
        Ok(platform)
    }
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{domain}"))
}

fn parse_loose_url(url: &str) -> Result<Url, ProfileError> {
    let url = url.trim();
    let with_scheme = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };
    Url::parse(&with_scheme).map_err(|_| ProfileError::InvalidUrl(url.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    /// `YYYY-MM` of account creation.
    pub joined: Option<String>,
}

/// What an adapter produced: resume fragments plus source metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileImport {
    pub platform: ProfilePlatform,
    pub profile_url: String,
    pub resume: ResumeDocument,
    pub bio: Option<String>,
    pub stats: Option<ProfileStats>,
}

/// Fetches a profile by username from a remote provider.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn import(&self, username: &str) -> Result<ProfileImport, ProfileError>;
}

const SOCIAL_DOMAINS: &[&str] = &[
    "github.com",
    "linkedin.com",
    "twitter.com",
    "x.com",
    "behance.net",
    "dribbble.com",
    "medium.com",
    "dev.to",
];

/// True for absolute http(s) URLs on a known social or portfolio host.
pub fn validate_social_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = parsed.host_str().map(str::to_lowercase) else {
        return false;
    };

    SOCIAL_DOMAINS.iter().any(|d| host_matches(&host, d))
        || [".dev", ".io", ".me"].iter().any(|tld| host.ends_with(tld))
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Folds imported data into `resume`. Imported contact fields win when they
/// carry text, the summary is only filled when empty, projects and skill
/// groups are appended.
pub fn merge_profile_data(resume: &ResumeDocument, imported: &ResumeDocument) -> ResumeDocument {
    let mut merged = resume.clone();

    if let Some(incoming) = &imported.personal {
        let base = merged.personal.take().unwrap_or_default();
        let pick = |new: &Option<String>, old: Option<String>| non_blank(new.clone()).or(old);
        merged.personal = Some(PersonalInfo {
            name: pick(&incoming.name, base.name),
            title: pick(&incoming.title, base.title),
            email: pick(&incoming.email, base.email),
            phone: pick(&incoming.phone, base.phone),
            location: pick(&incoming.location, base.location),
            linkedin: pick(&incoming.linkedin, base.linkedin),
            github: pick(&incoming.github, base.github),
            website: pick(&incoming.website, base.website),
        });
    }

    if merged.summary.trim().is_empty() && !imported.summary.trim().is_empty() {
        merged.summary = imported.summary.clone();
    }
    merged.projects.extend(imported.projects.iter().cloned());
    merged.skills.extend(imported.skills.iter().cloned());
    merged
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSuggestion {
    pub platform: String,
    pub url: String,
    pub description: String,
}

/// Guesses handle-based profile URLs from the resume name.
pub fn profile_suggestions(resume: &ResumeDocument) -> Vec<ProfileSuggestion> {
    let handle: String = resume
        .personal
        .as_ref()
        .and_then(|p| p.name.as_deref())
        .unwrap_or_default()
        .to_lowercase()
        .split_whitespace()
        .collect();
    if handle.is_empty() {
        return Vec::new();
    }

    let suggestion = |platform: &str, url: String, description: &str| ProfileSuggestion {
        platform: platform.to_string(),
        url,
        description: description.to_string(),
    };
    vec![
        suggestion(
            "GitHub",
            format!("https://github.com/{handle}"),
            "Showcase your code repositories and contributions",
        ),
        suggestion(
            "LinkedIn",
            format!("https://linkedin.com/in/{handle}"),
            "Professional networking and career history",
        ),
        suggestion(
            "Portfolio",
            format!("https://{handle}.dev"),
            "Personal website showcasing your work",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectEntry, SkillGroup};

    #[test]
    fn test_detect_platform() {
        assert_eq!(
            ProfilePlatform::detect("https://github.com/octocat").unwrap(),
            ProfilePlatform::Github
        );
        assert_eq!(
            ProfilePlatform::detect("www.linkedin.com/in/jane").unwrap(),
            ProfilePlatform::Linkedin
        );
        assert_eq!(
            ProfilePlatform::detect("https://x.com/jane").unwrap(),
            ProfilePlatform::Twitter
        );
        assert_eq!(
            ProfilePlatform::detect("https://jane.dev").unwrap(),
            ProfilePlatform::Portfolio
        );
        assert!(ProfilePlatform::detect("not a url at all").is_err());
    }

    #[test]
    fn test_validate_social_url() {
        assert!(validate_social_url("https://github.com/octocat"));
        assert!(validate_social_url("https://www.behance.net/jane"));
        assert!(validate_social_url("https://jane.dev"));
        assert!(validate_social_url("https://cool.io/about"));
        assert!(!validate_social_url("https://example.com"));
        assert!(!validate_social_url("github.com/octocat"));
        assert!(!validate_social_url("ftp://github.com/octocat"));
        assert!(!validate_social_url("https://notgithub.com/x"));
    }

    #[test]
    fn test_merge_profile_data() {
        let resume = ResumeDocument {
            personal: Some(PersonalInfo {
                name: Some("Jane Doe".to_string()),
                phone: Some("+15551234567".to_string()),
                ..Default::default()
            }),
            summary: "Existing summary".to_string(),
            projects: vec![ProjectEntry {
                name: "old".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let imported = ResumeDocument {
            personal: Some(PersonalInfo {
                github: Some("https://github.com/jane".to_string()),
                name: Some("Jane Q. Doe".to_string()),
                ..Default::default()
            }),
            summary: "Imported bio".to_string(),
            projects: vec![ProjectEntry {
                name: "new".to_string(),
                ..Default::default()
            }],
            skills: vec![SkillGroup {
                category: "Languages".to_string(),
                items: vec!["Rust".to_string()],
                level: None,
            }],
            ..Default::default()
        };

        let merged = merge_profile_data(&resume, &imported);
        let personal = merged.personal.unwrap();
        assert_eq!(personal.name.as_deref(), Some("Jane Q. Doe"));
        assert_eq!(personal.phone.as_deref(), Some("+15551234567"));
        assert_eq!(personal.github.as_deref(), Some("https://github.com/jane"));
        assert_eq!(merged.summary, "Existing summary");
        assert_eq!(merged.projects.len(), 2);
        assert_eq!(merged.projects[1].name, "new");
        assert_eq!(merged.skills.len(), 1);
    }

    #[test]
    fn test_merge_ignores_blank_imported_fields() {
        let resume = ResumeDocument {
            personal: Some(PersonalInfo {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@x.com".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let imported = ResumeDocument {
            personal: Some(PersonalInfo {
                name: Some(String::new()),
                email: Some("  ".to_string()),
                location: Some("Berlin".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let personal = merge_profile_data(&resume, &imported).personal.unwrap();
        assert_eq!(personal.name.as_deref(), Some("Jane Doe"));
        assert_eq!(personal.email.as_deref(), Some("jane@x.com"));
        assert_eq!(personal.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_profile_suggestions() {
        let resume = ResumeDocument {
            personal: Some(PersonalInfo {
                name: Some("Jane  Doe".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let suggestions = profile_suggestions(&resume);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].url, "https://github.com/janedoe");
        assert_eq!(suggestions[2].url, "https://janedoe.dev");

        assert!(profile_suggestions(&ResumeDocument::default()).is_empty());
    }
}
