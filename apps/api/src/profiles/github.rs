//! GitHub profile import over the public REST API.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{
    non_blank, ProfileError, ProfileImport, ProfilePlatform, ProfileSource, ProfileStats,
};
use crate::models::{PersonalInfo, ProjectEntry, ResumeDocument, SkillGroup};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const RECENT_REPOS: u32 = 10;

static PROFILE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/([^/?#\s]+)").unwrap());
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,38})$").unwrap());

/// Pulls the login out of a profile URL, or accepts a bare login.
pub fn extract_github_username(input: &str) -> Option<String> {
    let input = input.trim();
    let candidate = match PROFILE_PATH.captures(input) {
        Some(caps) => caps[1].to_string(),
        None => input.trim_start_matches('@').to_string(),
    };
    USERNAME.is_match(&candidate).then_some(candidate)
}

// ────────────────────────────────────────────────────────────────────────────
// API payloads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub html_url: String,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct GitHubProfileSource {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubProfileSource {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self, ProfileError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        username: &str,
    ) -> Result<T, ProfileError> {
        let url = format!("{}{}", self.api_url, path);
        debug!(url = %url, "GitHub request");

        let mut request = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.json::<T>().await?),
            StatusCode::NOT_FOUND => Err(ProfileError::NotFound(username.to_string())),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                warn!(username, "GitHub rate limit hit");
                Err(ProfileError::RateLimited)
            }
            status => Err(ProfileError::Status(status.as_u16())),
        }
    }
}

#[async_trait]
impl ProfileSource for GitHubProfileSource {
    async fn import(&self, username: &str) -> Result<ProfileImport, ProfileError> {
        if !USERNAME.is_match(username) {
            return Err(ProfileError::InvalidUrl(username.to_string()));
        }

        let user_path = format!("/users/{username}");
        let repos_path = format!("/users/{username}/repos?sort=updated&per_page={RECENT_REPOS}");
        let (user, repos) = tokio::try_join!(
            self.get_json::<GitHubUser>(&user_path, username),
            self.get_json::<Vec<GitHubRepo>>(&repos_path, username),
        )?;

        debug!(username, repos = repos.len(), "GitHub profile fetched");
        Ok(build_import(user, repos))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Mapping
// ────────────────────────────────────────────────────────────────────────────

fn year_month_prefix(timestamp: Option<&str>) -> Option<String> {
    timestamp.and_then(|t| t.get(..7)).map(str::to_string)
}

pub(crate) fn build_import(user: GitHubUser, repos: Vec<GitHubRepo>) -> ProfileImport {
    let mut languages: Vec<String> = Vec::new();
    for language in repos.iter().filter_map(|r| r.language.as_ref()) {
        if !languages.contains(language) {
            languages.push(language.clone());
        }
    }

    let projects = repos
        .into_iter()
        .map(|repo| ProjectEntry {
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            url: Some(repo.html_url),
            technologies: repo.language.into_iter().collect(),
            date: year_month_prefix(repo.updated_at.as_deref()),
            stars: Some(repo.stargazers_count),
            forks: Some(repo.forks_count),
        })
        .collect();

    let skills = if languages.is_empty() {
        Vec::new()
    } else {
        vec![SkillGroup {
            category: "Languages".to_string(),
            items: languages,
            level: None,
        }]
    };

    let bio = non_blank(user.bio);
    let resume = ResumeDocument {
        personal: Some(PersonalInfo {
            name: Some(non_blank(user.name).unwrap_or_else(|| user.login.clone())),
            github: Some(user.html_url.clone()),
            website: non_blank(user.blog),
            location: non_blank(user.location),
            email: non_blank(user.email),
            ..Default::default()
        }),
        summary: bio.clone().unwrap_or_default(),
        projects,
        skills,
        ..Default::default()
    };

    ProfileImport {
        platform: ProfilePlatform::Github,
        profile_url: user.html_url,
        resume,
        bio,
        stats: Some(ProfileStats {
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            joined: year_month_prefix(user.created_at.as_deref()),
        }),
    }
}
