use serde::{Deserialize, Serialize};

/// Contact block at the top of a resume. Every field is optional because
/// imported sources (PDF text, GitHub, LinkedIn exports) fill it partially.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub location: String,
    /// Free-form on input; `parsing::text::standardize_date` turns it into `YYYY-MM`.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    pub honors: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub url: Option<String>,
    pub technologies: Vec<String>,
    /// `YYYY-MM` of the last update when imported from GitHub.
    pub date: Option<String>,
    pub stars: Option<u32>,
    pub forks: Option<u32>,
}

/// The common resume shape every parser and profile adapter produces and
/// every scorer consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: Option<PersonalInfo>,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<String>,
    pub awards: Vec<String>,
}

/// Named resume sections, used for presence checks and placement hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Awards,
}

impl ResumeSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeSection::Personal => "personal",
            ResumeSection::Summary => "summary",
            ResumeSection::Experience => "experience",
            ResumeSection::Education => "education",
            ResumeSection::Skills => "skills",
            ResumeSection::Projects => "projects",
            ResumeSection::Certifications => "certifications",
            ResumeSection::Awards => "awards",
        }
    }
}

pub(crate) fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

pub(crate) fn has_opt_text(value: Option<&str>) -> bool {
    value.map(has_text).unwrap_or(false)
}

impl ExperienceEntry {
    pub fn has_description_or_achievements(&self) -> bool {
        has_text(&self.description) || !self.achievements.is_empty()
    }
}

impl ResumeDocument {
    /// A section counts as present when it carries any content. An empty
    /// list or a blank summary is treated the same as a missing one.
    pub fn has_section(&self, section: ResumeSection) -> bool {
        match section {
            ResumeSection::Personal => self.personal.is_some(),
            ResumeSection::Summary => has_text(&self.summary),
            ResumeSection::Experience => !self.experience.is_empty(),
            ResumeSection::Education => !self.education.is_empty(),
            ResumeSection::Skills => !self.skills.is_empty(),
            ResumeSection::Projects => !self.projects.is_empty(),
            ResumeSection::Certifications => !self.certifications.is_empty(),
            ResumeSection::Awards => !self.awards.is_empty(),
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.personal
            .as_ref()
            .and_then(|p| p.email.as_deref())
            .filter(|e| has_text(e))
    }

    pub fn phone(&self) -> Option<&str> {
        self.personal
            .as_ref()
            .and_then(|p| p.phone.as_deref())
            .filter(|p| has_text(p))
    }

    pub fn skill_items(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flat_map(|group| group.items.iter().map(String::as_str))
    }

    pub fn achievements(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|exp| exp.achievements.iter().map(String::as_str))
    }

    /// Text the ATS keyword pass reads: summary, experience descriptions and
    /// achievements, skill items, education degree and field.
    pub fn ats_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.summary.as_str()];
        for exp in &self.experience {
            parts.push(&exp.description);
            parts.extend(exp.achievements.iter().map(String::as_str));
        }
        parts.extend(self.skill_items());
        for edu in &self.education {
            parts.push(&edu.degree);
            parts.push(&edu.field);
        }
        join_non_empty(&parts)
    }

    /// Text the keyword report reads. Adds titles, companies, skill
    /// categories and institutions on top of `ats_text`.
    pub fn keyword_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.summary.as_str()];
        for exp in &self.experience {
            parts.push(&exp.position);
            parts.push(&exp.company);
            parts.push(&exp.description);
            parts.extend(exp.achievements.iter().map(String::as_str));
        }
        for group in &self.skills {
            parts.push(&group.category);
            parts.extend(group.items.iter().map(String::as_str));
        }
        for edu in &self.education {
            parts.push(&edu.degree);
            parts.push(&edu.field);
            parts.push(&edu.institution);
        }
        join_non_empty(&parts)
    }

    /// Prose content used for readability and language checks.
    pub fn narrative_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.summary.as_str()];
        for exp in &self.experience {
            parts.push(&exp.description);
            parts.extend(exp.achievements.iter().map(String::as_str));
        }
        for edu in &self.education {
            parts.push(&edu.description);
        }
        for group in &self.skills {
            parts.push(&group.category);
            parts.extend(group.items.iter().map(String::as_str));
        }
        join_non_empty(&parts)
    }

    /// Everything, including contact and project fields.
    pub fn full_text(&self) -> String {
        let mut text = self.keyword_text();
        if let Some(personal) = &self.personal {
            for field in [&personal.name, &personal.title, &personal.location] {
                if let Some(value) = field {
                    text.push(' ');
                    text.push_str(value);
                }
            }
        }
        for project in &self.projects {
            text.push(' ');
            text.push_str(&project.name);
            text.push(' ');
            text.push_str(&project.description);
            for tech in &project.technologies {
                text.push(' ');
                text.push_str(tech);
            }
        }
        for extra in self.certifications.iter().chain(self.awards.iter()) {
            text.push(' ');
            text.push_str(extra);
        }
        text
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume_has_no_sections() {
        let resume = ResumeDocument::default();
        assert!(!resume.has_section(ResumeSection::Personal));
        assert!(!resume.has_section(ResumeSection::Summary));
        assert!(!resume.has_section(ResumeSection::Experience));
        assert!(resume.ats_text().is_empty());
    }

    #[test]
    fn test_blank_summary_counts_as_missing() {
        let resume = ResumeDocument {
            summary: "   ".to_string(),
            ..Default::default()
        };
        assert!(!resume.has_section(ResumeSection::Summary));
    }

    #[test]
    fn test_partial_json_deserializes_with_defaults() {
        let json = r#"{
            "personal": {"name": "Ada Lovelace", "email": "ada@example.com"},
            "experience": [{"company": "Analytical Engines", "position": "Engineer"}]
        }"#;
        let resume: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(resume.email(), Some("ada@example.com"));
        assert_eq!(resume.phone(), None);
        assert_eq!(resume.experience[0].achievements.len(), 0);
        assert!(resume.skills.is_empty());
    }

    #[test]
    fn test_ats_text_collects_sections_in_order() {
        let resume = ResumeDocument {
            summary: "Backend engineer".to_string(),
            experience: vec![ExperienceEntry {
                description: "Built APIs".to_string(),
                achievements: vec!["Cut latency 40%".to_string()],
                ..Default::default()
            }],
            skills: vec![SkillGroup {
                category: "Programming".to_string(),
                items: vec!["Rust".to_string()],
                level: None,
            }],
            ..Default::default()
        };
        assert_eq!(
            resume.ats_text(),
            "Backend engineer Built APIs Cut latency 40% Rust"
        );
        assert!(resume.keyword_text().contains("Programming"));
    }
}
