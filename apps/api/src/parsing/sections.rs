//! Turns raw resume text (pasted or extracted from a PDF) into a
//! [`ResumeDocument`] by slicing it at heading lines and parsing each block.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::text::{EMAIL, GITHUB, LINKEDIN, PHONE};
use crate::models::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, ResumeSection,
    SkillGroup,
};

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+(?: [A-Z][a-z]+)*)").unwrap());
static WEBSITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://)?(?:www\.)?[\w-]+\.[a-z]{2,}(?:/[\w./-]*)?").unwrap());

/// Heading lines, matched whole so that "skills" inside a sentence is not a
/// section break.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(work experience|professional experience|experience|employment|academic background|education|qualifications|technical skills|core competencies|skills|expertise|projects|portfolio|work samples|certifications|certificates|licenses|summary|profile|objective|about)[ \t]*:?[ \t]*$",
    )
    .unwrap()
});

static EXPERIENCE_DATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{4}|[a-z]{3,9}\.?[ \t]+\d{4})\s*[-–—]\s*(\d{4}|[a-z]{3,9}\.?[ \t]+\d{4}|present|current)")
        .unwrap()
});
static EDUCATION_DATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})\s*[-–—]\s*(\d{4})").unwrap());
static GPA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)GPA:?\s*(\d+\.\d+)").unwrap());
static POSITION_AT_COMPANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(?:at|@)\s+(.+)$").unwrap());
static DEGREE_FROM_SCHOOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(?:from|at)\s+(.+)$").unwrap());
static BLOCK_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

const BULLETS: &[char] = &['•', '-', '*'];

fn heading_section(heading: &str) -> ResumeSection {
    match heading.to_lowercase().as_str() {
        "work experience" | "professional experience" | "experience" | "employment" => {
            ResumeSection::Experience
        }
        "academic background" | "education" | "qualifications" => ResumeSection::Education,
        "technical skills" | "core competencies" | "skills" | "expertise" => ResumeSection::Skills,
        "projects" | "portfolio" | "work samples" => ResumeSection::Projects,
        "certifications" | "certificates" | "licenses" => ResumeSection::Certifications,
        _ => ResumeSection::Summary,
    }
}

/// Body of every recognized section, in document order. A section heading
/// that appears twice keeps its first body.
pub fn split_sections(text: &str) -> Vec<(ResumeSection, String)> {
    let headings: Vec<_> = HEADING.captures_iter(text).collect();
    let mut sections: Vec<(ResumeSection, String)> = Vec::new();

    for (i, caps) in headings.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());
        let section = heading_section(name.as_str());
        if sections.iter().any(|(s, _)| *s == section) {
            continue;
        }
        sections.push((section, text[whole.end()..end].trim().to_string()));
    }
    sections
}

pub fn parse_personal_info(text: &str) -> PersonalInfo {
    let website = WEBSITE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| {
            !candidate.contains("linkedin")
                && !candidate.contains("github")
                && !EMAIL.is_match(candidate)
                && !text.contains(&format!("@{candidate}"))
        })
        .map(str::to_string);

    PersonalInfo {
        name: NAME.captures(text).map(|c| c[1].trim().to_string()),
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE.find(text).map(|m| m.as_str().trim().to_string()),
        linkedin: LINKEDIN.find(text).map(|m| m.as_str().to_string()),
        github: GITHUB.find(text).map(|m| m.as_str().to_string()),
        website,
        ..Default::default()
    }
}

fn blocks(section: &str) -> impl Iterator<Item = Vec<&str>> {
    BLOCK_BREAK.split(section).map(|block| {
        block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
    })
}

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLETS).map(str::trim)
}

/// Experience blocks are separated by blank lines. The first line is either
/// "Position at Company" or the position with the company on the next line.
pub fn parse_experience(section: &str) -> Vec<ExperienceEntry> {
    blocks(section)
        .filter(|lines| lines.len() >= 2)
        .map(|lines| {
            let mut entry = ExperienceEntry::default();
            if let Some(caps) = POSITION_AT_COMPANY.captures(lines[0]) {
                entry.position = caps[1].trim().to_string();
                entry.company = caps[2].trim().to_string();
            } else {
                entry.position = lines[0].to_string();
                entry.company = lines[1].to_string();
            }

            let block = lines.join("\n");
            if let Some(caps) = EXPERIENCE_DATES.captures(&block) {
                entry.start_date = Some(caps[1].to_string());
                let end = caps[2].to_string();
                entry.current = matches!(end.to_lowercase().as_str(), "present" | "current");
                entry.end_date = Some(end);
            }

            entry.achievements = lines
                .iter()
                .filter_map(|line| strip_bullet(line))
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect();
            entry
        })
        .collect()
}

pub fn parse_education(section: &str) -> Vec<EducationEntry> {
    blocks(section)
        .filter(|lines| !lines.is_empty())
        .map(|lines| {
            let mut entry = EducationEntry::default();
            if let Some(caps) = DEGREE_FROM_SCHOOL.captures(lines[0]) {
                entry.degree = caps[1].trim().to_string();
                entry.institution = caps[2].trim().to_string();
            } else {
                entry.degree = lines[0].to_string();
                if let Some(second) = lines.get(1) {
                    entry.institution = second.to_string();
                }
            }

            let block = lines.join("\n");
            if let Some(caps) = EDUCATION_DATES.captures(&block) {
                entry.start_date = Some(caps[1].to_string());
                entry.end_date = Some(caps[2].to_string());
            }
            entry.gpa = GPA.captures(&block).map(|c| c[1].to_string());
            entry
        })
        .collect()
}

fn split_items(items: &str) -> Vec<String> {
    items
        .split([',', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// "Category: a, b; c" lines become named groups; bare lists are grouped
/// under "Skills".
pub fn parse_skills(section: &str) -> Vec<SkillGroup> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let line = strip_bullet(line).unwrap_or(line);
            let (category, items) = match line.split_once(':') {
                Some((category, items)) => (category.trim(), split_items(items)),
                None => ("Skills", split_items(line)),
            };
            (!items.is_empty()).then(|| SkillGroup {
                category: category.to_string(),
                items,
                level: None,
            })
        })
        .collect()
}

/// One project per block: a name line followed by description lines.
pub fn parse_projects(section: &str) -> Vec<ProjectEntry> {
    blocks(section)
        .filter(|lines| !lines.is_empty())
        .map(|lines| {
            let name = strip_bullet(lines[0]).unwrap_or(lines[0]).to_string();
            let description = lines[1..]
                .iter()
                .map(|line| strip_bullet(line).unwrap_or(*line))
                .collect::<Vec<_>>()
                .join(" ");
            ProjectEntry {
                name,
                description,
                ..Default::default()
            }
        })
        .collect()
}

fn parse_list(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .map(|line| strip_bullet(line).unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Best-effort structure for plain resume text. Text with no recognizable
/// headings yields a document holding only personal info.
pub fn parse_resume_text(text: &str) -> ResumeDocument {
    let text = text.replace("\r\n", "\n");
    let mut resume = ResumeDocument {
        personal: Some(parse_personal_info(&text)),
        ..Default::default()
    };

    for (section, body) in split_sections(&text) {
        match section {
            ResumeSection::Summary => {
                resume.summary = body.split_whitespace().collect::<Vec<_>>().join(" ")
            }
            ResumeSection::Experience => resume.experience = parse_experience(&body),
            ResumeSection::Education => resume.education = parse_education(&body),
            ResumeSection::Skills => resume.skills = parse_skills(&body),
            ResumeSection::Projects => resume.projects = parse_projects(&body),
            ResumeSection::Certifications => resume.certifications = parse_list(&body),
            ResumeSection::Personal | ResumeSection::Awards => {}
        }
    }

    debug!(
        experience = resume.experience.len(),
        education = resume.education.len(),
        skills = resume.skills.len(),
        "parsed resume text"
    );
    resume
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME_TEXT: &str = "\
Jane Doe
jane@example.com | (555) 123-4567 | linkedin.com/in/janedoe | github.com/janedoe

SUMMARY
Backend engineer who enjoys
building reliable systems.

WORK EXPERIENCE
Senior Engineer at Acme Corp
Jan 2020 - Present
• Led migration to Rust services
• Reduced latency by 40%

Engineer
Globex
2017 - 2019
- Built billing pipeline

EDUCATION
BS Computer Science from State University
2013 - 2017
GPA: 3.8

Skills:
Languages: Rust, Python; Go
Docker, Kubernetes

CERTIFICATIONS
• AWS Certified Solutions Architect
";

    #[test]
    fn test_split_sections_in_document_order() {
        let sections: Vec<ResumeSection> = split_sections(RESUME_TEXT)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(
            sections,
            vec![
                ResumeSection::Summary,
                ResumeSection::Experience,
                ResumeSection::Education,
                ResumeSection::Skills,
                ResumeSection::Certifications,
            ]
        );
    }

    #[test]
    fn test_heading_words_inside_sentences_do_not_split() {
        let sections = split_sections("SUMMARY\nStrong communication skills and experience.\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].1, "Strong communication skills and experience.");
    }

    #[test]
    fn test_parse_personal_info() {
        let personal = parse_personal_info(RESUME_TEXT);
        assert_eq!(personal.name.as_deref(), Some("Jane Doe"));
        assert_eq!(personal.email.as_deref(), Some("jane@example.com"));
        assert_eq!(personal.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(personal.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(personal.github.as_deref(), Some("github.com/janedoe"));
        assert_eq!(personal.website, None);
    }

    #[test]
    fn test_parse_experience_blocks() {
        let resume = parse_resume_text(RESUME_TEXT);
        assert_eq!(resume.experience.len(), 2);

        let first = &resume.experience[0];
        assert_eq!(first.position, "Senior Engineer");
        assert_eq!(first.company, "Acme Corp");
        assert_eq!(first.start_date.as_deref(), Some("Jan 2020"));
        assert_eq!(first.end_date.as_deref(), Some("Present"));
        assert!(first.current);
        assert_eq!(first.achievements.len(), 2);
        assert_eq!(first.achievements[1], "Reduced latency by 40%");

        let second = &resume.experience[1];
        assert_eq!(second.position, "Engineer");
        assert_eq!(second.company, "Globex");
        assert_eq!(second.start_date.as_deref(), Some("2017"));
        assert!(!second.current);
        assert_eq!(second.achievements, vec!["Built billing pipeline"]);
    }

    #[test]
    fn test_parse_education_and_skills() {
        let resume = parse_resume_text(RESUME_TEXT);
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].degree, "BS Computer Science");
        assert_eq!(resume.education[0].institution, "State University");
        assert_eq!(resume.education[0].end_date.as_deref(), Some("2017"));
        assert_eq!(resume.education[0].gpa.as_deref(), Some("3.8"));

        assert_eq!(resume.skills.len(), 2);
        assert_eq!(resume.skills[0].category, "Languages");
        assert_eq!(resume.skills[0].items, vec!["Rust", "Python", "Go"]);
        assert_eq!(resume.skills[1].category, "Skills");
        assert_eq!(resume.skills[1].items, vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn test_summary_and_certifications() {
        let resume = parse_resume_text(RESUME_TEXT);
        assert_eq!(
            resume.summary,
            "Backend engineer who enjoys building reliable systems."
        );
        assert_eq!(
            resume.certifications,
            vec!["AWS Certified Solutions Architect"]
        );
    }

    #[test]
    fn test_single_line_experience_block_is_skipped() {
        assert!(parse_experience("Just a title").is_empty());
    }

    #[test]
    fn test_text_without_headings() {
        let resume = parse_resume_text("hello there");
        assert!(resume.experience.is_empty());
        assert!(resume.summary.is_empty());
        assert_eq!(resume.personal.unwrap().name, None);
    }
}
