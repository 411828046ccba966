//! Static keyword tables: scan vocabulary, category lookup, industry
//! databases, synonyms, level terms, usage examples.
//!
//! Everything here is immutable. Lookups take already lower-cased input
//! unless stated otherwise.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Industry, JobLevel, KeywordCategory, ResumeSection};

// ────────────────────────────────────────────────────────────────────────────
// Job-description scan vocabulary
// ────────────────────────────────────────────────────────────────────────────

pub const TECHNICAL_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node.js",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "ci/cd",
    "devops",
    "machine learning",
    "artificial intelligence",
    "data science",
    "cloud computing",
    "microservices",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "analytical",
    "creative",
    "adaptable",
    "detail-oriented",
    "time management",
    "collaboration",
];

pub const ACTION_VERBS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "implemented",
    "designed",
    "created",
    "built",
    "improved",
    "optimized",
    "analyzed",
    "coordinated",
    "supervised",
    "executed",
    "delivered",
    "launched",
    "maintained",
    "collaborated",
    "facilitated",
    "streamlined",
];

pub const INDUSTRY_TERMS: &[&str] = &[
    "project management",
    "business analysis",
    "quality assurance",
    "user experience",
    "customer service",
    "sales",
    "marketing",
];

/// Terms that earn +1 importance when a job description mentions them.
pub const PRIORITY_TECHNICAL: &[&str] = &["javascript", "python", "java", "react", "aws", "sql"];

pub fn scan_vocabulary() -> impl Iterator<Item = &'static str> {
    TECHNICAL_SKILLS
        .iter()
        .chain(SOFT_SKILLS)
        .chain(ACTION_VERBS)
        .chain(INDUSTRY_TERMS)
        .copied()
}

// ────────────────────────────────────────────────────────────────────────────
// Category lookup
// ────────────────────────────────────────────────────────────────────────────

const CATEGORY_TABLE: &[(KeywordCategory, &[&str])] = &[
    (
        KeywordCategory::Technical,
        &["javascript", "python", "java", "react", "sql", "aws", "docker"],
    ),
    (
        KeywordCategory::Soft,
        &["leadership", "communication", "teamwork", "problem solving"],
    ),
    (
        KeywordCategory::Industry,
        &["project management", "business analysis", "quality assurance"],
    ),
    (
        KeywordCategory::Tools,
        &["git", "jira", "slack", "microsoft office", "adobe"],
    ),
    (
        KeywordCategory::Certification,
        &["aws certified", "pmp", "cissp", "comptia"],
    ),
];

/// Category of a keyword. The fixed table wins, then action verbs, then the
/// wider scan vocabulary and pattern checks; anything else is `General`.
pub fn categorize_keyword(word: &str) -> KeywordCategory {
    let word = word.trim().to_lowercase();

    for (category, terms) in CATEGORY_TABLE {
        if terms.contains(&word.as_str()) {
            return *category;
        }
    }
    if is_action_verb(&word) {
        return KeywordCategory::Action;
    }
    if TECHNICAL_SKILLS.contains(&word.as_str()) || is_technical_keyword(&word) {
        return KeywordCategory::Technical;
    }
    if SOFT_SKILLS.contains(&word.as_str()) {
        return KeywordCategory::Soft;
    }
    if is_certification(&word) {
        return KeywordCategory::Certification;
    }
    if INDUSTRY_TERMS.contains(&word.as_str()) || is_industry_keyword(&word) {
        return KeywordCategory::Industry;
    }
    KeywordCategory::General
}

// ────────────────────────────────────────────────────────────────────────────
// Term classifiers
// ────────────────────────────────────────────────────────────────────────────

static TECHNICAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(javascript|python|java|sql|aws|react|node|api|database|cloud|docker|kubernetes)\b",
        r"(?i)\b\w+\.(js|py|java|sql|html|css|php|rb|go|rs)\b",
        r"(?i)\b(framework|library|sdk|ide|compiler|debugger)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// True when the text mentions a technical term, a source-file style token
/// (`app.js`) or tooling vocabulary. Works on single words and phrases.
pub fn is_technical_keyword(text: &str) -> bool {
    TECHNICAL_PATTERNS.iter().any(|re| re.is_match(text))
}

pub fn is_action_verb(word: &str) -> bool {
    ACTION_VERBS.contains(&word.trim().to_lowercase().as_str())
}

const CERTIFICATIONS: &[&str] = &[
    "aws certified",
    "azure certified",
    "google cloud",
    "cissp",
    "cisa",
    "cism",
    "pmp",
    "scrum master",
    "agile",
    "itil",
    "comptia",
    "cisco",
    "microsoft certified",
    "oracle certified",
    "salesforce certified",
    "tableau certified",
];

/// Substring check, so "aws certified solutions architect" counts.
pub fn is_certification(text: &str) -> bool {
    let text = text.to_lowercase();
    CERTIFICATIONS.iter().any(|cert| text.contains(cert))
}

pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "up",
    "about", "into", "through", "during", "before", "after", "above", "below", "between",
    "among", "this", "that", "these", "those", "what", "which", "who", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "only",
    "own", "same", "so", "than", "too", "very", "can", "will", "just", "should", "now",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word.trim().to_lowercase().as_str())
}

/// Two-word fillers that never make a useful phrase.
pub const FILLER_PHRASES: &[&str] = &["and the", "of the", "in the", "to the", "for the"];

// ────────────────────────────────────────────────────────────────────────────
// Industry keyword databases
// ────────────────────────────────────────────────────────────────────────────

type TermGroups = &'static [(&'static str, &'static [&'static str])];

const TECHNOLOGY_TERMS: TermGroups = &[
    (
        "programming",
        &["javascript", "python", "java", "c++", "c#", "php", "ruby", "go", "rust", "swift"],
    ),
    (
        "frameworks",
        &["react", "angular", "vue", "node.js", "express", "django", "flask", "spring", "laravel"],
    ),
    (
        "databases",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "dynamodb"],
    ),
    (
        "cloud",
        &["aws", "azure", "gcp", "docker", "kubernetes", "terraform", "jenkins", "ci/cd"],
    ),
    (
        "tools",
        &["git", "jira", "confluence", "slack", "vs code", "intellij", "eclipse"],
    ),
    (
        "methodologies",
        &["agile", "scrum", "kanban", "devops", "tdd", "microservices", "api"],
    ),
];

const FINANCE_TERMS: TermGroups = &[
    (
        "analysis",
        &["financial modeling", "valuation", "risk analysis", "portfolio management", "derivatives"],
    ),
    (
        "tools",
        &["excel", "bloomberg", "reuters", "tableau", "power bi", "sas", "r", "python"],
    ),
    (
        "regulations",
        &["sox", "basel", "ifrs", "gaap", "cfa", "frm", "compliance"],
    ),
    (
        "products",
        &["equity", "fixed income", "commodities", "fx", "credit", "structured products"],
    ),
];

const HEALTHCARE_TERMS: TermGroups = &[
    (
        "clinical",
        &["patient care", "diagnosis", "treatment", "medical records", "clinical trials"],
    ),
    (
        "specialties",
        &["cardiology", "oncology", "neurology", "pediatrics", "surgery", "radiology"],
    ),
    (
        "systems",
        &["epic", "cerner", "meditech", "allscripts", "athenahealth", "emr", "ehr"],
    ),
    (
        "regulations",
        &["hipaa", "fda", "joint commission", "osha", "clinical governance"],
    ),
];

const MARKETING_TERMS: TermGroups = &[
    (
        "digital",
        &["seo", "sem", "social media", "content marketing", "email marketing", "ppc"],
    ),
    (
        "analytics",
        &["google analytics", "adobe analytics", "mixpanel", "segment", "conversion tracking"],
    ),
    (
        "tools",
        &["hubspot", "salesforce", "marketo", "mailchimp", "hootsuite", "canva", "photoshop"],
    ),
    (
        "strategy",
        &["brand management", "campaign management", "market research", "competitor analysis"],
    ),
];

const SALES_TERMS: TermGroups = &[
    (
        "process",
        &["lead generation", "prospecting", "closing", "negotiation", "pipeline management"],
    ),
    (
        "tools",
        &["salesforce", "hubspot", "pipedrive", "outreach", "linkedin sales navigator"],
    ),
    (
        "metrics",
        &["quota attainment", "conversion rates", "average deal size", "sales cycle", "churn rate"],
    ),
];

pub fn industry_terms(industry: Industry) -> TermGroups {
    match industry {
        Industry::Technology => TECHNOLOGY_TERMS,
        Industry::Finance => FINANCE_TERMS,
        Industry::Healthcare => HEALTHCARE_TERMS,
        Industry::Marketing => MARKETING_TERMS,
        Industry::Sales => SALES_TERMS,
        Industry::Law | Industry::General => &[],
    }
}

const ALL_INDUSTRIES: &[Industry] = &[
    Industry::Technology,
    Industry::Finance,
    Industry::Healthcare,
    Industry::Marketing,
    Industry::Sales,
];

/// True when the term appears in any industry database.
pub fn is_industry_keyword(term: &str) -> bool {
    let term = term.trim().to_lowercase();
    ALL_INDUSTRIES.iter().any(|industry| {
        industry_terms(*industry)
            .iter()
            .any(|(_, terms)| terms.contains(&term.as_str()))
    })
}

/// Weight of a database group for an industry. Groups without an explicit
/// weight get 0.2.
pub fn industry_group_weight(industry: Industry, group: &str) -> f64 {
    let weights: &[(&str, f64)] = match industry {
        Industry::Technology => &[
            ("technical", 0.4),
            ("soft", 0.2),
            ("tools", 0.2),
            ("certifications", 0.2),
        ],
        Industry::Finance => &[
            ("technical", 0.3),
            ("soft", 0.3),
            ("regulations", 0.2),
            ("certifications", 0.2),
        ],
        Industry::Healthcare => &[
            ("clinical", 0.4),
            ("soft", 0.3),
            ("certifications", 0.2),
            ("regulations", 0.1),
        ],
        Industry::Marketing => &[
            ("creative", 0.3),
            ("analytical", 0.3),
            ("soft", 0.2),
            ("tools", 0.2),
        ],
        Industry::Sales | Industry::Law | Industry::General => &[
            ("technical", 0.3),
            ("soft", 0.3),
            ("industry", 0.2),
            ("tools", 0.2),
        ],
    };
    weights
        .iter()
        .find(|(name, _)| *name == group)
        .map(|(_, w)| *w)
        .unwrap_or(0.2)
}

// ────────────────────────────────────────────────────────────────────────────
// Synonyms
// ────────────────────────────────────────────────────────────────────────────

const SYNONYMS: &[(&str, &[&str])] = &[
    (
        "javascript",
        &["js", "ecmascript", "node.js", "nodejs", "react", "angular", "vue"],
    ),
    (
        "python",
        &["py", "python3", "django", "flask", "pandas", "numpy", "scipy"],
    ),
    (
        "machine learning",
        &["ml", "ai", "artificial intelligence", "deep learning", "neural networks", "data science"],
    ),
    (
        "database",
        &["sql", "mysql", "postgresql", "mongodb", "nosql", "data management", "data storage"],
    ),
    (
        "project management",
        &["pm", "scrum master", "agile", "kanban", "coordination", "planning"],
    ),
    (
        "user experience",
        &["ux", "ui", "user interface", "usability", "human-computer interaction", "design"],
    ),
    (
        "quality assurance",
        &["qa", "testing", "automation", "selenium", "test driven development", "tdd"],
    ),
    (
        "leadership",
        &["management", "supervision", "team lead", "director", "coordination", "mentoring"],
    ),
    (
        "communication",
        &["presentation", "writing", "speaking", "interpersonal", "collaboration"],
    ),
    (
        "problem solving",
        &["troubleshooting", "debugging", "analytical", "critical thinking", "innovation"],
    ),
    (
        "customer service",
        &["support", "help desk", "client relations", "customer success", "account management"],
    ),
    (
        "data analysis",
        &["analytics", "statistics", "reporting", "business intelligence", "data visualization"],
    ),
    (
        "cloud computing",
        &["aws", "azure", "gcp", "cloud", "saas", "paas", "iaas", "serverless"],
    ),
    (
        "cybersecurity",
        &["security", "infosec", "penetration testing", "vulnerability assessment", "incident response"],
    ),
    (
        "devops",
        &["ci/cd", "continuous integration", "deployment", "infrastructure", "automation", "docker", "kubernetes"],
    ),
    (
        "mobile development",
        &["ios", "android", "react native", "flutter", "swift", "kotlin", "xamarin"],
    ),
    (
        "web development",
        &["frontend", "backend", "full stack", "html", "css", "responsive design"],
    ),
    (
        "digital marketing",
        &["seo", "sem", "social media", "content marketing", "email marketing", "ppc", "growth hacking"],
    ),
    (
        "financial analysis",
        &["financial modeling", "valuation", "risk assessment", "investment analysis", "portfolio management"],
    ),
    (
        "sales",
        &["business development", "lead generation", "account management", "revenue generation", "client acquisition"],
    ),
];

/// Alternate phrasings for a canonical term; empty for unknown terms.
pub fn synonyms_for(keyword: &str) -> &'static [&'static str] {
    let keyword = keyword.trim().to_lowercase();
    SYNONYMS
        .iter()
        .find(|(canonical, _)| *canonical == keyword)
        .map(|(_, alternates)| *alternates)
        .unwrap_or(&[])
}

// ────────────────────────────────────────────────────────────────────────────
// Level terms, placement and usage hints
// ────────────────────────────────────────────────────────────────────────────

pub fn level_terms(level: JobLevel) -> &'static [&'static str] {
    match level {
        JobLevel::Entry => &[
            "internship",
            "junior",
            "assistant",
            "trainee",
            "associate",
            "entry level",
        ],
        JobLevel::Mid => &[
            "experienced",
            "specialist",
            "analyst",
            "developer",
            "coordinator",
            "manager",
        ],
        JobLevel::Senior | JobLevel::Executive => &[
            "senior",
            "lead",
            "principal",
            "director",
            "head",
            "vp",
            "chief",
            "executive",
        ],
    }
}

/// Where a missing keyword would most naturally go.
pub fn suggest_section(keyword: &str) -> ResumeSection {
    let keyword = keyword.trim().to_lowercase();
    if is_technical_keyword(&keyword) || TECHNICAL_SKILLS.contains(&keyword.as_str()) {
        ResumeSection::Skills
    } else if is_action_verb(&keyword) || SOFT_SKILLS.contains(&keyword.as_str()) {
        ResumeSection::Experience
    } else if is_certification(&keyword) {
        ResumeSection::Certifications
    } else {
        ResumeSection::Summary
    }
}

const TECHNOLOGY_EXAMPLES: &[(&str, &str)] = &[
    ("javascript", "Developed web applications using JavaScript and modern frameworks"),
    ("python", "Implemented data analysis solutions using Python and scientific libraries"),
    ("aws", "Deployed and managed cloud infrastructure on AWS platform"),
    ("react", "Built responsive user interfaces using React.js"),
    ("sql", "Designed and optimized SQL databases for high-performance applications"),
];

const FINANCE_EXAMPLES: &[(&str, &str)] = &[
    ("financial modeling", "Created comprehensive financial models for investment analysis"),
    ("risk analysis", "Conducted thorough risk assessments for portfolio optimization"),
    ("excel", "Developed advanced Excel models for financial reporting and analysis"),
];

const MARKETING_EXAMPLES: &[(&str, &str)] = &[
    ("seo", "Optimized website content for search engines, increasing organic traffic"),
    ("google analytics", "Analyzed user behavior and conversion metrics using Google Analytics"),
    ("content marketing", "Developed content marketing strategies to drive customer engagement"),
];

/// A sample resume line showing the keyword in use.
pub fn usage_example(keyword: &str, industry: Industry) -> String {
    let examples = match industry {
        Industry::Finance => FINANCE_EXAMPLES,
        Industry::Marketing => MARKETING_EXAMPLES,
        _ => TECHNOLOGY_EXAMPLES,
    };
    let key = keyword.trim().to_lowercase();
    examples
        .iter()
        .find(|(term, _)| *term == key)
        .map(|(_, line)| line.to_string())
        .unwrap_or_else(|| format!("Utilized {keyword} in professional capacity"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_order() {
        assert_eq!(categorize_keyword("python"), KeywordCategory::Technical);
        assert_eq!(categorize_keyword("git"), KeywordCategory::Tools);
        assert_eq!(categorize_keyword("pmp"), KeywordCategory::Certification);
        assert_eq!(categorize_keyword("leadership"), KeywordCategory::Soft);
        assert_eq!(
            categorize_keyword("Quality Assurance"),
            KeywordCategory::Industry
        );
    }

    #[test]
    fn test_category_fallbacks() {
        assert_eq!(categorize_keyword("managed"), KeywordCategory::Action);
        assert_eq!(categorize_keyword("kubernetes"), KeywordCategory::Technical);
        assert_eq!(categorize_keyword("hipaa"), KeywordCategory::Industry);
        assert_eq!(categorize_keyword("weekend"), KeywordCategory::General);
    }

    #[test]
    fn test_technical_patterns() {
        assert!(is_technical_keyword("server.js"));
        assert!(is_technical_keyword("rest api design"));
        assert!(is_technical_keyword("Compiler"));
        assert!(!is_technical_keyword("javascripts"));
        assert!(!is_technical_keyword("gardening"));
    }

    #[test]
    fn test_synonym_lookup_is_case_insensitive() {
        assert!(synonyms_for("JavaScript").contains(&"js"));
        assert_eq!(synonyms_for("cobol").len(), 0);
    }

    #[test]
    fn test_synonym_table_has_twenty_terms() {
        assert_eq!(SYNONYMS.len(), 20);
    }

    #[test]
    fn test_industry_group_weight_defaults() {
        assert_eq!(industry_group_weight(Industry::Healthcare, "clinical"), 0.4);
        assert_eq!(industry_group_weight(Industry::Technology, "programming"), 0.2);
        assert_eq!(industry_group_weight(Industry::Sales, "tools"), 0.2);
    }

    #[test]
    fn test_suggest_section() {
        assert_eq!(suggest_section("python"), ResumeSection::Skills);
        assert_eq!(suggest_section("led"), ResumeSection::Experience);
        assert_eq!(suggest_section("teamwork"), ResumeSection::Experience);
        assert_eq!(suggest_section("cissp"), ResumeSection::Certifications);
        assert_eq!(suggest_section("budgeting"), ResumeSection::Summary);
    }

    #[test]
    fn test_usage_example_fallback() {
        assert_eq!(
            usage_example("aws", Industry::General),
            "Deployed and managed cloud infrastructure on AWS platform"
        );
        assert_eq!(
            usage_example("Budgeting", Industry::Finance),
            "Utilized Budgeting in professional capacity"
        );
    }
}
