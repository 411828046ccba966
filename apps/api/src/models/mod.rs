pub mod industry;
pub mod keyword;
pub mod resume;

pub use industry::{Industry, JobLevel};
pub use keyword::{Keyword, KeywordCategory, KeywordMatch, MatchType, MissingKeyword};
pub use resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, ResumeSection,
    SkillGroup,
};
