use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target industry for relevance weighting and benchmarks. Unknown names
/// deserialize to `General`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Marketing,
    Sales,
    Law,
    #[default]
    #[serde(other)]
    General,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Marketing => "marketing",
            Industry::Sales => "sales",
            Industry::Law => "law",
            Industry::General => "general",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technology" | "tech" => Ok(Industry::Technology),
            "finance" => Ok(Industry::Finance),
            "healthcare" => Ok(Industry::Healthcare),
            "marketing" => Ok(Industry::Marketing),
            "sales" => Ok(Industry::Sales),
            "law" | "legal" => Ok(Industry::Law),
            "general" | "default" => Ok(Industry::General),
            other => Err(format!("unknown industry '{other}'")),
        }
    }
}

/// Seniority of the target role. Unknown values fall back to `Mid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobLevel {
    Entry,
    Senior,
    Executive,
    #[default]
    #[serde(other)]
    Mid,
}

impl JobLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobLevel::Entry => "entry",
            JobLevel::Mid => "mid",
            JobLevel::Senior => "senior",
            JobLevel::Executive => "executive",
        }
    }
}
