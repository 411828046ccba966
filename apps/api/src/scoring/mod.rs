pub mod ats;
pub mod handlers;
pub mod quality;
pub mod weights;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when an analysis pass produces something it never should, such as
/// a non-finite score. Partial results are dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("analysis failed")]
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Rejects NaN or infinite scores before they reach a caller.
pub(crate) fn ensure_finite(label: &str, values: &[f64]) -> Result<(), AnalysisError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        tracing::warn!(scorer = label, ?values, "non-finite score");
        Err(AnalysisError::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_score(100.0), Grade::A);
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.99), Grade::B);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(0.0), Grade::F);
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("test", &[0.0, 100.0]).is_ok());
        assert_eq!(
            ensure_finite("test", &[1.0, f64::NAN]),
            Err(AnalysisError::Failed)
        );
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }
}
