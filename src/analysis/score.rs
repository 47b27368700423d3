//! SEO health score.

use crate::config::{
    MAX_SEO_SCORE, SCORE_FAIR_THRESHOLD, SCORE_GOOD_THRESHOLD, SCORE_PENALTY_PER_ISSUE,
};
use crate::models::Analysis;

/// Derives a 0-100 score: 100 minus 5 points per counted issue, floored at 0.
///
/// Uses the `seo_issues` counters, not the `issues` text lines, which repeat
/// length findings.
pub fn seo_score(analysis: &Analysis) -> u32 {
    let total = u32::try_from(analysis.seo_issues.total()).unwrap_or(u32::MAX);
    MAX_SEO_SCORE.saturating_sub(total.saturating_mul(SCORE_PENALTY_PER_ISSUE))
}

/// Colour band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    Good,
    Fair,
    Poor,
}

impl ScoreGrade {
    pub fn from_score(score: u32) -> Self {
        if score >= SCORE_GOOD_THRESHOLD {
            ScoreGrade::Good
        } else if score >= SCORE_FAIR_THRESHOLD {
            ScoreGrade::Fair
        } else {
            ScoreGrade::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreGrade::Good => "good",
            ScoreGrade::Fair => "fair",
            ScoreGrade::Poor => "poor",
        }
    }
}
