use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse reading of a similarity percentage, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityBand {
    /// Below 25%.
    Low,
    /// 25% up to 50%.
    Moderate,
    /// 50% up to 75%.
    Elevated,
    /// 75% and above.
    High,
}

impl SimilarityBand {
    /// Classify a percentage in `[0, 100]`.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 75.0 {
            SimilarityBand::High
        } else if percent >= 50.0 {
            SimilarityBand::Elevated
        } else if percent >= 25.0 {
            SimilarityBand::Moderate
        } else {
            SimilarityBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityBand::Low => "low",
            SimilarityBand::Moderate => "moderate",
            SimilarityBand::Elevated => "elevated",
            SimilarityBand::High => "high",
        }
    }
}

impl fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
