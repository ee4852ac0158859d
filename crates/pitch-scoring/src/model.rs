use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound of every dimension score.
pub const MIN_SCORE: f64 = 0.0;
/// Upper bound of every dimension score.
pub const MAX_SCORE: f64 = 10.0;

/// The five pitch dimensions, each conceptually bounded to [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    /// Market size and opportunity.
    pub market: f64,
    /// Business model quality.
    pub business: f64,
    /// Founding team strength.
    pub team: f64,
    /// Users, revenue or growth evidence.
    pub traction: f64,
    /// Perceived risk; counts against the overall score.
    pub risk: f64,
}

impl ScoreVector {
    pub fn new(market: f64, business: f64, team: f64, traction: f64, risk: f64) -> Self {
        Self {
            market,
            business,
            team,
            traction,
            risk,
        }
    }

    /// Same value in every field.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value, value)
    }

    /// Field names paired with their values, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("market", self.market),
            ("business", self.business),
            ("team", self.team),
            ("traction", self.traction),
            ("risk", self.risk),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }

    /// First field lying outside [0, 10], if any.
    pub fn out_of_range_field(&self) -> Option<(&'static str, f64)> {
        self.fields()
            .into_iter()
            .find(|(_, v)| !(MIN_SCORE..=MAX_SCORE).contains(v))
    }

    /// Clamp every field into [0, 10].
    pub fn clamped(&self) -> Self {
        Self::new(
            clamp(self.market),
            clamp(self.business),
            clamp(self.team),
            clamp(self.traction),
            clamp(self.risk),
        )
    }
}

/// Categorical investment recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Avoid,
    Consider,
    Invest,
    #[serde(rename = "Strong Invest")]
    StrongInvest,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avoid => "Avoid",
            Self::Consider => "Consider",
            Self::Invest => "Invest",
            Self::StrongInvest => "Strong Invest",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one `ScoreVector`. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted overall score, rounded to 2 decimals. Not clamped.
    pub overall_score: f64,
    pub recommendation: Recommendation,
    /// The input vector, unchanged.
    pub breakdown: ScoreVector,
}

/// Round the exact stored value to 2 decimal places; exact ties go to even.
///
/// 3.275 is stored as 3.27499.. and rounds to 3.27. Do not scale by 100 first:
/// `3.275 * 100.0` is exactly 327.5.
pub fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

pub(crate) fn clamp(v: f64) -> f64 {
    MIN_SCORE.max(MAX_SCORE.min(v))
}
