use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

pub const MAX_SCORE: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    /// Nothing typed yet; the indicator is hidden.
    Empty,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Empty => "",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StrengthLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Coarse bucket the host maps to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
    pub tier: StrengthTier,
}

impl StrengthResult {
    pub const EMPTY: StrengthResult = StrengthResult {
        score: 0,
        label: StrengthLabel::Empty,
        tier: StrengthTier::None,
    };

    /// Buckets a raw score: 0-2 weak, 3-4 medium, 5-6 strong.
    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        let (label, tier) = match score {
            0..=2 => (StrengthLabel::Weak, StrengthTier::Low),
            3..=4 => (StrengthLabel::Medium, StrengthTier::Medium),
            _ => (StrengthLabel::Strong, StrengthTier::High),
        };
        StrengthResult { score, label, tier }
    }

    /// False only for the empty password, where no indicator is drawn.
    pub fn is_visible(&self) -> bool {
        self.tier != StrengthTier::None
    }

    /// Width of the indicator bar, 0-100.
    pub fn percent(&self) -> f64 {
        f64::from(self.score) / f64::from(MAX_SCORE) * 100.0
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct StrengthRequest {
    #[serde(default)]
    #[validate(length(max = 1024, message = "Password must be at most 1024 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct StrengthResponse {
    #[serde(flatten)]
    pub result: StrengthResult,
    pub percent: f64,
    pub visible: bool,
}

impl From<StrengthResult> for StrengthResponse {
    fn from(result: StrengthResult) -> Self {
        StrengthResponse {
            percent: result.percent(),
            visible: result.is_visible(),
            result,
        }
    }
}
