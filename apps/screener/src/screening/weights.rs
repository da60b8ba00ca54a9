//! Scoring weights, recommendation cut points and the configuration bundle the
//! engine is built from. Everything here is validated once, at startup.

use serde::{Deserialize, Serialize};

use crate::screening::errors::ScreeningError;
use crate::screening::normalizer::DEFAULT_SKILL_ALIASES;
use crate::screening::similarity::DEFAULT_STOP_WORDS;
use crate::screening::types::Recommendation;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Overall score composition: skills 40%, similarity 25%, experience 20%, education 15%.
pub const DEFAULT_SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    skills: 0.40,
    similarity: 0.25,
    experience: 0.20,
    education: 0.15,
};

/// Required coverage carries 70%, preferred 30%.
pub const DEFAULT_SKILL_WEIGHTS: SkillWeights = SkillWeights {
    required: 0.70,
    preferred: 0.30,
};

pub const DEFAULT_THRESHOLDS: RecommendationThresholds = RecommendationThresholds {
    highly_recommended: 80.0,
    recommended: 65.0,
    maybe: 50.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub similarity: f64,
    pub experience: f64,
    pub education: f64,
}

impl ScoreWeights {
    fn as_array(&self) -> [f64; 4] {
        [self.skills, self.similarity, self.experience, self.education]
    }

    pub fn validate(&self) -> Result<(), ScreeningError> {
        validate_weights("score", &self.as_array())
    }

    /// Weighted average of the four component scores, clamped to [0, 100].
    pub fn combine(&self, skills: f64, similarity: f64, experience: f64, education: f64) -> f64 {
        (self.skills * skills
            + self.similarity * similarity
            + self.experience * experience
            + self.education * education)
            .clamp(0.0, 100.0)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_SCORE_WEIGHTS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillWeights {
    pub required: f64,
    pub preferred: f64,
}

impl SkillWeights {
    pub fn validate(&self) -> Result<(), ScreeningError> {
        validate_weights("skill", &[self.required, self.preferred])
    }
}

impl Default for SkillWeights {
    fn default() -> Self {
        DEFAULT_SKILL_WEIGHTS
    }
}

/// Lower bounds (inclusive) of each recommendation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub highly_recommended: f64,
    pub recommended: f64,
    pub maybe: f64,
}

impl RecommendationThresholds {
    pub fn validate(&self) -> Result<(), ScreeningError> {
        let ordered = 0.0 <= self.maybe
            && self.maybe <= self.recommended
            && self.recommended <= self.highly_recommended
            && self.highly_recommended <= 100.0;
        if ordered {
            Ok(())
        } else {
            Err(ScreeningError::InvalidConfig(format!(
                "recommendation thresholds must satisfy 0 <= maybe <= recommended <= highly_recommended <= 100, got {self:?}"
            )))
        }
    }

    pub fn classify(&self, overall_score: f64) -> Recommendation {
        if overall_score >= self.highly_recommended {
            Recommendation::HighlyRecommended
        } else if overall_score >= self.recommended {
            Recommendation::Recommended
        } else if overall_score >= self.maybe {
            Recommendation::Maybe
        } else {
            Recommendation::NotRecommended
        }
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        DEFAULT_THRESHOLDS
    }
}

/// Everything the engine needs, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub score_weights: ScoreWeights,
    pub skill_weights: SkillWeights,
    pub thresholds: RecommendationThresholds,
    pub skill_aliases: Vec<(String, String)>,
    pub stop_words: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            score_weights: DEFAULT_SCORE_WEIGHTS,
            skill_weights: DEFAULT_SKILL_WEIGHTS,
            thresholds: DEFAULT_THRESHOLDS,
            skill_aliases: DEFAULT_SKILL_ALIASES
                .iter()
                .map(|(variant, canonical)| (variant.to_string(), canonical.to_string()))
                .collect(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

fn validate_weights(name: &str, weights: &[f64]) -> Result<(), ScreeningError> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ScreeningError::InvalidConfig(format!(
            "{name} weights must be finite and non-negative, got {weights:?}"
        )));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ScreeningError::InvalidConfig(format!(
            "{name} weights must sum to 1.0, got {sum}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((DEFAULT_SCORE_WEIGHTS.as_array().iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(DEFAULT_SCORE_WEIGHTS.validate().is_ok());
        assert!(DEFAULT_SKILL_WEIGHTS.validate().is_ok());
        assert!(DEFAULT_THRESHOLDS.validate().is_ok());
    }

    #[test]
    fn test_weights_not_summing_to_one_rejected() {
        let w = ScoreWeights {
            skills: 0.5,
            similarity: 0.5,
            experience: 0.5,
            education: 0.0,
        };
        assert!(matches!(w.validate(), Err(ScreeningError::InvalidConfig(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let w = SkillWeights {
            required: 1.5,
            preferred: -0.5,
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_nan_weight_rejected() {
        let w = SkillWeights {
            required: f64::NAN,
            preferred: 1.0,
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_combine_full_marks() {
        assert!((DEFAULT_SCORE_WEIGHTS.combine(100.0, 100.0, 100.0, 100.0) - 100.0).abs() < 1e-9);
        assert_eq!(DEFAULT_SCORE_WEIGHTS.combine(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_combine_partial() {
        // 0.4*50 + 0.25*40 + 0.2*100 + 0.15*0 = 20 + 10 + 20 = 50
        let overall = DEFAULT_SCORE_WEIGHTS.combine(50.0, 40.0, 100.0, 0.0);
        assert!((overall - 50.0).abs() < 1e-9, "overall was {overall}");
    }

    #[test]
    fn test_classify_band_edges() {
        let t = DEFAULT_THRESHOLDS;
        assert_eq!(t.classify(100.0), Recommendation::HighlyRecommended);
        assert_eq!(t.classify(80.0), Recommendation::HighlyRecommended);
        assert_eq!(t.classify(79.99), Recommendation::Recommended);
        assert_eq!(t.classify(65.0), Recommendation::Recommended);
        assert_eq!(t.classify(64.99), Recommendation::Maybe);
        assert_eq!(t.classify(50.0), Recommendation::Maybe);
        assert_eq!(t.classify(49.99), Recommendation::NotRecommended);
        assert_eq!(t.classify(0.0), Recommendation::NotRecommended);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let t = DEFAULT_THRESHOLDS;
        let mut previous = t.classify(0.0);
        for step in 0..=1000 {
            let current = t.classify(step as f64 / 10.0);
            assert!(current >= previous, "rank dropped at {}", step as f64 / 10.0);
            previous = current;
        }
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let t = RecommendationThresholds {
            highly_recommended: 60.0,
            recommended: 70.0,
            maybe: 50.0,
        };
        assert!(t.validate().is_err());
    }
}
