//! Screening engine. Combines skill coverage, text similarity, experience and
//! education into an overall score, a recommendation and a gap report.
//!
//! The engine is immutable after construction and holds no per-call state, so a
//! single instance is shared across request handlers as `Arc<dyn Screener>`.

use chrono::Utc;
use tracing::debug;

use crate::screening::education::{education_score, education_shortfall};
use crate::screening::errors::ScreeningError;
use crate::screening::experience::{experience_score, experience_shortfall};
use crate::screening::normalizer::SkillNormalizer;
use crate::screening::similarity::TextSimilarity;
use crate::screening::skill_matcher::{SkillMatch, SkillMatcher};
use crate::screening::types::{JobDescription, Resume, ScoreCard, Screening};
use crate::screening::weights::{
    RecommendationThresholds, ScoreWeights, ScoringConfig, SkillWeights,
};

/// Implement this to swap scoring backends without touching handlers.
pub trait Screener: Send + Sync {
    fn screen(&self, resume: &Resume, job: &JobDescription) -> Result<Screening, ScreeningError>;
}

#[derive(Debug, Clone)]
pub struct ScreeningEngine {
    normalizer: SkillNormalizer,
    similarity: TextSimilarity,
    score_weights: ScoreWeights,
    skill_weights: SkillWeights,
    thresholds: RecommendationThresholds,
}

impl ScreeningEngine {
    /// Validates the configuration and builds the lookup tables.
    pub fn new(config: &ScoringConfig) -> Result<Self, ScreeningError> {
        config.score_weights.validate()?;
        config.skill_weights.validate()?;
        config.thresholds.validate()?;

        let normalizer = SkillNormalizer::new(
            config
                .skill_aliases
                .iter()
                .map(|(variant, canonical)| (variant.as_str(), canonical.as_str())),
        )?;
        let similarity = TextSimilarity::new(config.stop_words.iter().map(String::as_str))?;

        Ok(Self {
            normalizer,
            similarity,
            score_weights: config.score_weights,
            skill_weights: config.skill_weights,
            thresholds: config.thresholds,
        })
    }

    pub fn normalizer(&self) -> &SkillNormalizer {
        &self.normalizer
    }

    /// Computes every score field. Pure: identical inputs give identical output.
    pub fn score(&self, resume: &Resume, job: &JobDescription) -> Result<ScoreCard, ScreeningError> {
        validate_years("resume.experience_years", resume.experience_years)?;
        validate_years("job.min_experience", job.min_experience)?;

        let skills = SkillMatcher::new(&self.normalizer, self.skill_weights).match_skills(
            &resume.skills_found,
            &job.required_skills,
            &job.preferred_skills,
        );
        let text_similarity_score = self
            .similarity
            .similarity(&resume.raw_text, &job.description)
            .clamp(0.0, 100.0);
        let experience_score = experience_score(resume.experience_years, job.min_experience);
        let education_score = education_score(resume.education_level, job.education_required);

        let overall_score = self.score_weights.combine(
            skills.skill_match_score,
            text_similarity_score,
            experience_score,
            education_score,
        );
        let recommendation = self.thresholds.classify(overall_score);
        let notes = build_notes(&skills, resume, job);

        Ok(ScoreCard {
            skill_match_score: skills.skill_match_score,
            text_similarity_score,
            experience_score,
            education_score,
            overall_score,
            recommendation,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            skill_gap_analysis: skills.gap,
            notes,
        })
    }
}

impl Screener for ScreeningEngine {
    fn screen(&self, resume: &Resume, job: &JobDescription) -> Result<Screening, ScreeningError> {
        let scores = self.score(resume, job)?;

        debug!(
            resume_id = %resume.id,
            job_id = %job.id,
            overall = scores.overall_score,
            skills = scores.skill_match_score,
            similarity = scores.text_similarity_score,
            experience = scores.experience_score,
            education = scores.education_score,
            recommendation = %scores.recommendation,
            "Screening computed"
        );

        Ok(Screening {
            resume_id: resume.id,
            job_id: job.id,
            scores,
            screened_at: Utc::now(),
        })
    }
}

fn validate_years(field: &str, years: f64) -> Result<(), ScreeningError> {
    if years.is_finite() && years >= 0.0 {
        Ok(())
    } else {
        Err(ScreeningError::MalformedInput(format!(
            "{field} must be a non-negative number, got {years}"
        )))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Notes
// ────────────────────────────────────────────────────────────────────────────

/// Short deterministic summary: skill gaps, then experience, then education.
fn build_notes(skills: &SkillMatch, resume: &Resume, job: &JobDescription) -> String {
    let mut notes = Vec::with_capacity(4);

    notes.push(describe_subset(
        "required",
        &skills.gap.required_matched,
        &skills.gap.required_missing,
    ));
    let preferred_total = skills.gap.preferred_matched.len() + skills.gap.preferred_missing.len();
    if preferred_total > 0 {
        notes.push(describe_subset(
            "preferred",
            &skills.gap.preferred_matched,
            &skills.gap.preferred_missing,
        ));
    }

    notes.push(
        match experience_shortfall(resume.experience_years, job.min_experience) {
            Some(gap) => format!(
                "Experience shortfall: {} years below the {}-year minimum",
                fmt_years(gap),
                fmt_years(job.min_experience)
            ),
            None if job.min_experience > 0.0 => format!(
                "Meets experience requirement ({} of {} years)",
                fmt_years(resume.experience_years),
                fmt_years(job.min_experience)
            ),
            None => "No minimum experience required".to_string(),
        },
    );

    notes.push(match (resume.education_level, job.education_required) {
        (candidate, required) if !education_shortfall(candidate, required) => match required {
            Some(level) => format!("Meets education requirement ({})", level.label()),
            None => "No education requirement".to_string(),
        },
        (None, Some(required)) => format!(
            "Education not specified ({} required)",
            required.label()
        ),
        (Some(candidate), Some(required)) => format!(
            "Education below requirement: {} vs {} required",
            candidate.label(),
            required.label()
        ),
        (_, None) => "No education requirement".to_string(),
    });

    notes.join(" | ")
}

fn describe_subset(kind: &str, matched: &[String], missing: &[String]) -> String {
    let total = matched.len() + missing.len();
    if total == 0 {
        format!("No {kind} skills listed")
    } else if missing.is_empty() {
        format!("All {total} {kind} skills matched")
    } else {
        format!(
            "Missing {} of {total} {kind} skills: {}",
            missing.len(),
            missing.join(", ")
        )
    }
}

/// Up to two decimals, trailing zeros dropped. A positive amount that rounds
/// to zero reads "less than 0.01".
fn fmt_years(years: f64) -> String {
    let fixed = format!("{years:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "0" && years > 0.0 {
        "less than 0.01".to_string()
    } else {
        trimmed.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::types::{EducationLevel, Recommendation};
    use uuid::Uuid;

    fn engine() -> ScreeningEngine {
        ScreeningEngine::new(&ScoringConfig::default()).unwrap()
    }

    fn make_resume(
        skills: &[&str],
        years: f64,
        education: Option<EducationLevel>,
        text: &str,
    ) -> Resume {
        Resume {
            id: Uuid::new_v4(),
            candidate_name: Some("Ada Example".to_string()),
            candidate_email: Some("ada@example.com".to_string()),
            candidate_phone: None,
            experience_years: years,
            education_level: education,
            skills_found: skills.iter().map(|s| s.to_string()).collect(),
            raw_text: text.to_string(),
        }
    }

    fn make_job(
        required: &[&str],
        preferred: &[&str],
        min_years: f64,
        education: Option<EducationLevel>,
        description: &str,
    ) -> JobDescription {
        JobDescription {
            id: Uuid::new_v4(),
            title: "Data Engineer".to_string(),
            description: description.to_string(),
            min_experience: min_years,
            education_required: education,
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn example_pair() -> (Resume, JobDescription) {
        (
            make_resume(
                &["python", "sql"],
                3.0,
                Some(EducationLevel::Bachelor),
                "Built data pipelines in Python and SQL",
            ),
            make_job(
                &["python", "aws"],
                &["sql"],
                2.0,
                Some(EducationLevel::Bachelor),
                "Seeking Python and AWS engineer",
            ),
        )
    }

    #[test]
    fn test_end_to_end_example() {
        let (resume, job) = example_pair();
        let screening = engine().screen(&resume, &job).unwrap();
        let s = &screening.scores;

        assert_eq!(screening.resume_id, resume.id);
        assert_eq!(screening.job_id, job.id);
        assert_eq!(s.skill_gap_analysis.required_matched, vec!["python"]);
        assert_eq!(s.skill_gap_analysis.required_missing, vec!["aws"]);
        assert_eq!(s.skill_gap_analysis.preferred_matched, vec!["sql"]);
        assert!(s.skill_gap_analysis.preferred_missing.is_empty());
        assert_eq!(s.experience_score, 100.0);
        assert_eq!(s.education_score, 100.0);
        assert!((s.skill_match_score - 65.0).abs() < 1e-9);

        // resume {built, data, pipelines, python, sql} vs job {seeking, python, aws, engineer}
        let similarity = 100.0 / 20f64.sqrt();
        assert!((s.text_similarity_score - similarity).abs() < 1e-9);

        let expected = 0.40 * 65.0 + 0.25 * similarity + 0.20 * 100.0 + 0.15 * 100.0;
        assert!((s.overall_score - expected).abs() < 1e-9, "overall {}", s.overall_score);
        assert_eq!(s.recommendation, Recommendation::Recommended);
    }

    #[test]
    fn test_end_to_end_notes() {
        let (resume, job) = example_pair();
        let card = engine().score(&resume, &job).unwrap();
        assert_eq!(
            card.notes,
            "Missing 1 of 2 required skills: aws | All 1 preferred skills matched | \
             Meets experience requirement (3 of 2 years) | \
             Meets education requirement (bachelor's degree)"
        );
    }

    #[test]
    fn test_rescreening_is_idempotent() {
        let (resume, job) = example_pair();
        let e = engine();
        let first = e.screen(&resume, &job).unwrap();
        let second = e.screen(&resume, &job).unwrap();
        assert_eq!(first.scores, second.scores);
    }

    #[test]
    fn test_perfect_candidate_is_highly_recommended() {
        let text = "Rust engineer building Tokio services on Kubernetes";
        let resume = make_resume(&["rust", "tokio", "k8s"], 8.0, Some(EducationLevel::Master), text);
        let job = make_job(&["Rust", "Tokio"], &["Kubernetes"], 5.0, Some(EducationLevel::Bachelor), text);

        let card = engine().score(&resume, &job).unwrap();
        assert!((card.overall_score - 100.0).abs() < 1e-9);
        assert_eq!(card.recommendation, Recommendation::HighlyRecommended);
        assert!(card.missing_skills.is_empty());
    }

    #[test]
    fn test_weak_candidate_is_not_recommended() {
        let resume = make_resume(&["excel"], 0.0, None, "Retail cashier");
        let job = make_job(
            &["rust", "go"],
            &["kafka"],
            10.0,
            Some(EducationLevel::Master),
            "Distributed systems engineer",
        );

        let card = engine().score(&resume, &job).unwrap();
        assert_eq!(card.skill_match_score, 0.0);
        assert_eq!(card.experience_score, 0.0);
        assert_eq!(card.education_score, 0.0);
        assert_eq!(card.recommendation, Recommendation::NotRecommended);
        assert!(card.notes.contains("Missing 2 of 2 required skills: rust, go"));
        assert!(card.notes.contains("Missing 1 of 1 preferred skills: kafka"));
        assert!(card.notes.contains("Experience shortfall: 10 years below the 10-year minimum"));
        assert!(card.notes.contains("Education not specified (master's degree required)"));
    }

    #[test]
    fn test_education_shortfall_note() {
        let resume = make_resume(&[], 1.5, Some(EducationLevel::HighSchool), "");
        let job = make_job(&[], &[], 3.0, Some(EducationLevel::Bachelor), "");
        let card = engine().score(&resume, &job).unwrap();
        assert!(card
            .notes
            .contains("Education below requirement: high school vs bachelor's degree required"));
        assert!(card.notes.contains("Experience shortfall: 1.5 years below the 3-year minimum"));
        assert!(card.notes.starts_with("No required skills listed"));
    }

    #[test]
    fn test_no_requirements_note() {
        let resume = make_resume(&["rust"], 0.0, None, "rust");
        let job = make_job(&[], &[], 0.0, None, "rust");
        let card = engine().score(&resume, &job).unwrap();
        assert_eq!(
            card.notes,
            "No required skills listed | No minimum experience required | No education requirement"
        );
        assert_eq!(card.skill_match_score, 100.0);
    }

    #[test]
    fn test_negative_experience_is_malformed() {
        let (mut resume, job) = example_pair();
        resume.experience_years = -1.0;
        let err = engine().score(&resume, &job).unwrap_err();
        assert!(matches!(err, ScreeningError::MalformedInput(_)));
    }

    #[test]
    fn test_nan_min_experience_is_malformed() {
        let (resume, mut job) = example_pair();
        job.min_experience = f64::NAN;
        assert!(matches!(
            engine().screen(&resume, &job),
            Err(ScreeningError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_scores_bounded_across_inputs() {
        let e = engine();
        let levels = [None, Some(EducationLevel::HighSchool), Some(EducationLevel::Doctorate)];
        for years in [0.0, 1.0, 4.0, 25.0] {
            for min_years in [0.0, 2.0, 10.0] {
                for candidate in levels {
                    for required in levels {
                        let resume =
                            make_resume(&["python", "Go"], years, candidate, "python go services");
                        let job = make_job(&["go"], &["rust", "python"], min_years, required, "go rust");
                        let card = e.score(&resume, &job).unwrap();
                        for score in [
                            card.skill_match_score,
                            card.text_similarity_score,
                            card.experience_score,
                            card.education_score,
                            card.overall_score,
                        ] {
                            assert!((0.0..=100.0).contains(&score), "out of range: {score}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = ScoringConfig {
            score_weights: ScoreWeights {
                skills: 0.9,
                similarity: 0.9,
                experience: 0.0,
                education: 0.0,
            },
            ..ScoringConfig::default()
        };
        assert!(matches!(
            ScreeningEngine::new(&config),
            Err(ScreeningError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_minimal_tables_are_substitutable() {
        let config = ScoringConfig {
            skill_aliases: vec![],
            stop_words: vec![],
            ..ScoringConfig::default()
        };
        let e = ScreeningEngine::new(&config).unwrap();
        assert_eq!(e.normalizer().normalize("Node.js"), "node.js");
        let resume = make_resume(&[], 0.0, None, "the");
        let job = make_job(&[], &[], 0.0, None, "the");
        assert_eq!(e.score(&resume, &job).unwrap().text_similarity_score, 100.0);
    }

    #[test]
    fn test_fmt_years() {
        assert_eq!(fmt_years(3.0), "3");
        assert_eq!(fmt_years(10.0), "10");
        assert_eq!(fmt_years(0.0), "0");
        assert_eq!(fmt_years(2.5), "2.5");
        assert_eq!(fmt_years(2.25), "2.25");
        assert_eq!(fmt_years(0.004), "less than 0.01");
    }

    #[test]
    fn test_tiny_experience_shortfall_note() {
        let resume = make_resume(&[], 2.96, None, "");
        let job = make_job(&[], &[], 3.0, None, "");
        let card = engine().score(&resume, &job).unwrap();
        assert!(
            card.notes.contains("Experience shortfall: 0.04 years below the 3-year minimum"),
            "notes were {}",
            card.notes
        );

        let resume = make_resume(&[], 2.999, None, "");
        let card = engine().score(&resume, &job).unwrap();
        assert!(card
            .notes
            .contains("Experience shortfall: less than 0.01 years below the 3-year minimum"));
    }

    #[test]
    fn test_none_education_requirement_notes() {
        let job = make_job(&[], &[], 0.0, Some(EducationLevel::None), "");

        let unspecified = make_resume(&[], 0.0, None, "");
        let card = engine().score(&unspecified, &job).unwrap();
        assert_eq!(card.education_score, 0.0);
        assert!(card
            .notes
            .contains("Education not specified (no formal education required)"));

        let stated = make_resume(&[], 0.0, Some(EducationLevel::HighSchool), "");
        let card = engine().score(&stated, &job).unwrap();
        assert_eq!(card.education_score, 100.0);
        assert!(card
            .notes
            .contains("Meets education requirement (no formal education)"));
    }
}
