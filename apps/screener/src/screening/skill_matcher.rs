//! Skill reconciliation. Partitions a job's required and preferred skills into
//! matched and missing against the candidate's skills and scores the coverage.

use serde::{Deserialize, Serialize};

use crate::screening::normalizer::{SkillNormalizer, SkillSet};
use crate::screening::types::SkillGapAnalysis;
use crate::screening::weights::SkillWeights;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub gap: SkillGapAnalysis,
    /// Fraction of required skills present, 1.0 when none are required.
    pub required_coverage: f64,
    /// Fraction of preferred skills present, 1.0 when none are preferred.
    pub preferred_coverage: f64,
    pub skill_match_score: f64,
}

pub struct SkillMatcher<'a> {
    normalizer: &'a SkillNormalizer,
    weights: SkillWeights,
}

impl<'a> SkillMatcher<'a> {
    pub fn new(normalizer: &'a SkillNormalizer, weights: SkillWeights) -> Self {
        Self {
            normalizer,
            weights,
        }
    }

    pub fn match_skills<S: AsRef<str>>(
        &self,
        resume_skills: &[S],
        required: &[S],
        preferred: &[S],
    ) -> SkillMatch {
        let candidate = self.normalizer.normalize_set(resume_skills);
        let required = self.normalizer.normalize_set(required);
        let preferred = self.normalizer.normalize_set(preferred);

        let (required_matched, required_missing) = partition(&required, &candidate);
        let (preferred_matched, preferred_missing) = partition(&preferred, &candidate);

        let required_coverage = coverage(required_matched.len(), &required);
        let preferred_coverage = coverage(preferred_matched.len(), &preferred);
        let skill_match_score = (100.0
            * (self.weights.required * required_coverage
                + self.weights.preferred * preferred_coverage))
            .clamp(0.0, 100.0);

        // A skill listed as both required and preferred is reported once.
        let mut matched = SkillSet::default();
        let mut missing = SkillSet::default();
        for token in required_matched.iter().chain(&preferred_matched) {
            matched.insert(token.clone());
        }
        for token in required_missing.iter().chain(&preferred_missing) {
            missing.insert(token.clone());
        }

        SkillMatch {
            matched: matched.into_vec(),
            missing: missing.into_vec(),
            gap: SkillGapAnalysis {
                required_matched,
                required_missing,
                preferred_matched,
                preferred_missing,
            },
            required_coverage,
            preferred_coverage,
            skill_match_score,
        }
    }
}

fn partition(wanted: &SkillSet, candidate: &SkillSet) -> (Vec<String>, Vec<String>) {
    wanted
        .iter()
        .cloned()
        .partition(|token| candidate.contains(token))
}

fn coverage(matched: usize, wanted: &SkillSet) -> f64 {
    if wanted.is_empty() {
        1.0
    } else {
        matched as f64 / wanted.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn run(resume: &[&str], required: &[&str], preferred: &[&str]) -> SkillMatch {
        let normalizer = SkillNormalizer::with_default_aliases().unwrap();
        SkillMatcher::new(&normalizer, SkillWeights::default())
            .match_skills(resume, required, preferred)
    }

    #[test]
    fn test_partitions_required_and_preferred() {
        let m = run(&["python", "sql"], &["python", "aws"], &["sql"]);
        assert_eq!(m.gap.required_matched, vec!["python"]);
        assert_eq!(m.gap.required_missing, vec!["aws"]);
        assert_eq!(m.gap.preferred_matched, vec!["sql"]);
        assert!(m.gap.preferred_missing.is_empty());
        assert_eq!(m.matched, vec!["python", "sql"]);
        assert_eq!(m.missing, vec!["aws"]);
    }

    #[test]
    fn test_weighted_score_required_70_preferred_30() {
        // 0.7 * 0.5 + 0.3 * 1.0 = 0.65
        let m = run(&["python", "sql"], &["python", "aws"], &["sql"]);
        assert!((m.skill_match_score - 65.0).abs() < 1e-9, "score {}", m.skill_match_score);
    }

    #[test]
    fn test_no_job_skills_scores_100() {
        let m = run(&["python"], &[], &[]);
        assert_eq!(m.skill_match_score, 100.0);
        assert!(m.matched.is_empty());
        assert!(m.missing.is_empty());
    }

    #[test]
    fn test_empty_preferred_is_vacuously_satisfied() {
        let m = run(&["rust"], &["rust"], &[]);
        assert_eq!(m.preferred_coverage, 1.0);
        assert_eq!(m.skill_match_score, 100.0);
    }

    #[test]
    fn test_empty_required_is_vacuously_satisfied() {
        // 0.7 * 1.0 + 0.3 * 0.0
        let m = run(&[], &[], &["docker"]);
        assert!((m.skill_match_score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_candidate_skills_scores_zero() {
        let m = run(&[], &["rust"], &["go"]);
        assert_eq!(m.skill_match_score, 0.0);
        assert_eq!(m.missing, vec!["rust", "go"]);
    }

    #[test]
    fn test_aliases_and_case_variants_match() {
        let m = run(&["Node.js", "K8S"], &["nodejs", "Kubernetes"], &[]);
        assert_eq!(m.gap.required_matched, vec!["nodejs", "kubernetes"]);
        assert_eq!(m.skill_match_score, 100.0);
    }

    #[test]
    fn test_duplicate_job_skills_collapse() {
        let m = run(&["python"], &["Python", "python", "PYTHON"], &[]);
        assert_eq!(m.gap.required_matched, vec!["python"]);
        assert_eq!(m.required_coverage, 1.0);
    }

    #[test]
    fn test_skill_in_both_subsets_reported_once() {
        let m = run(&[], &["aws"], &["aws", "gcp"]);
        assert_eq!(m.missing, vec!["aws", "gcp"]);
        assert_eq!(m.gap.required_missing, vec!["aws"]);
        assert_eq!(m.gap.preferred_missing, vec!["aws", "gcp"]);
    }

    #[test]
    fn test_matched_and_missing_cover_job_skills_exactly() {
        let required = ["python", "aws", "Docker", "sql"];
        let preferred = ["react", "aws", "GraphQL"];
        let m = run(&["SQL", "react", "rust"], &required, &preferred);

        let matched: HashSet<_> = m.matched.iter().collect();
        let missing: HashSet<_> = m.missing.iter().collect();
        assert!(matched.is_disjoint(&missing));
        assert_eq!(matched.len(), m.matched.len());
        assert_eq!(missing.len(), m.missing.len());

        let union: HashSet<String> = m.matched.iter().chain(&m.missing).cloned().collect();
        let expected: HashSet<String> = required
            .iter()
            .chain(&preferred)
            .map(|s| s.to_lowercase())
            .collect();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_score_bounded_under_any_weights() {
        let normalizer = SkillNormalizer::default();
        let weights = SkillWeights {
            required: 1.0,
            preferred: 0.0,
        };
        let m = SkillMatcher::new(&normalizer, weights).match_skills(&["a"], &["a"], &["b"]);
        assert!((0.0..=100.0).contains(&m.skill_match_score));
    }
}
