use crate::screening::types::EducationLevel;

/// Scores a candidate's education against a requirement on the ranked scale.
///
/// An unspecified requirement cannot be failed. An unspecified candidate level
/// against any stated requirement, `None` included, scores 0.
/// Below the requirement the score is `100 * candidate_rank / required_rank`.
pub fn education_score(
    candidate: Option<EducationLevel>,
    required: Option<EducationLevel>,
) -> f64 {
    let required = match required {
        None => return 100.0,
        Some(level) => level,
    };
    let Some(candidate) = candidate else {
        return 0.0;
    };
    if candidate >= required {
        return 100.0;
    }
    (100.0 * f64::from(candidate.rank()) / f64::from(required.rank())).clamp(0.0, 100.0)
}

/// True when the candidate falls short of a real requirement.
pub fn education_shortfall(
    candidate: Option<EducationLevel>,
    required: Option<EducationLevel>,
) -> bool {
    education_score(candidate, required) < 100.0
}
