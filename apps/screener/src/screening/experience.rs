/// Scores candidate years against a minimum.
///
/// No requirement scores 100; meeting it scores 100 with no over-credit; below it
/// the score is proportional. Negative inputs are treated as zero.
pub fn experience_score(candidate_years: f64, min_years: f64) -> f64 {
    let candidate_years = candidate_years.max(0.0);
    if min_years <= 0.0 || candidate_years >= min_years {
        return 100.0;
    }
    (100.0 * candidate_years / min_years).clamp(0.0, 100.0)
}

/// Years short of the minimum, or `None` when the requirement is met.
pub fn experience_shortfall(candidate_years: f64, min_years: f64) -> Option<f64> {
    let gap = min_years - candidate_years.max(0.0);
    (min_years > 0.0 && gap > 0.0).then_some(gap)
}
