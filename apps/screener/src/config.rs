use anyhow::{Context, Result};

use crate::screening::weights::{ScoreWeights, DEFAULT_SCORE_WEIGHTS};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. Unset → in-memory store.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Overall score weights. Validated when the engine is built.
    pub score_weights: ScoreWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let lookup = |key: &str| std::env::var(key).ok();

        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            score_weights: score_weights_from(lookup)?,
        })
    }
}

/// Applies `SCORE_WEIGHT_*` overrides on top of the default weights.
fn score_weights_from<F>(lookup: F) -> Result<ScoreWeights>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str, default: f64| -> Result<f64> {
        match lookup(key) {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{key} must be a number, got '{raw}'")),
            None => Ok(default),
        }
    };

    Ok(ScoreWeights {
        skills: read("SCORE_WEIGHT_SKILLS", DEFAULT_SCORE_WEIGHTS.skills)?,
        similarity: read("SCORE_WEIGHT_SIMILARITY", DEFAULT_SCORE_WEIGHTS.similarity)?,
        experience: read("SCORE_WEIGHT_EXPERIENCE", DEFAULT_SCORE_WEIGHTS.experience)?,
        education: read("SCORE_WEIGHT_EDUCATION", DEFAULT_SCORE_WEIGHTS.education)?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let weights = score_weights_from(lookup_from(&[])).unwrap();
        assert_eq!(weights, DEFAULT_SCORE_WEIGHTS);
    }

    #[test]
    fn test_overrides_applied() {
        let weights = score_weights_from(lookup_from(&[
            ("SCORE_WEIGHT_SKILLS", "0.5"),
            ("SCORE_WEIGHT_SIMILARITY", " 0.1 "),
        ]))
        .unwrap();
        assert_eq!(weights.skills, 0.5);
        assert_eq!(weights.similarity, 0.1);
        assert_eq!(weights.education, DEFAULT_SCORE_WEIGHTS.education);
    }

    #[test]
    fn test_unparseable_override_fails() {
        let err = score_weights_from(lookup_from(&[("SCORE_WEIGHT_SKILLS", "lots")])).unwrap_err();
        assert!(err.to_string().contains("SCORE_WEIGHT_SKILLS"));
    }
}
