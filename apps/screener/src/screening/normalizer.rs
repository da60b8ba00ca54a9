//! Skill normalization. Folds case, whitespace and known aliases so that
//! "Node.js", " nodejs " and "NODE JS" compare equal.

use std::collections::{HashMap, HashSet};

use crate::screening::errors::ScreeningError;

/// Variant → canonical token. Keys and values are folded on load, so casing here is cosmetic.
pub const DEFAULT_SKILL_ALIASES: &[(&str, &str)] = &[
    ("node.js", "nodejs"),
    ("node js", "nodejs"),
    ("node", "nodejs"),
    ("js", "javascript"),
    ("ecmascript", "javascript"),
    ("ts", "typescript"),
    ("golang", "go"),
    ("cpp", "c++"),
    ("c plus plus", "c++"),
    ("c sharp", "c#"),
    ("csharp", "c#"),
    ("py", "python"),
    ("python3", "python"),
    ("react.js", "react"),
    ("reactjs", "react"),
    ("vue.js", "vue"),
    ("vuejs", "vue"),
    ("angularjs", "angular"),
    ("express.js", "express"),
    ("expressjs", "express"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("mongo", "mongodb"),
    ("elastic search", "elasticsearch"),
    ("k8s", "kubernetes"),
    ("amazon web services", "aws"),
    ("google cloud", "gcp"),
    ("google cloud platform", "gcp"),
    ("microsoft azure", "azure"),
    ("ci cd", "ci/cd"),
    ("cicd", "ci/cd"),
    ("ml", "machine learning"),
    ("dl", "deep learning"),
    ("natural language processing", "nlp"),
    ("sklearn", "scikit-learn"),
    ("scikit learn", "scikit-learn"),
    ("rest", "rest api"),
    ("restful api", "rest api"),
    ("restful apis", "rest api"),
    ("powerbi", "power bi"),
    ("shell scripting", "shell"),
];

/// Canonicalizes skill strings against a static alias table.
#[derive(Debug, Clone, Default)]
pub struct SkillNormalizer {
    aliases: HashMap<String, String>,
}

impl SkillNormalizer {
    /// Builds a normalizer, rejecting tables that cannot fold deterministically.
    pub fn new<'a, I>(aliases: I) -> Result<Self, ScreeningError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table: HashMap<String, String> = HashMap::new();

        for (variant, canonical) in aliases {
            let variant = fold(variant);
            let canonical = fold(canonical);
            if variant.is_empty() || canonical.is_empty() {
                return Err(ScreeningError::InvalidConfig(
                    "skill alias entries must be non-empty".to_string(),
                ));
            }
            if variant == canonical {
                continue;
            }
            if let Some(existing) = table.get(&variant) {
                if *existing != canonical {
                    return Err(ScreeningError::InvalidConfig(format!(
                        "skill alias '{variant}' maps to both '{existing}' and '{canonical}'"
                    )));
                }
            }
            table.insert(variant, canonical);
        }

        // A canonical token must be terminal, otherwise folding depends on lookup depth.
        for (variant, canonical) in &table {
            if table.contains_key(canonical) {
                return Err(ScreeningError::InvalidConfig(format!(
                    "skill alias chain: '{variant}' -> '{canonical}' -> '{}'",
                    table[canonical]
                )));
            }
        }

        Ok(Self { aliases: table })
    }

    #[cfg(test)]
    pub fn with_default_aliases() -> Result<Self, ScreeningError> {
        Self::new(DEFAULT_SKILL_ALIASES.iter().copied())
    }

    /// Trims, lowercases, collapses whitespace, then maps through the alias table.
    /// Unknown skills pass through folded.
    pub fn normalize(&self, skill: &str) -> String {
        let folded = fold(skill);
        match self.aliases.get(&folded) {
            Some(canonical) => canonical.clone(),
            None => folded,
        }
    }

    /// Normalizes a list into an ordered set, first occurrence wins. Blank entries are dropped.
    pub fn normalize_set<S: AsRef<str>>(&self, skills: &[S]) -> SkillSet {
        let mut set = SkillSet::default();
        for skill in skills {
            let token = self.normalize(skill.as_ref());
            if !token.is_empty() {
                set.insert(token);
            }
        }
        set
    }

    /// Deduplicates raw skills by normalized form, keeping the first spelling supplied.
    pub fn dedup_display<S: AsRef<str>>(&self, skills: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        skills
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| {
                let token = self.normalize(s);
                !token.is_empty() && seen.insert(token)
            })
            .map(str::to_string)
            .collect()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

fn fold(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insertion-ordered set of canonical skill tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl SkillSet {
    pub fn insert(&mut self, token: String) -> bool {
        if self.members.contains(&token) {
            return false;
        }
        self.members.insert(token.clone());
        self.order.push(token);
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}
