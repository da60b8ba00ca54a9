// Screening engine: skill normalization, text similarity, skill matching,
// experience/education scoring and the orchestrating engine.
// Pure and synchronous; all I/O stays in handlers and the store.

pub mod education;
pub mod engine;
pub mod errors;
pub mod experience;
pub mod handlers;
pub mod normalizer;
pub mod similarity;
pub mod skill_matcher;
pub mod types;
pub mod weights;
