pub mod classify;
pub mod dimension;
pub mod engine;
pub mod ratings;
pub mod weights;

pub use classify::{classify, Classification};
pub use dimension::Dimension;
pub use engine::{assess, compute_score, score, Assessment, Contribution};
pub use ratings::{ParameterSet, DEFAULT_RATING};
pub use weights::WeightTable;
