//! Validation and scoring rules.
//!
//! - `WordValidator`: starts rounds, checks submissions, applies penalties
//! - `SubmissionResult`: what happened to one submission
//! - `is_possible` / `sentiment_analysis`: the pure rules underneath

mod outcome;
mod validator;

pub use outcome::{Alert, SubmissionResult};
pub use validator::{is_possible, normalize, sentiment_analysis, WordValidator};
