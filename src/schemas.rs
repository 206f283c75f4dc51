//! Shared data structures for the analysis surface

use serde::{Deserialize, Serialize};

/// Structured sentiment reading produced from the model's reply.
///
/// All three fields are required and non-empty; parsing never constructs a
/// partial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub emotion: String,
    pub diagnosis: String,
    pub recommendation: String,
}
