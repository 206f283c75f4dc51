use async_trait::async_trait;

use crate::error::Result;
use crate::schemas::SentimentAnalysis;

/// Seam between the controller and whatever produces sentiment readings.
///
/// Production uses [`crate::clients::GeminiClient`]; tests substitute
/// scripted fakes.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, input_text: &str) -> Result<SentimentAnalysis>;
}
