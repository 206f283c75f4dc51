//! State machine between the input form and the analysis client

use std::sync::Arc;

use crate::clients::traits::SentimentAnalyzer;
use crate::schemas::SentimentAnalysis;

/// Generic user-facing failure message (original EMOFIND wording)
pub const ANALYSIS_FAILED_MESSAGE: &str = "No se pudo analizar el sentimiento del texto";

/// Presentation status of the analysis screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Owns the screen state and drives the analyzer.
///
/// The rendering layer reads `text`/`status`/`result`/`error` and calls
/// `set_text`/`submit`; no network logic lives here. At most one of
/// `result`/`error` is set at a time.
pub struct SentimentController {
    analyzer: Arc<dyn SentimentAnalyzer>,
    text: String,
    status: AnalysisStatus,
    result: Option<SentimentAnalysis>,
    error: Option<String>,
}

impl SentimentController {
    pub fn new(analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self {
            analyzer,
            text: String::new(),
            status: AnalysisStatus::Idle,
            result: None,
            error: None,
        }
    }

    /// Replace the editable input.
    ///
    /// Prior results stay visible until the next submission.
    pub fn set_text(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    pub fn result(&self) -> Option<&SentimentAnalysis> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // Guard + transition for a new submission. Returns false when the
    // submission must not proceed: empty input, or one already in flight.
    fn begin_submit(&mut self) -> bool {
        if self.text.trim().is_empty() || self.status == AnalysisStatus::Loading {
            return false;
        }
        self.status = AnalysisStatus::Loading;
        self.result = None;
        self.error = None;
        true
    }

    /// Run one analysis over the current text.
    ///
    /// Always settles into `Success` or `Failure`; analyzer errors are
    /// logged with their kind and surfaced only as the generic message.
    pub async fn submit(&mut self) {
        if !self.begin_submit() {
            return;
        }
        match self.analyzer.analyze(&self.text).await {
            Ok(analysis) => {
                self.result = Some(analysis);
                self.status = AnalysisStatus::Success;
            }
            Err(e) => {
                tracing::warn!("Sentiment analysis failed ({}): {}", e.kind(), e);
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
                self.status = AnalysisStatus::Failure;
            }
        }
    }
}
