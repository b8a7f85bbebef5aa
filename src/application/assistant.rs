//! Originality check and article summary use cases

use crate::domain::originality::SUMMARY_UNAVAILABLE;
use crate::domain::{Article, OriginalityReport};
use crate::error::{JournalError, Result};
use crate::infrastructure::TextAnalyzer;

/// Service wrapping the external analyzer with input checks and fallbacks.
///
/// Analyzer failures never escape: originality falls back to
/// [`OriginalityReport::unavailable`] and summaries to a fixed notice.
pub struct AssistantService<A: TextAnalyzer + ?Sized> {
    min_text_length: usize,
    analyzer: Box<A>,
}

impl<A: TextAnalyzer + ?Sized> AssistantService<A> {
    pub fn new(analyzer: Box<A>, min_text_length: usize) -> Self {
        AssistantService {
            min_text_length,
            analyzer,
        }
    }

    /// Check `text` for originality.
    ///
    /// The only error is [`JournalError::TextTooShort`], raised before any request.
    pub fn check_originality(&self, text: &str) -> Result<OriginalityReport> {
        let length = text.chars().count();
        if length < self.min_text_length {
            return Err(JournalError::TextTooShort {
                length,
                minimum: self.min_text_length,
            });
        }

        match self.analyzer.analyze_originality(text) {
            Ok(report) => {
                tracing::info!(score = report.score, "Originality analysis complete");
                Ok(report)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Plagiarism check failed, returning fallback report");
                Ok(OriginalityReport::unavailable())
            }
        }
    }

    pub fn summarize(&self, article: &Article) -> String {
        match self.analyzer.summarize(&article.summary_source()) {
            Ok(summary) if !summary.is_empty() => summary,
            Ok(_) => "Could not generate summary.".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, id = %article.id, "Summary failed");
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }
}
