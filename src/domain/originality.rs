//! Originality reports returned by the text analysis service
//!
//! The remote model is asked for JSON, but nothing guarantees it complies.
//! [`OriginalityReport::from_model_output`] validates every field before the
//! report is used; callers fall back to [`OriginalityReport::unavailable`]
//! when validation fails.

use crate::error::{JournalError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Characters of input forwarded in an originality prompt
pub const ORIGINALITY_INPUT_LIMIT: usize = 15_000;

/// Characters of input forwarded in a summary prompt
pub const SUMMARY_INPUT_LIMIT: usize = 10_000;

/// Analysis text of the fallback report
pub const FALLBACK_ANALYSIS: &str = "Error performing analysis. Please try again.";

/// Text returned when a summary cannot be produced
pub const SUMMARY_UNAVAILABLE: &str = "AI Summary unavailable.";

/// A passage the analysis service singled out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedSection {
    pub text: String,
    pub reason: String,
}

/// Result of an originality analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalityReport {
    /// 0-100, higher is more original
    pub score: f64,
    /// 0-100, estimated overlap with generic or generated content
    pub similarity_percentage: f64,
    pub analysis: String,
    pub flagged_sections: Vec<FlaggedSection>,
    #[serde(skip)]
    fallback: bool,
}

/// Outcome shown to the author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    ReviewNeeded,
    Unavailable,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "Passed"),
            Verdict::ReviewNeeded => write!(f, "Review Needed"),
            Verdict::Unavailable => write!(f, "Unavailable"),
        }
    }
}

/// Coarse score band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Moderate,
    Low,
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreBand::High => write!(f, "High"),
            ScoreBand::Moderate => write!(f, "Moderate"),
            ScoreBand::Low => write!(f, "Low"),
        }
    }
}

impl OriginalityReport {
    pub fn new(
        score: f64,
        similarity_percentage: f64,
        analysis: impl Into<String>,
        flagged_sections: Vec<FlaggedSection>,
    ) -> Self {
        OriginalityReport {
            score,
            similarity_percentage,
            analysis: analysis.into(),
            flagged_sections,
            fallback: false,
        }
    }

    /// Zero-score report standing in for "analysis unavailable".
    /// It is not an originality judgment.
    pub fn unavailable() -> Self {
        OriginalityReport {
            score: 0.0,
            similarity_percentage: 0.0,
            analysis: FALLBACK_ANALYSIS.to_string(),
            flagged_sections: Vec::new(),
            fallback: true,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Parse and validate the raw text a model returned.
    ///
    /// Accepts an optional Markdown code fence around the JSON object. Every
    /// field is required; numbers must be finite and within 0..=100.
    pub fn from_model_output(raw: &str) -> Result<Self> {
        let body = strip_code_fence(raw);
        if body.is_empty() {
            return Err(JournalError::Analysis("Empty response from AI".to_string()));
        }

        let report: OriginalityReport = serde_json::from_str(body)?;
        report.validate()?;
        Ok(report)
    }

    fn validate(&self) -> Result<()> {
        check_percentage("score", self.score)?;
        check_percentage("similarityPercentage", self.similarity_percentage)?;
        Ok(())
    }

    pub fn verdict(&self) -> Verdict {
        if self.fallback {
            Verdict::Unavailable
        } else if self.score > 80.0 {
            Verdict::Passed
        } else {
            Verdict::ReviewNeeded
        }
    }

    pub fn band(&self) -> ScoreBand {
        if self.score > 80.0 {
            ScoreBand::High
        } else if self.score > 50.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }
}

fn check_percentage(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(JournalError::Analysis(format!(
            "Field '{}' out of range: {}",
            field, value
        )))
    }
}

fn fence_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)^```[a-zA-Z]*\s*(.*?)\s*```$").unwrap())
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match fence_regex().captures(trimmed) {
        Some(captures) => captures.get(1).map_or(trimmed, |m| m.as_str()),
        None => trimmed,
    }
}

/// First `limit` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Prompt asking the model for an intrinsic originality analysis as JSON.
pub fn originality_prompt(text: &str) -> String {
    format!(
        r#"Act as an academic plagiarism and originality detection system.
Analyze the following academic text excerpt for:
1. Potential AI generation.
2. Lack of originality or generic phrasing.
3. Coherence and academic tone.

You cannot search a live database of published papers, so focus on intrinsic analysis:
detect patterns typical of unoriginal or synthetic writing.

Text to Analyze:
"{}"

Return a JSON response strictly following this schema:
{{
  "score": number (0-100, where 100 is high quality/original),
  "similarityPercentage": number (0-100, estimated overlap with generic/AI content),
  "analysis": string (summary of findings),
  "flaggedSections": array of objects {{ "text": string, "reason": string }}
}}"#,
        truncate_chars(text, ORIGINALITY_INPUT_LIMIT)
    )
}

/// Prompt asking for a short academic summary.
pub fn summary_prompt(text: &str) -> String {
    format!(
        "Provide a concise, academic summary (max 150 words) of the following text, \
        highlighting the methodology and key findings: {}",
        truncate_chars(text, SUMMARY_INPUT_LIMIT)
    )
}
