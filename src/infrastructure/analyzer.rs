//! External text analysis service
//!
//! The journal performs no analysis itself. Text is forwarded to a generative
//! model through the [`TextAnalyzer`] seam; [`GeminiAnalyzer`] is the HTTP
//! implementation used by the binary.

use crate::domain::originality::{originality_prompt, summary_prompt};
use crate::domain::OriginalityReport;
use crate::error::{JournalError, Result};
use crate::infrastructure::config::AnalysisSettings;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Something that can judge originality and summarize text
pub trait TextAnalyzer {
    /// Validated originality report, or an error for any failure
    fn analyze_originality(&self, text: &str) -> Result<OriginalityReport>;

    /// Short academic summary of `text`
    fn summarize(&self, text: &str) -> Result<String>;
}

/// Analyzer used when no service can be reached; every call fails with `reason`.
#[derive(Debug, Clone)]
pub struct UnconfiguredAnalyzer {
    reason: String,
}

impl UnconfiguredAnalyzer {
    pub fn new(reason: impl Into<String>) -> Self {
        UnconfiguredAnalyzer {
            reason: reason.into(),
        }
    }
}

impl TextAnalyzer for UnconfiguredAnalyzer {
    fn analyze_originality(&self, _text: &str) -> Result<OriginalityReport> {
        Err(JournalError::Analysis(self.reason.clone()))
    }

    fn summarize(&self, _text: &str) -> Result<String> {
        Err(JournalError::Analysis(self.reason.clone()))
    }
}

/// Client for the Gemini `generateContent` REST endpoint
pub struct GeminiAnalyzer {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate; empty when the model said nothing
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default()
    }
}

impl GeminiAnalyzer {
    /// Create a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(settings: &AnalysisSettings, api_key: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!("dspg-journal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GeminiAnalyzer {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }

    /// Send one prompt. An empty answer is `Ok("")`; callers decide what it means.
    fn generate(&self, prompt: &str, json: bool) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: json.then_some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };

        tracing::debug!(model = %self.model, json, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| JournalError::Analysis(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(JournalError::Analysis(format!(
                "service returned {}: {}",
                status.as_u16(),
                message.trim()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| JournalError::Analysis(format!("unreadable response: {}", e)))?;

        Ok(parsed.text())
    }
}

impl TextAnalyzer for GeminiAnalyzer {
    fn analyze_originality(&self, text: &str) -> Result<OriginalityReport> {
        let raw = self.generate(&originality_prompt(text), true)?;
        OriginalityReport::from_model_output(&raw)
    }

    fn summarize(&self, text: &str) -> Result<String> {
        let summary = self.generate(&summary_prompt(text), false)?;
        Ok(summary.trim().to_string())
    }
}

/// Pick the analyzer for these settings. Never fails: a missing key or a
/// client that cannot be built yields an [`UnconfiguredAnalyzer`].
pub fn build_analyzer(settings: &AnalysisSettings) -> Box<dyn TextAnalyzer> {
    let Some(api_key) = settings.resolve_api_key() else {
        return Box::new(UnconfiguredAnalyzer::new(
            "no API key configured (set GEMINI_API_KEY)",
        ));
    };

    match GeminiAnalyzer::new(settings, api_key) {
        Ok(analyzer) => Box::new(analyzer),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build analysis client");
            Box::new(UnconfiguredAnalyzer::new(format!(
                "analysis client unavailable: {}",
                e
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: "hello" }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );

        let plain = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: "x" }],
            }],
            generation_config: None,
        };
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text(), "{\"a\":1}");

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(empty.text().is_empty());

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(blocked.text().is_empty());
    }

    #[test]
    fn test_unconfigured_analyzer_always_fails() {
        let analyzer = UnconfiguredAnalyzer::new("offline");
        assert!(matches!(
            analyzer.analyze_originality("text"),
            Err(JournalError::Analysis(msg)) if msg == "offline"
        ));
        assert!(analyzer.summarize("text").is_err());
    }

    #[test]
    fn test_unreachable_service_is_an_error() {
        let settings = AnalysisSettings {
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..Default::default()
        };
        let analyzer = GeminiAnalyzer::new(&settings, "test-key".to_string()).unwrap();
        assert!(matches!(
            analyzer.analyze_originality("some text"),
            Err(JournalError::Analysis(_))
        ));
    }
}
