//! Core data models for the relay

use serde::{Deserialize, Serialize};
use std::fmt;

/// Translation direction, one of the two fixed language pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Chinese to English
    ZhToEn,
    /// English to Chinese
    EnToZh,
}

impl Direction {
    /// Parse a wire tag; anything unknown is `None` and passes through
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "zh2en" => Some(Direction::ZhToEn),
            "en2zh" => Some(Direction::EnToZh),
            _ => None,
        }
    }

    /// Provider source language code
    pub fn source_lang(&self) -> &'static str {
        match self {
            Direction::ZhToEn => "zh-CN",
            Direction::EnToZh => "en",
        }
    }

    /// Provider target language code
    pub fn target_lang(&self) -> &'static str {
        match self {
            Direction::ZhToEn => "en",
            Direction::EnToZh => "zh-CN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ZhToEn => write!(f, "zh2en"),
            Direction::EnToZh => write!(f, "en2zh"),
        }
    }
}

/// Translation request wire format
///
/// Missing fields default to empty strings instead of failing the parse.
/// `direction` stays a raw string so unknown tags are echoed back verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate, may be empty
    #[serde(default)]
    pub text: String,
    /// Direction tag; unknown values trigger pass-through
    #[serde(default)]
    pub direction: String,
}

/// Translation response wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Translated text, or the input unchanged for unknown directions
    pub result: String,
    /// Input text, echoed verbatim
    pub original: String,
    /// Direction tag, echoed verbatim
    pub direction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tags() {
        assert_eq!(Direction::from_tag("zh2en"), Some(Direction::ZhToEn));
        assert_eq!(Direction::from_tag("en2zh"), Some(Direction::EnToZh));
        assert_eq!(Direction::from_tag("xx"), None);
        assert_eq!(Direction::from_tag(""), None);
        assert_eq!(Direction::from_tag("ZH2EN"), None);

        assert_eq!(Direction::ZhToEn.to_string(), "zh2en");
        assert_eq!(Direction::EnToZh.to_string(), "en2zh");
    }

    #[test]
    fn test_language_pairs() {
        assert_eq!(Direction::ZhToEn.source_lang(), "zh-CN");
        assert_eq!(Direction::ZhToEn.target_lang(), "en");
        assert_eq!(Direction::EnToZh.source_lang(), "en");
        assert_eq!(Direction::EnToZh.target_lang(), "zh-CN");
    }

    #[test]
    fn test_request_fields_default_to_empty() {
        let request: TranslateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.text, "");
        assert_eq!(request.direction, "");

        let request: TranslateRequest =
            serde_json::from_str(r#"{"text":"你好"}"#).unwrap();
        assert_eq!(request.text, "你好");
        assert_eq!(request.direction, "");
    }

    #[test]
    fn test_response_serialization() {
        let response = TranslateResponse {
            result: "hello".to_string(),
            original: "你好".to_string(),
            direction: "zh2en".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "result": "hello",
                "original": "你好",
                "direction": "zh2en",
            })
        );
    }
}
