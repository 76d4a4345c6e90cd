use serde::{Deserialize, Serialize};

use super::classification::{Classification, ThreatLevel};

// Invariant: jamais vide après trim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrigin {
    #[default]
    Classifier,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub classification: Classification,
    pub confidence: u8,
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub origin: ResultOrigin,
}

impl AnalysisResult {
    pub fn classified(classification: Classification, confidence: u8) -> Self {
        Self {
            classification,
            confidence,
            threat_level: ThreatLevel::derive(classification, confidence),
            origin: ResultOrigin::Classifier,
        }
    }
}
