use anyhow::{self, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Malware,
    Phishing,
    Benign,
    #[serde(rename = "Suspicious Activity")]
    SuspiciousActivity,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::Malware => "Malware",
            Classification::Phishing => "Phishing",
            Classification::Benign => "Benign",
            Classification::SuspiciousActivity => "Suspicious Activity",
        }
    }

    pub fn all() -> &'static [Classification] {
        const ALL: &[Classification] = &[
            Classification::Malware,
            Classification::Phishing,
            Classification::Benign,
            Classification::SuspiciousActivity,
        ];
        ALL
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Classification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        let candidate = match normalized.as_str() {
            "malware" => Classification::Malware,
            "phishing" => Classification::Phishing,
            "benign" => Classification::Benign,
            "suspicious activity" | "suspicious" => Classification::SuspiciousActivity,
            _ => anyhow::bail!("classification inconnue: {}", s),
        };
        Ok(candidate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    pub fn name(self) -> &'static str {
        match self {
            ThreatLevel::Low => "low",
            ThreatLevel::Medium => "medium",
            ThreatLevel::High => "high",
            ThreatLevel::Critical => "critical",
        }
    }

    // La sévérité ne dépend que du couple (classification, confiance).
    pub fn derive(classification: Classification, confidence: u8) -> ThreatLevel {
        match classification {
            Classification::Benign => ThreatLevel::Low,
            Classification::Malware => {
                if confidence >= 85 {
                    ThreatLevel::Critical
                } else if confidence >= 70 {
                    ThreatLevel::High
                } else {
                    ThreatLevel::Medium
                }
            }
            Classification::Phishing => {
                if confidence >= 70 {
                    ThreatLevel::High
                } else {
                    ThreatLevel::Medium
                }
            }
            Classification::SuspiciousActivity => ThreatLevel::Medium,
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ThreatLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidate = match s.trim().to_lowercase().as_str() {
            "low" => ThreatLevel::Low,
            "medium" => ThreatLevel::Medium,
            "high" => ThreatLevel::High,
            "critical" => ThreatLevel::Critical,
            _ => anyhow::bail!("niveau de menace inconnu: {}", s),
        };
        Ok(candidate)
    }
}
