use serde::Serialize;

use crate::domain::{Classification, ThreatLevel};

// Valeurs de démonstration figées, pas des mesures: aucune logique ne les
// alimente.
#[derive(Debug, Clone, Serialize)]
pub struct ThreatSlice {
    pub classification: Classification,
    pub share_percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentPrediction {
    pub description: &'static str,
    pub classification: Classification,
    pub threat_level: ThreatLevel,
    pub confidence: u8,
    pub timestamp: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemHealthPanel {
    pub api_status: &'static str,
    pub cpu_usage_percent: u8,
    pub memory_used: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStats {
    pub threats_detected: u32,
    pub threats_trend: &'static str,
    pub scans_today: u32,
    pub daily_quota_percent: u8,
    pub data_processed: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub system_health: SystemHealthPanel,
    pub quick_stats: QuickStats,
    pub threat_distribution: Vec<ThreatSlice>,
    pub recent_predictions: Vec<RecentPrediction>,
}

pub fn threat_distribution() -> Vec<ThreatSlice> {
    vec![
        ThreatSlice {
            classification: Classification::Malware,
            share_percent: 40,
        },
        ThreatSlice {
            classification: Classification::Phishing,
            share_percent: 25,
        },
        ThreatSlice {
            classification: Classification::Benign,
            share_percent: 30,
        },
        ThreatSlice {
            classification: Classification::SuspiciousActivity,
            share_percent: 5,
        },
    ]
}

pub fn recent_predictions() -> Vec<RecentPrediction> {
    vec![
        RecentPrediction {
            description: "Suspicious login attempt detected",
            classification: Classification::Benign,
            threat_level: ThreatLevel::Low,
            confidence: 92,
            timestamp: "2 minutes ago",
        },
        RecentPrediction {
            description: "Ransomware signature identified",
            classification: Classification::Malware,
            threat_level: ThreatLevel::Critical,
            confidence: 96,
            timestamp: "5 minutes ago",
        },
        RecentPrediction {
            description: "Email credential harvesting attempt",
            classification: Classification::Phishing,
            threat_level: ThreatLevel::High,
            confidence: 87,
            timestamp: "12 minutes ago",
        },
        RecentPrediction {
            description: "Unusual network traffic pattern",
            classification: Classification::SuspiciousActivity,
            threat_level: ThreatLevel::Medium,
            confidence: 74,
            timestamp: "18 minutes ago",
        },
    ]
}

pub fn system_health() -> SystemHealthPanel {
    SystemHealthPanel {
        api_status: "Online",
        cpu_usage_percent: 23,
        memory_used: "1.2GB",
    }
}

pub fn quick_stats() -> QuickStats {
    QuickStats {
        threats_detected: 247,
        threats_trend: "+12% from last week",
        scans_today: 1_429,
        daily_quota_percent: 78,
        data_processed: "2.4TB",
    }
}

pub fn snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        system_health: system_health(),
        quick_stats: quick_stats(),
        threat_distribution: threat_distribution(),
        recent_predictions: recent_predictions(),
    }
}
