mod fixtures;

pub use fixtures::{
    quick_stats, recent_predictions, snapshot, system_health, threat_distribution,
    DashboardSnapshot, QuickStats, RecentPrediction, SystemHealthPanel, ThreatSlice,
};
