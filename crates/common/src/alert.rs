use serde::{Deserialize, Serialize};

use crate::types::{AlertThreshold, SystemStats};

/// Three-level classification of a usage reading against its threshold.
/// Recomputed on every render from the current snapshot and the confirmed
/// thresholds; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Normal,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn classify(usage: f64, threshold: f64) -> Self {
        if usage >= threshold {
            Self::Critical
        } else if usage >= threshold * 0.8 {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub fn for_cpu(stats: &SystemStats, thresholds: &AlertThreshold) -> Self {
        Self::classify(stats.cpu_usage, thresholds.cpu_threshold)
    }

    pub fn for_memory(stats: &SystemStats, thresholds: &AlertThreshold) -> Self {
        Self::classify(stats.memory_usage, thresholds.memory_threshold)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_at_threshold() {
        assert_eq!(AlertLevel::classify(80.0, 80.0), AlertLevel::Critical);
        assert_eq!(AlertLevel::classify(99.5, 80.0), AlertLevel::Critical);
    }

    #[test]
    fn warning_band_below_threshold() {
        assert_eq!(AlertLevel::classify(79.9, 80.0), AlertLevel::Warning);
        assert_eq!(AlertLevel::classify(64.0, 80.0), AlertLevel::Warning);
    }

    #[test]
    fn normal_below_warning_band() {
        assert_eq!(AlertLevel::classify(63.9, 80.0), AlertLevel::Normal);
        assert_eq!(AlertLevel::classify(0.0, 80.0), AlertLevel::Normal);
    }

    #[test]
    fn cpu_and_memory_use_their_own_thresholds() {
        let stats = SystemStats {
            cpu_usage: 85.0,
            memory_usage: 45.0,
            timestamp: 0,
        };
        let thresholds = AlertThreshold {
            cpu_threshold: 80.0,
            memory_threshold: 50.0,
        };
        assert_eq!(AlertLevel::for_cpu(&stats, &thresholds), AlertLevel::Critical);
        assert_eq!(
            AlertLevel::for_memory(&stats, &thresholds),
            AlertLevel::Warning
        );
    }
}
