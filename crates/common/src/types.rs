use serde::{Deserialize, Serialize};

/// A condition/action pair evaluated by the remote engine. The engine owns
/// the semantics of both expressions; the console treats them as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub condition: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRule {
    pub field: &'static str,
}

impl std::fmt::Display for InvalidRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rule {} must not be empty", self.field)
    }
}

impl std::error::Error for InvalidRule {}

impl Rule {
    pub fn validate(&self) -> Result<(), InvalidRule> {
        if self.id.is_empty() {
            return Err(InvalidRule { field: "id" });
        }
        if self.condition.is_empty() {
            return Err(InvalidRule { field: "condition" });
        }
        if self.action.is_empty() {
            return Err(InvalidRule { field: "action" });
        }
        Ok(())
    }
}

/// Snapshot reported by the engine's monitoring endpoint. Each successful
/// poll replaces the previous snapshot wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    /// Seconds since epoch, as reported by the engine.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertThreshold {
    pub cpu_threshold: f64,
    pub memory_threshold: f64,
}

impl Default for AlertThreshold {
    fn default() -> Self {
        Self {
            cpu_threshold: 80.0,
            memory_threshold: 80.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> Rule {
        Rule {
            id: "r1".into(),
            condition: "temp > 40".into(),
            action: "alert('hi')".into(),
        }
    }

    #[test]
    fn valid_rule_passes() {
        assert!(rule().validate().is_ok());
    }

    #[test]
    fn empty_fields_rejected() {
        for field in ["id", "condition", "action"] {
            let mut r = rule();
            match field {
                "id" => r.id.clear(),
                "condition" => r.condition.clear(),
                _ => r.action.clear(),
            }
            let err = r.validate().unwrap_err();
            assert_eq!(err.field, field);
        }
    }

    #[test]
    fn rule_json_keys() {
        let json = serde_json::to_string(&rule()).unwrap();
        assert!(json.contains(r#""id":"r1""#));
        assert!(json.contains(r#""condition":"temp > 40""#));
        assert!(json.contains(r#""action":"alert('hi')""#));
    }

    #[test]
    fn stats_wire_format() {
        let stats: SystemStats =
            serde_json::from_str(r#"{"cpuUsage":42.5,"memoryUsage":63.9,"timestamp":1700000000}"#)
                .unwrap();
        assert_eq!(stats.cpu_usage, 42.5);
        assert_eq!(stats.memory_usage, 63.9);
        assert_eq!(stats.timestamp, 1_700_000_000);
    }

    #[test]
    fn threshold_wire_format() {
        let json = serde_json::to_string(&AlertThreshold::default()).unwrap();
        assert!(json.contains(r#""cpuThreshold":80.0"#));
        assert!(json.contains(r#""memoryThreshold":80.0"#));
    }
}
