use crate::error::ParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub u32);

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed three-level classification. No ranking is implied between levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Badge class used by the incident card.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.label() == s)
            .ok_or_else(|| ParseError::Severity(s.to_string()))
    }
}

/// A reported AI-system failure. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_parse_back() {
        for sev in Severity::ALL {
            assert_eq!(sev.label().parse::<Severity>().expect("parse"), sev);
        }
        assert_eq!(
            "Critical".parse::<Severity>(),
            Err(ParseError::Severity("Critical".into()))
        );
    }

    #[test]
    fn default_severity_is_medium() {
        assert_eq!(Severity::default(), Severity::Medium);
    }

    #[test]
    fn incident_json_uses_labels_and_iso_timestamps() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Prompt injection",
            "description": "System prompt leaked",
            "severity": "High",
            "reported_at": "2025-04-01T14:30:00Z"
        });
        let incident: Incident = serde_json::from_value(json.clone()).expect("decode");
        assert_eq!(incident.id, IncidentId(7));
        assert_eq!(incident.severity, Severity::High);
        assert_eq!(incident.severity.css_class(), "high");

        let back = serde_json::to_value(&incident).expect("encode");
        assert_eq!(back["severity"], "High");
        assert_eq!(back["reported_at"], "2025-04-01T14:30:00Z");
    }
}
