use crate::error::ConfigError;
use crate::state::Theme;
use crate::view::{SeverityFilter, SortOrder};
use serde::{Deserialize, Serialize};

/// Initial dashboard settings. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub theme: Theme,
    pub severity_filter: SeverityFilter,
    pub sort_order: SortOrder,
    pub seed_sample_data: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            severity_filter: SeverityFilter::All,
            sort_order: SortOrder::NewestFirst,
            seed_sample_data: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::Severity;

    #[test]
    fn empty_object_gives_defaults() {
        let config = DashboardConfig::from_json("{}").expect("config");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn reads_partial_overrides() {
        let config = DashboardConfig::from_json(
            r#"{ "theme": "light", "severity_filter": "High", "sort_order": "Oldest First" }"#,
        )
        .expect("config");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.severity_filter, SeverityFilter::Only(Severity::High));
        assert_eq!(config.sort_order, SortOrder::OldestFirst);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn rejects_unknown_filter() {
        let err = DashboardConfig::from_json(r#"{ "severity_filter": "Critical" }"#).unwrap_err();
        assert!(err.to_string().contains("Critical"));
    }
}
