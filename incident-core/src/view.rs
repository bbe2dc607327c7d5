//! Filtered and sorted projection of the store, recomputed on every render.

use crate::error::ParseError;
use crate::incident::{Incident, Severity};
use crate::store::IncidentStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NO_MATCHES_MESSAGE: &str = "No incidents matching the current filters.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub const CHOICES: [SeverityFilter; 4] = [
        SeverityFilter::All,
        SeverityFilter::Only(Severity::Low),
        SeverityFilter::Only(Severity::Medium),
        SeverityFilter::Only(Severity::High),
    ];

    pub fn admits(&self, incident: &Incident) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(sev) => incident.severity == *sev,
        }
    }

    /// `<select>` option value.
    pub fn value(&self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(sev) => sev.label(),
        }
    }

    /// Text shown in the dropdown.
    pub fn option_text(&self) -> &'static str {
        match self {
            SeverityFilter::All => "All Severities",
            SeverityFilter::Only(sev) => sev.label(),
        }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for SeverityFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(SeverityFilter::All);
        }
        s.parse::<Severity>()
            .map(SeverityFilter::Only)
            .map_err(|_| ParseError::SeverityFilter(s.to_string()))
    }
}

impl TryFrom<String> for SeverityFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeverityFilter> for String {
    fn from(filter: SeverityFilter) -> Self {
        filter.value().to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "Newest First")]
    NewestFirst,
    #[serde(rename = "Oldest First")]
    OldestFirst,
}

impl SortOrder {
    pub const CHOICES: [SortOrder; 2] = [SortOrder::NewestFirst, SortOrder::OldestFirst];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "Newest First",
            SortOrder::OldestFirst => "Oldest First",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::CHOICES
            .into_iter()
            .find(|order| order.label() == s)
            .ok_or_else(|| ParseError::SortOrder(s.to_string()))
    }
}

/// The incidents to render, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivedView {
    incidents: Vec<Incident>,
}

impl DerivedView {
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn into_incidents(self) -> Vec<Incident> {
        self.incidents
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Explanation to show instead of a bare empty list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_MATCHES_MESSAGE)
    }
}

/// Filters by severity, then stable-sorts by `reported_at`. Ties keep store order.
pub fn derive_view(store: &IncidentStore, filter: SeverityFilter, order: SortOrder) -> DerivedView {
    let mut incidents: Vec<Incident> = store.iter().filter(|i| filter.admits(i)).cloned().collect();
    match order {
        SortOrder::NewestFirst => incidents.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
        SortOrder::OldestFirst => incidents.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
    }
    DerivedView { incidents }
}
