use thiserror::Error;

/// A report submission that cannot become an incident.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields { title: bool, description: bool },
    #[error("No incident ids left to assign")]
    IdsExhausted,
}

impl ValidationError {
    pub fn missing_title(&self) -> bool {
        match self {
            ValidationError::MissingFields { title, .. } => *title,
            ValidationError::IdsExhausted => false,
        }
    }

    pub fn missing_description(&self) -> bool {
        match self {
            ValidationError::MissingFields { description, .. } => *description,
            ValidationError::IdsExhausted => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid timestamp '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Failure to read a `<select>` value back into a typed choice.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown severity '{0}'")]
    Severity(String),
    #[error("unknown severity filter '{0}'")]
    SeverityFilter(String),
    #[error("unknown sort order '{0}'")]
    SortOrder(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Json(#[from] serde_json::Error),
}
