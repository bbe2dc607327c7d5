use crate::error::ValidationError;
use crate::incident::{Incident, IncidentId, Severity};
use chrono::{DateTime, Utc};

/// Values of the report form before they become an [`Incident`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewIncidentDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// A single edit to one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Description(String),
    Severity(Severity),
}

impl NewIncidentDraft {
    pub fn edit(&mut self, field: DraftField) {
        match field {
            DraftField::Title(title) => self.title = title,
            DraftField::Description(description) => self.description = description,
            DraftField::Severity(severity) => self.severity = severity,
        }
    }

    /// Only emptiness is checked; text is kept exactly as typed.
    pub fn validate(
        &self,
        id: IncidentId,
        reported_at: DateTime<Utc>,
    ) -> Result<Incident, ValidationError> {
        let title = self.title.trim().is_empty();
        let description = self.description.trim().is_empty();
        if title || description {
            return Err(ValidationError::MissingFields { title, description });
        }

        Ok(Incident {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            severity: self.severity,
            reported_at,
        })
    }
}
