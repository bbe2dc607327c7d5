use crate::incident::{Incident, IncidentId, Severity};
use chrono::{DateTime, TimeZone, Utc};

/// In-memory incident list. Grows only by [`IncidentStore::prepend`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
}

impl IncidentStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_incidents(incidents: Vec<Incident>) -> Self {
        Self { incidents }
    }

    /// The three sample incidents the dashboard starts with.
    pub fn seeded() -> Self {
        Self::from_incidents(vec![
            Incident {
                id: IncidentId(1),
                title: "Biased Recommendation Algorithm".into(),
                description: "Algorithm consistently favored certain demographics in product \
                    recommendations, creating unequal exposure and opportunities. This was \
                    identified during routine algorithmic fairness auditing and has since been \
                    recalibrated with additional fairness constraints."
                    .into(),
                severity: Severity::Medium,
                reported_at: utc(2025, 3, 15, 10, 0),
            },
            Incident {
                id: IncidentId(2),
                title: "LLM Hallucination in Critical Info".into(),
                description: "LLM provided incorrect safety procedure information during \
                    emergency response simulation, potentially endangering users in real-world \
                    scenarios. The model has been retrained with enhanced factual grounding and \
                    additional safety guardrails."
                    .into(),
                severity: Severity::High,
                reported_at: utc(2025, 4, 1, 14, 30),
            },
            Incident {
                id: IncidentId(3),
                title: "Minor Data Leak via Chatbot".into(),
                description: "Chatbot inadvertently exposed non-sensitive user metadata in its \
                    responses due to prompt injection vulnerability. The issue has been patched \
                    and all users notified of the limited exposure."
                    .into(),
                severity: Severity::Low,
                reported_at: utc(2025, 4, 10, 9, 15),
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter()
    }

    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    pub fn max_id(&self) -> Option<IncidentId> {
        self.incidents.iter().map(|i| i.id).max()
    }

    /// Largest id plus one, so ids stay unique only while nothing is ever removed.
    /// `None` once the largest id is `u32::MAX`.
    pub fn next_id(&self) -> Option<IncidentId> {
        self.max_id()
            .map_or(0, |id| id.0)
            .checked_add(1)
            .map(IncidentId)
    }

    /// Newly reported incidents go to the front, regardless of sort order.
    pub fn prepend(&mut self, incident: Incident) {
        self.incidents.insert(0, incident);
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamps are valid UTC instants")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(id: u32) -> Incident {
        Incident {
            id: IncidentId(id),
            title: format!("incident {id}"),
            description: "desc".into(),
            severity: Severity::Low,
            reported_at: utc(2025, 1, 1, 0, 0),
        }
    }

    #[test]
    fn seeded_store_has_three_sample_incidents() {
        let store = IncidentStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.max_id(), Some(IncidentId(3)));
        let leak = store.get(IncidentId(3)).expect("seed 3");
        assert_eq!(leak.title, "Minor Data Leak via Chatbot");
        assert_eq!(leak.reported_at.to_rfc3339(), "2025-04-10T09:15:00+00:00");
    }

    #[test]
    fn next_id_starts_at_one_for_empty_store() {
        assert_eq!(IncidentStore::empty().next_id(), Some(IncidentId(1)));
    }

    #[test]
    fn next_id_follows_max_not_length() {
        let store = IncidentStore::from_incidents(vec![incident(9), incident(2)]);
        assert_eq!(store.next_id(), Some(IncidentId(10)));
    }

    #[test]
    fn next_id_is_none_when_ids_are_exhausted() {
        let store = IncidentStore::from_incidents(vec![incident(u32::MAX), incident(1)]);
        assert_eq!(store.next_id(), None);
    }

    #[test]
    fn seed_timestamps_match_original_reports() {
        let stamps: Vec<String> = IncidentStore::seeded()
            .iter()
            .map(|i| i.reported_at.to_rfc3339())
            .collect();
        assert_eq!(
            stamps,
            vec![
                "2025-03-15T10:00:00+00:00",
                "2025-04-01T14:30:00+00:00",
                "2025-04-10T09:15:00+00:00",
            ]
        );
    }

    #[test]
    fn prepend_puts_incident_first() {
        let mut store = IncidentStore::seeded();
        store.prepend(incident(4));
        assert_eq!(store.len(), 4);
        assert_eq!(store.iter().next().map(|i| i.id), Some(IncidentId(4)));
    }
}
