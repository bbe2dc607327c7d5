//! Dashboard view state and the reducer that applies user interactions to it.
//!
//! Every interaction the UI can produce is a [`DashboardEvent`]. The only way
//! to mutate a [`DashboardState`] is [`DashboardState::apply`], which keeps
//! the rendering layer free of business rules and lets the whole flow be
//! exercised without a browser.

use crate::config::DashboardConfig;
use crate::draft::{DraftField, NewIncidentDraft};
use crate::error::ValidationError;
use crate::incident::IncidentId;
use crate::store::IncidentStore;
use crate::view::{derive_view, DerivedView, SeverityFilter, SortOrder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presentational only. Nothing else branches on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-mode",
            Theme::Light => "light-mode",
        }
    }

    /// Icon for the header button; shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{fe0f}",
            Theme::Light => "\u{1f319}",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportForm {
    #[default]
    Closed,
    Open,
}

impl ReportForm {
    pub fn is_open(self) -> bool {
        self == ReportForm::Open
    }

    fn toggled(self) -> Self {
        match self {
            ReportForm::Closed => ReportForm::Open,
            ReportForm::Open => ReportForm::Closed,
        }
    }
}

/// Where a click on the report overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Background,
    Content,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardEvent {
    SetSeverityFilter(SeverityFilter),
    SetSortOrder(SortOrder),
    ToggleExpand(IncidentId),
    ToggleTheme,
    /// "Report New Incident" button.
    OpenReportForm,
    /// Close button in the form header.
    ToggleReportForm,
    CancelReportForm,
    OverlayClicked(ClickTarget),
    EditDraft(DraftField),
    SubmitReport { now: DateTime<Utc> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Reported(IncidentId),
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub store: IncidentStore,
    pub severity_filter: SeverityFilter,
    pub sort_order: SortOrder,
    pub expanded: Option<IncidentId>,
    pub theme: Theme,
    pub report_form: ReportForm,
    pub draft: NewIncidentDraft,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        let store = if config.seed_sample_data {
            IncidentStore::seeded()
        } else {
            IncidentStore::empty()
        };
        Self {
            store,
            severity_filter: config.severity_filter,
            sort_order: config.sort_order,
            expanded: None,
            theme: config.theme,
            report_form: ReportForm::Closed,
            draft: NewIncidentDraft::default(),
        }
    }

    pub fn visible_incidents(&self) -> DerivedView {
        derive_view(&self.store, self.severity_filter, self.sort_order)
    }

    pub fn is_expanded(&self, id: IncidentId) -> bool {
        self.expanded == Some(id)
    }

    /// Applies one interaction. A rejected submission leaves `self` untouched.
    pub fn apply(&mut self, event: DashboardEvent) -> Result<Outcome, ValidationError> {
        let outcome = match event {
            DashboardEvent::SetSeverityFilter(filter) => {
                replace(&mut self.severity_filter, filter)
            }
            DashboardEvent::SetSortOrder(order) => replace(&mut self.sort_order, order),
            DashboardEvent::ToggleExpand(id) => {
                self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
                Outcome::Changed
            }
            DashboardEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                Outcome::Changed
            }
            DashboardEvent::OpenReportForm => replace(&mut self.report_form, ReportForm::Open),
            DashboardEvent::ToggleReportForm => {
                self.report_form = self.report_form.toggled();
                Outcome::Changed
            }
            DashboardEvent::CancelReportForm
            | DashboardEvent::OverlayClicked(ClickTarget::Background) => {
                replace(&mut self.report_form, ReportForm::Closed)
            }
            DashboardEvent::OverlayClicked(ClickTarget::Content) => Outcome::Unchanged,
            DashboardEvent::EditDraft(field) => {
                self.draft.edit(field);
                Outcome::Changed
            }
            DashboardEvent::SubmitReport { now } => return self.submit(now),
        };

        if outcome == Outcome::Changed {
            tracing::debug!(
                filter = %self.severity_filter,
                sort = %self.sort_order,
                expanded = ?self.expanded,
                form_open = self.report_form.is_open(),
                "dashboard state changed"
            );
        }
        Ok(outcome)
    }

    fn submit(&mut self, now: DateTime<Utc>) -> Result<Outcome, ValidationError> {
        if !self.report_form.is_open() {
            return Ok(Outcome::Unchanged);
        }

        let incident = self
            .store
            .next_id()
            .ok_or(ValidationError::IdsExhausted)
            .and_then(|id| self.draft.validate(id, now))
            .map_err(|err| {
                tracing::warn!(error = %err, "incident report rejected");
                err
            })?;
        let id = incident.id;

        tracing::info!(
            id = %incident.id,
            severity = %incident.severity,
            reported_at = %incident.reported_at,
            "incident reported"
        );
        self.store.prepend(incident);
        self.draft = NewIncidentDraft::default();
        self.report_form = ReportForm::Closed;
        Ok(Outcome::Reported(id))
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> Outcome {
    if *slot == value {
        Outcome::Unchanged
    } else {
        *slot = value;
        Outcome::Changed
    }
}
