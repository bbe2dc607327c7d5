//! Incident list, report form and derived view for the AI safety incident dashboard.
//!
//! Everything here is plain data plus pure functions; the Leptos front end in
//! `incident-ui` only renders [`state::DashboardState`] and feeds it
//! [`state::DashboardEvent`]s.

pub mod config;
pub mod date;
pub mod draft;
pub mod error;
pub mod incident;
pub mod state;
pub mod store;
pub mod view;

pub use config::DashboardConfig;
pub use draft::{DraftField, NewIncidentDraft};
pub use error::{ConfigError, DateError, ParseError, ValidationError};
pub use incident::{Incident, IncidentId, Severity};
pub use state::{ClickTarget, DashboardEvent, DashboardState, Outcome, ReportForm, Theme};
pub use store::IncidentStore;
pub use view::{derive_view, DerivedView, SeverityFilter, SortOrder};
