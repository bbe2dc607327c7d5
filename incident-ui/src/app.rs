use crate::components::filter_bar::FilterBar;
use crate::components::incident_list::IncidentList;
use crate::components::report_form::ReportForm;
use crate::notify;
use incident_core::{DashboardConfig, DashboardEvent, DashboardState, Outcome};
use leptos::logging::{log, warn};
use leptos::*;

const CONFIG_JSON: &str = include_str!("../dashboard.json");

fn load_config() -> DashboardConfig {
    match DashboardConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}; falling back to default dashboard config");
            DashboardConfig::default()
        }
    }
}

/// Runs one event through the reducer. The signal is only written when
/// something changed; validation failures become a blocking alert.
pub fn dispatch(state: RwSignal<DashboardState>, event: DashboardEvent) {
    let mut next = state.get_untracked();
    match next.apply(event) {
        Ok(Outcome::Unchanged) => {}
        Ok(Outcome::Changed) => state.set(next),
        Ok(Outcome::Reported(id)) => {
            log!("reported incident #{id}");
            state.set(next);
        }
        Err(e) => notify::alert(&e.to_string()),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(DashboardState::new(&load_config()));
    let theme = move || state.with(|s| s.theme);

    view! {
      <div class=move || format!("dashboard {}", theme().css_class())>
        <header class="dashboard-header">
          <h1>"AI Safety Incident Dashboard"</h1>
          <button
            class="theme-toggle"
            on:click=move |_| dispatch(state, DashboardEvent::ToggleTheme)
          >
            {move || theme().toggle_icon()}
          </button>
        </header>

        <div class="top-bar">
          <h2>"Incidents"</h2>
          <button
            class="report-incident-btn"
            on:click=move |_| dispatch(state, DashboardEvent::OpenReportForm)
          >
            "Report New Incident"
          </button>
        </div>

        <div class="dashboard-content">
          <div class="incidents-container">
            <FilterBar state=state/>
            <IncidentList state=state/>
          </div>
        </div>

        <Show
          when=move || state.with(|s| s.report_form.is_open())
          fallback=|| ()
        >
          <ReportForm state=state/>
        </Show>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = DashboardConfig::from_json(CONFIG_JSON).expect("bundled config");
        assert_eq!(config, DashboardConfig::default());
    }
}
