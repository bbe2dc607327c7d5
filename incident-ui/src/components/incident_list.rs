use crate::app::dispatch;
use incident_core::date::format_reported_at;
use incident_core::view::NO_MATCHES_MESSAGE;
use incident_core::{DashboardEvent, DashboardState, Incident};
use leptos::*;

#[component]
pub fn IncidentList(state: RwSignal<DashboardState>) -> impl IntoView {
    let visible = create_memo(move |_| state.with(|s| s.visible_incidents()));

    view! {
      <div class="incidents-list">
        <Show
          when=move || visible.with(|v| v.empty_message().is_none())
          fallback=|| view! { <p class="no-incidents">{NO_MATCHES_MESSAGE}</p> }
        >
          <For
            each=move || visible.get().into_incidents()
            key=|i| i.id
            children=move |incident| view! { <IncidentCard incident=incident state=state/> }
          />
        </Show>
      </div>
    }
}

#[component]
fn IncidentCard(incident: Incident, state: RwSignal<DashboardState>) -> impl IntoView {
    let id = incident.id;
    let description = incident.description;

    view! {
      <div class="incident-card">
        <div class="incident-header">
          <div class="incident-title-area">
            <h3>{incident.title}</h3>
            <div class="incident-meta">
              <span class=format!("severity-badge {}", incident.severity.css_class())>
                {incident.severity.label()}
              </span>
              <span class="incident-date">{format_reported_at(incident.reported_at)}</span>
            </div>
          </div>
          <button
            class="view-details-btn"
            on:click=move |_| dispatch(state, DashboardEvent::ToggleExpand(id))
          >
            "View Details"
          </button>
        </div>

        <Show
          when=move || state.with(|s| s.is_expanded(id))
          fallback=|| ()
        >
          <div class="incident-details">
            <p>{description.clone()}</p>
          </div>
        </Show>
      </div>
    }
}
