use crate::app::dispatch;
use chrono::Utc;
use incident_core::{ClickTarget, DashboardEvent, DashboardState, DraftField, Severity};
use leptos::logging::warn;
use leptos::*;

fn severity_selected(state: &DashboardState, severity: Severity) -> bool {
    state.draft.severity == severity
}

/// Modal overlay with the new-incident form. Mounted only while the form is open.
#[component]
pub fn ReportForm(state: RwSignal<DashboardState>) -> impl IntoView {
    let edit = move |field: DraftField| dispatch(state, DashboardEvent::EditDraft(field));

    let on_severity = move |ev: ev::Event| match event_target_value(&ev).parse::<Severity>() {
        Ok(severity) => edit(DraftField::Severity(severity)),
        Err(e) => warn!("{e}"),
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(state, DashboardEvent::SubmitReport { now: Utc::now() });
    };

    view! {
      <div
        class="modal-overlay"
        on:click=move |_| dispatch(state, DashboardEvent::OverlayClicked(ClickTarget::Background))
      >
        <div
          class="modal-content"
          on:click=move |ev| {
            ev.stop_propagation();
            dispatch(state, DashboardEvent::OverlayClicked(ClickTarget::Content));
          }
        >
          <div class="modal-header">
            <h2>"Report New Incident"</h2>
            <button
              class="close-modal-btn"
              on:click=move |_| dispatch(state, DashboardEvent::ToggleReportForm)
            >
              "\u{00d7}"
            </button>
          </div>

          <form class="incident-form" on:submit=on_submit>
            <div class="form-group">
              <input
                type="text"
                id="title"
                name="title"
                class="form-input"
                placeholder="Incident Title"
                required=true
                prop:value=move || state.with(|s| s.draft.title.clone())
                on:input=move |ev| edit(DraftField::Title(event_target_value(&ev)))
              />
            </div>

            <div class="form-group">
              <textarea
                id="description"
                name="description"
                class="form-input description"
                placeholder="Incident Description"
                required=true
                prop:value=move || state.with(|s| s.draft.description.clone())
                on:input=move |ev| edit(DraftField::Description(event_target_value(&ev)))
              ></textarea>
            </div>

            <div class="form-group">
              <select
                id="severity"
                name="severity"
                class="form-input"
                on:change=on_severity
              >
                {Severity::ALL
                  .into_iter()
                  .map(|sev| view! {
                    <option
                      value=sev.label()
                      selected=move || state.with(|s| severity_selected(s, sev))
                    >
                      {sev.label()}
                    </option>
                  })
                  .collect_view()}
              </select>
            </div>

            <div class="form-actions">
              <button
                type="button"
                class="cancel-btn"
                on:click=move |_| dispatch(state, DashboardEvent::CancelReportForm)
              >
                "Cancel"
              </button>
              <button type="submit" class="submit-btn">"Submit Incident Report"</button>
            </div>
          </form>
        </div>
      </div>
    }
}
