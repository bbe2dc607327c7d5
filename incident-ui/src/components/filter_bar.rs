use crate::app::dispatch;
use incident_core::{DashboardEvent, DashboardState, SeverityFilter, SortOrder};
use leptos::logging::warn;
use leptos::*;

fn filter_selected(state: &DashboardState, filter: SeverityFilter) -> bool {
    state.severity_filter == filter
}

fn sort_selected(state: &DashboardState, order: SortOrder) -> bool {
    state.sort_order == order
}

#[component]
pub fn FilterBar(state: RwSignal<DashboardState>) -> impl IntoView {
    let on_filter = move |ev: ev::Event| match event_target_value(&ev).parse::<SeverityFilter>() {
        Ok(filter) => dispatch(state, DashboardEvent::SetSeverityFilter(filter)),
        Err(e) => warn!("{e}"),
    };
    let on_sort = move |ev: ev::Event| match event_target_value(&ev).parse::<SortOrder>() {
        Ok(order) => dispatch(state, DashboardEvent::SetSortOrder(order)),
        Err(e) => warn!("{e}"),
    };

    view! {
      <div class="filter-bar">
        <div class="filter-controls">
          <select
            class="filter-dropdown"
            on:change=on_filter
          >
            {SeverityFilter::CHOICES
              .into_iter()
              .map(|f| view! {
                <option
                  value=f.value()
                  selected=move || state.with(|s| filter_selected(s, f))
                >
                  {f.option_text()}
                </option>
              })
              .collect_view()}
          </select>

          <select
            class="filter-dropdown"
            on:change=on_sort
          >
            {SortOrder::CHOICES
              .into_iter()
              .map(|o| view! {
                <option value=o.label() selected=move || state.with(|s| sort_selected(s, o))>
                  {o.label()}
                </option>
              })
              .collect_view()}
          </select>
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use incident_core::{DashboardConfig, Severity};

    #[test]
    fn configured_choices_mark_exactly_one_option() {
        let config = DashboardConfig {
            severity_filter: SeverityFilter::Only(Severity::High),
            sort_order: SortOrder::OldestFirst,
            ..DashboardConfig::default()
        };
        let state = DashboardState::new(&config);

        let filters: Vec<&str> = SeverityFilter::CHOICES
            .into_iter()
            .filter(|f| filter_selected(&state, *f))
            .map(|f| f.value())
            .collect();
        assert_eq!(filters, vec!["High"]);

        let orders: Vec<&str> = SortOrder::CHOICES
            .into_iter()
            .filter(|o| sort_selected(&state, *o))
            .map(|o| o.label())
            .collect();
        assert_eq!(orders, vec!["Oldest First"]);
    }
}
