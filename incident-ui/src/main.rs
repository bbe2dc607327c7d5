mod app;
mod notify;

pub mod components {
    pub mod filter_bar;
    pub mod incident_list;
    pub mod report_form;
}

use app::App;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(|| view! { <App/> });
}
