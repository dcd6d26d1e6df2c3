use dioxus::prelude::*;
use ui::views::DashboardView;

use super::push_page;

/// `/`: the role router picks the dashboard.
#[component]
pub fn Home() -> Element {
    let on_navigate = push_page();
    rsx! {
        DashboardView { on_navigate }
    }
}
