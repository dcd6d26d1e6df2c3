use dioxus::prelude::*;
use store::{Page, Viewer};

use super::{AdminDashboard, DeveloperDashboard, ManagerDashboard};
use crate::session::use_session;

/// Role router for `/`. Picks the dashboard matching the signed-in role and
/// sends everyone else to the login page.
#[component]
pub fn DashboardView(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();

    use_effect(move || {
        if !session.loading() && session.viewer() == Viewer::Unauthenticated {
            on_navigate.call(Page::Login);
        }
    });

    match session.viewer() {
        Viewer::Admin => rsx! { AdminDashboard { on_navigate } },
        Viewer::Manager => rsx! { ManagerDashboard { on_navigate } },
        Viewer::Developer => rsx! { DeveloperDashboard {} },
        Viewer::Unauthenticated => rsx! {},
    }
}
