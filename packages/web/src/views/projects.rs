use dioxus::prelude::*;
use ui::views::ProjectsView;

#[component]
pub fn Projects() -> Element {
    rsx! {
        ProjectsView {}
    }
}
