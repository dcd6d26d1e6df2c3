use dioxus::prelude::*;
use ui::views::TasksView;

#[component]
pub fn Tasks() -> Element {
    rsx! {
        TasksView {}
    }
}
