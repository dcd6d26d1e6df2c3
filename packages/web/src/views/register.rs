use dioxus::prelude::*;
use ui::views::RegisterView;

use super::replace_page;

#[component]
pub fn Register() -> Element {
    let on_navigate = replace_page();
    rsx! {
        RegisterView { on_navigate }
    }
}
