use dioxus::prelude::*;
use ui::views::LoginView;

use super::replace_page;

#[component]
pub fn Login() -> Element {
    let on_navigate = replace_page();
    rsx! {
        LoginView { on_navigate }
    }
}
