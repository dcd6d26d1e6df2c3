use dioxus::prelude::*;
use store::{nav_links, Page};

use crate::icons::{FaFolderOpen, FaGauge, FaListCheck, FaRightFromBracket, FaUsers};
use crate::session::use_session;
use crate::Icon;

/// Top navigation bar: role-filtered links on the left, the signed-in user on
/// the right.
#[component]
pub fn NavBar(current: Page, on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    let links = nav_links(session.viewer());
    let user = session.user();

    let logout = move |_| async move {
        session.sign_out().await;
        on_navigate.call(Page::Login);
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-left",
                h1 { "Project Hub" }
                div {
                    class: "navbar-links",
                    for link in links {
                        a {
                            key: "{link.path}",
                            class: if link.page == current { "nav-link active" } else { "nav-link" },
                            href: "{link.path}",
                            onclick: move |evt: Event<MouseData>| {
                                evt.prevent_default();
                                on_navigate.call(link.page);
                            },
                            NavIcon { page: link.page }
                            span { "{link.label}" }
                        }
                    }
                }
            }
            div {
                class: "navbar-right",
                if let Some(user) = user {
                    div {
                        class: "user-info",
                        div { class: "user-avatar", "{user.initials()}" }
                        div {
                            div { class: "user-name", "{user.name}" }
                            div { class: "user-role", "{user.role}" }
                        }
                    }
                    button {
                        class: "logout-btn",
                        onclick: logout,
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        span { "Logout" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavIcon(page: Page) -> Element {
    match page {
        Page::Users => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
        Page::Projects => rsx! { Icon { icon: FaFolderOpen, width: 14, height: 14 } },
        Page::Tasks => rsx! { Icon { icon: FaListCheck, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaGauge, width: 14, height: 14 } },
    }
}
