use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Modal with a title bar and a close button.
#[component]
pub fn Dialog(#[props(into)] title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-header",
                h3 { "{title}" }
                button {
                    class: "close-btn",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            {children}
        }
    }
}
