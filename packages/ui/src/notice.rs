use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::views::ModalOverlay;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Queue of blocking notices. The banner shows the oldest one until it is
/// dismissed.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub pending: Vec<Notice>,
}

impl Notices {
    pub fn dismiss(&mut self) {
        if !self.pending.is_empty() {
            self.pending.remove(0);
        }
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Error => tracing::warn!("{}", message),
        NoticeLevel::Success => tracing::debug!("{}", message),
    }
    notices.write().pending.push(Notice {
        level,
        message: message.to_string(),
    });
}

/// Ask the user to confirm a destructive action. Always confirms off the web.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("auto-confirming: {}", message);
        true
    }
}

/// Provides the notice queue and renders the banner above `children`.
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let notices = use_signal(Notices::default);
    use_context_provider(|| notices);

    rsx! {
        {children}
        NoticeBanner {}
    }
}

#[component]
fn NoticeBanner() -> Element {
    let mut notices = use_notices();

    let Some(notice) = notices().pending.first().cloned() else {
        return rsx! {};
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| notices.write().dismiss(),
            div {
                class: match notice.level {
                    NoticeLevel::Error => "notice notice-error",
                    NoticeLevel::Success => "notice notice-success",
                },
                role: "alertdialog",
                p { "{notice.message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| notices.write().dismiss(),
                        "OK"
                    }
                }
            }
        }
    }
}
