//! This crate contains all shared UI for the workspace.
//!
//! Views never navigate on their own: each takes an `on_navigate:
//! EventHandler<Page>` and the platform crate maps the [`store::Page`] onto its
//! router.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod forms;

mod persist;
pub use persist::make_session_store;

pub mod views;

pub const HUB_CSS: Asset = asset!("/assets/projecthub.css");

mod navbar;
pub use navbar::NavBar;

mod session;
pub use session::{use_config, use_session, SessionHandle, SessionProvider, SessionState};

pub mod notice;
pub use notice::{confirm, notify, use_notices, NoticeLevel, NoticeProvider, Notices};
