//! Thin route components. Each one maps the shared view's page requests onto
//! the router.

use dioxus::prelude::*;
use store::Page;

use crate::Route;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod users;
pub use users::Users;

mod projects;
pub use projects::Projects;

mod tasks;
pub use tasks::Tasks;

/// Navigation callback that pushes a history entry.
pub(crate) fn push_page() -> impl FnMut(Page) + Copy {
    let nav = use_navigator();
    move |page: Page| {
        nav.push(Route::from(page));
    }
}

/// Navigation callback that replaces the current entry, for auth transitions.
pub(crate) fn replace_page() -> impl FnMut(Page) + Copy {
    let nav = use_navigator();
    move |page: Page| {
        nav.replace(Route::from(page));
    }
}
