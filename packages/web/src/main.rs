use dioxus::prelude::*;

use store::{authorize, Access, HubConfig, Page, Session};
use ui::views::Loading;
use ui::{use_session, NavBar, NoticeProvider, SessionProvider};
use views::{Home, Login, Projects, Register, Tasks, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Protected)]
        #[route("/")]
        Home {},
        #[route("/users")]
        Users {},
        #[route("/projects")]
        Projects {},
        #[route("/tasks")]
        Tasks {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The page this route renders. Unknown paths count as the dashboard.
    fn page(&self) -> Page {
        match self {
            Route::Login {} => Page::Login,
            Route::Register {} => Page::Register,
            Route::Home {} | Route::NotFound { .. } => Page::Dashboard,
            Route::Users {} => Page::Users,
            Route::Projects {} => Page::Projects,
            Route::Tasks {} => Page::Tasks,
        }
    }
}

/// Where the guard sends `route` for `session`, if anywhere.
fn guard(route: &Route, session: &Session) -> Option<Route> {
    match authorize(route.page(), session) {
        Access::Granted => None,
        Access::Redirect(target) => Some(Route::from(target)),
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Route::Login {},
            Page::Register => Route::Register {},
            Page::Dashboard => Route::Home {},
            Page::Users => Route::Users {},
            Page::Projects => Route::Projects {},
            Page::Tasks => Route::Tasks {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

/// Defaults on the web; native builds read `projecthub.toml` from the working
/// directory when it exists.
fn load_config() -> HubConfig {
    #[cfg(target_arch = "wasm32")]
    {
        HubConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = HubConfig::filename();
        let Ok(raw) = std::fs::read_to_string(path) else {
            return HubConfig::default();
        };
        match HubConfig::from_toml(&raw) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path, e);
                HubConfig::default()
            }
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Stylesheet { href: ui::HUB_CSS }

        SessionProvider {
            config,
            NoticeProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Route guard for every page behind the login. Waits for the persisted
/// session, then either redirects or renders the navigation bar and the page.
#[component]
fn Protected() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let page = route.page();

    let state = session.state();
    if state.loading {
        return rsx! { Loading {} };
    }

    if let Some(target) = guard(&route, &state.session) {
        tracing::debug!(?page, %target, "route guard redirect");
        nav.replace(target);
        return rsx! {};
    }

    rsx! {
        NavBar {
            current: page,
            on_navigate: move |target: Page| {
                nav.push(Route::from(target));
            },
        }
        main {
            class: "container",
            Outlet::<Route> {}
        }
    }
}

/// Unknown paths land on the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Role, UserInfo};

    fn signed_in(role: Role) -> Session {
        Session::new(
            "tok".to_string(),
            UserInfo {
                id: 1,
                name: "Robin".to_string(),
                email: "robin@example.com".to_string(),
                role,
                created_at: None,
            },
        )
    }

    #[test]
    fn test_guard_sends_signed_out_visitors_to_login() {
        let session = Session::default();
        for route in [Route::Home {}, Route::Users {}, Route::Projects {}, Route::Tasks {}] {
            assert_eq!(guard(&route, &session), Some(Route::Login {}));
        }
        assert_eq!(guard(&Route::Login {}, &session), None);
        assert_eq!(guard(&Route::Register {}, &session), None);
    }

    #[test]
    fn test_guard_sends_developers_home_from_staff_pages() {
        let session = signed_in(Role::Developer);
        assert_eq!(guard(&Route::Home {}, &session), None);
        for route in [Route::Users {}, Route::Projects {}, Route::Tasks {}] {
            assert_eq!(guard(&route, &session), Some(Route::Home {}));
        }
    }

    #[test]
    fn test_guard_admits_staff() {
        for role in [Role::Admin, Role::Manager] {
            let session = signed_in(role);
            for route in [Route::Home {}, Route::Users {}, Route::Projects {}, Route::Tasks {}] {
                assert_eq!(guard(&route, &session), None);
            }
        }
    }

    #[test]
    fn test_route_paths_match_pages() {
        for page in Page::ALL {
            let route = Route::from(page);
            assert_eq!(route.page(), page);
            assert_eq!(route.to_string(), page.path());
        }
    }

    #[test]
    fn test_unknown_path_is_dashboard() {
        let route = Route::NotFound {
            segments: vec!["nope".to_string()],
        };
        assert_eq!(route.page(), Page::Dashboard);
    }
}
