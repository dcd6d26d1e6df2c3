//! # Access policy: route guard, role router and navigation composer
//!
//! Everything the client decides about "who may see what" lives here as plain
//! functions over a [`Session`], so the Dioxus layer only has to act on the
//! answer.
//!
//! The single source of truth is [`Role::pages`], the role → reachable pages
//! table. The guard ([`authorize`]) and the navigation composer
//! ([`nav_links`]) both read it, which keeps a link visible exactly when its
//! route would be granted.
//!
//! The decisions are advisory: the API is expected to enforce the same rules.

use crate::models::{Role, Session};

/// Every top-level page of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Users,
    Projects,
    Tasks,
}

/// What a page demands of the session before it renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Reachable without signing in.
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed in, and the role's page table must list the page.
    Restricted,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::Users,
        Page::Projects,
        Page::Tasks,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Dashboard => "/",
            Page::Users => "/users",
            Page::Projects => "/projects",
            Page::Tasks => "/tasks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Login => "Sign In",
            Page::Register => "Register",
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Projects => "Projects",
            Page::Tasks => "Tasks",
        }
    }

    pub fn requirement(&self) -> Requirement {
        match self {
            Page::Login | Page::Register => Requirement::Public,
            Page::Dashboard => Requirement::Authenticated,
            Page::Users | Page::Projects | Page::Tasks => Requirement::Restricted,
        }
    }
}

const STAFF_PAGES: &[Page] = &[Page::Dashboard, Page::Users, Page::Projects, Page::Tasks];
const DEVELOPER_PAGES: &[Page] = &[Page::Dashboard];

impl Role {
    /// Pages this role may open, in navigation order.
    pub fn pages(&self) -> &'static [Page] {
        match self {
            Role::Admin | Role::Manager => STAFF_PAGES,
            Role::Developer => DEVELOPER_PAGES,
        }
    }

    pub fn can_open(&self, page: Page) -> bool {
        self.pages().contains(&page)
    }
}

/// Outcome of the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Page),
}

/// Route guard: decide whether `page` may render for `session`.
///
/// No token sends the user to the login page; a token whose role does not
/// allow a restricted page sends them to the dashboard.
pub fn authorize(page: Page, session: &Session) -> Access {
    match page.requirement() {
        Requirement::Public => Access::Granted,
        _ if !session.is_authenticated() => Access::Redirect(Page::Login),
        Requirement::Authenticated => Access::Granted,
        Requirement::Restricted => match session.role() {
            Some(role) if role.can_open(page) => Access::Granted,
            _ => Access::Redirect(Page::Dashboard),
        },
    }
}

/// Who is looking at the dashboard. Selects the dashboard variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewer {
    Admin,
    Manager,
    Developer,
    Unauthenticated,
}

impl Viewer {
    /// Role router. A token without a readable role is treated as signed out.
    pub fn of(session: &Session) -> Viewer {
        if !session.is_authenticated() {
            return Viewer::Unauthenticated;
        }
        match session.role() {
            Some(Role::Admin) => Viewer::Admin,
            Some(Role::Manager) => Viewer::Manager,
            Some(Role::Developer) => Viewer::Developer,
            None => Viewer::Unauthenticated,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Viewer::Admin => Some(Role::Admin),
            Viewer::Manager => Some(Role::Manager),
            Viewer::Developer => Some(Role::Developer),
            Viewer::Unauthenticated => None,
        }
    }
}

/// Where the login page sends a visitor who already holds a session.
///
/// Only a session the role router accepts leaves the login page. A token with
/// a missing or unreadable user stays put, since the dashboard would send it
/// straight back.
pub fn login_redirect(session: &Session) -> Option<Page> {
    (Viewer::of(session) != Viewer::Unauthenticated).then_some(Page::Dashboard)
}

/// A navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub label: &'static str,
    pub path: &'static str,
}

impl From<Page> for NavLink {
    fn from(page: Page) -> Self {
        Self {
            page,
            label: page.label(),
            path: page.path(),
        }
    }
}

/// Navigation composer. Dashboard is always present; everything else comes
/// from the role's page table.
pub fn nav_links(viewer: Viewer) -> Vec<NavLink> {
    let pages = viewer.role().map_or(DEVELOPER_PAGES, |role| role.pages());
    pages.iter().copied().map(NavLink::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;
    use proptest::prelude::*;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: 42,
            name: "Sam Doe".to_string(),
            email: "sam@example.com".to_string(),
            role,
            created_at: None,
        }
    }

    fn signed_in(role: Role) -> Session {
        Session::new("token-abc".to_string(), user(role))
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop_oneof![Just(Role::Admin), Just(Role::Manager), Just(Role::Developer)]
    }

    fn guarded_page() -> impl Strategy<Value = Page> {
        prop_oneof![
            Just(Page::Dashboard),
            Just(Page::Users),
            Just(Page::Projects),
            Just(Page::Tasks)
        ]
    }

    proptest! {
        #[test]
        fn no_token_always_redirects_to_login(
            page in guarded_page(),
            role in proptest::option::of(any_role()),
        ) {
            let session = Session { token: None, user: role.map(user) };
            prop_assert_eq!(authorize(page, &session), Access::Redirect(Page::Login));
        }

        #[test]
        fn nav_link_shown_iff_route_granted(role in any_role(), page in guarded_page()) {
            let session = signed_in(role);
            let shown = nav_links(Viewer::of(&session)).iter().any(|l| l.page == page);
            prop_assert_eq!(shown, authorize(page, &session) == Access::Granted);
        }

        #[test]
        fn login_and_dashboard_never_bounce(
            token in proptest::option::of("[a-z]{0,8}"),
            role in proptest::option::of(any_role()),
        ) {
            let session = Session { token, user: role.map(user) };
            let dashboard_sends_to_login = authorize(Page::Dashboard, &session) == Access::Granted
                && Viewer::of(&session) == Viewer::Unauthenticated;
            prop_assert!(!(dashboard_sends_to_login && login_redirect(&session).is_some()));
        }

        #[test]
        fn public_pages_always_granted(
            token in proptest::option::of("[a-z]{0,8}"),
            role in proptest::option::of(any_role()),
        ) {
            let session = Session { token, user: role.map(user) };
            prop_assert_eq!(authorize(Page::Login, &session), Access::Granted);
            prop_assert_eq!(authorize(Page::Register, &session), Access::Granted);
        }
    }

    #[test]
    fn test_developer_redirected_from_restricted_pages() {
        let session = signed_in(Role::Developer);
        assert_eq!(authorize(Page::Dashboard, &session), Access::Granted);
        for page in [Page::Users, Page::Projects, Page::Tasks] {
            assert_eq!(authorize(page, &session), Access::Redirect(Page::Dashboard));
        }
    }

    #[test]
    fn test_staff_reach_every_page() {
        for role in [Role::Admin, Role::Manager] {
            let session = signed_in(role);
            for page in Page::ALL {
                assert_eq!(authorize(page, &session), Access::Granted, "{role} -> {page:?}");
            }
        }
    }

    #[test]
    fn test_token_without_user_cannot_open_restricted_pages() {
        let session = Session {
            token: Some("t".to_string()),
            user: None,
        };
        assert_eq!(authorize(Page::Dashboard, &session), Access::Granted);
        assert_eq!(authorize(Page::Users, &session), Access::Redirect(Page::Dashboard));
        // ...and the dashboard then sends them to login, where they stay.
        assert_eq!(Viewer::of(&session), Viewer::Unauthenticated);
        assert_eq!(login_redirect(&session), None);
    }

    #[test]
    fn test_role_router() {
        assert_eq!(Viewer::of(&signed_in(Role::Admin)), Viewer::Admin);
        assert_eq!(Viewer::of(&signed_in(Role::Manager)), Viewer::Manager);
        assert_eq!(Viewer::of(&signed_in(Role::Developer)), Viewer::Developer);
        assert_eq!(Viewer::of(&Session::default()), Viewer::Unauthenticated);
    }

    #[test]
    fn test_signed_in_user_leaves_login() {
        for role in [Role::Admin, Role::Manager, Role::Developer] {
            assert_eq!(login_redirect(&signed_in(role)), Some(Page::Dashboard));
        }
        assert_eq!(login_redirect(&Session::default()), None);
    }

    #[test]
    fn test_nav_links_by_role() {
        let labels = |viewer| -> Vec<&'static str> { nav_links(viewer).iter().map(|l| l.label).collect() };
        assert_eq!(labels(Viewer::Developer), vec!["Dashboard"]);
        assert_eq!(labels(Viewer::Manager), vec!["Dashboard", "Users", "Projects", "Tasks"]);
        assert_eq!(labels(Viewer::Admin), vec!["Dashboard", "Users", "Projects", "Tasks"]);
        assert_eq!(labels(Viewer::Unauthenticated), vec!["Dashboard"]);
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<&str> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }
}
