//! Route Table
//!
//! Static path → page mapping. `leptos_router` owns history and links; which
//! page is mounted for a location is decided here, by exact path match.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Home, Login, NotFound, Register};

/// Routed, full-page views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
}

/// Registered routes, in declaration order
pub const ROUTE_TABLE: &[(&str, Page)] = &[
    ("/", Page::Home),
    ("/login", Page::Login),
    ("/register", Page::Register),
    ("/dashboard", Page::Dashboard),
];

impl Page {
    /// Exact match against [`ROUTE_TABLE`]
    pub fn resolve(path: &str) -> Option<Page> {
        ROUTE_TABLE
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, page)| *page)
    }

    pub fn path(self) -> &'static str {
        ROUTE_TABLE
            .iter()
            .find(|(_, page)| *page == self)
            .map(|(route, _)| *route)
            .unwrap_or("/")
    }

    fn render(self) -> View {
        match self {
            Page::Home => view! { <Home /> }.into_view(),
            Page::Login => view! { <Login /> }.into_view(),
            Page::Register => view! { <Register /> }.into_view(),
            Page::Dashboard => view! { <Dashboard /> }.into_view(),
        }
    }
}

/// Page-level navigation; call during component setup, invoke from handlers
pub fn use_page_navigate() -> impl Fn(Page) + Clone + 'static {
    let navigate = use_navigate();
    move |page: Page| navigate(page.path(), NavigateOptions::default())
}

/// Mounts the page registered for the current location
#[component]
pub fn PageOutlet() -> impl IntoView {
    let location = use_location();
    let page = create_memo(move |_| Page::resolve(&location.pathname.get()));

    move || match page.get() {
        Some(page) => {
            tracing::debug!(?page, "Mounting page");
            page.render()
        }
        None => view! { <NotFound /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve_to_their_page() {
        assert_eq!(Page::resolve("/"), Some(Page::Home));
        assert_eq!(Page::resolve("/login"), Some(Page::Login));
        assert_eq!(Page::resolve("/register"), Some(Page::Register));
        assert_eq!(Page::resolve("/dashboard"), Some(Page::Dashboard));
    }

    #[test]
    fn test_unknown_paths_resolve_to_nothing() {
        for path in ["", "/dashboard/", "/Login", "/login?next=1", "/admin", "dashboard"] {
            assert_eq!(Page::resolve(path), None, "{path:?} should not match");
        }
    }

    #[test]
    fn test_path_round_trips_through_table() {
        for (route, page) in ROUTE_TABLE {
            assert_eq!(page.path(), *route);
            assert_eq!(Page::resolve(route), Some(*page));
        }
    }

    #[test]
    fn test_table_has_no_duplicate_paths() {
        let mut paths: Vec<_> = ROUTE_TABLE.iter().map(|(path, _)| *path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), ROUTE_TABLE.len());
    }
}
