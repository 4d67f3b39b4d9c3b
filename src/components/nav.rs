//! Navigation Component
//!
//! Header navigation bar with brand, page links and the search box.

use leptos::*;
use leptos_router::*;

use crate::router::Page;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <A href=Page::Home.path() class="navbar-brand">"Quiz Master"</A>
                <div class="collapse navbar-collapse show">
                    // Navigation links
                    <ul class="navbar-nav me-auto mb-2 mb-lg-0">
                        <NavLink page=Page::Home label="Home" />
                        <NavLink page=Page::Login label="Login" />
                        <NavLink page=Page::Register label="Register" />
                    </ul>

                    <div class="d-flex" role="search">
                        <input
                            class="form-control me-2"
                            type="search"
                            placeholder="Search"
                            aria-label="Search"
                        />
                        <button class="btn btn-outline-success" type="button">"Search"</button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    page: Page,
    label: &'static str,
) -> impl IntoView {
    view! {
        <li class="nav-item">
            <A href=page.path() class="nav-link" active_class="active">
                {label}
            </A>
        </li>
    }
}
