//! Not Found Page

use leptos::*;
use leptos_router::*;

use crate::router::Page;

/// Shown for any path missing from the route table
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container text-center py-5">
            <h1 class="display-5">"Page Not Found"</h1>
            <p class="text-body-secondary mb-4">"The page you're looking for doesn't exist."</p>
            <A href=Page::Home.path() class="btn btn-dark">"Go Home"</A>
        </div>
    }
}
