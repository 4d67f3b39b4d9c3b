//! Home Page

use leptos::*;
use leptos_router::*;

use crate::router::Page;

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="d-flex justify-content-center align-items-center vh-100">
                <div class="hero-panel text-center">
                    <h1>"Welcome to Quiz Master"</h1>
                    <p>"Login to view latest updates."</p>
                    <A href=Page::Login.path() class="btn btn-primary mt-2">"Login"</A>
                </div>
            </div>
        </div>
    }
}
