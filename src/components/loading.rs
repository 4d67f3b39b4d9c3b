//! Loading Component

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="d-flex justify-content-center py-5">
            <div class="spinner-border" role="status">
                <span class="visually-hidden">{label}</span>
            </div>
        </div>
    }
}
