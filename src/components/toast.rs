//! Toast Notification Component
//!
//! Shows the app-wide success and error messages.

use leptos::*;

use crate::state::use_app_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            // Success toast
            {move || {
                state.success.message.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            // Error toast
            {move || {
                state.error.message.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (icon, bg_class) = match variant {
        ToastVariant::Success => ("✓", "text-bg-success"),
        ToastVariant::Error => ("✕", "text-bg-danger"),
    };

    view! {
        <div class=format!("toast show align-items-center border-0 {}", bg_class) role="alert">
            <div class="d-flex">
                <div class="toast-body">
                    <span class="me-2">{icon}</span>
                    {message}
                </div>
            </div>
        </div>
    }
}
