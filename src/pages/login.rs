//! Login Page
//!
//! Credential form. A successful login persists the server's record in
//! session storage, re-derives the session from it and opens the dashboard.

use leptos::*;
use leptos_router::*;

use crate::api::{ApiResponse, Credentials};
use crate::error::{AppError, AppResult};
use crate::router::{use_page_navigate, Page};
use crate::state::{use_app_state, SessionRecord, SessionStore};

/// Apply a `POST /login` response to the store, returning the page to open.
///
/// Non-2xx responses and bodies without a token leave the store untouched.
pub(crate) fn apply_login_response(
    store: &mut SessionStore,
    response: ApiResponse,
) -> AppResult<Page> {
    let response = response.error_for_status()?;
    let (_, serialized) = SessionRecord::from_json(&response.body)?;
    store.persist_login(&serialized)?;
    Ok(Page::Dashboard)
}

/// Apply the outcome of a login request to the shared store
pub(crate) fn finish_login(
    store: RwSignal<SessionStore>,
    result: AppResult<ApiResponse>,
) -> AppResult<Page> {
    result.and_then(|response| {
        store
            .try_update(|store| apply_login_response(store, response))
            .unwrap_or_else(|| Err(AppError::Storage("session store unavailable".to_string())))
    })
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_page_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let login = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let state = state.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            let outcome = finish_login(state.store, state.api.login(&credentials).await);

            match outcome {
                Ok(page) => {
                    tracing::info!(email = %credentials.email, "Login successful");
                    navigate(page);
                }
                Err(e) => {
                    tracing::warn!(email = %credentials.email, "Login failed: {}", e);
                    set_error.set(Some(e.to_string()));
                    state.show_error(&e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero">
            <div class="d-flex align-items-center vh-100 mx-5">
                <div class="hero-panel text-center w-100" style="max-width: 800px;">
                    <h3 class="pb-3">"Login"</h3>
                    <form on:submit=login>
                        <div class="mb-3">
                            <label for="login-email" class="form-label">"Email"</label>
                            <input
                                id="login-email"
                                type="email"
                                class="form-control"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <label for="login-password" class="form-label">"Password"</label>
                            <input
                                id="login-password"
                                type="password"
                                class="form-control"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>

                        {move || error.get().map(|msg| view! {
                            <div class="alert alert-danger py-2" role="alert">{msg}</div>
                        })}

                        <div class="pb-2">
                            <button
                                type="submit"
                                class="btn btn-dark w-100 fw-bold mt-2"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Logging in..." } else { "Login" }}
                            </button>
                        </div>
                    </form>

                    <div class="sideline">"OR"</div>
                    <div class="text-center">
                        <h6>"Don't have an account?"</h6>
                        <A href=Page::Register.path() class="btn btn-primary w-100 fw-bold mt-2">
                            "Register"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
