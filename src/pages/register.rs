//! Register Page
//!
//! Account creation form. Registration does not log the user in; they sign
//! in separately afterwards.

use leptos::*;
use leptos_router::*;

use crate::api::{ApiResponse, MessageResponse, Registration};
use crate::error::AppResult;
use crate::router::Page;
use crate::state::use_app_state;

/// Turn a `POST /register` response into the message to show the user
pub(crate) fn registration_message(response: ApiResponse) -> AppResult<String> {
    let response = response.error_for_status()?;
    let body: MessageResponse = response.json().unwrap_or_default();
    Ok(body
        .message
        .unwrap_or_else(|| "Registration successful".to_string()))
}

/// Register page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_app_state();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let register = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let registration = Registration {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let state = state.clone();

        spawn_local(async move {
            let outcome = state
                .api
                .register(&registration)
                .await
                .and_then(registration_message);

            match outcome {
                Ok(message) => {
                    tracing::info!(email = %registration.email, "Register successful: {}", message);
                    state.show_success(&message);
                }
                Err(e) => {
                    tracing::warn!(email = %registration.email, "Register failed: {}", e);
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
                    <h3 class="pb-3">"Register"</h3>
                    <form on:submit=register>
                        <div class="mb-3">
                            <label for="register-name" class="form-label">"Full Name"</label>
                            <input
                                id="register-name"
                                type="text"
                                class="form-control"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <label for="register-email" class="form-label">"Email"</label>
                            <input
                                id="register-email"
                                type="email"
                                class="form-control"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <label for="register-password" class="form-label">"Password"</label>
                            <input
                                id="register-password"
                                type="password"
                                class="form-control"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="pb-2">
                            <button
                                type="submit"
                                class="btn btn-dark w-100 fw-bold mt-2"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Registering..." } else { "Register" }}
                            </button>
                        </div>
                    </form>

                    <div class="sideline">"OR"</div>
                    <div class="text-center">
                        <h6>"Already have an account?"</h6>
                        <A href=Page::Login.path() class="btn btn-primary w-100 fw-bold mt-2">
                            "Login"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_success_uses_server_message() {
        let response = ApiResponse::new(200, r#"{"message":"User created successfully"}"#);
        assert_eq!(registration_message(response).unwrap(), "User created successfully");
    }

    #[test]
    fn test_success_with_unexpected_body() {
        let response = ApiResponse::new(201, r#"{"id": 12, "name": "Ada"}"#);
        assert_eq!(registration_message(response).unwrap(), "Registration successful");

        let response = ApiResponse::new(200, "");
        assert_eq!(registration_message(response).unwrap(), "Registration successful");
    }

    #[test]
    fn test_duplicate_email_is_an_error() {
        let response = ApiResponse::new(400, r#"{"message":"Email already exists"}"#);
        assert_eq!(
            registration_message(response).unwrap_err(),
            AppError::Http {
                status: 400,
                message: "Email already exists".to_string()
            }
        );
    }
}
