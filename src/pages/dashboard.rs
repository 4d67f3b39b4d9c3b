//! Dashboard Page
//!
//! Lists the subjects available to the logged-in user. The list is fetched on
//! every mount and dropped when the page is left.

use leptos::*;

use crate::api::{ApiResponse, Subject};
use crate::components::{Loading, SubjectGrid};
use crate::error::AppResult;
use crate::router::{use_page_navigate, Page};
use crate::state::use_app_state;

/// Decode a `GET /api/subjects` response.
///
/// The server answers 404 rather than `[]` when no subject exists yet.
pub(crate) fn parse_subjects(response: ApiResponse) -> AppResult<Vec<Subject>> {
    if response.status == 404 {
        return Ok(Vec::new());
    }
    response.error_for_status()?.json()
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_page_navigate();

    let subjects = create_rw_signal(Vec::<Subject>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    // Fetch subjects on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            loading.set(true);

            let token = state.auth_token();
            let result = state
                .api
                .fetch_subjects(token.as_deref())
                .await
                .and_then(parse_subjects);

            match result {
                Ok(list) => {
                    tracing::debug!(count = list.len(), "Fetched subjects");
                    error.set(None);
                    subjects.set(list);
                }
                Err(e) => {
                    tracing::error!("Failed to fetch subjects: {}", e);
                    let message = if e.is_unauthorized() {
                        "Your session is not valid. Please log in again.".to_string()
                    } else {
                        e.to_string()
                    };
                    error.set(Some(message.clone()));
                    state.show_error(&message);
                }
            }

            loading.set(false);
        });
    });

    let state_for_logout = state.clone();
    let logout = move |_: ev::MouseEvent| {
        state_for_logout.logout();
        navigate(Page::Login);
    };

    view! {
        <div class="container mt-4">
            <div class="d-flex align-items-center justify-content-between">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="text-body-secondary mb-0">
                        {move || {
                            let session = state.session();
                            match (session.is_logged_in, session.role) {
                                (true, Some(role)) => format!("Signed in as {}", role),
                                (true, None) => "Signed in".to_string(),
                                (false, _) => "Not signed in".to_string(),
                            }
                        }}
                    </p>
                </div>
                <button class="btn btn-outline-dark" on:click=logout>"Logout"</button>
            </div>

            <h3 class="mt-4">"Subjects"</h3>

            {move || {
                if loading.get() {
                    view! { <Loading label="Loading subjects..." /> }.into_view()
                } else if let Some(msg) = error.get() {
                    view! {
                        <div class="alert alert-warning" role="alert">{msg}</div>
                    }.into_view()
                } else if subjects.with(|list| list.is_empty()) {
                    view! {
                        <p class="text-body-secondary">"No subjects available yet."</p>
                    }.into_view()
                } else {
                    view! { <SubjectGrid subjects=subjects /> }.into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBJECTS: &str = r#"[
        {"id": 1, "name": "Physics", "description": "Mechanics", "image_url": "/p.png",
         "chapters": [{"id": 1, "name": "Motion"}, {"id": 2, "name": "Energy"}]},
        {"id": 2, "name": "Maths", "description": null, "image_url": "/m.png", "chapters": []},
        {"id": 3, "name": "Biology", "description": "Cells", "image_url": "/b.png",
         "chapters": [{"id": 5, "name": "Genetics", "quizzes": [{"id": 9}]}]}
    ]"#;

    #[test]
    fn test_subjects_decode_with_chapters() {
        let subjects = parse_subjects(ApiResponse::new(200, SUBJECTS)).unwrap();

        let ids: Vec<u64> = subjects.iter().map(|subject| subject.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let counts: Vec<usize> = subjects.iter().map(|subject| subject.chapters.len()).collect();
        assert_eq!(counts, vec![2, 0, 1]);
        assert_eq!(subjects[1].description, None);
    }

    #[test]
    fn test_empty_collection_renders_no_cards() {
        let subjects = parse_subjects(ApiResponse::new(200, "[]")).unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn test_unauthorized_response_is_an_error() {
        let err = parse_subjects(ApiResponse::new(401, r#"{"meta":{"code":401}}"#)).unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_not_found_means_no_subjects() {
        let subjects =
            parse_subjects(ApiResponse::new(404, r#"{"message":"No subjects found"}"#)).unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn test_server_error_keeps_message() {
        let err = parse_subjects(ApiResponse::new(500, r#"{"message":"Database offline"}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "Database offline");
    }
}
