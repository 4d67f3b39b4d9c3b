//! Browser tests for the `sessionStorage`-backed session store and the
//! rendered subject grid.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use leptos::*;
use quizmaster_ui::api::Subject;
use quizmaster_ui::components::SubjectGrid;
use quizmaster_ui::state::session::{BrowserSessionStorage, SessionStorage, UserId};
use quizmaster_ui::{Session, SessionStore};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "quizmaster_test_user";

fn browser_storage() -> Rc<BrowserSessionStorage> {
    Rc::new(BrowserSessionStorage::open().expect("sessionStorage available"))
}

#[wasm_bindgen_test]
fn restores_session_from_session_storage() {
    let storage = browser_storage();
    storage
        .set_item(KEY, r#"{"token":"abc","email":"s@x.io","role":"student","id":7}"#)
        .unwrap();

    let mut store = SessionStore::new(storage.clone(), KEY);
    assert!(store.set_user());
    assert_eq!(store.session().auth_token.as_deref(), Some("abc"));
    assert_eq!(store.session().user_id, Some(UserId::from(7)));

    store.logout();
    assert_eq!(store.session(), &Session::default());
    assert_eq!(storage.get_item(KEY).unwrap(), None);
}

#[wasm_bindgen_test]
fn malformed_record_is_ignored() {
    let storage = browser_storage();
    storage.set_item(KEY, "{broken").unwrap();

    let mut store = SessionStore::new(storage.clone(), KEY);
    assert!(!store.set_user());
    assert!(!store.session().is_logged_in);

    storage.remove_item(KEY).unwrap();
}

const SUBJECTS: &str = r#"[
    {"id": 1, "name": "Physics", "description": "Mechanics", "image_url": "/p.png",
     "chapters": [{"id": 1, "name": "Motion"}, {"id": 2, "name": "Energy"}]},
    {"id": 2, "name": "Maths", "description": null, "image_url": null, "chapters": []},
    {"id": 3, "name": "Biology", "description": "Cells", "image_url": "/b.png",
     "chapters": [{"id": 5, "name": "Genetics"}]}
]"#;

/// Mount a grid into a fresh container and return the container
fn mount_grid(subjects: Vec<Subject>) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let subjects = create_rw_signal(subjects);
    mount_to(container.clone(), move || view! { <SubjectGrid subjects=subjects /> });
    container
}

fn footers(container: &web_sys::HtmlElement) -> Vec<String> {
    let nodes = container.query_selector_all(".card-footer").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

#[wasm_bindgen_test]
fn renders_one_card_per_subject() {
    let subjects: Vec<Subject> = serde_json::from_str(SUBJECTS).unwrap();
    let container = mount_grid(subjects);

    assert_eq!(container.query_selector_all(".card").unwrap().length(), 3);
    assert_eq!(
        footers(&container),
        vec!["Chapters: 2", "Chapters: 0", "Chapters: 1"]
    );

    container.remove();
}

#[wasm_bindgen_test]
fn empty_collection_renders_no_cards() {
    let container = mount_grid(Vec::new());

    assert_eq!(container.query_selector_all(".card").unwrap().length(), 0);

    container.remove();
}
