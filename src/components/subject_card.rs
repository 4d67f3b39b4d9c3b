//! Subject Card Component
//!
//! Displays one subject with its image, description and chapter count, and
//! the grid the dashboard lays the cards out in.

use leptos::*;

use crate::api::{Chapter, Subject};

/// Image shown when a subject has none
const PLACEHOLDER_IMAGE: &str = "/static/media/subject-placeholder.png";

/// Display data for one card, derived from its props
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub name: String,
    pub description: String,
    pub image: String,
    pub chapter_count: usize,
}

impl CardContent {
    pub fn new(name: &str, description: &str, image: &str, chapters: &[Chapter]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image: if image.is_empty() {
                PLACEHOLDER_IMAGE.to_string()
            } else {
                image.to_string()
            },
            chapter_count: chapters.len(),
        }
    }
}

/// Subject card component
#[component]
pub fn SubjectCard(
    #[prop(into)]
    name: String,
    #[prop(into)]
    description: String,
    #[prop(into)]
    image: String,
    chapters: Vec<Chapter>,
) -> impl IntoView {
    let card = CardContent::new(&name, &description, &image, &chapters);

    view! {
        <div class="card h-100" style="margin: 5px;">
            <img src=card.image class="card-img-top" alt=card.name.clone() />
            <div class="card-header text-center">{card.name.clone()}</div>
            <div class="card-body">
                <h6 class="card-text">{card.description}</h6>
            </div>
            <div class="card-footer text-body-secondary">
                {format!("Chapters: {}", card.chapter_count)}
            </div>
        </div>
    }
}

/// One card per subject, keyed by subject id
#[component]
pub fn SubjectGrid(#[prop(into)] subjects: Signal<Vec<Subject>>) -> impl IntoView {
    view! {
        <div class="row justify-content-start">
            <For
                each=move || subjects.get()
                key=|subject| subject.id
                children=move |subject| view! {
                    <div class="col-12 col-sm-6 col-md-4 col-lg-3 p-2">
                        <SubjectCard
                            name=subject.name
                            description=subject.description.unwrap_or_default()
                            image=subject.image_url.unwrap_or_default()
                            chapters=subject.chapters
                        />
                    </div>
                }
            />
        </div>
    }
}
