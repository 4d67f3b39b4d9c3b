//! API Request and Response Types

use serde::{Deserialize, Serialize};

// ============ Requests ============

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============ Responses ============

/// Generic `{ "message": ... }` body the server uses for status replies
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Subject as returned by `GET /api/subjects`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Subject {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// Chapter nested inside a subject
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Chapter {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quizzes: Vec<serde_json::Value>,
}
