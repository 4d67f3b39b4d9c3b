//! # Quiz Master UI
//!
//! Client-side rendered Leptos application (compiled to WebAssembly) for the
//! Quiz Master service: landing page, login and registration forms, and a
//! dashboard listing the subjects available to the signed-in user.
//!
//! ## Modules
//!
//! - [`router`]: Static route table and the page outlet
//! - [`state`]: Session store synchronized with `sessionStorage`
//! - [`api`]: HTTP client for `/login`, `/register` and `/api/subjects`
//! - [`pages`]: One component per route
//! - [`components`]: Navbar, subject cards, toasts
//! - [`config`], [`logging`], [`error`]: Ambient plumbing

use leptos::*;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod router;
pub mod state;

pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use router::Page;
pub use state::{Session, SessionStore};

/// Configure logging and mount the app to the document body
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = Config::load_default();
    logging::init(&config.logging);
    tracing::debug!(?config, "Loaded configuration");

    mount_to_body(move || view! { <App config=config /> });
}
