//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Navbar, Toast};
use crate::config::Config;
use crate::router::PageOutlet;
use crate::state::provide_app_state;

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    // Provide global state to all components; restores any persisted session
    provide_app_state(&config);

    view! {
        <Router>
            <div class="min-vh-100 d-flex flex-column">
                <Navbar />

                <main class="flex-grow-1">
                    <Routes>
                        <Route path="/*any" view=PageOutlet />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}
