//! UI Components
//!
//! Reusable presentational components.

pub mod loading;
pub mod nav;
pub mod subject_card;
pub mod toast;

pub use loading::Loading;
pub use nav::Navbar;
pub use subject_card::{CardContent, SubjectCard, SubjectGrid};
pub use toast::Toast;
