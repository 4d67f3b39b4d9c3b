//! Pages
//!
//! Top-level page components, one per registered route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
