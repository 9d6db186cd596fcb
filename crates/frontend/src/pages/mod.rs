//! Page components.

mod home;
mod projects;

pub use home::HomePage;
pub use projects::ProjectsPage;
