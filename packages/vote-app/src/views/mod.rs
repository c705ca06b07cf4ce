//! Page components, one per route, plus the shared navigation bar.

mod about;
mod home;
mod nav;
mod not_found;
mod vote;

pub use about::About;
pub use home::Home;
pub use nav::Nav;
pub use not_found::NotFound;
pub use vote::Vote;
