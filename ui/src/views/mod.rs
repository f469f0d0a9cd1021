//! Page compositions, one per route.

mod about;
mod home;

pub use about::About;
pub use home::Home;
