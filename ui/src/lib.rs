//! Shared UI crate for Vitrine. Content model, behavioral state, and the
//! section components both pages compose live here.

pub mod content;
pub mod core;
pub mod hooks;
pub mod views;

pub mod components {
    pub mod carousel;
    pub mod navbar;
    pub mod section;

    pub use carousel::HeroCarousel;
    pub use navbar::Navbar;
    pub use section::{SectionDivider, SectionHeader};
}
