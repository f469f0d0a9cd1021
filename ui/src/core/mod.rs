//! Pure behavioral state, kept free of browser types so it unit-tests
//! natively. The components in `components/` own instances of these and
//! feed them events from the browser glue in `hooks`.

pub mod carousel;
pub mod reveal;
pub mod scroll;
