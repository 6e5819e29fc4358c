//! Doc-comment passthrough for the storage diagrams.
//!
//! With the `doc` feature, `svgbob` blocks inside the wrapped doc comments are rendered to
//! SVG. Without it the doc comments are joined back into a string unchanged, so the crate
//! builds with no extra dependencies.

#[cfg(feature = "doc")]
macro_rules! make_svgbobdoc {
    ($($doc:tt)*) => {
        svgbobdoc::transform!($($doc)*)
    };
}

#[cfg(not(feature = "doc"))]
macro_rules! make_svgbobdoc {
    ($( #![doc = $line:literal] )*) => {
        core::concat!($( $line, '\n' ),*)
    };
    ($( #[doc = $line:literal] )*) => {
        core::concat!($( $line, '\n' ),*)
    };
}

pub(crate) use make_svgbobdoc;
