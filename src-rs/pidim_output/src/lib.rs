//! Presentation of pidim dimensional matrices
//!
//! This crate renders [`pidim_core::DimensionalMatrix`] values as text
//! tables or LaTeX arrays and prints errors and advisories to the console.
//! The engine itself never prints; pass a [`ConsoleSink`] wherever it
//! accepts a [`pidim_core::DiagnosticSink`] to see its advisories.

mod color;
mod console;
mod render;
mod stylesheet;

pub use color::ColorChoice;
pub use console::{ConsoleSink, error_to_string, print};
pub use render::{Latex, Render, TextTable, summary};
