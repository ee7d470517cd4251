//! Expansion of `$(name arg)` placeholders in build-rule attribute values.
//!
//! Attribute values such as command strings can reference dynamic values
//! (output paths and the like) symbolically. A [`LocationExpander`] scans the
//! value once, left to right, and hands each recognized placeholder's
//! argument to the function registered under its name.
//!
//! ```
//! use locx_diagnostics::DiagnosticEngine;
//! use locx_expander::{FunctionRegistry, LocationExpander};
//!
//! let functions = FunctionRegistry::builder()
//!     .function("location", |label| format!("bazel-out/bin/{}", label))
//!     .build();
//!
//! let mut diagnostics = DiagnosticEngine::new();
//! let mut expander = LocationExpander::new(&mut diagnostics, functions);
//!
//! assert_eq!(
//!     expander.expand("cp $(location data.txt) $$OUT"),
//!     "cp bazel-out/bin/data.txt $OUT"
//! );
//! ```
//!
//! Unknown names are passed through verbatim. A `$(` without a closing `)`
//! aborts the whole expansion: the input is returned unchanged and a single
//! `unterminated $(location) expression` error is reported.

pub mod error;
pub mod expander;
pub mod registry;
pub mod scanner;

pub use error::ExpandError;
pub use expander::LocationExpander;
pub use registry::{ExpansionFn, FunctionRegistry, RegistryBuilder};
pub use scanner::{placeholders, scan, Placeholder, Segment};

/// Message reported for an unterminated placeholder
pub const UNTERMINATED_MESSAGE: &str = "unterminated $(location) expression";
