//! IE32 to IE64 Converter - Common Types and Diagnostics
//!
//! This crate contains the diagnostic types, configuration errors, and
//! source locations shared by the converter library and its driver.

pub mod error;
pub mod source_loc;

pub use error::{ConfigError, Diagnostic, ErrorReporter, Severity};
pub use source_loc::SourceLocation;
