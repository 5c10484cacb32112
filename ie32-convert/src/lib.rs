//! IE32 to IE64 assembly conversion
//!
//! Converts IE32 assembly source into IE64 assembly text, one line at a
//! time. Directives are renamed, instructions are lowered to one or more IE64
//! instructions, and anything that cannot be converted is annotated inline
//! rather than aborting the run.
//!
//! ```
//! use ie32_convert::{Converter, ConverterOptions};
//!
//! let mut converter = Converter::new(ConverterOptions {
//!     emit_header: false,
//!     ..Default::default()
//! });
//! assert_eq!(converter.convert_source("    LDA #42"), "    move.l r1, #42");
//! assert_eq!(converter.error_count(), 0);
//! ```

pub mod converter;
pub mod directive;
pub mod error;
pub mod lower;
pub mod operand;
pub mod registers;
pub mod source;

pub use converter::{Converter, ConverterOptions, HEADER};
pub use directive::Directive;
pub use error::ConvertError;
pub use lower::{Lowerer, Mnemonic};
pub use operand::{
    classify_operand, classify_with_registers, split_operands, Address, Operand, OperandKind,
};
pub use registers::{is_register, map_register, SourceReg};
pub use source::{classify_line, split_comment, LineKind, SourceLine};

// Re-export for callers configuring a session
pub use ie64_codegen::Size;

/// Convert a whole IE32 source text with the given options.
///
/// Returns the converted text and the number of instructions that could not
/// be converted.
pub fn convert(source: &str, options: ConverterOptions) -> (String, usize) {
    let mut converter = Converter::new(options);
    let output = converter.convert_source(source);
    (output, converter.error_count())
}
