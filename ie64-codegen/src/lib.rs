//! IE32 to IE64 Converter - IE64 Instruction Model
//!
//! This crate describes the subset of IE64 assembly the converter produces:
//!
//! - The IE64 register file, including the two scratch registers
//! - Operation size suffixes (`.l` / `.q`)
//! - Typed instructions that render to IE64 assembly text
//! - Emission of indented output lines

pub mod asm;
pub mod emit;

pub use asm::{AluOp, AsmInst, Cond, MemRef, Reg, Size, Src};
pub use emit::emit_instructions;
