//! Text emission for lowered IE64 instructions

use crate::asm::AsmInst;

/// Render instructions as output lines, each prefixed with `indent`.
pub fn emit_instructions(indent: &str, instructions: &[AsmInst]) -> Vec<String> {
    instructions
        .iter()
        .map(|inst| format!("{}{}", indent, inst))
        .collect()
}
