//! IE32 operand classification
//!
//! Classification happens in two stages. The first looks only at the
//! addressing-mode prefix. The second is applied by callers whose grammar
//! allows a register, and refines a bare token that names an IE32 register.
//! Store destinations never allow a register and parse as an [`Address`].

use crate::error::ConvertError;
use crate::registers::{is_register, map_register};
use ie64_codegen::{MemRef, Reg};

/// IE32 addressing modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// `#value`
    Immediate,
    /// `@address`
    DirectMemory,
    /// `[reg]` or `[reg+offset]`
    RegisterIndirect,
    /// bare register name
    Register,
    /// bare number, equate or label
    Bare,
}

/// Prefix-only classification; never yields `Register`.
pub fn classify_operand(op: &str) -> OperandKind {
    let op = op.trim();
    if op.starts_with('#') {
        OperandKind::Immediate
    } else if op.starts_with('@') {
        OperandKind::DirectMemory
    } else if op.starts_with('[') {
        OperandKind::RegisterIndirect
    } else {
        OperandKind::Bare
    }
}

/// Classification for positions where a register is grammatical.
pub fn classify_with_registers(op: &str) -> OperandKind {
    match classify_operand(op) {
        OperandKind::Bare if is_register(op.trim()) => OperandKind::Register,
        kind => kind,
    }
}

/// A classified operand with its payload extracted.
///
/// Expression text (immediates, addresses, offsets) is carried through
/// unevaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<'a> {
    /// Value text after the `#` marker
    Immediate(&'a str),
    /// Address text after the `@` marker
    Direct(&'a str),
    Indirect(MemRef),
    Register(Reg),
    Bare(&'a str),
}

impl<'a> Operand<'a> {
    /// Parse an operand where a bare register name means the register.
    pub fn parse(op: &'a str) -> Result<Self, ConvertError> {
        let op = op.trim();
        match classify_with_registers(op) {
            OperandKind::Register => Ok(Operand::Register(map_register(op)?)),
            _ => Address::parse(op).map(Operand::from),
        }
    }

    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Immediate(_) => OperandKind::Immediate,
            Operand::Direct(_) => OperandKind::DirectMemory,
            Operand::Indirect(_) => OperandKind::RegisterIndirect,
            Operand::Register(_) => OperandKind::Register,
            Operand::Bare(_) => OperandKind::Bare,
        }
    }
}

/// An operand in a position where registers are not grammatical, such as a
/// store destination. A bare register name here is just a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address<'a> {
    Immediate(&'a str),
    Direct(&'a str),
    Indirect(MemRef),
    Bare(&'a str),
}

impl<'a> Address<'a> {
    pub fn parse(op: &'a str) -> Result<Self, ConvertError> {
        let op = op.trim();
        Ok(match classify_operand(op) {
            OperandKind::Immediate => Address::Immediate(&op[1..]),
            OperandKind::DirectMemory => Address::Direct(op[1..].trim()),
            OperandKind::RegisterIndirect => Address::Indirect(parse_indirect(op)?),
            OperandKind::Register | OperandKind::Bare => Address::Bare(op),
        })
    }
}

impl<'a> From<Address<'a>> for Operand<'a> {
    fn from(address: Address<'a>) -> Self {
        match address {
            Address::Immediate(value) => Operand::Immediate(value),
            Address::Direct(addr) => Operand::Direct(addr),
            Address::Indirect(mem) => Operand::Indirect(mem),
            Address::Bare(text) => Operand::Bare(text),
        }
    }
}

/// Parse `[REG]` or `[REG+offset]` into an IE64 memory reference.
fn parse_indirect(op: &str) -> Result<MemRef, ConvertError> {
    let inner = op.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner).trim();

    match inner.split_once('+') {
        Some((reg, offset)) => Ok(MemRef::with_offset(map_register(reg.trim())?, offset.trim())),
        None => Ok(MemRef::new(map_register(inner)?)),
    }
}

/// Split an operand list on top-level commas.
///
/// Commas inside `[...]` or `(...)` do not separate operands. Empty text
/// yields no operands.
pub fn split_operands(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());

    parts
}
