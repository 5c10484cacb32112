//! IE64 Assembly Instruction Definitions
//!
//! This module defines the part of the IE64 instruction set and register
//! model that converted IE32 programs are lowered into.

use ie_common::ConfigError;
use std::fmt;
use std::str::FromStr;

/// IE64 Register Set
///
/// R1-R16 receive the sixteen IE32 registers. R17 and R18 have no IE32
/// counterpart and are reserved as scratch registers for the lowering of a
/// single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    R1, R2, R3, R4, R5, R6, R7, R8,
    R9, R10, R11, R12, R13, R14, R15, R16,

    // Scratch registers
    R17,
    R18,
}

impl Reg {
    /// Address / fetched-value temporary
    pub const SCRATCH1: Reg = Reg::R17;
    /// Read-modify-write temporary
    pub const SCRATCH2: Reg = Reg::R18;

    pub fn is_scratch(self) -> bool {
        matches!(self, Reg::R17 | Reg::R18)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reg::R1 => write!(f, "r1"),
            Reg::R2 => write!(f, "r2"),
            Reg::R3 => write!(f, "r3"),
            Reg::R4 => write!(f, "r4"),
            Reg::R5 => write!(f, "r5"),
            Reg::R6 => write!(f, "r6"),
            Reg::R7 => write!(f, "r7"),
            Reg::R8 => write!(f, "r8"),
            Reg::R9 => write!(f, "r9"),
            Reg::R10 => write!(f, "r10"),
            Reg::R11 => write!(f, "r11"),
            Reg::R12 => write!(f, "r12"),
            Reg::R13 => write!(f, "r13"),
            Reg::R14 => write!(f, "r14"),
            Reg::R15 => write!(f, "r15"),
            Reg::R16 => write!(f, "r16"),
            Reg::R17 => write!(f, "r17"),
            Reg::R18 => write!(f, "r18"),
        }
    }
}

/// Operation size suffix appended to sized mnemonics.
///
/// Fixed for a whole conversion session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    #[default]
    Long,
    Quad,
}

impl Size {
    pub fn suffix(self) -> &'static str {
        match self {
            Size::Long => ".l",
            Size::Quad => ".q",
        }
    }
}

impl FromStr for Size {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ".l" => Ok(Size::Long),
            ".q" => Ok(Size::Quad),
            _ => Err(ConfigError::InvalidSize(s.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Register-relative memory reference: `(rN)` or `off(rN)`.
///
/// The offset is carried as unevaluated expression text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemRef {
    pub base: Reg,
    pub offset: Option<String>,
}

impl MemRef {
    pub fn new(base: Reg) -> Self {
        Self { base, offset: None }
    }

    pub fn with_offset(base: Reg, offset: impl Into<String>) -> Self {
        Self {
            base,
            offset: Some(offset.into()),
        }
    }
}

impl fmt::Display for MemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.offset {
            Some(offset) => write!(f, "{}({})", offset, self.base),
            None => write!(f, "({})", self.base),
        }
    }
}

/// Value operand: a register or an immediate.
///
/// Immediates hold the expression text without the `#` marker; it is added
/// back on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Src {
    Reg(Reg),
    Imm(String),
}

impl fmt::Display for Src {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Src::Reg(reg) => write!(f, "{}", reg),
            Src::Imm(value) => write!(f, "#{}", value),
        }
    }
}

/// Three-operand arithmetic and logical operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mulu,
    Divu,
    Mod,
    And,
    Or,
    Eor,
    Lsl,
    Lsr,
}

impl AluOp {
    pub fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "add",
            AluOp::Sub => "sub",
            AluOp::Mulu => "mulu",
            AluOp::Divu => "divu",
            AluOp::Mod => "mod",
            AluOp::And => "and",
            AluOp::Or => "or",
            AluOp::Eor => "eor",
            AluOp::Lsl => "lsl",
            AluOp::Lsr => "lsr",
        }
    }
}

/// Compare-with-zero branch conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    Nez,
    Eqz,
    Gtz,
    Gez,
    Ltz,
    Lez,
}

impl Cond {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Cond::Nez => "bnez",
            Cond::Eqz => "beqz",
            Cond::Gtz => "bgtz",
            Cond::Gez => "bgez",
            Cond::Ltz => "bltz",
            Cond::Lez => "blez",
        }
    }
}

/// IE64 Assembly Instructions
///
/// Only the forms that IE32 code lowers into. Branch targets and `la`
/// addresses are symbolic text passed through from the source.
#[derive(Debug, Clone, PartialEq)]
pub enum AsmInst {
    // Data movement
    Move(Size, Reg, Src),             // rd = src
    Load(Size, Reg, MemRef),          // rd = memory[ref]
    Store(Size, Reg, MemRef),         // memory[ref] = rs
    La(Reg, String),                  // rd = address

    // Arithmetic / logical
    Alu(AluOp, Size, Reg, Reg, Src),  // rd = rs op src
    Not(Size, Reg, Reg),              // rd = ~rs

    // Stack
    Push(Reg),
    Pop(Reg),

    // Control flow
    Bra(String),
    Jsr(String),
    Branch(Cond, Reg, String),        // if (rs cond 0) goto label
    Rts,
    Rti,

    // System
    Nop,
    Halt,
    Sei,
    Cli,
    Wait(String),                     // immediate delay

    Comment(String),
}

impl fmt::Display for AsmInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmInst::Move(size, rd, src) => write!(f, "move{} {}, {}", size, rd, src),
            AsmInst::Load(size, rd, mem) => write!(f, "load{} {}, {}", size, rd, mem),
            AsmInst::Store(size, rs, mem) => write!(f, "store{} {}, {}", size, rs, mem),
            AsmInst::La(rd, addr) => write!(f, "la {}, {}", rd, addr),

            AsmInst::Alu(op, size, rd, rs, src) => {
                write!(f, "{}{} {}, {}, {}", op.mnemonic(), size, rd, rs, src)
            }
            AsmInst::Not(size, rd, rs) => write!(f, "not{} {}, {}", size, rd, rs),

            AsmInst::Push(rs) => write!(f, "push {}", rs),
            AsmInst::Pop(rd) => write!(f, "pop {}", rd),

            AsmInst::Bra(target) => write!(f, "bra {}", target),
            AsmInst::Jsr(target) => write!(f, "jsr {}", target),
            AsmInst::Branch(cond, rs, target) => {
                write!(f, "{} {}, {}", cond.mnemonic(), rs, target)
            }
            AsmInst::Rts => write!(f, "rts"),
            AsmInst::Rti => write!(f, "rti"),

            AsmInst::Nop => write!(f, "nop"),
            AsmInst::Halt => write!(f, "halt"),
            AsmInst::Sei => write!(f, "sei"),
            AsmInst::Cli => write!(f, "cli"),
            AsmInst::Wait(value) => write!(f, "wait #{}", value),

            AsmInst::Comment(text) => write!(f, "; {}", text),
        }
    }
}
