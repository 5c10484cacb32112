//! IE32 register names and their fixed IE64 assignments
//!
//! The assignment is hand-picked rather than positional: A, X, Y and Z take
//! r1-r4 and the remaining letters follow in IE32 encoding order. R17 and
//! R18 are never assigned so the lowering engine can use them as scratch.

use crate::error::ConvertError;
use ie64_codegen::Reg;

/// IE32 general purpose registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceReg {
    A, X, Y, Z,
    B, C, D, E,
    F, G, H, S,
    T, U, V, W,
}

impl SourceReg {
    pub const ALL: [SourceReg; 16] = [
        SourceReg::A, SourceReg::X, SourceReg::Y, SourceReg::Z,
        SourceReg::B, SourceReg::C, SourceReg::D, SourceReg::E,
        SourceReg::F, SourceReg::G, SourceReg::H, SourceReg::S,
        SourceReg::T, SourceReg::U, SourceReg::V, SourceReg::W,
    ];

    /// Case-insensitive lookup of a register name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "A" => Some(SourceReg::A),
            "X" => Some(SourceReg::X),
            "Y" => Some(SourceReg::Y),
            "Z" => Some(SourceReg::Z),
            "B" => Some(SourceReg::B),
            "C" => Some(SourceReg::C),
            "D" => Some(SourceReg::D),
            "E" => Some(SourceReg::E),
            "F" => Some(SourceReg::F),
            "G" => Some(SourceReg::G),
            "H" => Some(SourceReg::H),
            "S" => Some(SourceReg::S),
            "T" => Some(SourceReg::T),
            "U" => Some(SourceReg::U),
            "V" => Some(SourceReg::V),
            "W" => Some(SourceReg::W),
            _ => None,
        }
    }

    /// The IE64 register this IE32 register is ported to
    pub fn target(self) -> Reg {
        match self {
            SourceReg::A => Reg::R1,
            SourceReg::X => Reg::R2,
            SourceReg::Y => Reg::R3,
            SourceReg::Z => Reg::R4,
            SourceReg::B => Reg::R5,
            SourceReg::C => Reg::R6,
            SourceReg::D => Reg::R7,
            SourceReg::E => Reg::R8,
            SourceReg::F => Reg::R9,
            SourceReg::G => Reg::R10,
            SourceReg::H => Reg::R11,
            SourceReg::S => Reg::R12,
            SourceReg::T => Reg::R13,
            SourceReg::U => Reg::R14,
            SourceReg::V => Reg::R15,
            SourceReg::W => Reg::R16,
        }
    }
}

/// Map an IE32 register name to its IE64 register.
pub fn map_register(name: &str) -> Result<Reg, ConvertError> {
    SourceReg::from_name(name)
        .map(SourceReg::target)
        .ok_or_else(|| ConvertError::UnknownRegister(name.to_string()))
}

pub fn is_register(name: &str) -> bool {
    SourceReg::from_name(name).is_some()
}
