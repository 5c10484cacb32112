use thiserror::Error;

/// A failure to convert one IE32 instruction.
///
/// Always recovered locally: the converter replaces the instruction with an
/// inline annotation and moves on to the next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unknown IE32 register {0:?}")]
    UnknownRegister(String),

    #[error("{mnemonic} requires {expected} operand(s), found {found}")]
    OperandCount {
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error("{mnemonic}: {reason}")]
    UnsupportedOperand { mnemonic: String, reason: String },

    #[error("unknown IE32 mnemonic '{0}'")]
    UnknownMnemonic(String),
}

impl ConvertError {
    pub fn operand_count(mnemonic: &str, expected: usize, found: usize) -> Self {
        ConvertError::OperandCount {
            mnemonic: mnemonic.to_string(),
            expected,
            found,
        }
    }

    pub fn unsupported(mnemonic: &str, reason: impl Into<String>) -> Self {
        ConvertError::UnsupportedOperand {
            mnemonic: mnemonic.to_string(),
            reason: reason.into(),
        }
    }
}
