//! IE32 → IE64 instruction lowering
//!
//! IE32 is a two-operand, memory-operand ISA; IE64 is a three-operand
//! load/store ISA. Each IE32 instruction lowers to one or more IE64
//! instructions depending on its mnemonic and the addressing mode of its
//! operand:
//!
//! - Direct memory operands (`@addr`) have no IE64 equivalent. The address is
//!   materialized into scratch register R17 with `la` first.
//! - Memory sources for arithmetic are fetched into R17 before the operation.
//! - Read-modify-write (`INC`/`DEC` on memory) goes through R18.
//!
//! Scratch registers never carry a value from one IE32 instruction to the
//! next.

use crate::error::ConvertError;
use crate::operand::{split_operands, Address, Operand};
use crate::registers::map_register;
use ie64_codegen::{AluOp, AsmInst, Cond, MemRef, Reg, Size, Src};
use log::trace;

/// IE32 mnemonics, grouped by how they lower
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Nop,
    Halt,
    Rts,
    Sei,
    Cli,
    Rti,
    Push,
    Pop,
    Jmp,
    Jsr,
    Branch(Cond),
    /// `LD<r>`: load into the register named by the last letter
    LoadImplied(char),
    /// `ST<r>`: store from the register named by the last letter
    StoreImplied(char),
    Load,
    Store,
    Alu(AluOp),
    Not,
    Inc,
    Dec,
    Wait,
}

impl Mnemonic {
    pub fn from_str(s: &str) -> Option<Self> {
        let upper = s.to_uppercase();
        let mnemonic = match upper.as_str() {
            "NOP" => Mnemonic::Nop,
            "HALT" => Mnemonic::Halt,
            "RTS" => Mnemonic::Rts,
            "SEI" => Mnemonic::Sei,
            "CLI" => Mnemonic::Cli,
            "RTI" => Mnemonic::Rti,
            "PUSH" => Mnemonic::Push,
            "POP" => Mnemonic::Pop,
            "JMP" => Mnemonic::Jmp,
            "JSR" => Mnemonic::Jsr,
            "JNZ" => Mnemonic::Branch(Cond::Nez),
            "JZ" => Mnemonic::Branch(Cond::Eqz),
            "JGT" => Mnemonic::Branch(Cond::Gtz),
            "JGE" => Mnemonic::Branch(Cond::Gez),
            "JLT" => Mnemonic::Branch(Cond::Ltz),
            "JLE" => Mnemonic::Branch(Cond::Lez),
            "LOAD" => Mnemonic::Load,
            "STORE" => Mnemonic::Store,
            "ADD" => Mnemonic::Alu(AluOp::Add),
            "SUB" => Mnemonic::Alu(AluOp::Sub),
            "MUL" => Mnemonic::Alu(AluOp::Mulu),
            "DIV" => Mnemonic::Alu(AluOp::Divu),
            "MOD" => Mnemonic::Alu(AluOp::Mod),
            "AND" => Mnemonic::Alu(AluOp::And),
            "OR" => Mnemonic::Alu(AluOp::Or),
            "XOR" => Mnemonic::Alu(AluOp::Eor),
            "SHL" => Mnemonic::Alu(AluOp::Lsl),
            "SHR" => Mnemonic::Alu(AluOp::Lsr),
            "NOT" => Mnemonic::Not,
            "INC" => Mnemonic::Inc,
            "DEC" => Mnemonic::Dec,
            "WAIT" => Mnemonic::Wait,
            _ => return Self::register_implied(&upper),
        };
        Some(mnemonic)
    }

    fn register_implied(upper: &str) -> Option<Self> {
        let mut chars = upper.chars();
        let (a, b, reg) = (chars.next()?, chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }
        match (a, b) {
            ('L', 'D') => Some(Mnemonic::LoadImplied(reg)),
            ('S', 'T') => Some(Mnemonic::StoreImplied(reg)),
            _ => None,
        }
    }
}

/// Lowers single IE32 instructions for one conversion session.
#[derive(Debug, Clone, Copy)]
pub struct Lowerer {
    size: Size,
}

impl Lowerer {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// Lower one instruction. `code` is the comment-stripped instruction
    /// text, mnemonic first.
    ///
    /// On success the result is never empty.
    pub fn lower(&self, code: &str) -> Result<Vec<AsmInst>, ConvertError> {
        let code = code.trim();
        let name = code.split_whitespace().next().unwrap_or("");
        let rest = code[name.len()..].trim();
        let upper = name.to_uppercase();

        let mnemonic =
            Mnemonic::from_str(&upper).ok_or_else(|| ConvertError::UnknownMnemonic(upper.clone()))?;
        trace!("lowering {:?} with operands {:?}", mnemonic, rest);

        let sz = self.size;
        match mnemonic {
            Mnemonic::Nop => Ok(vec![AsmInst::Nop]),
            Mnemonic::Halt => Ok(vec![AsmInst::Halt]),
            Mnemonic::Rts => Ok(vec![AsmInst::Rts]),
            Mnemonic::Sei => Ok(vec![AsmInst::Sei]),
            Mnemonic::Cli => Ok(vec![AsmInst::Cli]),
            Mnemonic::Rti => Ok(vec![AsmInst::Rti]),

            Mnemonic::Push => {
                let reg = map_register(one_operand(&upper, rest)?)?;
                Ok(vec![AsmInst::Push(reg)])
            }
            Mnemonic::Pop => {
                let reg = map_register(one_operand(&upper, rest)?)?;
                Ok(vec![AsmInst::Pop(reg)])
            }

            // Targets are symbolic and passed through untouched
            Mnemonic::Jmp => Ok(vec![AsmInst::Bra(target(&upper, rest)?.to_string())]),
            Mnemonic::Jsr => Ok(vec![AsmInst::Jsr(target(&upper, rest)?.to_string())]),

            Mnemonic::Branch(cond) => {
                let (reg, label) = two_operands(&upper, rest)?;
                Ok(vec![AsmInst::Branch(cond, map_register(reg)?, label.to_string())])
            }

            Mnemonic::LoadImplied(letter) => {
                let dest = map_register(&letter.to_string())?;
                self.lower_load(dest, one_operand(&upper, rest)?)
            }
            Mnemonic::StoreImplied(letter) => {
                let src = map_register(&letter.to_string())?;
                self.lower_store(src, one_operand(&upper, rest)?)
            }
            Mnemonic::Load => {
                let (dest, operand) = two_operands(&upper, rest)?;
                self.lower_load(map_register(dest)?, operand)
            }
            Mnemonic::Store => {
                let (src, operand) = two_operands(&upper, rest)?;
                self.lower_store(map_register(src)?, operand)
            }

            Mnemonic::Alu(op) => {
                let (dest, operand) = two_operands(&upper, rest)?;
                self.lower_alu(op, map_register(dest)?, operand)
            }
            Mnemonic::Not => {
                let reg = map_register(one_operand(&upper, rest)?)?;
                Ok(vec![AsmInst::Not(sz, reg, reg)])
            }
            Mnemonic::Inc => self.lower_inc_dec(&upper, AluOp::Add, one_operand(&upper, rest)?),
            Mnemonic::Dec => self.lower_inc_dec(&upper, AluOp::Sub, one_operand(&upper, rest)?),

            Mnemonic::Wait => self.lower_wait(&upper, one_operand(&upper, rest)?),
        }
    }

    /// Load `operand` into `dest`. A bare operand is a value.
    fn lower_load(&self, dest: Reg, operand: &str) -> Result<Vec<AsmInst>, ConvertError> {
        let sz = self.size;
        let operand = Operand::parse(operand)?;
        trace!("load into {} from {:?} operand", dest, operand.kind());
        Ok(match operand {
            Operand::Immediate(value) | Operand::Bare(value) => {
                vec![AsmInst::Move(sz, dest, Src::Imm(value.to_string()))]
            }
            Operand::Direct(addr) => vec![
                AsmInst::La(Reg::SCRATCH1, addr.to_string()),
                AsmInst::Load(sz, dest, MemRef::new(Reg::SCRATCH1)),
            ],
            Operand::Indirect(mem) => vec![AsmInst::Load(sz, dest, mem)],
            Operand::Register(src) => vec![AsmInst::Move(sz, dest, Src::Reg(src))],
        })
    }

    /// Store `src` to `operand`. A store always targets memory, so bare and
    /// immediate operands are both addresses.
    fn lower_store(&self, src: Reg, operand: &str) -> Result<Vec<AsmInst>, ConvertError> {
        let sz = self.size;
        Ok(match Address::parse(operand)? {
            Address::Indirect(mem) => vec![AsmInst::Store(sz, src, mem)],
            Address::Direct(addr) | Address::Immediate(addr) | Address::Bare(addr) => vec![
                AsmInst::La(Reg::SCRATCH1, addr.to_string()),
                AsmInst::Store(sz, src, MemRef::new(Reg::SCRATCH1)),
            ],
        })
    }

    /// Rewrite `OP dest, src` as `op dest, dest, src'`.
    fn lower_alu(&self, op: AluOp, dest: Reg, operand: &str) -> Result<Vec<AsmInst>, ConvertError> {
        let sz = self.size;
        let alu = |src: Src| AsmInst::Alu(op, sz, dest, dest, src);
        let operand = Operand::parse(operand)?;
        trace!("{} {} with {:?} operand", op.mnemonic(), dest, operand.kind());
        Ok(match operand {
            Operand::Immediate(value) | Operand::Bare(value) => {
                vec![alu(Src::Imm(value.to_string()))]
            }
            Operand::Register(src) => vec![alu(Src::Reg(src))],
            Operand::Direct(addr) => vec![
                AsmInst::La(Reg::SCRATCH1, addr.to_string()),
                AsmInst::Load(sz, Reg::SCRATCH1, MemRef::new(Reg::SCRATCH1)),
                alu(Src::Reg(Reg::SCRATCH1)),
            ],
            Operand::Indirect(mem) => vec![
                AsmInst::Load(sz, Reg::SCRATCH1, mem),
                alu(Src::Reg(Reg::SCRATCH1)),
            ],
        })
    }

    /// `INC`/`DEC` as add/subtract of immediate 1, in place.
    fn lower_inc_dec(
        &self,
        mnemonic: &str,
        op: AluOp,
        operand: &str,
    ) -> Result<Vec<AsmInst>, ConvertError> {
        let sz = self.size;
        let one = || Src::Imm("1".to_string());
        let rmw = |mem: MemRef| {
            vec![
                AsmInst::Load(sz, Reg::SCRATCH2, mem.clone()),
                AsmInst::Alu(op, sz, Reg::SCRATCH2, Reg::SCRATCH2, one()),
                AsmInst::Store(sz, Reg::SCRATCH2, mem),
            ]
        };

        match Operand::parse(operand)? {
            Operand::Register(reg) => Ok(vec![AsmInst::Alu(op, sz, reg, reg, one())]),
            Operand::Direct(addr) => {
                let mut insts = vec![AsmInst::La(Reg::SCRATCH1, addr.to_string())];
                insts.extend(rmw(MemRef::new(Reg::SCRATCH1)));
                Ok(insts)
            }
            Operand::Indirect(mem) => Ok(rmw(mem)),
            Operand::Immediate(_) | Operand::Bare(_) => Err(ConvertError::unsupported(
                mnemonic,
                "operand must be a register, direct memory or register-indirect",
            )),
        }
    }

    /// IE64 `wait` encodes its delay as an immediate, so only values can be
    /// converted.
    fn lower_wait(&self, mnemonic: &str, operand: &str) -> Result<Vec<AsmInst>, ConvertError> {
        let what = match Operand::parse(operand)? {
            Operand::Immediate(value) | Operand::Bare(value) => {
                return Ok(vec![AsmInst::Wait(value.to_string())]);
            }
            Operand::Register(_) => "register",
            Operand::Direct(_) => "direct memory",
            Operand::Indirect(_) => "register-indirect",
        };
        Err(ConvertError::unsupported(
            mnemonic,
            format!("IE64 wait only accepts an immediate operand; {what} operand cannot be converted"),
        ))
    }
}

/// Exactly one operand
fn one_operand<'a>(mnemonic: &str, rest: &'a str) -> Result<&'a str, ConvertError> {
    match split_operands(rest).as_slice() {
        [operand] => Ok(*operand),
        parts => Err(ConvertError::operand_count(mnemonic, 1, parts.len())),
    }
}

/// Exactly two operands
fn two_operands<'a>(mnemonic: &str, rest: &'a str) -> Result<(&'a str, &'a str), ConvertError> {
    match split_operands(rest).as_slice() {
        [first, second] => Ok((*first, *second)),
        parts => Err(ConvertError::operand_count(mnemonic, 2, parts.len())),
    }
}

/// Jump target text, taken verbatim
fn target<'a>(mnemonic: &str, rest: &'a str) -> Result<&'a str, ConvertError> {
    if rest.is_empty() {
        Err(ConvertError::operand_count(mnemonic, 1, 0))
    } else {
        Ok(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lower(code: &str) -> Result<Vec<String>, ConvertError> {
        lower_sized(code, Size::Long)
    }

    fn lower_sized(code: &str, size: Size) -> Result<Vec<String>, ConvertError> {
        Lowerer::new(size)
            .lower(code)
            .map(|insts| insts.iter().map(|i| i.to_string()).collect())
    }

    fn ok(code: &str) -> Vec<String> {
        lower(code).unwrap_or_else(|e| panic!("{code:?} failed to lower: {e}"))
    }

    #[test]
    fn test_mnemonic_parsing() {
        assert_eq!(Mnemonic::from_str("nop"), Some(Mnemonic::Nop));
        assert_eq!(Mnemonic::from_str("Jle"), Some(Mnemonic::Branch(Cond::Lez)));
        assert_eq!(Mnemonic::from_str("LDA"), Some(Mnemonic::LoadImplied('A')));
        assert_eq!(Mnemonic::from_str("stw"), Some(Mnemonic::StoreImplied('W')));
        assert_eq!(Mnemonic::from_str("LDQ"), Some(Mnemonic::LoadImplied('Q')));
        assert_eq!(Mnemonic::from_str("LD"), None);
        assert_eq!(Mnemonic::from_str("LDAX"), None);
        assert_eq!(Mnemonic::from_str("MOVE"), None);
    }

    #[test]
    fn test_zero_operand() {
        assert_eq!(ok("NOP"), vec!["nop"]);
        assert_eq!(ok("HALT"), vec!["halt"]);
        assert_eq!(ok("rts"), vec!["rts"]);
        assert_eq!(ok("SEI"), vec!["sei"]);
        assert_eq!(ok("CLI"), vec!["cli"]);
        assert_eq!(ok("RTI"), vec!["rti"]);
    }

    #[test]
    fn test_stack() {
        assert_eq!(ok("PUSH A"), vec!["push r1"]);
        assert_eq!(ok("POP c"), vec!["pop r6"]);
        assert_eq!(lower("PUSH Q"), Err(ConvertError::UnknownRegister("Q".to_string())));
        assert_eq!(lower("POP"), Err(ConvertError::operand_count("POP", 1, 0)));
    }

    #[test]
    fn test_jumps_pass_targets_through() {
        assert_eq!(ok("JMP main_loop"), vec!["bra main_loop"]);
        assert_eq!(ok("JMP MY_HANDLER"), vec!["bra MY_HANDLER"]);
        assert_eq!(ok("JSR subroutine"), vec!["jsr subroutine"]);
        // Never analyzed as an addressing mode
        assert_eq!(ok("JMP A"), vec!["bra A"]);
        assert_eq!(lower("JSR"), Err(ConvertError::operand_count("JSR", 1, 0)));
    }

    #[test]
    fn test_conditional_branches() {
        assert_eq!(ok("JNZ A, label"), vec!["bnez r1, label"]);
        assert_eq!(ok("JZ A, label"), vec!["beqz r1, label"]);
        assert_eq!(ok("JGT A, label"), vec!["bgtz r1, label"]);
        assert_eq!(ok("JGE A, label"), vec!["bgez r1, label"]);
        assert_eq!(ok("JLT A, label"), vec!["bltz r1, label"]);
        assert_eq!(ok("JLE X, label"), vec!["blez r2, label"]);
    }

    #[test]
    fn test_branch_operand_count() {
        assert_eq!(lower("JNZ label"), Err(ConvertError::operand_count("JNZ", 2, 1)));
        assert_eq!(lower("JZ A, b, c"), Err(ConvertError::operand_count("JZ", 2, 3)));
        assert_eq!(
            lower("JZ Q, done"),
            Err(ConvertError::UnknownRegister("Q".to_string()))
        );
    }

    #[test]
    fn test_load_addressing_modes() {
        assert_eq!(ok("LDA #42"), vec!["move.l r1, #42"]);
        assert_eq!(ok("LDA @0x5000"), vec!["la r17, 0x5000", "load.l r1, (r17)"]);
        assert_eq!(ok("LDA 0x5000"), vec!["move.l r1, #0x5000"]);
        assert_eq!(ok("LDA [B]"), vec!["load.l r1, (r5)"]);
        assert_eq!(ok("LDA [B+8]"), vec!["load.l r1, 8(r5)"]);
        assert_eq!(ok("LDA [A]"), vec!["load.l r1, (r1)"]);
        assert_eq!(ok("LDA X"), vec!["move.l r1, r2"]);
        assert_eq!(ok("LDX #10"), vec!["move.l r2, #10"]);
    }

    #[test]
    fn test_generic_load() {
        assert_eq!(ok("LOAD A, #42"), vec!["move.l r1, #42"]);
        assert_eq!(ok("LOAD A, MY_CONST"), vec!["move.l r1, #MY_CONST"]);
        assert_eq!(ok("LOAD A, @0x5000"), vec!["la r17, 0x5000", "load.l r1, (r17)"]);
        assert_eq!(ok("LOAD A, X"), vec!["move.l r1, r2"]);
        assert_eq!(ok("LOAD A, [B+16]"), vec!["load.l r1, 16(r5)"]);
        assert_eq!(lower("LOAD A"), Err(ConvertError::operand_count("LOAD", 2, 1)));
        assert_eq!(
            lower("LOAD Q, #1"),
            Err(ConvertError::UnknownRegister("Q".to_string()))
        );
    }

    #[test]
    fn test_register_implied_errors() {
        assert_eq!(lower("LDQ #1"), Err(ConvertError::UnknownRegister("Q".to_string())));
        assert_eq!(lower("STA"), Err(ConvertError::operand_count("STA", 1, 0)));
        assert_eq!(lower("LDA A, B"), Err(ConvertError::operand_count("LDA", 1, 2)));
    }

    #[test]
    fn test_store_addressing_modes() {
        assert_eq!(ok("STA @0x5000"), vec!["la r17, 0x5000", "store.l r1, (r17)"]);
        assert_eq!(ok("STA 0x5000"), vec!["la r17, 0x5000", "store.l r1, (r17)"]);
        assert_eq!(ok("STA #0x5000"), vec!["la r17, 0x5000", "store.l r1, (r17)"]);
        assert_eq!(ok("STA [B]"), vec!["store.l r1, (r5)"]);
        assert_eq!(ok("STB @VIDEO_CTRL"), vec!["la r17, VIDEO_CTRL", "store.l r5, (r17)"]);
        assert_eq!(ok("STORE A, [B+4]"), vec!["store.l r1, 4(r5)"]);
        assert_eq!(
            ok("STORE A, BASE+4"),
            vec!["la r17, BASE+4", "store.l r1, (r17)"]
        );
    }

    #[test]
    fn test_store_destination_is_never_a_register() {
        // A bare register name in store position is a symbol
        assert_eq!(ok("STA X"), vec!["la r17, X", "store.l r1, (r17)"]);
    }

    #[test]
    fn test_alu_mnemonics() {
        let cases = [
            ("ADD", "add"), ("SUB", "sub"), ("MUL", "mulu"), ("DIV", "divu"),
            ("MOD", "mod"), ("AND", "and"), ("OR", "or"), ("XOR", "eor"),
            ("SHL", "lsl"), ("SHR", "lsr"),
        ];
        for (ie32, ie64) in cases {
            assert_eq!(ok(&format!("{ie32} A, #3")), vec![format!("{ie64}.l r1, r1, #3")]);
        }
    }

    #[test]
    fn test_alu_operand_kinds() {
        assert_eq!(ok("ADD A, #10"), vec!["add.l r1, r1, #10"]);
        assert_eq!(ok("ADD A, B"), vec!["add.l r1, r1, r5"]);
        assert_eq!(ok("ADD A, MY_CONST"), vec!["add.l r1, r1, #MY_CONST"]);
        assert_eq!(
            ok("ADD A, @0x5000"),
            vec!["la r17, 0x5000", "load.l r17, (r17)", "add.l r1, r1, r17"]
        );
        assert_eq!(ok("ADD A, [B]"), vec!["load.l r17, (r5)", "add.l r1, r1, r17"]);
        assert_eq!(ok("ADD A, [B+8]"), vec!["load.l r17, 8(r5)", "add.l r1, r1, r17"]);
    }

    #[test]
    fn test_alu_every_mnemonic_and_operand_kind() {
        let ops = [
            ("ADD", "add"), ("SUB", "sub"), ("MUL", "mulu"), ("DIV", "divu"),
            ("MOD", "mod"), ("AND", "and"), ("OR", "or"), ("XOR", "eor"),
            ("SHL", "lsl"), ("SHR", "lsr"),
        ];
        let operands: [(&str, &[&str], &str); 6] = [
            ("#7", &[], "#7"),
            ("SYM", &[], "#SYM"),
            ("B", &[], "r5"),
            ("@0x10", &["la r17, 0x10", "load.l r17, (r17)"], "r17"),
            ("[C]", &["load.l r17, (r6)"], "r17"),
            ("[C+2]", &["load.l r17, 2(r6)"], "r17"),
        ];

        for (ie32, ie64) in ops {
            for (src, prelude, value) in operands {
                let mut expected: Vec<String> = prelude.iter().map(|s| s.to_string()).collect();
                expected.push(format!("{ie64}.l r2, r2, {value}"));
                assert_eq!(ok(&format!("{ie32} X, {src}")), expected, "{ie32} X, {src}");
            }
        }
    }

    #[test]
    fn test_not() {
        assert_eq!(ok("NOT A"), vec!["not.l r1, r1"]);
        assert_eq!(lower("NOT #1"), Err(ConvertError::UnknownRegister("#1".to_string())));
    }

    #[test]
    fn test_inc_dec() {
        assert_eq!(ok("INC A"), vec!["add.l r1, r1, #1"]);
        assert_eq!(ok("DEC A"), vec!["sub.l r1, r1, #1"]);
        assert_eq!(
            ok("INC @0x5000"),
            vec![
                "la r17, 0x5000",
                "load.l r18, (r17)",
                "add.l r18, r18, #1",
                "store.l r18, (r17)",
            ]
        );
        assert_eq!(
            ok("DEC @0x5000"),
            vec![
                "la r17, 0x5000",
                "load.l r18, (r17)",
                "sub.l r18, r18, #1",
                "store.l r18, (r17)",
            ]
        );
        assert_eq!(
            ok("INC [B+4]"),
            vec!["load.l r18, 4(r5)", "add.l r18, r18, #1", "store.l r18, 4(r5)"]
        );
    }

    #[test]
    fn test_inc_dec_rejects_values() {
        assert!(matches!(
            lower("INC #1"),
            Err(ConvertError::UnsupportedOperand { .. })
        ));
        assert!(matches!(
            lower("DEC counter"),
            Err(ConvertError::UnsupportedOperand { .. })
        ));
    }

    #[test]
    fn test_wait() {
        assert_eq!(ok("WAIT #100"), vec!["wait #100"]);
        assert_eq!(ok("WAIT #DELAY_US"), vec!["wait #DELAY_US"]);
        assert_eq!(ok("WAIT DELAY_US"), vec!["wait #DELAY_US"]);
        assert_eq!(ok("WAIT 0x1000"), vec!["wait #0x1000"]);

        for operand in ["A", "@0x5000", "[B]"] {
            let err = lower(&format!("WAIT {operand}")).unwrap_err();
            assert!(matches!(err, ConvertError::UnsupportedOperand { .. }));
            assert!(err.to_string().contains("immediate"));
        }
    }

    #[test]
    fn test_unknown_mnemonic() {
        assert_eq!(lower("MOVE X, A"), Err(ConvertError::UnknownMnemonic("MOVE".to_string())));
        assert_eq!(lower("laod A, #42"), Err(ConvertError::UnknownMnemonic("LAOD".to_string())));
    }

    #[test]
    fn test_size_suffix_applies_to_sized_ops_only() {
        assert_eq!(lower_sized("ADD A, #10", Size::Quad).unwrap(), vec!["add.q r1, r1, #10"]);
        assert_eq!(
            lower_sized("INC @CNT", Size::Quad).unwrap(),
            vec!["la r17, CNT", "load.q r18, (r17)", "add.q r18, r18, #1", "store.q r18, (r17)"]
        );
        assert_eq!(lower_sized("PUSH A", Size::Quad).unwrap(), vec!["push r1"]);
        assert_eq!(lower_sized("WAIT #5", Size::Quad).unwrap(), vec!["wait #5"]);
    }
}
