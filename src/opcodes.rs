//! # Opcode Dispatch Table
//!
//! This module contains the 256-entry dispatch table that serves as the
//! single source of truth for 6502 instruction decoding.
//!
//! Each entry is a triple of addressing mode, mnemonic, and base cycle cost.
//! The table is `const` data: dispatch never goes through strings, trait
//! objects, or function pointers. It covers the 151 documented NMOS 6502
//! opcodes; the remaining 105 byte values map to [`Mnemonic::Illegal`], whose
//! sole effect is to latch the CPU's illegal-opcode flag and stop the run
//! loop.

use crate::addressing::AddressingMode;

/// Instruction mnemonic selector.
///
/// One variant per documented 6502 instruction. ASL, LSR, ROL, and ROR each
/// have a separate accumulator-form variant (`AslA` and friends) because the
/// accumulator form operates on a register rather than a resolved memory
/// address and is dispatched as its own table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    AslA,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    LsrA,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    RolA,
    Ror,
    RorA,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Unassigned opcode byte. Latches the illegal-opcode flag.
    Illegal,
}

/// Metadata for a single 6502 opcode.
///
/// # Fields
///
/// - `mnemonic`: which instruction semantic to execute
/// - `addressing_mode`: how the operand bytes resolve to an effective address
/// - `base_cycles`: cycle cost (page-crossing penalties are not modelled)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction semantic selector.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost.
    ///
    /// Documented instructions have cycles in the range 2-7. Illegal entries
    /// carry 0 cycles so a halt consumes nothing beyond the instructions that
    /// completed before it.
    pub base_cycles: u8,
}

/// Dispatch entry for unassigned opcode bytes.
const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: Mnemonic::Illegal,
    addressing_mode: AddressingMode::Implicit,
    base_cycles: 0,
};

const fn entry(
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
    }
}

/// Complete 256-entry dispatch table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
///
/// // Unassigned bytes halt the CPU
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, Mnemonic::Illegal);
/// assert_eq!(OPCODE_TABLE[0x02].base_cycles, 0);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

const fn build_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    // Start from a table full of illegal entries, then assign the documented
    // opcodes mnemonic by mnemonic.
    let mut t = [ILLEGAL; 256];

    t[0x69] = entry(Adc, Immediate, 2);
    t[0x6D] = entry(Adc, Absolute, 4);
    t[0x65] = entry(Adc, ZeroPage, 3);
    t[0x61] = entry(Adc, IndirectX, 6);
    t[0x71] = entry(Adc, IndirectY, 6);
    t[0x75] = entry(Adc, ZeroPageX, 4);
    t[0x7D] = entry(Adc, AbsoluteX, 4);
    t[0x79] = entry(Adc, AbsoluteY, 4);

    t[0x29] = entry(And, Immediate, 2);
    t[0x2D] = entry(And, Absolute, 4);
    t[0x25] = entry(And, ZeroPage, 3);
    t[0x21] = entry(And, IndirectX, 6);
    t[0x31] = entry(And, IndirectY, 5);
    t[0x35] = entry(And, ZeroPageX, 4);
    t[0x3D] = entry(And, AbsoluteX, 4);
    t[0x39] = entry(And, AbsoluteY, 4);

    t[0x0E] = entry(Asl, Absolute, 6);
    t[0x06] = entry(Asl, ZeroPage, 5);
    t[0x0A] = entry(AslA, Accumulator, 2);
    t[0x16] = entry(Asl, ZeroPageX, 6);
    t[0x1E] = entry(Asl, AbsoluteX, 7);

    t[0x90] = entry(Bcc, Relative, 2);

    t[0xB0] = entry(Bcs, Relative, 2);

    t[0xF0] = entry(Beq, Relative, 2);

    t[0x2C] = entry(Bit, Absolute, 4);
    t[0x24] = entry(Bit, ZeroPage, 3);

    t[0x30] = entry(Bmi, Relative, 2);

    t[0xD0] = entry(Bne, Relative, 2);

    t[0x10] = entry(Bpl, Relative, 2);

    t[0x00] = entry(Brk, Implicit, 7);

    t[0x50] = entry(Bvc, Relative, 2);

    t[0x70] = entry(Bvs, Relative, 2);

    t[0x18] = entry(Clc, Implicit, 2);

    t[0xD8] = entry(Cld, Implicit, 2);

    t[0x58] = entry(Cli, Implicit, 2);

    t[0xB8] = entry(Clv, Implicit, 2);

    t[0xC9] = entry(Cmp, Immediate, 2);
    t[0xCD] = entry(Cmp, Absolute, 4);
    t[0xC5] = entry(Cmp, ZeroPage, 3);
    t[0xC1] = entry(Cmp, IndirectX, 6);
    t[0xD1] = entry(Cmp, IndirectY, 3);
    t[0xD5] = entry(Cmp, ZeroPageX, 4);
    t[0xDD] = entry(Cmp, AbsoluteX, 4);
    t[0xD9] = entry(Cmp, AbsoluteY, 4);

    t[0xE0] = entry(Cpx, Immediate, 2);
    t[0xEC] = entry(Cpx, Absolute, 4);
    t[0xE4] = entry(Cpx, ZeroPage, 3);

    t[0xC0] = entry(Cpy, Immediate, 2);
    t[0xCC] = entry(Cpy, Absolute, 4);
    t[0xC4] = entry(Cpy, ZeroPage, 3);

    t[0xCE] = entry(Dec, Absolute, 6);
    t[0xC6] = entry(Dec, ZeroPage, 5);
    t[0xD6] = entry(Dec, ZeroPageX, 6);
    t[0xDE] = entry(Dec, AbsoluteX, 7);

    t[0xCA] = entry(Dex, Implicit, 2);

    t[0x88] = entry(Dey, Implicit, 2);

    t[0x49] = entry(Eor, Immediate, 2);
    t[0x4D] = entry(Eor, Absolute, 4);
    t[0x45] = entry(Eor, ZeroPage, 3);
    t[0x41] = entry(Eor, IndirectX, 6);
    t[0x51] = entry(Eor, IndirectY, 5);
    t[0x55] = entry(Eor, ZeroPageX, 4);
    t[0x5D] = entry(Eor, AbsoluteX, 4);
    t[0x59] = entry(Eor, AbsoluteY, 4);

    t[0xEE] = entry(Inc, Absolute, 6);
    t[0xE6] = entry(Inc, ZeroPage, 5);
    t[0xF6] = entry(Inc, ZeroPageX, 6);
    t[0xFE] = entry(Inc, AbsoluteX, 7);

    t[0xE8] = entry(Inx, Implicit, 2);

    t[0xC8] = entry(Iny, Implicit, 2);

    t[0x4C] = entry(Jmp, Absolute, 3);
    t[0x6C] = entry(Jmp, Indirect, 5);

    t[0x20] = entry(Jsr, Absolute, 6);

    t[0xA9] = entry(Lda, Immediate, 2);
    t[0xAD] = entry(Lda, Absolute, 4);
    t[0xA5] = entry(Lda, ZeroPage, 3);
    t[0xA1] = entry(Lda, IndirectX, 6);
    t[0xB1] = entry(Lda, IndirectY, 5);
    t[0xB5] = entry(Lda, ZeroPageX, 4);
    t[0xBD] = entry(Lda, AbsoluteX, 4);
    t[0xB9] = entry(Lda, AbsoluteY, 4);

    t[0xA2] = entry(Ldx, Immediate, 2);
    t[0xAE] = entry(Ldx, Absolute, 4);
    t[0xA6] = entry(Ldx, ZeroPage, 3);
    t[0xBE] = entry(Ldx, AbsoluteY, 4);
    t[0xB6] = entry(Ldx, ZeroPageY, 4);

    t[0xA0] = entry(Ldy, Immediate, 2);
    t[0xAC] = entry(Ldy, Absolute, 4);
    t[0xA4] = entry(Ldy, ZeroPage, 3);
    t[0xB4] = entry(Ldy, ZeroPageX, 4);
    t[0xBC] = entry(Ldy, AbsoluteX, 4);

    t[0x4E] = entry(Lsr, Absolute, 6);
    t[0x46] = entry(Lsr, ZeroPage, 5);
    t[0x4A] = entry(LsrA, Accumulator, 2);
    t[0x56] = entry(Lsr, ZeroPageX, 6);
    t[0x5E] = entry(Lsr, AbsoluteX, 7);

    t[0xEA] = entry(Nop, Implicit, 2);

    t[0x09] = entry(Ora, Immediate, 2);
    t[0x0D] = entry(Ora, Absolute, 4);
    t[0x05] = entry(Ora, ZeroPage, 3);
    t[0x01] = entry(Ora, IndirectX, 6);
    t[0x11] = entry(Ora, IndirectY, 5);
    t[0x15] = entry(Ora, ZeroPageX, 4);
    t[0x1D] = entry(Ora, AbsoluteX, 4);
    t[0x19] = entry(Ora, AbsoluteY, 4);

    t[0x48] = entry(Pha, Implicit, 3);

    t[0x08] = entry(Php, Implicit, 3);

    t[0x68] = entry(Pla, Implicit, 4);

    t[0x28] = entry(Plp, Implicit, 4);

    t[0x2E] = entry(Rol, Absolute, 6);
    t[0x26] = entry(Rol, ZeroPage, 5);
    t[0x2A] = entry(RolA, Accumulator, 2);
    t[0x36] = entry(Rol, ZeroPageX, 6);
    t[0x3E] = entry(Rol, AbsoluteX, 7);

    t[0x6E] = entry(Ror, Absolute, 6);
    t[0x66] = entry(Ror, ZeroPage, 5);
    t[0x6A] = entry(RorA, Accumulator, 2);
    t[0x76] = entry(Ror, ZeroPageX, 6);
    t[0x7E] = entry(Ror, AbsoluteX, 7);

    t[0x40] = entry(Rti, Implicit, 6);

    t[0x60] = entry(Rts, Implicit, 6);

    t[0xE9] = entry(Sbc, Immediate, 2);
    t[0xED] = entry(Sbc, Absolute, 4);
    t[0xE5] = entry(Sbc, ZeroPage, 3);
    t[0xE1] = entry(Sbc, IndirectX, 6);
    t[0xF1] = entry(Sbc, IndirectY, 5);
    t[0xF5] = entry(Sbc, ZeroPageX, 4);
    t[0xFD] = entry(Sbc, AbsoluteX, 4);
    t[0xF9] = entry(Sbc, AbsoluteY, 4);

    t[0x38] = entry(Sec, Implicit, 2);

    t[0xF8] = entry(Sed, Implicit, 2);

    t[0x78] = entry(Sei, Implicit, 2);

    t[0x8D] = entry(Sta, Absolute, 4);
    t[0x85] = entry(Sta, ZeroPage, 3);
    t[0x81] = entry(Sta, IndirectX, 6);
    t[0x91] = entry(Sta, IndirectY, 6);
    t[0x95] = entry(Sta, ZeroPageX, 4);
    t[0x9D] = entry(Sta, AbsoluteX, 5);
    t[0x99] = entry(Sta, AbsoluteY, 5);

    t[0x8E] = entry(Stx, Absolute, 4);
    t[0x86] = entry(Stx, ZeroPage, 3);
    t[0x96] = entry(Stx, ZeroPageY, 4);

    t[0x8C] = entry(Sty, Absolute, 4);
    t[0x84] = entry(Sty, ZeroPage, 3);
    t[0x94] = entry(Sty, ZeroPageX, 4);

    t[0xAA] = entry(Tax, Implicit, 2);

    t[0xA8] = entry(Tay, Implicit, 2);

    t[0xBA] = entry(Tsx, Implicit, 2);

    t[0x8A] = entry(Txa, Implicit, 2);

    t[0x9A] = entry(Txs, Implicit, 2);

    t[0x98] = entry(Tya, Implicit, 2);

    t
}
