//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502
//! processor and the resolver that turns each into an effective operand
//! address.
//!
//! Resolution reads operand bytes at PC through the memory bus and advances
//! PC past them as a side effect. Modes with no operand (Implicit,
//! Accumulator) return 0; the instruction semantic ignores the value.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// of the following instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register, with 16-bit wraparound.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register, with 16-bit wraparound.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    ///
    /// The NMOS 6502 never carries into the pointer's high byte when fetching
    /// the target: JMP ($10FF) reads the target low byte from $10FF and the
    /// high byte from $1000, not $1100. That behavior is reproduced here; the
    /// `cmos-indirect-jmp` feature selects the corrected 65C02 fetch instead.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40 within zero page, read a 16-bit
    /// pointer from that location, load from the pointed-to address)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit pointer from ZP 0x40, add Y, load
    /// from the result)
    IndirectY,
}

/// Resolves the effective operand address for `mode` at the current PC.
///
/// Advances PC past the operand bytes. For Implicit and Accumulator modes the
/// returned address is 0 and carries no meaning.
pub(crate) fn resolve<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u16 {
    match mode {
        AddressingMode::Implicit | AddressingMode::Accumulator => 0,

        // The operand byte itself is the data; hand back its address.
        AddressingMode::Immediate => {
            let addr = cpu.pc;
            cpu.pc = cpu.pc.wrapping_add(1);
            addr
        }

        AddressingMode::ZeroPage => cpu.fetch() as u16,

        // Zero-page indexing wraps within page 0.
        AddressingMode::ZeroPageX => cpu.fetch().wrapping_add(cpu.x) as u16,
        AddressingMode::ZeroPageY => cpu.fetch().wrapping_add(cpu.y) as u16,

        AddressingMode::Absolute => cpu.fetch_word(),

        AddressingMode::AbsoluteX => cpu.fetch_word().wrapping_add(cpu.x as u16),
        AddressingMode::AbsoluteY => cpu.fetch_word().wrapping_add(cpu.y as u16),

        // Branch target: PC has already advanced past the offset byte, so the
        // sign-extended offset is relative to the next instruction.
        AddressingMode::Relative => {
            let offset = cpu.fetch() as i8;
            cpu.pc.wrapping_add(offset as u16)
        }

        AddressingMode::Indirect => {
            let ptr = cpu.fetch_word();
            let target_lo = cpu.memory.read(ptr) as u16;

            // NMOS: the pointer's low byte increments without carrying into
            // the high byte, so a pointer at $xxFF wraps within its page.
            #[cfg(not(feature = "cmos-indirect-jmp"))]
            let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
            #[cfg(feature = "cmos-indirect-jmp")]
            let hi_addr = ptr.wrapping_add(1);

            let target_hi = cpu.memory.read(hi_addr) as u16;
            (target_hi << 8) | target_lo
        }

        AddressingMode::IndirectX => {
            let zp = cpu.fetch().wrapping_add(cpu.x);
            let lo = cpu.memory.read(zp as u16) as u16;
            let hi = cpu.memory.read(zp.wrapping_add(1) as u16) as u16;
            (hi << 8) | lo
        }

        AddressingMode::IndirectY => {
            let zp = cpu.fetch();
            let lo = cpu.memory.read(zp as u16) as u16;
            let hi = cpu.memory.read(zp.wrapping_add(1) as u16) as u16;
            ((hi << 8) | lo).wrapping_add(cpu.y as u16)
        }
    }
}
