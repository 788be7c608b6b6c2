//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations: ADC, SBC, AND,
//! ORA, EOR, CMP, CPX, CPY, and BIT.
//!
//! ADC and SBC switch to binary-coded-decimal arithmetic when the decimal
//! flag is set. The decimal paths keep the NMOS quirks: decimal ADC takes Z
//! from the binary sum before any nibble adjustment, and decimal SBC fixes
//! N, Z, and V from the binary difference before adjusting.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand and the carry flag to the accumulator.
///
/// Binary mode flags:
/// - C: set if the unsigned sum exceeds 0xFF
/// - V: set if both operands share a sign that differs from the result's
/// - N, Z: from the result byte
///
/// Decimal mode performs nibble-wise BCD correction: if the low nibbles plus
/// carry-in exceed 9, add 6; N and V come from that intermediate; if the sum
/// exceeds 0x99, add 0x60 and set carry. Z is taken from the binary sum
/// before any adjustment (documented NMOS behavior).
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let carry_in: u16 = if cpu.flag_c { 1 } else { 0 };
    let mut tmp = m as u16 + cpu.a as u16 + carry_in;

    // Z always reflects the binary sum, even in decimal mode.
    cpu.flag_z = tmp & 0xFF == 0;

    if cpu.flag_d {
        if (cpu.a & 0x0F) as u16 + (m & 0x0F) as u16 + carry_in > 9 {
            tmp += 6;
        }
        cpu.flag_n = tmp & 0x80 != 0;
        cpu.flag_v = (cpu.a ^ m) & 0x80 == 0 && (cpu.a as u16 ^ tmp) & 0x80 != 0;
        let needs_high_adjust = tmp > 0x99;
        if needs_high_adjust {
            tmp += 0x60;
        }
        cpu.flag_c = needs_high_adjust;
    } else {
        cpu.flag_n = tmp & 0x80 != 0;
        cpu.flag_v = (cpu.a ^ m) & 0x80 == 0 && (cpu.a as u16 ^ tmp) & 0x80 != 0;
        cpu.flag_c = tmp > 0xFF;
    }

    cpu.a = (tmp & 0xFF) as u8;
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the borrow (complement of carry) from the
/// accumulator.
///
/// N, Z, and V are fixed from the binary difference in both modes:
/// - V: set if the sign of A differs from the sign of the result AND from
///   the sign of the operand
/// - C: set if no borrow occurred (the adjusted difference fits in 8 bits)
///
/// Decimal mode then corrects nibble-wise: subtract 6 if the low nibble of A
/// minus borrow is less than the operand's low nibble, and subtract 0x60 if
/// the difference exceeds 0x99.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let borrow: u32 = if cpu.flag_c { 0 } else { 1 };
    let mut tmp = (cpu.a as u32).wrapping_sub(m as u32).wrapping_sub(borrow);

    cpu.flag_n = tmp & 0x80 != 0;
    cpu.flag_z = tmp & 0xFF == 0;
    cpu.flag_v = (cpu.a as u32 ^ tmp) & 0x80 != 0 && (cpu.a ^ m) & 0x80 != 0;

    if cpu.flag_d {
        if ((cpu.a & 0x0F) as i32 - borrow as i32) < (m & 0x0F) as i32 {
            tmp = tmp.wrapping_sub(6);
        }
        if tmp > 0x99 {
            tmp = tmp.wrapping_sub(0x60);
        }
    }

    // No borrow iff the (adjusted) difference never left the byte range.
    cpu.flag_c = tmp < 0x100;
    cpu.a = (tmp & 0xFF) as u8;
}

/// Executes the AND (Logical AND) instruction.
///
/// Bitwise AND between the accumulator and the operand. Updates N and Z.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let result = cpu.a & m;
    cpu.set_nz(result);
    cpu.a = result;
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Bitwise OR between the accumulator and the operand. Updates N and Z.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let result = cpu.a | m;
    cpu.set_nz(result);
    cpu.a = result;
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Bitwise XOR between the accumulator and the operand. Updates N and Z.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let result = cpu.a ^ m;
    cpu.set_nz(result);
    cpu.a = result;
}

/// Compares a register against the operand: carry = no borrow (reg >= M),
/// N and Z from the 8-bit difference. The register is not modified.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, reg: u8, addr: u16) {
    let m = cpu.memory.read(addr);
    cpu.flag_c = reg >= m;
    cpu.set_nz(reg.wrapping_sub(m));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let reg = cpu.a;
    compare(cpu, reg, addr);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let reg = cpu.x;
    compare(cpu, reg, addr);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let reg = cpu.y;
    compare(cpu, reg, addr);
}

/// Executes the BIT (Bit Test) instruction.
///
/// The operand's top two bits are copied straight into N and V; Z is set
/// from the AND of operand and accumulator. A is unchanged.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    cpu.flag_n = m & 0x80 != 0;
    cpu.flag_v = m & 0x40 != 0;
    cpu.flag_z = m & cpu.a == 0;
}
