//! # Control Flow Instructions
//!
//! This module implements control transfer operations: JMP, JSR, RTS, RTI,
//! BRK, and NOP.
//!
//! JSR pushes the address of its own last byte (PC minus one, since the
//! addressing mode has already advanced PC past the operand); RTS pops and
//! adds one, so the pair round-trips. BRK pushes the address two bytes past
//! the opcode, skipping the signature byte that follows it, and RTI uses the
//! popped address as-is.

use crate::cpu::{CPU, IRQ_VECTOR};
use crate::memory::MemoryBus;

/// Executes the JMP (Jump) instruction.
///
/// PC takes the effective address. The indirect form's page-wrap quirk lives
/// in the addressing-mode resolver, not here.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, target: u16) {
    cpu.pc = target;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC-1 (high byte first), then transfers to the target. The pushed
/// value is the address of the JSR instruction's last byte.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, target: u16) {
    cpu.pc = cpu.pc.wrapping_sub(1);
    cpu.stack_push((cpu.pc >> 8) as u8);
    cpu.stack_push(cpu.pc as u8);
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the low byte then the high byte and resumes at that address plus
/// one.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    let lo = cpu.stack_pop() as u16;
    let hi = cpu.stack_pop() as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops P, then PC low, then PC high. The restored PC is used as-is (no +1).
/// Bit 5 of the popped status has no storage and reads back as 1.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.stack_pop();
    cpu.set_status(status);

    let lo = cpu.stack_pop() as u16;
    let hi = cpu.stack_pop() as u16;
    cpu.pc = (hi << 8) | lo;
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Advances PC one more byte (BRK carries a signature byte that execution
/// skips), pushes PC high then low, pushes P with the break bit forced to 1,
/// sets interrupt-disable, and loads PC from the IRQ/BRK vector at
/// 0xFFFE/0xFFFF. The live break flag is not modified; only the pushed copy
/// carries it.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.stack_push((cpu.pc >> 8) as u8);
    cpu.stack_push(cpu.pc as u8);
    let status = cpu.status() | 0b0001_0000;
    cpu.stack_push(status);
    cpu.flag_i = true;
    cpu.pc = cpu.read_word(IRQ_VECTOR);
}

/// Executes the NOP (No Operation) instruction. Consumes cycles, nothing
/// else.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}
