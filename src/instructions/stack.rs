//! # Stack Operations
//!
//! PHA, PHP, PLA, and PLP move bytes between registers and the page-1 stack.
//!
//! PHP pushes the status byte with the break bit forced to 1 (the live break
//! flag is untouched). PLP loads the status byte from the stack; bit 5 has
//! no storage and reads back as 1 regardless of the popped value.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// Executes the PHA (Push Accumulator) instruction. No flags change.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.stack_push(a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte has the break bit set; the live flags are unchanged.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.status() | 0b0001_0000;
    cpu.stack_push(status);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates N and Z.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.stack_pop();
    cpu.set_nz(value);
    cpu.a = value;
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.stack_pop();
    cpu.set_status(value);
}
