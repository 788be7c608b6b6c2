//! # Register Transfer Instructions
//!
//! TAX, TAY, TSX, TXA, and TYA copy between registers and set N and Z from
//! the destination. TXS copies X into the stack pointer with no flag change.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.a;
    cpu.set_nz(m);
    cpu.x = m;
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.a;
    cpu.set_nz(m);
    cpu.y = m;
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.sp;
    cpu.set_nz(m);
    cpu.x = m;
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.x;
    cpu.set_nz(m);
    cpu.a = m;
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that changes no flags.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.y;
    cpu.set_nz(m);
    cpu.a = m;
}
