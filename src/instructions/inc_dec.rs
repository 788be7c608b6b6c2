//! # Increment and Decrement Instructions
//!
//! INC and DEC modify memory at the effective address; INX, INY, DEX, and
//! DEY modify registers. All six wrap modulo 256 and set N and Z from the
//! result; no other flags are touched.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr).wrapping_add(1);
    cpu.set_nz(m);
    cpu.memory.write(addr, m);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr).wrapping_sub(1);
    cpu.set_nz(m);
    cpu.memory.write(addr, m);
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.x.wrapping_add(1);
    cpu.set_nz(m);
    cpu.x = m;
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.y.wrapping_add(1);
    cpu.set_nz(m);
    cpu.y = m;
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.x.wrapping_sub(1);
    cpu.set_nz(m);
    cpu.x = m;
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    let m = cpu.y.wrapping_sub(1);
    cpu.set_nz(m);
    cpu.y = m;
}
