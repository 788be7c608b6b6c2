//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLD, SED, CLI, SEI, and CLV directly clear or set a single
//! status flag. All use implied addressing; no other flags change.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = false;
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_c = true;
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = false;
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_d = true;
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = false;
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_i = true;
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flag_v = false;
}
