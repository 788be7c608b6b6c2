//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left (through carry)
//! - ROR: Rotate Right (through carry)
//!
//! Each has a memory form (read, mutate, write back to the effective
//! address) and an accumulator form. The rotates pass through a 9-bit
//! register formed by the value and the carry flag: ROL's carry-out is the
//! old bit 7, ROR's is the old bit 0.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// Shift left: carry takes the old bit 7. Updates N and Z.
fn asl<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x80 != 0;
    let result = value << 1;
    cpu.set_nz(result);
    result
}

/// Shift right: carry takes the old bit 0. N is always clear.
fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x01 != 0;
    let result = value >> 1;
    cpu.set_nz(result);
    result
}

/// Rotate left through carry: carry-in becomes bit 0, old bit 7 becomes the
/// new carry.
fn rol<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let mut tmp = (value as u16) << 1;
    if cpu.flag_c {
        tmp |= 0x01;
    }
    cpu.flag_c = tmp > 0xFF;
    let result = (tmp & 0xFF) as u8;
    cpu.set_nz(result);
    result
}

/// Rotate right through carry: carry-in becomes bit 7, old bit 0 becomes the
/// new carry.
fn ror<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let mut tmp = value as u16;
    if cpu.flag_c {
        tmp |= 0x100;
    }
    cpu.flag_c = tmp & 0x01 != 0;
    let result = (tmp >> 1) as u8;
    cpu.set_nz(result);
    result
}

/// Executes the memory form of ASL.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let result = asl(cpu, m);
    cpu.memory.write(addr, result);
}

/// Executes the accumulator form of ASL.
pub(crate) fn execute_asl_acc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.a = asl(cpu, a);
}

/// Executes the memory form of LSR.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let result = lsr(cpu, m);
    cpu.memory.write(addr, result);
}

/// Executes the accumulator form of LSR.
pub(crate) fn execute_lsr_acc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.a = lsr(cpu, a);
}

/// Executes the memory form of ROL.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let result = rol(cpu, m);
    cpu.memory.write(addr, result);
}

/// Executes the accumulator form of ROL.
pub(crate) fn execute_rol_acc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.a = rol(cpu, a);
}

/// Executes the memory form of ROR.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let m = cpu.memory.read(addr);
    let result = ror(cpu, m);
    cpu.memory.write(addr, result);
}

/// Executes the accumulator form of ROR.
pub(crate) fn execute_ror_acc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.a = ror(cpu, a);
}
