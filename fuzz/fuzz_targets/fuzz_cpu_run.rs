//! Fuzz target for CPU execution.
//!
//! This target creates arbitrary CPU states and memory contents, then runs
//! a bounded number of instructions to find panics and state-machine
//! violations.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{CycleMethod, FlatMemory, MemoryBus, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions the fuzzer controls
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at the start address
    program: [u8; 32],
    /// Zero page contents (pointers for the indirect modes)
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    instruction_budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Vectors: IRQ/BRK at 0x9000, NMI at 0x9100 (both hold RTI-able code)
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0x91);

    for (i, &byte) in input.memory.program.iter().enumerate() {
        memory.write(0x8000 + i as u16, byte);
    }
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.reset(0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let before = cpu.cycles();
    let consumed = cpu.run(
        input.instruction_budget as i32,
        CycleMethod::InstructionCount,
    );

    // The run loop must account for every cycle it reports, and the status
    // byte must always compose with the constant-one bit.
    assert_eq!(cpu.cycles() - before, consumed);
    assert_eq!(cpu.status() & 0b0010_0000, 0b0010_0000);
});
