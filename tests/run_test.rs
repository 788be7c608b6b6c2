//! Tests for the run loop: budget accounting in both cycle-count and
//! instruction-count modes, and the illegal-opcode halt path.

use mos6502::{CycleMethod, ExecutionError, FlatMemory, MemoryBus, CPU};

/// CPU reset to 0x8000 with a NOP sled already in place.
fn setup_nop_sled() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    for addr in 0x8000..0x8100 {
        memory.write(addr, 0xEA); // NOP, 2 cycles
    }
    let mut cpu = CPU::new(memory);
    cpu.reset(0x8000);
    cpu
}

#[test]
fn test_run_cycle_budget_exact() {
    let mut cpu = setup_nop_sled();

    let cycles = cpu.run(10, CycleMethod::CycleCount);

    assert_eq!(cycles, 10); // five NOPs
    assert_eq!(cpu.pc(), 0x8005);
    assert_eq!(cpu.cycles(), 10);
}

#[test]
fn test_run_cycle_budget_overshoots_by_instruction_tail() {
    let mut cpu = setup_nop_sled();

    // A budget of 3 starts a second NOP once 2 cycles are spent.
    let cycles = cpu.run(3, CycleMethod::CycleCount);

    assert_eq!(cycles, 4);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_run_instruction_budget() {
    let mut cpu = setup_nop_sled();

    let cycles = cpu.run(7, CycleMethod::InstructionCount);

    assert_eq!(cycles, 14); // seven 2-cycle NOPs
    assert_eq!(cpu.pc(), 0x8007);
}

#[test]
fn test_run_for_cycles_shorthand() {
    let mut cpu = setup_nop_sled();

    let cycles = cpu.run_for_cycles(6);

    assert_eq!(cycles, 6);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_run_zero_budget_is_a_no_op() {
    let mut cpu = setup_nop_sled();

    assert_eq!(cpu.run(0, CycleMethod::CycleCount), 0);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_run_halts_on_illegal_opcode() {
    let mut memory = FlatMemory::new();
    memory.write(0x8000, 0xEA); // NOP
    memory.write(0x8001, 0xEA); // NOP
    memory.write(0x8002, 0x02); // unassigned
    memory.write(0x8003, 0xEA); // never reached

    let mut cpu = CPU::new(memory);
    cpu.reset(0x8000);

    let cycles = cpu.run(1000, CycleMethod::CycleCount);

    // Only the two NOPs count; the illegal fetch itself is free.
    assert_eq!(cycles, 4);
    assert!(cpu.illegal_opcode());
    assert_eq!(cpu.pc(), 0x8003); // PC advanced past the illegal byte
}

#[test]
fn test_run_on_halted_cpu_does_nothing() {
    let mut memory = FlatMemory::new();
    memory.write(0x8000, 0x02);

    let mut cpu = CPU::new(memory);
    cpu.reset(0x8000);
    cpu.run(10, CycleMethod::CycleCount);
    assert!(cpu.illegal_opcode());

    let pc = cpu.pc();
    assert_eq!(cpu.run(10, CycleMethod::CycleCount), 0);
    assert_eq!(cpu.pc(), pc);
}

#[test]
fn test_run_instruction_count_with_illegal() {
    let mut memory = FlatMemory::new();
    memory.write(0x8000, 0x02);

    let mut cpu = CPU::new(memory);
    cpu.reset(0x8000);

    let cycles = cpu.run(5, CycleMethod::InstructionCount);

    assert_eq!(cycles, 0);
    assert!(cpu.illegal_opcode());
}

#[test]
fn test_step_reports_illegal_opcode() {
    let mut memory = FlatMemory::new();
    memory.write(0x8000, 0xFF);

    let mut cpu = CPU::new(memory);
    cpu.reset(0x8000);

    assert_eq!(cpu.step(), Err(ExecutionError::IllegalOpcode(0xFF)));
    assert!(cpu.illegal_opcode());
}

#[test]
fn test_run_counting_loop_program() {
    // LDX #$05 / DEX / BNE -3: a classic countdown loop.
    let mut memory = FlatMemory::new();
    memory.write(0x8000, 0xA2);
    memory.write(0x8001, 0x05);
    memory.write(0x8002, 0xCA);
    memory.write(0x8003, 0xD0);
    memory.write(0x8004, 0xFD); // -3, back to the DEX
    memory.write(0x8005, 0xEA);

    let mut cpu = CPU::new(memory);
    cpu.reset(0x8000);

    // LDX + 5 * (DEX + BNE) = 11 instructions to leave the loop.
    let cycles = cpu.run(11, CycleMethod::InstructionCount);

    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.pc(), 0x8005);
    // LDX 2 + 5 * (2 + 2) = 22 cycles
    assert_eq!(cycles, 22);
}
