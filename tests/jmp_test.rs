//! Tests for the JMP instruction, including the NMOS indirect page-wrap bug.

use mos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU reset to 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x8000);
    cpu
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();

    // JMP $1234
    cpu.memory_mut().write(0x8000, 0x4C);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();

    // JMP ($1000) with pointer 0x1000/0x1001 -> 0x4321
    cpu.memory_mut().write(0x8000, 0x6C);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x10);
    cpu.memory_mut().write(0x1000, 0x21);
    cpu.memory_mut().write(0x1001, 0x43);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x4321);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_jmp_does_not_touch_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x4C);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x10);
    cpu.set_flag_z(true);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[cfg(not(feature = "cmos-indirect-jmp"))]
#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let mut cpu = setup_cpu();

    // JMP ($10FF): the target low byte comes from $10FF, but the high byte
    // comes from $1000 (not $1100) because the pointer increment never
    // carries into the high byte.
    cpu.memory_mut().write(0x8000, 0x6C);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x10);
    cpu.memory_mut().write(0x10FF, 0x34);
    cpu.memory_mut().write(0x1000, 0x12);
    cpu.memory_mut().write(0x1100, 0x78);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
}

#[cfg(feature = "cmos-indirect-jmp")]
#[test]
fn test_jmp_indirect_cmos_fix_crosses_page() {
    let mut cpu = setup_cpu();

    // With the CMOS fix, JMP ($10FF) fetches the high byte from $1100.
    cpu.memory_mut().write(0x8000, 0x6C);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x10);
    cpu.memory_mut().write(0x10FF, 0x34);
    cpu.memory_mut().write(0x1000, 0x12);
    cpu.memory_mut().write(0x1100, 0x78);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x7834);
}
