//! Tests for the ADC (Add with Carry) instruction.
//!
//! Covers binary-mode flag behavior (C, Z, V, N), carry-in, and the
//! decimal-mode nibble corrections including the documented NMOS quirk of
//! taking Z from the binary sum before adjustment.

use mos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU reset to 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x8000);
    cpu
}

/// Writes `ADC #operand` at 0x8000.
fn write_adc_immediate(cpu: &mut CPU<FlatMemory>, operand: u8) {
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, operand);
}

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();
    write_adc_immediate(&mut cpu, 0x05);
    cpu.set_a(0x10);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu();
    write_adc_immediate(&mut cpu, 0x05);
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x16); // 0x10 + 0x05 + 1
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_out_and_zero() {
    let mut cpu = setup_cpu();
    write_adc_immediate(&mut cpu, 0xFF);
    cpu.set_a(0x01);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00); // 0x01 + 0xFF wraps
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_overflow_positive_operands() {
    let mut cpu = setup_cpu();

    // 0x50 + 0x50 = 0xA0: two positives yielding a negative
    write_adc_immediate(&mut cpu, 0x50);
    cpu.set_a(0x50);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_overflow_negative_operands() {
    let mut cpu = setup_cpu();

    // 0x80 (-128) + 0xFF (-1) = 0x7F with carry: two negatives yielding a positive
    write_adc_immediate(&mut cpu, 0xFF);
    cpu.set_a(0x80);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_no_overflow_mixed_signs() {
    let mut cpu = setup_cpu();

    // Positive plus negative can never overflow
    write_adc_immediate(&mut cpu, 0xFF);
    cpu.set_a(0x50);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x4F);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();

    // ADC $10
    cpu.memory_mut().write(0x8000, 0x65);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x22);
    cpu.set_a(0x11);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cpu.cycles(), 3);
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_basic() {
    let mut cpu = setup_cpu();

    // BCD: 15 + 27 = 42
    write_adc_immediate(&mut cpu, 0x27);
    cpu.set_a(0x15);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_decimal_carry_out() {
    let mut cpu = setup_cpu();

    // BCD: 58 + 46 + 1 = 105 -> 0x05 with carry
    write_adc_immediate(&mut cpu, 0x46);
    cpu.set_a(0x58);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_no_adjustment_needed() {
    let mut cpu = setup_cpu();

    // BCD: 11 + 22 = 33, neither nibble overflows
    write_adc_immediate(&mut cpu, 0x22);
    cpu.set_a(0x11);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_z_from_binary_sum() {
    let mut cpu = setup_cpu();

    // BCD: 99 + 01 = 0x00 with carry, but the binary sum 0x9A is nonzero so
    // Z stays clear (documented NMOS behavior).
    write_adc_immediate(&mut cpu, 0x01);
    cpu.set_a(0x99);
    cpu.set_flag_d(true);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_decimal_flag_does_not_leak_into_binary() {
    let mut cpu = setup_cpu();

    // With D clear, 0x15 + 0x27 is plain binary.
    write_adc_immediate(&mut cpu, 0x27);
    cpu.set_a(0x15);
    cpu.set_flag_d(false);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x3C);
}
