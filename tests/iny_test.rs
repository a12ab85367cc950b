//! Tests for the INY (Increment Y Register) instruction.

use rp2a03::{FlatMemory, MemoryBus, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_iny_basic() {
    let mut cpu = setup_cpu();

    // INY (0xC8)
    cpu.write(0x8000, 0xC8);
    cpu.set_y(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x11);
    assert!(!cpu.is_flag_set(Status::ZERO));
    assert!(!cpu.is_flag_set(Status::NEGATIVE));
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_iny_wraps_ff_to_zero() {
    let mut cpu = setup_cpu();

    cpu.write(0x8000, 0xC8);
    cpu.set_y(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.is_flag_set(Status::ZERO));
}

#[test]
fn test_iny_sets_negative() {
    let mut cpu = setup_cpu();

    cpu.write(0x8000, 0xC8);
    cpu.set_y(0x7F);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.is_flag_set(Status::NEGATIVE));
}

#[test]
fn test_iny_does_not_touch_accumulator_or_x() {
    let mut cpu = setup_cpu();

    cpu.write(0x8000, 0xC8);
    cpu.set_a(0xAA);
    cpu.set_x(0xBB);
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAA);
    assert_eq!(cpu.x(), 0xBB);
    assert_eq!(cpu.y(), 0x02);
}
