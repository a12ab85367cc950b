//! # Arithmetic Instructions
//!
//! This module implements the binary-mode arithmetic operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry (inverted borrow)
//!
//! The 2A03 has no decimal mode: the D flag can be set and cleared but never
//! changes what these two instructions compute.

use crate::{MemoryBus, Status, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the value at the effective address plus the carry flag to the
/// accumulator. The sum is computed in 16 bits so the carry-out is visible.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the sum exceeds 0xFF
/// - Zero (Z): Set if the low byte of the sum is 0
/// - Overflow (V): Set when both operands share a sign and the result's sign
///   differs — signed overflow as a pure bit-7 predicate
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let value = cpu.read(addr);

    let a = cpu.a;
    let carry_in: u16 = if cpu.is_flag_set(Status::CARRY) { 1 } else { 0 };
    let sum = a as u16 + value as u16 + carry_in;

    if sum > 0xFF {
        cpu.set_flags(Status::CARRY);
    } else {
        cpu.clear_flags(Status::CARRY);
    }

    if (sum & 0xFF) == 0 {
        cpu.set_flags(Status::ZERO);
    } else {
        cpu.clear_flags(Status::ZERO);
    }

    // Operands with the same sign whose sum has a different sign overflowed:
    // e.g. 0x7F + 0x01 = 0x80 (positive + positive -> negative).
    if (a ^ value) & 0x80 == 0 && (a as u16 ^ sum) & 0x80 != 0 {
        cpu.set_flags(Status::OVERFLOW);
    } else {
        cpu.clear_flags(Status::OVERFLOW);
    }

    if sum & 0x80 != 0 {
        cpu.set_flags(Status::NEGATIVE);
    } else {
        cpu.clear_flags(Status::NEGATIVE);
    }

    cpu.a = (sum & 0xFF) as u8;
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the value at the effective address and the inverted carry
/// (borrow) from the accumulator. The difference is computed in wrapping
/// 16-bit arithmetic so `diff < 0x100` is exactly the no-borrow test.
///
/// # Flag Behavior
///
/// - Carry (C): Set if no borrow occurred
/// - Zero (Z): Set if the low byte of the difference is 0
/// - Overflow (V): Set when the operands differ in sign and the result's
///   sign differs from the accumulator's
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let value = cpu.read(addr);

    let a = cpu.a;
    let borrow_in: u16 = if cpu.is_flag_set(Status::CARRY) { 0 } else { 1 };
    let diff = (a as u16)
        .wrapping_sub(value as u16)
        .wrapping_sub(borrow_in);

    if diff < 0x100 {
        cpu.set_flags(Status::CARRY);
    } else {
        cpu.clear_flags(Status::CARRY);
    }

    if (diff & 0xFF) == 0 {
        cpu.set_flags(Status::ZERO);
    } else {
        cpu.clear_flags(Status::ZERO);
    }

    // e.g. 0x01 - 0x02 = 0xFF: operands differ in sign and the result's sign
    // left the accumulator's, so the signed subtraction overflowed.
    if (a ^ value) & 0x80 != 0 && (a as u16 ^ diff) & 0x80 != 0 {
        cpu.set_flags(Status::OVERFLOW);
    } else {
        cpu.clear_flags(Status::OVERFLOW);
    }

    if diff & 0x80 != 0 {
        cpu.set_flags(Status::NEGATIVE);
    } else {
        cpu.clear_flags(Status::NEGATIVE);
    }

    cpu.a = (diff & 0xFF) as u8;
}
