//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC: Increment Memory
//! - DEC: Decrement Memory
//! - INX: Increment X Register
//! - INY: Increment Y Register
//! - DEX: Decrement X Register
//! - DEY: Decrement Y Register

use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
///
/// Adds one (wrapping) to the byte at the effective address. The flag update
/// happens between the read and the write-back, preserving the bus access
/// order a sequence-tracking bus observes.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the result is 0
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let value = cpu.read(addr);
    let result = value.wrapping_add(1);
    cpu.set_zero_and_negative(result);
    cpu.write(addr, result);
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one (wrapping) from the byte at the effective address.
/// Flags as INC.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, addr: u16) {
    let value = cpu.read(addr);
    let result = value.wrapping_sub(1);
    cpu.set_zero_and_negative(result);
    cpu.write(addr, result);
}

/// Executes the INX (Increment X Register) instruction. Flags as INC.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, _addr: u16) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zero_and_negative(cpu.x);
}

/// Executes the INY (Increment Y Register) instruction. Flags as INC.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, _addr: u16) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zero_and_negative(cpu.y);
}

/// Executes the DEX (Decrement X Register) instruction. Flags as INC.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, _addr: u16) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zero_and_negative(cpu.x);
}

/// Executes the DEY (Decrement Y Register) instruction. Flags as INC.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, _addr: u16) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zero_and_negative(cpu.y);
}
