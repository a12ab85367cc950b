//! # Addressing Modes
//!
//! This module defines the addressing modes understood by the decode table.
//! Each mode determines how the CPU interprets operand bytes and calculates
//! effective addresses; resolution itself lives in [`crate::cpu::CPU`], which
//! consumes the operand bytes at PC and applies the page-crossing cycle
//! penalty where the mode calls for one.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Immediate (the operand *is* the next byte; the
///   mode yields its address rather than reading past it)
/// - **1 byte**: ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: INX, DEY
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator).
    /// Resolution returns the address of the operand byte itself.
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// The offset is two's-complement in [-128, +127] and is summed against
    /// PC before PC advances past the offset byte.
    Relative,

    /// Full 16-bit address, little-endian.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteY,

    /// Indirect addressing through a 16-bit pointer.
    ///
    /// Example: JMP ($FFFC). Reproduces the hardware page-wrap bug: a pointer
    /// with low byte 0xFF reads its high target byte from the start of the
    /// *same* page.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X). Both pointer bytes are read from the zero page;
    /// the pointer address wraps within it.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y. Both pointer bytes are read from the zero page.
    /// May incur +1 cycle penalty if adding Y crosses a page boundary.
    IndirectY,
}
