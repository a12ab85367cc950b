//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode metadata table that serves as the
//! single source of truth for instruction decode.
//!
//! The table currently covers the load/store, arithmetic, and
//! increment/decrement groups (58 opcodes). Every other entry is an
//! unoccupied slot marked with the "???" mnemonic; dispatching one is a
//! diagnostic, not a crash.
//!
//! Each occupied entry includes:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing penalties)
//! - Whether the page-crossing penalty applies to this opcode

use crate::addressing::AddressingMode;

/// Metadata for a single 6502 opcode.
///
/// This struct contains all static information about an instruction needed
/// for decoding and cycle accounting. Operand size is implicit in the
/// addressing mode: resolution consumes the operand bytes at PC.
///
/// # Examples
///
/// ```
/// use rp2a03::{OPCODE_TABLE, AddressingMode};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert!(lda_imm.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for unoccupied slots).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    ///
    /// Occupied entries have cycles in the range 2-7. Unoccupied slots are
    /// marked with 0 cycles.
    pub base_cycles: u8,

    /// Whether a page crossing during address resolution costs an extra
    /// cycle for this opcode.
    ///
    /// False for stores and for read-modify-write instructions, which always
    /// pay the extra bus cycle and fold it into `base_cycles` instead.
    pub page_cross_penalty: bool,

    /// Whether this opcode has an instruction behind it. Dispatching an
    /// entry with `implemented: false` produces a diagnostic and an error.
    pub implemented: bool,
}

/// Filler for decode-table slots with no instruction behind them.
const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    addressing_mode: AddressingMode::Implied,
    base_cycles: 0,
    page_cross_penalty: false,
    implemented: false,
};

/// Shorthand for a table entry that honors the page-crossing penalty.
const fn entry(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        page_cross_penalty: true,
        implemented: true,
    }
}

/// Shorthand for a table entry that always pays its full cycle cost
/// (stores, read-modify-write).
const fn entry_no_penalty(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        page_cross_penalty: false,
        implemented: true,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use rp2a03::OPCODE_TABLE;
///
/// let sta_abs_x = &OPCODE_TABLE[0x9D];
/// assert_eq!(sta_abs_x.mnemonic, "STA");
/// assert_eq!(sta_abs_x.base_cycles, 5);
/// assert!(!sta_abs_x.page_cross_penalty);
///
/// // Unoccupied slots are tolerated, not executed
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, "???");
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_opcode_table();

const fn build_opcode_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::{
        Absolute, AbsoluteX, AbsoluteY, Immediate, Implied, IndirectX, IndirectY, ZeroPage,
        ZeroPageX, ZeroPageY,
    };

    let mut table = [ILLEGAL; 256];

    // LDA
    table[0xA9] = entry("LDA", Immediate, 2);
    table[0xA5] = entry("LDA", ZeroPage, 3);
    table[0xB5] = entry("LDA", ZeroPageX, 4);
    table[0xAD] = entry("LDA", Absolute, 4);
    table[0xBD] = entry("LDA", AbsoluteX, 4);
    table[0xB9] = entry("LDA", AbsoluteY, 4);
    table[0xA1] = entry("LDA", IndirectX, 6);
    table[0xB1] = entry("LDA", IndirectY, 5);

    // LDX
    table[0xA2] = entry("LDX", Immediate, 2);
    table[0xA6] = entry("LDX", ZeroPage, 3);
    table[0xB6] = entry("LDX", ZeroPageY, 4);
    table[0xAE] = entry("LDX", Absolute, 4);
    table[0xBE] = entry("LDX", AbsoluteY, 4);

    // LDY
    table[0xA0] = entry("LDY", Immediate, 2);
    table[0xA4] = entry("LDY", ZeroPage, 3);
    table[0xB4] = entry("LDY", ZeroPageX, 4);
    table[0xAC] = entry("LDY", Absolute, 4);
    table[0xBC] = entry("LDY", AbsoluteX, 4);

    // STA
    table[0x85] = entry("STA", ZeroPage, 3);
    table[0x95] = entry("STA", ZeroPageX, 4);
    table[0x8D] = entry("STA", Absolute, 4);
    table[0x9D] = entry_no_penalty("STA", AbsoluteX, 5);
    table[0x99] = entry_no_penalty("STA", AbsoluteY, 5);
    table[0x81] = entry_no_penalty("STA", IndirectX, 6);
    table[0x91] = entry_no_penalty("STA", IndirectY, 6);

    // STX
    table[0x86] = entry("STX", ZeroPage, 3);
    table[0x96] = entry("STX", ZeroPageY, 4);
    table[0x8E] = entry("STX", Absolute, 4);

    // STY
    table[0x84] = entry("STY", ZeroPage, 3);
    table[0x94] = entry("STY", ZeroPageX, 4);
    table[0x8C] = entry("STY", Absolute, 4);

    // ADC
    table[0x69] = entry("ADC", Immediate, 2);
    table[0x65] = entry("ADC", ZeroPage, 3);
    table[0x75] = entry("ADC", ZeroPageX, 4);
    table[0x6D] = entry("ADC", Absolute, 4);
    table[0x7D] = entry("ADC", AbsoluteX, 4);
    table[0x79] = entry("ADC", AbsoluteY, 4);
    table[0x61] = entry("ADC", IndirectX, 6);
    table[0x71] = entry("ADC", IndirectY, 5);

    // SBC
    table[0xE9] = entry("SBC", Immediate, 2);
    table[0xE5] = entry("SBC", ZeroPage, 3);
    table[0xF5] = entry("SBC", ZeroPageX, 4);
    table[0xED] = entry("SBC", Absolute, 4);
    table[0xFD] = entry("SBC", AbsoluteX, 4);
    table[0xF9] = entry("SBC", AbsoluteY, 4);
    table[0xE1] = entry("SBC", IndirectX, 6);
    table[0xF1] = entry("SBC", IndirectY, 5);

    // INC
    table[0xE6] = entry("INC", ZeroPage, 5);
    table[0xF6] = entry("INC", ZeroPageX, 6);
    table[0xEE] = entry("INC", Absolute, 6);
    table[0xFE] = entry_no_penalty("INC", AbsoluteX, 7);

    // DEC
    table[0xC6] = entry("DEC", ZeroPage, 5);
    table[0xD6] = entry("DEC", ZeroPageX, 6);
    table[0xCE] = entry("DEC", Absolute, 6);
    table[0xDE] = entry_no_penalty("DEC", AbsoluteX, 7);

    // INX, INY, DEX, DEY
    table[0xE8] = entry("INX", Implied, 2);
    table[0xC8] = entry("INY", Implied, 2);
    table[0xCA] = entry("DEX", Implied, 2);
    table[0x88] = entry("DEY", Implied, 2);

    table
}
