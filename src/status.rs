//! # Status Register
//!
//! The 6502 packs its processor flags into a single byte (P). The bit layout
//! is NV-BDIZC with bit 5 unused; on the 2A03 that bit reads back as 1 after
//! reset.

use bitflags::bitflags;

bitflags! {
    /// Packed status register flags.
    ///
    /// Bit layout:
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, set on reset)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal — has no effect on ADC/SBC on the 2A03)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Carry. For ADC, the carry-out of the 8-bit addition; for SBC, the
        /// inverted borrow (set when no borrow occurred).
        const CARRY = 0b0000_0001;
        /// Zero: set when the result byte is 0x00.
        const ZERO = 0b0000_0010;
        /// Interrupt disable.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode. The 2A03 ignores it in arithmetic.
        const DECIMAL = 0b0000_1000;
        /// Break command.
        const BREAK = 0b0001_0000;
        /// Unused bit; reads as 1 after reset.
        const UNUSED = 0b0010_0000;
        /// Signed overflow of ADC/SBC.
        const OVERFLOW = 0b0100_0000;
        /// Negative: bit 7 of the result.
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// The power-on/reset value: only the unused bit set.
    pub const RESET: Status = Status::UNUSED;
}
