//! DGUS protocol constants
//!
//! This module defines the frame header, opcodes, system register addresses and
//! descriptor field offsets used to drive a DGUS display over UART.
//!
//! ## Frame Structure
//!
//! Every frame sent to the display follows the same layout:
//!
//! ```text
//! ┌───────┬───────┬────────┬────────┬─────────┬──────────────┐
//! │ 0x5A  │ 0xA5  │ LENGTH │ OPCODE │ ADDRESS │ PAYLOAD      │
//! │ 1B    │ 1B    │ 1B     │ 1B     │ 2B (BE) │ 0-246B (BE)  │
//! └───────┴───────┴────────┴────────┴─────────┴──────────────┘
//! ```
//!
//! LENGTH counts every byte after itself (opcode + address + payload).
//!
//! ## Example
//!
//! ```
//! use dgus::command;
//!
//! assert_eq!(command::FRAME_HEADER, [0x5A, 0xA5]);
//! assert_eq!(command::WRITE_VARIABLE, 0x82);
//! assert_eq!(command::RESET_FRAME.len(), 10);
//! ```

// Framing

/// Frame header (0x5A 0xA5)
///
/// Marks the start of every frame on the link.
pub const FRAME_HEADER: [u8; 2] = [0x5A, 0xA5];

/// Write variable command (0x82)
///
/// Writes the payload into consecutive variable words starting at the address.
pub const WRITE_VARIABLE: u8 = 0x82;

/// Bytes preceding the payload: header (2) + length (1) + opcode (1) + address (2)
pub const FRAME_OVERHEAD: usize = 6;

/// Bytes counted by the length field in addition to the payload: opcode (1) + address (2)
pub const BODY_OVERHEAD: usize = 3;

/// Maximum frame body (everything after the length byte)
///
/// The length byte itself could encode 255, but the controller accepts at most
/// 249 bytes of body per frame.
pub const MAX_FRAME_BODY: usize = 249;

/// Maximum payload carried by one write frame
pub const MAX_PAYLOAD: usize = MAX_FRAME_BODY - BODY_OVERHEAD;

// System registers

/// System reset register (0x0004)
pub const SYSTEM_RESET: u16 = 0x0004;

/// Page switch register (0x0084)
///
/// Takes 4 bytes: D3 = 0x5A (start processing), D2 = mode, D1:D0 = picture id.
pub const PIC_SET: u16 = 0x0084;

/// Start-processing flag written to D3 of [`PIC_SET`]
pub const PIC_SET_START: u8 = 0x5A;

/// Page switch mode written to D2 of [`PIC_SET`]
pub const PIC_SET_MODE_SWITCH: u8 = 0x01;

/// Buzzer register (0x00A0)
///
/// The value is the beep duration in 8 ms ticks.
pub const BUZZER: u16 = 0x00A0;

/// Right shift converting milliseconds to buzzer ticks (8 ms per tick)
pub const BUZZER_TICK_SHIFT: u32 = 3;

/// Full reset frame
///
/// Writes the 0x55AA 0x5AA5 key to [`SYSTEM_RESET`], which reboots the T5 core
/// as if power was cycled.
pub const RESET_FRAME: [u8; 10] = [0x5A, 0xA5, 0x07, 0x82, 0x00, 0x04, 0x55, 0xAA, 0x5A, 0xA5];

/// Default time the display needs to come back after [`RESET_FRAME`]
pub const DEFAULT_RESET_DELAY_MS: u32 = 3000;

// Descriptor (SP) field offsets

/// Artistic variable: icon id shown for digit 0 (SP + 0x03)
pub const ART_VAR_ICON0_OFFSET: u16 = 0x03;

/// Text display: font color (SP + 0x03)
pub const TEXT_COLOR_OFFSET: u16 = 0x03;

/// Text display: font size in dots (SP + 0x0A)
pub const TEXT_FONT_DOTS_OFFSET: u16 = 0x0A;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_frame_targets_reset_register() {
        assert_eq!(&RESET_FRAME[..2], &FRAME_HEADER);
        assert_eq!(RESET_FRAME[2] as usize, RESET_FRAME.len() - 3);
        assert_eq!(RESET_FRAME[3], WRITE_VARIABLE);
        assert_eq!(
            u16::from_be_bytes([RESET_FRAME[4], RESET_FRAME[5]]),
            SYSTEM_RESET
        );
    }

    #[test]
    fn test_max_payload() {
        assert_eq!(MAX_PAYLOAD, 246);
    }
}
