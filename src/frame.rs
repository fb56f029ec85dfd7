//! Frame builder
//!
//! Lays out write-variable frames byte for byte. Addresses go out big-endian and
//! payloads are emitted in reverse of their little-endian storage order, so every
//! multi-byte value is big-endian on the wire.
//!
//! ## Example
//!
//! ```
//! use dgus::frame::write_frame;
//!
//! let frame = write_frame(0x1000, 0x1234u16);
//! assert_eq!(frame.as_bytes(), &[0x5A, 0xA5, 0x05, 0x82, 0x10, 0x00, 0x12, 0x34]);
//!
//! let frame = write_frame(0x2000, 1.0f32);
//! assert_eq!(frame.payload(), &[0x3F, 0x80, 0x00, 0x00]);
//! ```

use crate::command::{BODY_OVERHEAD, FRAME_HEADER, FRAME_OVERHEAD, MAX_FRAME_BODY, WRITE_VARIABLE};
use crate::error::FrameError;

/// Widest value a single [`Payload`] can carry
pub const MAX_VALUE_WIDTH: usize = 8;

/// Capacity of a [`WriteFrame`]
pub const MAX_WRITE_FRAME: usize = FRAME_OVERHEAD + MAX_VALUE_WIDTH;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width value that can be written to a display variable
///
/// Implemented for 16, 32 and 64-bit integers and for `f32`/`f64`. Floats are
/// written as their raw IEEE-754 bit pattern.
pub trait Payload: Copy + sealed::Sealed {
    /// Width of the value in bytes (2, 4 or 8)
    const WIDTH: usize;

    /// Write the little-endian representation into `out` (`out.len() == WIDTH`)
    fn write_le(self, out: &mut [u8]);

    /// Read a value back from its little-endian representation
    ///
    /// Returns `None` if `bytes.len() != WIDTH`.
    fn read_le(bytes: &[u8]) -> Option<Self>;

    /// Decode a value from its wire (big-endian) representation
    fn from_wire(wire: &[u8]) -> Option<Self> {
        if wire.len() != Self::WIDTH {
            return None;
        }
        let mut le = [0u8; MAX_VALUE_WIDTH];
        let le = &mut le[..Self::WIDTH];
        le.copy_from_slice(wire);
        reverse_payload(le);
        Self::read_le(le)
    }
}

macro_rules! impl_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Payload for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }

                fn read_le(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$ty>::from_le_bytes)
                }
            }
        )*
    };
}

impl_payload!(u16, i16, u32, i32, u64, i64, f32, f64);

/// Reverse payload bytes in place
///
/// Turns the little-endian storage order into wire order and back.
pub fn reverse_payload(bytes: &mut [u8]) {
    bytes.reverse();
}

/// A complete write-variable frame
///
/// Lives on the stack and is only kept for as long as it takes to send it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteFrame {
    buf: [u8; MAX_WRITE_FRAME],
    len: usize,
}

impl WriteFrame {
    /// Bytes to put on the wire
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Target variable address
    pub fn address(&self) -> u16 {
        u16::from_be_bytes([self.buf[4], self.buf[5]])
    }

    /// Payload bytes in wire order
    pub fn payload(&self) -> &[u8] {
        &self.buf[FRAME_OVERHEAD..self.len]
    }
}

impl AsRef<[u8]> for WriteFrame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Build a frame writing `value` to the variable at `address`
///
/// The frame is `P::WIDTH + 6` bytes long: 8 for 16-bit values, 10 for 32-bit
/// integers and `f32`, 14 for 64-bit integers and `f64`.
pub fn write_frame<P: Payload>(address: u16, value: P) -> WriteFrame {
    let len = FRAME_OVERHEAD + P::WIDTH;
    let mut buf = [0u8; MAX_WRITE_FRAME];

    buf[..2].copy_from_slice(&FRAME_HEADER);
    buf[2] = (len - 3) as u8;
    buf[3] = WRITE_VARIABLE;
    buf[4..6].copy_from_slice(&address.to_be_bytes());

    let payload = &mut buf[FRAME_OVERHEAD..len];
    value.write_le(payload);
    reverse_payload(payload);

    WriteFrame { buf, len }
}

/// Build the header of a write frame whose body is sent separately
///
/// The length byte accounts for `body_len` bytes following the header.
///
/// # Errors
///
/// Returns [`FrameError::BodyTooLarge`] if the frame body would exceed
/// [`MAX_FRAME_BODY`].
pub fn write_header(address: u16, body_len: usize) -> Result<[u8; FRAME_OVERHEAD], FrameError> {
    let frame_body = body_len.saturating_add(BODY_OVERHEAD);
    if frame_body > MAX_FRAME_BODY {
        return Err(FrameError::BodyTooLarge {
            max: MAX_FRAME_BODY - BODY_OVERHEAD,
            provided: body_len,
        });
    }
    let [hi, lo] = address.to_be_bytes();
    Ok([
        FRAME_HEADER[0],
        FRAME_HEADER[1],
        frame_body as u8,
        WRITE_VARIABLE,
        hi,
        lo,
    ])
}
