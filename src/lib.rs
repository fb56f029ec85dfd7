//! DWIN DGUS Serial Display Driver
//!
//! A driver for DGUS-class touchscreen HMIs (DWIN T5/T5L) driven over UART.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-io` serial transport, `embedded-hal` v1.0 delays
//! - Page switching, system reset and buzzer control
//! - Integer, float and text variable writes
//! - Descriptor (SP) updates for text color, font size and artistic digits
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use dgus::{Builder, Display, Interface};
//!
//! # struct MockUart;
//! # impl embedded_io::ErrorType for MockUart { type Error = Infallible; }
//! # impl embedded_io::Write for MockUart {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl embedded_hal::delay::DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let uart = MockUart;
//! # let delay = MockDelay;
//! let interface = Interface::new(uart);
//! let config = match Builder::new().model("DMG80480C070").build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, delay, config);
//! let _ = display.reset();
//! let _ = display.set_page(1);
//! let _ = display.data_var_set_f32(0x1000, 23.5);
//! let _ = display.text_display_set(0x2000, b"READY");
//! let _ = display.buzzer(100);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// DGUS protocol constants
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Frame layout and byte-order handling
pub mod frame;
/// Hardware interface abstraction
pub mod interface;

pub use config::{Builder, Config, MAX_TEXT_LEN};
pub use display::Display;
pub use error::{BuilderError, Error, FrameError};
pub use frame::{Payload, WriteFrame, write_frame, write_header};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
