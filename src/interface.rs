//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for sending frames to a DGUS display over a serial link.
//!
//! ## Hardware Requirements
//!
//! DGUS panels talk asynchronous full-duplex UART, 8N1 (115200 baud by default).
//! Only the TX line is used by this driver.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dgus::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockUart;
//! # impl embedded_io::ErrorType for MockUart { type Error = Infallible; }
//! # impl embedded_io::Write for MockUart {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! // Wrap any embedded-io writer (UART TX half, USB CDC, ...)
//! let mut interface = Interface::new(MockUart);
//!
//! // Send a raw frame
//! let _ = interface.send(&[0x5A, 0xA5, 0x05, 0x82, 0x00, 0xA0, 0x00, 0x0C]);
//! ```

use core::fmt::Debug;
use embedded_io::Write;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport carrying frames to the display
///
/// This trait abstracts over different hardware implementations, allowing the
/// [`Display`](crate::display::Display) to work with any serial link.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct over an
/// [`embedded_io::Write`] implementation. Implement this trait on your own type
/// if frames must go through a queue, a shared bus arbiter or a test recorder.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Transmit bytes to the display
    ///
    /// The implementation must send all of `bytes` before returning and must not
    /// keep a reference to the slice. Consecutive calls must reach the display
    /// in order and without other traffic in between.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying transport fails.
    fn send(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;
}

impl<T: DisplayInterface + ?Sized> DisplayInterface for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        (**self).send(bytes)
    }
}

/// Errors that can occur at the interface level
///
/// Generic over the serial error type.
#[derive(Debug)]
pub enum InterfaceError<E> {
    /// Writing to the serial port failed
    Write(E),
    /// Flushing the serial port failed
    Flush(E),
}

impl<E: Debug> core::fmt::Display for InterfaceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Write(e) => write!(f, "Serial write error: {e:?}"),
            Self::Flush(e) => write!(f, "Serial flush error: {e:?}"),
        }
    }
}

impl<E: Debug> core::error::Error for InterfaceError<E> {}

/// Serial interface implementation for DGUS displays
///
/// Implements [`DisplayInterface`] for any [`embedded_io::Write`] serial port.
///
/// ## Example
///
/// ```rust,no_run
/// use dgus::{Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # struct MockUart;
/// # impl embedded_io::ErrorType for MockUart { type Error = Infallible; }
/// # impl embedded_io::Write for MockUart {
/// #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
/// #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockDelay;
/// # impl embedded_hal::delay::DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// let interface = Interface::new(MockUart);
///
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, MockDelay, config);
/// ```
#[derive(Debug)]
pub struct Interface<W> {
    /// Serial port (TX side)
    serial: W,
    /// Flush after every send so frames leave the UART FIFO before returning
    flush_each_frame: bool,
}

impl<W> Interface<W>
where
    W: Write,
{
    /// Create a new Interface
    ///
    /// Flushing after each frame is enabled by default.
    pub fn new(serial: W) -> Self {
        Self {
            serial,
            flush_each_frame: true,
        }
    }

    /// Set whether to flush the serial port after each send
    pub fn set_flush_each_frame(&mut self, flush: bool) -> &mut Self {
        self.flush_each_frame = flush;
        self
    }

    /// Get whether the serial port is flushed after each send
    pub fn flush_each_frame(&self) -> bool {
        self.flush_each_frame
    }

    /// Release the serial port
    pub fn release(self) -> W {
        self.serial
    }
}

impl<W> DisplayInterface for Interface<W>
where
    W: Write,
    W::Error: Debug,
{
    type Error = InterfaceError<W::Error>;

    fn send(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.serial.write_all(bytes).map_err(InterfaceError::Write)?;
        if self.flush_each_frame {
            self.serial.flush().map_err(InterfaceError::Flush)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_io::Error for MockError {
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }

    #[derive(Debug, Default)]
    struct MockUart {
        written: Vec<u8>,
        flushes: usize,
        /// Accept at most this many bytes per `write` call
        chunk: usize,
        fail_flush: bool,
    }

    impl embedded_io::ErrorType for MockUart {
        type Error = MockError;
    }

    impl Write for MockUart {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            let n = buf.len().min(self.chunk);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            if self.fail_flush {
                return Err(MockError);
            }
            self.flushes += 1;
            Ok(())
        }
    }

    fn uart(chunk: usize) -> MockUart {
        MockUart {
            chunk,
            ..MockUart::default()
        }
    }

    #[test]
    fn test_send_writes_all_bytes_across_short_writes() {
        let mut interface = Interface::new(uart(3));
        let frame = [0x5A, 0xA5, 0x05, 0x82, 0x00, 0xA0, 0x00, 0x0C];
        assert!(interface.send(&frame).is_ok());
        let uart = interface.release();
        assert_eq!(uart.written, frame);
        assert_eq!(uart.flushes, 1);
    }

    #[test]
    fn test_flush_can_be_disabled() {
        let mut interface = Interface::new(uart(64));
        assert!(interface.flush_each_frame());
        interface.set_flush_each_frame(false);
        assert!(interface.send(&[0x01, 0x02]).is_ok());
        assert_eq!(interface.release().flushes, 0);
    }

    #[test]
    fn test_flush_error_is_reported() {
        let mut interface = Interface::new(MockUart {
            chunk: 64,
            fail_flush: true,
            ..MockUart::default()
        });
        let result = interface.send(&[0x01]);
        assert!(matches!(result, Err(InterfaceError::Flush(MockError))));
    }
}
