//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! frame construction ([`FrameError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`FrameError`] - Caller contract violations caught before anything is sent
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level serial errors
//!
//! ## Example
//!
//! ```
//! use dgus::{Builder, BuilderError};
//!
//! let result = Builder::new().max_text_len(1024).build();
//! assert!(matches!(result, Err(BuilderError::TextLimitTooLarge { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors raised while laying out a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The body does not fit in a single frame
    ///
    /// A frame body (opcode + address + payload) is limited to
    /// [`MAX_FRAME_BODY`](crate::command::MAX_FRAME_BODY) bytes.
    BodyTooLarge {
        /// Largest payload accepted
        max: usize,
        /// Payload length provided
        provided: usize,
    },
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BodyTooLarge { max, provided } => {
                write!(f, "Frame body too large: max {max} bytes, provided {provided}")
            }
        }
    }
}

impl core::error::Error for FrameError {}

/// Errors that can occur when talking to the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (UART)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The request could not be encoded into a valid frame
    Frame(FrameError),
    /// Text is longer than the configured limit
    ///
    /// See [`Builder::max_text_len()`](crate::config::Builder::max_text_len).
    TextTooLong {
        /// Configured limit in bytes
        max: usize,
        /// Text length in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> From<FrameError> for Error<I> {
    fn from(error: FrameError) -> Self {
        Self::Frame(error)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::Frame(e) => write!(f, "{e}"),
            Self::TextTooLong { max, provided } => {
                write!(f, "Text too long: max {max} bytes, provided {provided}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Text limit exceeds what one frame can carry
    TextLimitTooLarge {
        /// Requested limit in bytes
        requested: usize,
        /// Largest supported limit
        max: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TextLimitTooLarge { requested, max } => write!(
                f,
                "Text limit {requested} bytes exceeds frame capacity (max {max})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MAX_PAYLOAD;
    use alloc::string::ToString;

    #[test]
    fn test_frame_error_message() {
        let error = FrameError::BodyTooLarge {
            max: 246,
            provided: 300,
        };
        assert_eq!(
            error.to_string(),
            "Frame body too large: max 246 bytes, provided 300"
        );
    }

    #[test]
    fn test_builder_error_message() {
        let error = BuilderError::TextLimitTooLarge {
            requested: 512,
            max: MAX_PAYLOAD,
        };
        assert_eq!(
            error.to_string(),
            "Text limit 512 bytes exceeds frame capacity (max 246)"
        );
    }
}
