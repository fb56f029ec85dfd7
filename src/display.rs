//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    ART_VAR_ICON0_OFFSET, BUZZER, BUZZER_TICK_SHIFT, PIC_SET, PIC_SET_MODE_SWITCH, PIC_SET_START,
    RESET_FRAME, TEXT_COLOR_OFFSET, TEXT_FONT_DOTS_OFFSET,
};
use crate::config::Config;
use crate::error::Error;
use crate::frame::{Payload, write_frame, write_header};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver for one DGUS display
///
/// Owns the transport and delay bindings for the lifetime of the session. Every
/// operation sends its frames synchronously and returns once the interface has
/// accepted them. There is no internal locking: share a `Display` between
/// contexts only behind your own mutex.
pub struct Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    /// Serial transport
    interface: I,
    /// Blocking delay used after reset
    delay: D,
    /// Display configuration
    config: Config,
    /// Last page switched to (cached, not read back)
    page_id: u16,
}

impl<I, D> Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    /// Create a new Display instance
    pub fn new(interface: I, delay: D, config: Config) -> Self {
        Self {
            interface,
            delay,
            page_id: config.initial_page,
            config,
        }
    }

    /// Reboot the display controller
    ///
    /// Sends the system reset frame, then blocks for
    /// [`Config::reset_delay_ms`] while the panel boots.
    pub fn reset(&mut self) -> DisplayResult<I> {
        log::debug!("dgus: reset, settling {} ms", self.config.reset_delay_ms);
        self.send(&RESET_FRAME)?;
        self.delay.delay_ms(self.config.reset_delay_ms);
        Ok(())
    }

    /// Switch the displayed page
    ///
    /// The cached page id is only updated once the frame was sent successfully.
    pub fn set_page(&mut self, page_id: u16) -> DisplayResult<I> {
        let [hi, lo] = page_id.to_be_bytes();
        let request = u32::from_be_bytes([PIC_SET_START, PIC_SET_MODE_SWITCH, hi, lo]);
        self.write_variable(PIC_SET, request)?;
        log::debug!("dgus: page {} -> {}", self.page_id, page_id);
        self.page_id = page_id;
        Ok(())
    }

    /// Last page id set with [`set_page`](Self::set_page)
    pub fn page_id(&self) -> u16 {
        self.page_id
    }

    /// Write a fixed-width value to the variable at `vp_addr`
    pub fn write_variable<P: Payload>(&mut self, vp_addr: u16, value: P) -> DisplayResult<I> {
        let frame = write_frame(vp_addr, value);
        self.send(frame.as_bytes())
    }

    // Variable icon (0x00)

    /// Select the image shown by a variable icon
    pub fn var_icon_set_id(&mut self, vp_addr: u16, id: u16) -> DisplayResult<I> {
        self.write_variable(vp_addr, id)
    }

    // Artistic variable (0x03)

    /// Set the value shown by an artistic variable
    pub fn art_var_set_int16(&mut self, vp_addr: u16, value: i16) -> DisplayResult<I> {
        self.write_variable(vp_addr, value)
    }

    /// Set the icon used for digit 0 of an artistic variable
    ///
    /// `sp_addr` is the descriptor pointer of the control.
    pub fn art_var_set_icon0(&mut self, sp_addr: u16, icon_id: u16) -> DisplayResult<I> {
        self.write_variable(sp_addr.wrapping_add(ART_VAR_ICON0_OFFSET), icon_id)
    }

    // Icon rotation (0x05)

    /// Set the angle of a rotating icon
    pub fn rotating_icon_set_angle(&mut self, vp_addr: u16, angle: u16) -> DisplayResult<I> {
        self.write_variable(vp_addr, angle)
    }

    // Data variable (0x10)

    /// Show a 16-bit integer
    pub fn data_var_set_i16(&mut self, vp_addr: u16, value: i16) -> DisplayResult<I> {
        self.write_variable(vp_addr, value)
    }

    /// Show a 32-bit integer
    pub fn data_var_set_i32(&mut self, vp_addr: u16, value: i32) -> DisplayResult<I> {
        self.write_variable(vp_addr, value)
    }

    /// Show a 64-bit integer
    pub fn data_var_set_i64(&mut self, vp_addr: u16, value: i64) -> DisplayResult<I> {
        self.write_variable(vp_addr, value)
    }

    /// Show a single precision float
    pub fn data_var_set_f32(&mut self, vp_addr: u16, value: f32) -> DisplayResult<I> {
        self.write_variable(vp_addr, value)
    }

    /// Show a double precision float
    pub fn data_var_set_f64(&mut self, vp_addr: u16, value: f64) -> DisplayResult<I> {
        self.write_variable(vp_addr, value)
    }

    // Text display (0x11)

    /// Show text in a text display control
    ///
    /// `text` must already be encoded in the font's character set (GB2312,
    /// ASCII, ...). The header and the text go out as two sends back to back; the
    /// interface must not interleave other traffic between them.
    ///
    /// # Errors
    ///
    /// Returns `Error::TextTooLong` if `text` exceeds [`Config::max_text_len`].
    /// Nothing is sent in that case.
    pub fn text_display_set(&mut self, vp_addr: u16, text: &[u8]) -> DisplayResult<I> {
        if text.len() > self.config.max_text_len {
            log::warn!(
                "dgus: text of {} bytes rejected (max {})",
                text.len(),
                self.config.max_text_len
            );
            return Err(Error::TextTooLong {
                max: self.config.max_text_len,
                provided: text.len(),
            });
        }
        let header = write_header(vp_addr, text.len())?;
        self.send(&header)?;
        self.send(text)
    }

    /// Change the font color of a text display control
    pub fn text_display_set_color(&mut self, sp_addr: u16, color: u16) -> DisplayResult<I> {
        self.write_variable(sp_addr.wrapping_add(TEXT_COLOR_OFFSET), color)
    }

    /// Change the font size of a text display control
    pub fn text_display_set_font_dots(&mut self, sp_addr: u16, dots: u16) -> DisplayResult<I> {
        self.write_variable(sp_addr.wrapping_add(TEXT_FONT_DOTS_OFFSET), dots)
    }

    // Buzzer

    /// Sound the buzzer for `ms` milliseconds
    ///
    /// The buzzer counts in 8 ms ticks; the duration is truncated to a multiple
    /// of 8 ms.
    pub fn buzzer(&mut self, ms: u16) -> DisplayResult<I> {
        self.write_variable(BUZZER, ms >> BUZZER_TICK_SHIFT)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface and delay
    pub fn release(self) -> (I, D) {
        (self.interface, self.delay)
    }

    /// Send bytes to the display
    fn send(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        log::trace!("dgus: tx {:02X?}", bytes);
        self.interface.send(bytes).map_err(Error::Interface)
    }
}
