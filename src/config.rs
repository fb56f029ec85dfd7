//! Display configuration types and builder

use crate::command::{DEFAULT_RESET_DELAY_MS, MAX_PAYLOAD};
pub use crate::error::BuilderError;

/// Longest text accepted by a single text display write
pub const MAX_TEXT_LEN: usize = MAX_PAYLOAD;

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Panel model name, informational only
    pub model: Option<&'static str>,
    /// Page assumed to be shown before the first page switch
    pub initial_page: u16,
    /// Time to wait after a reset before the display accepts frames
    pub reset_delay_ms: u32,
    /// Longest text accepted by [`Display::text_display_set`](crate::Display::text_display_set)
    pub max_text_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: None,
            initial_page: 0,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            max_text_len: MAX_TEXT_LEN,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use dgus::Builder;
///
/// let config = match Builder::new()
///     .model("DMG80480C070")
///     .max_text_len(64)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel model name
    pub fn model(mut self, model: &'static str) -> Self {
        self.config.model = Some(model);
        self
    }

    /// Set the page id cached before the first page switch
    pub fn initial_page(mut self, page: u16) -> Self {
        self.config.initial_page = page;
        self
    }

    /// Set the settle time after a reset
    ///
    /// Defaults to 3000 ms, which covers the T5 boot time.
    pub fn reset_delay_ms(mut self, ms: u32) -> Self {
        self.config.reset_delay_ms = ms;
        self
    }

    /// Limit the length of text writes
    ///
    /// Useful when text variables are configured with a smaller buffer on the
    /// panel side. Cannot exceed [`MAX_TEXT_LEN`].
    pub fn max_text_len(mut self, len: usize) -> Self {
        self.config.max_text_len = len;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::TextLimitTooLarge` if the text limit exceeds
    /// [`MAX_TEXT_LEN`]
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.max_text_len > MAX_TEXT_LEN {
            return Err(BuilderError::TextLimitTooLarge {
                requested: self.config.max_text_len,
                max: MAX_TEXT_LEN,
            });
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.reset_delay_ms, 3000);
        assert_eq!(config.max_text_len, 246);
        assert_eq!(config.initial_page, 0);
        assert_eq!(config.model, None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new()
            .model("DMG48270C043")
            .initial_page(3)
            .reset_delay_ms(500)
            .max_text_len(32)
            .build()
            .unwrap();
        assert_eq!(config.model, Some("DMG48270C043"));
        assert_eq!(config.initial_page, 3);
        assert_eq!(config.reset_delay_ms, 500);
        assert_eq!(config.max_text_len, 32);
    }

    #[test]
    fn test_builder_rejects_text_limit_above_frame_capacity() {
        let result = Builder::new().max_text_len(512).build();
        assert_eq!(
            result,
            Err(BuilderError::TextLimitTooLarge {
                requested: 512,
                max: MAX_TEXT_LEN
            })
        );
    }
}
