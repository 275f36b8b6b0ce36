//! Token dump configuration
//!
//! Controls how `bndlex lex` renders a token stream.

use clap::ValueEnum;

/// Token dump configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Output format
    pub format: DumpFormat,
    /// Whether to print each token's text
    pub show_text: bool,
    /// Whether to print each token's resume state
    pub show_state: bool,
    /// Maximum number of characters of token text in text output (0 = unlimited)
    pub max_text_width: usize,
}

/// Output format for token dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DumpFormat {
    /// One token per line
    #[default]
    Text,
    /// JSON array of token records
    Json,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            format: DumpFormat::Text,
            show_text: true,
            show_state: true,
            max_text_width: 60,
        }
    }
}

impl DumpConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: DumpFormat) -> Self {
        self.format = format;
        self
    }

    /// Show or hide token text
    pub fn with_text(mut self, show: bool) -> Self {
        self.show_text = show;
        self
    }

    /// Show or hide resume states
    pub fn with_state(mut self, show: bool) -> Self {
        self.show_state = show;
        self
    }

    /// Set the text truncation width
    pub fn with_max_text_width(mut self, width: usize) -> Self {
        self.max_text_width = width;
        self
    }
}
