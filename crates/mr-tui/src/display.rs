//! Glyph selection for the terminal display
//!
//! Picks between Unicode block glyphs and a plain-ASCII fallback.

use mr_core::render::{AsciiGlyphs, BlockGlyphs, GlyphSet};
use strum::{Display, EnumString, VariantNames};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Plain ASCII characters.
    Ascii,
    /// Solid Unicode block characters.
    Block,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    // Check LANG, LC_ALL, or LC_CTYPE for "UTF-8"
    let vars = ["LANG", "LC_ALL", "LC_CTYPE"];
    for var in vars {
        if let Ok(val) = std::env::var(var) {
            let upper = val.to_uppercase();
            if upper.contains("UTF-8") || upper.contains("UTF8") {
                return true;
            }
        }
    }

    // Most modern terminals default to UTF-8; TERM is the last hint.
    if let Ok(term) = std::env::var("TERM") {
        if term == "xterm-256color" || term == "alacritty" || term == "kitty" || term == "iterm" {
            return true;
        }
    }

    false
}

/// Returns the glyph set for the requested mode.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Ascii => Box::new(AsciiGlyphs),
        GraphicsMode::Block => Box::new(BlockGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(BlockGlyphs)
            } else {
                Box::new(AsciiGlyphs)
            }
        }
    }
}
