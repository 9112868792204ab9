//! fOS Reshape - Arabic Shaping for Left-to-Right Renderers
//!
//! This crate turns logical-order Arabic text into a presentation-form string
//! that a renderer with no joining or bidi support can place glyph by glyph:
//! - Canonical composition and diacritic (tashkeel) stripping
//! - Script classification by code-point range
//! - Contextual form selection (isolated/final/initial/medial)
//! - Lam-Alef ligature substitution
//! - Whole-string reversal into visual order
//!
//! Strings without any Arabic text are returned untouched.
//!
//! ```
//! assert_eq!(fos_reshape::shape("\u{0644}\u{0627}"), "\u{FEFB}");
//! assert_eq!(fos_reshape::shape("Total"), "Total");
//! ```

pub mod codes;
pub mod shaping;

pub use codes::{format_code_units, parse_code_units};
pub use shaping::{
    CodePointCategory, PositionalForm, ShapeCache, ShapeCacheStats, ShaperConfig, TextDirection,
    TextShaper, classify, is_script_char, normalize, select_form,
};

/// Reshaping error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReshapeError {
    #[error("Invalid code unit: {0}")]
    InvalidCodeUnit(String),

    #[error("Empty code unit list")]
    EmptyCodeList,
}

pub type Result<T> = std::result::Result<T, ReshapeError>;

/// Shape `text` with the default configuration.
///
/// See [`TextShaper::shape`].
pub fn shape(text: &str) -> String {
    TextShaper::new().shape(text)
}

/// Shape `text` with the default configuration, returning raw UTF-16 code units.
pub fn shape_utf16(text: &str) -> Vec<u16> {
    TextShaper::new().shape_utf16(text)
}

/// Shape an optional field; `None` yields an empty string.
pub fn shape_opt(text: Option<&str>) -> String {
    text.map(shape).unwrap_or_default()
}
