//! Text Shaper
//!
//! Single-pass composer: normalization, Lam-Alef ligatures, contextual
//! forms, then reversal into visual order.

use serde::{Deserialize, Serialize};

use crate::codes::CodeUnits;
use super::arabic::{lam_alef_ligature, select_form};
use super::normalize::normalize_units;
use super::script::is_script_char;

/// Output order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDirection {
    /// Reverse the shaped units for a left-to-right-only renderer
    #[default]
    RightToLeft,
    /// Keep logical order (renderer reorders itself)
    LeftToRight,
}

/// Text shaper configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaperConfig {
    /// Output order
    pub direction: TextDirection,
    /// Disable Lam-Alef ligatures
    pub no_ligatures: bool,
}

/// Arabic text shaper
///
/// Holds only its configuration; all tables are static, so a shaper can be
/// copied freely and used from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextShaper {
    config: ShaperConfig,
}

impl TextShaper {
    /// Create a new text shaper
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shaper from an existing configuration
    pub fn with_config(config: ShaperConfig) -> Self {
        Self { config }
    }

    /// Set output order
    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.config.direction = direction;
        self
    }

    /// Disable ligatures
    pub fn no_ligatures(mut self) -> Self {
        self.config.no_ligatures = true;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &ShaperConfig {
        &self.config
    }

    /// Shape text into a presentation-form string.
    ///
    /// Text without any Arabic code unit is returned exactly as given,
    /// diacritics and all. Otherwise the whole result is reversed, including
    /// any embedded Latin words or digits.
    pub fn shape(&self, text: &str) -> String {
        String::from_utf16_lossy(&self.shape_utf16(text))
    }

    /// Shape text, returning UTF-16 code units.
    ///
    /// Characters outside the BMP are treated as two non-Arabic units, so
    /// after reversal their surrogates are swapped.
    pub fn shape_utf16(&self, text: &str) -> Vec<u16> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.shape_units(&units)
    }

    /// Shape raw UTF-16 code units.
    ///
    /// Unpaired surrogates are accepted and pass through as non-Arabic units.
    pub fn shape_units(&self, units: &[u16]) -> Vec<u16> {
        if units.is_empty() {
            return Vec::new();
        }

        let clean = normalize_units(units);

        if !clean.iter().any(|&unit| is_script_char(unit)) {
            tracing::trace!(len = units.len(), "No Arabic text, returning input unchanged");
            return units.to_vec();
        }

        let (mut shaped, ligatures) = self.compose(&clean);

        if self.config.direction == TextDirection::RightToLeft {
            shaped.reverse();
        }

        tracing::trace!(
            normalized_len = clean.len(),
            ligatures,
            codes = %CodeUnits(&shaped),
            "Shaped text"
        );

        shaped
    }

    /// Shape every cell of a table row independently
    pub fn shape_cells<S: AsRef<str>>(&self, cells: &[S]) -> Vec<String> {
        cells.iter().map(|cell| self.shape(cell.as_ref())).collect()
    }

    /// Build the logical-order unit sequence, returning it with the number
    /// of ligatures formed.
    fn compose(&self, clean: &[u16]) -> (Vec<u16>, usize) {
        let mut shaped = Vec::with_capacity(clean.len());
        let mut ligatures = 0;
        let mut i = 0;

        while i < clean.len() {
            let unit = clean[i];
            let prev = i.checked_sub(1).map(|p| clean[p]);
            let next = clean.get(i + 1).copied();

            if !self.config.no_ligatures {
                if let Some(ligature) = lam_alef_ligature(unit, prev, next) {
                    shaped.push(ligature);
                    ligatures += 1;
                    i += 2;
                    continue;
                }
            }

            if is_script_char(unit) {
                shaped.push(select_form(unit, prev, next));
            } else {
                shaped.push(unit);
            }
            i += 1;
        }

        (shaped, ligatures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let shaper = TextShaper::new();
        assert_eq!(shaper.config().direction, TextDirection::RightToLeft);
        assert!(!shaper.config().no_ligatures);
    }

    #[test]
    fn test_compose_counts_ligatures() {
        let shaper = TextShaper::new();
        let clean: Vec<u16> = "\u{0628}\u{0644}\u{0627}".encode_utf16().collect();
        let (shaped, ligatures) = shaper.compose(&clean);
        assert_eq!(shaped, vec![0xFE91, 0xFEFC]);
        assert_eq!(ligatures, 1);
    }

    #[test]
    fn test_logical_order() {
        let shaper = TextShaper::new().direction(TextDirection::LeftToRight);
        assert_eq!(shaper.shape("\u{0641}\u{0646}"), "\u{FED3}\u{FEE6}");
    }

    #[test]
    fn test_unpaired_surrogate_passes_through() {
        let shaper = TextShaper::new();
        // Lone high surrogate does not connect, so Beh stays isolated
        assert_eq!(shaper.shape_units(&[0xD83D, 0x0628]), vec![0xFE8F, 0xD83D]);
        assert_eq!(shaper.shape_units(&[0xD83D, 0x0041]), vec![0xD83D, 0x0041]);
    }

    #[test]
    fn test_no_ligatures() {
        let shaper = TextShaper::new().no_ligatures();
        // Lam initial, Alef final, reversed
        assert_eq!(shaper.shape("\u{0644}\u{0627}"), "\u{FE8E}\u{FEDF}");
    }

    #[test]
    fn test_shape_cells_keeps_column_order() {
        let shaper = TextShaper::new();
        let row = shaper.shape_cells(&["ID", "\u{0641}\u{0646}", ""]);
        assert_eq!(row, vec!["ID".to_string(), "\u{FEE6}\u{FED3}".to_string(), String::new()]);
    }

    #[test]
    fn test_config_round_trips_through_builder() {
        let config = ShaperConfig {
            direction: TextDirection::LeftToRight,
            no_ligatures: true,
        };
        assert_eq!(TextShaper::with_config(config).config(), &config);
    }
}
