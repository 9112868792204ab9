//! Script Classification
//!
//! Range-based membership tests for Arabic code units.

use super::tables::{LAM, is_diacritic, lam_alef_forms, presentation_forms};

/// Role of a code unit in the shaping pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePointCategory {
    /// Combining mark, stripped before shaping
    Diacritic,
    /// Lam, starts a Lam-Alef ligature
    LigatureTrigger,
    /// Alef variant that completes a Lam-Alef ligature
    LigatureTarget,
    /// Letter with a four-form table entry
    Shapeable,
    /// Arabic code unit without a table entry (passed through)
    ScriptOther,
    /// Anything outside the Arabic ranges
    NonScript,
}

/// Check if a code unit belongs to the Arabic script
#[inline]
pub fn is_script_char(unit: u16) -> bool {
    // Arabic: U+0600 to U+06FF
    // Arabic Supplement: U+0750 to U+077F
    // Arabic Extended-A: U+08A0 to U+08FF
    // Presentation Forms-A: U+FB50 to U+FDFF
    // Presentation Forms-B: U+FE70 to U+FEFF
    (0x0600..=0x06FF).contains(&unit)
        || (0x0750..=0x077F).contains(&unit)
        || (0x08A0..=0x08FF).contains(&unit)
        || (0xFB50..=0xFDFF).contains(&unit)
        || (0xFE70..=0xFEFF).contains(&unit)
}

/// Classify a code unit
pub fn classify(unit: u16) -> CodePointCategory {
    if is_diacritic(unit) {
        CodePointCategory::Diacritic
    } else if unit == LAM {
        CodePointCategory::LigatureTrigger
    } else if lam_alef_forms(unit).is_some() {
        CodePointCategory::LigatureTarget
    } else if presentation_forms(unit).is_some() {
        CodePointCategory::Shapeable
    } else if is_script_char(unit) {
        CodePointCategory::ScriptOther
    } else {
        CodePointCategory::NonScript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        for unit in [0x0600, 0x06FF, 0x0750, 0x077F, 0x08A0, 0x08FF, 0xFB50, 0xFDFF, 0xFE70, 0xFEFF] {
            assert!(is_script_char(unit), "{unit:04X}");
        }
        for unit in [0x05FF, 0x0700, 0x074F, 0x0780, 0x089F, 0x0900, 0xFB4F, 0xFE00, 0xFE6F, 0xFF00] {
            assert!(!is_script_char(unit), "{unit:04X}");
        }
    }

    #[test]
    fn test_ascii_is_not_script() {
        assert!("Hello, 123".encode_utf16().all(|unit| !is_script_char(unit)));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(0x064F), CodePointCategory::Diacritic);
        assert_eq!(classify(0x0644), CodePointCategory::LigatureTrigger);
        assert_eq!(classify(0x0627), CodePointCategory::LigatureTarget);
        assert_eq!(classify(0x0624), CodePointCategory::Shapeable);
        assert_eq!(classify(0x0628), CodePointCategory::Shapeable);
        assert_eq!(classify(0x0621), CodePointCategory::ScriptOther);
        assert_eq!(classify(0xFE8D), CodePointCategory::ScriptOther);
        assert_eq!(classify(u16::from(b'a')), CodePointCategory::NonScript);
    }
}
