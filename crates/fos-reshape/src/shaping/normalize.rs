//! Pre-shaping normalization.

use unicode_normalization::UnicodeNormalization;

use super::tables::is_diacritic;

/// Compose `text` to NFC and drop every diacritic.
///
/// Composition runs first so that decomposed hamza and madda combine with
/// their Alef or Waw before the marks are stripped.
pub fn normalize(text: &str) -> String {
    text.nfc()
        .filter(|&c| !is_diacritic_char(c))
        .collect()
}

/// Normalize UTF-16 code units.
///
/// Well-formed runs go through [`normalize`]; unpaired surrogates are kept
/// in place untouched.
pub(crate) fn normalize_units(units: &[u16]) -> Vec<u16> {
    let mut clean = Vec::with_capacity(units.len());
    let mut run = String::new();

    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => run.push(c),
            Err(err) => {
                flush_run(&mut run, &mut clean);
                clean.push(err.unpaired_surrogate());
            }
        }
    }
    flush_run(&mut run, &mut clean);

    clean
}

fn flush_run(run: &mut String, clean: &mut Vec<u16>) {
    if !run.is_empty() {
        clean.extend(normalize(run).encode_utf16());
        run.clear();
    }
}

fn is_diacritic_char(c: char) -> bool {
    u16::try_from(u32::from(c)).is_ok_and(is_diacritic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tashkeel() {
        assert_eq!(normalize("\u{0641}\u{064F}\u{0646}"), "\u{0641}\u{0646}");
        assert_eq!(normalize("\u{0628}\u{0651}\u{064E}"), "\u{0628}");
    }

    #[test]
    fn test_composes_before_stripping() {
        // Alef + combining hamza above composes to U+0623 instead of losing the hamza
        assert_eq!(normalize("\u{0627}\u{0654}"), "\u{0623}");
        assert_eq!(normalize("\u{0627}\u{0653}"), "\u{0622}");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize("Status: pending"), "Status: pending");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_units_keep_unpaired_surrogates() {
        assert_eq!(
            normalize_units(&[0xD83D, 0x0641, 0x064F, 0x0646, 0xDE00]),
            vec![0xD83D, 0x0641, 0x0646, 0xDE00]
        );
        assert_eq!(normalize_units(&[0x0627, 0x0654]), vec![0x0623]);
    }

    #[test]
    fn test_superscript_alef() {
        assert_eq!(normalize("\u{0647}\u{0670}\u{0630}\u{0627}"), "\u{0647}\u{0630}\u{0627}");
    }
}
