//! Static shaping tables
//!
//! All tables are keyed by UTF-16 code unit and live in read-only statics.
//! Presentation forms are taken from Arabic Presentation Forms-B.

/// Lam, the only ligature trigger
pub const LAM: u16 = 0x0644;

/// Presentation forms as `[isolated, final, initial, medial]`.
///
/// Sorted by base code unit for binary search. Right-joining letters reuse
/// their isolated and final forms in the initial and medial slots.
static PRESENTATION_FORMS: [(u16, [u16; 4]); 35] = [
    (0x0622, [0xFE81, 0xFE82, 0xFE81, 0xFE82]), // Alef with madda
    (0x0623, [0xFE83, 0xFE84, 0xFE83, 0xFE84]), // Alef with hamza above
    (0x0624, [0xFE85, 0xFE86, 0xFE85, 0xFE86]), // Waw with hamza
    (0x0625, [0xFE87, 0xFE88, 0xFE87, 0xFE88]), // Alef with hamza below
    (0x0626, [0xFE89, 0xFE8A, 0xFE8B, 0xFE8C]), // Yeh with hamza
    (0x0627, [0xFE8D, 0xFE8E, 0xFE8D, 0xFE8E]), // Alef
    (0x0628, [0xFE8F, 0xFE90, 0xFE91, 0xFE92]), // Beh
    (0x0629, [0xFE93, 0xFE94, 0xFE93, 0xFE94]), // Teh marbuta
    (0x062A, [0xFE95, 0xFE96, 0xFE97, 0xFE98]), // Teh
    (0x062B, [0xFE99, 0xFE9A, 0xFE9B, 0xFE9C]), // Theh
    (0x062C, [0xFE9D, 0xFE9E, 0xFE9F, 0xFEA0]), // Jeem
    (0x062D, [0xFEA1, 0xFEA2, 0xFEA3, 0xFEA4]), // Hah
    (0x062E, [0xFEA5, 0xFEA6, 0xFEA7, 0xFEA8]), // Khah
    (0x062F, [0xFEA9, 0xFEAA, 0xFEA9, 0xFEAA]), // Dal
    (0x0630, [0xFEAB, 0xFEAC, 0xFEAB, 0xFEAC]), // Thal
    (0x0631, [0xFEAD, 0xFEAE, 0xFEAD, 0xFEAE]), // Reh
    (0x0632, [0xFEAF, 0xFEB0, 0xFEAF, 0xFEB0]), // Zain
    (0x0633, [0xFEB1, 0xFEB2, 0xFEB3, 0xFEB4]), // Seen
    (0x0634, [0xFEB5, 0xFEB6, 0xFEB7, 0xFEB8]), // Sheen
    (0x0635, [0xFEB9, 0xFEBA, 0xFEBB, 0xFEBC]), // Sad
    (0x0636, [0xFEBD, 0xFEBE, 0xFEBF, 0xFEC0]), // Dad
    (0x0637, [0xFEC1, 0xFEC2, 0xFEC3, 0xFEC4]), // Tah
    (0x0638, [0xFEC5, 0xFEC6, 0xFEC7, 0xFEC8]), // Zah
    (0x0639, [0xFEC9, 0xFECA, 0xFECB, 0xFECC]), // Ain
    (0x063A, [0xFECD, 0xFECE, 0xFECF, 0xFED0]), // Ghain
    (0x0641, [0xFED1, 0xFED2, 0xFED3, 0xFED4]), // Feh
    (0x0642, [0xFED5, 0xFED6, 0xFED7, 0xFED8]), // Qaf
    (0x0643, [0xFED9, 0xFEDA, 0xFEDB, 0xFEDC]), // Kaf
    (0x0644, [0xFEDD, 0xFEDE, 0xFEDF, 0xFEE0]), // Lam
    (0x0645, [0xFEE1, 0xFEE2, 0xFEE3, 0xFEE4]), // Meem
    (0x0646, [0xFEE5, 0xFEE6, 0xFEE7, 0xFEE8]), // Noon
    (0x0647, [0xFEE9, 0xFEEA, 0xFEEB, 0xFEEC]), // Heh
    (0x0648, [0xFEED, 0xFEEE, 0xFEED, 0xFEEE]), // Waw
    (0x0649, [0xFEEF, 0xFEF0, 0xFEEF, 0xFEF0]), // Alef maksura
    (0x064A, [0xFEF1, 0xFEF2, 0xFEF3, 0xFEF4]), // Yeh
];

/// Get the `[isolated, final, initial, medial]` forms of a base letter
pub fn presentation_forms(unit: u16) -> Option<&'static [u16; 4]> {
    PRESENTATION_FORMS
        .binary_search_by_key(&unit, |&(base, _)| base)
        .ok()
        .map(|index| &PRESENTATION_FORMS[index].1)
}

/// Get the `[isolated, final]` Lam-Alef ligature for an Alef variant
pub fn lam_alef_forms(alef: u16) -> Option<[u16; 2]> {
    match alef {
        0x0622 => Some([0xFEF5, 0xFEF6]), // Lam-Alef with madda
        0x0623 => Some([0xFEF7, 0xFEF8]), // Lam-Alef with hamza above
        0x0625 => Some([0xFEF9, 0xFEFA]), // Lam-Alef with hamza below
        0x0627 => Some([0xFEFB, 0xFEFC]), // Lam-Alef
        _ => None,
    }
}

/// Letters that accept a connection from the previous letter but never
/// connect to the following one.
pub fn is_non_connecting_next(unit: u16) -> bool {
    matches!(
        unit,
        0x0622 | // Alef with madda
        0x0623 | // Alef with hamza above
        0x0624 | // Waw with hamza
        0x0625 | // Alef with hamza below
        0x0627 | // Alef
        0x062F | // Dal
        0x0630 | // Thal
        0x0631 | // Reh
        0x0632 | // Zain
        0x0648 | // Waw
        0x0649 | // Alef maksura
        0xFE8D   // Alef isolated form
    )
}

/// Combining marks removed before shaping
pub fn is_diacritic(unit: u16) -> bool {
    matches!(unit, 0x064B..=0x065F | 0x0670)
}
