//! The built-in marker table: the theme identifier strings embedded in the
//! Bazaar executable that the redaction pass zeroes out.
//!
//! The table is an explicit constant handed to [`crate::patch::redact`] by
//! the caller, not ambient state read by the core. The scanner and patcher
//! work against arbitrary needle lists; this is merely the list the shipped
//! binary uses.
//!
//! Order matters beyond reporting here: `"Pride Colors"` is a substring of
//! every `"* Pride Colors"` display string and precedes them in the table,
//! so its zero-fill erases the span those longer markers would have matched.
//! The longer entries then match only where they occur without the short
//! form having been seen first. Every occurrence byte-span still gets
//! zeroed either way.

/// Theme marker strings, exactly as they appear in the target binary.
pub const THEME_MARKERS: &[&str] = &[
    "pride-rainbow-flag",
    "pride-rainbow-theme",
    "Pride Colors",
    "lesbian-pride-flag",
    "lesbian-pride-theme",
    "Lesbian Pride Colors",
    "transgender-flag",
    "transgender-theme",
    "Transgender Pride Colors",
    "nonbinary-flag",
    "nonbinary-theme",
    "Nonbinary Pride Colors",
    "bisexual-flag",
    "bisexual-theme",
    "Bisexual Pride Colors",
    "asexual-flag",
    "asexual-theme",
    "Asexual Pride Colors",
    "pansexual-flag",
    "pansexual-theme",
    "Pansexual Pride Colors",
    "aromantic-flag",
    "aromantic-theme",
    "Aromantic Pride Colors",
    "genderfluid-flag",
    "genderfluid-theme",
    "Genderfluid Pride Colors",
    "polysexual-flag",
    "polysexual-theme",
    "Polysexual Pride Colors",
    "omnisexual-flag",
    "omnisexual-theme",
    "Omnisexual Pride Colors",
];
