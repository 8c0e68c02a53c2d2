//! Level thresholds for diagnostic classes.
//!
//! Each class of diagnostic is tagged with the lowest file level it applies
//! to. Classes tagged `Internal` are critical and apply to every file no
//! matter what level the file declares.

use std::fmt;

use crate::StrictLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticClass {
    pub code: u16,
    pub min_level: StrictLevel,
}

impl DiagnosticClass {
    pub const fn new(code: u16, min_level: StrictLevel) -> Self {
        DiagnosticClass { code, min_level }
    }

    #[inline]
    pub const fn is_critical(self) -> bool {
        self.min_level.is_internal()
    }

    /// Whether a file checked at `file_level` gets this diagnostic.
    #[inline]
    pub const fn applies_to(self, file_level: StrictLevel) -> bool {
        self.is_critical() || file_level.at_least(self.min_level)
    }
}

impl fmt::Display for DiagnosticClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.code, self.min_level)
    }
}
