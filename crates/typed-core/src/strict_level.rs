//! Strictness levels a file can be checked at.
//!
//! Every level carries a fixed rank. Levels are totally ordered by that
//! rank and nothing else, so `Autogenerated` (rank 10) compares above `Max`
//! even though it behaves like `Strict` when checking.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How rigorously a file is checked, and which diagnostics apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StrictLevel {
    /// Errors in the checker itself. Nothing can silence them, so this must
    /// stay below every other level.
    Internal = 0,

    /// No user errors are at this level.
    None = 1,

    /// The file is not analyzed at all.
    Ignore = 2,

    /// Minimal, still-moving set of checks.
    Stripe = 3,

    /// Where files start when they opt into checking.
    Typed = 4,

    /// Everything must be declared.
    Strict = 5,

    /// No untyped escapes anywhere in the file.
    Strong = 6,

    /// No errors are suppressed at this level.
    Max = 7,

    // Custom levels mirror a standard level with a tweak and live outside
    // the 0..=7 band.
    /// `Strict`, except constants may be left undefined. Meant for generated
    /// interface files nobody is asked to keep in sync by hand.
    Autogenerated = 10,
}

impl StrictLevel {
    /// Every level, lowest rank first.
    pub const ALL: [StrictLevel; 9] = [
        StrictLevel::Internal,
        StrictLevel::None,
        StrictLevel::Ignore,
        StrictLevel::Stripe,
        StrictLevel::Typed,
        StrictLevel::Strict,
        StrictLevel::Strong,
        StrictLevel::Max,
        StrictLevel::Autogenerated,
    ];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Numeric comparison on rank. Same as `Ord::cmp`.
    #[inline]
    pub fn compare(self, other: StrictLevel) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// `true` when this level is ranked at or above `threshold`.
    ///
    /// Gating decisions ("only report this if the file is at least `Typed`")
    /// should go through here.
    #[inline]
    pub const fn at_least(self, threshold: StrictLevel) -> bool {
        self.rank() >= threshold.rank()
    }

    #[inline]
    pub const fn is_internal(self) -> bool {
        matches!(self, StrictLevel::Internal)
    }

    /// `true` for `Internal` through `Max`; `false` for custom levels.
    #[inline]
    pub const fn is_standard(self) -> bool {
        self.rank() <= StrictLevel::Max.rank()
    }

    pub const fn name(self) -> &'static str {
        match self {
            StrictLevel::Internal => "Internal",
            StrictLevel::None => "None",
            StrictLevel::Ignore => "Ignore",
            StrictLevel::Stripe => "Stripe",
            StrictLevel::Typed => "Typed",
            StrictLevel::Strict => "Strict",
            StrictLevel::Strong => "Strong",
            StrictLevel::Max => "Max",
            StrictLevel::Autogenerated => "Autogenerated",
        }
    }
}

impl PartialOrd for StrictLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StrictLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl fmt::Display for StrictLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that does not match any strictness level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStrictLevelError {
    #[error("unknown strictness level '{input}'")]
    Unknown { input: String },
}

impl FromStr for StrictLevel {
    type Err = ParseStrictLevelError;

    /// Looks up a level by name, ignoring ASCII case. Anything else is an
    /// error; there is no fallback level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match StrictLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
        {
            Some(level) => Ok(level),
            None => {
                tracing::debug!(input = s, "rejected unknown strictness level");
                Err(ParseStrictLevelError::Unknown {
                    input: s.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_match_discriminants() {
        let ranks: Vec<u8> = StrictLevel::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6, 7, 10]);
    }

    #[test]
    fn all_is_sorted_and_unique() {
        for pair in StrictLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn only_autogenerated_is_outside_standard_band() {
        let custom: Vec<_> = StrictLevel::ALL
            .into_iter()
            .filter(|l| !l.is_standard())
            .collect();
        assert_eq!(custom, vec![StrictLevel::Autogenerated]);
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<_> = StrictLevel::ALL.iter().map(|l| l.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StrictLevel::ALL.len());
    }

    #[test]
    fn parse_ignores_ascii_case() {
        assert_eq!("strict".parse::<StrictLevel>(), Ok(StrictLevel::Strict));
        assert_eq!("STRONG".parse::<StrictLevel>(), Ok(StrictLevel::Strong));
        assert_eq!(
            "autoGenerated".parse::<StrictLevel>(),
            Ok(StrictLevel::Autogenerated)
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "stricct".parse::<StrictLevel>().unwrap_err();
        assert_eq!(
            err,
            ParseStrictLevelError::Unknown {
                input: "stricct".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown strictness level 'stricct'");
    }
}
