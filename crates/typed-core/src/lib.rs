#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

pub mod gate;
mod strict_level;

pub use gate::DiagnosticClass;
pub use strict_level::{ParseStrictLevelError, StrictLevel};

// Short names for the checker and sigil parser.
pub mod prelude {
    pub use crate::gate::DiagnosticClass;
    pub use crate::strict_level::{ParseStrictLevelError, StrictLevel};
}
