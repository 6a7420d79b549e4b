//! A command line parser with typed flag sets and single-level subcommands
//!
//! This crate parses command lines of the form:
//! ```text
//! prog --verbose options --count=3
//! prog --verbose=false count
//! ```
//!
//! A root [`FlagSet`] owns the global flags. Tokens are scanned left to
//! right: everything matching flag syntax (`--name`, `--name=value`,
//! `--name value`) is consumed and coerced to the flag's declared kind; the
//! first token that is not a flag ends the flag region, and it plus every
//! token after it is returned verbatim as leftover. The first leftover token
//! names a [`Subcommand`] in the [`Registry`], which parses the remaining
//! tokens against its own independent [`FlagSet`] before executing with
//! access to both.
//!
//! # Syntax
//!
//! - `--name value` and `--name=value` set a typed flag. A single leading
//!   dash works too.
//! - A bool flag by itself means `true`; a literal `true`/`false` may follow.
//! - A bare `--` ends the flag region.
//! - Flags must precede positionals; nothing after the first positional is
//!   treated as a flag.

mod command;
mod flagset;
mod parser;

pub use command::help;
pub use command::{Registry, Subcommand};
pub use flagset::{FlagDefinition, FlagKind, FlagSet, FlagValue};
pub use parser::{parse, ParseResult};

/// A variant of this enum is returned when flag definitions, subcommand
/// registrations, or the command line itself are invalid
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("flag '{0}' is already defined")]
    DuplicateFlag(String),
    #[error("flag '{0}' is not defined")]
    UnknownFlag(String),
    #[error("'{token}' is not a recognized flag")]
    UnrecognizedFlag { token: String },
    #[error("option '{flag}' requires a value")]
    MissingValue { flag: String },
    #[error("invalid {kind} value '{value}' for flag '{flag}'")]
    TypeCoercion {
        flag: String,
        value: String,
        kind: FlagKind,
    },
    #[error("subcommand '{0}' is already registered")]
    DuplicateSubcommand(String),
    #[error("'{0}' is not a valid subcommand")]
    UnknownSubcommand(String),
}
