//! The module for the `gen-runtime-constants` commands.

mod generate;

pub use self::generate::*;
