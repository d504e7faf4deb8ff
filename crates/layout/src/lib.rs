//! Layout constants shared between the Manticore runtime and its code
//! generator.
//!
//! Compiled code reads and writes the fields of a
//! [`VProc`](manticore_vproc::VProc) directly, so the code generator has to
//! know where rustc placed them. This crate measures the layout of the
//! runtime's own definitions, together with a handful of sizes and masks,
//! and renders the results as an SML structure that is compiled into the
//! code generator.
//!
//! The measurements describe the target this crate is compiled for. Building
//! the constants for a different target, or for a host whose word size or
//! endianness differs from the execution host, is not supported.

#![deny(missing_docs)]

mod block;
mod config;
mod error;
mod extract;
mod field;
mod sizes;

pub use crate::block::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::extract::*;
pub use crate::field::*;
pub use crate::sizes::*;
