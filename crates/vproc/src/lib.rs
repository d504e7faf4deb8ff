//! Runtime definitions that compiled Manticore code accesses directly.
//!
//! The code generator never calls into the runtime to read or update the
//! fields of a [`VProc`]; it emits loads and stores at fixed byte offsets.
//! Those offsets are not written down anywhere by hand. They are extracted
//! from the types in this crate by `manticore-layout`, which must be compiled
//! for the same target as the runtime it describes.

#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

mod value;
mod vproc;

pub use crate::value::*;
pub use crate::vproc::*;

/// A machine word.
pub type Word = usize;

/// A raw address in the heap.
pub type Addr = usize;

/// Number of bytes in a [`Word`].
pub const WORD_SZB: usize = core::mem::size_of::<Word>();

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// Size of the spill area reserved in every stack frame of compiled code.
pub const FRAME_SZB: usize = 8 * 1024;

/// Number of bits used by the tag of a mixed-type object header.
pub const MIXED_TAG_BITS: u32 = 3;

/// Base-2 logarithm of [`VP_HEAP_SZB`].
pub const VP_HEAP_SZB_LG: u32 = 20;

/// Size of the heap segment owned by each vproc.
///
/// Every segment is aligned to its own size and begins with the owning
/// [`VProc`], so masking any address inside a segment yields the vproc.
pub const VP_HEAP_SZB: usize = 1 << VP_HEAP_SZB_LG;

const _: () = assert!(VP_HEAP_SZB.is_power_of_two());
const _: () = assert!(core::mem::size_of::<VProc>() < VP_HEAP_SZB);
const _: () = assert!(MIXED_TAG_BITS < WORD_BITS);

/// Returns the base address of the heap segment containing `addr`, which is
/// also the address of the vproc that owns that segment.
#[inline]
pub const fn vproc_base(addr: Addr) -> Addr {
    addr & !(VP_HEAP_SZB - 1)
}
