//! Sizes and masks that do not depend on the layout of the `VProc`.

use crate::BuildConstants;
use manticore_vproc::{Value, Word};
use std::mem::{align_of, size_of};

/// Sizes and alignments of the primitive types compiled code manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordConstants {
    /// Size of a machine word.
    pub word_szb: usize,
    /// Alignment of a machine word.
    pub word_align_b: usize,
    /// Size of a boolean, which the runtime represents as a full value.
    pub bool_szb: usize,
    /// Alignment of the widest floating-point type.
    pub extended_align_b: usize,
}

/// Limits on stack frames and heap objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConstants {
    /// Bytes reserved for spilled registers in every stack frame.
    pub spill_area_szb: usize,
    /// Largest object, in bytes, whose length fits in a mixed-object header.
    pub max_object_szb: usize,
}

/// Returns the sizes of words, booleans and floats on this host.
pub fn compute_word_constants() -> WordConstants {
    WordConstants {
        word_szb: size_of::<Word>(),
        word_align_b: align_of::<Word>(),
        bool_szb: size_of::<Value>(),
        extended_align_b: align_of::<f64>(),
    }
}

/// Returns the frame and object limits for `build`.
pub fn compute_frame_constants(build: &BuildConstants) -> FrameConstants {
    FrameConstants {
        spill_area_szb: build.spill_area_szb,
        max_object_szb: max_object_size(size_of::<Word>(), build.mixed_tag_bits),
    }
}

/// Computes the largest object size representable in a header word of
/// `bytes_per_word` bytes once `tag_bits` of it are taken by the tag.
pub fn max_object_size(bytes_per_word: usize, tag_bits: u32) -> usize {
    let bits_per_word = bytes_per_word * 8;
    (bits_per_word - tag_bits as usize) * bytes_per_word
}

/// Returns the mask that maps any address within a heap segment of
/// `heap_segment_szb` bytes to the start of that segment.
///
/// `heap_segment_szb` must be a power of two and segments must be aligned to
/// their size; the runtime guarantees both.
pub fn compute_heap_mask(heap_segment_szb: usize) -> usize {
    !(heap_segment_szb - 1)
}
