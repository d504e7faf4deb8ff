use manticore_vproc::{FRAME_SZB, MIXED_TAG_BITS, VP_HEAP_SZB};

/// Build-time constants shared between the runtime and the code generator
/// that do not come from the layout of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConstants {
    /// Bytes reserved for spilled registers in every stack frame.
    pub spill_area_szb: usize,
    /// Bits taken by the tag of a mixed-type object header.
    pub mixed_tag_bits: u32,
    /// Size of a vproc's heap segment. Must be a power of two.
    pub vp_heap_szb: usize,
}

impl Default for BuildConstants {
    /// The constants the runtime was built with.
    fn default() -> BuildConstants {
        BuildConstants {
            spill_area_szb: FRAME_SZB,
            mixed_tag_bits: MIXED_TAG_BITS,
            vp_heap_szb: VP_HEAP_SZB,
        }
    }
}
