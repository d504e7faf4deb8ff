//! Gathers every constant into a [`DeclarationBlock`].

use crate::{
    BuildConstants, Category, DeclarationBlock, FieldOffset, FrameConstants, LayoutConstant,
    LayoutError, Result, WordConstants, compute_frame_constants, compute_heap_mask,
    compute_word_constants, field_offset,
};
use manticore_vproc::VProc;

/// The name of the generated SML structure.
pub const STRUCTURE_NAME: &str = "RuntimeConstants";

/// The signature the generated structure implements.
pub const SIGNATURE_NAME: &str = "RUNTIME_CONSTS";

/// The `VProc` fields accessed by compiled code, in emission order.
pub fn vproc_fields() -> Vec<FieldOffset<VProc>> {
    vec![
        field_offset!(VProc, in_manticore),
        field_offset!(VProc, atomic),
        field_offset!(VProc, sig_pending),
        field_offset!(VProc, alloc_ptr),
        field_offset!(VProc, limit_ptr),
        field_offset!(VProc, std_arg),
        field_offset!(VProc, std_env_ptr => "stdPtr"),
        field_offset!(VProc, std_cont),
        field_offset!(VProc, std_exn_cont),
        field_offset!(VProc, action_stk),
    ]
}

/// Computes the layout constants of a structure `T` that compiled code
/// accesses directly.
///
/// The extractor must be compiled for the same target, by the same compiler,
/// as the runtime whose layout it reports. There is no way to describe a
/// different target.
#[derive(Debug)]
pub struct LayoutExtractor<T = VProc> {
    name: &'static str,
    build: BuildConstants,
    fields: Vec<FieldOffset<T>>,
}

impl LayoutExtractor<VProc> {
    /// An extractor for the runtime's `VProc`.
    pub fn vproc(build: BuildConstants) -> Self {
        LayoutExtractor::new("VProc", build, vproc_fields())
    }
}

impl<T> LayoutExtractor<T> {
    /// An extractor for the structure called `name` whose tracked fields are
    /// `fields`, listed in emission order.
    pub fn new(name: &'static str, build: BuildConstants, fields: Vec<FieldOffset<T>>) -> Self {
        LayoutExtractor {
            name,
            build,
            fields,
        }
    }

    /// The build-time constants in use.
    pub fn build_constants(&self) -> &BuildConstants {
        &self.build
    }

    /// The tracked fields, in emission order.
    pub fn fields(&self) -> &[FieldOffset<T>] {
        &self.fields
    }

    /// Sizes of the primitive types.
    pub fn word_constants(&self) -> WordConstants {
        compute_word_constants()
    }

    /// Stack frame and object size limits.
    pub fn frame_constants(&self) -> FrameConstants {
        compute_frame_constants(&self.build)
    }

    /// The mask recovering a segment's base from an address inside it.
    pub fn heap_mask(&self) -> usize {
        compute_heap_mask(self.build.vp_heap_szb)
    }

    /// Returns the byte offset of the tracked field `name`, given either as
    /// its Rust name or as its emitted symbol.
    pub fn offset(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .find(|f| f.matches(name))
            .map(FieldOffset::offset)
            .ok_or_else(|| LayoutError::UnknownField {
                structure: self.name,
                name: name.to_string(),
            })
    }

    /// Computes every constant and assembles the declaration block.
    pub fn declaration_block(&self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new(STRUCTURE_NAME, SIGNATURE_NAME);

        let words = self.word_constants();
        log::debug!("{words:?}");
        block.push(
            Category::WordSizes,
            "word size and alignment",
            vec![
                LayoutConstant::word("wordSzB", words.word_szb),
                LayoutConstant::word("wordAlignB", words.word_align_b),
                LayoutConstant::word("boolSzB", words.bool_szb),
                LayoutConstant::word("extendedAlignB", words.extended_align_b),
            ],
        );

        let frame = self.frame_constants();
        log::debug!("{frame:?}");
        block.push(
            Category::FrameSizes,
            "stack size and heap size info",
            vec![
                LayoutConstant::word("spillAreaSzB", frame.spill_area_szb),
                LayoutConstant::word("maxObjectSzB", frame.max_object_szb),
            ],
        );

        let offsets = self
            .fields
            .iter()
            .map(|field| {
                let offset = field.offset();
                log::debug!("offset of {}::{} is {offset}", self.name, field.field());
                LayoutConstant::int(field.symbol(), offset)
            })
            .collect();
        block.push(
            Category::FieldOffsets,
            format!("offsets into the {} structure", self.name),
            offsets,
        );

        let mask = self.heap_mask();
        log::debug!("heap mask for {} byte segments is {mask:#x}", self.build.vp_heap_szb);
        block.push(
            Category::HeapMask,
            format!("mask to get address of {} from alloc pointer", self.name),
            vec![LayoutConstant::hex_mask("vpMask", mask)],
        );

        block
    }
}
