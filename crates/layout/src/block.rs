//! The declaration block handed to the code generator, and its textual form.

use std::borrow::Cow;
use std::fmt;
use std::io;

/// The SML type of plain integer constants.
const INT_TYPE: &str = "IntInf.int";

/// How a constant's value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// A non-negative size, written as a word literal: `val x = 0w8`.
    Word,
    /// An integer, written in decimal: `val x : IntInf.int = 8`.
    Int,
    /// A bit pattern, written in hexadecimal: `val x : IntInf.int = 0xff`.
    HexMask,
}

/// One named constant of the declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConstant {
    /// The name the code generator refers to the constant by.
    pub name: Cow<'static, str>,
    /// The value of the constant.
    pub value: usize,
    /// How the value is written.
    pub notation: Notation,
}

impl LayoutConstant {
    /// A size written as a word literal.
    pub fn word(name: impl Into<Cow<'static, str>>, value: usize) -> Self {
        LayoutConstant {
            name: name.into(),
            value,
            notation: Notation::Word,
        }
    }

    /// A plain integer.
    pub fn int(name: impl Into<Cow<'static, str>>, value: usize) -> Self {
        LayoutConstant {
            name: name.into(),
            value,
            notation: Notation::Int,
        }
    }

    /// A bit mask written in hexadecimal.
    pub fn hex_mask(name: impl Into<Cow<'static, str>>, value: usize) -> Self {
        LayoutConstant {
            name: name.into(),
            value,
            notation: Notation::HexMask,
        }
    }
}

impl fmt::Display for LayoutConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let LayoutConstant { name, value, .. } = self;
        match self.notation {
            Notation::Word => write!(f, "val {name} = 0w{value}"),
            Notation::Int => write!(f, "val {name} : {INT_TYPE} = {value}"),
            Notation::HexMask => write!(f, "val {name} : {INT_TYPE} = {value:#x}"),
        }
    }
}

/// The kinds of constants, in the order their sections are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    /// Sizes and alignments of primitive types.
    WordSizes,
    /// Stack frame and heap object limits.
    FrameSizes,
    /// Offsets of fields within the `VProc`.
    FieldOffsets,
    /// The mask recovering a vproc from a heap address.
    HeapMask,
}

/// A group of constants of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// What kind of constants this section holds.
    pub category: Category,
    /// The comment printed above the constants.
    pub comment: Cow<'static, str>,
    /// The constants, in emission order.
    pub constants: Vec<LayoutConstant>,
}

/// A complete set of layout constants wrapped in an SML structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationBlock {
    /// The name of the structure.
    pub structure: &'static str,
    /// The signature the structure is ascribed.
    pub signature: &'static str,
    /// The sections of the structure, ordered by category.
    pub sections: Vec<Section>,
}

impl DeclarationBlock {
    /// Creates an empty structure `structure : signature`.
    pub fn new(structure: &'static str, signature: &'static str) -> Self {
        DeclarationBlock {
            structure,
            signature,
            sections: Vec::new(),
        }
    }

    /// Appends a section.
    ///
    /// Sections must be pushed in [`Category`] order.
    pub fn push(
        &mut self,
        category: Category,
        comment: impl Into<Cow<'static, str>>,
        constants: Vec<LayoutConstant>,
    ) {
        debug_assert!(
            self.sections.last().map_or(true, |s| s.category < category),
            "section {category:?} pushed out of order"
        );
        self.sections.push(Section {
            category,
            comment: comment.into(),
            constants,
        });
    }

    /// Iterates over every constant in emission order.
    pub fn constants(&self) -> impl Iterator<Item = &LayoutConstant> + '_ {
        self.sections.iter().flat_map(|s| s.constants.iter())
    }

    /// Looks up a constant by name.
    pub fn get(&self, name: &str) -> Option<&LayoutConstant> {
        self.constants().find(|c| c.name == name)
    }

    /// Writes the textual form of this block to `out`.
    pub fn emit(&self, out: &mut dyn io::Write) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "structure {} : {} =", self.structure, self.signature)?;
        writeln!(f, "  struct")?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "  (* {} *)", section.comment)?;
            for constant in &section.constants {
                writeln!(f, "    {constant}")?;
            }
        }
        writeln!(f, "  end (* {} *)", self.structure)
    }
}
