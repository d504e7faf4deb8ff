//! Descriptors for the fields whose offsets are extracted.

use heck::ToLowerCamelCase;
use std::borrow::Cow;
use std::fmt;
use std::mem::MaybeUninit;

/// A field of `T` whose byte offset is published to the code generator.
///
/// A descriptor pairs the field's declared name with an accessor that
/// projects a pointer to a `T` onto a pointer to the field. Descriptors are
/// normally built with [`field_offset!`](crate::field_offset).
pub struct FieldOffset<T> {
    field: &'static str,
    symbol: Option<&'static str>,
    project: fn(*const T) -> *const u8,
}

impl<T> FieldOffset<T> {
    /// Creates a descriptor for `field`.
    ///
    /// `project` must only compute the address of the field within the
    /// pointed-to `T`; it must not read through the pointer.
    #[doc(hidden)]
    pub fn new(field: &'static str, project: fn(*const T) -> *const u8) -> Self {
        FieldOffset {
            field,
            symbol: None,
            project,
        }
    }

    /// Emits this field under `symbol` rather than a name derived from the
    /// field's own name.
    pub fn with_symbol(mut self, symbol: &'static str) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// The name of the field in the Rust definition of `T`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The name of the constant emitted for this field.
    ///
    /// This is the explicit symbol if one was given, and otherwise the field
    /// name in lowerCamelCase (`sig_pending` becomes `sigPending`).
    pub fn symbol(&self) -> Cow<'static, str> {
        match self.symbol {
            Some(symbol) => Cow::Borrowed(symbol),
            None => Cow::Owned(self.field.to_lower_camel_case()),
        }
    }

    /// Returns whether `name` refers to this field, either by its Rust name
    /// or by its emitted symbol.
    pub fn matches(&self, name: &str) -> bool {
        self.field == name || self.symbol() == name
    }

    /// Computes the byte offset of this field within `T`.
    ///
    /// The offset is taken by subtracting the address of a zeroed local `T`
    /// from the address of its field, so it is whatever rustc laid out for
    /// this build.
    pub fn offset(&self) -> usize {
        let instance = MaybeUninit::<T>::zeroed();
        let base = instance.as_ptr();
        let field = (self.project)(base);
        let offset = field.addr() - base.addr();
        log::trace!(
            "{}: base {:p}, field {:p}, offset {offset}",
            self.field,
            base,
            field
        );
        debug_assert!(offset <= std::mem::size_of::<T>());
        offset
    }
}

impl<T> Clone for FieldOffset<T> {
    fn clone(&self) -> Self {
        FieldOffset {
            field: self.field,
            symbol: self.symbol,
            project: self.project,
        }
    }
}

impl<T> fmt::Debug for FieldOffset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOffset")
            .field("field", &self.field)
            .field("symbol", &self.symbol())
            .finish()
    }
}

/// Builds a [`FieldOffset`] for a field of a struct.
///
/// ```ignore
/// let stack = field_offset!(VProc, action_stk);
/// let env = field_offset!(VProc, std_env_ptr => "stdPtr");
/// ```
#[macro_export]
macro_rules! field_offset {
    ($ty:ty, $field:ident) => {
        $crate::FieldOffset::<$ty>::new(stringify!($field), |base: *const $ty| {
            // SAFETY: `base` always points at a live, zeroed `MaybeUninit`
            // owned by `FieldOffset::offset`, and `addr_of!` only computes
            // the field's address without reading it.
            unsafe { ::core::ptr::addr_of!((*base).$field).cast::<u8>() }
        })
    };
    ($ty:ty, $field:ident => $symbol:literal) => {
        $crate::field_offset!($ty, $field).with_symbol($symbol)
    };
}
