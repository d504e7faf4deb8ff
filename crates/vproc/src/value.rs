use crate::{Addr, Word};

/// A uniformly represented Manticore value.
///
/// A value is either a pointer to a heap object, which is word aligned and so
/// has a clear low bit, or an immediate with its low bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Value(Word);

/// The immediate representation of `false`.
pub const M_FALSE: Value = Value::immediate(0);
/// The immediate representation of `true`.
pub const M_TRUE: Value = Value::immediate(1);
/// The immediate representation of `unit`.
pub const M_UNIT: Value = Value::immediate(0);
/// The immediate representation of the empty list.
pub const M_NIL: Value = Value::immediate(0);

impl Value {
    /// Tags `n` as an immediate value.
    #[inline]
    pub const fn immediate(n: Word) -> Value {
        Value((n << 1) | 1)
    }

    /// Wraps a heap address.
    #[inline]
    pub const fn from_addr(addr: Addr) -> Value {
        Value(addr)
    }

    /// Returns the raw bits of this value.
    #[inline]
    pub const fn bits(self) -> Word {
        self.0
    }

    /// Is this value a pointer into the heap?
    #[inline]
    pub const fn is_boxed(self) -> bool {
        self.0 & 1 == 0
    }

    /// Returns the payload of an immediate value.
    #[inline]
    pub const fn untag(self) -> Word {
        self.0 >> 1
    }
}

impl Default for Value {
    fn default() -> Value {
        M_UNIT
    }
}
