use crate::{Addr, Value};
use core::sync::atomic::AtomicBool;

/// The state of a virtual processor.
///
/// One `VProc` lives at the start of each vproc's heap segment. Compiled
/// code reads and writes some of the word-sized fields that come before `id`
/// at offsets extracted from this definition; the rest are only used by the
/// runtime.
#[derive(Debug)]
#[repr(C)]
pub struct VProc {
    /// Set while the vproc is executing Manticore code, as opposed to
    /// runtime or foreign code.
    pub in_manticore: Value,
    /// Set while the vproc is inside an atomic region, which masks
    /// preemption.
    pub atomic: Value,
    /// Set when a signal has arrived that has not been delivered yet.
    pub sig_pending: Value,
    /// Set when the vproc is idle and waiting for work.
    pub sleeping: Value,
    /// Top of the scheduler action stack, a list of [`SchedActStkItem`]s.
    pub action_stk: Value,
    /// Continuation of the scheduler, captured on preemption.
    pub sched_cont: Value,
    /// Trivial continuation used when resuming without a result.
    pub dummy_k: Value,
    /// Continuation that wakes a sleeping vproc.
    pub wakeup_cont: Value,
    /// Head of the local ready queue.
    pub rdy_q_hd: Value,
    /// Tail of the local ready queue.
    pub rdy_q_tl: Value,
    /// Messages sent by other vprocs, consumed at the next safe point.
    pub landing_pad: Value,
    /// Argument register saved across a call into the runtime.
    pub std_arg: Value,
    /// Environment pointer saved across a call into the runtime.
    pub std_env_ptr: Value,
    /// Return continuation saved across a call into the runtime.
    pub std_cont: Value,
    /// Exception handler continuation saved across a call into the runtime.
    pub std_exn_cont: Value,
    /// Next free word in the local heap.
    pub alloc_ptr: Addr,
    /// Allocation limit. Compiled code enters the runtime when an allocation
    /// would cross it; the runtime zeroes it to force a safe point.
    pub limit_ptr: Addr,

    /// Index of this vproc.
    pub id: u32,
    /// Set when the host thread running this vproc has been told to stop.
    pub shutdown: AtomicBool,
    /// Base of the nursery in the local heap.
    pub nursery_base: Addr,
    /// Top of the old region in the local heap.
    pub old_top: Addr,
    /// Start of the current global-heap chunk.
    pub global_next_w: Addr,
    /// End of the current global-heap chunk.
    pub global_limit: Addr,
    /// Number of bytes allocated in the local heap since the last minor
    /// collection.
    pub n_bytes_alloc: u64,
}

/// One frame of the scheduler action stack.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct SchedActStkItem {
    /// The scheduler action.
    pub act: Value,
    /// The rest of the stack.
    pub next: Value,
}
