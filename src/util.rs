/// Reports a broken tree invariant.
///
/// Debug builds panic (or abort, see `abort_on_panic`). Release builds ignore the violation and let the caller fall back to the left-priority rule.
#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub fn contract_violation(msg: &str) {
    #[cfg(debug_assertions)]
    {
        // Those panics are always in a tree corruption context, so we should
        // just abort the process to prevent unwinders from collecting corrupted data
        abort_on_panic(|| panic!("tree invariant violated: {}", msg))
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = msg;
    }
}

#[inline]
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "unwind_safety")]
    {
        std::panic::catch_unwind(
            std::panic::AssertUnwindSafe(f)
        ).unwrap_or_else(|_| std::process::abort())
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        f()
    }
}
